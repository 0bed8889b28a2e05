//! 消費側プロジェクトのコンテキスト
//!
//! カレントディレクトリ等の暗黙状態に頼らず、プロジェクトルートを
//! 明示的に持ち回る。存在チェック系は毎回ディスクを読み直す
//! （インストールがプロジェクト状態を変化させるため）。

use crate::error::Result;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// インポート書き換え対象のソース拡張子
pub const SOURCE_EXTENSIONS: &[&str] = &["tsx", "ts", "jsx", "js"];

/// package.json の依存セクション
#[derive(Debug, Clone, Default, Deserialize)]
struct PackageJson {
    #[serde(default)]
    dependencies: HashMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: HashMap<String, String>,
    #[serde(default, rename = "peerDependencies")]
    peer_dependencies: HashMap<String, String>,
}

/// 消費側プロジェクト
#[derive(Debug, Clone)]
pub struct ProjectContext {
    root: PathBuf,
}

impl ProjectContext {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// package.json のパス
    pub fn package_json_path(&self) -> PathBuf {
        self.root.join("package.json")
    }

    /// UIプリミティブディレクトリ（components/ui）
    pub fn ui_dir(&self) -> PathBuf {
        self.root.join("components").join("ui")
    }

    /// コンポーネントディレクトリ
    pub fn components_dir(&self) -> PathBuf {
        self.root.join("components")
    }

    /// 宣言済み依存名の集合
    ///
    /// dependencies / devDependencies / peerDependencies をマージする。
    /// package.json が存在しない場合は `None`。
    pub fn declared_dependencies(&self) -> Result<Option<HashSet<String>>> {
        let path = self.package_json_path();
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)?;
        let manifest: PackageJson = serde_json::from_str(&content)?;

        let mut declared = HashSet::new();
        declared.extend(manifest.dependencies.into_keys());
        declared.extend(manifest.dev_dependencies.into_keys());
        declared.extend(manifest.peer_dependencies.into_keys());
        Ok(Some(declared))
    }

    /// UIプリミティブがディスク上に存在するか（.tsx / .ts）
    pub fn has_ui_primitive(&self, name: &str) -> bool {
        let dir = self.ui_dir();
        dir.join(format!("{}.tsx", name)).exists() || dir.join(format!("{}.ts", name)).exists()
    }

    /// コンポーネントがディスク上に存在するか
    ///
    /// components/ui 直下と components 直下の両方を確認する。
    pub fn has_component(&self, name: &str) -> bool {
        let filename = format!("{}.tsx", name);
        self.ui_dir().join(&filename).exists() || self.components_dir().join(&filename).exists()
    }

    /// components 配下のソースファイルを列挙
    pub fn component_source_files(&self) -> Vec<PathBuf> {
        let dir = self.components_dir();
        if !dir.is_dir() {
            return Vec::new();
        }

        WalkDir::new(&dir)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "project_test.rs"]
mod tests;
