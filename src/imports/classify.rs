//! インポート参照の分類
//!
//! specifier のプレフィックス規則で種別を判定し、
//! npm依存 / UIプリミティブ / コンポーネント依存の集合へ振り分ける。

use super::constants::{
    is_known_ui_primitive, BUILTIN_PREFIX, DEFAULT_WORKSPACE_SCOPE, FRAMEWORK_PACKAGES,
    LOCAL_ALIAS_PREFIX, RELATIVE_PREFIX, UI_ALIAS_PREFIX,
};
use super::extract::ImportReference;
use super::mapping::{map_workspace, WorkspaceMapping};
use std::collections::BTreeSet;

/// specifier の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    /// 相対パス（無視）
    Relative,
    /// Node.js組み込み（無視）
    Builtin,
    /// `@/` で始まるローカルエイリアス（UIプリミティブ以外は無視）
    LocalAlias,
    /// `@/components/ui/` 配下への参照
    UiPrimitive,
    /// 登録済みワークスペーススコープへの参照
    WorkspaceAlias,
    /// それ以外はnpmパッケージ
    NpmPackage,
}

/// 分類結果の累積集合
///
/// 解決エンジンが累積先として使い回す。`BTreeSet` なので
/// インストールコマンドの引数順序が決定的になる。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedDeps {
    pub npm_deps: BTreeSet<String>,
    pub ui_primitives: BTreeSet<String>,
    pub component_deps: BTreeSet<String>,
    /// マッピングできなかったワークスペースエイリアス（警告用）
    pub unknown_aliases: BTreeSet<String>,
}

impl ClassifiedDeps {
    /// 他の分類結果を取り込む
    pub fn merge(&mut self, other: ClassifiedDeps) {
        self.npm_deps.extend(other.npm_deps);
        self.ui_primitives.extend(other.ui_primitives);
        self.component_deps.extend(other.component_deps);
        self.unknown_aliases.extend(other.unknown_aliases);
    }
}

/// インポート分類器
///
/// ワークスペーススコープは追加登録できる（モノレポごとに異なるため）。
#[derive(Debug, Clone)]
pub struct Classifier {
    workspace_scopes: Vec<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            workspace_scopes: vec![DEFAULT_WORKSPACE_SCOPE.to_string()],
        }
    }
}

impl Classifier {
    /// ワークスペーススコープを追加登録
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.workspace_scopes.push(scope.into());
        self
    }

    /// specifier の種別を判定
    pub fn kind(&self, specifier: &str) -> ImportKind {
        if specifier.starts_with(RELATIVE_PREFIX) {
            return ImportKind::Relative;
        }
        if specifier.starts_with(BUILTIN_PREFIX) {
            return ImportKind::Builtin;
        }
        if specifier.starts_with(UI_ALIAS_PREFIX) {
            return ImportKind::UiPrimitive;
        }
        if specifier.starts_with(LOCAL_ALIAS_PREFIX) {
            return ImportKind::LocalAlias;
        }
        if self
            .workspace_scopes
            .iter()
            .any(|scope| specifier.starts_with(scope.as_str()))
        {
            return ImportKind::WorkspaceAlias;
        }
        ImportKind::NpmPackage
    }

    /// インポート参照の並びを分類して累積集合に取り込む
    pub fn absorb(&self, refs: &[ImportReference], deps: &mut ClassifiedDeps) {
        for reference in refs {
            self.absorb_one(&reference.specifier, deps);
        }
    }

    fn absorb_one(&self, specifier: &str, deps: &mut ClassifiedDeps) {
        match self.kind(specifier) {
            ImportKind::Relative | ImportKind::Builtin | ImportKind::LocalAlias => {}
            ImportKind::UiPrimitive => {
                let rest = &specifier[UI_ALIAS_PREFIX.len()..];
                let name = rest.split('/').next().unwrap_or("");
                if name.is_empty() {
                    return;
                }
                if is_known_ui_primitive(name) {
                    deps.ui_primitives.insert(name.to_string());
                } else {
                    // 既知プリミティブ以外はレジストリコンポーネント依存
                    deps.component_deps.insert(name.to_string());
                }
            }
            ImportKind::WorkspaceAlias => match map_workspace(specifier) {
                WorkspaceMapping::Vendored => {}
                WorkspaceMapping::UiPrimitive(name) => {
                    deps.ui_primitives.insert(name);
                }
                WorkspaceMapping::Component(name) => {
                    deps.component_deps.insert(name);
                }
                WorkspaceMapping::Unknown => {
                    deps.unknown_aliases.insert(specifier.to_string());
                }
            },
            ImportKind::NpmPackage => {
                let package = normalize_package_name(specifier);
                if FRAMEWORK_PACKAGES.contains(&package) {
                    return;
                }
                deps.npm_deps.insert(package.to_string());
            }
        }
    }
}

/// specifier からnpmパッケージ名を正規化
///
/// スコープ付きは `@scope/name`（先頭2セグメント）、
/// スコープなしは先頭セグメントのみ。
fn normalize_package_name(specifier: &str) -> &str {
    let mut indices = specifier.match_indices('/').map(|(i, _)| i);
    let cut = if specifier.starts_with('@') {
        indices.nth(1)
    } else {
        indices.next()
    };
    match cut {
        Some(i) => &specifier[..i],
        None => specifier,
    }
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
