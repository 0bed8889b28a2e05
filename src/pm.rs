//! パッケージマネージャ検出
//!
//! プロジェクトルートのロックファイルの有無で判定する。
//! 副作用なし・冪等。

use std::path::Path;

/// パッケージマネージャ種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManagerKind {
    Pnpm,
    Yarn,
    Bun,
    Npm,
}

impl PackageManagerKind {
    /// コマンド名
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManagerKind::Pnpm => "pnpm",
            PackageManagerKind::Yarn => "yarn",
            PackageManagerKind::Bun => "bun",
            PackageManagerKind::Npm => "npm",
        }
    }

    /// 依存追加サブコマンド（npm だけ install、他は add）
    pub fn install_verb(&self) -> &'static str {
        match self {
            PackageManagerKind::Npm => "install",
            _ => "add",
        }
    }

    /// ロックファイルから検出（固定の優先順位、見つからなければ npm）
    pub fn detect(project_root: &Path) -> Self {
        const LOCKFILES: &[(&str, PackageManagerKind)] = &[
            ("pnpm-lock.yaml", PackageManagerKind::Pnpm),
            ("yarn.lock", PackageManagerKind::Yarn),
            ("bun.lockb", PackageManagerKind::Bun),
            ("bun.lock", PackageManagerKind::Bun),
            ("package-lock.json", PackageManagerKind::Npm),
        ];

        for (lockfile, kind) in LOCKFILES {
            if project_root.join(lockfile).exists() {
                return *kind;
            }
        }
        PackageManagerKind::Npm
    }
}

#[cfg(test)]
#[path = "pm_test.rs"]
mod tests;
