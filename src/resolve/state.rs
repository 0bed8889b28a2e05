use crate::imports::ClassifiedDeps;
use crate::registry::ComponentManifest;
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// 解決済みの1コンポーネント
///
/// マニフェストは解決時に取得済みなので、インストール段階での再取得は不要。
#[derive(Debug, Clone)]
pub struct ResolvedComponent {
    pub name: String,
    pub manifest: ComponentManifest,
    pub deps: ClassifiedDeps,
}

/// 解決中に記録された警告（非致命）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionWarning {
    /// 推移的依存のマニフェスト取得失敗（スキップして続行）
    FetchFailed { name: String, reason: String },
    /// マッピングできないワークスペースエイリアス
    UnknownAlias { component: String, specifier: String },
}

impl fmt::Display for ResolutionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionWarning::FetchFailed { name, reason } => {
                write!(f, "Could not fetch component dependency '{}': {}", name, reason)
            }
            ResolutionWarning::UnknownAlias { component, specifier } => {
                write!(
                    f,
                    "Unknown workspace import '{}' in '{}' (skipped)",
                    specifier, component
                )
            }
        }
    }
}

/// 解決結果の全体状態
///
/// 不変条件: 一度 `visited` に入った名前は二度とキューに積まれない。
#[derive(Debug, Clone, Default)]
pub struct ResolutionState {
    /// 処理済みコンポーネント名（失敗してスキップしたものも含む）
    pub visited: HashSet<String>,
    /// インストール対象のnpmパッケージ（集約、決定的順序）
    pub npm_deps: BTreeSet<String>,
    /// インストール対象のUIプリミティブ（集約、決定的順序）
    pub ui_primitives: BTreeSet<String>,
    /// 解決済みコンポーネント（BFS順、先頭がルート）
    pub components: Vec<ResolvedComponent>,
    /// 非致命の警告
    pub warnings: Vec<ResolutionWarning>,
}

impl ResolutionState {
    /// ルートコンポーネント（解決に成功していれば先頭）
    pub fn root(&self) -> Option<&ResolvedComponent> {
        self.components.first()
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
