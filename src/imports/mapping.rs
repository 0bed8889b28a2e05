//! ワークスペースエイリアスのマッピングテーブル
//!
//! モノレポ内部の import パスを、消費側プロジェクトで意味を持つ
//! 依存（またはアクション不要）へ対応付ける。

use super::constants::{WORKSPACE_CODE_PREFIX, WORKSPACE_UI_PREFIX, WORKSPACE_UTILS_PATH};

/// ワークスペースエイリアスの解決結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceMapping {
    /// 既にベンダリング済み、あるいはスキャフォールドツールが満たす（アクション不要）
    Vendored,
    /// UIプリミティブとしてインストールする
    UiPrimitive(String),
    /// レジストリコンポーネントとして解決する
    Component(String),
    /// テーブルに載っていないエイリアス（ポリシー上は除外して警告）
    Unknown,
}

/// ワークスペースエイリアスをマッピングテーブルで解決
pub fn map_workspace(specifier: &str) -> WorkspaceMapping {
    if specifier == WORKSPACE_UTILS_PATH {
        return WorkspaceMapping::Vendored;
    }

    if let Some(rest) = specifier.strip_prefix(WORKSPACE_UI_PREFIX) {
        let name = first_segment(rest);
        if name.is_empty() {
            return WorkspaceMapping::Unknown;
        }
        return WorkspaceMapping::UiPrimitive(name.to_string());
    }

    // @repo/shadcn-ui 直下の再エクスポートはベンダリング済み扱い
    if specifier == "@repo/shadcn-ui" || specifier.starts_with("@repo/shadcn-ui/") {
        return WorkspaceMapping::Vendored;
    }

    // @repo/code/<name> はレジストリコンポーネント <name> への参照
    if let Some(rest) = specifier.strip_prefix(WORKSPACE_CODE_PREFIX) {
        let name = first_segment(rest);
        if name.is_empty() {
            return WorkspaceMapping::Unknown;
        }
        return WorkspaceMapping::Component(name.to_string());
    }

    // @repo/code 単体はコンポーネントのインストール過程で満たされる
    if specifier == "@repo/code" {
        return WorkspaceMapping::Vendored;
    }

    WorkspaceMapping::Unknown
}

fn first_segment(path: &str) -> &str {
    path.split('/').next().unwrap_or("")
}

#[cfg(test)]
#[path = "mapping_test.rs"]
mod tests;
