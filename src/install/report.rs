use crate::output::CommandSummary;

/// 失敗・スキップの記録
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub name: String,
    pub reason: String,
}

impl Failure {
    pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// インストール結果の集約
#[derive(Debug, Clone, Default)]
pub struct InstallReport {
    /// インストールに成功したコンポーネント
    pub installed: Vec<String>,
    /// スキップしたコンポーネント（取得失敗・既存）
    pub skipped: Vec<Failure>,
    /// インストールに失敗したコンポーネント
    pub failed: Vec<Failure>,
    /// インストールに失敗したUIプリミティブ
    pub primitives_failed: Vec<Failure>,
    /// 自動インストールできなかったnpmパッケージ（手動対応用）
    pub manual_deps: Vec<String>,
}

impl InstallReport {
    /// 何らかの失敗があったか（終了コードには影響しない参考情報）
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty() || !self.primitives_failed.is_empty()
    }

    /// サマリ行
    pub fn summary(&self) -> CommandSummary {
        CommandSummary::format(self.installed.len(), self.failed.len())
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
