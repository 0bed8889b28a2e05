//! インストール実行層
//!
//! 解決済みの `ResolutionState` を受け取り、外部ツールの起動と
//! ファイル操作を決まった順序（フェーズA〜F）で実行する。

pub mod orchestrator;
pub mod rename;
pub mod report;
pub mod rewrite;

pub use orchestrator::Installer;
pub use report::{Failure, InstallReport};
