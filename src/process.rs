//! 外部プロセス実行の抽象化
//!
//! パッケージマネージャとスキャフォールドツールの起動をトレイト越しに行い、
//! テストではモックランナーを注入して実プロセスを起動しない。

use crate::error::Result;
use std::path::Path;
use std::process::{Command, Stdio};

/// 外部コマンドの実行結果
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// 終了コードが0だったか
    pub success: bool,
    /// 捕捉した標準出力（quiet実行時のみ）
    pub stdout: String,
    /// 捕捉した標準エラー（quiet実行時のみ）
    pub stderr: String,
}

/// 外部コマンドを実行する能力
pub trait ProcessRunner {
    /// コマンドを実行して完了を待つ
    ///
    /// `quiet` が true なら stdio を捕捉し、false なら端末へそのまま流す。
    fn run(&self, program: &str, args: &[String], cwd: &Path, quiet: bool)
        -> Result<CommandOutput>;
}

/// 本番用ランナー
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        cwd: &Path,
        quiet: bool,
    ) -> Result<CommandOutput> {
        let mut command = Command::new(program);
        command.args(args).current_dir(cwd);

        if quiet {
            let output = command
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .output()?;
            Ok(CommandOutput {
                success: output.status.success(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        } else {
            let status = command.status()?;
            Ok(CommandOutput {
                success: status.success(),
                stdout: String::new(),
                stderr: String::new(),
            })
        }
    }
}

#[cfg(test)]
pub mod mock;
