//! テスト用モックランナー

use super::*;
use std::cell::RefCell;

/// 記録された1回の起動
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
    pub quiet: bool,
}

impl RecordedCall {
    /// "program arg1 arg2 ..." 形式
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// 起動を記録し、指定パターンに一致するコマンドを失敗させるランナー
pub struct MockRunner {
    calls: RefCell<Vec<RecordedCall>>,
    fail_patterns: RefCell<Vec<String>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_patterns: RefCell::new(Vec::new()),
        }
    }

    /// コマンドラインに部分文字列が含まれたら失敗させる
    pub fn fail_when(&self, pattern: &str) {
        self.fail_patterns.borrow_mut().push(pattern.to_string());
    }

    /// 記録された起動一覧
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    /// 記録されたコマンドライン一覧
    pub fn command_lines(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.command_line()).collect()
    }
}

impl ProcessRunner for MockRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        _cwd: &Path,
        quiet: bool,
    ) -> Result<CommandOutput> {
        let call = RecordedCall {
            program: program.to_string(),
            args: args.to_vec(),
            quiet,
        };
        let line = call.command_line();
        self.calls.borrow_mut().push(call);

        let failed = self
            .fail_patterns
            .borrow()
            .iter()
            .any(|pattern| line.contains(pattern.as_str()));

        Ok(CommandOutput {
            success: !failed,
            stdout: String::new(),
            stderr: if failed {
                "mock failure".to_string()
            } else {
                String::new()
            },
        })
    }
}
