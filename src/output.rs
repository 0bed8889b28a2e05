use owo_colors::OwoColorize;

pub struct CommandSummary {
    pub prefix: String,
    pub message: String,
}

impl CommandSummary {
    pub fn format(installed: usize, failed: usize) -> Self {
        match (installed, failed) {
            (_, f) if f > 0 => Self {
                prefix: "✗".red().to_string(),
                message: format!("{} installed, {} failed", installed.green(), f.red()),
            },
            (i, _) if i > 0 => Self {
                prefix: "✓".green().to_string(),
                message: format!("{} component(s) installed", i.green()),
            },
            _ => Self {
                prefix: "•".yellow().to_string(),
                message: "Nothing to install".to_string(),
            },
        }
    }
}

/// 警告行を表示（非致命エラー用）
pub fn warn(message: &str) {
    eprintln!("{} {}", "warning:".yellow(), message);
}
