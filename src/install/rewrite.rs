//! インポートパスの書き換え（フェーズD）
//!
//! 生成されたファイル内のワークスペースエイリアスを、消費側プロジェクトで
//! 解決できる公開パスへテキスト置換する。完全なパースはせず、
//! import 節に限定した置換に留める。

use crate::error::DedevsError;
use crate::project::ProjectContext;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static UI_REEXPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s+(\{[^}]*\})\s+from\s+['"]@repo/shadcn-ui/components/ui/([^'"]+)['"]"#)
        .unwrap()
});

static UTILS_REEXPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s+(\{[^}]*\})\s+from\s+['"]@repo/shadcn-ui/lib/utils['"]"#).unwrap()
});

static GENERIC_WORKSPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s+([^\s]+)\s+from\s+['"]@repo/([^'"]+)['"]"#).unwrap()
});

/// 1ファイル分の内容を書き換える（純関数）
pub fn rewrite_imports(content: &str) -> String {
    let step1 = UI_REEXPORT.replace_all(content, "import $1 from '@/components/ui/$2'");
    let step2 = UTILS_REEXPORT.replace_all(&step1, "import $1 from '@/lib/utils'");
    GENERIC_WORKSPACE
        .replace_all(&step2, "import $1 from '$2'")
        .into_owned()
}

/// components 配下の全ソースファイルを書き換える
///
/// 変更のあったファイルだけを書き戻す。読み書きに失敗したファイルは
/// `FileOperation` として記録してスキップする。
pub fn rewrite_project_imports(project: &ProjectContext) -> (usize, Vec<DedevsError>) {
    let mut rewritten = 0;
    let mut warnings = Vec::new();

    for path in project.component_source_files() {
        match rewrite_file(&path) {
            Ok(true) => {
                rewritten += 1;
                println!(
                    "✨ Transformed imports in {}",
                    relative_display(project, &path)
                );
            }
            Ok(false) => {}
            Err(err) => {
                warnings.push(DedevsError::FileOperation {
                    path: path.clone(),
                    message: format!("could not transform imports: {}", err),
                });
            }
        }
    }

    (rewritten, warnings)
}

fn rewrite_file(path: &Path) -> std::io::Result<bool> {
    let content = fs::read_to_string(path)?;
    let transformed = rewrite_imports(&content);

    if transformed == content {
        return Ok(false);
    }
    fs::write(path, transformed)?;
    Ok(true)
}

fn relative_display(project: &ProjectContext, path: &Path) -> String {
    path.strip_prefix(project.root())
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
#[path = "rewrite_test.rs"]
mod tests;
