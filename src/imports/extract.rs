//! import 文の静的抽出
//!
//! 機械生成に近い規則的なソースが対象なので正規表現ベースで走査する。
//! 6種類の構文（default / named / default+named / namespace / type-only /
//! side-effect）を独立に認識し、specifier 文字列だけを取り出す。

use regex::Regex;
use std::sync::LazyLock;

/// ソース中に現れた1つのインポート参照
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReference {
    /// ソースに書かれたままのモジュールパス
    pub specifier: String,
}

impl ImportReference {
    pub fn new(specifier: impl Into<String>) -> Self {
        Self {
            specifier: specifier.into(),
        }
    }
}

/// 複数行に折り返された named import を1行に正規化する
///
/// `{ ... }` 節の内側は改行を含みうるため、先に空白を潰しておくと
/// 以降のパターンが行単位の形で適用できる。
static BRACE_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import[^'";{]*\{[^}]*\}\s*from\s*['"][^'"]+['"]"#).unwrap()
});

/// 認識する6種類のインポート構文
///
/// specifier は常にキャプチャグループ1。
static IMPORT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // default: import X from 'pkg'
        r#"import\s+[\w$]+\s+from\s+['"]([^'"]+)['"]"#,
        // named: import { X, Y } from 'pkg'
        r#"import\s*\{[^}]*\}\s*from\s*['"]([^'"]+)['"]"#,
        // default + named: import X, { Y } from 'pkg'
        r#"import\s+[\w$]+\s*,\s*\{[^}]*\}\s*from\s*['"]([^'"]+)['"]"#,
        // namespace: import * as X from 'pkg'
        r#"import\s*\*\s*as\s+[\w$]+\s+from\s+['"]([^'"]+)['"]"#,
        // type-only: import type { X } from 'pkg'
        r#"import\s+type\s*\{[^}]*\}\s*from\s*['"]([^'"]+)['"]"#,
        // side-effect: import 'pkg'
        r#"import\s+['"]([^'"]+)['"]"#,
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// ソーステキストからインポート参照を抽出
///
/// 冪等・副作用なし。同じ入力に対して常に同じ順序で同じ結果を返す。
/// 重複する specifier はそのまま返す（集合化は分類側の責務）。
pub fn extract_imports(source: &str) -> Vec<ImportReference> {
    let normalized = normalize_multiline_imports(source);

    let mut refs = Vec::new();
    for pattern in IMPORT_PATTERNS.iter() {
        for caps in pattern.captures_iter(&normalized) {
            if let Some(m) = caps.get(1) {
                refs.push(ImportReference::new(m.as_str()));
            }
        }
    }
    refs
}

/// `{ ... }` 節内の改行・連続空白を単一スペースに畳む
fn normalize_multiline_imports(source: &str) -> String {
    BRACE_IMPORT
        .replace_all(source, |caps: &regex::Captures| {
            caps[0].split_whitespace().collect::<Vec<_>>().join(" ")
        })
        .into_owned()
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;

#[cfg(test)]
#[path = "proptests.rs"]
mod proptests;
