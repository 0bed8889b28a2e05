//! extract モジュールのプロパティテスト

use super::*;
use proptest::prelude::*;

/// パッケージ名として有効な文字列（英小文字、数字、ハイフン）
fn package_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,15}".prop_map(|s| s)
}

proptest! {
    /// 抽出は冪等（2回適用しても同じ結果）
    #[test]
    fn prop_extract_idempotent(
        name in package_name_strategy(),
        symbol in "[A-Z][a-zA-Z]{0,10}"
    ) {
        let src = format!("import {{ {} }} from '{}';", symbol, name);
        let first = extract_imports(&src);
        let second = extract_imports(&src);
        prop_assert_eq!(&first, &second);
    }

    /// named import の specifier は必ず回収される
    #[test]
    fn prop_extract_named_finds_specifier(
        name in package_name_strategy(),
        symbol in "[A-Z][a-zA-Z]{0,10}"
    ) {
        let src = format!("import {{ {} }} from '{}';", symbol, name);
        let refs = extract_imports(&src);
        prop_assert_eq!(refs.len(), 1);
        prop_assert_eq!(&refs[0].specifier, &name);
    }

    /// `{ ... }` 節内の改行は結果に影響しない
    #[test]
    fn prop_extract_multiline_equals_single_line(
        name in package_name_strategy(),
        a in "[A-Z][a-zA-Z]{0,8}",
        b in "[A-Z][a-zA-Z]{0,8}"
    ) {
        let single = format!("import {{ {}, {} }} from '{}';", a, b, name);
        let multi = format!("import {{\n  {},\n  {}\n}} from '{}';", a, b, name);
        prop_assert_eq!(extract_imports(&single), extract_imports(&multi));
    }
}
