use super::*;

#[test]
fn test_map_utils_is_vendored() {
    assert_eq!(
        map_workspace("@repo/shadcn-ui/lib/utils"),
        WorkspaceMapping::Vendored
    );
}

#[test]
fn test_map_shadcn_ui_primitive() {
    assert_eq!(
        map_workspace("@repo/shadcn-ui/components/ui/button"),
        WorkspaceMapping::UiPrimitive("button".to_string())
    );
}

#[test]
fn test_map_shadcn_ui_primitive_with_subpath() {
    // サブパスは先頭セグメントだけを採用
    assert_eq!(
        map_workspace("@repo/shadcn-ui/components/ui/dialog/trigger"),
        WorkspaceMapping::UiPrimitive("dialog".to_string())
    );
}

#[test]
fn test_map_shadcn_ui_root_is_vendored() {
    assert_eq!(map_workspace("@repo/shadcn-ui"), WorkspaceMapping::Vendored);
    assert_eq!(
        map_workspace("@repo/shadcn-ui/hooks/use-toast"),
        WorkspaceMapping::Vendored
    );
}

#[test]
fn test_map_code_path_is_component() {
    assert_eq!(
        map_workspace("@repo/code/tree"),
        WorkspaceMapping::Component("tree".to_string())
    );
}

#[test]
fn test_map_bare_code_is_vendored() {
    assert_eq!(map_workspace("@repo/code"), WorkspaceMapping::Vendored);
}

#[test]
fn test_map_unknown_alias() {
    assert_eq!(map_workspace("@repo/analytics"), WorkspaceMapping::Unknown);
    assert_eq!(
        map_workspace("@repo/typescript-config/base"),
        WorkspaceMapping::Unknown
    );
}

#[test]
fn test_map_empty_trailing_segment() {
    // 末尾スラッシュだけのパスは不明扱い
    assert_eq!(
        map_workspace("@repo/code/"),
        WorkspaceMapping::Unknown
    );
}
