//! インポート分類用の定数定義

/// 相対インポートのプレフィックス
pub const RELATIVE_PREFIX: &str = ".";

/// Node.js組み込みモジュールのプレフィックス
pub const BUILTIN_PREFIX: &str = "node:";

/// 消費側プロジェクトのローカルエイリアス
pub const LOCAL_ALIAS_PREFIX: &str = "@/";

/// UIプリミティブディレクトリのエイリアス
pub const UI_ALIAS_PREFIX: &str = "@/components/ui/";

/// デフォルトのワークスペーススコープ
pub const DEFAULT_WORKSPACE_SCOPE: &str = "@repo/";

/// ワークスペース内のUIプリミティブ再エクスポートパス
pub const WORKSPACE_UI_PREFIX: &str = "@repo/shadcn-ui/components/ui/";

/// ワークスペース内のユーティリティ再エクスポート
pub const WORKSPACE_UTILS_PATH: &str = "@repo/shadcn-ui/lib/utils";

/// ワークスペース内のクロスコンポーネント参照プレフィックス
pub const WORKSPACE_CODE_PREFIX: &str = "@repo/code/";

/// npm依存から常に除外するフレームワークパッケージ
///
/// これらはピア依存として前提にするか、スキャフォールドツールが扱う。
pub const FRAMEWORK_PACKAGES: &[&str] = &["react", "react-dom", "next"];

/// 既知のUIプリミティブ名
///
/// `@/components/ui/` 配下でこの一覧に載っている名前はプリミティブとして、
/// 載っていない名前はレジストリコンポーネント依存として扱う。
pub const KNOWN_UI_PRIMITIVES: &[&str] = &[
    "button",
    "input",
    "label",
    "textarea",
    "select",
    "dialog",
    "card",
    "tabs",
    "accordion",
    "alert",
    "badge",
    "checkbox",
    "dropdown-menu",
    "form",
    "popover",
    "radio-group",
    "scroll-area",
    "separator",
    "sheet",
    "skeleton",
    "slider",
    "switch",
    "table",
    "toast",
    "toggle",
    "tooltip",
    "avatar",
    "calendar",
    "command",
    "context-menu",
    "hover-card",
    "menubar",
    "navigation-menu",
    "progress",
    "resizable",
    "sonner",
    "toggle-group",
];

/// 既知のUIプリミティブかどうか
pub fn is_known_ui_primitive(name: &str) -> bool {
    KNOWN_UI_PRIMITIVES.contains(&name)
}
