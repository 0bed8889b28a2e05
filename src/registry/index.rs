use serde::{Deserialize, Serialize};

/// レジストリインデックスの1エントリ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// レジストリ全体のインデックス（registry.json）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryIndex {
    #[serde(default)]
    pub items: Vec<RegistryItem>,
}

/// コンポーネントカテゴリ（名前プレフィックスで分類）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Ai,
    Code,
    Defi,
    Site,
    Composables,
    Other,
}

impl Category {
    /// 表示順のカテゴリ一覧
    pub fn all() -> [Category; 6] {
        [
            Category::Ai,
            Category::Code,
            Category::Defi,
            Category::Site,
            Category::Composables,
            Category::Other,
        ]
    }

    /// コンポーネント名から分類
    pub fn of(name: &str) -> Self {
        if name.starts_with("ai-") {
            Category::Ai
        } else if name.starts_with("code-") {
            Category::Code
        } else if name.starts_with("defi-") {
            Category::Defi
        } else if name.starts_with("site-") {
            Category::Site
        } else if name.starts_with("composables-") {
            Category::Composables
        } else {
            Category::Other
        }
    }

    /// 見出し表示用ラベル
    pub fn heading(&self) -> &'static str {
        match self {
            Category::Ai => "🤖 AI Components",
            Category::Code => "💻 Code Components",
            Category::Defi => "💰 Defi Components",
            Category::Site => "🏠 Site Components",
            Category::Composables => "🧩 Composables Components",
            Category::Other => "📦 Other Components",
        }
    }
}

impl RegistryIndex {
    /// カテゴリごとにエントリを分類（元の順序を保持）
    pub fn grouped(&self) -> Vec<(Category, Vec<&RegistryItem>)> {
        Category::all()
            .into_iter()
            .map(|cat| {
                let items: Vec<&RegistryItem> = self
                    .items
                    .iter()
                    .filter(|item| Category::of(&item.name) == cat)
                    .collect();
                (cat, items)
            })
            .filter(|(_, items)| !items.is_empty())
            .collect()
    }

    /// ネットワーク障害時のフォールバック用静的インデックス
    pub fn fallback() -> Self {
        let entries: &[(&str, &str)] = &[
            // ai
            ("ai-branch", "AI conversation branch component for displaying branched conversations"),
            ("ai-conversation", "AI conversation container component"),
            ("ai-input", "AI chat input component with advanced features"),
            ("ai-message", "AI message display component"),
            ("ai-reasoning", "AI reasoning visualization component"),
            ("ai-response", "AI response component with streaming support"),
            ("ai-simple", "Simple AI component for basic interactions"),
            ("ai-source", "AI source attribution component"),
            ("ai-suggestion", "AI suggestion component for prompts and recommendations"),
            ("ai-tool", "AI tool component for function calling interfaces"),
            // utilities
            ("code-block", "Enhanced code block component with syntax highlighting"),
            ("code-editor", "Code editor component"),
            ("code-snippet", "Code snippet component"),
            // defi
            ("defi-ticker", "Ticker component for displaying real-time data"),
            ("defi-orderbook", "Orderbook component for displaying real-time orderbook data"),
            ("defi-chart", "Chart component for displaying real-time data"),
            ("defi-swap", "Swap component for displaying real-time swap data"),
            // site
            ("site-bento", "Bento grid component for showcasing features and content"),
            ("site-kanban", "Kanban board component for showcasing features and content"),
            ("site-features", "Features showcase component with multiple layouts"),
        ];

        Self {
            items: entries
                .iter()
                .map(|(name, description)| RegistryItem {
                    name: name.to_string(),
                    description: Some(description.to_string()),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "index_test.rs"]
mod tests;
