use crate::error::{DedevsError, Result};
use serde::{Deserialize, Serialize};

/// マニフェスト内の1ファイル
///
/// `content` はそのままプロジェクトへ書き込まれる（またはインポート解析される）
/// ソーステキスト。`path` の最終セグメントが配置時のファイル名になる。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentFile {
    pub path: String,
    #[serde(default, rename = "type")]
    pub file_type: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl ComponentFile {
    /// パスの最終セグメント（ファイル名）
    pub fn basename(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// レジストリが返すコンポーネントマニフェスト
///
/// レジストリ側で生成され、CLIは読み取り専用で扱う。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentManifest {
    pub name: String,
    #[serde(default, rename = "type")]
    pub manifest_type: Option<String>,
    #[serde(default)]
    pub files: Vec<ComponentFile>,
}

impl ComponentManifest {
    /// JSONからパース
    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| DedevsError::InvalidManifest(format!("Failed to parse manifest: {}", e)))
    }

    /// 全ファイルのソーステキストを列挙（content を持つものだけ）
    pub fn file_contents(&self) -> impl Iterator<Item = &str> {
        self.files.iter().filter_map(|f| f.content.as_deref())
    }
}

#[cfg(test)]
#[path = "manifest_test.rs"]
mod tests;
