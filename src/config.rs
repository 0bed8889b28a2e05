//! HTTP設定とレジストリ設定

use reqwest::Client;
use std::time::Duration;

/// レジストリのデフォルトベースURL
pub const DEFAULT_REGISTRY_BASE: &str = "https://ui.dedevs.com/";

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト（秒）
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            user_agent: "dedevs-ui-cli".to_string(),
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

/// レジストリ設定
///
/// マニフェストURLとインデックスURLの組み立てを一元化する。
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// ベースURL（末尾スラッシュ付き）
    pub base_url: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_REGISTRY_BASE.to_string(),
        }
    }
}

impl RegistryConfig {
    /// ベースURLを指定して作成（末尾スラッシュを補完）
    pub fn with_base(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    /// コンポーネントマニフェストのURL
    pub fn component_url(&self, name: &str) -> String {
        format!("{}r/{}.json", self.base_url, name)
    }

    /// レジストリ全体インデックスのURL
    pub fn index_url(&self) -> String {
        format!("{}registry.json", self.base_url)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
