use crate::config::{HttpConfig, RegistryConfig};
use crate::error::{DedevsError, Result};
use crate::registry::index::RegistryIndex;
use crate::registry::manifest::ComponentManifest;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;

/// マニフェストの取得元
///
/// 解決エンジンはこのトレイト越しにマニフェストを取得する。
/// テストではマップベースの実装を注入する。
pub trait ManifestSource {
    /// コンポーネント名からマニフェストを取得
    async fn manifest(&self, name: &str) -> Result<ComponentManifest>;
}

/// レジストリ取得クライアント
///
/// リトライはこの層では行わない（呼び出し側のポリシー）。
pub struct RegistryClient {
    client: Client,
    registry: RegistryConfig,
}

impl RegistryClient {
    /// 設定からクライアントを作成
    pub fn new(http: &HttpConfig, registry: RegistryConfig) -> Self {
        Self {
            client: http.build_client(),
            registry,
        }
    }

    /// コンポーネントマニフェストのURL
    pub fn component_url(&self, name: &str) -> String {
        self.registry.component_url(name)
    }

    /// コンポーネントマニフェストを取得
    ///
    /// 非2xxは `RegistryFetch`、JSON不正は `InvalidManifest` になる。
    pub async fn fetch_component(&self, name: &str) -> Result<ComponentManifest> {
        let url = self.registry.component_url(name);
        let body = self.fetch_text(&url, name).await?;
        ComponentManifest::parse(&body)
    }

    /// レジストリ全体のインデックスを取得
    pub async fn fetch_index(&self) -> Result<RegistryIndex> {
        let url = self.registry.index_url();
        let body = self.fetch_text(&url, "registry").await?;
        serde_json::from_str(&body)
            .map_err(|e| DedevsError::InvalidManifest(format!("Failed to parse registry.json: {}", e)))
    }

    /// スピナー付きでテキストを取得
    async fn fetch_text(&self, url: &str, name: &str) -> Result<String> {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} Fetching {msg}...")
                .unwrap(),
        );
        pb.set_message(name.to_string());

        let result = self.fetch_text_inner(url, name).await;
        pb.finish_and_clear();
        result
    }

    async fn fetch_text_inner(&self, url: &str, name: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();

        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DedevsError::RegistryFetch {
                name: name.to_string(),
                status,
                message: truncate(&message, 200),
            });
        }

        Ok(response.text().await?)
    }
}

impl ManifestSource for RegistryClient {
    async fn manifest(&self, name: &str) -> Result<ComponentManifest> {
        self.fetch_component(name).await
    }
}

/// エラー本文を短縮（長大なHTMLエラーページ対策）
fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        let mut end = max;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}
