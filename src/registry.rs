//! レジストリアクセス層
//!
//! コンポーネントマニフェストとレジストリインデックスの取得を担当する。

pub mod fetcher;
pub mod index;
pub mod manifest;

pub use fetcher::{ManifestSource, RegistryClient};
pub use index::{Category, RegistryIndex, RegistryItem};
pub use manifest::{ComponentFile, ComponentManifest};
