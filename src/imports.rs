//! インポート解析層
//!
//! マニフェスト内ソーステキストから import 文を静的に抽出し、
//! npm依存 / UIプリミティブ / レジストリコンポーネント依存に分類する。

pub mod classify;
pub mod constants;
pub mod extract;
pub mod mapping;

pub use classify::{ClassifiedDeps, Classifier, ImportKind};
pub use extract::{extract_imports, ImportReference};
