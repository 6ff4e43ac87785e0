use crate::domain::model::{Product, Stock};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Persistence sink for the cart snapshot: a key-value store with get/set
/// semantics. `get` yields `None` when nothing was ever stored under the key.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// The catalog/stock oracle: two independent request/response reads, both
/// fallible, neither with side effects.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn fetch_product(&self, product_id: u64) -> Result<Product>;
    async fn fetch_stock(&self, product_id: u64) -> Result<Stock>;
}

/// Fire-and-forget user message sink. No return value, no effect on control
/// flow.
pub trait Notifier: Send + Sync {
    fn report(&self, message: &str);
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn storage_path(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
}
