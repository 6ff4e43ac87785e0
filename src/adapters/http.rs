use crate::core::{Catalog, ConfigProvider, Product, Stock};
use crate::utils::error::{CartError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// 基於 HTTP 的目錄/庫存客戶端，走 json-server 風格的路由：
/// `GET {endpoint}/products/{id}` 與 `GET {endpoint}/stock/{id}`
pub struct HttpCatalog<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> HttpCatalog<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    async fn fetch_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.config.api_endpoint(), path);

        // 構建請求
        let mut request = self.client.get(&url);

        // 設定超時
        if let Some(timeout) = self.config.timeout_seconds() {
            request = request.timeout(std::time::Duration::from_secs(timeout));
        }

        tracing::debug!("📡 GET {}", url);

        // 執行請求
        let response = request.send().await?;
        tracing::debug!("📡 Response status: {}", response.status());

        if !response.status().is_success() {
            return Err(CartError::CatalogError {
                message: format!("API request failed with status: {}", response.status()),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl<C: ConfigProvider> Catalog for HttpCatalog<C> {
    async fn fetch_product(&self, product_id: u64) -> Result<Product> {
        self.fetch_json(&format!("/products/{}", product_id)).await
    }

    async fn fetch_stock(&self, product_id: u64) -> Result<Stock> {
        self.fetch_json(&format!("/stock/{}", product_id)).await
    }
}
