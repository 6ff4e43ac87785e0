use serde::{Deserialize, Serialize};

/// Catalog attributes of a purchasable product, as served by the catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub image: String,
}

/// One cart line: the catalog attributes copied at time of first add, plus the
/// purchased amount. Serialized flat so the stored snapshot keeps the product
/// fields and `amount` at the same level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub amount: u32,
}

/// Point-in-time availability for one product. Consumed once per validation,
/// never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    pub id: u64,
    pub amount: u32,
}
