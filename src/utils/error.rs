use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Catalog request failed: {message}")]
    CatalogError { message: String },

    #[error("Requested amount {requested} of product {product_id} exceeds available stock ({available})")]
    StockExceeded {
        product_id: u64,
        requested: u64,
        available: u32,
    },

    #[error("Product {product_id} is not in the cart")]
    ProductNotInCart { product_id: u64 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, CartError>;
