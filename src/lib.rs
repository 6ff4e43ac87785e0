pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CartCommand, CliConfig};

pub use adapters::http::HttpCatalog;
pub use adapters::notify::ConsoleNotifier;
pub use adapters::storage::LocalStorage;
pub use config::FileConfig;
pub use core::store::{CartStore, CART_STORAGE_KEY, OUT_OF_STOCK_MESSAGE};
pub use utils::error::{CartError, Result};
