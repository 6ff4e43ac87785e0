pub mod store;

pub use crate::domain::model::{CartItem, Product, Stock};
pub use crate::domain::ports::{Catalog, ConfigProvider, Notifier, Storage};
pub use crate::utils::error::Result;
