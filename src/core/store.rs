use crate::core::{CartItem, Catalog, Notifier, Storage};
use crate::utils::error::{CartError, Result};

/// 購物車快照在持久層使用的固定鍵
pub const CART_STORAGE_KEY: &str = "@small-cart:cart";

/// Shared rejection text for the add and update paths. Both emit exactly this
/// string when a requested amount exceeds the observed stock.
pub const OUT_OF_STOCK_MESSAGE: &str = "Requested quantity exceeds available stock";

/// The cart store: owns the current cart, validates quantity changes against
/// the catalog's stock reads and persists every successful mutation.
///
/// The public operations never return an error. Each one either commits (the
/// new cart is both the in-memory and the persisted value) or leaves state
/// untouched and reports a message through the [`Notifier`].
pub struct CartStore<C: Catalog, S: Storage, N: Notifier> {
    catalog: C,
    storage: S,
    notifier: N,
    items: Vec<CartItem>,
}

impl<C: Catalog, S: Storage, N: Notifier> CartStore<C, S, N> {
    /// 從持久層載入上一次的購物車；缺失或無法解析時從空車開始
    pub async fn load(catalog: C, storage: S, notifier: N) -> Self {
        let items = match storage.get(CART_STORAGE_KEY).await {
            Ok(Some(snapshot)) => match serde_json::from_str::<Vec<CartItem>>(&snapshot) {
                Ok(items) => {
                    tracing::debug!("🛒 Restored cart with {} items", items.len());
                    items
                }
                Err(e) => {
                    tracing::warn!("🛒 Stored cart is unreadable, starting empty: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("🛒 Could not read stored cart, starting empty: {}", e);
                Vec::new()
            }
        };

        Self {
            catalog,
            storage,
            notifier,
            items,
        }
    }

    /// 當前購物車內容（唯讀）
    pub fn cart(&self) -> &[CartItem] {
        &self.items
    }

    /// Add one unit of a product. Creates the line on first add, increments it
    /// afterwards; the catalog attributes are copied at first add and never
    /// refreshed.
    pub async fn add_product(&mut self, product_id: u64) {
        if let Err(error) = self.try_add_product(product_id).await {
            self.reject(error, "Failed to add product");
        }
    }

    /// Remove a product's line entirely. Removing a product that is not in the
    /// cart is a failure, not a no-op.
    pub async fn remove_product(&mut self, product_id: u64) {
        if let Err(error) = self.try_remove_product(product_id).await {
            self.reject(error, "Failed to remove product");
        }
    }

    /// Set the amount of a line that already exists in the cart.
    ///
    /// 非正數的數量視為 UI 的無效輸入，靜默忽略（不報告、不取庫存）
    pub async fn update_product_amount(&mut self, product_id: u64, amount: i64) {
        if amount <= 0 {
            tracing::debug!(
                "Ignoring non-positive amount {} for product {}",
                amount,
                product_id
            );
            return;
        }

        if let Err(error) = self.try_update_amount(product_id, amount as u64).await {
            self.reject(error, "Failed to update product amount");
        }
    }

    async fn try_add_product(&mut self, product_id: u64) -> Result<()> {
        // 兩次獨立的外部讀取：商品屬性與庫存，任一失敗都不改變狀態
        let product = self.catalog.fetch_product(product_id).await?;
        let stock = self.catalog.fetch_stock(product_id).await?;

        let position = self.position_of(product_id);
        let current_amount = position.map(|i| self.items[i].amount).unwrap_or(0);

        // 目標數量在 u32 上限溢位時走同一條庫存不足的拒絕路徑
        let amount = match current_amount.checked_add(1) {
            Some(amount) if amount <= stock.amount => amount,
            _ => {
                return Err(CartError::StockExceeded {
                    product_id,
                    requested: u64::from(current_amount) + 1,
                    available: stock.amount,
                });
            }
        };

        let mut next = self.items.clone();
        match position {
            Some(index) => next[index].amount = amount,
            None => next.push(CartItem { product, amount: 1 }),
        }

        self.commit(next).await
    }

    async fn try_remove_product(&mut self, product_id: u64) -> Result<()> {
        let index = self
            .position_of(product_id)
            .ok_or(CartError::ProductNotInCart { product_id })?;

        let mut next = self.items.clone();
        next.remove(index);

        self.commit(next).await
    }

    async fn try_update_amount(&mut self, product_id: u64, amount: u64) -> Result<()> {
        // 每次更新都重新讀一次庫存
        let stock = self.catalog.fetch_stock(product_id).await?;

        // u32 放不下的數量走庫存不足的拒絕路徑，不截斷
        let amount = match u32::try_from(amount) {
            Ok(amount) if amount <= stock.amount => amount,
            _ => {
                return Err(CartError::StockExceeded {
                    product_id,
                    requested: amount,
                    available: stock.amount,
                });
            }
        };

        // 與 add 不同：更新不存在的商品是失敗
        let index = self
            .position_of(product_id)
            .ok_or(CartError::ProductNotInCart { product_id })?;

        let mut next = self.items.clone();
        next[index].amount = amount;

        self.commit(next).await
    }

    fn position_of(&self, product_id: u64) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.product.id == product_id)
    }

    /// 提交：先寫入持久層，成功後才替換記憶體中的購物車。
    /// 寫入失敗時記憶體保持舊值，兩邊不會分歧。
    async fn commit(&mut self, next: Vec<CartItem>) -> Result<()> {
        let snapshot = serde_json::to_string(&next)?;
        self.storage.set(CART_STORAGE_KEY, &snapshot).await?;

        tracing::debug!("💾 Cart committed: {} items", next.len());
        self.items = next;
        Ok(())
    }

    /// 操作邊界：把內部錯誤轉成使用者訊息，絕不往呼叫端拋
    fn reject(&self, error: CartError, failure_message: &str) {
        match error {
            CartError::StockExceeded {
                product_id,
                requested,
                available,
            } => {
                tracing::info!(
                    "🛒 Rejected: product {} requested {} but only {} in stock",
                    product_id,
                    requested,
                    available
                );
                self.notifier.report(OUT_OF_STOCK_MESSAGE);
            }
            error => {
                tracing::warn!("❌ {}: {}", failure_message, error);
                self.notifier.report(failure_message);
            }
        }
    }
}
