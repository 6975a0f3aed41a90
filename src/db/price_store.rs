use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::errors::StoreError;
use crate::models::PriceRecord;

/// Read-only access to the table of observed item prices.
#[async_trait]
pub trait PriceStore: Send + Sync {
    /// Distinct item names, ascending.
    async fn list_item_names(&self) -> Result<Vec<String>, StoreError>;

    /// Records of `item_name` with `start <= timestamp <= end`, ascending by timestamp.
    async fn fetch_range(
        &self,
        item_name: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<PriceRecord>, StoreError>;
}
