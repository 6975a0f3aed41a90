use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// One observed price of an item. `usd_price` is absent when no conversion feed
// existed for that observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PriceRecord {
    pub item_name: String,
    pub p2p_price: f64,
    pub usd_price: Option<f64>,
    pub timestamp: NaiveDateTime,
}

impl PriceRecord {
    pub fn new(
        item_name: impl Into<String>,
        p2p_price: f64,
        usd_price: Option<f64>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            item_name: item_name.into(),
            p2p_price,
            usd_price,
            timestamp,
        }
    }
}
