use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::{Duration, NaiveDateTime};
use parking_lot::RwLock;
use tracing::info;

use crate::db::PriceStore;
use crate::errors::StoreError;
use crate::models::PriceRecord;

/// Items seeded by `demo`, with the Flower price each random walk starts from.
/// Wood has no USD feed.
const DEMO_ITEMS: &[(&str, f64, bool)] = &[
    ("Apple", 0.35, true),
    ("Carrot", 0.08, true),
    ("Egg", 0.22, true),
    ("Gold", 7.5, true),
    ("Sunflower", 0.02, true),
    ("Wood", 0.12, false),
];

const DEMO_DAYS: i64 = 90;
const DEMO_STEP_HOURS: i64 = 6;

/// In-process price table used to run the dashboard without a database.
#[derive(Default)]
pub struct MemoryPriceStore {
    records: RwLock<Vec<PriceRecord>>,
}

impl MemoryPriceStore {
    pub fn new(records: Vec<PriceRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Random-walk prices every six hours over the last ninety days.
    pub fn demo(now: NaiveDateTime) -> Self {
        let mut records = Vec::new();

        for &(item, start_price, has_usd) in DEMO_ITEMS {
            let mut price = start_price;
            let mut usd_rate = 0.03_f64;
            let mut at = now - Duration::days(DEMO_DAYS);

            while at <= now {
                price *= 1.0 + (rand::random::<f64>() - 0.5) * 0.02;
                usd_rate *= 1.0 + (rand::random::<f64>() - 0.5) * 0.01;
                let usd_price = has_usd.then(|| price * usd_rate);

                records.push(PriceRecord::new(item, price, usd_price, at));
                at += Duration::hours(DEMO_STEP_HOURS);
            }
        }

        info!("Seeded demo price store with {} records for {} items", records.len(), DEMO_ITEMS.len());
        Self::new(records)
    }

    #[cfg(test)]
    pub fn insert(&self, record: PriceRecord) {
        self.records.write().push(record);
    }
}

#[async_trait]
impl PriceStore for MemoryPriceStore {
    async fn list_item_names(&self) -> Result<Vec<String>, StoreError> {
        let names: BTreeSet<String> = self
            .records
            .read()
            .iter()
            .map(|r| r.item_name.clone())
            .collect();
        Ok(names.into_iter().collect())
    }

    async fn fetch_range(
        &self,
        item_name: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<PriceRecord>, StoreError> {
        let mut matching: Vec<PriceRecord> = self
            .records
            .read()
            .iter()
            .filter(|r| r.item_name == item_name && r.timestamp >= start && r.timestamp <= end)
            .cloned()
            .collect();
        matching.sort_by_key(|r| r.timestamp);
        Ok(matching)
    }
}
