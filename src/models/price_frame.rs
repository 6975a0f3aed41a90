use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::PriceRecord;

/// Column-oriented view of a price history, one entry per record in every column.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceFrame {
    pub timestamp: Vec<NaiveDateTime>,
    pub item_name: Vec<String>,
    pub p2p_price: Vec<f64>,
    pub usd_price: Vec<Option<f64>>,
}

impl PriceFrame {
    pub fn from_records(records: &[PriceRecord]) -> Self {
        let mut frame = Self {
            timestamp: Vec::with_capacity(records.len()),
            item_name: Vec::with_capacity(records.len()),
            p2p_price: Vec::with_capacity(records.len()),
            usd_price: Vec::with_capacity(records.len()),
        };
        for record in records {
            frame.timestamp.push(record.timestamp);
            frame.item_name.push(record.item_name.clone());
            frame.p2p_price.push(record.p2p_price);
            frame.usd_price.push(record.usd_price);
        }
        frame
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.timestamp.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.timestamp.is_empty()
    }

    /// The USD series is shown when at least one record carries a USD price.
    pub fn has_secondary(&self) -> bool {
        self.usd_price.iter().any(Option::is_some)
    }
}
