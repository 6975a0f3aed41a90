use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;
use tracing::{debug, error, warn};

use crate::config::DatabaseConfig;
use crate::db::PriceStore;
use crate::errors::StoreError;
use crate::models::PriceRecord;

/// MySQL-backed store. Every call opens its own connection and closes it
/// before returning, whether or not the query succeeded.
pub struct MySqlPriceStore {
    options: MySqlConnectOptions,
    table: String,
}

impl MySqlPriceStore {
    pub fn new(database: &DatabaseConfig, table: impl Into<String>) -> Self {
        Self {
            options: database.connect_options(),
            table: table.into(),
        }
    }

    async fn open_connection(&self) -> Result<MySqlConnection, StoreError> {
        MySqlConnection::connect_with(&self.options)
            .await
            .map_err(|e| {
                error!("Failed to connect to the price database: {}", e);
                StoreError::Connection(e.to_string())
            })
    }

    fn item_names_sql(&self) -> String {
        format!("SELECT DISTINCT item_name FROM {} ORDER BY item_name", self.table)
    }

    fn range_sql(&self) -> String {
        format!(
            r#"
            SELECT
                item_name,
                p2p_price + 0E0 AS p2p_price,
                usd_price + 0E0 AS usd_price,
                `timestamp`
            FROM {}
            WHERE item_name = ? AND `timestamp` BETWEEN ? AND ?
            ORDER BY `timestamp`
            "#,
            self.table
        )
    }
}

async fn close_connection(conn: MySqlConnection) {
    if let Err(e) = conn.close().await {
        warn!("Failed to close price database connection cleanly: {}", e);
    }
}

#[async_trait]
impl PriceStore for MySqlPriceStore {
    async fn list_item_names(&self) -> Result<Vec<String>, StoreError> {
        let mut conn = self.open_connection().await?;

        let sql = self.item_names_sql();
        let result = sqlx::query_scalar::<_, String>(&sql)
            .fetch_all(&mut conn)
            .await;
        close_connection(conn).await;

        result.map_err(|e| {
            error!("Failed to fetch item names from {}: {}", self.table, e);
            StoreError::Query(e.to_string())
        })
    }

    async fn fetch_range(
        &self,
        item_name: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<PriceRecord>, StoreError> {
        let mut conn = self.open_connection().await?;

        let sql = self.range_sql();
        let result = sqlx::query_as::<_, PriceRecord>(&sql)
            .bind(item_name)
            .bind(start)
            .bind(end)
            .fetch_all(&mut conn)
            .await;
        close_connection(conn).await;

        let records = result.map_err(|e| {
            error!("Failed to fetch price history for item {}: {}", item_name, e);
            StoreError::Query(e.to_string())
        })?;
        debug!("Fetched {} price records for {} between {} and {}", records.len(), item_name, start, end);
        Ok(records)
    }
}
