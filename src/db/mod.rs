pub mod memory;
pub mod price_queries;
mod price_store;

pub use memory::MemoryPriceStore;
pub use price_queries::MySqlPriceStore;
pub use price_store::PriceStore;
