mod chart;
pub(crate) mod dashboard;
mod price_frame;
mod price_record;

pub use chart::ChartFigure;
pub use dashboard::{Banner, DashboardView, ItemCatalogResponse};
pub use price_frame::PriceFrame;
pub use price_record::PriceRecord;
