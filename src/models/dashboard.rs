use serde::Serialize;

use crate::models::{ChartFigure, PriceFrame};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerLevel {
    Info,
    Warning,
    Error,
}

/// A status message shown above the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Banner {
    pub level: BannerLevel,
    pub message: String,
}

impl Banner {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: BannerLevel::Info, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: BannerLevel::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: BannerLevel::Error, message: message.into() }
    }
}

/// Everything the page needs to redraw after the item or the day range changes.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub item: String,
    pub days: u32,
    pub subtitle: Option<String>,
    pub banners: Vec<Banner>,
    pub secondary_available: bool,
    pub chart: Option<ChartFigure>,
    pub table: Option<PriceFrame>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemCatalogResponse {
    pub items: Vec<String>,
    pub default_item: Option<String>,
    pub warning: Option<String>,
}
