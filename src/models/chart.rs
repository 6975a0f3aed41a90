use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::PriceFrame;

pub const FLOWER_SERIES_NAME: &str = "Price in Flower";
pub const USD_SERIES_NAME: &str = "Price in USD";

const FLOWER_COLOR: &str = "#3366cc";
const USD_COLOR: &str = "#cc3366";

/// Declarative line chart handed to the browser's charting library as-is.
///
/// Field names follow the Plotly figure schema (`data` + `layout`).
#[derive(Debug, Clone, Serialize)]
pub struct ChartFigure {
    pub data: Vec<LineTrace>,
    pub layout: ChartLayout,
}

#[derive(Debug, Clone, Serialize)]
pub struct LineTrace {
    pub x: Vec<NaiveDateTime>,
    pub y: Vec<Option<f64>>,
    pub mode: &'static str,
    pub name: &'static str,
    pub line: LineStyle,
    pub yaxis: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LineStyle {
    pub color: &'static str,
    pub width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartLayout {
    pub xaxis: Axis,
    pub yaxis: Axis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis2: Option<Axis>,
    pub legend: Legend,
    pub hovermode: &'static str,
    pub height: u32,
    pub margin: Margin,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub title: AxisTitle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlaying: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AxisTitle {
    pub text: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Legend {
    pub title: AxisTitle,
}

#[derive(Debug, Clone, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

impl Axis {
    fn titled(text: &'static str) -> Self {
        Self {
            title: AxisTitle { text },
            overlaying: None,
            side: None,
        }
    }
}

impl ChartFigure {
    /// Flower prices on the left axis; USD prices, when any exist, as a dotted
    /// line on an independent right axis sharing the time axis.
    pub fn from_frame(frame: &PriceFrame) -> Self {
        let mut data = vec![LineTrace {
            x: frame.timestamp.clone(),
            y: frame.p2p_price.iter().copied().map(Some).collect(),
            mode: "lines",
            name: FLOWER_SERIES_NAME,
            line: LineStyle { color: FLOWER_COLOR, width: 3, dash: None },
            yaxis: "y",
        }];

        let yaxis2 = if frame.has_secondary() {
            data.push(LineTrace {
                x: frame.timestamp.clone(),
                y: frame.usd_price.clone(),
                mode: "lines",
                name: USD_SERIES_NAME,
                line: LineStyle { color: USD_COLOR, width: 3, dash: Some("dot") },
                yaxis: "y2",
            });
            Some(Axis {
                title: AxisTitle { text: USD_SERIES_NAME },
                overlaying: Some("y"),
                side: Some("right"),
            })
        } else {
            None
        };

        Self {
            data,
            layout: ChartLayout {
                xaxis: Axis::titled("Date"),
                yaxis: Axis::titled(FLOWER_SERIES_NAME),
                yaxis2,
                legend: Legend { title: AxisTitle { text: "Price Type" } },
                hovermode: "x unified",
                height: 600,
                margin: Margin { l: 20, r: 20, t: 30, b: 20 },
            },
        }
    }

    #[cfg(test)]
    pub fn has_secondary_axis(&self) -> bool {
        self.layout.yaxis2.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceRecord;
    use chrono::NaiveDate;

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, day)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_dual_axis_when_usd_present() {
        let frame = PriceFrame::from_records(&[
            PriceRecord::new("Apple", 0.5, Some(0.01), at(1)),
            PriceRecord::new("Apple", 0.7, None, at(2)),
        ]);

        let figure = ChartFigure::from_frame(&frame);

        assert_eq!(figure.data.len(), 2);
        assert!(figure.has_secondary_axis());
        let usd = &figure.data[1];
        assert_eq!(usd.name, USD_SERIES_NAME);
        assert_eq!(usd.yaxis, "y2");
        assert_eq!(usd.line.dash, Some("dot"));
        assert_eq!(usd.y, vec![Some(0.01), None]);
        assert_eq!(usd.x, figure.data[0].x);
    }

    #[test]
    fn test_single_axis_without_usd() {
        let frame = PriceFrame::from_records(&[PriceRecord::new("Wood", 0.1, None, at(3))]);

        let figure = ChartFigure::from_frame(&frame);

        assert_eq!(figure.data.len(), 1);
        assert_eq!(figure.data[0].name, FLOWER_SERIES_NAME);
        assert!(!figure.has_secondary_axis());
    }

    #[test]
    fn test_serializes_as_plotly_figure() {
        let frame = PriceFrame::from_records(&[PriceRecord::new("Apple", 1.25, Some(0.03), at(4))]);

        let json = serde_json::to_value(ChartFigure::from_frame(&frame)).unwrap();

        assert_eq!(json["layout"]["hovermode"], "x unified");
        assert_eq!(json["layout"]["yaxis2"]["overlaying"], "y");
        assert_eq!(json["layout"]["yaxis2"]["side"], "right");
        assert_eq!(json["data"][0]["x"][0], "2024-05-04T08:30:00");
        assert_eq!(json["data"][0]["y"][0], 1.25);
        assert!(json["data"][0]["line"].get("dash").is_none());
    }
}
