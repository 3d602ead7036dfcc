//! Dual-axis trends chart.
//!
//! [`ChartConfig`] serializes to the config object Chart.js expects, so the
//! page can pass it straight to `new Chart(ctx, config)` and later copy
//! `data.labels` / `data.datasets[i].data` into the live handle.

use crate::errors::DashboardError;
use crate::models::SeriesDataset;
use crate::presets::RangePreset;
use serde::Serialize;
use serde_json::{json, Value};

pub const COMMENTS_AXIS: &str = "y";
pub const ARTICLES_AXIS: &str = "y1";
pub const COMMENTS_TITLE: &str = "Average Comments";
pub const ARTICLES_TITLE: &str = "Articles Published";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: [LineSeries; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSeries {
    pub label: &'static str,
    pub data: Vec<u32>,
    pub border_color: &'static str,
    pub background_color: &'static str,
    pub tension: f64,
    #[serde(rename = "yAxisID")]
    pub y_axis_id: &'static str,
}

/// Owned handle to the chart currently on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartState {
    dataset: SeriesDataset,
    config: ChartConfig,
}

impl ChartState {
    pub fn construct(dataset: &SeriesDataset) -> Self {
        let config = ChartConfig {
            kind: "line",
            data: ChartData {
                labels: dataset.labels().to_vec(),
                datasets: [
                    LineSeries {
                        label: COMMENTS_TITLE,
                        data: dataset.avg_comments().to_vec(),
                        border_color: "rgb(59, 130, 246)",
                        background_color: "rgba(59, 130, 246, 0.1)",
                        tension: 0.3,
                        y_axis_id: COMMENTS_AXIS,
                    },
                    LineSeries {
                        label: ARTICLES_TITLE,
                        data: dataset.articles_published().to_vec(),
                        border_color: "rgb(34, 197, 94)",
                        background_color: "rgba(34, 197, 94, 0.1)",
                        tension: 0.3,
                        y_axis_id: ARTICLES_AXIS,
                    },
                ],
            },
            options: chart_options(),
        };
        Self {
            dataset: dataset.clone(),
            config,
        }
    }

    /// Swaps the displayed series in place; styling and options are untouched.
    pub fn update(&mut self, dataset: &SeriesDataset) {
        let data = &mut self.config.data;
        data.labels = dataset.labels().to_vec();
        data.datasets[0].data = dataset.avg_comments().to_vec();
        data.datasets[1].data = dataset.articles_published().to_vec();
        self.dataset.clone_from(dataset);
    }

    /// Looks `range` up in the preset table; on error the chart is untouched.
    pub fn redraw(&mut self, range: RangePreset) -> Result<(), DashboardError> {
        let dataset = range.dataset()?;
        self.update(&dataset);
        Ok(())
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn labels(&self) -> &[String] {
        &self.config.data.labels
    }

    pub fn comments(&self) -> &[u32] {
        &self.config.data.datasets[0].data
    }

    pub fn articles(&self) -> &[u32] {
        &self.config.data.datasets[1].data
    }

    pub fn dataset(&self) -> &SeriesDataset {
        &self.dataset
    }
}

fn chart_options() -> Value {
    json!({
        "responsive": true,
        "interaction": { "mode": "index", "intersect": false },
        "stacked": false,
        "scales": {
            COMMENTS_AXIS: {
                "type": "linear",
                "display": true,
                "position": "left",
                "title": { "display": true, "text": COMMENTS_TITLE },
                "min": 0
            },
            ARTICLES_AXIS: {
                "type": "linear",
                "display": true,
                "position": "right",
                "title": { "display": true, "text": ARTICLES_TITLE },
                "min": 0,
                "grid": { "drawOnChartArea": false }
            },
            "x": {
                "title": { "display": true, "text": "Month" }
            }
        },
        "plugins": {
            "legend": { "position": "bottom" }
        }
    })
}
