use crate::chart::ChartConfig;
use crate::controls::{Control, ControlView};
use crate::errors::DashboardError;
use crate::presets::RangePreset;
use crate::summary::SeriesSummary;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Paired comment/article series with one label per period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesDataset {
    labels: Vec<String>,
    avg_comments: Vec<u32>,
    articles_published: Vec<u32>,
}

impl SeriesDataset {
    pub fn new(
        labels: Vec<String>,
        avg_comments: Vec<u32>,
        articles_published: Vec<u32>,
    ) -> Result<Self, DashboardError> {
        let dataset = Self {
            labels,
            avg_comments,
            articles_published,
        };
        if !dataset.is_consistent() {
            return Err(DashboardError::LengthMismatch {
                labels: dataset.labels.len(),
                comments: dataset.avg_comments.len(),
                articles: dataset.articles_published.len(),
            });
        }
        Ok(dataset)
    }

    fn is_consistent(&self) -> bool {
        self.labels.len() == self.avg_comments.len()
            && self.labels.len() == self.articles_published.len()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn avg_comments(&self) -> &[u32] {
        &self.avg_comments
    }

    pub fn articles_published(&self) -> &[u32] {
        &self.articles_published
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    Trends,
    Sentiment,
    TopArticles,
    Authors,
    Companies,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Trends,
        Tab::Sentiment,
        Tab::TopArticles,
        Tab::Authors,
        Tab::Companies,
    ];
}

impl Control for Tab {
    fn key(&self) -> &'static str {
        match self {
            Tab::Trends => "trends",
            Tab::Sentiment => "sentiment",
            Tab::TopArticles => "top-articles",
            Tab::Authors => "authors",
            Tab::Companies => "companies",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Tab::Trends => "Trends",
            Tab::Sentiment => "Sentiment",
            Tab::TopArticles => "Top Articles",
            Tab::Authors => "Authors",
            Tab::Companies => "Companies",
        }
    }
}

impl FromStr for Tab {
    type Err = DashboardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        Tab::ALL
            .into_iter()
            .find(|tab| tab.key() == value)
            .ok_or_else(|| DashboardError::UnknownTab(value.to_string()))
    }
}

#[derive(Debug, Deserialize)]
pub struct TabRequest {
    pub tab: String,
}

#[derive(Debug, Deserialize)]
pub struct RangeRequest {
    pub range: String,
}

#[derive(Debug, Deserialize)]
pub struct ReportsQuery {
    pub months: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct RangeInfo {
    pub key: &'static str,
    pub label: &'static str,
    pub months: u32,
    pub dataset: SeriesDataset,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub tabs: Vec<ControlView>,
    pub ranges: Vec<ControlView>,
    pub active_tab: Option<Tab>,
    pub active_range: Option<RangePreset>,
    pub chart: ChartConfig,
    pub summary: SeriesSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_rejects_mismatched_series() {
        let err = SeriesDataset::new(vec!["Jan 2025".into()], vec![1, 2], vec![3]).unwrap_err();
        assert_eq!(
            err,
            DashboardError::LengthMismatch {
                labels: 1,
                comments: 2,
                articles: 1,
            }
        );
    }

    #[test]
    fn dataset_rejects_short_labels() {
        let err = SeriesDataset::new(Vec::new(), vec![1, 2, 3], Vec::new()).unwrap_err();
        assert_eq!(
            err,
            DashboardError::LengthMismatch {
                labels: 0,
                comments: 3,
                articles: 0,
            }
        );
    }

    #[test]
    fn tab_parses_by_data_attribute() {
        assert_eq!("top-articles".parse::<Tab>().unwrap(), Tab::TopArticles);
        assert_eq!(" authors ".parse::<Tab>().unwrap(), Tab::Authors);
        assert_eq!(
            "Authors".parse::<Tab>().unwrap_err(),
            DashboardError::UnknownTab("Authors".into())
        );
    }
}
