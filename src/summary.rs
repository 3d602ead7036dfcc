use crate::models::SeriesDataset;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeakPoint {
    pub label: String,
    pub value: u32,
}

/// Figures for the metric cards under the trends chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub periods: usize,
    pub total_articles: u64,
    pub mean_avg_comments: f64,
    pub peak_comments: Option<PeakPoint>,
    pub peak_articles: Option<PeakPoint>,
}

pub fn summarize(dataset: &SeriesDataset) -> SeriesSummary {
    let periods = dataset.len();
    let total_articles = dataset
        .articles_published()
        .iter()
        .fold(0u64, |acc, value| acc.saturating_add(u64::from(*value)));
    let comments_sum: u64 = dataset.avg_comments().iter().map(|value| u64::from(*value)).sum();
    let denom = if periods == 0 { 1.0 } else { periods as f64 };

    SeriesSummary {
        periods,
        total_articles,
        mean_avg_comments: comments_sum as f64 / denom,
        peak_comments: peak(dataset.labels(), dataset.avg_comments()),
        peak_articles: peak(dataset.labels(), dataset.articles_published()),
    }
}

// First maximum wins so ties point at the earliest period.
fn peak(labels: &[String], values: &[u32]) -> Option<PeakPoint> {
    let mut best: Option<(usize, u32)> = None;
    for (index, value) in values.iter().copied().enumerate() {
        match best {
            Some((_, current)) if current >= value => {}
            _ => best = Some((index, value)),
        }
    }
    let (index, value) = best?;
    Some(PeakPoint {
        label: labels.get(index)?.clone(),
        value,
    })
}
