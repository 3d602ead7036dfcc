use crate::controls::Control;
use crate::errors::DashboardError;
use crate::models::SeriesDataset;
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Date ranges offered by the range selector, newest period last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangePreset {
    #[serde(rename = "3m")]
    ThreeMonths,
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "2y")]
    TwoYears,
}

impl RangePreset {
    pub const ALL: [RangePreset; 4] = [
        RangePreset::ThreeMonths,
        RangePreset::SixMonths,
        RangePreset::OneYear,
        RangePreset::TwoYears,
    ];

    pub fn months(self) -> u32 {
        match self {
            RangePreset::ThreeMonths => 3,
            RangePreset::SixMonths => 6,
            RangePreset::OneYear => 12,
            RangePreset::TwoYears => 24,
        }
    }

    pub fn from_months(months: u32) -> Result<Self, DashboardError> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.months() == months)
            .ok_or_else(|| DashboardError::UnknownRange(format!("{months} months")))
    }

    pub fn dataset(self) -> Result<SeriesDataset, DashboardError> {
        match self {
            RangePreset::ThreeMonths => SeriesDataset::new(
                month_labels(2025, 2, 3),
                vec![95, 110, 85],
                vec![25, 30, 18],
            ),
            RangePreset::SixMonths => SeriesDataset::new(
                month_labels(2024, 11, 6),
                vec![120, 70, 85, 95, 110, 90],
                vec![20, 33, 35, 15, 28, 22],
            ),
            RangePreset::OneYear => SeriesDataset::new(
                month_labels(2024, 5, 12),
                vec![80, 90, 110, 95, 85, 100, 115, 70, 95, 105, 120, 90],
                vec![15, 18, 25, 30, 28, 20, 22, 35, 30, 25, 18, 20],
            ),
            RangePreset::TwoYears => SeriesDataset::new(
                month_labels(2023, 5, 24),
                vec![
                    70, 80, 95, 105, 90, 75, 85, 100, 110, 80, 90, 105, 115, 85, 95, 75, 80, 90,
                    100, 105, 115, 95, 85, 90,
                ],
                vec![
                    10, 15, 20, 25, 30, 25, 20, 15, 20, 25, 30, 35, 30, 25, 20, 15, 20, 25, 30,
                    25, 20, 15, 25, 20,
                ],
            ),
        }
    }
}

impl Control for RangePreset {
    fn key(&self) -> &'static str {
        match self {
            RangePreset::ThreeMonths => "3m",
            RangePreset::SixMonths => "6m",
            RangePreset::OneYear => "1y",
            RangePreset::TwoYears => "2y",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            RangePreset::ThreeMonths => "3 Months",
            RangePreset::SixMonths => "6 Months",
            RangePreset::OneYear => "1 Year",
            RangePreset::TwoYears => "2 Years",
        }
    }
}

/// Accepts either the range key (`6m`) or the button text (`6 Months`).
impl FromStr for RangePreset {
    type Err = DashboardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|preset| preset.key() == value || preset.label() == value)
            .ok_or_else(|| DashboardError::UnknownRange(value.to_string()))
    }
}

/// Chart contents shown at page load, before any range is clicked.
pub fn initial_dataset() -> Result<SeriesDataset, DashboardError> {
    SeriesDataset::new(
        month_labels(2025, 1, 4),
        vec![120, 70, 85, 95],
        vec![20, 33, 35, 15],
    )
}

/// `count` consecutive "Mon YYYY" labels starting at the given month.
///
/// An invalid start yields no labels, which `SeriesDataset::new` then rejects.
pub fn month_labels(year: i32, month: u32, count: u32) -> Vec<String> {
    let Some(start) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    (0..count)
        .filter_map(|offset| start.checked_add_months(Months::new(offset)))
        .map(|date| date.format("%b %Y").to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_have_expected_lengths() {
        for (preset, expected) in RangePreset::ALL.into_iter().zip([3, 6, 12, 24]) {
            let dataset = preset.dataset().expect("preset builds");
            assert_eq!(dataset.len(), expected, "{preset:?}");
            assert_eq!(dataset.avg_comments().len(), expected, "{preset:?}");
            assert_eq!(dataset.articles_published().len(), expected, "{preset:?}");
            assert_eq!(preset.months() as usize, expected);
        }
    }

    #[test]
    fn six_months_matches_button_data() {
        let dataset = RangePreset::SixMonths.dataset().unwrap();
        assert_eq!(
            dataset.labels(),
            ["Nov 2024", "Dec 2024", "Jan 2025", "Feb 2025", "Mar 2025", "Apr 2025"]
        );
        assert_eq!(dataset.avg_comments(), [120, 70, 85, 95, 110, 90]);
        assert_eq!(dataset.articles_published(), [20, 33, 35, 15, 28, 22]);
    }

    #[test]
    fn two_years_labels_start_may_2023() {
        let dataset = RangePreset::TwoYears.dataset().unwrap();
        let labels = dataset.labels();
        assert_eq!(labels.len(), 24);
        assert_eq!(labels.first().map(String::as_str), Some("May 2023"));
        assert_eq!(labels[7], "Dec 2023");
        assert_eq!(labels[8], "Jan 2024");
        assert_eq!(labels.last().map(String::as_str), Some("Apr 2025"));
    }

    #[test]
    fn one_year_ends_with_latest_month() {
        let dataset = RangePreset::OneYear.dataset().unwrap();
        let labels = dataset.labels();
        assert_eq!(labels[0], "May 2024");
        assert_eq!(labels[11], "Apr 2025");
    }

    #[test]
    fn initial_dataset_is_four_months() {
        let dataset = initial_dataset().unwrap();
        assert_eq!(dataset.labels(), ["Jan 2025", "Feb 2025", "Mar 2025", "Apr 2025"]);
        assert_eq!(dataset.avg_comments(), [120, 70, 85, 95]);
        assert_eq!(dataset.articles_published(), [20, 33, 35, 15]);
    }

    #[test]
    fn parses_keys_and_button_text() {
        assert_eq!("3 Months".parse::<RangePreset>().unwrap(), RangePreset::ThreeMonths);
        assert_eq!("1y".parse::<RangePreset>().unwrap(), RangePreset::OneYear);
        assert_eq!("  2 Years\n".parse::<RangePreset>().unwrap(), RangePreset::TwoYears);
        assert_eq!(
            "5 Years".parse::<RangePreset>().unwrap_err(),
            DashboardError::UnknownRange("5 Years".into())
        );
    }

    #[test]
    fn from_months_only_accepts_presets() {
        assert_eq!(RangePreset::from_months(12).unwrap(), RangePreset::OneYear);
        assert!(RangePreset::from_months(9).is_err());
    }

    #[test]
    fn month_labels_rejects_invalid_start() {
        assert!(month_labels(2025, 13, 3).is_empty());
    }

    #[test]
    fn preset_with_bad_start_month_fails_to_build() {
        let err = SeriesDataset::new(month_labels(2025, 13, 3), vec![1, 2, 3], vec![4, 5, 6])
            .unwrap_err();
        assert_eq!(
            err,
            DashboardError::LengthMismatch {
                labels: 0,
                comments: 3,
                articles: 3,
            }
        );
    }
}
