use crate::chart::ChartState;
use crate::config::Config;
use crate::controls::{Control, ControlGroup};
use crate::errors::DashboardError;
use crate::models::{DashboardSnapshot, Tab};
use crate::presets::{initial_dataset, RangePreset};
use crate::summary::summarize;

/// Everything the reports page displays: both selectors and the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    tabs: ControlGroup<Tab>,
    ranges: ControlGroup<RangePreset>,
    chart: ChartState,
}

impl Dashboard {
    /// Range marker starts on `default_range`, but the chart keeps the
    /// initial placeholder series until a range is picked.
    pub fn new(config: &Config) -> Result<Self, DashboardError> {
        Ok(Self {
            tabs: ControlGroup::with_active(Tab::ALL.to_vec(), config.default_tab)?,
            ranges: ControlGroup::with_active(RangePreset::ALL.to_vec(), config.default_range)?,
            chart: ChartState::construct(&initial_dataset()?),
        })
    }

    pub fn select_tab(&mut self, tab: Tab) -> Result<(), DashboardError> {
        self.tabs.activate(tab)
    }

    /// Redraws before moving the marker so a failed lookup changes nothing.
    pub fn select_range(&mut self, range: RangePreset) -> Result<(), DashboardError> {
        if !self.ranges.contains(range) {
            return Err(DashboardError::NotInGroup(range.key().to_string()));
        }
        self.chart.redraw(range)?;
        self.ranges.activate(range)
    }

    pub fn tabs(&self) -> &ControlGroup<Tab> {
        &self.tabs
    }

    pub fn ranges(&self) -> &ControlGroup<RangePreset> {
        &self.ranges
    }

    pub fn chart(&self) -> &ChartState {
        &self.chart
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            tabs: self.tabs.views(),
            ranges: self.ranges.views(),
            active_tab: self.tabs.active(),
            active_range: self.ranges.active(),
            chart: self.chart.config().clone(),
            summary: summarize(self.chart.dataset()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard() -> Dashboard {
        Dashboard::new(&Config::default()).unwrap()
    }

    #[test]
    fn load_shows_default_markers_and_initial_chart() {
        let dashboard = dashboard();
        assert_eq!(dashboard.tabs().active(), Some(Tab::Trends));
        assert_eq!(dashboard.ranges().active(), Some(RangePreset::SixMonths));
        assert_eq!(
            dashboard.chart().labels(),
            ["Jan 2025", "Feb 2025", "Mar 2025", "Apr 2025"]
        );
        assert_eq!(dashboard.chart().comments(), [120, 70, 85, 95]);
        assert_eq!(dashboard.chart().articles(), [20, 33, 35, 15]);
    }

    #[test]
    fn selecting_range_moves_marker_and_redraws() {
        let mut dashboard = dashboard();
        dashboard.select_range(RangePreset::TwoYears).unwrap();

        assert_eq!(dashboard.ranges().active(), Some(RangePreset::TwoYears));
        assert_eq!(dashboard.chart().labels().len(), 24);
        assert_eq!(dashboard.chart().labels()[0], "May 2023");

        let snapshot = dashboard.snapshot();
        let active: Vec<_> = snapshot.ranges.iter().filter(|r| r.is_active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "2 Years");
        assert_eq!(snapshot.summary.periods, 24);
    }

    #[test]
    fn selecting_tab_leaves_chart_alone() {
        let mut dashboard = dashboard();
        let before = dashboard.chart().clone();
        dashboard.select_tab(Tab::Companies).unwrap();

        assert_eq!(dashboard.tabs().active(), Some(Tab::Companies));
        assert_eq!(dashboard.chart(), &before);
        assert_eq!(dashboard.ranges().active(), Some(RangePreset::SixMonths));
    }

    #[test]
    fn reselecting_same_range_is_idempotent() {
        let mut dashboard = dashboard();
        dashboard.select_range(RangePreset::ThreeMonths).unwrap();
        let first = dashboard.clone();
        dashboard.select_range(RangePreset::ThreeMonths).unwrap();
        assert_eq!(dashboard, first);
    }
}
