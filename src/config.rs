use crate::errors::DashboardError;
use crate::models::Tab;
use crate::presets::RangePreset;
use std::env;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub default_range: RangePreset,
    pub default_tab: Tab,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            default_range: RangePreset::SixMonths,
            default_tab: Tab::Trends,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, DashboardError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DashboardError> {
        let defaults = Self::default();

        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let default_range = match lookup("DASHBOARD_DEFAULT_RANGE") {
            Some(value) => value.parse()?,
            None => defaults.default_range,
        };

        let default_tab = match lookup("DASHBOARD_DEFAULT_TAB") {
            Some(value) => value.parse()?,
            None => defaults.default_tab,
        };

        Ok(Self {
            port,
            default_range,
            default_tab,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "9000"),
            ("DASHBOARD_DEFAULT_RANGE", "1 Year"),
            ("DASHBOARD_DEFAULT_TAB", "authors"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.default_range, RangePreset::OneYear);
        assert_eq!(config.default_tab, Tab::Authors);
    }

    #[test]
    fn bad_port_falls_back() {
        let config = Config::from_lookup(lookup(&[("PORT", "http")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn bad_range_fails_fast() {
        let err = Config::from_lookup(lookup(&[("DASHBOARD_DEFAULT_RANGE", "forever")]))
            .unwrap_err();
        assert_eq!(err, DashboardError::UnknownRange("forever".into()));
    }
}
