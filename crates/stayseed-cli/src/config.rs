use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use stayseed_core::Destination;
use stayseed_generate::SourceKind;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
    #[error("missing configuration: {0}")]
    Missing(String),
}

/// Resolved configuration for one seeding run, passed into the pipeline at
/// construction. Loaded from an optional TOML file, then overridden by CLI
/// flags.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedConfig {
    #[serde(default)]
    pub database_url: Option<String>,
    /// Generator seed; a fresh one is drawn when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_source")]
    pub source: SourceKind,
    #[serde(default)]
    pub throttle: ThrottleConfig,
    #[serde(default = "default_destinations")]
    pub destinations: Vec<Destination>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            seed: None,
            source: default_source(),
            throttle: ThrottleConfig::default(),
            destinations: default_destinations(),
        }
    }
}

impl SeedConfig {
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Ok(toml::from_str(&fs::read_to_string(path)?)?),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.destinations.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one destination is required".to_string(),
            ));
        }
        if self.throttle.min_pause_ms > self.throttle.max_pause_ms {
            return Err(ConfigError::Invalid(format!(
                "throttle min_pause_ms ({}) exceeds max_pause_ms ({})",
                self.throttle.min_pause_ms, self.throttle.max_pause_ms
            )));
        }
        Ok(())
    }
}

/// Bounded random pause between consecutive persistence calls. Setting the
/// upper bound to zero disables throttling.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThrottleConfig {
    #[serde(default = "default_min_pause_ms")]
    pub min_pause_ms: u64,
    #[serde(default = "default_max_pause_ms")]
    pub max_pause_ms: u64,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            min_pause_ms: default_min_pause_ms(),
            max_pause_ms: default_max_pause_ms(),
        }
    }
}

fn default_source() -> SourceKind {
    SourceKind::Synthetic
}

fn default_min_pause_ms() -> u64 {
    500
}

fn default_max_pause_ms() -> u64 {
    1000
}

/// The built-in list of twelve destinations; target counts sum to 101.
pub fn default_destinations() -> Vec<Destination> {
    vec![
        Destination::new("Paris", "France", 48.8566, 2.3522, 9),
        Destination::new("Amsterdam", "Netherlands", 52.3676, 4.9041, 8),
        Destination::new("St Petersburg", "Russia", 59.9343, 30.3351, 8),
        Destination::new("Prague", "Czech Republic", 50.0755, 14.4378, 8),
        Destination::new("Tahiti", "French Polynesia", -17.6509, -149.4260, 8),
        Destination::new("Zanzibar", "Tanzania", -6.1659, 39.2026, 8),
        Destination::new("Male", "Maldives", 4.1755, 73.5093, 8),
        Destination::new("Cancun", "Mexico", 21.1619, -86.8515, 9),
        Destination::new("Dubai", "United Arab Emirates", 25.2048, 55.2708, 9),
        Destination::new("Bali", "Indonesia", -8.4095, 115.1889, 8),
        Destination::new("New York", "United States", 40.7128, -74.0060, 9),
        Destination::new("Tokyo", "Japan", 35.6762, 139.6503, 9),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_destinations_target_101_hotels() {
        let destinations = default_destinations();
        assert_eq!(destinations.len(), 12);
        let total: u32 = destinations.iter().map(|d| d.target_count).sum();
        assert_eq!(total, 101);
    }

    #[test]
    fn config_file_overrides_defaults() {
        let config: SeedConfig = toml::from_str(
            r#"
            seed = 7

            [throttle]
            min_pause_ms = 0
            max_pause_ms = 0

            [[destinations]]
            name = "Paris"
            country = "France"
            latitude = 48.8566
            longitude = 2.3522
            target_count = 3
            "#,
        )
        .expect("valid config");

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.source, SourceKind::Synthetic);
        assert_eq!(config.destinations.len(), 1);
        assert_eq!(config.destinations[0].target_count, 3);
        config.validate().expect("valid");
    }

    #[test]
    fn inverted_throttle_bounds_are_rejected() {
        let mut config = SeedConfig::default();
        config.throttle.min_pause_ms = 10;
        config.throttle.max_pause_ms = 5;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn empty_destination_list_is_rejected() {
        let mut config = SeedConfig::default();
        config.destinations.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
