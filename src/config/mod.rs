pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Defaults reproduce the unattended run: five scrapes of the tgju homepage,
/// one minute apart, dataset written to the current directory.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "price-scraper")]
#[command(about = "Periodically scrapes tgju.org price quotes into a CSV dataset")]
pub struct CliConfig {
    #[arg(long, default_value = "https://www.tgju.org/")]
    pub source_url: String,

    #[arg(long, default_value = ".")]
    pub output_path: String,

    #[arg(long, default_value = "5")]
    pub iterations: usize,

    #[arg(long, default_value = "60", help = "Seconds to wait between scrapes")]
    pub interval: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn source_url(&self) -> &str {
        &self.source_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn iterations(&self) -> usize {
        self.iterations
    }

    fn interval_secs(&self) -> u64 {
        self.interval
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source_url", &self.source_url)?;
        validate_path("output_path", &self.output_path)?;
        validate_positive_number("iterations", self.iterations, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_config() -> CliConfig {
        CliConfig::parse_from(["price-scraper"])
    }

    #[test]
    fn test_defaults_match_unattended_run() {
        let config = default_config();
        assert_eq!(config.source_url, "https://www.tgju.org/");
        assert_eq!(config.iterations, 5);
        assert_eq!(config.interval, 60);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let mut config = default_config();
        config.iterations = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_url_rejected() {
        let mut config = default_config();
        config.source_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }
}
