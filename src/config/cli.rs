use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_path, validate_positive_number, validate_range, validate_url, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "wp-showcase")]
#[command(about = "Renders CMS-backed page sections as card documents")]
pub struct CliConfig {
    #[arg(long, default_value = "https://cockpit4me.de/wp-json/wp/v2")]
    pub base_url: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_delimiter = ',', default_value = "team,portfolio,news")]
    pub sections: Vec<String>,

    #[arg(long, default_value = "12")]
    pub timeout_seconds: u64,

    #[arg(long, default_value = "10")]
    pub per_page: u32,

    #[arg(long, default_value = "6")]
    pub fallback_limit: usize,

    #[arg(long, help = "Path to a TOML site configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn per_page(&self) -> u32 {
        self.per_page
    }

    fn fallback_limit(&self) -> usize {
        self.fallback_limit
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_path("output_path", &self.output_path)?;
        validate_range("timeout_seconds", self.timeout_seconds, 8, 15)?;
        validate_positive_number("per_page", self.per_page as usize, 1)?;
        validate_positive_number("fallback_limit", self.fallback_limit, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig::parse_from(["wp-showcase"])
    }

    #[test]
    fn defaults_are_valid() {
        let config = base_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.sections, vec!["team", "portfolio", "news"]);
        assert_eq!(config.timeout_seconds, 12);
    }

    #[test]
    fn rejects_timeout_outside_bounds() {
        let mut config = base_config();
        config.timeout_seconds = 30;
        assert!(config.validate().is_err());
    }

    #[test]
    fn section_list_splits_on_commas() {
        let config = CliConfig::parse_from(["wp-showcase", "--sections", "team,news"]);
        assert_eq!(config.sections, vec!["team", "news"]);
    }
}
