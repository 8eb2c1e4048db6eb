use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, ShowcaseError};
use crate::utils::validation::{
    validate_path, validate_positive_number, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SECTIONS: [&str; 3] = ["team", "portfolio", "news"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteSettings,
    pub output: OutputSettings,
    pub sections: Option<SectionSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettings {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionSettings {
    pub enabled: Option<Vec<String>>,
    pub per_page: Option<u32>,
    pub fallback_limit: Option<usize>,
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| ShowcaseError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` placeholders with environment values; unknown
    /// variables are left as-is so validation can flag them.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn enabled_sections(&self) -> Vec<String> {
        self.sections
            .as_ref()
            .and_then(|s| s.enabled.clone())
            .unwrap_or_else(|| DEFAULT_SECTIONS.iter().map(|s| s.to_string()).collect())
    }
}

impl ConfigProvider for SiteConfig {
    fn base_url(&self) -> &str {
        &self.site.base_url
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn timeout_seconds(&self) -> u64 {
        self.site.timeout_seconds.unwrap_or(12)
    }

    fn per_page(&self) -> u32 {
        self.sections
            .as_ref()
            .and_then(|s| s.per_page)
            .unwrap_or(10)
    }

    fn fallback_limit(&self) -> usize {
        self.sections
            .as_ref()
            .and_then(|s| s.fallback_limit)
            .unwrap_or(6)
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_url("site.base_url", &self.site.base_url)?;
        validate_path("output.path", &self.output.path)?;
        validate_range("site.timeout_seconds", self.timeout_seconds(), 8, 15)?;
        validate_positive_number("sections.per_page", self.per_page() as usize, 1)?;
        validate_positive_number("sections.fallback_limit", self.fallback_limit(), 1)?;

        let known = DEFAULT_SECTIONS;
        for section in self.enabled_sections() {
            if !known.contains(&section.as_str()) {
                return Err(ShowcaseError::InvalidConfigValueError {
                    field: "sections.enabled".to_string(),
                    value: section,
                    reason: format!("Unknown section. Known sections: {}", known.join(", ")),
                });
            }
        }
        Ok(())
    }
}
