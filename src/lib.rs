pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::{ListParams, WpClient};
pub use adapters::storage::LocalStorage;
pub use config::SiteConfig;
pub use core::engine::SectionEngine;
pub use core::sections::{NewsSection, PortfolioSection, TeamSection};
pub use utils::error::{Result, ShowcaseError};
