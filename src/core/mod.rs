pub mod engine;
pub mod fallback;
pub mod filter;
pub mod query;
pub mod resolver;
pub mod sections;

pub use crate::domain::cards::SectionOutput;
pub use crate::domain::model::{CandidateQuery, ContentOrigin, Post, Resolved};
pub use crate::domain::ports::{ConfigProvider, ContentSource, SectionPipeline, Storage};
pub use crate::utils::error::Result;
