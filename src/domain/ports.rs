use crate::domain::cards::SectionOutput;
use crate::domain::model::{CandidateQuery, Post, Resolved, TermSummary};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only access to the CMS, at the granularity the fallback resolver
/// works with.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch_batch(&self, query: &CandidateQuery) -> Result<Vec<Post>>;
    async fn list_categories(&self) -> Result<Vec<TermSummary>>;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn output_path(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn per_page(&self) -> u32;
    fn fallback_limit(&self) -> usize;
}

/// Three-stage section run: resolve content, shape it into cards, write
/// the section document.
#[async_trait]
pub trait SectionPipeline: Send + Sync {
    fn name(&self) -> &str;
    async fn extract(&self) -> Result<Resolved>;
    async fn transform(&self, resolved: Resolved) -> Result<SectionOutput>;
    async fn load(&self, output: SectionOutput) -> Result<String>;
}
