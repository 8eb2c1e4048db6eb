use crate::domain::model::{CandidateQuery, Post, SearchResults, TermSummary};
use crate::domain::ports::ContentSource;
use crate::utils::error::{Result, ShowcaseError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Parameters for the list routes (`/posts`, `/pages`, custom types).
#[derive(Debug, Clone)]
pub struct ListParams {
    pub per_page: u32,
    pub page: Option<u32>,
    pub search: Option<String>,
    pub categories: Option<u64>,
    pub tags: Option<String>,
    pub types: Vec<String>,
    pub orderby: &'static str,
    pub order: &'static str,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            per_page: 10,
            page: None,
            search: None,
            categories: None,
            tags: None,
            types: Vec::new(),
            orderby: "date",
            order: "desc",
        }
    }
}

impl ListParams {
    /// Page listings sort by menu position, oldest ordering first.
    pub fn menu_order() -> Self {
        Self {
            orderby: "menu_order",
            order: "asc",
            ..Self::default()
        }
    }

    fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("_embed".to_string(), "true".to_string()),
            ("per_page".to_string(), self.per_page.to_string()),
            ("orderby".to_string(), self.orderby.to_string()),
            ("order".to_string(), self.order.to_string()),
        ];
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        if let Some(categories) = self.categories {
            pairs.push(("categories".to_string(), categories.to_string()));
        }
        if let Some(tags) = &self.tags {
            pairs.push(("tags".to_string(), tags.clone()));
        }
        for post_type in &self.types {
            pairs.push(("type[]".to_string(), post_type.clone()));
        }
        pairs
    }
}

/// Typed adapter for the WordPress REST API (`/wp-json/wp/v2`).
#[derive(Debug, Clone)]
pub struct WpClient {
    base: String,
    client: Client,
    timeout: Duration,
}

impl WpClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        // Parse up front so a malformed base URL fails at startup, not on
        // the first candidate.
        Url::parse(base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            base: base_url.trim_end_matches('/').to_string(),
            client,
            timeout,
        })
    }

    fn endpoint(&self, route: &str) -> String {
        format!("{}/{}", self.base, route)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        route: &str,
        query: &[(String, String)],
    ) -> Result<T> {
        let endpoint = self.endpoint(route);
        tracing::debug!("GET {}", endpoint);

        let response = self
            .client
            .get(&endpoint)
            .query(query)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ShowcaseError::TimeoutError {
                        endpoint: endpoint.clone(),
                        seconds: self.timeout.as_secs(),
                    }
                } else {
                    ShowcaseError::ApiError(e)
                }
            })?;

        let status = response.status();
        tracing::debug!("{} -> {}", endpoint, status);
        if !status.is_success() {
            return Err(ShowcaseError::StatusError {
                status: status.as_u16(),
                endpoint,
            });
        }

        Ok(response.json().await?)
    }

    pub async fn posts(&self, params: &ListParams) -> Result<Vec<Post>> {
        self.get_json("posts", &params.pairs()).await
    }

    pub async fn pages(&self, params: &ListParams) -> Result<Vec<Post>> {
        self.get_json("pages", &params.pairs()).await
    }

    /// Lists a custom post-type route such as `/team` or `/portfolio`.
    pub async fn custom_posts(&self, post_type: &str, params: &ListParams) -> Result<Vec<Post>> {
        self.get_json(post_type, &params.pairs()).await
    }

    pub async fn post_by_id(&self, id: u64) -> Result<Post> {
        self.get_json(
            &format!("posts/{}", id),
            &[("_embed".to_string(), "true".to_string())],
        )
        .await
    }

    pub async fn page_by_id(&self, id: u64) -> Result<Post> {
        self.get_json(
            &format!("pages/{}", id),
            &[("_embed".to_string(), "true".to_string())],
        )
        .await
    }

    pub async fn categories(&self) -> Result<Vec<TermSummary>> {
        self.get_json(
            "categories",
            &[("per_page".to_string(), "100".to_string())],
        )
        .await
    }

    pub async fn tags(&self) -> Result<Vec<TermSummary>> {
        self.get_json("tags", &[("per_page".to_string(), "100".to_string())])
            .await
    }

    /// Combined free-text search over posts and portfolio items. The two
    /// requests run together and an arm that fails contributes an empty
    /// list instead of failing the search.
    pub async fn search(&self, term: &str) -> Result<SearchResults> {
        let post_params = ListParams {
            per_page: 5,
            search: Some(term.to_string()),
            ..ListParams::default()
        };
        let portfolio_params = ListParams {
            per_page: 5,
            search: Some(term.to_string()),
            types: vec!["post".to_string(), "portfolio".to_string()],
            ..ListParams::default()
        };

        let (posts, mixed) = tokio::join!(self.posts(&post_params), self.posts(&portfolio_params));

        let posts = posts.unwrap_or_default();
        // Keep only records showing portfolio indicators; the mixed-type
        // route returns ordinary posts as well.
        let portfolio: Vec<Post> = mixed
            .unwrap_or_default()
            .into_iter()
            .filter(|item| {
                item.post_type.as_deref() == Some("portfolio")
                    || item.custom("project_url").is_some()
                    || item.custom("client_name").is_some()
            })
            .collect();

        Ok(SearchResults { posts, portfolio })
    }

    fn candidate_pairs(query: &CandidateQuery) -> (String, Vec<(String, String)>) {
        let embed = ("_embed".to_string(), "true".to_string());
        match query {
            CandidateQuery::Category { id, per_page } => (
                "posts".to_string(),
                vec![
                    embed,
                    ("per_page".to_string(), per_page.to_string()),
                    ("categories".to_string(), id.to_string()),
                ],
            ),
            CandidateQuery::Search { term, per_page } => (
                "posts".to_string(),
                vec![
                    embed,
                    ("per_page".to_string(), per_page.to_string()),
                    ("search".to_string(), term.clone()),
                ],
            ),
            CandidateQuery::TypeFilter { types, per_page } => {
                let mut pairs = vec![
                    embed,
                    ("per_page".to_string(), per_page.to_string()),
                    ("orderby".to_string(), "date".to_string()),
                    ("order".to_string(), "desc".to_string()),
                ];
                for post_type in types {
                    pairs.push(("type[]".to_string(), post_type.clone()));
                }
                ("posts".to_string(), pairs)
            }
            CandidateQuery::Route {
                post_type,
                per_page,
            } => (
                post_type.clone(),
                vec![embed, ("per_page".to_string(), per_page.to_string())],
            ),
            CandidateQuery::Tag { slug, per_page } => (
                "posts".to_string(),
                vec![
                    embed,
                    ("per_page".to_string(), per_page.to_string()),
                    ("tags".to_string(), slug.clone()),
                ],
            ),
            CandidateQuery::Recent { per_page } => (
                "posts".to_string(),
                vec![
                    embed,
                    ("per_page".to_string(), per_page.to_string()),
                    ("orderby".to_string(), "date".to_string()),
                    ("order".to_string(), "desc".to_string()),
                ],
            ),
        }
    }
}

#[async_trait]
impl ContentSource for WpClient {
    async fn fetch_batch(&self, query: &CandidateQuery) -> Result<Vec<Post>> {
        let (route, pairs) = Self::candidate_pairs(query);
        self.get_json(&route, &pairs).await
    }

    async fn list_categories(&self) -> Result<Vec<TermSummary>> {
        self.categories().await
    }
}
