use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// WordPress wraps every rich-text field in a `{ "rendered": ... }` object.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Rendered {
    pub rendered: String,
}

impl Rendered {
    pub fn new(rendered: impl Into<String>) -> Self {
        Self {
            rendered: rendered.into(),
        }
    }
}

/// Custom-field payload (`acf`). The set of keys differs per post type, so
/// this stays a map with typed accessors instead of a parallel struct per
/// section.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct CustomFields(pub BTreeMap<String, serde_json::Value>);

impl CustomFields {
    /// Returns the trimmed string value of a field, or `None` when the
    /// field is absent, non-string, or blank.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn is_set(&self, key: &str) -> bool {
        self.text(key).is_some()
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.0
            .insert(key.to_string(), serde_json::Value::String(value.to_string()));
    }
}

// ACF serializes "no fields" as `false` or `[]` rather than an object;
// anything that is not an object becomes an empty map.
impl<'de> Deserialize<'de> for CustomFields {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::Object(map) => Ok(Self(map.into_iter().collect())),
            _ => Ok(Self::default()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TermRef {
    pub id: u64,
    pub name: String,
    pub taxonomy: String,
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddedAuthor {
    pub name: String,
    #[serde(default)]
    pub avatar_urls: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MediaSize {
    pub source_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MediaDetails {
    #[serde(default)]
    pub sizes: BTreeMap<String, MediaSize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddedMedia {
    pub source_url: String,
    #[serde(default)]
    pub alt_text: String,
    #[serde(default)]
    pub media_details: Option<MediaDetails>,
}

/// The `_embedded` payload requested via `_embed=true`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Embedded {
    #[serde(default)]
    pub author: Vec<EmbeddedAuthor>,
    #[serde(default, rename = "wp:featuredmedia")]
    pub featured_media: Vec<EmbeddedMedia>,
    #[serde(default, rename = "wp:term")]
    pub terms: Vec<Vec<TermRef>>,
}

/// A WordPress post. Pages and custom post types share this shape; pages
/// additionally carry `modified`, custom types carry `type` and `acf`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: u64,
    pub title: Rendered,
    #[serde(default)]
    pub excerpt: Rendered,
    #[serde(default)]
    pub content: Rendered,
    pub date: String,
    #[serde(default)]
    pub modified: Option<String>,
    pub link: String,
    #[serde(default)]
    pub author: Option<u64>,
    #[serde(default)]
    pub categories: Vec<u64>,
    #[serde(default)]
    pub tags: Vec<u64>,
    #[serde(default)]
    pub featured_media: Option<u64>,
    #[serde(default, rename = "type")]
    pub post_type: Option<String>,
    #[serde(default)]
    pub acf: Option<CustomFields>,
    #[serde(default, rename = "_embedded")]
    pub embedded: Option<Embedded>,
}

impl Post {
    fn terms_of(&self, taxonomy: &str) -> Vec<&TermRef> {
        let Some(embedded) = &self.embedded else {
            return Vec::new();
        };
        // Term groups arrive per taxonomy; the first group containing the
        // wanted taxonomy wins.
        for group in &embedded.terms {
            let matches: Vec<&TermRef> = group
                .iter()
                .filter(|term| term.taxonomy == taxonomy)
                .collect();
            if !matches.is_empty() {
                return matches;
            }
        }
        Vec::new()
    }

    pub fn category_terms(&self) -> Vec<&TermRef> {
        self.terms_of("category")
    }

    pub fn tag_terms(&self) -> Vec<&TermRef> {
        self.terms_of("post_tag")
    }

    /// Best-fit featured image: prefers the large rendition, then medium,
    /// then full, then the original source URL.
    pub fn featured_image(&self) -> Option<&str> {
        let media = self.embedded.as_ref()?.featured_media.first()?;
        if let Some(details) = &media.media_details {
            for size in ["large", "medium", "full"] {
                if let Some(rendition) = details.sizes.get(size) {
                    return Some(&rendition.source_url);
                }
            }
        }
        Some(&media.source_url)
    }

    pub fn author_name(&self) -> Option<&str> {
        self.embedded
            .as_ref()?
            .author
            .first()
            .map(|a| a.name.as_str())
    }

    pub fn custom(&self, key: &str) -> Option<&str> {
        self.acf.as_ref().and_then(|fields| fields.text(key))
    }
}

/// Category/tag listing entry from the `/categories` and `/tags` routes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TermSummary {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub count: u64,
}

/// One URL/parameter combination in a section's fallback plan. Candidates
/// are tried strictly in order; the variants mirror the query shapes the
/// CMS exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateQuery {
    /// Posts in a specific category id.
    Category { id: u64, per_page: u32 },
    /// Free-text search over posts.
    Search { term: String, per_page: u32 },
    /// Posts restricted to one or more `type[]` values.
    TypeFilter { types: Vec<String>, per_page: u32 },
    /// A custom post-type REST route (e.g. `/team`).
    Route { post_type: String, per_page: u32 },
    /// Posts carrying a tag, addressed by slug.
    Tag { slug: String, per_page: u32 },
    /// Most recent posts, newest first.
    Recent { per_page: u32 },
}

impl CandidateQuery {
    /// Stable human-readable form, used for logs and origin reporting.
    pub fn describe(&self) -> String {
        match self {
            Self::Category { id, per_page } => {
                format!("posts?categories={}&per_page={}", id, per_page)
            }
            Self::Search { term, per_page } => {
                format!("posts?search={}&per_page={}", term, per_page)
            }
            Self::TypeFilter { types, per_page } => {
                format!("posts?type[]={}&per_page={}", types.join("&type[]="), per_page)
            }
            Self::Route {
                post_type,
                per_page,
            } => format!("{}?per_page={}", post_type, per_page),
            Self::Tag { slug, per_page } => format!("posts?tags={}&per_page={}", slug, per_page),
            Self::Recent { per_page } => {
                format!("posts?per_page={}&orderby=date&order=desc", per_page)
            }
        }
    }
}

/// Where a resolved batch came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentOrigin {
    /// A candidate query produced relevant matches.
    Live,
    /// No candidate matched; the first fetched batch is shown instead.
    Unfiltered,
    /// Nothing could be fetched; built-in demo content is shown.
    Static,
}

/// Output of the endpoint fallback resolution for one section.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub posts: Vec<Post>,
    pub origin: ContentOrigin,
    /// Description of the winning candidate query, for live results.
    pub source: Option<String>,
}

/// Combined free-text search across posts and portfolio items.
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    pub posts: Vec<Post>,
    pub portfolio: Vec<Post>,
}

impl SearchResults {
    pub fn total(&self) -> usize {
        self.posts.len() + self.portfolio.len()
    }
}
