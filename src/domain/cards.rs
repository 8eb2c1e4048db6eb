use crate::domain::model::ContentOrigin;
use serde::{Deserialize, Serialize};

/// Portfolio project card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectCard {
    pub id: u64,
    pub title: String,
    pub client: Option<String>,
    pub project_type: Option<String>,
    pub technologies: Vec<String>,
    pub summary: String,
    pub date: String,
    pub link: String,
    pub project_url: Option<String>,
    pub image: Option<String>,
    pub tags: Vec<String>,
}

/// Advisor profile card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdvisorCard {
    pub id: u64,
    pub name: String,
    pub position: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub location: Option<String>,
    pub bio: String,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub certifications: Option<String>,
    pub languages: Option<String>,
    pub specialties: Vec<String>,
    pub image: Option<String>,
    pub link: String,
}

/// Plain news/blog card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostCard {
    pub id: u64,
    pub title: String,
    pub summary: String,
    pub date: String,
    pub link: String,
    pub author: Option<String>,
    pub image: Option<String>,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NoticeLink {
    pub label: String,
    pub url: String,
}

/// User-visible notice shown when a section renders built-in content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetupNotice {
    pub headline: String,
    pub message: String,
    pub links: Vec<NoticeLink>,
}

/// One section's final payload: origin-tagged cards plus an optional
/// setup notice, ready to be written out as a JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionOutput {
    pub section: String,
    pub origin: ContentOrigin,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<SetupNotice>,
    pub cards: serde_json::Value,
}

impl SectionOutput {
    pub fn new<T: Serialize>(
        section: &str,
        origin: ContentOrigin,
        notice: Option<SetupNotice>,
        cards: &[T],
    ) -> crate::utils::error::Result<Self> {
        Ok(Self {
            section: section.to_string(),
            origin,
            count: cards.len(),
            notice,
            cards: serde_json::to_value(cards)?,
        })
    }
}
