use crate::core::query::SectionProfile;
use crate::domain::model::Post;

/// Boolean relevance heuristic for one section. Built once from a
/// profile; matching is a pure function of the record, with no scoring
/// and no reordering.
#[derive(Debug, Clone)]
pub struct RelevanceFilter {
    keywords: Vec<String>,
    term_needles: Vec<String>,
    slugs: Vec<String>,
    post_types: Vec<String>,
    custom_fields: Vec<String>,
}

impl RelevanceFilter {
    pub fn for_profile(profile: &SectionProfile) -> Self {
        let lower = |items: &[&str]| items.iter().map(|s| s.to_lowercase()).collect();
        Self {
            keywords: lower(profile.keywords),
            term_needles: lower(profile.term_needles),
            slugs: lower(profile.slugs),
            post_types: profile.post_types.iter().map(|s| s.to_string()).collect(),
            custom_fields: profile
                .custom_fields
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// A profile with no constraints accepts every record.
    pub fn is_unconstrained(&self) -> bool {
        self.keywords.is_empty()
            && self.term_needles.is_empty()
            && self.slugs.is_empty()
            && self.post_types.is_empty()
            && self.custom_fields.is_empty()
    }

    pub fn is_relevant(&self, post: &Post) -> bool {
        if self.is_unconstrained() {
            return true;
        }
        self.matches_post_type(post)
            || self.matches_terms(post)
            || self.matches_keywords(post)
            || self.matches_custom_fields(post)
    }

    /// Keeps relevant records in source order.
    pub fn apply(&self, posts: &[Post]) -> Vec<Post> {
        posts
            .iter()
            .filter(|post| self.is_relevant(post))
            .cloned()
            .collect()
    }

    fn matches_post_type(&self, post: &Post) -> bool {
        post.post_type
            .as_deref()
            .is_some_and(|t| self.post_types.iter().any(|wanted| wanted == t))
    }

    fn matches_terms(&self, post: &Post) -> bool {
        post.category_terms()
            .into_iter()
            .chain(post.tag_terms())
            .any(|term| {
                let name = term.name.to_lowercase();
                let slug = term.slug.to_lowercase();
                self.term_needles.iter().any(|needle| name.contains(needle))
                    || self
                        .slugs
                        .iter()
                        .any(|wanted| slug == *wanted || slug.contains(wanted))
            })
    }

    fn matches_keywords(&self, post: &Post) -> bool {
        if self.keywords.is_empty() {
            return false;
        }
        let title = post.title.rendered.to_lowercase();
        let excerpt = post.excerpt.rendered.to_lowercase();
        let content = post.content.rendered.to_lowercase();
        self.keywords.iter().any(|keyword| {
            title.contains(keyword) || excerpt.contains(keyword) || content.contains(keyword)
        })
    }

    fn matches_custom_fields(&self, post: &Post) -> bool {
        self.custom_fields
            .iter()
            .any(|key| post.custom(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::{NEWS, PORTFOLIO, TEAM};
    use crate::domain::model::{CustomFields, Embedded, Post, Rendered, TermRef};

    fn plain_post(id: u64, title: &str, content: &str) -> Post {
        Post {
            id,
            title: Rendered::new(title),
            excerpt: Rendered::default(),
            content: Rendered::new(content),
            date: "2024-01-10T08:00:00".to_string(),
            modified: None,
            link: format!("https://cockpit4me.de/?p={}", id),
            author: None,
            categories: Vec::new(),
            tags: Vec::new(),
            featured_media: None,
            post_type: Some("post".to_string()),
            acf: None,
            embedded: None,
        }
    }

    fn with_category(mut post: Post, name: &str, slug: &str) -> Post {
        post.embedded = Some(Embedded {
            terms: vec![vec![TermRef {
                id: 1,
                name: name.to_string(),
                taxonomy: "category".to_string(),
                slug: slug.to_string(),
            }]],
            ..Embedded::default()
        });
        post
    }

    #[test]
    fn keyword_in_title_matches() {
        let filter = RelevanceFilter::for_profile(&TEAM);
        assert!(filter.is_relevant(&plain_post(1, "Unser Senior Partner", "")));
        assert!(!filter.is_relevant(&plain_post(2, "Impressum", "Rechtliches")));
    }

    #[test]
    fn keyword_match_is_case_folded() {
        let filter = RelevanceFilter::for_profile(&TEAM);
        assert!(filter.is_relevant(&plain_post(1, "BERATER im Portrait", "")));
        assert!(filter.is_relevant(&plain_post(2, "Neues", "Unsere Transformation beginnt")));
    }

    #[test]
    fn category_name_fragment_matches() {
        let filter = RelevanceFilter::for_profile(&TEAM);
        let post = with_category(plain_post(3, "Portrait", ""), "Unsere Berater", "team-x");
        assert!(filter.is_relevant(&post));
    }

    #[test]
    fn slug_matches_exactly_or_as_substring() {
        let filter = RelevanceFilter::for_profile(&TEAM);
        let exact = with_category(plain_post(4, "Portrait", ""), "Leute", "berater");
        let substring = with_category(plain_post(5, "Portrait", ""), "Leute", "unsere-berater");
        let miss = with_category(plain_post(6, "Portrait", ""), "Leute", "allgemein");
        assert!(filter.is_relevant(&exact));
        assert!(filter.is_relevant(&substring));
        assert!(!filter.is_relevant(&miss));
    }

    #[test]
    fn populated_custom_field_alone_is_relevant() {
        let filter = RelevanceFilter::for_profile(&TEAM);
        let mut post = plain_post(7, "Ohne Stichwort", "Nichts Passendes");
        let mut fields = CustomFields::default();
        fields.set("berater_email", "jemand@cockpit4me.de");
        post.acf = Some(fields);
        assert!(filter.is_relevant(&post));
    }

    #[test]
    fn blank_custom_field_does_not_count() {
        let filter = RelevanceFilter::for_profile(&TEAM);
        let mut post = plain_post(8, "Ohne Stichwort", "");
        let mut fields = CustomFields::default();
        fields.set("berater_email", "   ");
        post.acf = Some(fields);
        assert!(!filter.is_relevant(&post));
    }

    #[test]
    fn portfolio_matches_on_post_type_or_indicator_fields() {
        let filter = RelevanceFilter::for_profile(&PORTFOLIO);

        let mut typed = plain_post(9, "Projekt X", "");
        typed.post_type = Some("portfolio".to_string());
        assert!(filter.is_relevant(&typed));

        let mut fielded = plain_post(10, "Beitrag", "");
        let mut fields = CustomFields::default();
        fields.set("client_name", "Muster GmbH");
        fielded.acf = Some(fields);
        assert!(filter.is_relevant(&fielded));

        assert!(!filter.is_relevant(&plain_post(11, "Beitrag", "")));
    }

    #[test]
    fn filter_is_pure() {
        let filter = RelevanceFilter::for_profile(&TEAM);
        let post = plain_post(12, "Leadership im Wandel", "");
        let first = filter.is_relevant(&post);
        for _ in 0..10 {
            assert_eq!(filter.is_relevant(&post), first);
        }
    }

    #[test]
    fn apply_preserves_source_order() {
        let filter = RelevanceFilter::for_profile(&TEAM);
        let batch = vec![
            plain_post(1, "Berater A", ""),
            plain_post(2, "Impressum", ""),
            plain_post(3, "Berater B", ""),
            plain_post(4, "Berater C", ""),
        ];
        let kept = filter.apply(&batch);
        let ids: Vec<u64> = kept.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn unconstrained_profile_accepts_everything() {
        let filter = RelevanceFilter::for_profile(&NEWS);
        assert!(filter.is_unconstrained());
        assert!(filter.is_relevant(&plain_post(13, "Impressum", "")));
    }
}
