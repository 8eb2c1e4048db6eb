use crate::domain::model::{CandidateQuery, TermSummary};

/// Fixed per-section heuristic: which keywords, taxonomies, post types,
/// and custom fields mark a record as belonging to the section, and which
/// queries to try, in order, to find such records.
#[derive(Debug, Clone, Copy)]
pub struct SectionProfile {
    pub name: &'static str,
    /// Case-folded needles matched against title/excerpt/content.
    pub keywords: &'static [&'static str],
    /// Case-folded fragments matched against category/tag names.
    pub term_needles: &'static [&'static str],
    /// Taxonomy slugs matched exactly or as substring.
    pub slugs: &'static [&'static str],
    /// `type` values that mark a record as relevant on their own.
    pub post_types: &'static [&'static str],
    /// Custom-field keys whose presence marks a record as relevant.
    pub custom_fields: &'static [&'static str],
    /// Free-text search candidates.
    pub search_terms: &'static [&'static str],
    /// Custom post-type REST routes to try.
    pub routes: &'static [&'static str],
    /// Tag-slug candidates.
    pub tag_slugs: &'static [&'static str],
    /// `type[]` values for the mixed-type posts candidate.
    pub type_filters: &'static [&'static str],
    /// Category-name fragments used for category discovery.
    pub category_name_hints: &'static [&'static str],
    /// Category slugs used for category discovery.
    pub category_slug_hints: &'static [&'static str],
    pub primary_per_page: u32,
    pub catchall_per_page: u32,
}

pub const TEAM: SectionProfile = SectionProfile {
    name: "team",
    keywords: &[
        "berater",
        "consultant",
        "führung",
        "leadership",
        "transformation",
        "senior",
        "partner",
        "director",
        "experte",
        "spezialist",
    ],
    term_needles: &["berater", "führung", "transformation"],
    slugs: &["berater"],
    post_types: &[],
    custom_fields: &[
        "berater_position",
        "berater_email",
        "berater_linkedin",
        "berater_specialties",
    ],
    search_terms: &["berater", "führung", "transformation"],
    routes: &["team", "berater"],
    tag_slugs: &["berater"],
    type_filters: &[],
    category_name_hints: &["unsere berater", "berater für führung"],
    category_slug_hints: &["berater"],
    primary_per_page: 50,
    catchall_per_page: 20,
};

pub const PORTFOLIO: SectionProfile = SectionProfile {
    name: "portfolio",
    keywords: &[],
    term_needles: &[],
    slugs: &[],
    post_types: &["portfolio"],
    custom_fields: &["project_url", "client_name"],
    search_terms: &["projekt"],
    routes: &["portfolio"],
    tag_slugs: &[],
    type_filters: &["post", "portfolio"],
    category_name_hints: &[],
    category_slug_hints: &[],
    primary_per_page: 6,
    catchall_per_page: 12,
};

/// Unconstrained: the single recent-posts candidate resolves as live.
pub const NEWS: SectionProfile = SectionProfile {
    name: "news",
    keywords: &[],
    term_needles: &[],
    slugs: &[],
    post_types: &[],
    custom_fields: &[],
    search_terms: &[],
    routes: &[],
    tag_slugs: &[],
    type_filters: &[],
    category_name_hints: &[],
    category_slug_hints: &[],
    primary_per_page: 10,
    catchall_per_page: 10,
};

/// Assembles the ordered candidate plan for a profile. A discovered
/// category id, when present, is always the first candidate.
pub fn candidate_plan(
    profile: &SectionProfile,
    discovered_category: Option<u64>,
) -> Vec<CandidateQuery> {
    let mut plan = Vec::new();

    if let Some(id) = discovered_category {
        plan.push(CandidateQuery::Category {
            id,
            per_page: profile.primary_per_page,
        });
    }

    if !profile.type_filters.is_empty() {
        plan.push(CandidateQuery::TypeFilter {
            types: profile.type_filters.iter().map(|t| t.to_string()).collect(),
            per_page: profile.primary_per_page,
        });
    }

    for term in profile.search_terms {
        plan.push(CandidateQuery::Search {
            term: term.to_string(),
            per_page: profile.primary_per_page,
        });
    }

    for route in profile.routes {
        plan.push(CandidateQuery::Route {
            post_type: route.to_string(),
            per_page: profile.primary_per_page,
        });
    }

    for slug in profile.tag_slugs {
        plan.push(CandidateQuery::Tag {
            slug: slug.to_string(),
            per_page: profile.primary_per_page,
        });
    }

    plan.push(CandidateQuery::Recent {
        per_page: profile.catchall_per_page,
    });

    plan
}

/// Picks the category id for a profile from the CMS category listing, by
/// name fragment or slug. The first match wins.
pub fn find_profile_category(profile: &SectionProfile, terms: &[TermSummary]) -> Option<u64> {
    terms
        .iter()
        .find(|term| {
            let name = term.name.to_lowercase();
            let slug = term.slug.to_lowercase();
            profile
                .category_name_hints
                .iter()
                .any(|hint| name.contains(hint))
                || profile
                    .category_slug_hints
                    .iter()
                    .any(|hint| slug == *hint || slug.contains(hint))
        })
        .map(|term| term.id)
}
