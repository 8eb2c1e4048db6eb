use crate::core::fallback;
use crate::core::filter::RelevanceFilter;
use crate::core::query::{self, SectionProfile};
use crate::core::resolver::Resolver;
use crate::domain::cards::{AdvisorCard, PostCard, ProjectCard, SectionOutput};
use crate::domain::model::{CandidateQuery, ContentOrigin, Post, Resolved};
use crate::domain::ports::{ContentSource, SectionPipeline, Storage};
use crate::utils::error::Result;
use crate::utils::text;
use async_trait::async_trait;

/// Looks up the section's category id on the CMS. Discovery is best
/// effort: any failure just removes the category candidate from the plan.
async fn discover_category<C: ContentSource>(
    source: &C,
    profile: &SectionProfile,
) -> Option<u64> {
    if profile.category_name_hints.is_empty() && profile.category_slug_hints.is_empty() {
        return None;
    }
    match source.list_categories().await {
        Ok(terms) => {
            let found = query::find_profile_category(profile, &terms);
            match found {
                Some(id) => tracing::info!("found '{}' category (id {})", profile.name, id),
                None => tracing::debug!("no '{}' category on the CMS", profile.name),
            }
            found
        }
        Err(e) => {
            tracing::debug!("category discovery failed: {}", e);
            None
        }
    }
}

async fn resolve_profile<C: ContentSource>(
    source: &C,
    profile: &SectionProfile,
    fallback_limit: usize,
    static_fallback: Vec<Post>,
) -> Resolved {
    let discovered = discover_category(source, profile).await;
    let plan = query::candidate_plan(profile, discovered);
    Resolver::new(source, RelevanceFilter::for_profile(profile), fallback_limit)
        .resolve(&plan, static_fallback)
        .await
}

/// Splits a comma-separated custom field into trimmed entries.
fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

async fn write_section<S: Storage>(
    storage: &S,
    file_name: &str,
    output: &SectionOutput,
) -> Result<String> {
    let data = serde_json::to_vec_pretty(output)?;
    storage.write_file(file_name, &data).await?;
    Ok(file_name.to_string())
}

/// Advisor team section.
pub struct TeamSection<C: ContentSource, S: Storage> {
    source: C,
    storage: S,
    fallback_limit: usize,
}

impl<C: ContentSource, S: Storage> TeamSection<C, S> {
    pub fn new(source: C, storage: S, fallback_limit: usize) -> Self {
        Self {
            source,
            storage,
            fallback_limit,
        }
    }

    fn card(post: &Post, origin: ContentOrigin) -> AdvisorCard {
        // Records arriving through the unfiltered fallback are ordinary
        // posts, not profiles; label them as such.
        let default_position = match origin {
            ContentOrigin::Unfiltered => "Beitrag",
            _ => "Senior Berater",
        };

        let bio = post
            .custom("berater_bio")
            .map(str::to_string)
            .unwrap_or_else(|| {
                let from_excerpt = text::strip_html(&post.excerpt.rendered);
                if from_excerpt.is_empty() {
                    text::excerpt(&post.content.rendered, 150)
                } else {
                    from_excerpt
                }
            });

        AdvisorCard {
            id: post.id,
            name: text::strip_html(&post.title.rendered),
            position: post
                .custom("berater_position")
                .unwrap_or(default_position)
                .to_string(),
            email: post.custom("berater_email").map(str::to_string),
            phone: post.custom("berater_phone").map(str::to_string),
            linkedin: post.custom("berater_linkedin").map(str::to_string),
            location: post.custom("berater_location").map(str::to_string),
            bio,
            experience: post.custom("berater_experience").map(str::to_string),
            education: post.custom("berater_education").map(str::to_string),
            certifications: post.custom("berater_certifications").map(str::to_string),
            languages: post.custom("berater_languages").map(str::to_string),
            specialties: split_list(post.custom("berater_specialties")),
            image: post.featured_image().map(str::to_string),
            link: post.link.clone(),
        }
    }
}

#[async_trait]
impl<C: ContentSource, S: Storage> SectionPipeline for TeamSection<C, S> {
    fn name(&self) -> &str {
        "team"
    }

    async fn extract(&self) -> Result<Resolved> {
        Ok(resolve_profile(
            &self.source,
            &query::TEAM,
            self.fallback_limit,
            fallback::demo_advisors(),
        )
        .await)
    }

    async fn transform(&self, resolved: Resolved) -> Result<SectionOutput> {
        let cards: Vec<AdvisorCard> = resolved
            .posts
            .iter()
            .map(|post| Self::card(post, resolved.origin))
            .collect();
        let notice = (resolved.origin == ContentOrigin::Static).then(fallback::team_notice);
        SectionOutput::new(self.name(), resolved.origin, notice, &cards)
    }

    async fn load(&self, output: SectionOutput) -> Result<String> {
        write_section(&self.storage, "team.json", &output).await
    }
}

/// Portfolio project section.
pub struct PortfolioSection<C: ContentSource, S: Storage> {
    source: C,
    storage: S,
    fallback_limit: usize,
}

impl<C: ContentSource, S: Storage> PortfolioSection<C, S> {
    pub fn new(source: C, storage: S, fallback_limit: usize) -> Self {
        Self {
            source,
            storage,
            fallback_limit,
        }
    }

    fn card(post: &Post) -> ProjectCard {
        ProjectCard {
            id: post.id,
            title: text::strip_html(&post.title.rendered),
            client: post.custom("client_name").map(str::to_string),
            project_type: post.custom("project_type").map(str::to_string),
            technologies: split_list(post.custom("technologies")),
            summary: text::strip_html(&post.excerpt.rendered),
            date: text::format_date(&post.date),
            link: post.link.clone(),
            project_url: post.custom("project_url").map(str::to_string),
            image: post.featured_image().map(str::to_string),
            tags: post
                .tag_terms()
                .into_iter()
                .map(|term| term.name.clone())
                .collect(),
        }
    }
}

#[async_trait]
impl<C: ContentSource, S: Storage> SectionPipeline for PortfolioSection<C, S> {
    fn name(&self) -> &str {
        "portfolio"
    }

    async fn extract(&self) -> Result<Resolved> {
        Ok(resolve_profile(
            &self.source,
            &query::PORTFOLIO,
            self.fallback_limit,
            fallback::demo_projects(),
        )
        .await)
    }

    async fn transform(&self, resolved: Resolved) -> Result<SectionOutput> {
        let cards: Vec<ProjectCard> = resolved.posts.iter().map(Self::card).collect();
        let notice = (resolved.origin == ContentOrigin::Static).then(fallback::portfolio_notice);
        SectionOutput::new(self.name(), resolved.origin, notice, &cards)
    }

    async fn load(&self, output: SectionOutput) -> Result<String> {
        write_section(&self.storage, "portfolio.json", &output).await
    }
}

/// Recent blog posts, unfiltered by design.
pub struct NewsSection<C: ContentSource, S: Storage> {
    source: C,
    storage: S,
    per_page: u32,
    fallback_limit: usize,
}

impl<C: ContentSource, S: Storage> NewsSection<C, S> {
    pub fn new(source: C, storage: S, per_page: u32, fallback_limit: usize) -> Self {
        Self {
            source,
            storage,
            per_page,
            fallback_limit,
        }
    }

    fn card(post: &Post) -> PostCard {
        let summary = {
            let from_excerpt = text::strip_html(&post.excerpt.rendered);
            if from_excerpt.is_empty() {
                text::excerpt(&post.content.rendered, 150)
            } else {
                from_excerpt
            }
        };
        PostCard {
            id: post.id,
            title: text::strip_html(&post.title.rendered),
            summary,
            date: text::format_date(&post.date),
            link: post.link.clone(),
            author: post.author_name().map(str::to_string),
            image: post.featured_image().map(str::to_string),
            categories: post
                .category_terms()
                .into_iter()
                .map(|term| term.name.clone())
                .collect(),
        }
    }
}

#[async_trait]
impl<C: ContentSource, S: Storage> SectionPipeline for NewsSection<C, S> {
    fn name(&self) -> &str {
        "news"
    }

    async fn extract(&self) -> Result<Resolved> {
        let plan = vec![CandidateQuery::Recent {
            per_page: self.per_page,
        }];
        Ok(Resolver::new(
            &self.source,
            RelevanceFilter::for_profile(&query::NEWS),
            self.fallback_limit,
        )
        .resolve(&plan, fallback::demo_news())
        .await)
    }

    async fn transform(&self, resolved: Resolved) -> Result<SectionOutput> {
        let cards: Vec<PostCard> = resolved.posts.iter().map(Self::card).collect();
        let notice = (resolved.origin == ContentOrigin::Static).then(fallback::news_notice);
        SectionOutput::new(self.name(), resolved.origin, notice, &cards)
    }

    async fn load(&self, output: SectionOutput) -> Result<String> {
        write_section(&self.storage, "news.json", &output).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CustomFields, Rendered};

    fn advisor_post() -> Post {
        let mut fields = CustomFields::default();
        fields.set("berater_position", "Managing Partner");
        fields.set("berater_email", "kb@cockpit4me.de");
        fields.set("berater_specialties", "Strategieberatung, Leadership , ");
        Post {
            id: 1,
            title: Rendered::new("Dr. Katharina <strong>Brandt</strong>"),
            excerpt: Rendered::new("<p>Begleitet Führungsteams.</p>"),
            content: Rendered::new("<p>Langtext</p>"),
            date: "2024-03-15T10:30:00".to_string(),
            modified: None,
            link: "https://cockpit4me.de/team/kb".to_string(),
            author: None,
            categories: Vec::new(),
            tags: Vec::new(),
            featured_media: None,
            post_type: Some("post".to_string()),
            acf: Some(fields),
            embedded: None,
        }
    }

    #[test]
    fn advisor_card_maps_custom_fields_and_strips_markup() {
        let card = TeamSection::<
            crate::adapters::http::WpClient,
            crate::adapters::storage::LocalStorage,
        >::card(&advisor_post(), ContentOrigin::Live);

        assert_eq!(card.name, "Dr. Katharina Brandt");
        assert_eq!(card.position, "Managing Partner");
        assert_eq!(card.email.as_deref(), Some("kb@cockpit4me.de"));
        assert_eq!(card.bio, "Begleitet Führungsteams.");
        assert_eq!(card.specialties, vec!["Strategieberatung", "Leadership"]);
    }

    #[test]
    fn advisor_card_position_defaults_depend_on_origin() {
        let mut post = advisor_post();
        post.acf = None;

        type Section =
            TeamSection<crate::adapters::http::WpClient, crate::adapters::storage::LocalStorage>;
        let live = Section::card(&post, ContentOrigin::Live);
        let unfiltered = Section::card(&post, ContentOrigin::Unfiltered);

        assert_eq!(live.position, "Senior Berater");
        assert_eq!(unfiltered.position, "Beitrag");
    }

    #[test]
    fn project_card_splits_technologies_and_formats_date() {
        let mut fields = CustomFields::default();
        fields.set("client_name", "Muster GmbH");
        fields.set("technologies", "Workshops,Coaching");
        let mut post = advisor_post();
        post.acf = Some(fields);

        let card = PortfolioSection::<
            crate::adapters::http::WpClient,
            crate::adapters::storage::LocalStorage,
        >::card(&post);

        assert_eq!(card.client.as_deref(), Some("Muster GmbH"));
        assert_eq!(card.technologies, vec!["Workshops", "Coaching"]);
        assert_eq!(card.date, "15. M\u{e4}rz 2024");
        assert_eq!(card.summary, "Begleitet F\u{fc}hrungsteams.");
    }

    #[test]
    fn news_card_falls_back_to_truncated_content() {
        let mut post = advisor_post();
        post.excerpt = Rendered::default();
        post.content = Rendered::new(format!("<p>{}</p>", "a".repeat(200)));

        let card = NewsSection::<
            crate::adapters::http::WpClient,
            crate::adapters::storage::LocalStorage,
        >::card(&post);

        assert!(card.summary.ends_with("..."));
        assert_eq!(card.summary.chars().count(), 153);
    }
}
