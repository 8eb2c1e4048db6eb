use crate::core::filter::RelevanceFilter;
use crate::domain::model::{CandidateQuery, ContentOrigin, Post, Resolved};
use crate::domain::ports::ContentSource;

/// Sequential endpoint fallback resolution.
///
/// Candidates are tried strictly in order. Request failures, non-2xx
/// statuses, and empty batches move on to the next candidate; a candidate
/// is never retried. The first batch with relevant records wins. When
/// relevance never hits, the first fetched batch (capped) is used; when
/// nothing could be fetched at all, the supplied static dataset is.
/// Resolution itself cannot fail.
pub struct Resolver<'a, C: ContentSource> {
    source: &'a C,
    filter: RelevanceFilter,
    fallback_limit: usize,
}

impl<'a, C: ContentSource> Resolver<'a, C> {
    pub fn new(source: &'a C, filter: RelevanceFilter, fallback_limit: usize) -> Self {
        Self {
            source,
            filter,
            fallback_limit,
        }
    }

    pub async fn resolve(&self, plan: &[CandidateQuery], static_fallback: Vec<Post>) -> Resolved {
        let mut reserve: Option<Vec<Post>> = None;

        for candidate in plan {
            let label = candidate.describe();
            tracing::debug!("trying candidate {}", label);

            let batch = match self.source.fetch_batch(candidate).await {
                Ok(batch) => batch,
                Err(e) => {
                    tracing::warn!("candidate {} failed: {}", label, e);
                    continue;
                }
            };

            if batch.is_empty() {
                tracing::debug!("candidate {} returned no records", label);
                continue;
            }

            if reserve.is_none() {
                reserve = Some(batch.iter().take(self.fallback_limit).cloned().collect());
            }

            let matched = self.filter.apply(&batch);
            if !matched.is_empty() {
                tracing::info!(
                    "candidate {} matched {} of {} records",
                    label,
                    matched.len(),
                    batch.len()
                );
                return Resolved {
                    posts: matched,
                    origin: ContentOrigin::Live,
                    source: Some(label),
                };
            }

            tracing::debug!("candidate {} had no relevant records", label);
        }

        if let Some(posts) = reserve {
            tracing::warn!(
                "no candidate produced relevant records, showing {} unfiltered",
                posts.len()
            );
            return Resolved {
                posts,
                origin: ContentOrigin::Unfiltered,
                source: None,
            };
        }

        tracing::warn!("all candidates exhausted, falling back to built-in content");
        Resolved {
            posts: static_fallback,
            origin: ContentOrigin::Static,
            source: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::{self, TEAM};
    use crate::domain::model::{Rendered, TermSummary};
    use crate::utils::error::{Result, ShowcaseError};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    enum Reply {
        Records(Vec<Post>),
        Status(u16),
        Timeout,
    }

    /// Scripted content source: one reply per candidate description, and
    /// a log of every fetch for retry assertions.
    struct ScriptedSource {
        replies: HashMap<String, Reply>,
        hits: Mutex<Vec<String>>,
    }

    impl ScriptedSource {
        fn new(replies: Vec<(CandidateQuery, Reply)>) -> Self {
            Self {
                replies: replies
                    .into_iter()
                    .map(|(q, reply)| (q.describe(), reply))
                    .collect(),
                hits: Mutex::new(Vec::new()),
            }
        }

        fn hits_for(&self, query: &CandidateQuery) -> usize {
            let label = query.describe();
            self.hits
                .lock()
                .unwrap()
                .iter()
                .filter(|hit| **hit == label)
                .count()
        }
    }

    #[async_trait]
    impl ContentSource for ScriptedSource {
        async fn fetch_batch(&self, query: &CandidateQuery) -> Result<Vec<Post>> {
            let label = query.describe();
            self.hits.lock().unwrap().push(label.clone());
            match self.replies.get(&label) {
                Some(Reply::Records(posts)) => Ok(posts.clone()),
                Some(Reply::Status(status)) => Err(ShowcaseError::StatusError {
                    status: *status,
                    endpoint: label,
                }),
                Some(Reply::Timeout) => Err(ShowcaseError::TimeoutError {
                    endpoint: label,
                    seconds: 12,
                }),
                None => Ok(Vec::new()),
            }
        }

        async fn list_categories(&self) -> Result<Vec<TermSummary>> {
            Ok(Vec::new())
        }
    }

    fn post(id: u64, title: &str) -> Post {
        Post {
            id,
            title: Rendered::new(title),
            excerpt: Rendered::default(),
            content: Rendered::default(),
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

    fn search(term: &str) -> CandidateQuery {
        CandidateQuery::Search {
            term: term.to_string(),
            per_page: 50,
        }
    }

    fn team_resolver(source: &ScriptedSource) -> Resolver<'_, ScriptedSource> {
        Resolver::new(source, RelevanceFilter::for_profile(&TEAM), 6)
    }

    #[tokio::test]
    async fn first_candidate_with_relevant_records_wins() {
        let first = search("berater");
        let second = search("führung");
        let source = ScriptedSource::new(vec![
            (
                first.clone(),
                Reply::Records(vec![post(1, "Impressum"), post(2, "Beraterin im Portrait")]),
            ),
            (
                second.clone(),
                Reply::Records(vec![post(3, "Führung heute")]),
            ),
        ]);

        let resolved = team_resolver(&source)
            .resolve(&[first.clone(), second.clone()], Vec::new())
            .await;

        assert_eq!(resolved.origin, ContentOrigin::Live);
        assert_eq!(resolved.source, Some(first.describe()));
        let ids: Vec<u64> = resolved.posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
        // The winning candidate stops the chain.
        assert_eq!(source.hits_for(&second), 0);
    }

    #[tokio::test]
    async fn timeout_moves_on_and_never_retries() {
        let first = search("berater");
        let second = search("führung");
        let source = ScriptedSource::new(vec![
            (first.clone(), Reply::Timeout),
            (
                second.clone(),
                Reply::Records(vec![post(5, "Transformation konkret")]),
            ),
        ]);

        let resolved = team_resolver(&source)
            .resolve(&[first.clone(), second.clone()], Vec::new())
            .await;

        assert_eq!(resolved.origin, ContentOrigin::Live);
        assert_eq!(resolved.source, Some(second.describe()));
        assert_eq!(resolved.posts[0].id, 5);
        assert_eq!(source.hits_for(&first), 1);
        assert_eq!(source.hits_for(&second), 1);
    }

    #[tokio::test]
    async fn http_failures_and_empty_batches_are_skipped() {
        let failing = search("berater");
        let empty = search("führung");
        let good = search("transformation");
        let source = ScriptedSource::new(vec![
            (failing.clone(), Reply::Status(503)),
            (empty.clone(), Reply::Records(Vec::new())),
            (
                good.clone(),
                Reply::Records(vec![post(7, "Unser Expertenteam")]),
            ),
        ]);

        let resolved = team_resolver(&source)
            .resolve(&[failing, empty, good.clone()], Vec::new())
            .await;

        assert_eq!(resolved.origin, ContentOrigin::Live);
        assert_eq!(resolved.source, Some(good.describe()));
    }

    #[tokio::test]
    async fn exhaustion_without_fetches_yields_static_dataset() {
        let first = search("berater");
        let second = search("führung");
        let source = ScriptedSource::new(vec![
            (first.clone(), Reply::Status(500)),
            (second.clone(), Reply::Timeout),
        ]);
        let demo = vec![post(100, "Demo-Beraterin"), post(101, "Demo-Berater")];

        let resolved = team_resolver(&source)
            .resolve(&[first, second], demo.clone())
            .await;

        assert_eq!(resolved.origin, ContentOrigin::Static);
        assert_eq!(resolved.source, None);
        assert_eq!(resolved.posts, demo);
    }

    #[tokio::test]
    async fn no_relevant_records_yields_first_batch_capped() {
        let first = search("berater");
        let second = search("führung");
        let batch: Vec<Post> = (1..=8).map(|i| post(i, "Impressum")).collect();
        let source = ScriptedSource::new(vec![
            (first.clone(), Reply::Records(batch.clone())),
            (second.clone(), Reply::Records(vec![post(20, "Datenschutz")])),
        ]);

        let resolved = team_resolver(&source)
            .resolve(&[first, second], vec![post(100, "Demo")])
            .await;

        // The first fetched batch is kept, capped, in source order; the
        // static dataset is not used because something was fetched.
        assert_eq!(resolved.origin, ContentOrigin::Unfiltered);
        let ids: Vec<u64> = resolved.posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[tokio::test]
    async fn full_team_plan_resolves_via_catchall() {
        // Every specific candidate fails; the recent-posts catch-all
        // still rescues the section with relevant records.
        let plan = query::candidate_plan(&TEAM, Some(7));
        let catchall = plan.last().unwrap().clone();
        let source = ScriptedSource::new(vec![(
            catchall.clone(),
            Reply::Records(vec![post(9, "Leadership im Mittelstand")]),
        )]);

        let resolved = team_resolver(&source).resolve(&plan, Vec::new()).await;

        assert_eq!(resolved.origin, ContentOrigin::Live);
        assert_eq!(resolved.source, Some(catchall.describe()));
    }
}
