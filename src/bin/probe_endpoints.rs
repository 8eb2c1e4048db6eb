use anyhow::Result;
use std::time::Duration;
use wp_showcase::core::filter::RelevanceFilter;
use wp_showcase::core::query;
use wp_showcase::domain::ports::ContentSource;
use wp_showcase::WpClient;

/// Walks every section's candidate plan against a CMS and reports what
/// each endpoint would contribute. Useful when setting up categories and
/// custom fields on the WordPress side.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://cockpit4me.de/wp-json/wp/v2".to_string());

    println!("🚀 Probing CMS endpoints at {}", base_url);
    let client = WpClient::new(&base_url, Duration::from_secs(12))?;

    let mut discovered = Vec::new();
    match client.categories().await {
        Ok(terms) => {
            println!("✅ {} categories available", terms.len());
            for profile in [query::TEAM, query::PORTFOLIO] {
                if let Some(id) = query::find_profile_category(&profile, &terms) {
                    println!("  - '{}' category id: {}", profile.name, id);
                    discovered.push((profile.name, id));
                }
            }
        }
        Err(e) => println!("❌ Category listing failed: {}", e),
    }

    for profile in [query::TEAM, query::PORTFOLIO, query::NEWS] {
        println!("\n📋 Section '{}'", profile.name);
        let category = discovered
            .iter()
            .find(|(name, _)| *name == profile.name)
            .map(|(_, id)| *id);
        let filter = RelevanceFilter::for_profile(&profile);

        for candidate in query::candidate_plan(&profile, category) {
            match client.fetch_batch(&candidate).await {
                Ok(batch) => {
                    let relevant = filter.apply(&batch).len();
                    println!(
                        "  ✅ {}: {} records, {} relevant",
                        candidate.describe(),
                        batch.len(),
                        relevant
                    );
                }
                Err(e) => println!("  ❌ {}: {}", candidate.describe(), e),
            }
        }
    }

    match client.search("beratung").await {
        Ok(results) => println!(
            "\n🔍 Search 'beratung': {} posts, {} portfolio items",
            results.posts.len(),
            results.portfolio.len()
        ),
        Err(e) => println!("\n❌ Search failed: {}", e),
    }

    println!("\n🎉 Probe complete");
    Ok(())
}
