use clap::Parser;
use std::time::Duration;
use wp_showcase::domain::ports::ConfigProvider;
use wp_showcase::utils::{logger, validation::Validate};
use wp_showcase::{
    CliConfig, LocalStorage, NewsSection, PortfolioSection, SectionEngine, SiteConfig,
    TeamSection, WpClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting wp-showcase");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = if let Some(path) = &cli.config {
        match SiteConfig::from_file(path) {
            Ok(site) => {
                if let Err(e) = site.validate() {
                    fail_validation(&e);
                }
                let sections = site.enabled_sections();
                run(&site, &sections).await
            }
            Err(e) => fail_validation(&e),
        }
    } else {
        if let Err(e) = cli.validate() {
            fail_validation(&e);
        }
        run(&cli, &cli.sections).await
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Section run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            wp_showcase::utils::error::ErrorSeverity::Low => 0,
            wp_showcase::utils::error::ErrorSeverity::Medium => 2,
            wp_showcase::utils::error::ErrorSeverity::High => 1,
            wp_showcase::utils::error::ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn fail_validation(e: &wp_showcase::ShowcaseError) -> ! {
    tracing::error!("❌ Configuration validation failed: {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(1);
}

async fn run<C: ConfigProvider>(config: &C, sections: &[String]) -> wp_showcase::Result<()> {
    let client = WpClient::new(
        config.base_url(),
        Duration::from_secs(config.timeout_seconds()),
    )?;
    let storage = LocalStorage::new(config.output_path().to_string());

    // Sections run strictly one after another; each owns its own state.
    for section in sections {
        let file = match section.as_str() {
            "team" => {
                SectionEngine::new(TeamSection::new(
                    client.clone(),
                    storage.clone(),
                    config.fallback_limit(),
                ))
                .run()
                .await?
            }
            "portfolio" => {
                SectionEngine::new(PortfolioSection::new(
                    client.clone(),
                    storage.clone(),
                    config.fallback_limit(),
                ))
                .run()
                .await?
            }
            "news" => {
                SectionEngine::new(NewsSection::new(
                    client.clone(),
                    storage.clone(),
                    config.per_page(),
                    config.fallback_limit(),
                ))
                .run()
                .await?
            }
            other => {
                tracing::warn!("Unknown section '{}', skipping", other);
                continue;
            }
        };
        println!(
            "✅ Section '{}' written to {}/{}",
            section,
            config.output_path(),
            file
        );
    }

    Ok(())
}
