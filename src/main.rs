use clap::Parser;
use fetch_verify::domain::model::CheckOutcome;
use fetch_verify::domain::ports::HarnessConfig;
use fetch_verify::utils::{logger, validation::Validate};
use fetch_verify::{CliConfig, DownloadHarness, HttpPage, ScenarioRunner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting fetch-verify CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let page = match HttpPage::open(&config.page_url).await {
        Ok(page) => page.with_timeout(config.timeout()),
        Err(e) => {
            tracing::error!("❌ Could not open page {}: {}", config.page_url, e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    if config.verbose {
        for link in page.links() {
            tracing::debug!("Page link: '{}' -> {}", link.text, link.href);
        }
    }

    let harness = DownloadHarness::new(page, &config.download_dir);
    let runner = ScenarioRunner::new(harness);

    match runner.run_all().await {
        Ok(reports) => {
            for report in &reports {
                println!(
                    "✅ {} -> {}",
                    report.scenario,
                    report.file.local_path.display()
                );
                for check in &report.checks {
                    match &check.outcome {
                        CheckOutcome::Passed => println!("   ✔ {}", check.name),
                        CheckOutcome::Skipped(reason) => {
                            println!("   ⚠ {} (skipped: {})", check.name, reason)
                        }
                    }
                }
            }
            tracing::info!("✅ All {} scenarios passed", reports.len());
        }
        Err(e) => {
            tracing::error!("❌ Scenario run failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
