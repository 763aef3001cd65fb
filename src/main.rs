use anyhow::Context;
use clap::Parser;
use webhook_solver::utils::logger;
use webhook_solver::{CliArgs, HttpGateway, LocalStorage, WebhookFlow};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting webhook-solver");
    tracing::debug!("CLI args: {:?}", args);

    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let storage = LocalStorage::new(config.output_dir.clone());
    let flow = WebhookFlow::new(HttpGateway::new(), storage);

    match flow.run(&config).await {
        Ok(report) => {
            match &report.submission {
                Some(submission) => {
                    tracing::info!("✅ Final query submitted (status {})", submission.status);
                    println!("✅ {} submitted (status {})", report.question, submission.status);
                }
                None => {
                    tracing::info!("✅ Final query saved; submission skipped");
                    println!("✅ {} saved; nothing submitted", report.question);
                }
            }
            let first = report
                .written
                .first()
                .context("flow reported no written files")?;
            println!("📁 Output saved to: {}", first.display());
        }
        Err(e) => {
            tracing::error!(
                "❌ Flow failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
