use clap::Parser;
use disaster_scene::{cli, client, config, error, preview, render, selection};
use cli::{Cli, Commands};
use client::AnalysisClient;
use config::Config;
use disaster_scene_common::{AnalysisOutcome, PageState};
use error::{AppError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use selection::SelectedImage;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "disaster_scene=debug"
    } else {
        "disaster_scene=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Analyze { image, json } => {
            let config = Config::load()?;
            let endpoint = config.resolve_endpoint(cli.endpoint.as_deref())?;
            let selected = SelectedImage::open(&image)?;

            let mut page = PageState::new();
            page.select(selected.clone());

            if !json {
                println!("🚨 Disaster Scene Analysis - AI-powered emergency response tool\n");
                println!("📷 {}", selected.label());
                println!("   {}\n", preview::load_preview(&selected).describe());
            }

            let ticket = page
                .begin_generate()
                .ok_or_else(|| AppError::FileNotFound(image.display().to_string()))?;

            let spinner = (!json).then(|| {
                let pb = ProgressBar::new_spinner();
                pb.set_style(
                    ProgressStyle::with_template("{spinner} {msg}")
                        .unwrap_or_else(|_| ProgressStyle::default_spinner()),
                );
                pb.set_message("Analyzing Scene...");
                pb.enable_steady_tick(Duration::from_millis(100));
                pb
            });
            if let Some(pb) = &spinner {
                pb.println(render::render_caption(page.caption_view()));
                pb.println(render::render_report(page.report_view()));
            }

            let client = AnalysisClient::new(endpoint);
            tracing::info!(endpoint = client.endpoint(), "analyzing {}", selected.file_name);
            let outcome = client.run(&selected).await;
            let failed = matches!(outcome, AnalysisOutcome::Failure(_));
            page.complete(ticket, outcome);

            if let Some(pb) = spinner {
                pb.finish_and_clear();
            }

            if json {
                let body = serde_json::json!({
                    "caption": page.caption(),
                    "report": page.report(),
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                println!("{}", render::render_caption(page.caption_view()));
                println!("{}", render::render_report(page.report_view()));
            }

            if failed {
                std::process::exit(1);
            }
        }

        Commands::Config { set_endpoint, show } => {
            let mut config = Config::load_lenient()?;

            if let Some(url) = set_endpoint {
                config.set_endpoint(&url)?;
                println!("✔ エンドポイントを設定しました: {}", config.app.endpoint_url);
            }

            if show {
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!("  エンドポイント: {}", config.app.endpoint_url);
                println!(
                    "  実際の送信先: {}",
                    config.resolve_endpoint(cli.endpoint.as_deref())?
                );
            }
        }
    }

    Ok(())
}
