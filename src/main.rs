// Main entry point - Dependency wiring and the split run
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use aws_sdk_cloudwatch::config::Credentials;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::application::split_service::SplitService;
use crate::domain::brand_range::BrandRange;
use crate::infrastructure::cloudwatch_repository::{CloudWatchRepository, CREDENTIALS_PROVIDER};
use crate::infrastructure::config::load_app_config;
use crate::presentation::cli::Args;
use crate::presentation::report;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout only carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let app_config = load_app_config()?.with_overrides(
        args.region_name.clone(),
        args.endpoint_url.clone(),
        args.dashboard_prefix.clone(),
        args.strict,
    );

    let credentials = Credentials::new(
        args.aws_access_key_id.clone(),
        args.aws_secret_access_key.clone(),
        args.aws_session_token.clone(),
        None,
        CREDENTIALS_PROVIDER,
    );

    // Create repository (infrastructure layer)
    let repository = match CloudWatchRepository::from_config(&app_config, credentials).await {
        Ok(repository) => Arc::new(repository),
        Err(e) => {
            tracing::error!("CloudWatch client initialization failed: {}", e);
            eprintln!("Error initializing CloudWatch client: {}", e);
            std::process::exit(1);
        }
    };

    // Create service (application layer)
    let service = SplitService::new(
        repository,
        app_config.dashboard_prefix.clone(),
        app_config.validation,
    );

    let ranges = BrandRange::parse_list(&args.ranges);
    let partitions = service.partition(&args.dashboard_name, &ranges).await?;

    if args.dry_run {
        for partition in &partitions {
            report::print_dry_run(&service.dashboard_name(&partition.range), partition);
        }
    } else {
        service
            .publish_all(&partitions, report::print_published)
            .await?;
    }

    report::print_widgets(&partitions)?;

    Ok(())
}
