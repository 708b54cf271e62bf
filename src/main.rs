// s3rmb: A tool for listing and removing AWS S3 buckets.
#![forbid(unsafe_code)]
use anyhow::{
    Context,
    Result,
};
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod common;
mod confirm;
mod deleter;
mod filter;
mod lister;
mod presenter;
mod s3;

use cli::Action;

// Log level used when RUST_LOG isn't set. Region lookup failures are warnings.
const DEFAULT_LOG_FILTER: &str = "warn";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let (action, config) = cli::parse_args();

    debug!("main: Running {:?}", action);

    let factory = s3::ClientFactory::new(&config)
        .await
        .context("Failed to create S3 client")?;

    let client = factory.client(&config.region);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match action {
        Action::List => {
            commands::list(&client, config.output_format, &mut out).await
        },
        Action::Delete => {
            let substring = config.bucket_filter.as_deref().unwrap_or_default();

            let stdin = io::stdin();
            let mut input = stdin.lock();

            commands::delete(
                &factory,
                &client,
                substring,
                config.object_versions,
                &mut input,
                &mut out,
            ).await
        },
    }
}
