mod auth;
mod cli;
mod config;
mod report;

use anyhow::{Context, Result};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Invocation;
use crate::config::{DEFAULT_COST, REPORT_LABEL};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr, stdout carries only the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "generate_n8n_hash=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let invocation = Invocation::from_args(std::env::args_os());
    let Some(password) = invocation.password else {
        println!("{}", report::usage_line(&invocation.program));
        std::process::exit(1);
    };

    tracing::info!(
        cost = DEFAULT_COST,
        password_len = password.expose().len(),
        "Hashing password"
    );

    let hash = auth::generate_hash(password, DEFAULT_COST)
        .await
        .context("Failed to hash password")?;
    tracing::debug!(%hash, "Self-check passed");

    report::write_report(&mut io::stdout().lock(), REPORT_LABEL, &hash)?;

    Ok(())
}
