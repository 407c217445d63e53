//! # aidata-lookup - fetch one document from a hosted MongoDB deployment
//!
//! Connects, runs a single `find_one` on an exact-match identifier field,
//! prints the result as extended JSON (or `null`), and closes the connection.
//!
//! ## Environment Variables
//!
//! - `DATABASE_URL` or `MONGODB_URL`: MongoDB connection string
//! - `RUST_LOG`: log filter (defaults to `aidata_lookup=info,mongodb=warn`)

use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{config::Config, db::MongoStore, errors::LookupError};

pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod lookup;
pub mod models;
pub mod output;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aidata_lookup=info,mongodb=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run() -> Result<(), LookupError> {
    let matches = cli::cli().get_matches();
    let request = cli::request_from(&matches);
    let config = Config::from_env()?;

    let mut stdout = std::io::stdout().lock();
    lookup::execute(
        MongoStore::connect(config.connection_string()),
        &request,
        &mut stdout,
    )
    .await?;

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "lookup failed");
            err.report(&mut std::io::stderr());
            ExitCode::FAILURE
        }
    }
}
