//! # update-notion-database
//!
//! Adds any missing columns of the standard record layout to the configured
//! Notion database. Existing columns are never removed or retyped.
//!
//! Reads `NOTION_API_KEY` and `NOTION_DATABASE_ID` from the environment or a
//! `.env` file.

use std::process::ExitCode;

use clap::Parser;
use notion_bridge::NotionClient;
use notion_bridge::NotionConfig;
use notion_bridge::RequiredSchema;
use notion_bridge::Result;
use notion_bridge::SchemaSynchronizer;
use notion_bridge::TracingLevel;
use notion_bridge_cli::LogArgs;
use notion_bridge_cli::finish;
use tracing::info;
use tracing::warn;

/// Ensure the Notion database has every column the records need
#[derive(Parser, Debug)]
#[command(name = "update-notion-database")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    log: LogArgs,
}

async fn run() -> Result<()> {
    let config = NotionConfig::from_env()?;
    let client = NotionClient::new(&config)?;
    let required = RequiredSchema::standard();

    info!("Fetching current database structure...");
    let report = SchemaSynchronizer::new(&client, config.database_id(), &required)
        .run()
        .await?;

    if !report.mismatches.is_empty() {
        warn!(
            "{} existing properties have an unexpected type and were left unchanged",
            report.mismatches.len()
        );
    }
    info!("Done!");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    args.log.init(TracingLevel::Info);
    finish(run().await)
}
