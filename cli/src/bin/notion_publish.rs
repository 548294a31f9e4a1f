//! # notion-publish
//!
//! Creates one row in the configured Notion database from a JSON record.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use notion_bridge::InputSource;
use notion_bridge::NormalizedRecord;
use notion_bridge::NotionClient;
use notion_bridge::NotionConfig;
use notion_bridge::PublishOptions;
use notion_bridge::Record;
use notion_bridge::RequiredSchema;
use notion_bridge::Result;
use notion_bridge::TracingLevel;
use notion_bridge::parse_record;
use notion_bridge::publish;
use notion_bridge_cli::LogArgs;
use notion_bridge_cli::finish;

/// Publish a JSON record as a new Notion page
#[derive(Parser, Debug)]
#[command(name = "notion-publish")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file to read; standard input when omitted
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Map the record onto the standard nine columns before publishing
    #[arg(long = "normalize")]
    normalize: bool,

    /// Add missing columns to the database before publishing
    #[arg(long = "ensure-schema")]
    ensure_schema: bool,

    #[command(flatten)]
    log: LogArgs,
}

fn load_record(args: &Args) -> Result<Record> {
    let text = InputSource::from_path(args.input.clone()).read_to_string()?;
    if args.normalize {
        Ok(NormalizedRecord::from_json_str(&text)?.as_map().clone())
    } else {
        parse_record(&text)
    }
}

async fn run(args: Args) -> Result<()> {
    let record = load_record(&args)?;
    let config = NotionConfig::from_env()?;
    let client = NotionClient::new(&config)?;
    let options = PublishOptions {
        ensure_schema: args.ensure_schema.then(RequiredSchema::standard),
    };

    let report = publish(&client, config.database_id(), &record, &options).await?;

    match (&report.url, &report.page_id) {
        (Some(url), _) => println!("Page created: {url}"),
        (None, Some(id)) => println!("Page created: {id}"),
        (None, None) => println!("Page created"),
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    args.log.init(TracingLevel::Info);
    finish(run(args).await)
}
