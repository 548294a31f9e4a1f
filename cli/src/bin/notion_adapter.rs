//! # notion-adapter
//!
//! Reshapes a JSON record into the nine columns the Notion database expects
//! and prints it, or saves it to a file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use notion_bridge::InputSource;
use notion_bridge::NormalizedRecord;
use notion_bridge::OutputTarget;
use notion_bridge::Result;
use notion_bridge::TracingLevel;
use notion_bridge_cli::LogArgs;
use notion_bridge_cli::finish;

/// Convert a JSON record into Notion-compatible JSON
#[derive(Parser, Debug)]
#[command(name = "notion-adapter")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:\n  \
    notion-adapter input.json\n  \
    notion-adapter input.json -o output.json\n  \
    cat input.json | notion-adapter")]
struct Args {
    /// JSON file to read; standard input when omitted
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Write the result to this file instead of standard output
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    #[command(flatten)]
    log: LogArgs,
}

fn run(args: Args) -> Result<()> {
    let text = InputSource::from_path(args.input).read_to_string()?;
    let normalized = NormalizedRecord::from_json_str(&text)?;

    let target = OutputTarget::from_path(args.output);
    target.write(&normalized.to_pretty_json()?)?;
    if let OutputTarget::File(path) = &target {
        println!("Notion-compatible JSON saved to {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    args.log.init(TracingLevel::Warn);
    finish(run(args))
}
