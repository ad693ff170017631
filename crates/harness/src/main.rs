//! Lookup harness binary.
//!
//! Plays the host around a lookup control: reads a scenario of refreshes,
//! picks, picker resolutions and clears, and prints every pulled output as JSON.

mod runner;
mod scenario;

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

/// Harness command line arguments.
#[derive(Parser, Debug)]
#[command(name = "lookup-harness")]
#[command(about = "Replay a lookup scenario against a live controller")]
struct Args {
	/// Scenario file (TOML)
	#[arg(value_name = "PATH")]
	scenario: PathBuf,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	let subscriber = tracing_subscriber::fmt()
		.with_max_level(if args.verbose {
			tracing::Level::DEBUG
		} else {
			tracing::Level::INFO
		})
		.finish();

	tracing::subscriber::set_global_default(subscriber)?;

	info!(scenario = %args.scenario.display(), "Loading scenario");
	let scenario = scenario::Scenario::from_path(&args.scenario)?;

	let report = runner::run(scenario).await?;
	for output in &report.outputs {
		println!("{}", serde_json::to_string(output)?);
	}
	info!(
		outputs = report.outputs.len(),
		applied = report.outcomes.len(),
		notifications = report.notifications,
		"Scenario finished"
	);

	Ok(())
}
