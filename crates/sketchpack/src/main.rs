use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use sketchpack::{
    config::{Config, DEFAULT_MANIFEST},
    orchestrator::BundleOrchestrator,
};

/// Combine a multi-file sketch into one flat source file for pasting into
/// a browser simulator's single-file editor.
#[derive(Debug, Parser)]
#[command(name = "sketchpack", version, about)]
struct Cli {
    /// Path to the bundle manifest.
    #[arg(long, default_value = DEFAULT_MANIFEST)]
    config: PathBuf,

    /// Override the output path from the manifest.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the bundle to stdout instead of writing the output file.
    #[arg(long)]
    stdout: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

#[allow(clippy::print_stdout)]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load(&cli.config)?;
    if let Some(output) = cli.output {
        config.output = output;
    }

    let orchestrator = BundleOrchestrator::new(config);
    if cli.stdout {
        print!("{}", orchestrator.bundle_to_string()?);
    } else {
        orchestrator.bundle_to_file()?;
        println!("Combined code written to {}", orchestrator.output().display());
    }
    Ok(())
}
