use clap::{Parser, Subcommand};
use std::ops::Range;
use std::path::PathBuf;
use tokio::runtime::Handle;

use semtrack::config::{TrackerConfig, defaults::default_settings, load_settings};
use semtrack::error::{TrackerError, TrackerResult};
use semtrack::session::{Session, replay};

/// Keeps semantic highlight ranges aligned with a document while it is edited
#[derive(Parser)]
#[command(name = "semtrack")]
#[command(version)]
#[command(about = "Keeps semantic highlight ranges aligned with a document while it is edited")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a recorded session and print the tracked ranges as JSON
    Replay {
        /// Session file (JSON with text, highlights, edits)
        session: PathBuf,

        /// Configuration file layered over the user config
        #[arg(long)]
        config: Option<PathBuf>,

        /// Region to compute styles for, as START..END (default: whole document)
        #[arg(long, value_parser = parse_region)]
        damaged: Option<Range<usize>>,
    },
    /// Configuration helpers
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the default configuration as TOML
    Init,
}

fn parse_region(value: &str) -> Result<Range<usize>, String> {
    let (start, end) = value
        .split_once("..")
        .ok_or_else(|| format!("expected START..END, got {value:?}"))?;
    let start: usize = start
        .trim()
        .parse()
        .map_err(|err| format!("invalid start {start:?}: {err}"))?;
    let end: usize = end
        .trim()
        .parse()
        .map_err(|err| format!("invalid end {end:?}: {err}"))?;
    if start > end {
        return Err(format!("start {start} is after end {end}"));
    }
    Ok(start..end)
}

fn run_replay(
    session_path: PathBuf,
    config_path: Option<PathBuf>,
    damaged: Option<Range<usize>>,
) -> TrackerResult<()> {
    let settings = load_settings(config_path.as_deref())?;
    let config = TrackerConfig::from(settings);
    let session = Session::load(&session_path)?;

    let report = replay(&session, &config, damaged, Handle::current())?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_config_init() -> TrackerResult<()> {
    let text = toml::to_string(&default_settings())
        .map_err(|err| TrackerError::config(format!("failed to render defaults: {err}")))?;
    print!("{text}");
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Replay {
            session,
            config,
            damaged,
        } => run_replay(session, config, damaged),
        Commands::Config {
            command: ConfigCommands::Init,
        } => run_config_init(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
