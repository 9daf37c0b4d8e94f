use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "podium",
    about = "podium: persistent leaderboard for timed runs",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Leaderboard file (overrides the configuration)
    #[arg(long, global = true)]
    pub scores_file: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the leaderboard HTTP server
    Serve(ServeArgs),
    /// Record a run directly in the leaderboard file
    Submit(SubmitArgs),
    /// Show the best runs
    Top(TopArgs),
    /// Show every category's standings
    Board(BoardArgs),
    /// Mask a JSON submission for the /submit endpoint
    Encode(CodecArgs),
    /// Unmask a submission payload
    Decode(CodecArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// Hold one writer lock across each whole submission
    #[arg(long)]
    pub serialized: bool,
}

#[derive(Args)]
pub struct SubmitArgs {
    /// Category (level name); sanitized before storing
    #[arg(short, long)]
    pub name: String,
    /// Run time in seconds
    #[arg(short, long)]
    pub time: f64,
}

#[derive(Args)]
pub struct TopArgs {
    #[arg(short = 'n', long, default_value = "10")]
    pub limit: usize,
    /// Only this category
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Args)]
pub struct BoardArgs {
    #[arg(long, default_value = "50")]
    pub rows: usize,
}

#[derive(Args)]
pub struct CodecArgs {
    pub payload: String,
    /// Masking prefix (overrides the configuration)
    #[arg(long)]
    pub prefix: Option<String>,
}
