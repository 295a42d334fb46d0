use crate::version;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, long_version = version::long_version(), about = "Terminal flashcard player")]
pub struct Cli {
    /// Deck file path (JSON)
    pub deck: String,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Seed for the selection policy, for reproducible sessions
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Ignore persisted review counters and start fresh
    #[arg(long)]
    pub fresh: bool,
}
