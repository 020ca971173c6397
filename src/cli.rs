use clap::Parser;
use std::path::PathBuf;

/// Berlin Uhr - shows clock times as the lamp grid of the Berlin set-theory clock
#[derive(Debug, Parser)]
#[command(name = "berlin-uhr")]
#[command(about = "Converts HH:MM:SS times into Berlin Uhr lamp rows", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Times to convert, in H:MM:SS or HH:MM:SS format (hours 0-24)
    #[arg(value_name = "TIME")]
    pub times: Vec<String>,

    /// Convert the current local time
    #[arg(long)]
    pub now: bool,

    /// Separate rows with CR-LF instead of LF
    #[arg(long)]
    pub crlf: bool,

    /// Path to a TOML configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
