pub mod app;
pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod lamps;

use anyhow::Result;
use env_logger::Env;
use log::info;

/// Convert a `H:MM:SS` time string into the five LF-separated Berlin Uhr lamp rows.
pub fn convert_time(input: &str) -> std::result::Result<String, ClockError> {
    let time = ClockTime::parse(input)?;
    Ok(lamps::render(&time))
}

pub fn run(cli: &cli::Cli, config: &Config) -> Result<()> {
    let app = app::Application::new(cli, config);
    info!("Initializing Berlin Uhr converter");
    let stdout = std::io::stdout();
    app.run(&mut stdout.lock())
}

/// One-line report for a failed run: the error and its causes, without a backtrace.
pub fn error_report(err: &anyhow::Error) -> String {
    format!("Error: {:#}", err)
}

/// Initialize logging from `RUST_LOG`, falling back to `default_level`.
pub fn init_logger(default_level: &str) {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .init();
}


// Re-export commonly used types
pub use clock::ClockTime;
pub use config::Config;
pub use error::{ClockError, TimeField};
pub use lamps::{Lamp, LampGrid, LineSeparator, render, render_with};
