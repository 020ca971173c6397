use crate::cli::Cli;
use crate::clock::ClockTime;
use crate::config::Config;
use crate::error::ClockError;
use crate::lamps::{LineSeparator, render_with};
use anyhow::{Context, Result};
use chrono::Local;
use std::io::Write;

pub struct Application {
    times: Vec<String>,
    now: bool,
    separator: LineSeparator,
}

impl Application {
    /// Combine command line options with the loaded config; flags win.
    pub fn new(cli: &Cli, config: &Config) -> Self {
        let separator = if cli.crlf { LineSeparator::CrLf } else { config.output.line_separator };
        Self { times: cli.times.clone(), now: cli.now, separator }
    }

    /// Convert every requested time and write the grids to `out`, a blank line apart.
    /// Each grid ends with the row separator.
    ///
    /// Stops at the first invalid time; grids written before it stay written.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut requested: Vec<ClockTime> = Vec::new();
        if self.now {
            let current = ClockTime::from(Local::now().time());
            log::info!("Converting current local time {}", current);
            requested.push(current);
        }
        if requested.is_empty() && self.times.is_empty() {
            return Err(ClockError::InvalidFormat("missing input".to_string()).into());
        }

        let separator = self.separator.as_str();
        let mut first = true;
        let mut write_grid = |time: &ClockTime| -> Result<()> {
            if !first {
                out.write_all(separator.as_bytes())?;
            }
            first = false;
            write!(out, "{}{}", render_with(time, self.separator), separator)?;
            Ok(())
        };

        for time in &requested {
            write_grid(time)?;
        }
        for input in &self.times {
            let time = ClockTime::parse(input)
                .with_context(|| format!("Failed to convert '{}'", input))?;
            log::info!("Converting {}", time);
            write_grid(&time)?;
        }

        Ok(())
    }
}
