//! Rendering of clock times as Berlin Uhr lamp rows.
//!
//! The clock has a blinking seconds lamp on top, two rows of four red hour lamps (5 hours and
//! 1 hour per lamp), a row of eleven minute lamps (5 minutes each, every third one red to mark
//! the quarters) and a row of four yellow minute lamps (1 minute each).

use crate::clock::ClockTime;
use log::debug;
use serde::Deserialize;
use std::fmt;

pub const HOUR_LAMPS: usize = 4;
pub const FIVE_MINUTE_LAMPS: usize = 11;
pub const MINUTE_LAMPS: usize = 4;

/// State of a single lamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lamp {
    Off,
    Yellow,
    Red,
}

impl Lamp {
    pub fn as_char(self) -> char {
        match self {
            Lamp::Off => 'O',
            Lamp::Yellow => 'Y',
            Lamp::Red => 'R',
        }
    }

    pub fn is_lit(self) -> bool {
        self != Lamp::Off
    }
}

/// Separator placed between rendered rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineSeparator {
    #[default]
    Lf,
    CrLf,
}

impl LineSeparator {
    pub fn as_str(self) -> &'static str {
        match self {
            LineSeparator::Lf => "\n",
            LineSeparator::CrLf => "\r\n",
        }
    }
}

/// The five lamp rows of the clock, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LampGrid {
    pub seconds: Lamp,
    pub five_hours: Vec<Lamp>,
    pub hours: Vec<Lamp>,
    pub five_minutes: Vec<Lamp>,
    pub minutes: Vec<Lamp>,
}

impl LampGrid {
    /// Rows as strings in display order.
    pub fn rows(&self) -> [String; 5] {
        [
            self.seconds.as_char().to_string(),
            row_string(&self.five_hours),
            row_string(&self.hours),
            row_string(&self.five_minutes),
            row_string(&self.minutes),
        ]
    }

    /// Join the rows with `separator`, without a trailing separator.
    pub fn join(&self, separator: LineSeparator) -> String {
        self.rows().join(separator.as_str())
    }
}

impl From<&ClockTime> for LampGrid {
    fn from(time: &ClockTime) -> Self {
        let hours = time.hours() as usize;
        let minutes = time.minutes() as usize;

        let seconds = if time.seconds() % 2 == 0 { Lamp::Yellow } else { Lamp::Off };

        let mut five_minutes = compose_row(minutes / 5, FIVE_MINUTE_LAMPS, Lamp::Yellow);
        for (index, lamp) in five_minutes.iter_mut().enumerate() {
            // Quarter markers sit at the 3rd, 6th and 9th lamp.
            if lamp.is_lit() && (index + 1) % 3 == 0 {
                *lamp = Lamp::Red;
            }
        }

        Self {
            seconds,
            five_hours: compose_row(hours / 5, HOUR_LAMPS, Lamp::Red),
            hours: compose_row(hours % 5, HOUR_LAMPS, Lamp::Red),
            five_minutes,
            minutes: compose_row(minutes % 5, MINUTE_LAMPS, Lamp::Yellow),
        }
    }
}

impl fmt::Display for LampGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(LineSeparator::Lf))
    }
}

/// Light the first `lit` of `total` lamps with `color`, leaving the rest off.
fn compose_row(lit: usize, total: usize, color: Lamp) -> Vec<Lamp> {
    debug_assert!(lit <= total, "{} lamps lit in a row of {}", lit, total);
    (0..total).map(|index| if index < lit { color } else { Lamp::Off }).collect()
}

fn row_string(row: &[Lamp]) -> String {
    row.iter().map(|lamp| lamp.as_char()).collect()
}

/// Render `time` as five LF-separated lamp rows.
pub fn render(time: &ClockTime) -> String {
    render_with(time, LineSeparator::Lf)
}

/// Render `time` as five lamp rows joined by `separator`.
pub fn render_with(time: &ClockTime, separator: LineSeparator) -> String {
    let output = LampGrid::from(time).join(separator);
    debug!("Rendered {} as {:?}", time, output);
    output
}
