//! Parsing and validation of clock times.
//!
//! A clock time is written as `H:MM:SS` or `HH:MM:SS`. Hours run from 0 to 24 inclusive so that
//! the `24:xx:xx` boundary shown by the Berlin Uhr can be represented; minutes and seconds run
//! from 0 to 59. Surrounding whitespace is not trimmed.

use crate::error::{ClockError, TimeField};
use chrono::{NaiveTime, Timelike};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

// ASCII digits only, with an optional leading minus so negatives can be reported as such.
static SEGMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-)?([0-9]+)$").expect("segment regex is valid"));

/// A validated time of day as shown by the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hours: u32,
    minutes: u32,
    seconds: u32,
}

impl ClockTime {
    /// Build a time from its numeric fields, checking each against its bound.
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Result<Self, ClockError> {
        for (field, value) in TimeField::ALL.into_iter().zip([hours, minutes, seconds]) {
            check_range(field, value)?;
        }
        Ok(Self { hours, minutes, seconds })
    }

    /// Parse a `H:MM:SS` time string.
    pub fn parse(input: &str) -> Result<Self, ClockError> {
        if input.is_empty() {
            return Err(ClockError::InvalidFormat("missing input".to_string()));
        }

        let segments: Vec<&str> = input.split(':').collect();
        if segments.len() != 3 {
            return Err(ClockError::InvalidFormat(format!(
                "expected 3 colon-separated fields (HH:MM:SS), found {} in '{}'",
                segments.len(),
                input
            )));
        }

        let hours = parse_segment(TimeField::Hours, segments[0])?;
        let minutes = parse_segment(TimeField::Minutes, segments[1])?;
        let seconds = parse_segment(TimeField::Seconds, segments[2])?;

        let time = Self::new(hours, minutes, seconds)?;
        debug!("Parsed '{}' as {}", input, time);
        Ok(time)
    }

    /// Like [`ClockTime::parse`], treating absent input as a format error.
    pub fn parse_optional(input: Option<&str>) -> Result<Self, ClockError> {
        match input {
            Some(text) => Self::parse(text),
            None => Err(ClockError::InvalidFormat("missing input".to_string())),
        }
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }
}

fn parse_segment(field: TimeField, text: &str) -> Result<u32, ClockError> {
    if text.is_empty() {
        return Err(ClockError::InvalidFormat(format!("{} field is empty", field)));
    }

    let caps = SEGMENT_RE.captures(text).ok_or_else(|| {
        ClockError::InvalidFormat(format!("{} is not a non-negative integer: '{}'", field, text))
    })?;

    if caps.get(1).is_some() {
        return Err(ClockError::out_of_range(field, text));
    }

    // Only digits remain, so the parse can fail on overflow alone.
    let digits = &caps[2];
    let value = digits.parse::<u32>().map_err(|_| ClockError::out_of_range(field, digits))?;
    check_range(field, value)?;
    Ok(value)
}

fn check_range(field: TimeField, value: u32) -> Result<(), ClockError> {
    if value > field.max() {
        return Err(ClockError::out_of_range(field, value.to_string()));
    }
    Ok(())
}

impl FromStr for ClockTime {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        // A NaiveTime never exceeds 23:59:59, so the bounds hold.
        Self { hours: time.hour(), minutes: time.minute(), seconds: time.second() }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("0:01:02", 0, 1, 2 ; "single digit hour")]
    #[test_case("14:20:20", 14, 20, 20 ; "afternoon")]
    #[test_case("24:59:59", 24, 59, 59 ; "upper boundary")]
    #[test_case("01:02:03", 1, 2, 3 ; "leading zeros")]
    #[test_case("1:2:3", 1, 2, 3 ; "single digit fields")]
    #[test_case("007:0009:00", 7, 9, 0 ; "extra leading zeros")]
    fn test_parse_valid(input: &str, hours: u32, minutes: u32, seconds: u32) {
        let time = ClockTime::parse(input).unwrap();
        assert_eq!((time.hours(), time.minutes(), time.seconds()), (hours, minutes, seconds));
    }

    #[test_case("" ; "empty")]
    #[test_case("1:2:3:4" ; "too many delimiters")]
    #[test_case("1:2" ; "too few delimiters")]
    #[test_case("123" ; "no delimiters")]
    #[test_case("a:b:c" ; "letters")]
    #[test_case("hour:2:3" ; "word hour")]
    #[test_case("10:minute:3" ; "word minute")]
    #[test_case("10:0:sec" ; "word second")]
    #[test_case("1:2:" ; "trailing colon")]
    #[test_case("1::3" ; "doubled colon")]
    #[test_case("+1:2:3" ; "plus sign")]
    #[test_case(" 1:2:3" ; "leading whitespace")]
    #[test_case("1:2:3 " ; "trailing whitespace")]
    #[test_case("1-2:2:3" ; "embedded minus")]
    #[test_case("١:2:3" ; "non ascii digit")]
    fn test_parse_invalid_format(input: &str) {
        assert!(matches!(ClockTime::parse(input), Err(ClockError::InvalidFormat(_))));
    }

    #[test_case("25:0:0", TimeField::Hours ; "hours too large")]
    #[test_case("-1:2:3", TimeField::Hours ; "negative hours")]
    #[test_case("10:60:0", TimeField::Minutes ; "minutes too large")]
    #[test_case("10:-2:3", TimeField::Minutes ; "negative minutes")]
    #[test_case("10:0:79", TimeField::Seconds ; "seconds too large")]
    #[test_case("10:06:-7", TimeField::Seconds ; "negative seconds")]
    #[test_case("99999999999:0:0", TimeField::Hours ; "hours overflow u32")]
    fn test_parse_out_of_range(input: &str, field: TimeField) {
        let err = ClockTime::parse(input).unwrap_err();
        assert_eq!(err.field(), Some(field));
        assert!(err.to_string().contains(field.name()), "message was: {}", err);
    }

    #[test]
    fn test_invalid_format_names_field() {
        let err = ClockTime::parse("10:minute:3").unwrap_err();
        assert!(err.to_string().contains("minutes"));

        let err = ClockTime::parse("1:2:").unwrap_err();
        assert!(err.to_string().contains("seconds"));
    }

    #[test]
    fn test_missing_input() {
        let err = ClockTime::parse_optional(None).unwrap_err();
        assert_eq!(err, ClockError::InvalidFormat("missing input".to_string()));
        assert_eq!(ClockTime::parse_optional(Some("")).unwrap_err(), err);
        assert!(ClockTime::parse_optional(Some("12:00:00")).is_ok());
    }

    #[test]
    fn test_new_checks_bounds() {
        assert!(ClockTime::new(24, 59, 59).is_ok());
        assert_eq!(ClockTime::new(25, 0, 0).unwrap_err().field(), Some(TimeField::Hours));
        assert_eq!(ClockTime::new(0, 60, 0).unwrap_err().field(), Some(TimeField::Minutes));
        assert_eq!(ClockTime::new(0, 0, 60).unwrap_err().field(), Some(TimeField::Seconds));
    }

    #[test]
    fn test_display_and_from_str() {
        let time: ClockTime = "7:5:9".parse().unwrap();
        assert_eq!(time.to_string(), "07:05:09");
    }

    #[test]
    fn test_from_naive_time() {
        let naive = NaiveTime::from_hms_opt(23, 59, 58).unwrap();
        assert_eq!(ClockTime::from(naive), ClockTime::new(23, 59, 58).unwrap());
    }
}
