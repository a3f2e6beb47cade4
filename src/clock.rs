//! Wall-clock arithmetic for arrival times.
//!
//! Times cross the crate boundary as literal `"HH:MM"` strings (24-hour, zero padded).
//! Elapsed travel time is always a whole number of minutes; adding it rolls minutes
//! into hours and hours over midnight, discarding the day count.

use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use chrono::{Duration, NaiveTime, Timelike};

use crate::{Error, Result};

/// Placeholder rendered for a checkpoint that was never reached
pub const UNREACHED_CLOCK: &str = "xx:xx";

const MINUTES_PER_DAY: u64 = 24 * 60;

/// A time of day with minute resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Builds a clock time from hour (0-23) and minute (0-59)
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(ClockTime)
    }

    /// Parses the fixed five character `"HH:MM"` format
    pub fn parse_hhmm(input: &str) -> Result<Self> {
        let invalid = |reason| Error::InvalidTime {
            input: input.to_string(),
            reason,
        };

        let bytes = input.as_bytes();
        if bytes.len() != 5 {
            return Err(invalid("expected HH:MM format"));
        }
        if bytes[2] != b':' {
            return Err(invalid("expected colon at position 2"));
        }

        let hour = parse_two_digits(&bytes[0..2]).ok_or_else(|| invalid("invalid hour digits"))?;
        let minute =
            parse_two_digits(&bytes[3..5]).ok_or_else(|| invalid("invalid minute digits"))?;

        if hour > 23 {
            return Err(invalid("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(invalid("minute must be 0-59"));
        }

        Self::from_hm(hour, minute).ok_or_else(|| invalid("invalid time"))
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Adds whole minutes, wrapping past midnight
    pub fn add_minutes(&self, elapsed: u64) -> Self {
        // Only the time of day matters, so whole days can be dropped up front
        let within_day = (elapsed % MINUTES_PER_DAY) as i64;
        let (time, _) = self.0.overflowing_add_signed(Duration::minutes(within_day));
        ClockTime(time)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_hhmm(s)
    }
}

fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    match bytes {
        [tens @ b'0'..=b'9', ones @ b'0'..=b'9'] => {
            Some(u32::from(tens - b'0') * 10 + u32::from(ones - b'0'))
        }
        _ => None,
    }
}

/// Minutes needed to cover `distance` at `velocity`, truncated towards zero
pub fn elapsed_minutes(distance: u64, velocity: NonZeroU64) -> u64 {
    distance / velocity.get()
}

/// Adds `elapsed` minutes to an `"HH:MM"` departure and renders the arrival the same way
pub fn add_elapsed(departure: &str, elapsed: u64) -> Result<String> {
    let departure = ClockTime::parse_hhmm(departure)?;
    Ok(departure.add_minutes(elapsed).to_string())
}

/// Renders an optional arrival, using the unreached placeholder for `None`
pub fn render_arrival(arrival: Option<ClockTime>) -> String {
    arrival.map_or_else(|| UNREACHED_CLOCK.to_string(), |time| time.to_string())
}
