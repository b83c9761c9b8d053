//! Clock formatting for hour/minute/second triples
//!
//! Renders `HH:MM[:SS][ AM|PM]`. Hours accept 0..=24, minutes and seconds
//! 0..=59. In 12-hour mode hour 0 and hour 12 both render as `12`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DescriptorError, Result};

/// The clock component a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeComponent {
    Hour,
    Minute,
    Second,
}

impl TimeComponent {
    fn max(self) -> i64 {
        match self {
            TimeComponent::Hour => 24,
            TimeComponent::Minute | TimeComponent::Second => 59,
        }
    }
}

impl fmt::Display for TimeComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeComponent::Hour => write!(f, "hour"),
            TimeComponent::Minute => write!(f, "minute"),
            TimeComponent::Second => write!(f, "second"),
        }
    }
}

/// Parse and range-check a single clock component
fn parse_component(value: &str, component: TimeComponent) -> Result<i64> {
    let invalid = || DescriptorError::InvalidTimeComponent {
        component,
        value: value.to_string(),
    };
    let n: i64 = value.trim().parse().map_err(|_| invalid())?;
    if !(0..=component.max()).contains(&n) {
        return Err(invalid());
    }
    Ok(n)
}

/// Format a clock time
///
/// An empty or absent `second` omits the seconds part.
///
/// # Examples
///
/// ```
/// use a3s_cron_descriptor::time::format_time;
///
/// assert_eq!(format_time("14", "5", None, false).unwrap(), "02:05 PM");
/// assert_eq!(format_time("14", "5", Some("30"), true).unwrap(), "14:05:30");
/// assert!(format_time("25", "0", None, false).is_err());
/// ```
pub fn format_time(
    hour: &str,
    minute: &str,
    second: Option<&str>,
    use_24_hour_time: bool,
) -> Result<String> {
    let mut h = parse_component(hour, TimeComponent::Hour)?;
    let m = parse_component(minute, TimeComponent::Minute)?;

    let seconds = match second.filter(|s| !s.is_empty()) {
        Some(s) => format!(":{:02}", parse_component(s, TimeComponent::Second)?),
        None => String::new(),
    };

    let mut period = "";
    if !use_24_hour_time {
        period = if h < 12 { " AM" } else { " PM" };
        if h == 0 {
            h = 12;
        } else if h > 12 {
            h -= 12;
        }
    }

    Ok(format!("{:02}:{:02}{}{}", h, m, seconds, period))
}
