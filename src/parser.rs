//! Cron expression tokenizer and normalizer
//!
//! Accepts 5, 6 or 7 whitespace-separated fields:
//! ```text
//! ┌───────────── second (0-59, optional)
//! │ ┌───────────── minute (0-59)
//! │ │ ┌───────────── hour (0-23)
//! │ │ │ ┌───────────── day of month (1-31, L, LW, nW)
//! │ │ │ │ ┌───────────── month (1-12 or JAN-DEC)
//! │ │ │ │ │ ┌───────────── day of week (0-6 or SUN-SAT, n#k, nL)
//! │ │ │ │ │ │ ┌───────────── year (optional)
//! │ │ │ │ │ │ │
//! * * * * * * *
//! ```
//!
//! A 6-field expression whose last field ends in four digits is read as
//! minute..day-of-week plus year; otherwise as second..day-of-week.
//!
//! Normalization rewrites every field into a canonical form: `?` becomes `*`,
//! `0/n` and `1/n` become `*/n` on zero- and one-based fields, day and month
//! names become numbers, day-of-week numbering starts at 0 = Sunday, and
//! open-ended steps on month/day-of-week/year become bounded range steps.

use std::sync::LazyLock;

use chrono::{Month, Weekday};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::Options;
use crate::error::{DescriptorError, Result};

static YEAR_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]{4}$").unwrap());

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// The seven cron fields of one expression
///
/// Absent fields (seconds and year in a 5-field expression) are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CronFields {
    pub seconds: String,
    pub minutes: String,
    pub hours: String,
    pub day_of_month: String,
    pub month: String,
    pub day_of_week: String,
    pub year: String,
}

impl CronFields {
    /// Split an expression into fields and normalize them
    ///
    /// # Examples
    ///
    /// ```
    /// use a3s_cron_descriptor::{CronFields, Options};
    ///
    /// let fields = CronFields::parse("0 15 10 ? * MON-FRI", &Options::default()).unwrap();
    /// assert_eq!(fields.seconds, "");
    /// assert_eq!(fields.day_of_month, "*");
    /// assert_eq!(fields.day_of_week, "1-5");
    /// ```
    pub fn parse(expression: &str, options: &Options) -> Result<Self> {
        let parts: Vec<&str> = expression.split_whitespace().collect();
        let fields = Self::from_parts(&parts)?.normalize(options);

        tracing::debug!(
            expression,
            seconds = %fields.seconds,
            minutes = %fields.minutes,
            hours = %fields.hours,
            day_of_month = %fields.day_of_month,
            month = %fields.month,
            day_of_week = %fields.day_of_week,
            year = %fields.year,
            "Normalized cron expression"
        );

        Ok(fields)
    }

    /// Assign raw tokens to fields without normalizing them
    pub fn from_parts(parts: &[&str]) -> Result<Self> {
        let owned = |s: &&str| s.to_string();

        match parts {
            [] => Err(DescriptorError::MalformedExpression(
                "expression is empty".to_string(),
            )),
            [minutes, hours, dom, month, dow] => Ok(Self {
                minutes: owned(minutes),
                hours: owned(hours),
                day_of_month: owned(dom),
                month: owned(month),
                day_of_week: owned(dow),
                ..Self::default()
            }),
            [minutes, hours, dom, month, dow, year] if YEAR_SUFFIX_RE.is_match(year) => Ok(Self {
                minutes: owned(minutes),
                hours: owned(hours),
                day_of_month: owned(dom),
                month: owned(month),
                day_of_week: owned(dow),
                year: owned(year),
                ..Self::default()
            }),
            [seconds, minutes, hours, dom, month, dow] => Ok(Self {
                seconds: owned(seconds),
                minutes: owned(minutes),
                hours: owned(hours),
                day_of_month: owned(dom),
                month: owned(month),
                day_of_week: owned(dow),
                ..Self::default()
            }),
            [seconds, minutes, hours, dom, month, dow, year] => Ok(Self {
                seconds: owned(seconds),
                minutes: owned(minutes),
                hours: owned(hours),
                day_of_month: owned(dom),
                month: owned(month),
                day_of_week: owned(dow),
                year: owned(year),
            }),
            _ if parts.len() < 5 => Err(DescriptorError::MalformedExpression(format!(
                "expected at least 5 fields, got {}",
                parts.len()
            ))),
            _ => Err(DescriptorError::MalformedExpression(format!(
                "expected at most 7 fields, got {}",
                parts.len()
            ))),
        }
    }

    /// Rewrite every field into canonical form
    ///
    /// The steps run in a fixed order; each one sees the previous one's output.
    pub fn normalize(mut self, options: &Options) -> Self {
        self.day_of_month = self.day_of_month.replace('?', "*");
        self.day_of_week = self.day_of_week.replace('?', "*");

        for field in [&mut self.seconds, &mut self.minutes, &mut self.hours] {
            replace_step_origin(field, "0/");
        }
        for field in [
            &mut self.day_of_month,
            &mut self.month,
            &mut self.day_of_week,
            &mut self.year,
        ] {
            replace_step_origin(field, "1/");
        }

        if !options.day_of_week_start_index_zero {
            self.day_of_week = decrease_days_of_week(&self.day_of_week);
        }

        self.day_of_week = replace_day_names(&self.day_of_week);
        self.month = replace_month_names(&self.month);

        if self.seconds == "0" {
            self.seconds.clear();
        }

        for field in self.fields_mut() {
            if *field == "*/1" {
                *field = "*".to_string();
            }
        }

        bound_open_step(&mut self.month, "12");
        bound_open_step(&mut self.day_of_week, "6");
        bound_open_step(&mut self.year, "9999");

        self
    }

    fn fields_mut(&mut self) -> [&mut String; 7] {
        [
            &mut self.seconds,
            &mut self.minutes,
            &mut self.hours,
            &mut self.day_of_month,
            &mut self.month,
            &mut self.day_of_week,
            &mut self.year,
        ]
    }
}

/// `0/n` on a zero-based field (or `1/n` on a one-based one) means `*/n`
fn replace_step_origin(field: &mut String, origin: &str) {
    if let Some(rest) = field.strip_prefix(origin) {
        *field = format!("*/{}", rest);
    }
}

/// Shift a 1 = Sunday day-of-week field to 0 = Sunday
///
/// Digits directly after `#` or `/` are occurrence and step counts, not days.
fn decrease_days_of_week(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut prev: Option<char> = None;

    for c in field.chars() {
        let free_standing = !matches!(prev, Some('#') | Some('/'));
        match c.to_digit(10) {
            Some(d) if free_standing => out.push_str(&d.saturating_sub(1).to_string()),
            _ => out.push(c),
        }
        prev = Some(c);
    }

    out
}

fn replace_day_names(field: &str) -> String {
    let mut out = field.to_uppercase();
    for (n, day) in WEEKDAYS.iter().enumerate() {
        out = out.replace(&day.to_string().to_uppercase(), &n.to_string());
    }
    out
}

fn replace_month_names(field: &str) -> String {
    let mut out = field.to_uppercase();
    for n in 1..=12u8 {
        if let Ok(month) = Month::try_from(n) {
            out = out.replace(&month.name()[..3].to_uppercase(), &n.to_string());
        }
    }
    out
}

/// `start/step` becomes `start-max/step` so the range-step renderer handles it
fn bound_open_step(field: &mut String, max: &str) {
    if field.contains(|c: char| matches!(c, '*' | '-' | ',')) {
        return;
    }
    if let Some((start, step)) = field.split_once('/') {
        *field = format!("{}-{}/{}", start, max, step);
    }
}
