//! Descriptor options
//!
//! All options use camelCase JSON keys and fall back to their defaults when
//! omitted, so a partial document such as `{"use24HourTime": true}` is valid.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Which part of the expression to describe
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DescriptionKind {
    /// The whole schedule, post-processed for verbosity and casing
    #[default]
    Full,
    /// Seconds, minutes and hours merged into a time-of-day phrase
    TimeOfDay,
    Hours,
    Minutes,
    Seconds,
    DayOfMonth,
    Month,
    DayOfWeek,
    Year,
}

/// Casing applied to a full description
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Casing {
    /// Capitalize only the first character
    #[default]
    Sentence,
    /// Capitalize the first letter of every word
    Title,
    /// Lowercase everything
    Lower,
}

/// Built-in phrase catalogs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-US", alias = "en")]
    En,
    #[serde(rename = "zh-CN", alias = "zh")]
    ZhCn,
}

/// Options controlling how an expression is described
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Which part of the expression to describe (default: full)
    #[serde(default)]
    pub description_kind: DescriptionKind,

    /// Casing of full descriptions (default: sentence)
    #[serde(default)]
    pub casing: Casing,

    /// Keep redundant ", every minute/hour/day" clauses (default: false)
    #[serde(default)]
    pub verbose: bool,

    /// Day-of-week numbering starts at 0 = Sunday (default: true).
    /// When false, 1 = Sunday and every numeric day is shifted down by one.
    #[serde(default = "default_true")]
    pub day_of_week_start_index_zero: bool,

    /// Render clock times as 24-hour instead of 12-hour with AM/PM (default: false)
    #[serde(default, rename = "use24HourTime")]
    pub use_24_hour_time: bool,

    /// Built-in phrase catalog (default: en-US)
    #[serde(default)]
    pub locale: Locale,
}

fn default_true() -> bool {
    true
}

impl Default for Options {
    fn default() -> Self {
        Self {
            description_kind: DescriptionKind::default(),
            casing: Casing::default(),
            verbose: false,
            day_of_week_start_index_zero: default_true(),
            use_24_hour_time: false,
            locale: Locale::default(),
        }
    }
}

impl Options {
    /// Parse options from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_description_kind(mut self, kind: DescriptionKind) -> Self {
        self.description_kind = kind;
        self
    }

    pub fn with_casing(mut self, casing: Casing) -> Self {
        self.casing = casing;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_day_of_week_start_index_zero(mut self, zero_based: bool) -> Self {
        self.day_of_week_start_index_zero = zero_based;
        self
    }

    pub fn with_24_hour_time(mut self, enabled: bool) -> Self {
        self.use_24_hour_time = enabled;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = Options::default();
        assert_eq!(opts.description_kind, DescriptionKind::Full);
        assert_eq!(opts.casing, Casing::Sentence);
        assert!(!opts.verbose);
        assert!(opts.day_of_week_start_index_zero);
        assert!(!opts.use_24_hour_time);
        assert_eq!(opts.locale, Locale::En);
    }

    #[test]
    fn test_from_json_partial() {
        let opts = Options::from_json(r#"{"use24HourTime": true, "casing": "title"}"#).unwrap();
        assert!(opts.use_24_hour_time);
        assert_eq!(opts.casing, Casing::Title);
        assert!(opts.day_of_week_start_index_zero);
        assert_eq!(opts.description_kind, DescriptionKind::Full);
    }

    #[test]
    fn test_from_json_full() {
        let json = r#"{
            "descriptionKind": "dayOfWeek",
            "casing": "lower",
            "verbose": true,
            "dayOfWeekStartIndexZero": false,
            "use24HourTime": false,
            "locale": "zh-CN"
        }"#;
        let opts = Options::from_json(json).unwrap();
        assert_eq!(opts.description_kind, DescriptionKind::DayOfWeek);
        assert_eq!(opts.casing, Casing::Lower);
        assert!(opts.verbose);
        assert!(!opts.day_of_week_start_index_zero);
        assert_eq!(opts.locale, Locale::ZhCn);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(Options::from_json(r#"{"casing": "shouting"}"#).is_err());
        assert!(Options::from_json("not json").is_err());
    }

    #[test]
    fn test_roundtrip_keys() {
        let opts = Options::default().with_24_hour_time(true);
        let json = serde_json::to_value(&opts).unwrap();
        assert_eq!(json["use24HourTime"], true);
        assert_eq!(json["dayOfWeekStartIndexZero"], true);
        assert_eq!(json["locale"], "en-US");
    }

    #[test]
    fn test_builders() {
        let opts = Options::default()
            .with_description_kind(DescriptionKind::Month)
            .with_casing(Casing::Lower)
            .with_verbose(true)
            .with_day_of_week_start_index_zero(false)
            .with_locale(Locale::ZhCn);
        assert_eq!(opts.description_kind, DescriptionKind::Month);
        assert_eq!(opts.casing, Casing::Lower);
        assert!(opts.verbose);
        assert!(!opts.day_of_week_start_index_zero);
        assert_eq!(opts.locale, Locale::ZhCn);
    }
}
