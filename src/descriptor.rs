//! Description assembly
//!
//! Builds the full sentence from per-field phrases: time of day first, then
//! day of month, day of week, month and year. Full descriptions are then
//! filtered for redundant clauses and re-cased.

use std::sync::Arc;

use serde::Serialize;

use crate::config::{Casing, DescriptionKind, Options};
use crate::error::Result;
use crate::fields::Field;
use crate::locale::{self, PhraseLookup};
use crate::parser::CronFields;
use crate::segment::{join_list, RenderContext};
use crate::time::format_time;

const SPECIAL_CHARACTERS: [char; 4] = ['/', '-', ',', '*'];

/// Clauses dropped from non-verbose full descriptions
const REDUNDANT_CLAUSES: [&str; 3] = [", every minute", ", every hour", ", every day"];

fn has_special(expression: &str) -> bool {
    expression.contains(SPECIAL_CHARACTERS)
}

/// Outcome of describing one expression, in a serializable form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Description {
    /// The input expression
    pub expression: String,
    /// The description, or the error message when describing failed
    pub description: String,
    /// Error message, if describing failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Describes cron expressions with a fixed set of options
///
/// A descriptor holds no mutable state and can be shared across threads.
#[derive(Clone)]
pub struct Descriptor {
    options: Options,
    phrases: Arc<dyn PhraseLookup>,
}

impl std::fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Descriptor")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Default for Descriptor {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl Descriptor {
    /// Create a descriptor using the built-in catalog for `options.locale`
    pub fn new(options: Options) -> Self {
        let phrases = locale::builtin(options.locale);
        Self { options, phrases }
    }

    /// Create a descriptor with a caller-supplied phrase lookup
    pub fn with_phrases(options: Options, phrases: Arc<dyn PhraseLookup>) -> Self {
        Self { options, phrases }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Describe an expression
    ///
    /// # Examples
    ///
    /// ```
    /// use a3s_cron_descriptor::{Descriptor, Options};
    ///
    /// let descriptor = Descriptor::new(Options::default());
    /// assert_eq!(
    ///     descriptor.describe("0 15 10 ? * MON-FRI").unwrap(),
    ///     "At 10:15 AM, Monday through Friday"
    /// );
    /// ```
    pub fn describe(&self, expression: &str) -> Result<String> {
        let fields = CronFields::parse(expression, &self.options)?;
        self.describe_fields(&fields)
    }

    /// Describe already normalized fields
    pub fn describe_fields(&self, fields: &CronFields) -> Result<String> {
        let ctx = self.context();
        let description = match self.options.description_kind {
            DescriptionKind::Full => self.full_description(fields, &ctx)?,
            DescriptionKind::TimeOfDay => self.time_of_day_description(fields, &ctx)?,
            DescriptionKind::Seconds => Field::Seconds.describe(fields, &ctx),
            DescriptionKind::Minutes => Field::Minutes.describe(fields, &ctx),
            DescriptionKind::Hours => Field::Hours.describe(fields, &ctx),
            DescriptionKind::DayOfMonth => Field::DayOfMonth.describe(fields, &ctx),
            DescriptionKind::Month => Field::Month.describe(fields, &ctx),
            DescriptionKind::DayOfWeek => Field::DayOfWeek.describe(fields, &ctx),
            DescriptionKind::Year => Field::Year.describe(fields, &ctx),
        };
        Ok(description)
    }

    /// Describe an expression, returning the error message on failure
    pub fn description(&self, expression: &str) -> String {
        self.describe_output(expression).description
    }

    /// Describe an expression into a [`Description`]
    pub fn describe_output(&self, expression: &str) -> Description {
        match self.describe(expression) {
            Ok(description) => Description {
                expression: expression.to_string(),
                description,
                error: None,
            },
            Err(e) => {
                tracing::warn!(expression, error = %e, "Failed to describe cron expression");
                let message = e.to_string();
                Description {
                    expression: expression.to_string(),
                    description: message.clone(),
                    error: Some(message),
                }
            }
        }
    }

    fn context(&self) -> RenderContext<'_> {
        RenderContext::new(self.phrases.as_ref(), self.options.use_24_hour_time)
    }

    fn full_description(&self, fields: &CronFields, ctx: &RenderContext<'_>) -> Result<String> {
        let mut description = self.time_of_day_description(fields, ctx)?;
        for field in [Field::DayOfMonth, Field::DayOfWeek, Field::Month, Field::Year] {
            description.push_str(&field.describe(fields, ctx));
        }

        if !self.options.verbose {
            description = strip_redundant_clauses(&description, ctx);
        }
        Ok(transform_case(&description, self.options.casing))
    }

    fn time_of_day_description(
        &self,
        fields: &CronFields,
        ctx: &RenderContext<'_>,
    ) -> Result<String> {
        let seconds = fields.seconds.as_str();
        let minutes = fields.minutes.as_str();
        let hours = fields.hours.as_str();
        let h24 = self.options.use_24_hour_time;

        if !has_special(seconds) && !has_special(minutes) && !has_special(hours) {
            tracing::debug!(seconds, minutes, hours, "Describing a single time of day");
            let time = format_time(hours, minutes, Some(seconds), h24)?;
            return Ok(ctx.format("At {0}", &[&time]));
        }

        if minutes.contains('-')
            && !minutes.contains(|c: char| c == ',' || c == '/')
            && !has_special(hours)
        {
            tracing::debug!(minutes, hours, "Describing a minute range within one hour");
            let (low, high) = minutes.split_once('-').unwrap_or((minutes, ""));
            let low = format_time(hours, low, None, h24)?;
            let high = format_time(hours, high, None, h24)?;
            return Ok(ctx.format("Every minute between {0} and {1}", &[&low, &high]));
        }

        if hours.contains(',')
            && !hours.contains(|c: char| c == '-' || c == '/')
            && !has_special(minutes)
        {
            tracing::debug!(minutes, hours, "Describing a list of hours at one minute");
            let times = hours
                .split(',')
                .map(|hour| format_time(hour, minutes, None, h24))
                .collect::<Result<Vec<_>>>()?;
            return Ok(ctx.format("At {0}", &[&join_times(&times, ctx)]));
        }

        let parts: Vec<String> = [Field::Seconds, Field::Minutes, Field::Hours]
            .into_iter()
            .map(|field| field.describe(fields, ctx))
            .filter(|phrase| !phrase.is_empty())
            .collect();
        Ok(parts.join(", "))
    }
}

/// `A, B and C`: clock lists read without the serial comma
fn join_times(times: &[String], ctx: &RenderContext<'_>) -> String {
    let and = ctx.text(" and ");
    match times.split_last() {
        Some((last, init)) if !init.is_empty() => format!("{}{}{}", init.join(", "), and, last),
        _ => join_list(times, &and),
    }
}

fn strip_redundant_clauses(description: &str, ctx: &RenderContext<'_>) -> String {
    REDUNDANT_CLAUSES
        .iter()
        .fold(description.to_string(), |acc, clause| {
            acc.replace(&ctx.text(clause), "")
        })
}

fn transform_case(description: &str, casing: Casing) -> String {
    match casing {
        Casing::Sentence => capitalize(description),
        Casing::Title => description
            .split(' ')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" "),
        Casing::Lower => description.to_lowercase(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Describe an expression with default options
///
/// Returns an empty string for an empty expression and the error message for
/// any other failure.
///
/// # Examples
///
/// ```
/// use a3s_cron_descriptor::default_description;
///
/// assert_eq!(default_description("0 15 10 L * ?"), "At 10:15 AM, on the last day of the month");
/// assert_eq!(default_description(""), "");
/// ```
pub fn default_description(expression: &str) -> String {
    if expression.is_empty() {
        return String::new();
    }
    Descriptor::default().description(expression)
}

/// Describe an expression with the given options
pub fn describe(expression: &str, options: &Options) -> Result<String> {
    Descriptor::new(options.clone()).describe(expression)
}
