//! Per-field phrase generation
//!
//! [`Field`] is one variant per cron field, each supplying its own
//! [`PhraseStrategy`]. Day-of-month and day-of-week have special forms
//! (`L`, `LW`, `nW`, `n#k`, `nL`) handled in [`Field::describe`] before the
//! shared algorithm runs.

use std::sync::LazyLock;

use chrono::Month;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::parser::CronFields;
use crate::segment::{render_segment, PhraseStrategy, RenderContext};
use crate::time::format_time;

static NEAREST_WEEKDAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,2}W|W[0-9]{1,2})$").unwrap());

static ALL_DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// One of the seven cron fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Seconds,
    Minutes,
    Hours,
    DayOfMonth,
    Month,
    DayOfWeek,
    Year,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Seconds,
        Field::Minutes,
        Field::Hours,
        Field::DayOfMonth,
        Field::Month,
        Field::DayOfWeek,
        Field::Year,
    ];

    /// This field's value in a set of fields
    pub fn value(self, fields: &CronFields) -> &str {
        match self {
            Field::Seconds => &fields.seconds,
            Field::Minutes => &fields.minutes,
            Field::Hours => &fields.hours,
            Field::DayOfMonth => &fields.day_of_month,
            Field::Month => &fields.month,
            Field::DayOfWeek => &fields.day_of_week,
            Field::Year => &fields.year,
        }
    }

    /// Render this field's phrase
    pub fn describe(self, fields: &CronFields, ctx: &RenderContext<'_>) -> String {
        let expression = self.value(fields);
        match self {
            Field::DayOfMonth => describe_day_of_month(expression, ctx)
                .unwrap_or_else(|| render_segment(expression, &self, ctx)),
            Field::DayOfWeek if expression == "*" && fields.day_of_month != "*" => String::new(),
            _ => render_segment(expression, &self, ctx),
        }
    }
}

/// `L`, `LW`/`WL` and `nW` forms of the day-of-month field
fn describe_day_of_month(expression: &str, ctx: &RenderContext<'_>) -> Option<String> {
    if expression == "L" {
        return Some(ctx.text(", on the last day of the month"));
    }
    if expression == "LW" || expression == "WL" {
        return Some(ctx.text(", on the last weekday of the month"));
    }
    if !NEAREST_WEEKDAY_RE.is_match(expression) {
        return None;
    }

    let day = expression.replace('W', "");
    Some(match day.parse::<u32>() {
        Ok(1) => ctx.text(", on the first weekday of the month"),
        Ok(n) => ctx.format(
            ", on the weekday nearest day {0} of the month",
            &[&n.to_string()],
        ),
        Err(_) => String::new(),
    })
}

fn day_name(ctx: &RenderContext<'_>, value: &str) -> String {
    let index = value.split('#').next().unwrap_or_default().replace('L', "");
    match index.parse::<usize>().ok().and_then(|i| DAY_NAMES.get(i)) {
        Some(name) => ctx.text(name),
        None => String::new(),
    }
}

fn month_name(ctx: &RenderContext<'_>, value: &str) -> String {
    match value.parse::<u8>().ok().map(Month::try_from) {
        Some(Ok(month)) => ctx.text(month.name()),
        _ => String::new(),
    }
}

fn ordinal(n: &str) -> Option<&'static str> {
    match n.parse::<u32>().ok()? {
        1 => Some("first"),
        2 => Some("second"),
        3 => Some("third"),
        4 => Some("fourth"),
        5 => Some("fifth"),
        _ => None,
    }
}

fn year(value: &str) -> String {
    if ALL_DIGITS_RE.is_match(value) {
        if let Ok(year) = value.parse::<u64>() {
            return year.to_string();
        }
    }
    value.to_string()
}

impl PhraseStrategy for Field {
    fn all_description(&self, ctx: &RenderContext<'_>) -> String {
        match self {
            Field::Seconds => ctx.text("every second"),
            Field::Minutes => ctx.text("every minute"),
            Field::Hours => ctx.text("every hour"),
            Field::DayOfMonth | Field::DayOfWeek => ctx.text(", every day"),
            Field::Month | Field::Year => String::new(),
        }
    }

    fn single_item_description(&self, ctx: &RenderContext<'_>, value: &str) -> String {
        match self {
            Field::Seconds | Field::Minutes | Field::DayOfMonth => value.to_string(),
            Field::Hours => format_time(value, "0", None, ctx.use_24_hour_time).unwrap_or_default(),
            Field::Month => month_name(ctx, value),
            Field::DayOfWeek => day_name(ctx, value),
            Field::Year => year(value),
        }
    }

    fn interval_description_format(
        &self,
        ctx: &RenderContext<'_>,
        step: &str,
        rendered: &str,
    ) -> String {
        match self {
            Field::Seconds => ctx.format("every {0} seconds", &[step]),
            Field::Minutes => ctx.format("every {0} minutes", &[step]),
            Field::Hours => ctx.format("every {0} hours", &[step]),
            Field::DayOfMonth if step == "1" => ctx.text(", every day"),
            Field::DayOfMonth => ctx.format(", every {0} days", &[rendered]),
            Field::Month => ctx.format(", every {0} months", &[step]),
            Field::DayOfWeek => ctx.format(", every {0} days of the week", &[step]),
            Field::Year => ctx.format(", every {0} years", &[step]),
        }
    }

    fn between_description_format(
        &self,
        ctx: &RenderContext<'_>,
        low: &str,
        high: &str,
    ) -> String {
        let key = match self {
            Field::Seconds => "seconds {0} through {1} past the minute",
            Field::Minutes => "minutes {0} through {1} past the hour",
            Field::Hours => "between {0} and {1}",
            Field::DayOfMonth => ", between day {0} and {1} of the month",
            Field::Month | Field::DayOfWeek | Field::Year => ", {0} through {1}",
        };
        ctx.format(key, &[low, high])
    }

    fn description_format(&self, ctx: &RenderContext<'_>, raw: &str, rendered: &str) -> String {
        match self {
            Field::Seconds => ctx.format("at {0} seconds past the minute", &[rendered]),
            Field::Minutes if rendered == "0" => String::new(),
            Field::Minutes => ctx.format("at {0} minutes past the hour", &[rendered]),
            Field::Hours => ctx.format("at {0}", &[rendered]),
            Field::DayOfMonth => ctx.format(", on day {0} of the month", &[rendered]),
            Field::Month | Field::Year => ctx.format(", only in {0}", &[rendered]),
            Field::DayOfWeek => {
                if let Some((_, nth)) = raw.split_once('#') {
                    let nth = ordinal(nth).map(|o| ctx.text(o)).unwrap_or_default();
                    ctx.format(", on the {0} {1} of the month", &[&nth, rendered])
                } else if raw.contains('L') {
                    ctx.format(", on the last {0} of the month", &[rendered])
                } else {
                    ctx.format(", only on {0}", &[rendered])
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Options;
    use crate::locale::English;

    fn describe(field: Field, expression: &str) -> String {
        describe_with(field, expression, false)
    }

    fn describe_with(field: Field, expression: &str, use_24_hour_time: bool) -> String {
        let fields = CronFields::parse(expression, &Options::default()).unwrap();
        let ctx = RenderContext::new(&English, use_24_hour_time);
        field.describe(&fields, &ctx)
    }

    #[test]
    fn test_field_value() {
        let fields = CronFields::parse("1 2 3 4 5 6 2007", &Options::default()).unwrap();
        let values: Vec<&str> = Field::ALL.iter().map(|f| f.value(&fields)).collect();
        assert_eq!(values, ["1", "2", "3", "4", "5", "6", "2007"]);
    }

    #[test]
    fn test_seconds() {
        assert_eq!(describe(Field::Seconds, "* * * * * *"), "every second");
        assert_eq!(
            describe(Field::Seconds, "*/10 * * * * *"),
            "every 10 seconds"
        );
        assert_eq!(
            describe(Field::Seconds, "30 * * * * *"),
            "at 30 seconds past the minute"
        );
        assert_eq!(
            describe(Field::Seconds, "10-20 * * * * *"),
            "seconds 10 through 20 past the minute"
        );
        assert_eq!(
            describe(Field::Seconds, "5,10 * * * * *"),
            "at 5 and 10 seconds past the minute"
        );
        assert_eq!(describe(Field::Seconds, "* * * * *"), "");
    }

    #[test]
    fn test_minutes() {
        assert_eq!(describe(Field::Minutes, "* * * * *"), "every minute");
        assert_eq!(describe(Field::Minutes, "0/5 * * * *"), "every 5 minutes");
        assert_eq!(
            describe(Field::Minutes, "15 * * * *"),
            "at 15 minutes past the hour"
        );
        assert_eq!(describe(Field::Minutes, "0 * * * *"), "");
        assert_eq!(
            describe(Field::Minutes, "0-30 * * * *"),
            "minutes 0 through 30 past the hour"
        );
        assert_eq!(
            describe(Field::Minutes, "5/15 * * * *"),
            "every 15 minutes, starting at 5 minutes past the hour"
        );
        assert_eq!(
            describe(Field::Minutes, "10-40/10 * * * *"),
            "every 10 minutes, minutes 10 through 40 past the hour"
        );
        assert_eq!(
            describe(Field::Minutes, "10,20,30 * * * *"),
            "at 10, 20, and 30 minutes past the hour"
        );
    }

    #[test]
    fn test_hours() {
        assert_eq!(describe(Field::Hours, "0 * * * *"), "every hour");
        assert_eq!(describe(Field::Hours, "0 */4 * * *"), "every 4 hours");
        assert_eq!(describe(Field::Hours, "0 14 * * *"), "at 02:00 PM");
        assert_eq!(describe_with(Field::Hours, "0 14 * * *", true), "at 14:00");
        assert_eq!(
            describe(Field::Hours, "0 9-17 * * *"),
            "between 09:00 AM and 05:59 PM"
        );
        assert_eq!(
            describe(Field::Hours, "0 14,18 * * *"),
            "at 02:00 PM and 06:00 PM"
        );
        assert_eq!(
            describe(Field::Hours, "0 2/3 * * *"),
            "every 3 hours, starting at 02:00 AM"
        );
        assert_eq!(
            describe(Field::Hours, "0 8-18/2 * * *"),
            "every 2 hours, between 08:00 AM and 06:59 PM"
        );
    }

    #[test]
    fn test_hours_invalid_degrades() {
        assert_eq!(describe(Field::Hours, "0 25 * * *"), "at ");
        assert_eq!(describe(Field::Hours, "0 X * * *"), "at ");
    }

    #[test]
    fn test_day_of_month_special() {
        assert_eq!(
            describe(Field::DayOfMonth, "0 0 L * *"),
            ", on the last day of the month"
        );
        assert_eq!(
            describe(Field::DayOfMonth, "0 0 LW * *"),
            ", on the last weekday of the month"
        );
        assert_eq!(
            describe(Field::DayOfMonth, "0 0 WL * *"),
            ", on the last weekday of the month"
        );
        assert_eq!(
            describe(Field::DayOfMonth, "0 0 1W * *"),
            ", on the first weekday of the month"
        );
        assert_eq!(
            describe(Field::DayOfMonth, "0 0 15W * *"),
            ", on the weekday nearest day 15 of the month"
        );
        assert_eq!(
            describe(Field::DayOfMonth, "0 0 W15 * *"),
            ", on the weekday nearest day 15 of the month"
        );
    }

    #[test]
    fn test_nearest_weekday_requires_ascii_digits() {
        assert_eq!(
            describe(Field::DayOfMonth, "0 0 ١٥W * *"),
            ", on day ١٥W of the month"
        );
        assert_eq!(year("٢٠٠٥"), "٢٠٠٥");
    }

    #[test]
    fn test_day_of_month_generic() {
        assert_eq!(describe(Field::DayOfMonth, "0 0 * * *"), ", every day");
        assert_eq!(describe(Field::DayOfMonth, "0 0 ? * *"), ", every day");
        assert_eq!(
            describe(Field::DayOfMonth, "0 0 15 * *"),
            ", on day 15 of the month"
        );
        assert_eq!(describe(Field::DayOfMonth, "0 0 */3 * *"), ", every 3 days");
        assert_eq!(describe(Field::DayOfMonth, "0 0 1/1 * *"), ", every day");
        assert_eq!(
            describe(Field::DayOfMonth, "0 0 1-15 * *"),
            ", between day 1 and 15 of the month"
        );
        assert_eq!(
            describe(Field::DayOfMonth, "0 0 1,15 * *"),
            ", on day 1 and 15 of the month"
        );
        assert_eq!(
            describe(Field::DayOfMonth, "0 0 1-10/2 * *"),
            ", every 2 days, between day 1 and 10 of the month"
        );
    }

    #[test]
    fn test_month() {
        assert_eq!(describe(Field::Month, "0 0 * * *"), "");
        assert_eq!(describe(Field::Month, "0 0 * 3 *"), ", only in March");
        assert_eq!(describe(Field::Month, "0 0 * JUN *"), ", only in June");
        assert_eq!(
            describe(Field::Month, "0 0 * JAN-MAR *"),
            ", January through March"
        );
        assert_eq!(
            describe(Field::Month, "0 0 * 1,6,12 *"),
            ", only in January, June, and December"
        );
        assert_eq!(describe(Field::Month, "0 0 * */2 *"), ", every 2 months");
        assert_eq!(
            describe(Field::Month, "0 0 * 3/2 *"),
            ", every 2 months, March through December"
        );
        assert_eq!(describe(Field::Month, "0 0 * 13 *"), ", only in ");
    }

    #[test]
    fn test_day_of_week() {
        assert_eq!(describe(Field::DayOfWeek, "0 0 * * *"), ", every day");
        assert_eq!(describe(Field::DayOfWeek, "0 0 15 * *"), "");
        assert_eq!(
            describe(Field::DayOfWeek, "0 0 ? * WED"),
            ", only on Wednesday"
        );
        assert_eq!(
            describe(Field::DayOfWeek, "0 0 ? * MON-FRI"),
            ", Monday through Friday"
        );
        assert_eq!(
            describe(Field::DayOfWeek, "0 0 ? * 1,3,5"),
            ", only on Monday, Wednesday, and Friday"
        );
        assert_eq!(
            describe(Field::DayOfWeek, "0 0 ? * MON-WED,FRI"),
            ", only on Monday through Wednesday and Friday"
        );
        assert_eq!(
            describe(Field::DayOfWeek, "0 0 ? * */2"),
            ", every 2 days of the week"
        );
        assert_eq!(
            describe(Field::DayOfWeek, "0 0 ? * 2/2"),
            ", every 2 days of the week, Tuesday through Saturday"
        );
    }

    #[test]
    fn test_day_of_week_nth_and_last() {
        assert_eq!(
            describe(Field::DayOfWeek, "0 0 ? * 6#3"),
            ", on the third Saturday of the month"
        );
        assert_eq!(
            describe(Field::DayOfWeek, "0 0 ? * MON#4"),
            ", on the fourth Monday of the month"
        );
        assert_eq!(
            describe(Field::DayOfWeek, "0 0 ? * 6L"),
            ", on the last Saturday of the month"
        );
        // unknown occurrence and day index degrade to empty names
        assert_eq!(
            describe(Field::DayOfWeek, "0 0 ? * 1#9"),
            ", on the  Monday of the month"
        );
        assert_eq!(describe(Field::DayOfWeek, "0 0 ? * 9"), ", only on ");
    }

    #[test]
    fn test_year() {
        assert_eq!(describe(Field::Year, "0 0 * * * 2005"), ", only in 2005");
        assert_eq!(
            describe(Field::Year, "0 0 * * * 2002-2005"),
            ", 2002 through 2005"
        );
        assert_eq!(
            describe(Field::Year, "0 0 0 * * * 2005/2"),
            ", every 2 years, 2005 through 9999"
        );
        assert_eq!(describe(Field::Year, "0 0 0 * * * *"), "");
        assert_eq!(year("02005"), "2005");
        assert_eq!(year("20x5"), "20x5");
    }
}
