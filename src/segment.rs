//! Field syntax classification and the shared render algorithm
//!
//! Every field kind renders through [`render_segment`]; only the
//! [`PhraseStrategy`] callbacks differ between fields.

use crate::locale::{fill, PhraseLookup};

/// Syntactic shape of a single field expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentCategory {
    /// Field absent
    Empty,
    /// `*`
    Wildcard,
    /// No `/`, `-` or `,`
    SingleValue,
    /// `a,b,c`
    List,
    /// `a-b`
    Range,
    /// `*/n`
    SteppedWildcard,
    /// `a-b/n`
    SteppedRange,
    /// `a/n` or any other non-range, non-wildcard base
    SteppedValue,
}

/// Classify a canonical field expression
///
/// `/` takes precedence over `,`, which takes precedence over `-`.
pub fn classify(expression: &str) -> SegmentCategory {
    if expression.is_empty() {
        return SegmentCategory::Empty;
    }
    if expression == "*" {
        return SegmentCategory::Wildcard;
    }
    if let Some((base, _)) = expression.split_once('/') {
        return if base.contains('-') {
            SegmentCategory::SteppedRange
        } else if base == "*" {
            SegmentCategory::SteppedWildcard
        } else {
            SegmentCategory::SteppedValue
        };
    }
    if expression.contains(',') {
        SegmentCategory::List
    } else if expression.contains('-') {
        SegmentCategory::Range
    } else {
        SegmentCategory::SingleValue
    }
}

/// Everything a strategy needs besides the value it renders
pub struct RenderContext<'a> {
    pub phrases: &'a dyn PhraseLookup,
    pub use_24_hour_time: bool,
}

impl<'a> RenderContext<'a> {
    pub fn new(phrases: &'a dyn PhraseLookup, use_24_hour_time: bool) -> Self {
        Self {
            phrases,
            use_24_hour_time,
        }
    }

    /// A phrase without placeholders
    pub fn text(&self, key: &str) -> String {
        self.phrases.translate(key).into_owned()
    }

    /// A phrase with positional arguments
    pub fn format(&self, key: &str, args: &[&str]) -> String {
        fill(&self.phrases.translate(key), args)
    }
}

/// Field-specific phrase callbacks
pub trait PhraseStrategy {
    /// Phrase for `*`
    fn all_description(&self, ctx: &RenderContext<'_>) -> String;

    /// Render one value (a number, a name, a clock time)
    fn single_item_description(&self, ctx: &RenderContext<'_>, value: &str) -> String;

    /// Phrase for a step; `rendered` is the step through `single_item_description`
    fn interval_description_format(
        &self,
        ctx: &RenderContext<'_>,
        step: &str,
        rendered: &str,
    ) -> String;

    /// Phrase for a range between two rendered endpoints
    fn between_description_format(&self, ctx: &RenderContext<'_>, low: &str, high: &str) -> String;

    /// Wrap a rendered value; `raw` is the expression it came from
    fn description_format(&self, ctx: &RenderContext<'_>, raw: &str, rendered: &str) -> String;
}

const SEPARATOR: &str = ", ";

/// Render a field expression through a strategy
///
/// Malformed content never fails here; it degrades to partial or empty phrases.
pub fn render_segment<S>(expression: &str, strategy: &S, ctx: &RenderContext<'_>) -> String
where
    S: PhraseStrategy + ?Sized,
{
    match classify(expression) {
        SegmentCategory::Empty => String::new(),
        SegmentCategory::Wildcard => strategy.all_description(ctx),
        SegmentCategory::SingleValue => {
            let rendered = strategy.single_item_description(ctx, expression);
            strategy.description_format(ctx, expression, &rendered)
        }
        SegmentCategory::SteppedWildcard
        | SegmentCategory::SteppedRange
        | SegmentCategory::SteppedValue => render_step(expression, strategy, ctx),
        SegmentCategory::List => render_list(expression, strategy, ctx),
        SegmentCategory::Range => render_range(expression, strategy, ctx, |low, high| {
            strategy.between_description_format(ctx, low, high)
        }),
    }
}

fn render_step<S>(expression: &str, strategy: &S, ctx: &RenderContext<'_>) -> String
where
    S: PhraseStrategy + ?Sized,
{
    let (base, step) = expression.split_once('/').unwrap_or((expression, ""));
    let step = step.split('/').next().unwrap_or_default();

    let rendered_step = strategy.single_item_description(ctx, step);
    let mut description = strategy.interval_description_format(ctx, step, &rendered_step);

    if base.contains('-') {
        let between = render_range(base, strategy, ctx, |low, high| {
            strategy.between_description_format(ctx, low, high)
        });
        if !between.starts_with(SEPARATOR) {
            description.push_str(SEPARATOR);
        }
        description.push_str(&between);
    } else if !base.contains(|c: char| c == '*' || c == ',') {
        let rendered = strategy.single_item_description(ctx, base);
        let start = strategy.description_format(ctx, base, &rendered);
        let start = start.strip_prefix(SEPARATOR).unwrap_or(&start);
        description.push_str(&ctx.format(", starting {0}", &[start]));
    }

    description
}

fn render_list<S>(expression: &str, strategy: &S, ctx: &RenderContext<'_>) -> String
where
    S: PhraseStrategy + ?Sized,
{
    let items: Vec<String> = expression
        .split(',')
        .map(|segment| {
            if segment.contains('-') {
                let range = render_range(segment, strategy, ctx, |low, high| {
                    ctx.format("{0} through {1}", &[low, high])
                });
                match range.strip_prefix(SEPARATOR) {
                    Some(stripped) => stripped.to_string(),
                    None => range,
                }
            } else {
                strategy.single_item_description(ctx, segment)
            }
        })
        .collect();

    let content = join_list(&items, &ctx.text(" and "));
    strategy.description_format(ctx, expression, &content)
}

/// Render `low-high` through a between-format
///
/// A high endpoint rendered as a top-of-hour clock time (`:00`) is moved to
/// `:59`, since the range covers that whole hour. Missing endpoints render as
/// empty strings.
pub fn render_range<S, F>(
    expression: &str,
    strategy: &S,
    ctx: &RenderContext<'_>,
    between: F,
) -> String
where
    S: PhraseStrategy + ?Sized,
    F: Fn(&str, &str) -> String,
{
    let mut endpoints = expression.splitn(2, '-');
    let low = endpoints.next().unwrap_or_default();
    let high = endpoints.next().unwrap_or_default();

    let low = strategy.single_item_description(ctx, low);
    let high = strategy.single_item_description(ctx, high).replace(":00", ":59");

    between(&low, &high)
}

/// Join items with English list punctuation
///
/// Two items: `A and B`. Three or more: `A, B, and C`.
pub fn join_list(items: &[String], and: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{}{}{}", first, and, second),
        [init @ .., last] => format!("{},{}{}", init.join(SEPARATOR), and, last),
    }
}
