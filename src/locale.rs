//! Phrase lookup
//!
//! Every phrase the engine emits is keyed by its English template. Templates
//! use positional placeholders (`{0}`, `{1}`) so a catalog can reorder
//! arguments. A lookup that does not know a key returns the key itself, which
//! makes [`English`] the identity lookup.
//!
//! Catalogs are read-only once built and are shared across threads.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use crate::config::Locale;
use crate::error::{DescriptorError, Result};

/// Maps an English phrase template to its localized form
pub trait PhraseLookup: Send + Sync {
    /// Translate a key, falling back to the key itself
    fn translate<'a>(&'a self, key: &'a str) -> Cow<'a, str>;
}

/// Identity lookup: English output
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl PhraseLookup for English {
    fn translate<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(key)
    }
}

/// Immutable key → template map
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Build a catalog from `(key, template)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Build a catalog from a flat JSON object of `"key": "template"` entries
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let object = value.as_object().ok_or_else(|| {
            DescriptorError::Config("Phrase catalog must be a JSON object".to_string())
        })?;

        let mut entries = HashMap::with_capacity(object.len());
        for (key, template) in object {
            let template = template.as_str().ok_or_else(|| {
                DescriptorError::Config(format!("Phrase '{}' must map to a string", key))
            })?;
            entries.insert(key.clone(), template.to_string());
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PhraseLookup for Catalog {
    fn translate<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        match self.entries.get(key) {
            Some(template) => Cow::Borrowed(template.as_str()),
            None => Cow::Borrowed(key),
        }
    }
}

/// Adapts a closure into a [`PhraseLookup`]
///
/// The closure returns `None` for keys it does not translate.
pub struct FnLookup<F>(pub F);

impl<F> PhraseLookup for FnLookup<F>
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn translate<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        match (self.0)(key) {
            Some(text) => Cow::Owned(text),
            None => Cow::Borrowed(key),
        }
    }
}

/// Substitute `{0}`, `{1}`, ... in a template
///
/// The template is scanned once, so placeholder text inside an argument is
/// copied through verbatim. Placeholders without a matching argument are kept.
pub fn fill(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let placeholder = tail.find('}').and_then(|close| {
            let index = tail[1..close].parse::<usize>().ok()?;
            args.get(index).map(|arg| (*arg, close))
        });
        match placeholder {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &tail[close + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

static ZH_CN: LazyLock<Arc<dyn PhraseLookup>> =
    LazyLock::new(|| -> Arc<dyn PhraseLookup> { Arc::new(zh_cn_catalog()) });

/// The shared lookup for a built-in locale
pub fn builtin(locale: Locale) -> Arc<dyn PhraseLookup> {
    match locale {
        Locale::En => Arc::new(English),
        Locale::ZhCn => Arc::clone(&ZH_CN),
    }
}

fn zh_cn_catalog() -> Catalog {
    Catalog::from_pairs([
        // time of day
        ("At {0}", "在 {0}"),
        ("Every minute between {0} and {1}", "在 {0} 到 {1} 之间的每分钟"),
        // seconds
        ("every second", "每秒"),
        ("every {0} seconds", "每 {0} 秒"),
        ("seconds {0} through {1} past the minute", "在每分钟的第 {0} 到 {1} 秒"),
        ("at {0} seconds past the minute", "在每分钟的第 {0} 秒"),
        // minutes
        ("every minute", "每分钟"),
        (", every minute", ", 每分钟"),
        ("every {0} minutes", "每 {0} 分钟"),
        ("minutes {0} through {1} past the hour", "在每小时的第 {0} 到 {1} 分钟"),
        ("at {0} minutes past the hour", "在每小时的第 {0} 分钟"),
        // hours
        ("every hour", "每小时"),
        (", every hour", ", 每小时"),
        ("every {0} hours", "每 {0} 小时"),
        ("between {0} and {1}", "在 {0} 到 {1} 之间"),
        ("at {0}", "在 {0}"),
        // day of month
        (", on the last day of the month", ", 在每月的最后一天"),
        (", on the last weekday of the month", ", 在每月的最后一个工作日"),
        (", on the first weekday of the month", ", 在每月的第一个工作日"),
        (", on the weekday nearest day {0} of the month", ", 在每月离第 {0} 天最近的工作日"),
        (", every day", ", 每天"),
        (", every {0} days", ", 每 {0} 天"),
        (", between day {0} and {1} of the month", ", 在每月的第 {0} 到 {1} 天之间"),
        (", on day {0} of the month", ", 在每月的第 {0} 天"),
        // month / year
        (", every {0} months", ", 每 {0} 个月"),
        (", every {0} years", ", 每 {0} 年"),
        (", {0} through {1}", ", {0} 到 {1}"),
        (", only in {0}", ", 仅在 {0}"),
        // day of week
        (", every {0} days of the week", ", 每周的每 {0} 天"),
        (", on the {0} {1} of the month", ", 在每月的{0}个{1}"),
        (", on the last {0} of the month", ", 在每月的最后一个{0}"),
        (", only on {0}", ", 仅在{0}"),
        ("first", "第一"),
        ("second", "第二"),
        ("third", "第三"),
        ("fourth", "第四"),
        ("fifth", "第五"),
        // shared
        (", starting {0}", ", 从{0}开始"),
        ("{0} through {1}", "{0} 到 {1}"),
        (" and ", " 和 "),
        // names
        ("Sunday", "星期日"),
        ("Monday", "星期一"),
        ("Tuesday", "星期二"),
        ("Wednesday", "星期三"),
        ("Thursday", "星期四"),
        ("Friday", "星期五"),
        ("Saturday", "星期六"),
        ("January", "一月"),
        ("February", "二月"),
        ("March", "三月"),
        ("April", "四月"),
        ("May", "五月"),
        ("June", "六月"),
        ("July", "七月"),
        ("August", "八月"),
        ("September", "九月"),
        ("October", "十月"),
        ("November", "十一月"),
        ("December", "十二月"),
    ])
}
