//! # a3s-cron-descriptor
//!
//! Human-readable descriptions of cron expressions for the A3S ecosystem.
//!
//! ## Overview
//!
//! `a3s-cron-descriptor` turns a 5, 6 or 7 field cron expression into a
//! sentence such as "At 10:15 AM, only on Wednesday". It is a pure,
//! synchronous transformation: one expression in, one string out.
//!
//! ## Quick Start
//!
//! ```rust
//! use a3s_cron_descriptor::{Casing, Descriptor, Options};
//!
//! let descriptor = Descriptor::new(Options::default());
//! assert_eq!(
//!     descriptor.describe("0 15 10 ? * 6#3").unwrap(),
//!     "At 10:15 AM, on the third Saturday of the month"
//! );
//!
//! // 24-hour clock, title case
//! let descriptor = Descriptor::new(
//!     Options::default()
//!         .with_24_hour_time(true)
//!         .with_casing(Casing::Title),
//! );
//! assert_eq!(
//!     descriptor.describe("0 0/5 14 * * ?").unwrap(),
//!     "Every 5 Minutes, At 14:00"
//! );
//! ```
//!
//! ## Architecture
//!
//! - **parser** — splits the expression and normalizes each field
//! - **segment** — classifies a field's syntax and renders it through a strategy
//! - **fields** — the per-field phrase strategies
//! - **time** — clock formatting for the hour, minute and second fields
//! - **descriptor** — merges field phrases into the final sentence
//! - **locale** — pluggable phrase lookup (English and Simplified Chinese built in)

pub mod config;
pub mod descriptor;
pub mod error;
pub mod fields;
pub mod locale;
pub mod parser;
pub mod segment;
pub mod time;

pub use config::{Casing, DescriptionKind, Locale, Options};
pub use descriptor::{default_description, describe, Description, Descriptor};
pub use error::{DescriptorError, Result};
pub use fields::Field;
pub use locale::{Catalog, English, FnLookup, PhraseLookup};
pub use parser::CronFields;
pub use segment::{classify, render_segment, PhraseStrategy, RenderContext, SegmentCategory};
pub use time::{format_time, TimeComponent};
