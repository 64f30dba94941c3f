//! Depth-aware trace emission, value formatting, and call instrumentation.
//!
//! This crate provides:
//! - [`Tracer`] and the [`dotlog!`] macro - conditional, indentation-aware
//!   debug printing with header suppression across same-depth emissions
//! - [`ValueFormatter`] - type-directed, size-bounded rendering of values
//! - [`instrument`] / [`time_it`] - combinators wrapping a callable to log
//!   its calls, arguments, return values, and wall-clock time
//!
//! Tracing is disabled by default; set the `DOTLOG_DEBUG` environment
//! variable to `true` (case-insensitive) or configure the tracer explicitly.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod format;
pub mod instrument;
pub mod site;
pub mod trace;

pub use config::{ENV_VAR, TraceOutput, TracerConfig};
pub use format::{FormatOptions, Formatted, TRUNCATION_MARKER, ValueFormatter};
pub use instrument::{
    ARG_SUMMARY_LIMIT, ARG_SUMMARY_MARKER, instrument, instrument_with, summarize_args, time_it,
    truncate_summary,
};
pub use site::{CallSite, enclosing_type, type_name_of};
pub use trace::{INDENT_STEP, LineBuffer, LineBufferStats, Tracer, WARNING_PREFIX, global};
