//! Call instrumentation combinators.
//!
//! [`instrument`] wraps a callable over the [`Value`] domain, emitting a
//! "call" message with a capped argument summary before invocation and a
//! "return" message with the formatted result after. Instrumentation is
//! purely observational: the wrapped callable's result is returned untouched
//! and its errors propagate unmodified.
//!
//! [`time_it`] is the independent wall-clock wrapper: it reports elapsed
//! seconds through the same sink and changes nothing else.

use std::time::Instant;

use dotlog_foundation::Value;

use crate::format::ValueFormatter;
use crate::trace::global;

/// Character cap applied to the joined argument summary of a "call" message.
///
/// Independent of the formatter's hard limit; this one applies only to the
/// pre-call summary.
pub const ARG_SUMMARY_LIMIT: usize = 200;

/// Marker appended when an argument summary is cut at the cap.
pub const ARG_SUMMARY_MARKER: &str = "...";

// =============================================================================
// Argument Summary
// =============================================================================

/// Joins each argument's canonical representation and caps the result at
/// [`ARG_SUMMARY_LIMIT`] characters.
#[must_use]
pub fn summarize_args(args: &[Value]) -> String {
    truncate_summary(
        args.iter()
            .map(Value::repr)
            .collect::<Vec<_>>()
            .join(", "),
    )
}

/// Caps a joined summary at [`ARG_SUMMARY_LIMIT`] characters, appending
/// [`ARG_SUMMARY_MARKER`] when cut.
#[must_use]
pub fn truncate_summary(summary: String) -> String {
    if summary.chars().count() > ARG_SUMMARY_LIMIT {
        let mut cut: String = summary.chars().take(ARG_SUMMARY_LIMIT).collect();
        cut.push_str(ARG_SUMMARY_MARKER);
        cut
    } else {
        summary
    }
}

// =============================================================================
// Instrumentation
// =============================================================================

/// Wraps `f`, logging its calls and results through the thread-local tracer
/// with a default [`ValueFormatter`].
///
/// The returned callable has the same signature and behavior as `f`: `Err`
/// values propagate unmodified and `Ok` values are returned untouched. The
/// wrapped call runs inside a depth scope, so emissions inside it indent one
/// level deeper.
pub fn instrument<F, E>(
    name: impl Into<String>,
    f: F,
) -> impl FnMut(&[Value]) -> Result<Value, E>
where
    F: FnMut(&[Value]) -> Result<Value, E>,
{
    instrument_with(name, ValueFormatter::new(), f)
}

/// Like [`instrument`], with an explicit formatter for the return value.
pub fn instrument_with<F, E>(
    name: impl Into<String>,
    formatter: ValueFormatter,
    mut f: F,
) -> impl FnMut(&[Value]) -> Result<Value, E>
where
    F: FnMut(&[Value]) -> Result<Value, E>,
{
    let name = name.into();
    // The wrapper is the emission site, so sites are captured here rather
    // than inside the closure (where the function name would be mangled).
    let call_site = crate::call_site!();
    let return_site = crate::call_site!();
    move |args: &[Value]| {
        if global::is_enabled() {
            let summary = summarize_args(args);
            let message = format!("call {name}({summary})");
            global::with(|tracer| tracer.emit(&call_site, &message));
        }

        let result = {
            let _scope = global::enter(None);
            f(args)
        };

        if global::is_enabled() {
            if let Ok(value) = &result {
                let rendered = formatter.format(value);
                let message = format!("return {name} -> {}:\n{}", value.type_tag(), rendered.text);
                global::with(|tracer| tracer.emit(&return_site, &message));
            }
        }

        result
    }
}

// =============================================================================
// Timing
// =============================================================================

/// Wraps `f`, reporting its wall-clock elapsed time through the tracer's
/// sink after each invocation.
///
/// Reports unconditionally (the enabled flag does not apply) and changes
/// nothing about the result: `Ok` and `Err` both pass through untouched.
pub fn time_it<F, E>(
    name: impl Into<String>,
    mut f: F,
) -> impl FnMut(&[Value]) -> Result<Value, E>
where
    F: FnMut(&[Value]) -> Result<Value, E>,
{
    let name = name.into();
    move |args: &[Value]| {
        let start = Instant::now();
        let result = f(args);
        let elapsed = start.elapsed().as_secs_f64();
        global::with(|tracer| tracer.write_through(&format!("{name} took {elapsed:.4}s")));
        result
    }
}

// =============================================================================
// Tests
// =============================================================================
