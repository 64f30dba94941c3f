//! Configuration for the tracer.

use std::env;

/// Environment variable controlling whether tracing is enabled.
///
/// Case-insensitive `"true"` enables; anything else (including unset)
/// disables.
pub const ENV_VAR: &str = "DOTLOG_DEBUG";

// =============================================================================
// Trace Output
// =============================================================================

/// Where trace output should be sent.
///
/// Lines are always recorded in the tracer's line buffer regardless of the
/// output destination, so tests and interactive sessions can inspect recent
/// output without capturing a stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceOutput {
    /// Write to stdout.
    #[default]
    Stdout,
    /// Write to stderr.
    Stderr,
    /// No stream output (lines still recorded in the buffer).
    Silent,
}

// =============================================================================
// Tracer Configuration
// =============================================================================

/// Configuration for the tracer.
#[derive(Clone, Debug)]
pub struct TracerConfig {
    /// Whether tracing is enabled (false = near-zero overhead).
    pub enabled: bool,
    /// Where to write emitted lines.
    pub output: TraceOutput,
    /// Maximum lines to keep in the line buffer.
    pub buffer_size: usize,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            output: TraceOutput::Stdout,
            buffer_size: 1000,
        }
    }
}

impl TracerConfig {
    /// Creates a new configuration (disabled).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration from the process environment.
    ///
    /// Reads [`ENV_VAR`]; case-insensitive `"true"` enables tracing.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            enabled: Self::parse_enabled(env::var(ENV_VAR).ok().as_deref()),
            ..Self::default()
        }
    }

    /// Parses the enabled flag from an environment value.
    #[must_use]
    pub fn parse_enabled(value: Option<&str>) -> bool {
        value.is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }

    /// Builder method to enable tracing.
    #[must_use]
    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }

    /// Builder method to set the output destination.
    #[must_use]
    pub fn with_output(mut self, output: TraceOutput) -> Self {
        self.output = output;
        self
    }

    /// Builder method for buffer-only output (no stream writes).
    #[must_use]
    pub fn silent(mut self) -> Self {
        self.output = TraceOutput::Silent;
        self
    }

    /// Builder method to set the line buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }
}
