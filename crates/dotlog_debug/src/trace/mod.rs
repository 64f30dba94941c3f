//! Depth-aware trace emission.
//!
//! [`Tracer`] owns the trace state: the last printed indentation, the last
//! recorded depth, and the stack of open scopes that stands in for call
//! frames. Consecutive emissions at the same depth print their identity
//! header once; the message line always prints.
//!
//! # Example
//!
//! ```
//! use dotlog_debug::{dotlog, global, TracerConfig};
//!
//! global::configure(TracerConfig::new().enabled().silent());
//! dotlog!("answer = {}", 42);
//! let _scope = dotlog_debug::trace_scope!();
//! dotlog!("one level deeper");
//! ```

pub mod buffer;

pub use buffer::{LineBuffer, LineBufferStats};

use std::io::{self, Write};

use dotlog_foundation::Error;

use crate::config::{TraceOutput, TracerConfig};
use crate::site::CallSite;

/// Indentation printed per depth level.
pub const INDENT_STEP: &str = "..";

/// Prefix for warning lines emitted in place of failed resolutions.
pub const WARNING_PREFIX: &str = "[dotlog warning]";

// =============================================================================
// Trace State
// =============================================================================

/// Header-suppression state. Both fields update together, and only when a
/// header is actually printed.
#[derive(Clone, Debug, Default)]
struct TraceState {
    /// Indentation string printed by the previous header.
    last_indent: Option<String>,
    /// Depth recorded at the previous header.
    last_depth: usize,
}

/// An open depth scope, optionally carrying the enclosing type name of the
/// code that opened it.
#[derive(Clone, Debug)]
struct Scope {
    type_name: Option<String>,
}

// =============================================================================
// Tracer
// =============================================================================

/// Conditional, indentation-aware debug print primitive.
///
/// Designed for near-zero overhead when disabled: [`Tracer::emit`] returns
/// immediately without allocating. Every written line is also recorded in a
/// bounded [`LineBuffer`].
#[derive(Clone, Debug)]
pub struct Tracer {
    config: TracerConfig,
    state: TraceState,
    scopes: Vec<Scope>,
    buffer: LineBuffer,
}

impl Tracer {
    /// Creates a tracer with the given configuration.
    #[must_use]
    pub fn new(config: TracerConfig) -> Self {
        let buffer_size = config.buffer_size;
        Self {
            config,
            state: TraceState::default(),
            scopes: Vec::new(),
            buffer: LineBuffer::new(buffer_size),
        }
    }

    /// Creates a disabled tracer.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(TracerConfig::default())
    }

    /// Creates a tracer configured from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(TracerConfig::from_env())
    }

    /// Returns whether tracing is enabled.
    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Enables tracing.
    pub fn enable(&mut self) {
        self.config.enabled = true;
    }

    /// Disables tracing.
    pub fn disable(&mut self) {
        self.config.enabled = false;
    }

    /// Returns the current scope depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Opens a depth scope, optionally recording the enclosing type name of
    /// the code opening it. Emissions inside the scope indent one level
    /// deeper.
    pub fn enter(&mut self, type_name: Option<String>) {
        self.scopes.push(Scope { type_name });
    }

    /// Closes the innermost depth scope.
    pub fn exit(&mut self) {
        self.scopes.pop();
    }

    /// Emits one message from the given call site.
    ///
    /// When disabled this returns immediately. When enabled, a header line
    /// identifying the caller is printed only if the indentation differs from
    /// the previous header's; the message line always prints. The comparison
    /// is by indent string alone, so two different call sites at equal depth
    /// share a header (a deliberately coarse heuristic).
    pub fn emit(&mut self, site: &CallSite, message: &str) {
        if !self.config.enabled {
            return;
        }

        let indent = INDENT_STEP.repeat(self.depth());

        // A failed type capture degrades to a warning, never aborts.
        if let Some(raw) = &site.type_error {
            let warn = Error::type_resolution(raw.as_str());
            self.emit_warning(&warn.to_string());
        }

        let resolved = site
            .type_name
            .clone()
            .or_else(|| self.nearest_scope_type().map(str::to_string));

        if self.state.last_indent.as_deref() != Some(indent.as_str()) {
            let identity = site.identity(resolved.as_deref());
            let header = format!("{indent}{} [{identity}:{}]", site.file, site.line);
            self.write_line(&header);
            self.state.last_indent = Some(indent.clone());
            self.state.last_depth = self.depth();
        }

        let line = format!("{indent}[{}]{message}", site.line);
        self.write_line(&line);
    }

    /// Emits a warning line at the current indentation.
    pub fn emit_warning(&mut self, message: &str) {
        if !self.config.enabled {
            return;
        }
        let indent = INDENT_STEP.repeat(self.depth());
        let line = format!("{indent}{WARNING_PREFIX} {message}");
        self.write_line(&line);
    }

    /// Writes a line through the sink regardless of the enabled flag.
    ///
    /// Used by the timing wrapper, which reports unconditionally.
    pub fn write_through(&mut self, line: &str) {
        self.write_line(line);
    }

    /// Scans open scopes innermost-out for the nearest recorded type name.
    fn nearest_scope_type(&self) -> Option<&str> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.type_name.as_deref())
    }

    fn write_line(&mut self, line: &str) {
        self.buffer.push(line);
        match self.config.output {
            TraceOutput::Stdout => {
                let _ = writeln!(io::stdout(), "{line}");
            }
            TraceOutput::Stderr => {
                let _ = writeln!(io::stderr(), "{line}");
            }
            TraceOutput::Silent => {}
        }
    }

    // -------------------------------------------------------------------------
    // Inspection
    // -------------------------------------------------------------------------

    /// Returns the indentation printed by the previous header, if any.
    #[must_use]
    pub fn last_indent(&self) -> Option<&str> {
        self.state.last_indent.as_deref()
    }

    /// Returns the depth recorded at the previous header.
    #[must_use]
    pub fn last_depth(&self) -> usize {
        self.state.last_depth
    }

    /// Returns the line buffer.
    #[must_use]
    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    /// Removes and returns all buffered lines, oldest first.
    pub fn take_lines(&mut self) -> Vec<String> {
        self.buffer.drain()
    }

    /// Clears the buffer, header state, and open scopes.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.state = TraceState::default();
        self.scopes.clear();
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::disabled()
    }
}

// =============================================================================
// Global Tracer
// =============================================================================

/// Thread-local global tracer used by the emission macros.
///
/// Thread-local rather than process-global: each thread gets an independent
/// copy of the trace state, so header suppression never races across
/// threads.
pub mod global {
    use std::cell::RefCell;

    use super::Tracer;
    use crate::config::TracerConfig;

    thread_local! {
        static TRACER: RefCell<Tracer> = RefCell::new(Tracer::from_env());
    }

    /// Runs `f` with the thread's tracer.
    ///
    /// Must not be called re-entrantly from inside `f`: keep closures short
    /// and never invoke traced user code while holding the tracer.
    pub fn with<R>(f: impl FnOnce(&mut Tracer) -> R) -> R {
        TRACER.with(|tracer| f(&mut tracer.borrow_mut()))
    }

    /// Replaces the thread's tracer with one built from `config`.
    pub fn configure(config: TracerConfig) {
        with(|tracer| *tracer = Tracer::new(config));
    }

    /// Returns whether the thread's tracer is enabled.
    #[must_use]
    pub fn is_enabled() -> bool {
        with(|tracer| tracer.is_enabled())
    }

    /// Opens a depth scope; the returned guard closes it on drop, panics
    /// included.
    #[must_use]
    pub fn enter(type_name: Option<String>) -> ScopeGuard {
        with(|tracer| tracer.enter(type_name));
        ScopeGuard(())
    }

    /// Removes and returns all buffered lines from the thread's tracer.
    #[must_use]
    pub fn take_lines() -> Vec<String> {
        with(Tracer::take_lines)
    }

    /// Clears the thread tracer's buffer, header state, and open scopes.
    pub fn reset() {
        with(Tracer::reset);
    }

    /// RAII guard for a depth scope on the thread's tracer.
    pub struct ScopeGuard(());

    impl Drop for ScopeGuard {
        fn drop(&mut self) {
            with(Tracer::exit);
        }
    }
}

// =============================================================================
// Emission Macros
// =============================================================================

/// Emits a formatted message through the thread-local tracer, capturing the
/// call site.
///
/// `dotlog!(self; "...")` additionally captures the receiver's type name for
/// the header. Near-zero cost when tracing is disabled: neither the site nor
/// the message is built.
#[macro_export]
macro_rules! dotlog {
    ($receiver:expr; $($arg:tt)+) => {{
        if $crate::global::is_enabled() {
            let site = $crate::call_site!($receiver);
            let message = ::std::format!($($arg)+);
            $crate::global::with(|tracer| tracer.emit(&site, &message));
        }
    }};
    ($($arg:tt)+) => {{
        if $crate::global::is_enabled() {
            let site = $crate::call_site!();
            let message = ::std::format!($($arg)+);
            $crate::global::with(|tracer| tracer.emit(&site, &message));
        }
    }};
}

/// Opens a depth scope on the thread-local tracer; bind the result to keep
/// it open (`let _scope = trace_scope!();`).
///
/// `trace_scope!(self)` records the receiver's type name on the scope, making
/// it discoverable by emissions nested deeper that have no type of their own.
#[macro_export]
macro_rules! trace_scope {
    () => {
        $crate::global::enter(::core::option::Option::None)
    };
    ($receiver:expr) => {
        $crate::global::enter($crate::type_name_of(&$receiver))
    };
}

// =============================================================================
// Tests
// =============================================================================
