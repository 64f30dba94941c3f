//! Call-site identity.
//!
//! Rust has no runtime stack walking, so caller identity is captured
//! explicitly at the call site by the [`call_site!`](crate::call_site) macro:
//! source file via `file!()`, module via `module_path!()`, line via
//! `line!()`, and the enclosing function name via the
//! [`function_name!`](crate::function_name) idiom built on
//! `core::any::type_name`. A receiver's type name can be attached with
//! `call_site!(self)`.

use std::any;

use dotlog_foundation::{Error, Result};

// =============================================================================
// Call Site
// =============================================================================

/// Identity of a single emission's caller.
///
/// Ephemeral: constructed per emission, never persisted beyond it.
#[derive(Clone, Debug)]
pub struct CallSite {
    /// Source file path, as reported by `file!()`.
    pub file: &'static str,
    /// Module path, as reported by `module_path!()`.
    pub module: &'static str,
    /// Enclosing function name (last path segment).
    pub function: &'static str,
    /// Line number of the emission.
    pub line: u32,
    /// Enclosing type name, if captured.
    pub type_name: Option<String>,
    /// Raw type capture that failed to resolve, reported as a warning at
    /// emission time rather than aborting the emission.
    pub type_error: Option<String>,
}

impl CallSite {
    /// Creates a call site. The function name is reduced to its last path
    /// segment; the module path is kept whole.
    #[must_use]
    pub fn new(file: &'static str, module: &'static str, function: &'static str, line: u32) -> Self {
        let function = function.rsplit("::").next().unwrap_or(function);
        Self {
            file,
            module,
            function,
            line,
            type_name: None,
            type_error: None,
        }
    }

    /// Attaches the runtime type name of `receiver` as the enclosing type.
    ///
    /// Resolution failure is recorded on the site and surfaces as a warning
    /// line when the site is emitted; it never fails the capture.
    #[must_use]
    pub fn with_type_of<T: ?Sized>(mut self, receiver: &T) -> Self {
        let raw = any::type_name_of_val(receiver);
        match enclosing_type(raw) {
            Ok(name) => self.type_name = Some(name.to_string()),
            Err(_) => self.type_error = Some(raw.to_string()),
        }
        self
    }

    /// Returns the bracketed identity used in header lines:
    /// `Type.module.function` or `module.function` when no type is known.
    #[must_use]
    pub fn identity(&self, type_name: Option<&str>) -> String {
        match type_name {
            Some(t) => format!("{t}.{}.{}", self.module, self.function),
            None => format!("{}.{}", self.module, self.function),
        }
    }
}

// =============================================================================
// Type-Name Resolution
// =============================================================================

/// Reduces a raw `type_name` capture to a bare enclosing type name.
///
/// Strips references and generic parameters, then takes the last path
/// segment. Mangled captures (closures) are an error; callers degrade them
/// to a warning, never a failure.
///
/// # Errors
///
/// Returns [`Error::type_resolution`] when the capture contains no resolvable
/// type segment.
pub fn enclosing_type(raw: &str) -> Result<&str> {
    let base = raw.trim_start_matches('&').trim_start_matches("mut ");
    let base = base.split('<').next().unwrap_or(base);
    if base.is_empty() || base.contains('{') {
        return Err(Error::type_resolution(raw));
    }
    let name = base.rsplit("::").next().unwrap_or(base);
    if name.is_empty() {
        return Err(Error::type_resolution(raw));
    }
    Ok(name)
}

/// Resolves the enclosing type name of a receiver, or `None` when the capture
/// is not resolvable. Used by scope macros, where an absent type is normal.
#[must_use]
pub fn type_name_of<T: ?Sized>(receiver: &T) -> Option<String> {
    enclosing_type(any::type_name_of_val(receiver))
        .ok()
        .map(str::to_string)
}

// =============================================================================
// Capture Macros
// =============================================================================

/// Expands to the name of the enclosing function as a `&'static str`.
///
/// Works by defining a zero-sized function in the current scope and reading
/// its type name.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn here() {}
        fn name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        name_of(here).trim_end_matches("::here")
    }};
}

/// Captures a [`CallSite`](crate::CallSite) for the current location.
///
/// `call_site!()` captures file, module, function, and line;
/// `call_site!(self)` additionally captures the receiver's type name.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(file!(), module_path!(), $crate::function_name!(), line!())
    };
    ($receiver:expr) => {
        $crate::call_site!().with_type_of(&$receiver)
    };
}

// =============================================================================
// Tests
// =============================================================================
