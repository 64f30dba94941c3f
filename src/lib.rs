//! dotlog - Depth-aware diagnostic tracer
//!
//! This crate re-exports both layers of the dotlog system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: dotlog_debug      — Tracer, formatter, instrumentation
//! Layer 0: dotlog_foundation — Core types (Value, Table, Error)
//! ```
//!
//! # Example
//!
//! ```
//! use dotlog::debug::{TracerConfig, dotlog, global, instrument};
//! use dotlog::foundation::Value;
//!
//! global::configure(TracerConfig::new().enabled().silent());
//!
//! dotlog!("starting up");
//! let mut add = instrument("add", |args: &[Value]| -> Result<Value, String> {
//!     match (&args[0], &args[1]) {
//!         (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a + b)),
//!         _ => Err("expected two ints".to_string()),
//!     }
//! });
//! assert_eq!(add(&[Value::Int(1), Value::Int(2)]), Ok(Value::Int(3)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use dotlog_debug as debug;
pub use dotlog_foundation as foundation;
