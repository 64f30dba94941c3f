//! Core value domain and error types for dotlog.
//!
//! This crate provides:
//! - [`Value`] - The closed set of tagged variants the tracer knows how to render
//! - [`Table`] / [`Column`] - Labeled tabular data with shape-aware rendering support
//! - [`Error`] - Recoverable error types for introspection and formatting failures
//!
//! Collection variants use persistent data structures from the `im` crate, so
//! values are cheap to clone and safe to hand to the tracer without copies.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod table;
mod value;

pub use error::{Error, ErrorKind, Result};
pub use table::{Column, Table};
pub use value::{TypeTag, Value};
