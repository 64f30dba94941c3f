//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, Table, Column, and Error.

mod values;
