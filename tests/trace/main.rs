//! Integration tests for Layer 1: Debug
//!
//! Tests for trace emission, value formatting, and call instrumentation.

mod emit;
mod instrument;
