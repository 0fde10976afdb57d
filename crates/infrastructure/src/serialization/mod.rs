//! Serialization for suite files and run reports.
//!
//! Report output is deterministic:
//! - Fields in declaration order
//! - 2-space indentation
//! - Trailing newline
//! - UTF-8 encoding without BOM

mod json;

pub use json::*;
