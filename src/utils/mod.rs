//! Utils module - Shared utilities and helpers

/// Tracing subscriber setup
pub mod logging;

/// Prompt answer normalization and validation
pub mod validation;

/// Number formatting for console output
pub mod text;
