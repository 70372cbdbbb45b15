//! # rd-core
//!
//! Core types, error definitions, and scalar parsers for riskdata.
//!
//! This crate provides the building blocks shared across the workspace:
//! type aliases, the error hierarchy with its `ensure!` / `fail!` macros,
//! the long/short [`Position`], and the value parsers every document reader
//! goes through.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Position (long/short) enum.
pub mod position;

/// Scalar parsers and formatters.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the workspace.
pub type Real = f64;

/// Integer type used for codes and counts read from documents.
pub type Integer = i32;

/// Alias used for sizes / indices.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result, ResultExt};
pub use position::Position;
