//! Core types for document vetting.
//!
//! The error module defines [`AnalyzeError`], the single strongly-typed error
//! enum used throughout the library. Every variant carries a user-facing
//! message; the analysis surface converts these into error-status reports
//! rather than propagating them to callers.

pub mod error;

pub use error::AnalyzeError;
