//! Validation and normalization of money-movement instructions.
//!
//! The [`validation`] functions are the core: pure, field-level checks for routing numbers,
//! account numbers, SWIFT/BIC codes and amounts. [`engine::BatchEngine`] runs them over a CSV
//! file for the command line front end.

pub mod engine;
pub mod models;
pub mod types;
pub mod validation;
