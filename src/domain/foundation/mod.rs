//! Foundation module - Shared domain primitives.
//!
//! Contains the error types that form the vocabulary of value object
//! construction across the story triangulation domain.

mod errors;

pub use errors::ValidationError;
