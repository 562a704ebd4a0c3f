//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors)
//! - `story` - Story inputs, the analysis document, fence stripping, rendering
//! - `prompts` - Fixed prompt templates for the model
pub mod foundation;
pub mod prompts;
pub mod story;
