//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Model providers (Anthropic, mock)
//! - `http` - Axum REST endpoints

pub mod ai;
pub mod http;
