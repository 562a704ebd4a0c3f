//! Story Triangulation - Archetypal analysis of myths and stories
//!
//! This crate exposes one HTTP endpoint that turns a story name into a
//! structured archetypal analysis by prompting an external language model
//! with the caller's own API key.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
