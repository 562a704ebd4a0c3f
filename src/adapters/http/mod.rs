//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod story;

pub use story::story_router;
pub use story::StoryAppState;
