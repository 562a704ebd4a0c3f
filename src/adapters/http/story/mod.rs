//! Story HTTP adapter module.
//!
//! Provides the REST endpoint for archetypal story analysis.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{AnalyzeStoryRequest, AnalyzeStoryResponse, ErrorResponse};
pub use handlers::{StoryApiError, StoryAppState};
pub use routes::story_router;
