//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod story;

pub use story::{
    AnalysisOptions, AnalyzeStoryCommand, AnalyzeStoryError, AnalyzeStoryHandler,
    AnalyzeStoryResult,
};
