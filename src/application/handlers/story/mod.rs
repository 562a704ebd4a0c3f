//! Story handlers.

mod analyze_story;

pub use analyze_story::{
    AnalysisOptions, AnalyzeStoryCommand, AnalyzeStoryError, AnalyzeStoryHandler,
    AnalyzeStoryResult,
};
