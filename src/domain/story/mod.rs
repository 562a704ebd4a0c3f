//! Story module - what the user asks about and what comes back.
//!
//! - `StoryName` / `ApiKey` - validated request inputs
//! - `ArchetypalAnalysis` - typed view of the analysis document
//! - `strip_markdown_fences` - cleanup of raw model output
//! - `render_markdown` - numbered-panel rendering of an analysis

mod analysis;
mod api_key;
mod fences;
mod render;
mod story_name;

pub use analysis::{
    ArchetypalAnalysis, ArchetypalCore, ArchetypalRole, ArchetypalTension,
    ArchetypalTransformation, BoundaryAnalysis, InvariantStructure, NarrativeTopology,
    VariationEnvelope,
};
pub use api_key::ApiKey;
pub use fences::strip_markdown_fences;
pub use render::render_markdown;
pub use story_name::StoryName;
