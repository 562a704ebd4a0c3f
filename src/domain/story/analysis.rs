//! Typed view of the archetypal analysis document.
//!
//! The service passes the model's JSON through as a `serde_json::Value`;
//! these types exist for consumers that render the document. Every field
//! defaults when absent, so conversion only fails on a wrong JSON type.

use serde::{Deserialize, Serialize};

/// Structured result of triangulating a story across its known versions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArchetypalAnalysis {
    pub story_name: String,
    pub archetypal_core: ArchetypalCore,
    pub invariant_structure: InvariantStructure,
    pub variation_envelope: VariationEnvelope,
    pub boundary_analysis: BoundaryAnalysis,
    /// Why the story survives retelling, in structural terms.
    pub interpretive_insight: String,
}

impl ArchetypalAnalysis {
    /// Reads the typed view out of a raw analysis document.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArchetypalCore {
    pub roles: Vec<ArchetypalRole>,
    pub tensions: Vec<ArchetypalTension>,
    pub narrative_topology: NarrativeTopology,
}

/// A functional position in the story, not a character.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArchetypalRole {
    pub name: String,
    pub description: String,
    /// How different versions instantiate the role.
    pub examples: Vec<String>,
}

/// A binary axis of conflict, e.g. "Order vs. Chaos".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArchetypalTension {
    pub axis: String,
    pub description: String,
}

/// A state change carried by some mechanism.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArchetypalTransformation {
    pub from: String,
    pub to: String,
    pub mechanism: String,
}

/// The story as a directed graph of archetypal states.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NarrativeTopology {
    pub nodes: Vec<String>,
    pub edges: Vec<String>,
    pub structure_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvariantStructure {
    /// What must remain true for the story to stay this story.
    pub invariants: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VariationEnvelope {
    pub allowed_deformations: Vec<String>,
    /// Where cultures and eras intervene most heavily.
    pub high_variance_zones: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoundaryAnalysis {
    /// Changes that would make it a different story.
    pub boundary_breakers: Vec<String>,
    pub pushing_the_boundary: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_camel_case_document() {
        let value = json!({
            "storyName": "Prometheus",
            "archetypalCore": {
                "roles": [{
                    "name": "The Transgressive Benefactor",
                    "description": "Steals from order to give to the powerless",
                    "examples": ["Hesiod's trickster", "Shelley's martyr"]
                }],
                "tensions": [{"axis": "Order vs. Gift", "description": "Sovereign law against mercy"}],
                "narrativeTopology": {
                    "nodes": ["Scarcity", "Theft", "Punishment"],
                    "edges": ["defiance", "retribution"],
                    "structureDescription": "A descending arc."
                }
            },
            "invariantStructure": {"invariants": ["A boundary is crossed"]},
            "variationEnvelope": {
                "allowedDeformations": ["Nature of the gift"],
                "highVarianceZones": ["Ending"]
            },
            "boundaryAnalysis": {
                "boundaryBreakers": ["No punishment"],
                "pushingTheBoundary": ["Frankenstein"]
            },
            "interpretiveInsight": "Gift and wound arrive together."
        });

        let analysis = ArchetypalAnalysis::from_value(&value).unwrap();

        assert_eq!(analysis.story_name, "Prometheus");
        assert_eq!(analysis.archetypal_core.roles.len(), 1);
        assert_eq!(analysis.archetypal_core.roles[0].examples.len(), 2);
        assert_eq!(analysis.archetypal_core.narrative_topology.nodes.len(), 3);
        assert_eq!(analysis.variation_envelope.high_variance_zones, vec!["Ending"]);
        assert_eq!(analysis.boundary_analysis.pushing_the_boundary, vec!["Frankenstein"]);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let analysis = ArchetypalAnalysis::from_value(&json!({"storyName": "Beowulf"})).unwrap();

        assert_eq!(analysis.story_name, "Beowulf");
        assert!(analysis.archetypal_core.roles.is_empty());
        assert!(analysis.invariant_structure.invariants.is_empty());
        assert_eq!(analysis.interpretive_insight, "");
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        let result = ArchetypalAnalysis::from_value(&json!({"archetypalCore": {"roles": "many"}}));
        assert!(result.is_err());
    }

    #[test]
    fn serializes_with_wire_names() {
        let analysis = ArchetypalAnalysis {
            story_name: "Gilgamesh".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&analysis).unwrap();

        assert_eq!(value["storyName"], "Gilgamesh");
        assert!(value["archetypalCore"]["narrativeTopology"]["structureDescription"].is_string());
        assert!(value["boundaryAnalysis"]["pushingTheBoundary"].is_array());
    }

    #[test]
    fn transformation_uses_plain_field_names() {
        let t: ArchetypalTransformation =
            serde_json::from_value(json!({"from": "exile", "to": "return", "mechanism": "ordeal"}))
                .unwrap();
        assert_eq!(t.from, "exile");
        assert_eq!(t.mechanism, "ordeal");
    }
}
