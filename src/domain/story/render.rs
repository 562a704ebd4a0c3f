//! Markdown rendering of an archetypal analysis.
//!
//! Produces the numbered panels a reader sees: archetypal core, invariant
//! structure, variation envelope, boundary analysis, interpretive insight.

use std::fmt::Write;

use super::analysis::ArchetypalAnalysis;

/// Renders the analysis as a markdown document.
pub fn render_markdown(analysis: &ArchetypalAnalysis) -> String {
    let mut out = String::new();
    let core = &analysis.archetypal_core;
    let topology = &core.narrative_topology;

    if analysis.story_name.is_empty() {
        out.push_str("# Archetypal Analysis\n");
    } else {
        let _ = writeln!(out, "# Archetypal Analysis: {}", analysis.story_name);
    }

    out.push_str("\n## 01. Archetypal Core\n\n### Roles\n\n");
    for role in &core.roles {
        let _ = writeln!(out, "- **{}**: {}", role.name, role.description);
        if !role.examples.is_empty() {
            let _ = writeln!(out, "  - Ex: {}", role.examples.join(", "));
        }
    }

    out.push_str("\n### Tensions\n\n");
    for tension in &core.tensions {
        let _ = writeln!(out, "- **{}**: {}", tension.axis, tension.description);
    }

    out.push_str("\n### Narrative Topology\n\n");
    if !topology.nodes.is_empty() {
        let _ = writeln!(out, "{}\n", topology.nodes.join(" → "));
    }
    push_list(&mut out, &topology.edges);
    if !topology.structure_description.is_empty() {
        let _ = writeln!(out, "\n{}", topology.structure_description);
    }

    out.push_str("\n## 02. Invariant Structure\n\n");
    push_list(&mut out, &analysis.invariant_structure.invariants);

    out.push_str("\n## 03. Variation Envelope\n\n### Allowed Deformations\n\n");
    push_list(&mut out, &analysis.variation_envelope.allowed_deformations);
    out.push_str("\n### High-Variance Zones\n\n");
    push_list(&mut out, &analysis.variation_envelope.high_variance_zones);

    out.push_str("\n## 04. Boundary Analysis\n\n### Boundary Breakers\n\n");
    push_list(&mut out, &analysis.boundary_analysis.boundary_breakers);
    out.push_str("\n### Pushing the Boundary\n\n");
    push_list(&mut out, &analysis.boundary_analysis.pushing_the_boundary);

    let _ = writeln!(
        out,
        "\n## 05. Interpretive Insight\n\n{}",
        analysis.interpretive_insight
    );

    out
}

fn push_list(out: &mut String, items: &[String]) {
    for item in items {
        let _ = writeln!(out, "- {}", item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::story::analysis::{
        ArchetypalCore, ArchetypalRole, ArchetypalTension, BoundaryAnalysis, InvariantStructure,
        NarrativeTopology, VariationEnvelope,
    };

    fn ramayana() -> ArchetypalAnalysis {
        ArchetypalAnalysis {
            story_name: "Ramayana".to_string(),
            archetypal_core: ArchetypalCore {
                roles: vec![ArchetypalRole {
                    name: "The Sovereign in Exile".to_string(),
                    description: "Legitimate order displaced".to_string(),
                    examples: vec!["Valmiki's Rama".to_string(), "Kamban's Rama".to_string()],
                }],
                tensions: vec![ArchetypalTension {
                    axis: "Dharma vs. Desire".to_string(),
                    description: "Duty constrains longing".to_string(),
                }],
                narrative_topology: NarrativeTopology {
                    nodes: vec!["Order".to_string(), "Exile".to_string(), "Restoration".to_string()],
                    edges: vec!["banishment".to_string(), "war".to_string()],
                    structure_description: "A U-shaped arc.".to_string(),
                },
            },
            invariant_structure: InvariantStructure {
                invariants: vec!["The exile is accepted, not resisted".to_string()],
            },
            variation_envelope: VariationEnvelope {
                allowed_deformations: vec!["Sita's agency".to_string()],
                high_variance_zones: vec!["The fire ordeal".to_string()],
            },
            boundary_analysis: BoundaryAnalysis {
                boundary_breakers: vec!["Rama refuses exile".to_string()],
                pushing_the_boundary: vec!["Ravana as protagonist".to_string()],
            },
            interpretive_insight: "Order survives by being lost.".to_string(),
        }
    }

    #[test]
    fn renders_all_numbered_sections_in_order() {
        let md = render_markdown(&ramayana());

        let headings = [
            "## 01. Archetypal Core",
            "## 02. Invariant Structure",
            "## 03. Variation Envelope",
            "## 04. Boundary Analysis",
            "## 05. Interpretive Insight",
        ];
        let positions: Vec<usize> = headings.iter().map(|h| md.find(h).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn renders_every_list_item() {
        let md = render_markdown(&ramayana());

        assert!(md.starts_with("# Archetypal Analysis: Ramayana\n"));
        assert!(md.contains("- **The Sovereign in Exile**: Legitimate order displaced"));
        assert!(md.contains("  - Ex: Valmiki's Rama, Kamban's Rama"));
        assert!(md.contains("- **Dharma vs. Desire**: Duty constrains longing"));
        assert!(md.contains("Order → Exile → Restoration"));
        assert!(md.contains("- banishment"));
        assert!(md.contains("A U-shaped arc."));
        assert!(md.contains("- The exile is accepted, not resisted"));
        assert!(md.contains("- Sita's agency"));
        assert!(md.contains("- The fire ordeal"));
        assert!(md.contains("- Rama refuses exile"));
        assert!(md.contains("- Ravana as protagonist"));
        assert!(md.trim_end().ends_with("Order survives by being lost."));
    }

    #[test]
    fn empty_document_still_has_headings() {
        let md = render_markdown(&ArchetypalAnalysis::default());

        assert!(md.starts_with("# Archetypal Analysis\n"));
        assert!(md.contains("## 03. Variation Envelope"));
        assert!(!md.contains("→"));
    }
}
