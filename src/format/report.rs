// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tabular Markdown report of a flow graph.

use std::fmt::Write;

use crate::model::{FlowGraph, FlowScreen};

/// Render the human-readable report: document/page heading, extraction time,
/// screen count, one subsection per screen with interactions, and a trailing
/// connection table. Screens with zero interactions are omitted here even
/// though the walker retains them.
pub fn tabular_report(graph: &FlowGraph) -> String {
    let mut md = String::new();

    let _ = writeln!(md, "# {} - {}", graph.document_name, graph.page_name);
    md.push('\n');
    let _ = writeln!(md, "Extracted: {}", graph.extracted_at);
    md.push('\n');
    let _ = writeln!(md, "## Screens ({})", graph.screen_count());
    md.push('\n');

    for screen in graph.screens_with_interactions() {
        write_screen_section(&mut md, screen);
    }

    if !graph.connections.is_empty() {
        md.push_str("## Screen Transitions\n\n");
        md.push_str("| From | Trigger | Action | To | Transition |\n");
        md.push_str("|------|---------|--------|----|-----------|\n");
        for connection in &graph.connections {
            let _ = writeln!(
                md,
                "| {} | {} | {} | {} | {} |",
                connection.from_node_name,
                connection.trigger,
                connection.action_type,
                connection.to_node_name,
                connection.transition.as_deref().unwrap_or("-"),
            );
        }
    }

    md
}

fn write_screen_section(md: &mut String, screen: &FlowScreen) {
    let _ = writeln!(md, "### {}", screen.name);
    let _ = writeln!(md, "- ID: `{}`", screen.id);
    let _ = writeln!(md, "- Type: {}", screen.kind);
    let _ = writeln!(md, "- Size: {} x {}", screen.width, screen.height);
    md.push('\n');

    md.push_str("#### Interactions\n");
    for interaction in &screen.interactions {
        let _ = writeln!(md, "- **{}** ({})", interaction.node_name, interaction.node_kind);
        let _ = writeln!(md, "  - Trigger: {}", interaction.trigger.label());
        for action in &interaction.actions {
            let _ = writeln!(md, "  - Action: {}", action.label());
            if let Some(destination) = action.destination_name() {
                let _ = writeln!(md, "    - Destination: {destination}");
            }
            if let Some(transition) = action.transition() {
                let _ = writeln!(
                    md,
                    "    - Transition: {} ({}s)",
                    transition.kind, transition.duration
                );
            }
        }
    }
    md.push('\n');
}
