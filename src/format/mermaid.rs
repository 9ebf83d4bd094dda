// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mermaid flowchart export of a flow graph.

use std::collections::BTreeSet;
use std::fmt::Write;

use crate::model::FlowGraph;

/// Replace diagram-unsafe characters (`:` and `-`) with `_`. Sanitized ids
/// exist only inside the diagram text; data-model identity keeps the raw id.
pub fn sanitize_node_id(id: &str) -> String {
    id.chars().map(|ch| if ch == ':' || ch == '-' { '_' } else { ch }).collect()
}

/// Render the directed-graph diagram. Each distinct sanitized id is declared
/// exactly once, in first-seen order across the connection list (source
/// before destination), then one labeled edge per connection in graph order.
pub fn flowchart_diagram(graph: &FlowGraph) -> String {
    if graph.connections.is_empty() {
        return "flowchart TD\n  NoData[No interactions found]".to_owned();
    }

    let mut out = String::from("flowchart TD\n");

    let mut declared = BTreeSet::new();
    for connection in &graph.connections {
        for (id, name) in [
            (&connection.from_node_id, &connection.from_node_name),
            (&connection.to_node_id, &connection.to_node_name),
        ] {
            let sanitized = sanitize_node_id(id);
            if declared.insert(sanitized.clone()) {
                let _ = writeln!(out, "  {sanitized}[\"{name}\"]");
            }
        }
    }

    out.push('\n');

    for connection in &graph.connections {
        let _ = writeln!(
            out,
            "  {} -->|{}| {}",
            sanitize_node_id(&connection.from_node_id),
            connection.trigger,
            sanitize_node_id(&connection.to_node_id),
        );
    }

    out
}
