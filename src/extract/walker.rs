// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tree walker: pre-order traversal assembling one [`FlowGraph`] per pass.
//!
//! `walk_node` is a pure function returning the partial result of one subtree;
//! callers fold subtree results in root order, which keeps screen and
//! connection ordering a direct function of document order without any shared
//! accumulator.

use chrono::Utc;

use super::normalize::{normalize_reaction, NameResolver};
use super::source::{find_node, DocumentIndex};
use crate::model::{
    DesignNode, DesignSnapshot, FlowConnection, FlowGraph, FlowInteraction, FlowScreen,
    UNKNOWN_NAME,
};

/// Screens and connections collected from one subtree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubtreeFlow {
    pub screens: Vec<FlowScreen>,
    pub connections: Vec<FlowConnection>,
}

impl SubtreeFlow {
    fn absorb(&mut self, other: SubtreeFlow) {
        self.screens.extend(other.screens);
        self.connections.extend(other.connections);
    }
}

/// Visit `node` and every descendant exactly once, pre-order.
///
/// Any node may contribute connections; only container kinds become screens,
/// and they do so even with zero interactions (report-level filtering is a
/// renderer concern, the graph stays a structural mirror of the document).
pub fn walk_node(node: &DesignNode, resolver: &impl NameResolver) -> SubtreeFlow {
    let interactions: Vec<FlowInteraction> = node
        .reactions
        .iter()
        .filter_map(|record| normalize_reaction(node, record, resolver))
        .collect();

    let mut flow = SubtreeFlow::default();
    for interaction in &interactions {
        for action in &interaction.actions {
            let Some(destination_id) = action.destination_id() else {
                continue;
            };
            flow.connections.push(FlowConnection {
                from_node_id: node.id.clone(),
                from_node_name: node.name.clone(),
                to_node_id: destination_id.to_owned(),
                to_node_name: action.destination_name().unwrap_or(UNKNOWN_NAME).to_owned(),
                trigger: interaction.trigger.label(),
                action_type: action.label(),
                transition: action.transition().map(|transition| transition.kind.clone()),
            });
        }
    }

    if node.kind.is_container() {
        flow.screens.push(FlowScreen {
            id: node.id.clone(),
            name: node.name.clone(),
            kind: node.kind.as_str().to_owned(),
            width: node.width,
            height: node.height,
            interactions,
        });
    }

    for child in &node.children {
        flow.absorb(walk_node(child, resolver));
    }

    flow
}

/// Extract the whole page: every top-level node is a root.
pub fn extract_page(snapshot: &DesignSnapshot) -> FlowGraph {
    graph_from_roots(snapshot, snapshot.nodes.iter())
}

/// Extract the selected nodes only. An empty selection list falls back to
/// whole-page extraction (defined default); selection ids that do not resolve
/// in the snapshot are skipped.
pub fn extract_selection(snapshot: &DesignSnapshot) -> FlowGraph {
    if snapshot.selection.is_empty() {
        return extract_page(snapshot);
    }
    let roots = snapshot
        .selection
        .iter()
        .filter_map(|id| find_node(&snapshot.nodes, id));
    graph_from_roots(snapshot, roots)
}

fn graph_from_roots<'a>(
    snapshot: &DesignSnapshot,
    roots: impl Iterator<Item = &'a DesignNode>,
) -> FlowGraph {
    let index = DocumentIndex::from_roots(&snapshot.nodes);

    let mut flow = SubtreeFlow::default();
    for root in roots {
        flow.absorb(walk_node(root, &index));
    }

    FlowGraph {
        document_name: snapshot.document_name.clone(),
        page_name: snapshot.page_name.clone(),
        extracted_at: snapshot
            .extracted_at
            .clone()
            .unwrap_or_else(|| Utc::now().to_rfc3339()),
        screens: flow.screens,
        connections: flow.connections,
    }
}
