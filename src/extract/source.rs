// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Node-source collaborators over a snapshot tree.

use std::collections::BTreeMap;

use super::normalize::NameResolver;
use crate::model::DesignNode;

/// Id-to-name index over a full snapshot. Destination names always resolve
/// against the whole page, even when extraction runs on a selection subset.
#[derive(Debug, Clone, Default)]
pub struct DocumentIndex {
    names: BTreeMap<String, String>,
}

impl DocumentIndex {
    pub fn from_roots(roots: &[DesignNode]) -> Self {
        let mut names = BTreeMap::new();
        for root in roots {
            index_node(root, &mut names);
        }
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn index_node(node: &DesignNode, names: &mut BTreeMap<String, String>) {
    names.insert(node.id.clone(), node.name.clone());
    for child in &node.children {
        index_node(child, names);
    }
}

impl NameResolver for DocumentIndex {
    fn resolve_name(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }
}

/// Depth-first lookup of a node by id, used to resolve selection roots.
pub fn find_node<'a>(roots: &'a [DesignNode], id: &str) -> Option<&'a DesignNode> {
    for root in roots {
        if root.id == id {
            return Some(root);
        }
        if let Some(found) = find_node(&root.children, id) {
            return Some(found);
        }
    }
    None
}
