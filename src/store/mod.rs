// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Latest-value cache for extracted flow graphs.
//!
//! Keyed by `{document_name}_{page_name}`; every write replaces the entry
//! wholesale and moves the latest pointer, so readers never observe a torn
//! graph. Empty at start; "no data yet" is a normal state, not an error.

use std::collections::BTreeMap;

use chrono::Utc;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::FlowGraph;

/// One stored extraction result with its server-side receive timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredFlow {
    graph: FlowGraph,
    received_at: String,
}

impl StoredFlow {
    pub fn graph(&self) -> &FlowGraph {
        &self.graph
    }

    pub fn received_at(&self) -> &str {
        &self.received_at
    }
}

/// Lightweight listing entry for one stored graph.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FlowSummary {
    pub key: String,
    pub received_at: String,
    pub screens: u64,
    pub connections: u64,
}

#[derive(Debug, Clone, Default)]
pub struct FlowStore {
    entries: BTreeMap<String, StoredFlow>,
    latest_key: Option<String>,
}

impl FlowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a graph under its composite key, last-write-wins. Returns the key.
    pub fn store(&mut self, graph: FlowGraph) -> String {
        let key = graph.key();
        self.entries.insert(
            key.clone(),
            StoredFlow { graph, received_at: Utc::now().to_rfc3339() },
        );
        self.latest_key = Some(key.clone());
        key
    }

    pub fn latest(&self) -> Option<&StoredFlow> {
        self.latest_key.as_deref().and_then(|key| self.entries.get(key))
    }

    pub fn get(&self, key: &str) -> Option<&StoredFlow> {
        self.entries.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn summaries(&self) -> Vec<FlowSummary> {
        self.entries
            .iter()
            .map(|(key, stored)| FlowSummary {
                key: key.clone(),
                received_at: stored.received_at.clone(),
                screens: stored.graph.screen_count() as u64,
                connections: stored.graph.connection_count() as u64,
            })
            .collect()
    }
}
