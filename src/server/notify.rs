// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Extraction-available fan-out to live listeners.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 32;

/// Lightweight "extraction available" event: counts only, never the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowUpdate {
    pub key: String,
    pub screens: u64,
    pub connections: u64,
}

/// Broadcast channel wrapper. Publishing with zero subscribers is a no-op.
#[derive(Debug, Clone)]
pub struct FlowNotifier {
    sender: broadcast::Sender<FlowUpdate>,
}

impl FlowNotifier {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn publish(&self, update: FlowUpdate) {
        let _ = self.sender.send(update);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<FlowUpdate> {
        self.sender.subscribe()
    }
}

impl Default for FlowNotifier {
    fn default() -> Self {
        Self::new()
    }
}
