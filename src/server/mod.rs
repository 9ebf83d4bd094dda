// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! HTTP/WebSocket boundary: ingest routes plus the update fan-out.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::sync::Mutex;

use crate::store::FlowStore;

pub mod notify;
mod routes;
mod ws;

pub use notify::{FlowNotifier, FlowUpdate};
pub use routes::ReceiveFlowResponse;

/// Shared handles for the HTTP layer and the MCP dispatch layer.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<FlowStore>>,
    pub notifier: FlowNotifier,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(Mutex::new(FlowStore::new())),
            notifier: FlowNotifier::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/flow-data", get(routes::list_flows).post(routes::receive_flow))
        .route("/flow-data/latest", get(routes::latest_flow))
        .route("/flow-data/{key}", get(routes::flow_by_key))
        .route("/ws", get(ws::ws_route))
        .with_state(state)
}
