// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! HTTP ingest and query endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::notify::FlowUpdate;
use super::AppState;
use crate::extract::extract_selection;
use crate::model::DesignSnapshot;
use crate::store::FlowSummary;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiveFlowResponse {
    pub success: bool,
    pub key: String,
    pub screens: u64,
    pub connections: u64,
}

pub(super) async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "timestamp": Utc::now().to_rfc3339() }))
}

/// Ingest a design snapshot: extract, replace the stored graph, notify
/// listeners. Snapshots without a selection get whole-page extraction via the
/// empty-selection default.
pub(super) async fn receive_flow(
    State(state): State<AppState>,
    Json(snapshot): Json<DesignSnapshot>,
) -> Json<ReceiveFlowResponse> {
    let graph = extract_selection(&snapshot);
    let screens = graph.screen_count() as u64;
    let connections = graph.connection_count() as u64;

    let key = {
        let mut store = state.store.lock().await;
        store.store(graph)
    };

    tracing::info!(%key, screens, connections, "flow data received");
    state.notifier.publish(FlowUpdate { key: key.clone(), screens, connections });

    Json(ReceiveFlowResponse { success: true, key, screens, connections })
}

pub(super) async fn list_flows(State(state): State<AppState>) -> Json<Vec<FlowSummary>> {
    let store = state.store.lock().await;
    Json(store.summaries())
}

pub(super) async fn latest_flow(State(state): State<AppState>) -> Response {
    let store = state.store.lock().await;
    match store.latest() {
        Some(stored) => Json(stored.graph().clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "No flow data available" })),
        )
            .into_response(),
    }
}

pub(super) async fn flow_by_key(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Response {
    let store = state.store.lock().await;
    match store.get(&key) {
        Some(stored) => Json(stored.graph().clone()).into_response(),
        None => {
            (StatusCode::NOT_FOUND, Json(json!({ "error": "Flow data not found" })))
                .into_response()
        }
    }
}
