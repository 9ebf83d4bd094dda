// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! WebSocket push channel.
//!
//! A new subscriber receives a full snapshot of the latest graph first, then
//! incremental count-only update events; `get-latest` requests the full graph
//! again at any time.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::AppState;
use crate::model::FlowGraph;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
enum ServerMessage {
    InitialData { data: FlowGraph },
    FlowData { data: Option<FlowGraph> },
    FlowDataUpdated { key: String, summary: UpdateSummary },
}

#[derive(Debug, Clone, Serialize)]
struct UpdateSummary {
    screens: u64,
    connections: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
enum ClientMessage {
    GetLatest,
}

pub(super) async fn ws_route(
    State(state): State<AppState>,
    upgrade: WebSocketUpgrade,
) -> Response {
    upgrade.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(mut socket: WebSocket, state: AppState) {
    let mut updates = state.notifier.subscribe();

    let initial = {
        let store = state.store.lock().await;
        store.latest().map(|stored| stored.graph().clone())
    };
    if let Some(graph) = initial {
        if send_message(&mut socket, &ServerMessage::InitialData { data: graph })
            .await
            .is_err()
        {
            return;
        }
    }

    loop {
        tokio::select! {
            update = updates.recv() => match update {
                Ok(update) => {
                    let message = ServerMessage::FlowDataUpdated {
                        key: update.key,
                        summary: UpdateSummary {
                            screens: update.screens,
                            connections: update.connections,
                        },
                    };
                    if send_message(&mut socket, &message).await.is_err() {
                        return;
                    }
                }
                // A slow client only misses count events; the graph itself is
                // always re-fetchable via get-latest.
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return,
            },
            incoming = socket.recv() => {
                let Some(Ok(message)) = incoming else {
                    return;
                };
                if let Message::Text(text) = message {
                    if let Ok(ClientMessage::GetLatest) = serde_json::from_str(&text) {
                        let latest = {
                            let store = state.store.lock().await;
                            store.latest().map(|stored| stored.graph().clone())
                        };
                        let message = ServerMessage::FlowData { data: latest };
                        if send_message(&mut socket, &message).await.is_err() {
                            return;
                        }
                    }
                }
            }
        }
    }
}

async fn send_message(
    socket: &mut WebSocket,
    message: &ServerMessage,
) -> Result<(), axum::Error> {
    let Ok(text) = serde_json::to_string(message) else {
        return Ok(());
    };
    socket.send(Message::Text(text.into())).await
}
