// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Client side of the composite: a JSON-RPC bridge to an upstream design
//! provider whose tools we merge into our own surface.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use serde_json::{json, Value};

#[derive(Debug)]
pub enum UpstreamError {
    /// The HTTP round trip itself failed (connect, timeout, body read).
    Http(reqwest::Error),
    /// The provider answered, but not with a usable JSON-RPC result.
    Protocol(String),
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamError::Http(err) => write!(formatter, "upstream request failed: {err}"),
            UpstreamError::Protocol(message) => {
                write!(formatter, "upstream protocol error: {message}")
            }
        }
    }
}

impl std::error::Error for UpstreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UpstreamError::Http(err) => Some(err),
            UpstreamError::Protocol(_) => None,
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        UpstreamError::Http(err)
    }
}

/// Tool source we forward unrecognized calls to. Implemented over HTTP in
/// production and by in-process stubs in tests.
#[async_trait]
pub trait DesignProvider: Send + Sync {
    async fn list_tools(&self) -> Result<Vec<Tool>, UpstreamError>;

    async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, UpstreamError>;
}

/// JSON-RPC 2.0 over plain HTTP POST, one request per call.
#[derive(Debug)]
pub struct HttpDesignProvider {
    endpoint: String,
    client: reqwest::Client,
    next_id: AtomicU64,
}

impl HttpDesignProvider {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn round_trip(&self, method: &str, params: Option<Value>) -> Result<Value, UpstreamError> {
        let mut request = json!({
            "jsonrpc": "2.0",
            "id": self.next_id.fetch_add(1, Ordering::Relaxed),
            "method": method,
        });
        if let Some(params) = params {
            request["params"] = params;
        }

        let response: Value = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(error) = response.get("error") {
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown error")
                .to_owned();
            return Err(UpstreamError::Protocol(message));
        }

        response
            .get("result")
            .cloned()
            .ok_or_else(|| UpstreamError::Protocol("response carries no result".to_owned()))
    }
}

#[async_trait]
impl DesignProvider for HttpDesignProvider {
    async fn list_tools(&self) -> Result<Vec<Tool>, UpstreamError> {
        let result = self.round_trip("tools/list", None).await?;
        let tools = result.get("tools").cloned().unwrap_or(Value::Array(Vec::new()));
        serde_json::from_value(tools)
            .map_err(|err| UpstreamError::Protocol(format!("cannot decode tool list: {err}")))
    }

    async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, UpstreamError> {
        let result = self
            .round_trip("tools/call", Some(json!({ "name": name, "arguments": arguments })))
            .await?;
        serde_json::from_value(result)
            .map_err(|err| UpstreamError::Protocol(format!("cannot decode tool result: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::{HttpDesignProvider, UpstreamError};

    #[test]
    fn protocol_errors_render_their_message() {
        let err = UpstreamError::Protocol("boom".to_owned());
        assert_eq!(err.to_string(), "upstream protocol error: boom");
    }

    #[test]
    fn provider_keeps_its_endpoint() {
        let provider = HttpDesignProvider::new("http://127.0.0.1:3845/mcp");
        assert_eq!(provider.endpoint(), "http://127.0.0.1:3845/mcp");
    }
}
