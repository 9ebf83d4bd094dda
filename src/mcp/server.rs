// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use rmcp::handler::server::tool::{ToolCallContext, ToolRouter};
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, JsonObject, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{tool, tool_router, ErrorData, ServerHandler, ServiceExt};
use serde_json::Value;
use tokio::sync::Mutex;

use crate::format::{flowchart_diagram, tabular_report, RenderFormat};
use crate::store::FlowStore;

use super::types::*;
use super::upstream::{DesignProvider, UpstreamError};

const NO_DATA_MESSAGE: &str =
    "No flow data available. Extract a prototype flow and post it to /flow-data first.";

/// The tool the upstream provider answers design-context questions with.
const UPSTREAM_CONTEXT_TOOL: &str = "get_design_context";

#[derive(Clone)]
pub struct ProteusMcp {
    store: Arc<Mutex<FlowStore>>,
    upstream: Option<Arc<dyn DesignProvider>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ProteusMcp {
    pub fn new(store: Arc<Mutex<FlowStore>>) -> Self {
        Self { store, upstream: None, tool_router: Self::tool_router() }
    }

    pub fn with_upstream(
        store: Arc<Mutex<FlowStore>>,
        upstream: Arc<dyn DesignProvider>,
    ) -> Self {
        Self { store, upstream: Some(upstream), tool_router: Self::tool_router() }
    }

    pub async fn serve_stdio(self) -> Result<(), rmcp::RmcpError> {
        let service = self.serve((tokio::io::stdin(), tokio::io::stdout())).await?;
        service.waiting().await?;
        Ok(())
    }

    /// Latest stored flow graph, rendered per the `format` parameter.
    #[tool(name = "get_flows")]
    async fn get_flows(
        &self,
        params: Parameters<GetFlowsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let format = RenderFormat::from_param(params.0.format.as_deref().unwrap_or_default());

        let store = self.store.lock().await;
        let Some(stored) = store.latest() else {
            return Ok(CallToolResult::success(vec![Content::text(NO_DATA_MESSAGE)]));
        };

        let rendered = match format {
            RenderFormat::Structured => serde_json::to_string_pretty(stored.graph())
                .map_err(|err| {
                    ErrorData::internal_error(format!("cannot encode flow graph: {err}"), None)
                })?,
            RenderFormat::Tabular => tabular_report(stored.graph()),
            RenderFormat::Diagram => flowchart_diagram(stored.graph()),
        };
        Ok(CallToolResult::success(vec![Content::text(rendered)]))
    }

    /// Composite view: upstream design context plus our flow report. Either
    /// half may be missing; the other is still returned.
    #[tool(name = "get_full_context")]
    async fn get_full_context(
        &self,
        params: Parameters<FullContextParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let FullContextParams { node_id, include_flows } = params.0;

        let mut sections = Vec::new();
        sections.push(self.design_context_section(node_id).await);

        if include_flows.unwrap_or(true) {
            let store = self.store.lock().await;
            match store.latest() {
                Some(stored) => sections
                    .push(format!("## Flows & Interactions\n\n{}", tabular_report(stored.graph()))),
                None => sections.push(format!("## Flows & Interactions\n\n{NO_DATA_MESSAGE}")),
            }
        }

        Ok(CallToolResult::success(vec![Content::text(sections.join("\n\n"))]))
    }

    /// Screens of the latest graph that carry at least one interaction.
    #[tool(name = "list_flow_screens")]
    async fn list_flow_screens(&self) -> Result<CallToolResult, ErrorData> {
        let store = self.store.lock().await;
        let Some(stored) = store.latest() else {
            return Ok(CallToolResult::success(vec![Content::text(NO_DATA_MESSAGE)]));
        };

        let screens: Vec<ScreenSummary> = stored
            .graph()
            .screens_with_interactions()
            .map(|screen| ScreenSummary {
                id: screen.id.clone(),
                name: screen.name.clone(),
                interaction_count: screen.interactions.len() as u64,
            })
            .collect();
        let encoded = serde_json::to_string_pretty(&screens).map_err(|err| {
            ErrorData::internal_error(format!("cannot encode screen list: {err}"), None)
        })?;
        Ok(CallToolResult::success(vec![Content::text(encoded)]))
    }
}

impl ProteusMcp {
    async fn design_context_section(&self, node_id: Option<String>) -> String {
        let fetched = match self.upstream.as_ref() {
            Some(upstream) => {
                let mut arguments = JsonObject::new();
                if let Some(node_id) = node_id {
                    arguments.insert("nodeId".to_owned(), Value::String(node_id));
                }
                upstream.call_tool(UPSTREAM_CONTEXT_TOOL, Some(arguments)).await
            }
            None => Err(UpstreamError::Protocol("no design provider configured".to_owned())),
        };

        match fetched {
            Ok(result) => {
                let body = serde_json::to_string_pretty(&result.content)
                    .unwrap_or_else(|_| "[]".to_owned());
                format!("## Design Context\n\n{body}")
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch design context");
                "## Design Context\n\nFailed to fetch design context".to_owned()
            }
        }
    }

    /// Our tools first, then whatever the upstream advertises. An unreachable
    /// upstream shrinks the list instead of failing it.
    async fn merged_tools(&self) -> Vec<Tool> {
        let mut tools = self.tool_router.list_all();
        if let Some(upstream) = self.upstream.as_ref() {
            match upstream.list_tools().await {
                Ok(upstream_tools) => tools.extend(upstream_tools),
                Err(err) => tracing::warn!(error = %err, "failed to list upstream tools"),
            }
        }
        tools
    }

    async fn proxy_call(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        let Some(upstream) = self.upstream.as_ref() else {
            return CallToolResult::error(vec![Content::text(format!(
                "Unknown tool: {name} (no design provider configured)"
            ))]);
        };
        match upstream.call_tool(name, arguments).await {
            Ok(result) => result,
            Err(err) => CallToolResult::error(vec![Content::text(format!(
                "Failed to call design provider tool {name}: {err}"
            ))]),
        }
    }
}

impl ServerHandler for ProteusMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Proteus prototype flow server (tools: get_flows, get_full_context, \
                 list_flow_screens). Unrecognized tool names are forwarded to the configured \
                 upstream design provider."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult {
            next_cursor: None,
            tools: self.merged_tools().await,
            meta: Default::default(),
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        if self.tool_router.has_route(request.name.as_ref()) {
            let context = ToolCallContext::new(self, request, context);
            return self.tool_router.call(context).await;
        }

        let CallToolRequestParam { name, arguments, .. } = request;
        Ok(self.proxy_call(name.as_ref(), arguments).await)
    }
}

#[cfg(test)]
mod tests;
