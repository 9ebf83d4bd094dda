// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use async_trait::async_trait;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use serde_json::json;
use tokio::sync::Mutex;

use super::ProteusMcp;
use crate::mcp::types::{FullContextParams, GetFlowsParams};
use crate::mcp::upstream::{DesignProvider, UpstreamError};
use crate::model::fixtures;
use crate::model::FlowGraph;
use crate::store::FlowStore;

struct StaticProvider;

#[async_trait]
impl DesignProvider for StaticProvider {
    async fn list_tools(&self) -> Result<Vec<Tool>, UpstreamError> {
        Ok(vec![upstream_tool("get_design_context"), upstream_tool("get_variables")])
    }

    async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, UpstreamError> {
        let node_id = arguments
            .as_ref()
            .and_then(|arguments| arguments.get("nodeId"))
            .and_then(|value| value.as_str())
            .unwrap_or("selection");
        Ok(CallToolResult::success(vec![Content::text(format!("{name} for {node_id}"))]))
    }
}

struct FailingProvider;

#[async_trait]
impl DesignProvider for FailingProvider {
    async fn list_tools(&self) -> Result<Vec<Tool>, UpstreamError> {
        Err(UpstreamError::Protocol("connection refused".to_owned()))
    }

    async fn call_tool(
        &self,
        _name: &str,
        _arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, UpstreamError> {
        Err(UpstreamError::Protocol("connection refused".to_owned()))
    }
}

fn upstream_tool(name: &str) -> Tool {
    serde_json::from_value(json!({
        "name": name,
        "description": "upstream design tool",
        "inputSchema": { "type": "object" },
    }))
    .expect("tool descriptor")
}

fn seeded_store() -> Arc<Mutex<FlowStore>> {
    let mut store = FlowStore::new();
    store.store(crate::extract::extract_page(&fixtures::demo_snapshot()));
    Arc::new(Mutex::new(store))
}

fn empty_store() -> Arc<Mutex<FlowStore>> {
    Arc::new(Mutex::new(FlowStore::new()))
}

fn first_text(result: &CallToolResult) -> String {
    let value = serde_json::to_value(result).expect("serialize result");
    value["content"][0]["text"].as_str().expect("text content").to_owned()
}

fn get_flows_params(format: &str) -> Parameters<GetFlowsParams> {
    Parameters(GetFlowsParams { format: Some(format.to_owned()) })
}

#[tokio::test]
async fn get_flows_without_data_reports_no_data() {
    let mcp = ProteusMcp::new(empty_store());
    let result = mcp.get_flows(Parameters(GetFlowsParams::default())).await.expect("get_flows");
    assert!(first_text(&result).starts_with("No flow data available"));
}

#[tokio::test]
async fn get_flows_defaults_to_structured_json() {
    let mcp = ProteusMcp::new(seeded_store());
    let result = mcp.get_flows(Parameters(GetFlowsParams::default())).await.expect("get_flows");

    let graph: FlowGraph = serde_json::from_str(&first_text(&result)).expect("flow graph");
    assert_eq!(graph.document_name, "Demo");
    assert_eq!(graph.connection_count(), 2);
}

#[tokio::test]
async fn get_flows_renders_tabular_and_diagram() {
    let mcp = ProteusMcp::new(seeded_store());

    let report = mcp.get_flows(get_flows_params("tabular")).await.expect("get_flows");
    assert!(first_text(&report).starts_with("# Demo - Page 1"));

    let diagram = mcp.get_flows(get_flows_params("diagram")).await.expect("get_flows");
    assert!(first_text(&diagram).starts_with("flowchart TD"));
}

#[tokio::test]
async fn get_flows_treats_unrecognized_format_as_structured() {
    let mcp = ProteusMcp::new(seeded_store());
    let result = mcp.get_flows(get_flows_params("yaml")).await.expect("get_flows");
    serde_json::from_str::<FlowGraph>(&first_text(&result)).expect("structured fallback");
}

#[tokio::test]
async fn list_flow_screens_filters_to_interactive_screens() {
    let mcp = ProteusMcp::new(seeded_store());
    let result = mcp.list_flow_screens().await.expect("list_flow_screens");

    let screens: Vec<serde_json::Value> =
        serde_json::from_str(&first_text(&result)).expect("screen list");
    let names: Vec<&str> =
        screens.iter().filter_map(|screen| screen["name"].as_str()).collect();
    // "Empty" has no interactions and is left out.
    assert_eq!(names, ["Home", "Details"]);
    assert_eq!(screens[0]["interactionCount"], 2);
}

#[tokio::test]
async fn list_flow_screens_without_data_reports_no_data() {
    let mcp = ProteusMcp::new(empty_store());
    let result = mcp.list_flow_screens().await.expect("list_flow_screens");
    assert!(first_text(&result).starts_with("No flow data available"));
}

#[tokio::test]
async fn full_context_combines_design_and_flows() {
    let mcp = ProteusMcp::with_upstream(seeded_store(), Arc::new(StaticProvider));
    let params = FullContextParams { node_id: Some("1:1".to_owned()), include_flows: None };
    let result = mcp.get_full_context(Parameters(params)).await.expect("get_full_context");

    let text = first_text(&result);
    assert!(text.contains("## Design Context"));
    assert!(text.contains("get_design_context for 1:1"));
    assert!(text.contains("## Flows & Interactions"));
    assert!(text.contains("# Demo - Page 1"));
}

#[tokio::test]
async fn full_context_degrades_when_upstream_fails() {
    let mcp = ProteusMcp::with_upstream(seeded_store(), Arc::new(FailingProvider));
    let result = mcp
        .get_full_context(Parameters(FullContextParams::default()))
        .await
        .expect("get_full_context");

    let text = first_text(&result);
    assert!(text.contains("Failed to fetch design context"));
    // Flow half still present.
    assert!(text.contains("## Flows & Interactions"));
    assert!(text.contains("# Demo - Page 1"));
}

#[tokio::test]
async fn full_context_without_upstream_still_returns_flows() {
    let mcp = ProteusMcp::new(seeded_store());
    let result = mcp
        .get_full_context(Parameters(FullContextParams::default()))
        .await
        .expect("get_full_context");

    let text = first_text(&result);
    assert!(text.contains("Failed to fetch design context"));
    assert!(text.contains("# Demo - Page 1"));
}

#[tokio::test]
async fn full_context_can_skip_flows() {
    let mcp = ProteusMcp::with_upstream(seeded_store(), Arc::new(StaticProvider));
    let params = FullContextParams { node_id: None, include_flows: Some(false) };
    let result = mcp.get_full_context(Parameters(params)).await.expect("get_full_context");

    let text = first_text(&result);
    assert!(text.contains("## Design Context"));
    assert!(!text.contains("## Flows & Interactions"));
}

#[tokio::test]
async fn merged_tools_appends_upstream_after_local() {
    let mcp = ProteusMcp::with_upstream(empty_store(), Arc::new(StaticProvider));
    let tools = mcp.merged_tools().await;
    let names: Vec<&str> = tools.iter().map(|tool| tool.name.as_ref()).collect();

    assert!(names.contains(&"get_flows"));
    assert!(names.contains(&"get_full_context"));
    assert!(names.contains(&"list_flow_screens"));
    let local_count = names.len() - 2;
    assert_eq!(&names[local_count..], ["get_design_context", "get_variables"]);
}

#[tokio::test]
async fn merged_tools_shrinks_when_upstream_is_down() {
    let with_upstream = ProteusMcp::with_upstream(empty_store(), Arc::new(FailingProvider));
    let without_upstream = ProteusMcp::new(empty_store());

    let degraded = with_upstream.merged_tools().await;
    let local = without_upstream.merged_tools().await;
    assert_eq!(degraded.len(), local.len());
}

#[tokio::test]
async fn proxy_call_flags_upstream_failure_as_tool_error() {
    let mcp = ProteusMcp::with_upstream(empty_store(), Arc::new(FailingProvider));
    let result = mcp.proxy_call("get_variables", None).await;

    assert_eq!(result.is_error, Some(true));
    assert!(first_text(&result).contains("get_variables"));
}

#[tokio::test]
async fn proxy_call_without_upstream_names_the_unknown_tool() {
    let mcp = ProteusMcp::new(empty_store());
    let result = mcp.proxy_call("get_variables", None).await;

    assert_eq!(result.is_error, Some(true));
    assert!(first_text(&result).contains("Unknown tool: get_variables"));
}

#[tokio::test]
async fn proxy_call_forwards_results_verbatim() {
    let mcp = ProteusMcp::with_upstream(empty_store(), Arc::new(StaticProvider));
    let result = mcp.proxy_call("get_variables", None).await;

    assert_ne!(result.is_error, Some(true));
    assert_eq!(first_text(&result), "get_variables for selection");
}
