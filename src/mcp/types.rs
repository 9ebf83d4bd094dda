// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetFlowsParams {
    /// Output encoding: "structured" (default), "tabular" or "diagram".
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct FullContextParams {
    /// Node to ask the upstream design provider about. Omit for the current
    /// upstream selection.
    pub node_id: Option<String>,
    /// Append the flow report to the design context. Defaults to true.
    pub include_flows: Option<bool>,
}

/// Projection served by `list_flow_screens`; camelCase like the rest of the
/// published flow payloads.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScreenSummary {
    pub id: String,
    pub name: String,
    pub interaction_count: u64,
}
