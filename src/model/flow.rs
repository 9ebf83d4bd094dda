// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Normalized flow model produced by one extraction pass.
//!
//! Every heterogeneous trigger/action encoding of the source tree collapses
//! into the closed variant sets below, each with an `Other { raw }` arm so
//! unrecognized upstream tags stay representable without loss.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::node::CubicBezier;

/// Literal destination name used when id resolution fails.
pub const UNKNOWN_NAME: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Trigger {
    Click,
    Hover,
    Press,
    Drag,
    AfterTimeout { delay_ms: u64 },
    MouseEnter,
    MouseLeave,
    MouseUp,
    MouseDown,
    KeyDown,
    Other { raw: String },
}

impl Trigger {
    pub fn label(&self) -> String {
        match self {
            Self::Click => "click".to_owned(),
            Self::Hover => "hover".to_owned(),
            Self::Press => "press".to_owned(),
            Self::Drag => "drag".to_owned(),
            Self::AfterTimeout { delay_ms } => format!("after {delay_ms}ms"),
            Self::MouseEnter => "mouse enter".to_owned(),
            Self::MouseLeave => "mouse leave".to_owned(),
            Self::MouseUp => "mouse up".to_owned(),
            Self::MouseDown => "mouse down".to_owned(),
            Self::KeyDown => "key down".to_owned(),
            Self::Other { raw } => raw.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NavigationKind {
    Navigate,
    Swap,
    Overlay,
    ScrollTo,
    ChangeTo,
    Unspecified,
}

impl NavigationKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Navigate => "navigate",
            Self::Swap => "swap",
            Self::Overlay => "show overlay",
            Self::ScrollTo => "scroll to",
            Self::ChangeTo => "change to",
            Self::Unspecified => "node action",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    #[serde(rename = "type")]
    pub kind: String,
    pub duration: f64,
    pub easing: Easing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Easing {
    #[serde(rename = "type")]
    pub kind: String,
    /// Control points, present only for the custom cubic-bezier easing kind.
    pub cubic_bezier: Option<CubicBezier>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OverlayPosition {
    Center,
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl OverlayPosition {
    /// Falls back to `Center` for anything outside the recognized tag set.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "TOP_LEFT" => Self::TopLeft,
            "TOP_CENTER" => Self::TopCenter,
            "TOP_RIGHT" => Self::TopRight,
            "BOTTOM_LEFT" => Self::BottomLeft,
            "BOTTOM_CENTER" => Self::BottomCenter,
            "BOTTOM_RIGHT" => Self::BottomRight,
            _ => Self::Center,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Overlay {
    pub position: OverlayPosition,
    pub offset_x: Option<f64>,
    pub offset_y: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    Back,
    Close,
    OpenUrl {
        url: String,
    },
    SetVariable,
    SetVariableMode,
    Conditional,
    UpdateMedia,
    Node {
        navigation: NavigationKind,
        destination_id: Option<String>,
        destination_name: Option<String>,
        transition: Option<Transition>,
        overlay: Option<Overlay>,
    },
    Other {
        raw: String,
    },
}

impl Action {
    pub fn label(&self) -> String {
        match self {
            Self::Back => "back".to_owned(),
            Self::Close => "close".to_owned(),
            Self::OpenUrl { .. } => "open url".to_owned(),
            Self::SetVariable => "set variable".to_owned(),
            Self::SetVariableMode => "set variable mode".to_owned(),
            Self::Conditional => "conditional".to_owned(),
            Self::UpdateMedia => "update media".to_owned(),
            Self::Node { navigation, .. } => navigation.label().to_owned(),
            Self::Other { raw } => raw.clone(),
        }
    }

    /// Destination node id, when this action navigates somewhere.
    pub fn destination_id(&self) -> Option<&str> {
        match self {
            Self::Node { destination_id, .. } => destination_id.as_deref(),
            _ => None,
        }
    }

    /// Display name of the destination. For `OpenUrl` this is the literal URL
    /// (there is no node to resolve).
    pub fn destination_name(&self) -> Option<&str> {
        match self {
            Self::Node { destination_name, .. } => destination_name.as_deref(),
            Self::OpenUrl { url } => Some(url),
            _ => None,
        }
    }

    pub fn transition(&self) -> Option<&Transition> {
        match self {
            Self::Node { transition, .. } => transition.as_ref(),
            _ => None,
        }
    }
}

/// One reaction record of one node, normalized. A node with N records yields
/// N interactions in record order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlowInteraction {
    pub node_id: String,
    pub node_name: String,
    pub node_kind: String,
    pub trigger: Trigger,
    pub actions: Vec<Action>,
}

/// A container-kind node retained as a screen, with all of its interactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlowScreen {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub width: f64,
    pub height: f64,
    pub interactions: Vec<FlowInteraction>,
}

impl FlowScreen {
    pub fn has_interactions(&self) -> bool {
        !self.interactions.is_empty()
    }
}

/// One destination-bearing (interaction, action) pair, flattened to labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlowConnection {
    pub from_node_id: String,
    pub from_node_name: String,
    pub to_node_id: String,
    pub to_node_name: String,
    pub trigger: String,
    pub action_type: String,
    pub transition: Option<String>,
}

/// Aggregate result of one traversal. Screens are in pre-order visit order,
/// connections in discovery order; no sorting is ever applied, and the graph
/// is immutable once assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlowGraph {
    pub document_name: String,
    pub page_name: String,
    /// Opaque host-supplied timestamp text; renderers echo it verbatim.
    pub extracted_at: String,
    pub screens: Vec<FlowScreen>,
    #[serde(rename = "flowConnections")]
    pub connections: Vec<FlowConnection>,
}

impl FlowGraph {
    /// Composite store key: `{document_name}_{page_name}`.
    pub fn key(&self) -> String {
        format!("{}_{}", self.document_name, self.page_name)
    }

    pub fn screen_count(&self) -> usize {
        self.screens.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Screens that carry at least one interaction; the walker keeps all
    /// container nodes, so report-level filtering happens here.
    pub fn screens_with_interactions(&self) -> impl Iterator<Item = &FlowScreen> {
        self.screens.iter().filter(|screen| screen.has_interactions())
    }
}
