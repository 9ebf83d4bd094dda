// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Raw design-document tree as supplied by the host.
//!
//! These types mirror the wire payload one-to-one and are never mutated by the
//! extraction pipeline; everything downstream works on the normalized model in
//! [`crate::model::flow`].

use serde::{Deserialize, Serialize};

/// One node of the design document. Polymorphic over [`NodeKind`]; only
/// container kinds become screens, but any node may carry reactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub children: Vec<DesignNode>,
    #[serde(default)]
    pub reactions: Vec<ReactionRecord>,
}

/// Node kind tag. Unrecognized upstream tags round-trip through `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    Frame,
    Component,
    ComponentSet,
    Other(String),
}

impl NodeKind {
    /// Container kinds are the only kinds eligible to become a `FlowScreen`.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Frame | Self::Component | Self::ComponentSet)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Frame => "FRAME",
            Self::Component => "COMPONENT",
            Self::ComponentSet => "COMPONENT_SET",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for NodeKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "FRAME" => Self::Frame,
            "COMPONENT" => Self::Component,
            "COMPONENT_SET" => Self::ComponentSet,
            _ => Self::Other(value),
        }
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        kind.as_str().to_owned()
    }
}

/// A trigger paired with the actions it fires. Records without a trigger are
/// skipped during normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionRecord {
    #[serde(default)]
    pub trigger: Option<RawTrigger>,
    #[serde(default)]
    pub actions: Vec<RawAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTrigger {
    #[serde(rename = "type")]
    pub kind: String,
    /// Delay in milliseconds; only present on `AFTER_TIMEOUT` triggers.
    #[serde(default)]
    pub timeout: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub destination_id: Option<String>,
    #[serde(default)]
    pub navigation: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub transition: Option<RawTransition>,
    /// Either a position tag string or a `{x, y}` offset object; anything
    /// else falls back to a centered overlay.
    #[serde(default)]
    pub overlay_relative_position: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransition {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub duration: f64,
    pub easing: RawEasing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEasing {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub easing_function_cubic_bezier: Option<CubicBezier>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// The payload the host posts to `/flow-data`: a page snapshot plus the ids
/// of the currently selected nodes (empty selection means whole page).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSnapshot {
    pub document_name: String,
    pub page_name: String,
    #[serde(default)]
    pub extracted_at: Option<String>,
    #[serde(default)]
    pub nodes: Vec<DesignNode>,
    #[serde(default)]
    pub selection: Vec<String>,
}
