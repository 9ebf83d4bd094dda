// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Interaction normalization.
//!
//! Converts one raw reaction record into a [`FlowInteraction`]. Every mapping
//! here is total: unrecognized trigger/action tags pass through as
//! `Other { raw }`, and a destination id that cannot be resolved yields the
//! literal `Unknown` name instead of an error.

use serde_json::Value;

use crate::model::{
    Action, DesignNode, Easing, FlowInteraction, NavigationKind, Overlay, OverlayPosition,
    RawAction, RawTransition, RawTrigger, ReactionRecord, Transition, Trigger, UNKNOWN_NAME,
};

/// Destination-name lookup collaborator: `lookup(id) -> name | not-found`.
pub trait NameResolver {
    fn resolve_name(&self, id: &str) -> Option<&str>;
}

/// Normalize one reaction record. Returns `None` only when the record has no
/// trigger; malformed actions still normalize, they never fail.
pub fn normalize_reaction(
    node: &DesignNode,
    record: &ReactionRecord,
    resolver: &impl NameResolver,
) -> Option<FlowInteraction> {
    let trigger = record.trigger.as_ref()?;
    Some(FlowInteraction {
        node_id: node.id.clone(),
        node_name: node.name.clone(),
        node_kind: node.kind.as_str().to_owned(),
        trigger: trigger_from_raw(trigger),
        actions: record
            .actions
            .iter()
            .map(|action| action_from_raw(action, resolver))
            .collect(),
    })
}

pub fn trigger_from_raw(raw: &RawTrigger) -> Trigger {
    match raw.kind.as_str() {
        "ON_CLICK" => Trigger::Click,
        "ON_HOVER" => Trigger::Hover,
        "ON_PRESS" => Trigger::Press,
        "ON_DRAG" => Trigger::Drag,
        "AFTER_TIMEOUT" => Trigger::AfterTimeout {
            delay_ms: raw.timeout.unwrap_or(0.0).max(0.0) as u64,
        },
        "MOUSE_ENTER" => Trigger::MouseEnter,
        "MOUSE_LEAVE" => Trigger::MouseLeave,
        "MOUSE_UP" => Trigger::MouseUp,
        "MOUSE_DOWN" => Trigger::MouseDown,
        "ON_KEY_DOWN" => Trigger::KeyDown,
        _ => Trigger::Other { raw: raw.kind.clone() },
    }
}

pub fn action_from_raw(raw: &RawAction, resolver: &impl NameResolver) -> Action {
    match raw.kind.as_str() {
        "BACK" => Action::Back,
        "CLOSE" => Action::Close,
        "URL" => Action::OpenUrl { url: raw.url.clone().unwrap_or_default() },
        "SET_VARIABLE" => Action::SetVariable,
        "SET_VARIABLE_MODE" => Action::SetVariableMode,
        "CONDITIONAL" => Action::Conditional,
        "UPDATE_MEDIA_RUNTIME" => Action::UpdateMedia,
        "NODE" => node_action_from_raw(raw, resolver),
        _ => Action::Other { raw: raw.kind.clone() },
    }
}

fn node_action_from_raw(raw: &RawAction, resolver: &impl NameResolver) -> Action {
    let navigation = match raw.navigation.as_deref() {
        Some("NAVIGATE") => NavigationKind::Navigate,
        Some("SWAP") => NavigationKind::Swap,
        Some("OVERLAY") => NavigationKind::Overlay,
        Some("SCROLL_TO") => NavigationKind::ScrollTo,
        Some("CHANGE_TO") => NavigationKind::ChangeTo,
        _ => NavigationKind::Unspecified,
    };

    let destination_id = raw.destination_id.clone();
    let destination_name = destination_id
        .as_deref()
        .map(|id| resolver.resolve_name(id).unwrap_or(UNKNOWN_NAME).to_owned());

    let overlay = (navigation == NavigationKind::Overlay)
        .then(|| overlay_from_raw(raw.overlay_relative_position.as_ref()));

    Action::Node {
        navigation,
        destination_id,
        destination_name,
        transition: raw.transition.as_ref().map(transition_from_raw),
        overlay,
    }
}

fn transition_from_raw(raw: &RawTransition) -> Transition {
    // Bezier points carry over only for the matching easing kind; any other
    // kind drops them even when the raw payload has stale values attached.
    let cubic_bezier = if raw.easing.kind == "CUSTOM_CUBIC_BEZIER" {
        raw.easing.easing_function_cubic_bezier
    } else {
        None
    };

    Transition {
        kind: raw.kind.clone(),
        duration: raw.duration,
        easing: Easing { kind: raw.easing.kind.clone(), cubic_bezier },
    }
}

fn overlay_from_raw(value: Option<&Value>) -> Overlay {
    match value {
        Some(Value::String(tag)) => Overlay {
            position: OverlayPosition::from_raw(tag),
            offset_x: None,
            offset_y: None,
        },
        Some(other) => Overlay {
            position: OverlayPosition::Center,
            offset_x: other.get("x").and_then(Value::as_f64),
            offset_y: other.get("y").and_then(Value::as_f64),
        },
        None => Overlay { position: OverlayPosition::Center, offset_x: None, offset_y: None },
    }
}
