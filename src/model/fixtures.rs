// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::node::{
    DesignNode, DesignSnapshot, NodeKind, RawAction, RawEasing, RawTransition, RawTrigger,
    ReactionRecord,
};

pub(crate) fn node(id: &str, name: &str, kind: NodeKind) -> DesignNode {
    DesignNode {
        id: id.to_owned(),
        name: name.to_owned(),
        kind,
        width: 375.0,
        height: 812.0,
        children: Vec::new(),
        reactions: Vec::new(),
    }
}

pub(crate) fn click_navigate(destination_id: &str) -> ReactionRecord {
    ReactionRecord {
        trigger: Some(RawTrigger { kind: "ON_CLICK".to_owned(), timeout: None }),
        actions: vec![RawAction {
            kind: "NODE".to_owned(),
            destination_id: Some(destination_id.to_owned()),
            navigation: Some("NAVIGATE".to_owned()),
            url: None,
            transition: Some(RawTransition {
                kind: "SMART_ANIMATE".to_owned(),
                duration: 0.3,
                easing: RawEasing {
                    kind: "EASE_OUT".to_owned(),
                    easing_function_cubic_bezier: None,
                },
            }),
            overlay_relative_position: None,
        }],
    }
}

pub(crate) fn press_open_url(url: &str) -> ReactionRecord {
    ReactionRecord {
        trigger: Some(RawTrigger { kind: "ON_PRESS".to_owned(), timeout: None }),
        actions: vec![RawAction {
            kind: "URL".to_owned(),
            destination_id: None,
            navigation: None,
            url: Some(url.to_owned()),
            transition: None,
            overlay_relative_position: None,
        }],
    }
}

pub(crate) fn timeout_swap(delay_ms: f64, destination_id: &str) -> ReactionRecord {
    ReactionRecord {
        trigger: Some(RawTrigger { kind: "AFTER_TIMEOUT".to_owned(), timeout: Some(delay_ms) }),
        actions: vec![RawAction {
            kind: "NODE".to_owned(),
            destination_id: Some(destination_id.to_owned()),
            navigation: Some("SWAP".to_owned()),
            url: None,
            transition: None,
            overlay_relative_position: None,
        }],
    }
}

/// Two-screen prototype: Home navigates to Details on click and opens a URL
/// on press, Details swaps back after a timeout, and one container screen has
/// no interactions at all. Home also holds a reaction-free instance child so
/// traversal past non-container nodes is exercised.
pub(crate) fn demo_snapshot() -> DesignSnapshot {
    let mut home = node("1:1", "Home", NodeKind::Frame);
    home.reactions.push(click_navigate("1:2"));
    home.reactions.push(press_open_url("https://example.com"));

    let mut cta = node("1:10", "CTA", NodeKind::Other("INSTANCE".to_owned()));
    cta.width = 120.0;
    cta.height = 48.0;
    home.children.push(cta);

    let mut details = node("1:2", "Details", NodeKind::Frame);
    details.reactions.push(timeout_swap(500.0, "1:1"));

    let empty = node("1:3", "Empty", NodeKind::Frame);

    DesignSnapshot {
        document_name: "Demo".to_owned(),
        page_name: "Page 1".to_owned(),
        extracted_at: Some("2026-02-01T12:00:00Z".to_owned()),
        nodes: vec![home, details, empty],
        selection: Vec::new(),
    }
}
