// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Data model: the raw design tree as posted by the host, and the normalized
//! flow graph produced by extraction.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod flow;
pub mod node;

pub use flow::{
    Action, Easing, FlowConnection, FlowGraph, FlowInteraction, FlowScreen, NavigationKind,
    Overlay, OverlayPosition, Transition, Trigger, UNKNOWN_NAME,
};
pub use node::{
    CubicBezier, DesignNode, DesignSnapshot, NodeKind, RawAction, RawEasing, RawTransition,
    RawTrigger, ReactionRecord,
};
