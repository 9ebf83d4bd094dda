// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Proteus — prototype flow extraction and publishing (HTTP + WebSocket + MCP).
//!
//! A design host posts document snapshots to the HTTP layer; the extractor
//! walks them into flow graphs which are then served back as structured JSON,
//! Markdown reports and Mermaid flowcharts.

pub mod extract;
pub mod format;
pub mod mcp;
pub mod model;
pub mod server;
pub mod store;

#[cfg(test)]
mod tests {
    #[test]
    fn sanity() {
        assert_eq!(2 + 2, 4);
    }
}
