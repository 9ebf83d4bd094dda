// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Model Context Protocol (MCP) server surface.
//!
//! Local tools answer from the flow store; tool names we do not recognize are
//! forwarded to an optional upstream design provider, and its tool list is
//! merged into ours so clients see one composite server.

mod server;
mod types;
mod upstream;

pub use server::ProteusMcp;
pub use types::{FullContextParams, GetFlowsParams, ScreenSummary};
pub use upstream::{DesignProvider, HttpDesignProvider, UpstreamError};
