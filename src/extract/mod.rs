// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Flow extraction: normalization plus the recursive tree walk.

pub mod normalize;
pub mod source;
pub mod walker;

pub use normalize::{normalize_reaction, NameResolver};
pub use source::{find_node, DocumentIndex};
pub use walker::{extract_page, extract_selection, walk_node, SubtreeFlow};
