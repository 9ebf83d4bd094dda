// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pure renderers from a [`crate::model::FlowGraph`] to its consumable
//! encodings. Identical input always produces identical output.

pub mod mermaid;
pub mod report;

pub use mermaid::{flowchart_diagram, sanitize_node_id};
pub use report::tabular_report;

/// Output encoding selector. Unrecognized parameter values are treated as
/// `Structured` (defined default, not an error).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    #[default]
    Structured,
    Tabular,
    Diagram,
}

impl RenderFormat {
    pub fn from_param(param: &str) -> Self {
        match param {
            "tabular" => Self::Tabular,
            "diagram" => Self::Diagram,
            _ => Self::Structured,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::RenderFormat;

    #[rstest]
    #[case("structured", RenderFormat::Structured)]
    #[case("tabular", RenderFormat::Tabular)]
    #[case("diagram", RenderFormat::Diagram)]
    #[case("", RenderFormat::Structured)]
    #[case("mermaid", RenderFormat::Structured)]
    #[case("TABULAR", RenderFormat::Structured)]
    fn format_param_defaults_to_structured(
        #[case] param: &str,
        #[case] expected: RenderFormat,
    ) {
        assert_eq!(RenderFormat::from_param(param), expected);
    }
}
