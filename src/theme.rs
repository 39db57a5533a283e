//! Named color themes for the table.
//!
//! A theme is picked once per table and applied to the header background
//! and text, the borders and the highlighted row. Theme names parse
//! case-insensitively; anything else is rejected when the configuration is
//! read, so there is no silent fallback at render time.

use lipgloss_extras::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr, VariantArray};

/// Named palette.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
    VariantArray,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
    /// Neutral grays.
    #[default]
    Default,
    /// Blue.
    Primary,
    /// Purple.
    Secondary,
    /// Green.
    Success,
    /// Amber.
    Warning,
    /// Red.
    Danger,
}

/// The colors a theme resolves to.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Header background.
    pub header_bg: AdaptiveColor,
    /// Header text.
    pub header_fg: AdaptiveColor,
    /// Borders and separators.
    pub border: AdaptiveColor,
    /// Background of the highlighted row.
    pub hover: AdaptiveColor,
}

impl Theme {
    /// Resolves the palette.
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Default => ThemeColors {
                header_bg: AdaptiveColor { Light: "#F3F4F6", Dark: "#374151" },
                header_fg: AdaptiveColor { Light: "#374151", Dark: "#F9FAFB" },
                border: AdaptiveColor { Light: "#E5E7EB", Dark: "#4B5563" },
                hover: AdaptiveColor { Light: "#F9FAFB", Dark: "#1F2937" },
            },
            Theme::Primary => ThemeColors {
                header_bg: AdaptiveColor { Light: "#DBEAFE", Dark: "#1E3A8A" },
                header_fg: AdaptiveColor { Light: "#1E40AF", Dark: "#DBEAFE" },
                border: AdaptiveColor { Light: "#BFDBFE", Dark: "#1D4ED8" },
                hover: AdaptiveColor { Light: "#EFF6FF", Dark: "#172554" },
            },
            Theme::Secondary => ThemeColors {
                header_bg: AdaptiveColor { Light: "#EDE9FE", Dark: "#4C1D95" },
                header_fg: AdaptiveColor { Light: "#5B21B6", Dark: "#EDE9FE" },
                border: AdaptiveColor { Light: "#DDD6FE", Dark: "#6D28D9" },
                hover: AdaptiveColor { Light: "#F5F3FF", Dark: "#2E1065" },
            },
            Theme::Success => ThemeColors {
                header_bg: AdaptiveColor { Light: "#D1FAE5", Dark: "#064E3B" },
                header_fg: AdaptiveColor { Light: "#065F46", Dark: "#D1FAE5" },
                border: AdaptiveColor { Light: "#A7F3D0", Dark: "#047857" },
                hover: AdaptiveColor { Light: "#ECFDF5", Dark: "#022C22" },
            },
            Theme::Warning => ThemeColors {
                header_bg: AdaptiveColor { Light: "#FEF3C7", Dark: "#78350F" },
                header_fg: AdaptiveColor { Light: "#92400E", Dark: "#FEF3C7" },
                border: AdaptiveColor { Light: "#FDE68A", Dark: "#B45309" },
                hover: AdaptiveColor { Light: "#FFFBEB", Dark: "#451A03" },
            },
            Theme::Danger => ThemeColors {
                header_bg: AdaptiveColor { Light: "#FEE2E2", Dark: "#7F1D1D" },
                header_fg: AdaptiveColor { Light: "#991B1B", Dark: "#FEE2E2" },
                border: AdaptiveColor { Light: "#FECACA", Dark: "#B91C1C" },
                hover: AdaptiveColor { Light: "#FEF2F2", Dark: "#450A0A" },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_names() {
        assert_eq!(Theme::from_str("primary").ok(), Some(Theme::Primary));
        assert_eq!(Theme::from_str("DANGER").ok(), Some(Theme::Danger));
        assert!(Theme::from_str("neon").is_err());
        assert_eq!(Theme::Warning.to_string(), "warning");
    }

    #[test]
    fn test_every_theme_has_distinct_header() {
        let headers: Vec<String> = Theme::VARIANTS
            .iter()
            .map(|t| format!("{:?}", t.colors().header_bg))
            .collect();
        for (i, a) in headers.iter().enumerate() {
            for b in &headers[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_serde_names() {
        let t: Theme = serde_json::from_str("\"success\"").expect("theme");
        assert_eq!(t, Theme::Success);
        assert_eq!(serde_json::to_string(&Theme::Secondary).expect("json"), "\"secondary\"");
    }
}
