use crate::style::{Property, Style, px};

/// Literal copy shown in the dashboard header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub refresh_label: &'static str,
    pub logo_alt: &'static str,
}

impl HeaderContent {
    pub const DEFAULT: Self = Self {
        title: "Autosys Job Monitoring",
        subtitle: "Live simulated dashboard • SLA & Dependency analysis",
        refresh_label: "Refresh",
        logo_alt: "logo",
    };
}

impl Default for HeaderContent {
    fn default() -> Self {
        Self::DEFAULT
    }
}

pub const LOGO_SIZE_PX: u32 = 56;

/// Inline styles for each node of the header.
pub mod header_styles {
    use super::*;

    pub fn container() -> Style {
        Style::new()
            .with(Property::Display, "flex")
            .with(Property::AlignItems, "center")
            .with(Property::JustifyContent, "space-between")
            .with(Property::Padding, "12px 20px")
            .with(Property::BorderRadius, px(12))
            .with(Property::BoxShadow, "0 6px 18px rgba(0,0,0,0.08)")
            .with(Property::Background, "#fff")
    }

    pub fn brand() -> Style {
        Style::new()
            .with(Property::Display, "flex")
            .with(Property::AlignItems, "center")
    }

    pub fn logo() -> Style {
        Style::new()
            .with(Property::Width, px(LOGO_SIZE_PX))
            .with(Property::Height, px(LOGO_SIZE_PX))
            .with(Property::MarginRight, px(12))
    }

    pub fn heading() -> Style {
        Style::new().with(Property::Margin, px(0))
    }

    pub fn subtitle() -> Style {
        Style::new().with(Property::Color, "#666")
    }

    pub fn refresh_button() -> Style {
        Style::new()
            .with(Property::Padding, "8px 14px")
            .with(Property::BorderRadius, px(8))
            .with(Property::Border, "none")
            .with(Property::Cursor, "pointer")
    }
}
