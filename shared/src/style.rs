use std::borrow::Cow;
use std::fmt;

use strum::{Display, EnumString};

/// CSS properties used by the dashboard's inline styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Property {
    Display,
    AlignItems,
    JustifyContent,
    Padding,
    BorderRadius,
    BoxShadow,
    Background,
    Width,
    Height,
    Margin,
    MarginRight,
    Color,
    Border,
    Cursor,
    FontFamily,
}

/// An ordered set of inline style declarations for a single node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    declarations: Vec<(Property, Cow<'static, str>)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `property`, replacing any earlier value in place.
    pub fn with(mut self, property: Property, value: impl Into<Cow<'static, str>>) -> Self {
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some((_, existing)) => *existing = value,
            None => self.declarations.push((property, value)),
        }
        self
    }

    pub fn get(&self, property: Property) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_ref())
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", property, value)?;
        }
        Ok(())
    }
}

/// Pixel length. Zero stays unitless.
pub fn px(n: u32) -> Cow<'static, str> {
    if n == 0 {
        Cow::Borrowed("0")
    } else {
        Cow::Owned(format!("{}px", n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn property_names_are_kebab_case() {
        assert_eq!(Property::JustifyContent.to_string(), "justify-content");
        assert_eq!(Property::MarginRight.to_string(), "margin-right");
        assert_eq!(Property::Display.to_string(), "display");
        assert_eq!(Property::from_str("box-shadow").ok(), Some(Property::BoxShadow));
    }

    #[test]
    fn renders_declarations_in_insertion_order() {
        let style = Style::new()
            .with(Property::Display, "flex")
            .with(Property::AlignItems, "center")
            .with(Property::Padding, "12px 20px");
        assert_eq!(style.to_css(), "display: flex; align-items: center; padding: 12px 20px");
    }

    #[test]
    fn setting_a_property_twice_replaces_in_place() {
        let style = Style::new()
            .with(Property::Width, px(10))
            .with(Property::Height, px(10))
            .with(Property::Width, px(56));
        assert_eq!(style.get(Property::Width), Some("56px"));
        assert_eq!(style.to_css(), "width: 56px; height: 10px");
    }

    #[test]
    fn empty_style_renders_nothing() {
        let style = Style::new();
        assert_eq!(style, Style::default());
        assert_eq!(style.to_css(), "");
        assert_eq!(style.get(Property::Color), None);
    }

    #[test]
    fn zero_pixels_is_unitless() {
        assert_eq!(px(0), "0");
        assert_eq!(px(12), "12px");
    }
}
