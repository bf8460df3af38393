//! Resource lookup by structural equality.

use crate::types::{Color, TextStyle};

/// Project-level resource queries supplied by the host.
///
/// Both queries match by value, never by name. A miss is a normal result:
/// callers fall back to inline values.
pub trait ResourceLookup {
    /// Find a registered color resource with the same RGBA value.
    fn find_color_equal(&self, color: &Color) -> Option<&Color>;

    /// Find a registered text-style resource with the same rendering fields.
    fn find_text_style_equal(&self, text_style: &TextStyle) -> Option<&TextStyle>;
}

/// An in-memory project holding the registered resources.
///
/// The first structurally equal entry in insertion order wins.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Project {
    pub colors: Vec<Color>,
    pub text_styles: Vec<TextStyle>,
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a color resource.
    pub fn add_color(&mut self, color: Color) {
        self.colors.push(color);
    }

    /// Register a text-style resource.
    pub fn add_text_style(&mut self, text_style: TextStyle) {
        self.text_styles.push(text_style);
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.add_color(color);
        self
    }

    pub fn with_text_style(mut self, text_style: TextStyle) -> Self {
        self.add_text_style(text_style);
        self
    }
}

impl ResourceLookup for Project {
    fn find_color_equal(&self, color: &Color) -> Option<&Color> {
        self.colors.iter().find(|c| c.same_value(color))
    }

    fn find_text_style_equal(&self, text_style: &TextStyle) -> Option<&TextStyle> {
        self.text_styles.iter().find(|s| s.same_style(text_style))
    }
}
