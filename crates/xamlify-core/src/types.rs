//! Design value types: colors and text styles.

/// A color from the design document.
///
/// Channels are 8-bit, alpha is a float in `0.0..=1.0`. Resource resolution
/// compares colors with [`Color::same_value`], which ignores the name.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[cfg_attr(feature = "serde", serde(default = "opaque"))]
    pub a: f64,
}

#[cfg(feature = "serde")]
fn opaque() -> f64 {
    1.0
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            name: String::new(),
            r,
            g,
            b,
            a,
        }
    }

    /// Set the display name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Alpha scaled to 8 bits, rounded to the nearest step.
    pub fn alpha8(&self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    /// Structural equality on the RGBA value, independent of the name.
    pub fn same_value(&self, other: &Color) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b && self.a == other.a
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Horizontal text alignment of a text style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    /// The alignment name with its first letter upper-cased.
    pub fn capitalized(&self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Center => "Center",
            Self::Right => "Right",
            Self::Justify => "Justify",
        }
    }
}

/// A text style from the design document.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TextStyle {
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    pub font_size: f64,
    #[cfg_attr(feature = "serde", serde(default = "regular_weight"))]
    pub font_weight: u16,
    #[cfg_attr(feature = "serde", serde(default))]
    pub font_family: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub text_align: TextAlign,
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: Option<Color>,
}

#[cfg(feature = "serde")]
fn regular_weight() -> u16 {
    400
}

impl TextStyle {
    pub fn new(font_size: f64, font_weight: u16) -> Self {
        Self {
            name: String::new(),
            font_size,
            font_weight,
            font_family: None,
            text_align: TextAlign::default(),
            color: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.text_align = align;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Structural equality on the rendering-relevant fields.
    ///
    /// The name is ignored and colors are compared by value.
    pub fn same_style(&self, other: &TextStyle) -> bool {
        let same_color = match (&self.color, &other.color) {
            (Some(a), Some(b)) => a.same_value(b),
            (None, None) => true,
            _ => false,
        };

        self.font_size == other.font_size
            && self.font_weight == other.font_weight
            && self.font_family == other.font_family
            && self.text_align == other.text_align
            && same_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_value_ignores_name() {
        let a = Color::rgb(255, 0, 0).named("Red");
        let b = Color::rgb(255, 0, 0).named("Primary");
        assert!(a.same_value(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_same_value_compares_alpha() {
        let a = Color::rgba(10, 20, 30, 1.0);
        let b = Color::rgba(10, 20, 30, 0.5);
        assert!(!a.same_value(&b));
    }

    #[test]
    fn test_alpha8() {
        assert_eq!(Color::rgba(0, 0, 0, 1.0).alpha8(), 255);
        assert_eq!(Color::rgba(0, 0, 0, 0.5).alpha8(), 128);
        assert_eq!(Color::rgba(0, 0, 0, 0.0).alpha8(), 0);
    }

    #[test]
    fn test_same_style() {
        let body = TextStyle::new(14.0, 400)
            .named("Body")
            .with_family("Roboto")
            .with_color(Color::BLACK.named("Ink"));
        let copy = body.clone().named("Body Copy").with_color(Color::BLACK);
        assert!(body.same_style(&copy));

        let bold = body.clone().named("Body");
        let bold = TextStyle { font_weight: 700, ..bold };
        assert!(!body.same_style(&bold));

        let uncolored = TextStyle { color: None, ..body.clone() };
        assert!(!body.same_style(&uncolored));
    }

    #[test]
    fn test_capitalized_alignment() {
        assert_eq!(TextAlign::Left.capitalized(), "Left");
        assert_eq!(TextAlign::Justify.capitalized(), "Justify");
    }
}
