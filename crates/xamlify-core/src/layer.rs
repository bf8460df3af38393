//! Layer tree types supplied by the host.

use crate::types::{Color, TextStyle};

/// Bounds of a layer in design units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    #[cfg_attr(feature = "serde", serde(default))]
    pub x: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }
}

/// A fill applied to a layer or a border.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fill {
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: Option<Color>,
}

impl Fill {
    pub fn solid(color: Color) -> Self {
        Self { color: Some(color) }
    }
}

/// A border around a layer.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Border {
    #[cfg_attr(feature = "serde", serde(default))]
    pub thickness: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fill: Fill,
}

/// A drop or inner shadow. Only its presence affects generated markup.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Shadow {
    #[cfg_attr(feature = "serde", serde(default))]
    pub offset_x: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub offset_y: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub blur_radius: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: Option<Color>,
}

/// A run of text sharing one text style.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TextStyleRange {
    #[cfg_attr(feature = "serde", serde(default))]
    pub start: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub end: usize,
    pub text_style: TextStyle,
}

/// Content of a text layer.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TextContent {
    #[cfg_attr(feature = "serde", serde(default))]
    pub content: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub text_styles: Vec<TextStyleRange>,
}

impl TextContent {
    /// The style of the first text run, which decides the whole label.
    pub fn first_style(&self) -> Option<&TextStyle> {
        self.text_styles.first().map(|range| &range.text_style)
    }
}

/// Visual styling of a shape or group layer.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ShapeStyle {
    #[cfg_attr(feature = "serde", serde(default))]
    pub fills: Vec<Fill>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub borders: Vec<Border>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub shadows: Vec<Shadow>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub border_radius: Option<f64>,
}

/// Kind-specific part of a layer, tagged by the host's `type` field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum LayerKind {
    Text(TextContent),
    Shape(ShapeStyle),
    Group(ShapeStyle),
}

/// A node of the design tree selected by the user.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layer {
    pub name: String,
    pub rect: Rect,
    #[cfg_attr(feature = "serde", serde(default))]
    pub exportable: bool,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: LayerKind,
}

impl Layer {
    /// A text layer with a single style run covering the whole content.
    pub fn text(name: impl Into<String>, content: impl Into<String>, style: TextStyle) -> Self {
        let content = content.into();
        let end = content.chars().count();
        Self {
            name: name.into(),
            rect: Rect::default(),
            exportable: false,
            kind: LayerKind::Text(TextContent {
                content,
                text_styles: vec![TextStyleRange {
                    start: 0,
                    end,
                    text_style: style,
                }],
            }),
        }
    }

    /// A shape layer with no fills, borders or shadows.
    pub fn shape(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            rect: Rect::sized(width, height),
            exportable: false,
            kind: LayerKind::Shape(ShapeStyle::default()),
        }
    }

    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    pub fn exportable(mut self, exportable: bool) -> Self {
        self.exportable = exportable;
        self
    }

    /// Replace the shape styling. Has no effect on text layers.
    pub fn with_shape_style(mut self, style: ShapeStyle) -> Self {
        if let LayerKind::Shape(s) | LayerKind::Group(s) = &mut self.kind {
            *s = style;
        }
        self
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, LayerKind::Text(_))
    }
}
