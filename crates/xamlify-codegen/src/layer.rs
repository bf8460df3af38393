//! Layer dispatch onto `Label`, `Image` and `Frame` elements.

use serde::Serialize;
use xamlify_core::{Layer, LayerKind, ShapeStyle};

use crate::color::literal;
use crate::context::Context;
use crate::error::Result;
use crate::naming::to_image_name;
use crate::text_style::{label, LabelAttributes};

/// Attributes of an `<Image>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAttributes {
    pub width_request: f64,
    pub height_request: f64,
    pub source: String,
}

/// Attributes of a `<Frame>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameAttributes {
    pub width_request: f64,
    pub height_request: f64,
    pub has_shadow: bool,
    pub corner_radius: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline_color: Option<String>,
}

/// The element a selected layer maps to.
#[derive(Debug, Clone, PartialEq)]
pub enum XamlElement {
    Label(LabelAttributes),
    Image(ImageAttributes),
    Frame(FrameAttributes),
}

/// Map a layer to its element.
///
/// Text layers become labels, exportable layers become images, everything
/// else becomes a frame.
pub fn element(ctx: &Context<'_>, layer: &Layer) -> Result<XamlElement> {
    match &layer.kind {
        LayerKind::Text(text) => Ok(XamlElement::Label(label(ctx, &layer.name, text)?)),
        LayerKind::Shape(_) | LayerKind::Group(_) if layer.exportable => {
            Ok(XamlElement::Image(image(layer)))
        }
        LayerKind::Shape(style) | LayerKind::Group(style) => {
            Ok(XamlElement::Frame(frame(ctx, layer, style)))
        }
    }
}

pub fn image(layer: &Layer) -> ImageAttributes {
    ImageAttributes {
        width_request: layer.rect.width,
        height_request: layer.rect.height,
        source: to_image_name(&layer.name),
    }
}

/// Frame attributes. Background and outline come from the first fill and the
/// first border, and stay absent when that entry carries no color.
pub fn frame(ctx: &Context<'_>, layer: &Layer, style: &ShapeStyle) -> FrameAttributes {
    let background_color = style
        .fills
        .first()
        .and_then(|fill| fill.color.as_ref())
        .map(|color| literal(ctx, color));
    let outline_color = style
        .borders
        .first()
        .and_then(|border| border.fill.color.as_ref())
        .map(|color| literal(ctx, color));

    FrameAttributes {
        width_request: layer.rect.width,
        height_request: layer.rect.height,
        has_shadow: !style.shadows.is_empty(),
        corner_radius: style.border_radius.unwrap_or(0.0),
        background_color,
        outline_color,
    }
}
