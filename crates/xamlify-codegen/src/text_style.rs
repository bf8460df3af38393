//! Text style mapping for `<Style>` entries and `<Label>` elements.

use serde::Serialize;
use xamlify_core::{ModelError, TextContent, TextStyle};

use crate::color::literal;
use crate::context::Context;
use crate::error::Result;
use crate::naming::actual_key;

/// Value of the XAML `FontAttributes` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FontAttributes {
    Bold,
    None,
}

/// Map a numeric font weight to `FontAttributes`. Weights from 700 up are bold.
pub fn font_attributes(weight: u16) -> FontAttributes {
    if weight >= 700 {
        FontAttributes::Bold
    } else {
        FontAttributes::None
    }
}

/// Inline style attributes of a text style.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleAttributes {
    pub font_size: f64,
    pub font_attributes: FontAttributes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_text_alignment: Option<&'static str>,
}

/// A `<Style>` entry of the text styles resource dictionary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyleEntry {
    pub key: String,
    #[serde(flatten)]
    pub style: StyleAttributes,
}

/// Attributes of a `<Label>`.
///
/// Either `style` references a shared resource or `inline` carries the full
/// attribute set. Alignment sits outside both so it can override a shared
/// style.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub inline: Option<StyleAttributes>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_text_alignment: Option<&'static str>,
}

/// Round half up to `precision` decimal places on the decimal representation,
/// so `1.005` rounds to `1.01`.
pub(crate) fn round_to(value: f64, precision: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(precision);
    let shifted = format!("{}e{}", value, precision)
        .parse::<f64>()
        .unwrap_or(value * scale);
    let rounded = (shifted + 0.5).floor();
    format!("{}e-{}", rounded, precision)
        .parse::<f64>()
        .unwrap_or(rounded / scale)
}

fn alignment(ctx: &Context<'_>, text_style: &TextStyle) -> Option<&'static str> {
    ctx.options()
        .has_text_alignment()
        .then(|| text_style.text_align.capitalized())
}

/// Map a text style to its inline attributes.
pub fn style(ctx: &Context<'_>, text_style: &TextStyle) -> StyleAttributes {
    let font_family = if ctx.options().ignore_font_family {
        None
    } else {
        text_style.font_family.clone()
    };

    StyleAttributes {
        font_size: round_to(text_style.font_size, 2),
        font_attributes: font_attributes(text_style.font_weight),
        font_family,
        text_color: text_style.color.as_ref().map(|color| literal(ctx, color)),
        horizontal_text_alignment: alignment(ctx, text_style),
    }
}

/// Dictionary entry defining `text_style` itself under its normalized key.
pub fn resource_entry(ctx: &Context<'_>, text_style: &TextStyle) -> TextStyleEntry {
    TextStyleEntry {
        key: actual_key(ctx, &text_style.name),
        style: style(ctx, text_style),
    }
}

/// Map a text layer to label attributes.
///
/// The first style run decides the label. A registered text style with the
/// same value is referenced by key instead of inlining its attributes.
pub fn label(ctx: &Context<'_>, layer_name: &str, text: &TextContent) -> Result<LabelAttributes> {
    let text_style = text.first_style().ok_or_else(|| ModelError::MissingTextStyle {
        layer: layer_name.to_string(),
    })?;

    let (style_key, inline) = match ctx.project().find_text_style_equal(text_style) {
        Some(resource) => {
            let key = actual_key(ctx, &resource.name);
            log::debug!("label '{}' uses text style resource {}", layer_name, key);
            (Some(key), None)
        }
        None => {
            let attributes = StyleAttributes {
                horizontal_text_alignment: None,
                ..style(ctx, text_style)
            };
            (None, Some(attributes))
        }
    };

    Ok(LabelAttributes {
        style: style_key,
        inline,
        text: text.content.clone(),
        horizontal_text_alignment: alignment(ctx, text_style),
    })
}
