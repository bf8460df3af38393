//! Color mapping: hex literals and resource references.

use serde::Serialize;
use xamlify_core::Color;

use crate::context::Context;
use crate::naming::actual_key;

/// A `<Color>` entry of the colors resource dictionary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorEntry {
    pub key: String,
    pub color: String,
}

/// Format a color as an upper-case `#AARRGGBB` literal.
pub fn hex(color: &Color) -> String {
    format!(
        "#{:02X}{:02X}{:02X}{:02X}",
        color.alpha8(),
        color.r,
        color.g,
        color.b
    )
}

/// Markup extension referencing a resource by key.
pub fn static_resource(key: &str) -> String {
    format!("{{StaticResource {}}}", key)
}

/// Resolve a color to a resource reference, or an inline hex literal when no
/// registered color has the same value.
pub fn literal(ctx: &Context<'_>, color: &Color) -> String {
    match ctx.project().find_color_equal(color) {
        Some(resource) => {
            let key = actual_key(ctx, &resource.name);
            log::debug!("color {} resolved to resource {}", hex(color), key);
            static_resource(&key)
        }
        None => {
            log::trace!("color {} has no resource, inlining", hex(color));
            hex(color)
        }
    }
}

/// Dictionary entry defining `color` itself. Never resolves to a reference.
pub fn resource_entry(ctx: &Context<'_>, color: &Color) -> ColorEntry {
    ColorEntry {
        key: actual_key(ctx, &color.name),
        color: hex(color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xamlify_core::{Options, Project};

    #[test]
    fn test_hex_pads_channels() {
        assert_eq!(hex(&Color::rgba(1, 2, 3, 1.0)), "#FF010203");
        assert_eq!(hex(&Color::rgba(0, 0, 0, 0.0)), "#00000000");
        assert_eq!(hex(&Color::rgba(171, 205, 239, 0.5)), "#80ABCDEF");
    }

    #[test]
    fn test_literal_inlines_unregistered_color() {
        let options = Options::new();
        let project = Project::new();
        let ctx = Context::new(&options, &project);
        assert_eq!(literal(&ctx, &Color::rgb(255, 0, 0)), "#FFFF0000");
    }

    #[test]
    fn test_literal_references_equal_resource() {
        let options = Options::new().with_duplicate_suffix(" Copy");
        let project = Project::new().with_color(Color::rgb(0, 102, 204).named("Brand Blue Copy"));
        let ctx = Context::new(&options, &project);

        let a = Color::rgb(0, 102, 204).named("Link");
        let b = Color::rgb(0, 102, 204).named("Button Background");
        assert_eq!(literal(&ctx, &a), "{StaticResource BrandBlue}");
        assert_eq!(literal(&ctx, &a), literal(&ctx, &b));
    }

    #[test]
    fn test_resource_entry_never_references() {
        let options = Options::new();
        let primary = Color::rgb(0, 102, 204).named("Primary");
        let project = Project::new().with_color(primary.clone());
        let ctx = Context::new(&options, &project);

        let entry = resource_entry(&ctx, &Color::rgb(0, 102, 204).named("Accent Color"));
        assert_eq!(
            entry,
            ColorEntry {
                key: "AccentColor".to_string(),
                color: "#FF0066CC".to_string(),
            }
        );
    }
}
