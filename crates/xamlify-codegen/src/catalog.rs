//! Resource catalog preparation for the styleguide dictionaries.

use xamlify_core::{Color, Options, TextStyle};

use crate::color::{self, ColorEntry};
use crate::context::Context;
use crate::text_style::{self, TextStyleEntry};

/// A design entity listed in a resource catalog.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Color {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for TextStyle {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Apply the catalog policy: optional sort by name, then drop entries whose
/// name ends with the duplicate suffix.
///
/// Dropped entries stay in the project, so equality lookups may still
/// resolve to them.
pub fn prepare<'a, T: Named>(options: &Options, items: &'a [T]) -> Vec<&'a T> {
    let mut prepared: Vec<&T> = items.iter().collect();

    if options.sort_resources {
        prepared.sort_by(|a, b| a.name().cmp(b.name()));
    }

    if let Some(suffix) = options.duplicate_suffix() {
        let before = prepared.len();
        prepared.retain(|item| !item.name().ends_with(suffix));
        if prepared.len() != before {
            log::debug!(
                "dropped {} duplicate resources ending with {:?}",
                before - prepared.len(),
                suffix
            );
        }
    }

    prepared
}

/// Dictionary entries for the document colors.
pub fn color_entries(ctx: &Context<'_>, colors: &[Color]) -> Vec<ColorEntry> {
    prepare(ctx.options(), colors)
        .into_iter()
        .map(|c| color::resource_entry(ctx, c))
        .collect()
}

/// Dictionary entries for the document text styles.
pub fn text_style_entries(ctx: &Context<'_>, text_styles: &[TextStyle]) -> Vec<TextStyleEntry> {
    prepare(ctx.options(), text_styles)
        .into_iter()
        .map(|s| text_style::resource_entry(ctx, s))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use xamlify_core::Project;

    fn palette() -> Vec<Color> {
        vec![
            Color::rgb(255, 0, 0).named("Red"),
            Color::rgb(0, 0, 255).named("Blue"),
            Color::rgb(0, 0, 255).named("Blue Copy"),
            Color::rgb(0, 255, 0).named("Green"),
        ]
    }

    fn keys(entries: &[ColorEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.key.as_str()).collect()
    }

    #[test]
    fn test_keeps_document_order_by_default() {
        let options = Options::new();
        let project = Project::new();
        let ctx = Context::new(&options, &project);
        let entries = color_entries(&ctx, &palette());
        assert_eq!(keys(&entries), vec!["Red", "Blue", "BlueCopy", "Green"]);
    }

    #[test]
    fn test_sorts_by_name() {
        let options = Options::new().with_sort_resources(true);
        let project = Project::new();
        let ctx = Context::new(&options, &project);
        let entries = color_entries(&ctx, &palette());
        assert_eq!(keys(&entries), vec!["Blue", "BlueCopy", "Green", "Red"]);
    }

    #[test]
    fn test_drops_duplicates() {
        let options = Options::new()
            .with_sort_resources(true)
            .with_duplicate_suffix(" Copy");
        let project = Project::new();
        let ctx = Context::new(&options, &project);
        let entries = color_entries(&ctx, &palette());
        assert_eq!(keys(&entries), vec!["Blue", "Green", "Red"]);
    }

    #[test]
    fn test_text_style_entries_use_style_mapping() {
        let options = Options::new().with_duplicate_suffix(" Copy");
        let project = Project::new();
        let ctx = Context::new(&options, &project);
        let styles = vec![
            TextStyle::new(24.0, 700).named("Heading Large"),
            TextStyle::new(24.0, 700).named("Heading Large Copy"),
        ];

        let entries = text_style_entries(&ctx, &styles);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].key, "HeadingLarge");
        assert_eq!(entries[0].style, text_style::style(&ctx, &styles[0]));
    }
}
