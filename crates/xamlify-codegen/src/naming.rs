//! Resource key and image name normalization.

use crate::context::Context;

/// Derive the XAML key for a resource from its design-tool name.
///
/// Strips the first occurrence of the duplicate suffix, then every
/// whitespace character. Both steps repeat until the key is stable, so the
/// result never changes when normalized again.
pub fn actual_key(ctx: &Context<'_>, raw_name: &str) -> String {
    let suffix = ctx.options().duplicate_suffix();
    let mut key = strip_once(raw_name, suffix);

    loop {
        let next = strip_once(&key, suffix);
        if next == key {
            return key;
        }
        key = next;
    }
}

fn strip_once(name: &str, suffix: Option<&str>) -> String {
    let mut stripped = match suffix {
        Some(suffix) => name.replacen(suffix, "", 1),
        None => name.to_string(),
    };
    stripped.retain(|c| !c.is_whitespace());
    stripped
}

/// Convert a layer name to a camel-case image identifier.
///
/// `"Header_Icon"` becomes `"headerIcon"`; a single word is lower-cased.
pub fn to_image_name(layer_name: &str) -> String {
    let spaced = layer_name.replace('_', " ");
    let mut words = spaced.split(' ');

    let mut name = words.next().unwrap_or_default().to_lowercase();
    for word in words {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(&chars.as_str().to_lowercase());
        }
    }

    name.retain(|c| !c.is_whitespace());
    name
}
