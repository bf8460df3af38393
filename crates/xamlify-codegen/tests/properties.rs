//! Property tests for the value mappings.

use proptest::prelude::*;
use xamlify_codegen::color::{hex, literal};
use xamlify_codegen::naming::actual_key;
use xamlify_codegen::Context;
use xamlify_core::{Color, Options, Project};

fn any_color() -> impl Strategy<Value = Color> {
    (any::<u8>(), any::<u8>(), any::<u8>(), 0.0f64..=1.0)
        .prop_map(|(r, g, b, a)| Color::rgba(r, g, b, a))
}

proptest! {
    #[test]
    fn hex_is_nine_uppercase_chars(color in any_color()) {
        let value = hex(&color);
        prop_assert_eq!(value.len(), 9);
        prop_assert!(value.starts_with('#'));
        prop_assert!(value[1..].chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    }

    #[test]
    fn actual_key_is_idempotent(name in "\\PC{0,24}", suffix in "[ _a-zA-Z]{0,5}") {
        let options = Options::new().with_duplicate_suffix(suffix);
        let project = Project::new();
        let ctx = Context::new(&options, &project);

        let once = actual_key(&ctx, &name);
        prop_assert!(!once.chars().any(char::is_whitespace));
        prop_assert_eq!(actual_key(&ctx, &once), once);
    }

    #[test]
    fn equal_colors_share_a_literal(color in any_color(), a in "[A-Za-z]{1,8}", b in "[A-Za-z]{1,8}") {
        let options = Options::new();
        let project = Project::new().with_color(color.clone().named("Registered"));
        let ctx = Context::new(&options, &project);

        let first = literal(&ctx, &color.clone().named(a));
        let second = literal(&ctx, &color.named(b));
        prop_assert_eq!(&first, "{StaticResource Registered}");
        prop_assert_eq!(first, second);
    }
}
