//! XAML generation from design documents.
//!
//! This crate maps the colors, text styles and selected layers of a design
//! document onto Xamarin.Forms XAML: resource dictionaries of `<Color>` and
//! `<Style>` entries, and `Label`, `Image` or `Frame` elements for layers.
//!
//! Colors and text styles that structurally match a resource registered in
//! the project are emitted as `{StaticResource Key}` references instead of
//! inline values.
//!
//! # Example
//!
//! ```
//! use xamlify_codegen::{CodeGenerator, Context, XamlGenerator};
//! use xamlify_core::{Color, Layer, Options, Project};
//!
//! let options = Options::new();
//! let project = Project::new().with_color(Color::rgb(0, 102, 204).named("Primary"));
//! let ctx = Context::new(&options, &project);
//!
//! let generator = XamlGenerator::new()?;
//! let colors = generator.styleguide_colors(&ctx, &project.colors)?;
//! assert_eq!(colors.code, r#"<Color x:Key="Primary">#FF0066CC</Color>"#);
//!
//! let icon = generator.layer(&ctx, &Layer::shape("App_Icon", 24.0, 24.0).exportable(true))?;
//! assert_eq!(icon.code, r#"<Image WidthRequest="24" HeightRequest="24" Source="appIcon" />"#);
//! # Ok::<(), xamlify_codegen::CodegenError>(())
//! ```

pub mod catalog;
pub mod color;
pub mod context;
pub mod error;
pub mod generators;
pub mod layer;
pub mod naming;
pub mod output;
pub mod text_style;

pub use context::Context;
pub use error::{CodegenError, Result};
pub use generators::{CodeGenerator, TemplateEngine, XamlGenerator, XamlRenderer};
pub use layer::{FrameAttributes, ImageAttributes, XamlElement};
pub use output::{debug, CodeSnippet, Language, COLORS_FILENAME, LABELS_FILENAME};
pub use text_style::{FontAttributes, LabelAttributes, StyleAttributes, TextStyleEntry};
