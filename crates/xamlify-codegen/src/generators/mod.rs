//! Markup generators.

mod markup;
mod templates;
mod xaml;

pub use markup::XamlRenderer;
pub use templates::{escape_xml, format_number, indent, TemplateEngine};
pub use xaml::XamlGenerator;

use xamlify_core::{Color, Layer, TextStyle};

use crate::context::Context;
use crate::error::Result;
use crate::output::CodeSnippet;

/// Entry points the host calls on a styleguide extension.
pub trait CodeGenerator {
    /// Target framework name.
    fn framework_name(&self) -> &'static str;

    /// Render a free-form annotation as a comment.
    fn comment(&self, ctx: &Context<'_>, text: &str) -> String;

    /// Generate the body of the colors resource dictionary.
    fn styleguide_colors(&self, ctx: &Context<'_>, colors: &[Color]) -> Result<CodeSnippet>;

    /// Generate the body of the text styles resource dictionary.
    fn styleguide_text_styles(
        &self,
        ctx: &Context<'_>,
        text_styles: &[TextStyle],
    ) -> Result<CodeSnippet>;

    /// Generate the colors dictionary as a standalone file.
    fn export_styleguide_colors(&self, ctx: &Context<'_>, colors: &[Color])
        -> Result<CodeSnippet>;

    /// Generate the text styles dictionary as a standalone file.
    fn export_styleguide_text_styles(
        &self,
        ctx: &Context<'_>,
        text_styles: &[TextStyle],
    ) -> Result<CodeSnippet>;

    /// Generate the element for a selected layer.
    fn layer(&self, ctx: &Context<'_>, layer: &Layer) -> Result<CodeSnippet>;
}
