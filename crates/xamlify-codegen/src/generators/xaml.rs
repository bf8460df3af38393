//! Xamarin.Forms XAML generator.

use xamlify_core::{Color, Layer, TextStyle};

use super::markup::XamlRenderer;
use super::CodeGenerator;
use crate::catalog::{color_entries, text_style_entries};
use crate::context::Context;
use crate::error::Result;
use crate::layer::element;
use crate::output::{CodeSnippet, COLORS_FILENAME, LABELS_FILENAME};

/// XAML generator for colors, text styles and layers.
pub struct XamlGenerator<'a> {
    renderer: XamlRenderer<'a>,
}

impl<'a> XamlGenerator<'a> {
    /// Create a new XAML generator.
    pub fn new() -> Result<Self> {
        Ok(Self {
            renderer: XamlRenderer::new()?,
        })
    }

    fn resource_dictionary_file(&self, resources: &str, filename: &str) -> Result<CodeSnippet> {
        let code = self.renderer.resource_dictionary(resources)?;
        Ok(CodeSnippet::xaml_file(code, filename))
    }
}

impl<'a> CodeGenerator for XamlGenerator<'a> {
    fn framework_name(&self) -> &'static str {
        "Xamarin.Forms"
    }

    fn comment(&self, _ctx: &Context<'_>, text: &str) -> String {
        format!("<!-- {} -->", text)
    }

    fn styleguide_colors(&self, ctx: &Context<'_>, colors: &[Color]) -> Result<CodeSnippet> {
        let code = self.renderer.colors(&color_entries(ctx, colors))?;
        Ok(CodeSnippet::xaml_code(code))
    }

    fn styleguide_text_styles(
        &self,
        ctx: &Context<'_>,
        text_styles: &[TextStyle],
    ) -> Result<CodeSnippet> {
        let code = self
            .renderer
            .text_styles(&text_style_entries(ctx, text_styles))?;
        Ok(CodeSnippet::xaml_code(code))
    }

    fn export_styleguide_colors(
        &self,
        ctx: &Context<'_>,
        colors: &[Color],
    ) -> Result<CodeSnippet> {
        let resources = self.styleguide_colors(ctx, colors)?;
        self.resource_dictionary_file(&resources.code, COLORS_FILENAME)
    }

    fn export_styleguide_text_styles(
        &self,
        ctx: &Context<'_>,
        text_styles: &[TextStyle],
    ) -> Result<CodeSnippet> {
        let resources = self.styleguide_text_styles(ctx, text_styles)?;
        self.resource_dictionary_file(&resources.code, LABELS_FILENAME)
    }

    fn layer(&self, ctx: &Context<'_>, layer: &Layer) -> Result<CodeSnippet> {
        let element = element(ctx, layer)?;
        let code = self.renderer.element(&element)?;
        Ok(CodeSnippet::xaml_code(code))
    }
}
