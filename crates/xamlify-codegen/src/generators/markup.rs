//! Fixed XAML templates and typed rendering functions.

use serde::Serialize;

use super::templates::TemplateEngine;
use crate::color::ColorEntry;
use crate::error::Result;
use crate::layer::{FrameAttributes, ImageAttributes, XamlElement};
use crate::text_style::{LabelAttributes, TextStyleEntry};

const COLORS: &str = "colors";
const TEXT_STYLES: &str = "text_styles";
const LABEL: &str = "label";
const IMAGE: &str = "image";
const FRAME: &str = "frame";
const RESOURCE_DICTIONARY: &str = "resource_dictionary";

const COLORS_TEMPLATE: &str = r#"{{#each colors}}<Color x:Key="{{key}}">{{color}}</Color>
{{/each}}"#;

const TEXT_STYLES_TEMPLATE: &str = r#"{{#each styles}}<Style x:Key="{{key}}" TargetType="Label">
    <Setter Property="FontSize" Value="{{number fontSize}}" />
    <Setter Property="FontAttributes" Value="{{fontAttributes}}" />
{{#if fontFamily}}    <Setter Property="FontFamily" Value="{{fontFamily}}" />
{{/if}}{{#if textColor}}    <Setter Property="TextColor" Value="{{textColor}}" />
{{/if}}{{#if horizontalTextAlignment}}    <Setter Property="HorizontalTextAlignment" Value="{{horizontalTextAlignment}}" />
{{/if}}</Style>
{{/each}}"#;

const LABEL_TEMPLATE: &str = concat!(
    "<Label",
    r#"{{#if style}} Style="{{static_resource style}}"{{/if}}"#,
    r#"{{#if fontAttributes}} FontSize="{{number fontSize}}" FontAttributes="{{fontAttributes}}""#,
    r#"{{#if fontFamily}} FontFamily="{{fontFamily}}"{{/if}}"#,
    r#"{{#if textColor}} TextColor="{{textColor}}"{{/if}}{{/if}}"#,
    r#"{{#if horizontalTextAlignment}} HorizontalTextAlignment="{{horizontalTextAlignment}}"{{/if}}"#,
    r#" Text="{{text}}" />"#,
);

const IMAGE_TEMPLATE: &str = r#"<Image WidthRequest="{{number widthRequest}}" HeightRequest="{{number heightRequest}}" Source="{{source}}" />"#;

const FRAME_TEMPLATE: &str = concat!(
    r#"<Frame WidthRequest="{{number widthRequest}}" HeightRequest="{{number heightRequest}}""#,
    r#" HasShadow="{{#if hasShadow}}True{{else}}False{{/if}}""#,
    r#" CornerRadius="{{number cornerRadius}}""#,
    r#"{{#if backgroundColor}} BackgroundColor="{{backgroundColor}}"{{/if}}"#,
    r#"{{#if outlineColor}} OutlineColor="{{outlineColor}}"{{/if}}"#,
    " />",
);

const RESOURCE_DICTIONARY_TEMPLATE: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<ResourceDictionary xmlns="http://xamarin.com/schemas/2014/forms"
                    xmlns:x="http://schemas.microsoft.com/winfx/2009/xaml">
{{indent resources 4}}
</ResourceDictionary>
"#;

#[derive(Serialize)]
struct ColorsData<'a> {
    colors: &'a [ColorEntry],
}

#[derive(Serialize)]
struct TextStylesData<'a> {
    styles: &'a [TextStyleEntry],
}

#[derive(Serialize)]
struct ResourceDictionaryData<'a> {
    resources: &'a str,
}

/// Renders attribute records into XAML through the fixed templates.
///
/// Rendering is a pure function of the record; no resolution happens here.
pub struct XamlRenderer<'a> {
    engine: TemplateEngine<'a>,
}

impl<'a> XamlRenderer<'a> {
    /// Create a renderer with every template registered.
    pub fn new() -> Result<Self> {
        let mut engine = TemplateEngine::new();
        engine.register_template(COLORS, COLORS_TEMPLATE)?;
        engine.register_template(TEXT_STYLES, TEXT_STYLES_TEMPLATE)?;
        engine.register_template(LABEL, LABEL_TEMPLATE)?;
        engine.register_template(IMAGE, IMAGE_TEMPLATE)?;
        engine.register_template(FRAME, FRAME_TEMPLATE)?;
        engine.register_template(RESOURCE_DICTIONARY, RESOURCE_DICTIONARY_TEMPLATE)?;
        Ok(Self { engine })
    }

    /// One `<Color>` per line.
    pub fn colors(&self, colors: &[ColorEntry]) -> Result<String> {
        let code = self.engine.render(COLORS, &ColorsData { colors })?;
        Ok(code.trim_end().to_string())
    }

    /// One `<Style TargetType="Label">` block per entry.
    pub fn text_styles(&self, styles: &[TextStyleEntry]) -> Result<String> {
        let code = self.engine.render(TEXT_STYLES, &TextStylesData { styles })?;
        Ok(code.trim_end().to_string())
    }

    pub fn label(&self, label: &LabelAttributes) -> Result<String> {
        self.engine.render(LABEL, label)
    }

    pub fn image(&self, image: &ImageAttributes) -> Result<String> {
        self.engine.render(IMAGE, image)
    }

    pub fn frame(&self, frame: &FrameAttributes) -> Result<String> {
        self.engine.render(FRAME, frame)
    }

    pub fn element(&self, element: &XamlElement) -> Result<String> {
        match element {
            XamlElement::Label(label) => self.label(label),
            XamlElement::Image(image) => self.image(image),
            XamlElement::Frame(frame) => self.frame(frame),
        }
    }

    /// Wrap resources in a `<ResourceDictionary>` document, indented one level.
    pub fn resource_dictionary(&self, resources: &str) -> Result<String> {
        self.engine
            .render(RESOURCE_DICTIONARY, &ResourceDictionaryData { resources })
    }
}
