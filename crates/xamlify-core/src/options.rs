//! Extension options configured by the user in the host.

/// How text alignment is emitted for labels and styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TextAlignmentMode {
    /// Emit `HorizontalTextAlignment` from the text style.
    Style,
    /// Never emit alignment. Any mode other than `style` lands here.
    #[default]
    #[cfg_attr(feature = "serde", serde(other))]
    None,
}

/// Recognized extension options.
///
/// Every field has a default so a partial option bag is accepted.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Options {
    /// Marker appended by the design tool to renamed copies, e.g. `" Copy"`.
    pub duplicate_suffix: Option<String>,
    /// Sort catalog entries by name.
    pub sort_resources: bool,
    /// Leave `FontFamily` out of generated styles.
    pub ignore_font_family: bool,
    pub text_alignment_mode: TextAlignmentMode,
}

/// A single option value, as returned by [`Options::get`].
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue<'a> {
    Text(&'a str),
    Flag(bool),
}

impl Options {
    pub const DUPLICATE_SUFFIX: &'static str = "duplicateSuffix";
    pub const SORT_RESOURCES: &'static str = "sortResources";
    pub const IGNORE_FONT_FAMILY: &'static str = "ignoreFontFamily";
    pub const TEXT_ALIGNMENT_MODE: &'static str = "textAlignmentMode";

    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the host's JSON option bag. Unknown keys are ignored.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, crate::ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_duplicate_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.duplicate_suffix = Some(suffix.into());
        self
    }

    pub fn with_sort_resources(mut self, sort: bool) -> Self {
        self.sort_resources = sort;
        self
    }

    pub fn with_ignore_font_family(mut self, ignore: bool) -> Self {
        self.ignore_font_family = ignore;
        self
    }

    pub fn with_text_alignment_mode(mut self, mode: TextAlignmentMode) -> Self {
        self.text_alignment_mode = mode;
        self
    }

    /// The configured duplicate suffix; an empty string counts as unset.
    pub fn duplicate_suffix(&self) -> Option<&str> {
        self.duplicate_suffix.as_deref().filter(|s| !s.is_empty())
    }

    pub fn has_text_alignment(&self) -> bool {
        self.text_alignment_mode == TextAlignmentMode::Style
    }

    /// Look up an option by its host-side name.
    pub fn get(&self, name: &str) -> Option<OptionValue<'_>> {
        match name {
            Self::DUPLICATE_SUFFIX => self.duplicate_suffix().map(OptionValue::Text),
            Self::SORT_RESOURCES => Some(OptionValue::Flag(self.sort_resources)),
            Self::IGNORE_FONT_FAMILY => Some(OptionValue::Flag(self.ignore_font_family)),
            Self::TEXT_ALIGNMENT_MODE => Some(OptionValue::Text(match self.text_alignment_mode {
                TextAlignmentMode::Style => "style",
                TextAlignmentMode::None => "none",
            })),
            _ => None,
        }
    }
}
