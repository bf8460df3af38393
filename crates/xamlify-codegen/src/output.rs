//! Snippets returned to the host.

use serde::Serialize;

use crate::error::Result;

/// File name of the exported colors dictionary.
pub const COLORS_FILENAME: &str = "Colors.xaml";
/// File name of the exported text styles dictionary.
pub const LABELS_FILENAME: &str = "Labels.xaml";

/// Language tag of a snippet, used by the host for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Xml,
    Json,
}

/// Generated code, optionally bound to a file name for export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeSnippet {
    pub code: String,
    pub language: Language,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl CodeSnippet {
    /// An inline XAML snippet.
    pub fn xaml_code(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: Language::Xml,
            filename: None,
        }
    }

    /// A XAML file for export.
    pub fn xaml_file(code: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: Language::Xml,
            filename: Some(filename.into()),
        }
    }

    pub fn json(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: Language::Json,
            filename: None,
        }
    }
}

/// Dump any serializable value as a JSON snippet, for diagnostics.
pub fn debug<T: Serialize + ?Sized>(value: &T) -> Result<CodeSnippet> {
    Ok(CodeSnippet::json(serde_json::to_string(value)?))
}
