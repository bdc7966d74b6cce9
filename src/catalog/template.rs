// ABOUTME: Core template data structures parsed from YAML definition files
// ABOUTME: Defines the template, its declared variables, segments, and style hints

use serde::{Deserialize, Serialize};

/// A receipt template as loaded from a single YAML definition file.
///
/// The `key` is derived from the filename stem by the catalog loader and is
/// not part of the YAML document itself. Definitions are immutable once
/// loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateDefinition {
    #[serde(skip)]
    pub key: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub variables: Vec<VariableSpec>,
    pub segments: Vec<RawSegment>,
}

impl TemplateDefinition {
    pub(crate) fn with_key(mut self, key: &str) -> Self {
        self.key = key.to_string();
        self
    }

    /// Names of variables declared as required.
    pub fn required_variables(&self) -> impl Iterator<Item = &str> {
        self.variables
            .iter()
            .filter(|v| v.required)
            .map(|v| v.name.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableSpec {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub markdown: bool,
}

/// One raw text segment of a template. The text may contain `{{ variable }}`
/// placeholders and, when `markdown` is set, inline `**bold**` markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSegment {
    pub text: String,
    #[serde(default)]
    pub markdown: bool,
    #[serde(default)]
    pub styles: SegmentStyles,
}

/// Style hints for a segment. Attributes are segment-scoped; nothing is
/// inherited across segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SegmentStyles {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub align: Alignment,
    #[serde(default)]
    pub double_width: bool,
    #[serde(default)]
    pub double_height: bool,
}

impl SegmentStyles {
    /// Copy of these styles with bold forced on. Used when inline markup
    /// detects a bold span inside a segment.
    pub fn with_bold(self) -> Self {
        Self { bold: true, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}
