//! The top-level stylesheet: the fixed palette of named paragraph styles,
//! the page setup, and the numbering schemes.

use crate::font::FontDefaults;
use crate::numbering::{NumberingReference, NumberingScheme, default_schemes};
use crate::page::PageSetup;
use crate::text::Alignment;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The closed set of named paragraph styles a block may carry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum StyleId {
    /// Body text: justified, first-line indent.
    Standard,
    /// Top-level heading, outline level 0.
    Chapter,
    /// Second-level heading, outline level 1.
    Paragraph,
    /// Centered, no indent (images, captions).
    Center,
    /// Verbatim program text, single-spaced.
    Code,
}

impl StyleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleId::Standard => "standard",
            StyleId::Chapter => "chapter",
            StyleId::Paragraph => "paragraph",
            StyleId::Center => "center",
            StyleId::Code => "code",
        }
    }
}

/// One named paragraph style. Unset fields inherit the document defaults.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphStyle {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size_pt: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_line_indent_mm: Option<f32>,
    /// Line spacing as a multiple of single spacing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_spacing: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing_before_pt: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing_after_pt: Option<f32>,
    /// Outline level for table-of-contents collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline_level: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stylesheet {
    pub fonts: FontDefaults,
    /// Document-wide paragraph defaults applied under every named style.
    pub default_alignment: Alignment,
    pub default_line_spacing: f32,
    pub page: PageSetup,
    pub styles: HashMap<StyleId, ParagraphStyle>,
    pub numbering: Vec<NumberingScheme>,
}

impl Stylesheet {
    pub fn style(&self, id: StyleId) -> Option<&ParagraphStyle> {
        self.styles.get(&id)
    }

    pub fn scheme(&self, reference: NumberingReference) -> Option<&NumberingScheme> {
        self.numbering.iter().find(|s| s.reference == reference)
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        let mut styles = HashMap::new();
        styles.insert(
            StyleId::Standard,
            ParagraphStyle {
                name: "Standard".to_string(),
                first_line_indent_mm: Some(12.5),
                ..Default::default()
            },
        );
        styles.insert(
            StyleId::Chapter,
            ParagraphStyle {
                name: "Chapter".to_string(),
                font_size_pt: Some(16.0),
                outline_level: Some(0),
                ..Default::default()
            },
        );
        styles.insert(
            StyleId::Paragraph,
            ParagraphStyle {
                name: "Section".to_string(),
                outline_level: Some(1),
                spacing_before_pt: Some(6.0),
                spacing_after_pt: Some(6.0),
                ..Default::default()
            },
        );
        styles.insert(
            StyleId::Center,
            ParagraphStyle {
                name: "Centered".to_string(),
                alignment: Some(Alignment::Center),
                first_line_indent_mm: Some(0.0),
                ..Default::default()
            },
        );
        styles.insert(
            StyleId::Code,
            ParagraphStyle {
                name: "Code".to_string(),
                first_line_indent_mm: Some(0.0),
                line_spacing: Some(1.0),
                ..Default::default()
            },
        );

        Self {
            fonts: FontDefaults::default(),
            default_alignment: Alignment::Justified,
            default_line_spacing: 1.5,
            page: PageSetup::default(),
            styles,
            numbering: default_schemes(),
        }
    }
}
