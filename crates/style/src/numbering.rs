//! Named numbering schemes shared by list items and bibliography entries.
//!
//! A document carries exactly two schemes: `base-numbering` (decimal,
//! multi-level) and `bullet-points` (single bullet level). Blocks reference a
//! scheme by name together with an instance id; every instance restarts the
//! visible numbering.

use crate::text::Alignment;
use serde::{Deserialize, Serialize};

/// The closed set of numbering references a block may name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum NumberingReference {
    BaseNumbering,
    BulletPoints,
}

impl NumberingReference {
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberingReference::BaseNumbering => "base-numbering",
            NumberingReference::BulletPoints => "bullet-points",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum NumberFormat {
    Decimal,
    Bullet,
}

/// One level of a numbering scheme.
///
/// `text` uses the renderer's placeholder convention: `%1.` renders the
/// current level-one counter followed by a dot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NumberingLevel {
    pub level: u8,
    pub format: NumberFormat,
    pub text: String,
    pub alignment: Alignment,
    /// Left indent of the level, in millimetres.
    pub indent_mm: f32,
    /// Run font override for the marker glyph, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NumberingScheme {
    pub reference: NumberingReference,
    pub levels: Vec<NumberingLevel>,
}

fn decimal_level(level: u8) -> NumberingLevel {
    NumberingLevel {
        level,
        format: NumberFormat::Decimal,
        text: format!("%{}.", level + 1),
        alignment: Alignment::Start,
        indent_mm: f32::from(level) * 12.5,
        font: None,
    }
}

/// The two schemes every produced document defines.
pub fn default_schemes() -> Vec<NumberingScheme> {
    vec![
        NumberingScheme {
            reference: NumberingReference::BaseNumbering,
            levels: (0..3u8).map(decimal_level).collect(),
        },
        NumberingScheme {
            reference: NumberingReference::BulletPoints,
            levels: vec![NumberingLevel {
                level: 0,
                format: NumberFormat::Bullet,
                text: "\u{00B7}".to_string(),
                alignment: Alignment::Start,
                indent_mm: 0.0,
                font: Some("Symbol".to_string()),
            }],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_names() {
        assert_eq!(NumberingReference::BaseNumbering.as_str(), "base-numbering");
        assert_eq!(NumberingReference::BulletPoints.as_str(), "bullet-points");
    }

    #[test]
    fn test_default_schemes_cover_both_references() {
        let schemes = default_schemes();
        assert_eq!(schemes.len(), 2);
        assert!(
            schemes
                .iter()
                .any(|s| s.reference == NumberingReference::BaseNumbering)
        );
        assert!(
            schemes
                .iter()
                .any(|s| s.reference == NumberingReference::BulletPoints)
        );
    }

    #[test]
    fn test_decimal_levels_are_nested() {
        let schemes = default_schemes();
        let base = &schemes[0];
        assert_eq!(base.levels.len(), 3);
        assert_eq!(base.levels[0].text, "%1.");
        assert_eq!(base.levels[1].text, "%2.");
        assert_eq!(base.levels[1].indent_mm, 12.5);
        assert_eq!(base.levels[2].indent_mm, 25.0);
    }
}
