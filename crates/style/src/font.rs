use serde::{Deserialize, Serialize};

/// The document-wide default run properties.
///
/// Named styles inherit these unless they override the size themselves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FontDefaults {
    pub family: String,
    pub size_pt: f32,
}

impl Default for FontDefaults {
    fn default() -> Self {
        Self {
            family: "Times New Roman".to_string(),
            size_pt: 14.0,
        }
    }
}
