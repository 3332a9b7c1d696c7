use serde::{Deserialize, Serialize};

/// Paragraph alignment as understood by word-processing renderers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum Alignment {
    #[default]
    Start,
    Center,
    Justified,
}
