//! Section-level page properties consumed by the renderer.

use crate::dimension::Margins;
use serde::{Deserialize, Serialize};

/// Footer behaviour for the single body section.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FooterSetup {
    /// Centered decimal page number in the default footer.
    pub page_numbers: bool,
    /// Suppress the footer on the first (title) page.
    pub blank_first_page: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageSetup {
    pub title_page: bool,
    pub page_number_start: u16,
    pub margins: Margins,
    pub footer: FooterSetup,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            title_page: true,
            page_number_start: 1,
            margins: Margins {
                top: 20.0,
                right: 20.0,
                bottom: 20.0,
                left: 30.0,
            },
            footer: FooterSetup {
                page_numbers: true,
                blank_first_page: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_setup() {
        let page = PageSetup::default();
        assert!(page.title_page);
        assert_eq!(page.page_number_start, 1);
        assert_eq!(page.margins.left, 30.0);
        assert_eq!(page.margins.top, 20.0);
        assert!(page.footer.blank_first_page);
    }
}
