//! Picture-number placeholder substitution.
//!
//! The `{img}` token stands for "the next picture number". In a caption (a
//! line immediately following an image embed) it expands to the full
//! `Figure N` label; anywhere else it expands to the bare number.

/// The inline placeholder for the running picture counter.
pub const PICTURE_TOKEN: &str = "{img}";

pub fn contains_token(line: &str) -> bool {
    line.contains(PICTURE_TOKEN)
}

/// Replaces the first token with the bare picture number.
pub fn substitute_number(line: &str, number: u32) -> String {
    line.replacen(PICTURE_TOKEN, &number.to_string(), 1)
}

/// Replaces the first token with the figure label, for caption lines.
pub fn rewrite_caption(line: &str, number: u32) -> String {
    line.replacen(PICTURE_TOKEN, &format!("Figure {}", number), 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_number() {
        assert_eq!(substitute_number("see picture {img} above", 2), "see picture 2 above");
    }

    #[test]
    fn test_rewrite_caption() {
        assert_eq!(
            rewrite_caption("{img} — architecture overview", 3),
            "Figure 3 — architecture overview"
        );
    }

    #[test]
    fn test_only_first_token_is_replaced() {
        assert_eq!(substitute_number("{img} and {img}", 1), "1 and {img}");
    }

    #[test]
    fn test_contains_token() {
        assert!(contains_token("caption {img}"));
        assert!(!contains_token("plain caption"));
    }
}
