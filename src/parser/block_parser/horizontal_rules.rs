//! Horizontal rule parsing utilities.

/// Whether the line is a horizontal rule: exactly `---`, nothing else.
pub(crate) fn is_horizontal_rule(line: &str) -> bool {
    line == "---"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule() {
        assert!(is_horizontal_rule("---"));
    }

    #[test]
    fn test_too_few_dashes() {
        assert!(!is_horizontal_rule("--"));
    }

    #[test]
    fn test_trailing_characters() {
        assert!(!is_horizontal_rule("----"));
        assert!(!is_horizontal_rule("--- "));
        assert!(!is_horizontal_rule("---a"));
    }
}
