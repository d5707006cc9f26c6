//! Shared utility functions.

/// Truncate a string to at most `max_bytes` bytes without splitting a UTF-8
/// character.
///
/// Used to bound error-payload excerpts. Returns a sub-slice of the input;
/// strings already within the limit come back unchanged.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut cut = max_bytes;
    while cut > 0 && !s.is_char_boundary(cut) {
        cut -= 1;
    }
    &s[..cut]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_is_unchanged() {
        assert_eq!(truncate_str("rate limited", 200), "rate limited");
    }

    #[test]
    fn long_input_is_cut_at_limit() {
        let long = "x".repeat(300);
        assert_eq!(truncate_str(&long, 200).len(), 200);
    }

    #[test]
    fn cut_backs_up_to_char_boundary() {
        // 'é' is 2 bytes; cutting at byte 1 would split it
        assert_eq!(truncate_str("éé", 1), "");
        assert_eq!(truncate_str("éé", 3), "é");
    }

    #[test]
    fn empty_input() {
        assert_eq!(truncate_str("", 5), "");
    }
}
