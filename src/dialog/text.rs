/// Treats `None` and the empty string the same way.
pub fn is_empty(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Truncates `value` to at most `max_chars` characters.
/// `None` means unbounded; `Some(0)` yields an empty string.
pub fn clamp_chars(value: &str, max_chars: Option<usize>) -> String {
    match max_chars {
        None => value.to_string(),
        Some(max) => match value.char_indices().nth(max) {
            Some((byte_index, _)) => value[..byte_index].to_string(),
            None => value.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(is_empty(None));
        assert!(is_empty(Some("")));
        assert!(!is_empty(Some(" ")));
        assert!(!is_empty(Some("OK")));
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(Some("Cancel")), Some("Cancel"));
    }

    #[test]
    fn test_clamp_chars() {
        assert_eq!(clamp_chars("abcdef", None), "abcdef");
        assert_eq!(clamp_chars("abcdef", Some(5)), "abcde");
        assert_eq!(clamp_chars("abc", Some(5)), "abc");
        assert_eq!(clamp_chars("abc", Some(0)), "");
        assert_eq!(clamp_chars("", Some(0)), "");
    }

    #[test]
    fn test_clamp_chars_counts_characters_not_bytes() {
        assert_eq!(clamp_chars("héllo wörld", Some(7)), "héllo w");
        assert_eq!(clamp_chars("名前を入力", Some(2)), "名前");
    }
}
