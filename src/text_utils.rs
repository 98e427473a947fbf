/// Shortens `value` to at most `max_len` characters plus `ellipsis`.
///
/// The cut moves back to the nearest non-letter within `lookback` characters of
/// `max_len` so words are not split; if that window is all letters the cut lands
/// exactly on `max_len`. Lengths count code points, never bytes.
pub fn shorten_text_if_long(
    value: &str,
    max_len: usize,
    lookback: usize,
    ellipsis: &str,
) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= max_len {
        return value.to_string();
    }

    let floor = max_len.saturating_sub(lookback);
    let mut index = max_len;
    while index > floor {
        if !chars[index].is_alphabetic() {
            break;
        }
        index -= 1;
    }

    let cut = if index == floor { max_len } else { index };

    let mut preview: String = chars[..cut].iter().collect();
    preview.push_str(ellipsis);
    preview
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{non_blank, shorten_text_if_long};
    use crate::constants::{ELLIPSIS, MAX_TEXT_LENGTH, TRUNCATION_LOOKBACK};

    fn shorten(value: &str) -> String {
        shorten_text_if_long(value, MAX_TEXT_LENGTH, TRUNCATION_LOOKBACK, ELLIPSIS)
    }

    #[test]
    fn short_text_should_be_returned_unchanged() {
        assert_eq!(shorten(""), "");
        assert_eq!(
            shorten("Greeting shown on the landing page"),
            "Greeting shown on the landing page"
        );

        let exactly_max = "a".repeat(MAX_TEXT_LENGTH);
        assert_eq!(shorten(&exactly_max), exactly_max);
    }

    #[test]
    fn all_letter_text_should_be_cut_exactly_at_max_length() {
        let letters = "x".repeat(60);
        let shortened = shorten(&letters);

        assert_eq!(shortened.chars().count(), MAX_TEXT_LENGTH + 1);
        assert!(shortened.ends_with(ELLIPSIS));
        assert_eq!(shortened, format!("{}{}", "x".repeat(MAX_TEXT_LENGTH), ELLIPSIS));
    }

    #[test]
    fn text_should_be_cut_at_last_word_boundary_inside_window() {
        // 44 letters, a space at index 44, then more letters past the limit.
        let value = format!("{} {}", "a".repeat(44), "b".repeat(30));
        let shortened = shorten(&value);

        assert_eq!(shortened, format!("{}{}", "a".repeat(44), ELLIPSIS));
    }

    #[test]
    fn boundary_exactly_at_max_length_should_be_used() {
        let value = format!("{} {}", "a".repeat(50), "b".repeat(10));
        let shortened = shorten(&value);

        assert_eq!(shortened, format!("{}{}", "a".repeat(50), ELLIPSIS));
    }

    #[test]
    fn boundary_outside_lookback_window_should_be_ignored() {
        // The only space sits at index 30, which equals max - lookback and is not scanned.
        let value = format!("{} {}", "a".repeat(30), "b".repeat(40));
        let shortened = shorten(&value);

        assert_eq!(shortened.chars().count(), MAX_TEXT_LENGTH + 1);
        assert!(shortened.starts_with(&format!("{} ", "a".repeat(30))));
    }

    #[test]
    fn multi_byte_text_should_be_cut_on_code_points() {
        let value = "ü".repeat(70);
        let shortened = shorten(&value);

        assert_eq!(shortened, format!("{}{}", "ü".repeat(MAX_TEXT_LENGTH), ELLIPSIS));
    }

    #[test]
    fn digits_should_count_as_word_boundaries() {
        let value = format!("{}7{}", "a".repeat(47), "c".repeat(20));
        let shortened = shorten(&value);

        assert_eq!(shortened, format!("{}{}", "a".repeat(47), ELLIPSIS));
    }

    #[test]
    fn non_blank_should_drop_empty_and_whitespace_values() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(Some(" int ")), Some("int"));
    }
}
