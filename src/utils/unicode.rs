use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Byte offset of the char that ends at `byte_index`.
pub fn prev_char_boundary(s: &str, byte_index: usize) -> usize {
    let end = byte_index.min(s.len());
    s[..end].char_indices().next_back().map_or(0, |(i, _)| i)
}

/// Byte offset just past the char that starts at `byte_index`.
pub fn next_char_boundary(s: &str, byte_index: usize) -> usize {
    if byte_index >= s.len() {
        return s.len();
    }
    s[byte_index..]
        .chars()
        .next()
        .map_or(s.len(), |c| byte_index + c.len_utf8())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Start of the word before `byte_index`, skipping any separators first.
pub fn prev_word_boundary(s: &str, byte_index: usize) -> usize {
    let head = &s[..byte_index.min(s.len())];
    let trimmed = head.trim_end_matches(|c: char| !is_word_char(c));
    trimmed
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_word_char(*c))
        .last()
        .map_or(0, |(i, _)| i)
}

/// Start of the next word after `byte_index`.
pub fn next_word_boundary(s: &str, byte_index: usize) -> usize {
    if byte_index >= s.len() {
        return s.len();
    }
    let tail = &s[byte_index..];
    let after_word = tail.trim_start_matches(is_word_char);
    let next_word = after_word.trim_start_matches(|c: char| !is_word_char(c));
    s.len() - next_word.len()
}

pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cuts `s` to at most `max_width` terminal columns, marking the cut with an ellipsis.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prev_char_boundary() {
        let s = "aöb";
        assert_eq!(prev_char_boundary(s, 0), 0);
        assert_eq!(prev_char_boundary(s, 1), 0);
        assert_eq!(prev_char_boundary(s, 3), 1);
        assert_eq!(prev_char_boundary(s, 4), 3);
    }

    #[test]
    fn test_next_char_boundary() {
        let s = "aöb";
        assert_eq!(next_char_boundary(s, 0), 1);
        assert_eq!(next_char_boundary(s, 1), 3);
        assert_eq!(next_char_boundary(s, 3), 4);
        assert_eq!(next_char_boundary(s, 4), 4);
    }

    #[test]
    fn test_prev_word_boundary() {
        let s = "buy oat milk";
        assert_eq!(prev_word_boundary(s, 12), 8);
        assert_eq!(prev_word_boundary(s, 8), 4);
        assert_eq!(prev_word_boundary(s, 4), 0);
        assert_eq!(prev_word_boundary(s, 2), 0);
        assert_eq!(prev_word_boundary(s, 0), 0);
    }

    #[test]
    fn test_next_word_boundary() {
        let s = "buy oat milk";
        assert_eq!(next_word_boundary(s, 0), 4);
        assert_eq!(next_word_boundary(s, 4), 8);
        assert_eq!(next_word_boundary(s, 8), 12);
        assert_eq!(next_word_boundary(s, 12), 12);
        assert_eq!(next_word_boundary(s, 1), 4);
    }

    #[test]
    fn test_word_boundary_with_punctuation() {
        let s = "call mom, then dad!";
        assert_eq!(next_word_boundary(s, 5), 10);
        assert_eq!(prev_word_boundary(s, 19), 15);
    }

    #[test]
    fn test_display_width_wide_chars() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("日本"), 4);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("a longer label", 6), "a lon…");
        assert_eq!(truncate_to_width("日本語", 4), "日…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
