//! Text measurement in terminal cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of `s` in cells.
pub fn width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Word-wrap `text` to `max_width` cells.
///
/// Breaks at whitespace; words wider than the line are split by character.
/// Explicit newlines are hard breaks. Empty input yields no lines.
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    for raw_line in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0usize;

        for word in raw_line.split_whitespace() {
            let word_width = width(word);
            let sep = usize::from(!current.is_empty());

            if current_width + sep + word_width <= max_width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += sep + word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= max_width {
                current.push_str(word);
                current_width = word_width;
            } else {
                for ch in word.chars() {
                    let cw = ch.width().unwrap_or(0);
                    if current_width + cw > max_width && !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(ch);
                    current_width += cw;
                }
            }
        }

        lines.push(current);
    }

    lines
}

/// Number of rows `text` occupies when wrapped to `max_width`.
pub fn height(text: &str, max_width: usize) -> usize {
    wrap(text, max_width).len()
}

/// Cut `text` to `max_width` cells, ending with `…` when shortened.
pub fn truncate(text: &str, max_width: usize) -> String {
    if width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let cw = ch.width().unwrap_or(0);
        if used + cw + 1 > max_width {
            break;
        }
        out.push(ch);
        used += cw;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_word_boundaries() {
        assert_eq!(
            wrap("educar para a paz implica diálogo", 12),
            vec!["educar para", "a paz", "implica", "diálogo"]
        );
    }

    #[test]
    fn accented_text_is_measured_in_cells() {
        assert_eq!(width("Fundamentação"), 13);
        assert_eq!(wrap("Fundamentação Teórica", 13), vec!["Fundamentação", "Teórica"]);
    }

    #[test]
    fn long_words_are_split() {
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn newlines_are_hard_breaks() {
        assert_eq!(wrap("um\ndois", 40), vec!["um", "dois"]);
        assert!(wrap("", 10).is_empty());
        assert_eq!(height("a b c", 1), 3);
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate("Relatório Retrospectiva", 10), "Relatório…");
        assert_eq!(truncate("curto", 10), "curto");
        assert_eq!(truncate("abc", 0), "");
    }
}
