use unicode_segmentation::UnicodeSegmentation;

use crate::util::unicode;

/// Word-wrap `text` into rows of at most `width` display cells.
///
/// Breaks at whitespace (which is dropped at the break), falling back to
/// grapheme wrapping for single tokens wider than `width`. Embedded
/// newlines start a new row. Always returns at least one row.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    let mut rows = Vec::new();
    for line in text.split('\n') {
        wrap_line_into(line, width, &mut rows);
    }
    rows
}

fn wrap_line_into(line: &str, width: usize, rows: &mut Vec<String>) {
    if unicode::display_width(line) <= width {
        rows.push(line.to_string());
        return;
    }

    let mut current = String::new();
    let mut col = 0usize;

    for word in line.split_whitespace() {
        let word_dw = unicode::display_width(word);
        let sep = usize::from(col > 0);

        if col + sep + word_dw <= width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            col += sep + word_dw;
            continue;
        }

        if col > 0 {
            rows.push(std::mem::take(&mut current));
            col = 0;
        }

        if word_dw <= width {
            current.push_str(word);
            col = word_dw;
        } else {
            // Grapheme-wrap a token that can never fit on one row
            for g in word.graphemes(true) {
                let gw = unicode::display_width(g);
                if col + gw > width && col > 0 {
                    rows.push(std::mem::take(&mut current));
                    col = 0;
                }
                current.push_str(g);
                col += gw;
            }
        }
    }

    rows.push(current);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_wrap_needed() {
        assert_eq!(wrap_text("hello world", 80), vec!["hello world"]);
    }

    #[test]
    fn wrap_at_space() {
        assert_eq!(wrap_text("hello world", 7), vec!["hello", "world"]);
        assert_eq!(
            wrap_text("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn char_wrap_long_word() {
        let rows = wrap_text("abcdefghij", 4);
        assert_eq!(rows, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn long_word_after_short_one() {
        assert_eq!(wrap_text("ab abcdefgh", 4), vec!["ab", "abcd", "efgh"]);
    }

    #[test]
    fn wide_graphemes_respect_cells() {
        let rows = wrap_text("日本語のテキスト", 6);
        for row in &rows {
            assert!(unicode::display_width(row) <= 6);
        }
        assert_eq!(rows.concat(), "日本語のテキスト");
    }

    #[test]
    fn newlines_split_rows() {
        assert_eq!(wrap_text("one\ntwo", 80), vec!["one", "two"]);
    }

    #[test]
    fn empty_and_zero_width() {
        assert_eq!(wrap_text("", 80), vec![""]);
        assert_eq!(wrap_text("hello", 0), vec!["hello"]);
    }
}
