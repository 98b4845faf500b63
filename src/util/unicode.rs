use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells. Tabs count as 4 cells.
pub fn display_width(s: &str) -> usize {
    s.split('\t')
        .enumerate()
        .map(|(i, part)| {
            let w = UnicodeWidthStr::width(part);
            if i > 0 { w + 4 } else { w }
        })
        .sum()
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Space needed after `s` to fill `cells` columns (0 if it already overflows)
pub fn fill_width(s: &str, cells: usize) -> usize {
    cells.saturating_sub(display_width(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_counts_cells() {
        assert_eq!(display_width("folio"), 5);
        assert_eq!(display_width("日本"), 4);
        assert_eq!(display_width("₦850M"), 5);
        assert_eq!(display_width("a\tb"), 6);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn truncate_fits_untouched() {
        assert_eq!(truncate_to_width("Echo", 4), "Echo");
        assert_eq!(truncate_to_width("Echo", 10), "Echo");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate_to_width("Social Content Engine", 10), "Social Co\u{2026}");
    }

    #[test]
    fn truncate_never_splits_wide_graphemes() {
        // 4 cells budget minus ellipsis leaves 3: only one 2-cell char fits
        assert_eq!(truncate_to_width("日本語", 4), "日\u{2026}");
    }

    #[test]
    fn truncate_degenerate_widths() {
        assert_eq!(truncate_to_width("hello", 0), "");
        assert_eq!(truncate_to_width("hello", 1), "\u{2026}");
    }

    #[test]
    fn fill_width_saturates() {
        assert_eq!(fill_width("abc", 5), 2);
        assert_eq!(fill_width("abcdef", 5), 0);
    }
}
