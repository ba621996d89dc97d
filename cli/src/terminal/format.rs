use colored::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use shelfr_common::book::Book;
use shelfr_core::stats::GenreBreakdown;

use crate::terminal::colors;

/// Truncates to a display width, appending `...` when something was cut.
pub fn truncate(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }

    let budget: usize = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut width: usize = 0;

    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > budget {
            break;
        }
        width += ch_width;
        out.push(ch);
    }

    out.push_str("...");
    out
}

/// Pads with trailing spaces to a display width. Pad before coloring: ANSI
/// escapes would otherwise count toward the width.
pub fn pad(text: &str, width: usize) -> String {
    let actual: usize = UnicodeWidthStr::width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(actual)))
}

/// Loan-state cell, padded to `width`.
pub fn availability_cell(available: bool, width: usize) -> ColoredString {
    if available {
        pad("yes", width).color(colors::ON_SHELF)
    } else {
        pad("no", width).color(colors::ON_LOAN)
    }
}

/// Key/value rows describing one book, for the one-level tree printer.
pub fn book_to_details(book: &Book) -> Vec<(String, ColoredString)> {
    vec![
        ("ISBN".to_string(), book.isbn().color(colors::ACCENT)),
        ("Author".to_string(), book.author().normal()),
        ("Year".to_string(), book.publication_year().to_string().normal()),
        ("Genre".to_string(), book.genre().color(colors::PRIMARY)),
        ("Available".to_string(), availability_cell(book.is_available(), 0)),
    ]
}

/// Key/value rows for one genre's counts.
pub fn genre_to_details(entry: &GenreBreakdown) -> Vec<(String, ColoredString)> {
    vec![
        ("total".to_string(), entry.total.to_string().normal()),
        (
            "free".to_string(),
            entry.available.to_string().color(colors::ON_SHELF),
        ),
    ]
}
