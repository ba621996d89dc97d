//! Box-drawn book tables.

use colored::*;

use shelfr_common::book::Book;

use crate::terminal::{colors, format, print};

const TITLE_WIDTH: usize = 38;
const AUTHOR_WIDTH: usize = 20;
const STATUS_WIDTH: usize = 8;

/// Renders a table of books, one row per record, collection order preserved.
///
/// An empty input prints the no-results notice instead of an empty frame.
/// Quiet level 2 and up suppresses the table entirely.
pub fn print_books<'a, I>(books: I, q_level: u8)
where
    I: IntoIterator<Item = &'a Book>,
{
    let books: Vec<&Book> = books.into_iter().collect();

    if books.is_empty() {
        print::no_results();
        print::blank();
        return;
    }
    if q_level > 1 {
        return;
    }

    rule('┌', '┬', '┐');
    row(
        format::pad("Title", TITLE_WIDTH).color(colors::PRIMARY),
        format::pad("Author", AUTHOR_WIDTH).color(colors::PRIMARY),
        format::pad("On shelf", STATUS_WIDTH).color(colors::PRIMARY),
    );
    rule('├', '┼', '┤');

    for book in &books {
        row(
            format::pad(&format::truncate(book.title(), TITLE_WIDTH), TITLE_WIDTH).normal(),
            format::pad(&format::truncate(book.author(), AUTHOR_WIDTH), AUTHOR_WIDTH).normal(),
            format::availability_cell(book.is_available(), STATUS_WIDTH),
        );
    }

    rule('└', '┴', '┘');
    print::blank();
}

fn rule(left: char, mid: char, right: char) {
    let line: String = format!(
        "{}{}{}{}{}{}{}",
        left,
        "─".repeat(TITLE_WIDTH + 2),
        mid,
        "─".repeat(AUTHOR_WIDTH + 2),
        mid,
        "─".repeat(STATUS_WIDTH + 2),
        right,
    );
    print::print(&format!("{}", line.color(colors::SEPARATOR)));
}

fn row(title: ColoredString, author: ColoredString, status: ColoredString) {
    let bar: ColoredString = "│".color(colors::SEPARATOR);
    print::print(&format!(
        "{bar} {title} {bar} {author} {bar} {status} {bar}"
    ));
}
