//! Line-oriented terminal output.
//!
//! Every formatted line goes through [`print`], which hands it to the tracing
//! subscriber on the raw `shelfr::print` target. Nothing in the CLI writes to
//! stdout directly.

use std::fmt::Display;

use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

/// Key column width for aligned key/value lines; fits the longest book field
/// label ("Available").
const KEY_WIDTH: usize = 9;

/// Hands a fully formatted line to the subscriber.
pub fn print(msg: &str) {
    info!(target: "shelfr::print", "{}", msg);
}

pub fn blank() {
    print("");
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ SHELFR v{} ⟧", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let side: usize = TOTAL_WIDTH.saturating_sub(text_width) / 2;
    let sep: ColoredString = "═".repeat(side).color(colors::SEPARATOR);

    print(&format!("{}{}{}", sep, text_content.bright_green().bold(), sep));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    print(&format!(
        "{}{}{}",
        "─".repeat(left).color(colors::SEPARATOR),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right).color(colors::SEPARATOR),
    ));
}

pub fn fat_separator() {
    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}

pub fn end_of_program() {
    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}", space, msg));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    print(&format!("{} {}", prefix, msg.as_ref()));
}

/// `Key......: value` line with a dotted gutter up to [`KEY_WIDTH`].
pub fn aligned_line<V: Display>(key: &str, value: V) {
    let dots: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.len()));
    print_status(format!(
        "{}{}{} {}",
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
    ));
}

/// `[idx] name` head line for a one-level detail tree.
pub fn tree_head(idx: usize, name: &str) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    print(&format!("{} {}", idx_str, name.color(colors::PRIMARY)));
}

/// Branch lines under a [`tree_head`], keys dotted to a shared width.
pub fn as_tree_one_level(pairs: Vec<(String, ColoredString)>) {
    let key_width: usize = pairs.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let count: usize = pairs.len();

    for (i, (key, value)) in pairs.into_iter().enumerate() {
        let branch: ColoredString = if i + 1 == count {
            "└─".color(colors::SEPARATOR)
        } else {
            "├─".color(colors::SEPARATOR)
        };
        let dots: String = ".".repeat(key_width - key.len() + 1);
        print(&format!(
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

pub fn no_results() {
    print(&format!("{}", "nothing on the shelf to show".red().bold()));
}
