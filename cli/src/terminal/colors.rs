//! The tool's terminal palette, in one place.

use colored::Color;

pub const PRIMARY: Color = Color::BrightCyan;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

/// Loan-state colors.
pub const ON_SHELF: Color = Color::Green;
pub const ON_LOAN: Color = Color::Red;
