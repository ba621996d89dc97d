//! # Book Entity
//!
//! The single record type managed by the catalog.
//!
//! A book is identified by its ISBN alone: two books with the same ISBN are
//! the same book no matter what the remaining fields say. The ISBN is fixed at
//! construction; every other descriptive field can be edited later. The
//! `available` flag is the loan-state switch and is only ever flipped by the
//! catalog's borrow/return operations.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Genre assigned to books created without an explicit one.
pub const DEFAULT_GENRE: &str = "General";

/// A single catalog record.
#[derive(Debug, Clone)]
pub struct Book {
    isbn: String,
    title: String,
    author: String,
    publication_year: i32,
    genre: String,
    available: bool,
}

impl Book {
    /// Creates a book with the default genre (`"General"`).
    ///
    /// New books always start out available.
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        publication_year: i32,
    ) -> Self {
        Self::with_genre(isbn, title, author, publication_year, DEFAULT_GENRE)
    }

    /// Creates a book with an explicit genre.
    pub fn with_genre(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        publication_year: i32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            publication_year,
            genre: genre.into(),
            available: true,
        }
    }

    /// The identifying key. Immutable for the lifetime of the record.
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn publication_year(&self) -> i32 {
        self.publication_year
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Whether the book is currently on the shelf (not on loan).
    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    pub fn set_publication_year(&mut self, publication_year: i32) {
        self.publication_year = publication_year;
    }

    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.genre = genre.into();
    }

    /// Flips the loan state. Called by the catalog's borrow/return
    /// operations; stored records are never handed out mutably, so external
    /// callers can only flip copies they own.
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// ASCII case-insensitive match against the full author string.
    pub fn author_matches(&self, author: &str) -> bool {
        self.author.eq_ignore_ascii_case(author)
    }

    /// ASCII case-insensitive match against the genre.
    pub fn genre_matches(&self, genre: &str) -> bool {
        self.genre.eq_ignore_ascii_case(genre)
    }
}

/// Identity is the ISBN, nothing else.
impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.isbn == other.isbn
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.isbn.hash(state);
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} ({}) [{}]",
            self.title, self.author, self.publication_year, self.genre
        )
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    fn clean_code() -> Book {
        Book::with_genre(
            "978-3-16-148410-0",
            "Clean Code",
            "Robert C. Martin",
            2008,
            "Programming",
        )
    }

    #[test]
    fn new_book_defaults_to_general_genre() {
        let book = Book::new("978-1234567890", "Test Book", "Test Author", 2023);
        assert_eq!(book.genre(), DEFAULT_GENRE);
    }

    #[test]
    fn new_book_starts_available() {
        assert!(clean_code().is_available());
        assert!(Book::new("1", "T", "A", 2000).is_available());
    }

    #[test]
    fn genre_can_be_changed() {
        let mut book = clean_code();
        book.set_genre("Fiction");
        assert_eq!(book.genre(), "Fiction");
    }

    #[test]
    fn identity_is_isbn_only() {
        let original = clean_code();
        let mut reissue = Book::new("978-3-16-148410-0", "Another Title", "Another Author", 2020);
        assert_eq!(original, reissue);

        reissue.set_available(false);
        assert_eq!(original, reissue, "loan state must not affect identity");

        let other = Book::new("978-0-451-52494-2", "Clean Code", "Robert C. Martin", 2008);
        assert_ne!(original, other);
    }

    #[test]
    fn author_match_folds_ascii_case() {
        let book = clean_code();
        assert!(book.author_matches("Robert C. Martin"));
        assert!(book.author_matches("ROBERT C. MARTIN"));
        assert!(book.author_matches("robert c. martin"));
        assert!(!book.author_matches("Robert Martin"));
    }

    #[test]
    fn genre_match_folds_ascii_case() {
        let book = clean_code();
        assert!(book.genre_matches("programming"));
        assert!(book.genre_matches("PROGRAMMING"));
        assert!(!book.genre_matches("Fiction"));
    }

    #[test]
    fn display_is_human_readable() {
        let rendered = clean_code().to_string();
        assert_eq!(rendered, "Clean Code by Robert C. Martin (2008) [Programming]");
    }
}
