//! # Catalog Service
//!
//! The aggregate root owning every [`Book`] record.
//!
//! Records live in insertion order and are only ever touched through the
//! operations below. Two invariants hold at all times:
//!
//! * at most one book per ISBN,
//! * the loan state only changes through [`Catalog::borrow_book`] and
//!   [`Catalog::return_book`].
//!
//! **Handles versus copies:** searches return `&Book` — live, read-only
//! handles into catalog storage. [`Catalog::all_books`] alone returns owned
//! clones; mutating that vector never touches the catalog.

use tracing::debug;

use shelfr_common::book::Book;
use shelfr_common::error::CatalogError;

/// The in-memory book collection and its business rules.
#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Adds a book, enforcing ISBN uniqueness.
    ///
    /// Returns `Ok(true)` when the book was appended, `Ok(false)` when a book
    /// with the same ISBN already exists (the catalog is left untouched), and
    /// [`CatalogError::InvalidBook`] when the record carries an empty ISBN.
    pub fn add_book(&mut self, book: Book) -> Result<bool, CatalogError> {
        if book.isbn().is_empty() {
            return Err(CatalogError::InvalidBook("empty isbn".to_string()));
        }
        if self.isbn_exists(book.isbn()) {
            return Ok(false);
        }
        debug!(target: "shelfr::catalog", "added book {}", book.isbn());
        self.books.push(book);
        Ok(true)
    }

    /// Looks up a book by exact ISBN.
    ///
    /// An empty ISBN is treated as "nothing to look for", not as an error.
    pub fn find_by_isbn(&self, isbn: &str) -> Option<&Book> {
        if isbn.is_empty() {
            return None;
        }
        self.books.iter().find(|book| book.isbn() == isbn)
    }

    /// Whether a book with this exact ISBN is in the catalog.
    pub fn isbn_exists(&self, isbn: &str) -> bool {
        self.find_by_isbn(isbn).is_some()
    }

    /// Every book whose full author string matches, ignoring ASCII case.
    ///
    /// Empty input yields an empty result. Collection order is preserved.
    pub fn find_by_author(&self, author: &str) -> Vec<&Book> {
        if author.is_empty() {
            return Vec::new();
        }
        self.books
            .iter()
            .filter(|book| book.author_matches(author))
            .collect()
    }

    /// Every book of the given genre, ignoring ASCII case.
    ///
    /// Same contract as [`Catalog::find_by_author`].
    pub fn find_by_genre(&self, genre: &str) -> Vec<&Book> {
        if genre.is_empty() {
            return Vec::new();
        }
        self.books
            .iter()
            .filter(|book| book.genre_matches(genre))
            .collect()
    }

    /// Every book of the given genre that is currently on the shelf.
    pub fn find_available_by_genre(&self, genre: &str) -> Vec<&Book> {
        if genre.is_empty() {
            return Vec::new();
        }
        self.books
            .iter()
            .filter(|book| book.genre_matches(genre) && book.is_available())
            .collect()
    }

    /// Loans a book out: Available → Borrowed.
    ///
    /// Fails with [`CatalogError::NotFound`] when no book has this ISBN and
    /// with [`CatalogError::Unavailable`] when the book is already on loan.
    /// On success the stored record is marked unavailable and a handle to it
    /// is returned.
    pub fn borrow_book(&mut self, isbn: &str) -> Result<&Book, CatalogError> {
        let idx = self
            .position(isbn)
            .ok_or_else(|| CatalogError::NotFound(isbn.to_string()))?;
        if !self.books[idx].is_available() {
            return Err(CatalogError::Unavailable(isbn.to_string()));
        }
        self.books[idx].set_available(false);
        debug!(target: "shelfr::catalog", "loaned book {isbn}");
        Ok(&self.books[idx])
    }

    /// Takes a book back in: Borrowed → Available.
    ///
    /// Idempotent — returning a book that is already on the shelf succeeds
    /// and leaves it available. Fails with [`CatalogError::NotFound`] when no
    /// book has this ISBN.
    pub fn return_book(&mut self, isbn: &str) -> Result<(), CatalogError> {
        let idx = self
            .position(isbn)
            .ok_or_else(|| CatalogError::NotFound(isbn.to_string()))?;
        self.books[idx].set_available(true);
        debug!(target: "shelfr::catalog", "returned book {isbn}");
        Ok(())
    }

    /// Removes the book with this exact ISBN, reporting whether one existed.
    pub fn remove_book(&mut self, isbn: &str) -> bool {
        let before = self.books.len();
        self.books.retain(|book| book.isbn() != isbn);
        let removed = self.books.len() != before;
        if removed {
            debug!(target: "shelfr::catalog", "removed book {isbn}");
        }
        removed
    }

    /// Owned defensive copy of the full collection, in insertion order.
    pub fn all_books(&self) -> Vec<Book> {
        self.books.to_vec()
    }

    /// Every book currently on the shelf, in collection order.
    pub fn available_books(&self) -> Vec<&Book> {
        self.books.iter().filter(|book| book.is_available()).collect()
    }

    /// Number of books in the catalog.
    pub fn total_count(&self) -> usize {
        self.books.len()
    }

    /// Number of books currently on the shelf.
    pub fn available_count(&self) -> usize {
        self.books.iter().filter(|book| book.is_available()).count()
    }

    /// Distinct genre strings in first-seen order.
    ///
    /// Dedup is an exact string comparison: "Fiction" and "fiction" are two
    /// entries.
    pub fn genres(&self) -> Vec<String> {
        let mut genres: Vec<String> = Vec::new();
        for book in &self.books {
            if !genres.iter().any(|genre| genre == book.genre()) {
                genres.push(book.genre().to_string());
            }
        }
        genres
    }

    fn position(&self, isbn: &str) -> Option<usize> {
        self.books.iter().position(|book| book.isbn() == isbn)
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
