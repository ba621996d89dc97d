#![cfg(test)]
//! Search and listing flows: case folding, ordering, and the handle-versus-
//! copy contract.

use shelfr_common::book::{Book, DEFAULT_GENRE};
use shelfr_core::Catalog;
use shelfr_core::stats::{CatalogStats, genre_breakdown};

fn seeded() -> Catalog {
    let mut catalog = Catalog::new();
    catalog
        .add_book(Book::with_genre("1", "Clean Code", "Robert C. Martin", 2008, "Programming"))
        .unwrap();
    catalog
        .add_book(Book::with_genre("2", "Clean Architecture", "Robert C. Martin", 2017, "Programming"))
        .unwrap();
    catalog
        .add_book(Book::with_genre("3", "1984", "George Orwell", 1949, "Fiction"))
        .unwrap();
    catalog
}

#[test]
fn author_search_ignores_ascii_case() {
    let catalog = seeded();

    let reference: Vec<&str> = catalog
        .find_by_author("Robert C. Martin")
        .iter()
        .map(|book| book.isbn())
        .collect();
    assert_eq!(reference, vec!["1", "2"]);

    for spelling in ["robert c. martin", "ROBERT C. MARTIN"] {
        let isbns: Vec<&str> = catalog
            .find_by_author(spelling)
            .iter()
            .map(|book| book.isbn())
            .collect();
        assert_eq!(isbns, reference);
    }
}

#[test]
fn genre_search_ignores_ascii_case_and_keeps_order() {
    let catalog = seeded();

    let isbns: Vec<&str> = catalog
        .find_by_genre("pRoGrAmMiNg")
        .iter()
        .map(|book| book.isbn())
        .collect();
    assert_eq!(isbns, vec!["1", "2"]);
}

#[test]
fn empty_search_input_is_not_an_error() {
    let catalog = seeded();
    assert!(catalog.find_by_author("").is_empty());
    assert!(catalog.find_by_genre("").is_empty());
    assert!(catalog.find_available_by_genre("").is_empty());
    assert!(catalog.find_by_isbn("").is_none());
}

#[test]
fn book_without_genre_lands_in_general() {
    let mut catalog = seeded();
    catalog
        .add_book(Book::new("4", "Unfiled Notes", "Anonymous", 2020))
        .unwrap();

    let general = catalog.find_by_genre(DEFAULT_GENRE);
    assert_eq!(general.len(), 1);
    assert_eq!(general[0].isbn(), "4");
}

#[test]
fn all_books_copy_is_detached_from_storage() {
    let catalog = seeded();

    let mut copy = catalog.all_books();
    copy[0].set_title("Defaced");
    copy[0].set_available(false);
    copy.remove(1);

    assert_eq!(catalog.total_count(), 3);
    let stored = catalog.find_by_isbn("1").unwrap();
    assert_eq!(stored.title(), "Clean Code");
    assert!(stored.is_available());
}

#[test]
fn genres_come_back_in_first_seen_order() {
    let mut catalog = seeded();
    catalog
        .add_book(Book::with_genre("4", "Sapiens", "Yuval Harari", 2011, "History"))
        .unwrap();

    assert_eq!(catalog.genres(), vec!["Programming", "Fiction", "History"]);
}

#[test]
fn stats_and_breakdown_agree_with_the_catalog() {
    let mut catalog = seeded();
    catalog.borrow_book("3").unwrap();

    let stats = CatalogStats::collect(&catalog);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.available, 2);
    assert_eq!(stats.borrowed, 1);

    let breakdown = genre_breakdown(&catalog);
    let fiction = breakdown
        .iter()
        .find(|entry| entry.genre == "Fiction")
        .unwrap();
    assert_eq!(fiction.total, 1);
    assert_eq!(fiction.available, 0);
}
