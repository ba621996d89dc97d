#![cfg(test)]
//! Loan-desk flows: borrow, return, remove, and the count invariants that
//! must survive any sequence of them.

use shelfr_common::book::Book;
use shelfr_common::error::CatalogError;
use shelfr_core::Catalog;

fn fiction_shelf() -> Catalog {
    let mut catalog = Catalog::new();
    catalog
        .add_book(Book::with_genre("1", "To Kill a Mockingbird", "Harper Lee", 1960, "Fiction"))
        .unwrap();
    catalog
        .add_book(Book::with_genre("2", "1984", "George Orwell", 1949, "Fiction"))
        .unwrap();
    catalog
}

#[test]
fn borrow_then_return_restores_availability() {
    let mut catalog = fiction_shelf();

    catalog.borrow_book("1").unwrap();
    assert!(!catalog.find_by_isbn("1").unwrap().is_available());

    catalog.return_book("1").unwrap();
    assert!(catalog.find_by_isbn("1").unwrap().is_available());
}

#[test]
fn double_return_is_idempotent() {
    let mut catalog = fiction_shelf();
    catalog.borrow_book("1").unwrap();

    assert_eq!(catalog.return_book("1"), Ok(()));
    assert_eq!(catalog.return_book("1"), Ok(()));
    assert!(catalog.find_by_isbn("1").unwrap().is_available());
}

#[test]
fn loaned_copy_leaves_the_fiction_shelf() {
    let mut catalog = fiction_shelf();

    let borrowed = catalog.borrow_book("1").unwrap();
    assert!(!borrowed.is_available());

    let on_shelf = catalog.find_available_by_genre("Fiction");
    assert_eq!(on_shelf.len(), 1);
    assert_eq!(on_shelf[0].isbn(), "2");

    assert_eq!(
        catalog.borrow_book("1"),
        Err(CatalogError::Unavailable("1".to_string()))
    );

    assert!(catalog.remove_book("1"));
    assert_eq!(catalog.total_count(), 1);
}

#[test]
fn borrowing_a_missing_book_leaves_state_unchanged() {
    let mut catalog = fiction_shelf();

    assert_eq!(
        catalog.borrow_book("nonexistent"),
        Err(CatalogError::NotFound("nonexistent".to_string()))
    );

    assert_eq!(catalog.total_count(), 2);
    assert_eq!(catalog.available_count(), 2);
    assert!(catalog.all_books().iter().all(Book::is_available));
}

#[test]
fn counts_stay_consistent_across_operations() {
    let mut catalog = fiction_shelf();
    catalog
        .add_book(Book::with_genre("3", "Sapiens", "Yuval Harari", 2011, "History"))
        .unwrap();

    catalog.borrow_book("1").unwrap();
    catalog.borrow_book("3").unwrap();
    catalog.return_book("1").unwrap();
    catalog.remove_book("2");

    let borrowed = catalog
        .all_books()
        .iter()
        .filter(|book| !book.is_available())
        .count();
    assert_eq!(catalog.available_count() + borrowed, catalog.total_count());
    assert_eq!(catalog.total_count(), 2);
    assert_eq!(catalog.available_count(), 1);
}

#[test]
fn duplicate_add_is_rejected_without_side_effects() {
    let mut catalog = fiction_shelf();
    catalog.borrow_book("1").unwrap();

    let late_copy = Book::with_genre("1", "To Kill a Mockingbird", "Harper Lee", 1960, "Fiction");
    assert_eq!(catalog.add_book(late_copy), Ok(false));

    assert_eq!(catalog.total_count(), 2);
    assert!(
        !catalog.find_by_isbn("1").unwrap().is_available(),
        "rejected add must not reset the loan state"
    );
}
