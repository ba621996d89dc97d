//! # Catalog Walkthrough
//!
//! Seeds ten fixed records and exercises every catalog operation in order:
//! inventory, lookups, filtered searches, the loan desk, returns, statistics
//! and the genre report. Rendering is presentation only; all rules live in
//! the core.

use anyhow::Result;
use colored::*;

use shelfr_common::book::Book;
use shelfr_common::config::Config;
use shelfr_common::{info, success, warn};
use shelfr_core::Catalog;
use shelfr_core::stats::{self, CatalogStats};

use crate::terminal::{colors, format, print, table};

const CLEAN_CODE: &str = "978-3-16-148410-0";
const MOCKINGBIRD: &str = "978-0-06-112008-4";

pub fn run(cfg: &Config) -> Result<()> {
    let mut catalog = Catalog::new();

    print::header("seeding the shelves", cfg.quiet);
    seed(&mut catalog)?;

    print::header("full inventory", cfg.quiet);
    list_all(&catalog, cfg);

    print::header("lookup by isbn", cfg.quiet);
    lookup_by_isbn(&catalog, cfg);

    print::header("search by author", cfg.quiet);
    search_by_author(&catalog, cfg);

    print::header("search by genre", cfg.quiet);
    search_by_genre(&catalog, cfg);

    print::header("on the shelf by genre", cfg.quiet);
    available_by_genre(&catalog, cfg);

    print::header("loan desk", cfg.quiet);
    loan_books(&mut catalog);

    print::header("after the loans", cfg.quiet);
    after_loans(&catalog, cfg);

    print::header("returns desk", cfg.quiet);
    return_books(&mut catalog);

    print::header("catalog statistics", cfg.quiet);
    statistics(&catalog);

    print::header("genres on record", cfg.quiet);
    genre_report(&catalog, cfg);

    summary(&catalog, cfg);
    Ok(())
}

/// The ten records the walkthrough works with.
fn seed_books() -> Vec<Book> {
    vec![
        Book::with_genre(CLEAN_CODE, "Clean Code", "Robert C. Martin", 2008, "Programming"),
        Book::with_genre("978-0-13-110362-7", "The C Programming Language", "Brian Kernighan", 1988, "Programming"),
        Book::with_genre("978-0-201-61622-4", "The Pragmatic Programmer", "David Hunt", 1999, "Programming"),
        Book::with_genre(MOCKINGBIRD, "To Kill a Mockingbird", "Harper Lee", 1960, "Fiction"),
        Book::with_genre("978-0-451-52494-2", "1984", "George Orwell", 1949, "Fiction"),
        Book::with_genre("978-0-7432-7356-5", "The Da Vinci Code", "Dan Brown", 2003, "Mystery"),
        Book::with_genre("978-0-06-085052-4", "The Alchemist", "Paulo Coelho", 1988, "Self-Help"),
        Book::with_genre("978-0-321-14653-0", "Design Patterns", "Gang of Four", 1994, "Programming"),
        Book::with_genre("978-1-491-91205-8", "Introduction to Algorithms", "Cormen", 2009, "Programming"),
        Book::with_genre("978-0-8044-2957-1", "Sapiens", "Yuval Harari", 2011, "History"),
    ]
}

fn seed(catalog: &mut Catalog) -> Result<()> {
    for book in seed_books() {
        let title: String = book.title().to_string();
        let tag: ColoredString = if catalog.add_book(book)? {
            "added".color(colors::ON_SHELF)
        } else {
            "duplicate".color(colors::ON_LOAN)
        };
        print::print_status(format!("{} {}", format::pad(&title, 44), tag));
    }
    success!("{} books on the shelves", catalog.total_count());
    print::blank();
    Ok(())
}

fn list_all(catalog: &Catalog, cfg: &Config) {
    let all = catalog.all_books();
    info!("{} books on record", all.len());
    table::print_books(all.iter(), cfg.quiet);
}

fn lookup_by_isbn(catalog: &Catalog, cfg: &Config) {
    match catalog.find_by_isbn(CLEAN_CODE) {
        Some(book) => {
            success!("found {}", CLEAN_CODE);
            if cfg.quiet < 2 {
                print::tree_head(0, book.title());
                print::as_tree_one_level(format::book_to_details(book));
            }
        }
        None => warn!("no book carries {}", CLEAN_CODE),
    }
    print::blank();
}

fn search_by_author(catalog: &Catalog, cfg: &Config) {
    let author = "Robert C. Martin";
    let found = catalog.find_by_author(author);
    info!("{} book(s) by '{}'", found.len(), author);
    table::print_books(found, cfg.quiet);
}

fn search_by_genre(catalog: &Catalog, cfg: &Config) {
    let genre = "Programming";
    let found = catalog.find_by_genre(genre);
    info!("{} book(s) filed under '{}'", found.len(), genre);
    table::print_books(found, cfg.quiet);
}

fn available_by_genre(catalog: &Catalog, cfg: &Config) {
    let genre = "Fiction";
    let found = catalog.find_available_by_genre(genre);
    info!("{} '{}' book(s) on the shelf", found.len(), genre);
    table::print_books(found, cfg.quiet);
}

/// Two loans plus a repeat attempt, so the unavailable path shows up too.
fn loan_books(catalog: &mut Catalog) {
    for isbn in [CLEAN_CODE, MOCKINGBIRD, CLEAN_CODE] {
        match catalog.borrow_book(isbn) {
            Ok(book) => success!("loaned out '{}'", book.title()),
            Err(err) => warn!("{}", err),
        }
    }
    print::blank();
}

fn after_loans(catalog: &Catalog, cfg: &Config) {
    let available = catalog.available_books();
    info!(
        "{} of {} books still on the shelf",
        available.len(),
        catalog.total_count()
    );
    table::print_books(available, cfg.quiet);
}

fn return_books(catalog: &mut Catalog) {
    for isbn in [CLEAN_CODE, MOCKINGBIRD] {
        match catalog.return_book(isbn) {
            Ok(()) => {
                if let Some(book) = catalog.find_by_isbn(isbn) {
                    success!("checked back in '{}'", book.title());
                }
            }
            Err(err) => warn!("{}", err),
        }
    }
    print::blank();
}

fn statistics(catalog: &Catalog) {
    let stats = CatalogStats::collect(catalog);
    print::aligned_line("Total", stats.total);
    print::aligned_line("On shelf", stats.available);
    print::aligned_line("On loan", stats.borrowed);
    print::aligned_line("Free", format!("{:.1}%", stats.availability_percent()));
    print::blank();
}

fn genre_report(catalog: &Catalog, cfg: &Config) {
    let breakdown = stats::genre_breakdown(catalog);
    info!("{} genre(s) on record", breakdown.len());
    if cfg.quiet > 1 {
        return;
    }
    for (idx, entry) in breakdown.iter().enumerate() {
        print::tree_head(idx, &entry.genre);
        print::as_tree_one_level(format::genre_to_details(entry));
    }
    print::blank();
}

fn summary(catalog: &Catalog, cfg: &Config) {
    let stats = CatalogStats::collect(catalog);
    let on_record: ColoredString = format!("{} books on record", stats.total).bold().green();
    let on_shelf: ColoredString = format!("{} on the shelf", stats.available).bold().yellow();
    let line: String = format!("Walkthrough complete: {}, {}", on_record, on_shelf);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&line);
            print::end_of_program();
        }
        _ => success!("{}", line),
    }
}
