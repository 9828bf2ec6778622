//! Library desk walkthrough over the segregated capability traits.

use anyhow::Result;

use pattern_catalog::library::{
    Book, BookLister, BookManager, EmailNotifier, LibraryManager, ListBookStorage,
};

fn main() -> Result<()> {
    let mut library = LibraryManager::new(ListBookStorage::new(), EmailNotifier);

    println!("{}", library.add_book(Book::new("1984", "George Orwell")));
    println!(
        "{}",
        library.add_book(Book::new("To Kill a Mockingbird", "Harper Lee"))
    );

    println!("\nAll books in the library:");
    for line in library.list_books() {
        println!("{}", line);
    }

    println!("\n{}", library.remove_book(&Book::new("1984", "George Orwell"))?);

    println!("\nAll books in the library:");
    for line in library.list_books() {
        println!("{}", line);
    }

    Ok(())
}
