//! Interface-segregation variant over a small library domain.
//!
//! Each capability gets its own narrow trait, and [`LibraryManager`] is
//! generic over the storage and notifier abstractions rather than any
//! concrete type, so either side swaps freely (tests swap in recording
//! doubles).

use std::fmt;

use thiserror::Error;

/// Failures the library side can produce.
#[derive(Error, Debug, PartialEq)]
pub enum LibraryError {
    /// Removal asked for a book the collection does not hold.
    #[error("book '{title}' by {author} is not in the collection")]
    BookNotFound { title: String, author: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

/// Adding and removing books.
pub trait BookManager {
    fn add_book(&mut self, book: Book) -> String;
    fn remove_book(&mut self, book: &Book) -> Result<String, LibraryError>;
}

/// Rendering the current collection.
pub trait BookLister {
    fn list_books(&self) -> Vec<String>;
}

/// Telling the user something happened.
pub trait UserNotifier {
    fn notify_user(&self, message: &str) -> String;
}

/// Persisting books, in order, duplicates included.
pub trait BookStorage {
    fn save(&mut self, book: Book);
    /// Remove the first book structurally equal to `book`.
    fn delete(&mut self, book: &Book) -> Result<(), LibraryError>;
    fn books(&self) -> &[Book];
}

/// In-memory [`BookStorage`] over an ordered list. No dedup, no keys;
/// deletion matches by structural equality.
#[derive(Debug, Default)]
pub struct ListBookStorage {
    books: Vec<Book>,
}

impl ListBookStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookStorage for ListBookStorage {
    fn save(&mut self, book: Book) {
        self.books.push(book);
    }

    fn delete(&mut self, book: &Book) -> Result<(), LibraryError> {
        match self.books.iter().position(|held| held == book) {
            Some(index) => {
                self.books.remove(index);
                Ok(())
            }
            None => Err(LibraryError::BookNotFound {
                title: book.title.clone(),
                author: book.author.clone(),
            }),
        }
    }

    fn books(&self) -> &[Book] {
        &self.books
    }
}

/// [`UserNotifier`] that narrates as an outgoing email.
#[derive(Debug, Default)]
pub struct EmailNotifier;

impl UserNotifier for EmailNotifier {
    fn notify_user(&self, message: &str) -> String {
        format!("Email notification sent: {}", message)
    }
}

/// Composes one storage and one notifier; every successful add or remove
/// fires a notification.
pub struct LibraryManager<S, N> {
    storage: S,
    notifier: N,
}

impl<S: BookStorage, N: UserNotifier> LibraryManager<S, N> {
    pub fn new(storage: S, notifier: N) -> Self {
        Self { storage, notifier }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: BookStorage, N: UserNotifier> BookManager for LibraryManager<S, N> {
    fn add_book(&mut self, book: Book) -> String {
        let message = format!(
            "Book '{}' by {} added to the library.",
            book.title, book.author
        );
        self.storage.save(book);
        self.notifier.notify_user(&message)
    }

    fn remove_book(&mut self, book: &Book) -> Result<String, LibraryError> {
        self.storage.delete(book)?;
        let message = format!(
            "Book '{}' by {} removed from the library.",
            book.title, book.author
        );
        Ok(self.notifier.notify_user(&message))
    }
}

impl<S: BookStorage, N: UserNotifier> BookLister for LibraryManager<S, N> {
    fn list_books(&self) -> Vec<String> {
        self.storage.books().iter().map(Book::to_string).collect()
    }
}
