use tracing::debug;

use crate::model::{Book, BookId, User};

#[derive(Debug, Clone, Copy)]
pub enum CatalogMetric {
    ReviewCount,
}

#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    // Appends unconditionally: entries with identical title/author/genre
    // coexist under distinct ids.
    pub fn add(&mut self, book: Book) -> BookId {
        let id = book.id;
        debug!(book_id = %id, "book added to catalog");
        self.books.push(book);
        id
    }

    pub fn remove(&mut self, id: BookId) -> bool {
        match self.books.iter().position(|book| book.id == id) {
            Some(idx) => {
                self.books.remove(idx);
                debug!(book_id = %id, "book removed from catalog");
                true
            }
            None => false,
        }
    }

    /// Case-insensitive substring match over title, author and genre, in
    /// catalog order. An empty keyword matches nothing.
    pub fn search(&self, keyword: &str) -> Vec<&Book> {
        if keyword.is_empty() {
            return Vec::new();
        }
        let keyword = keyword.to_lowercase();
        self.books
            .iter()
            .filter(|book| {
                book.title
                    .as_deref()
                    .map(|title| title.to_lowercase().contains(&keyword))
                    .unwrap_or(false)
                    || book.author.to_lowercase().contains(&keyword)
                    || book.genre.to_lowercase().contains(&keyword)
            })
            .collect()
    }

    /// Records ownership of a catalog book. Re-purchasing an owned book
    /// succeeds without growing the purchased list.
    pub fn purchase(&self, user: &mut User, id: BookId) -> bool {
        if self.get(id).is_none() {
            debug!(book_id = %id, username = %user.username, "purchase rejected, book not in catalog");
            return false;
        }
        user.record_purchase(id);
        true
    }

    /// Appends a review to the canonical record, gated on purchase.
    pub fn add_review(&mut self, user: &User, id: BookId, text: &str) -> bool {
        if !user.owns(id) {
            debug!(book_id = %id, username = %user.username, "review rejected, book not purchased");
            return false;
        }
        match self.books.iter_mut().find(|book| book.id == id) {
            Some(book) => {
                book.reviews.push(text.to_string());
                true
            }
            // owned id whose record was removed from the catalog
            None => false,
        }
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    pub fn books_count(&self) -> usize {
        self.books.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_book(title: &str, author: &str, genre: &str) -> Book {
        Book::new(
            Some(title.to_string()),
            author.to_string(),
            genre.to_string(),
        )
    }

    fn build_user() -> User {
        User::new(
            "reader".to_string(),
            "password".to_string(),
            "reader@example.com".to_string(),
        )
    }

    #[test]
    fn test_search_existing_keyword() {
        let mut catalog = Catalog::new();
        let id = catalog.add(build_book("Existing Book", "John Doe", "Fiction"));

        let result = catalog.search("Fiction");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, id);
    }

    #[test]
    fn test_search_non_existing_keyword() {
        let mut catalog = Catalog::new();
        catalog.add(build_book("Existing Book", "John Doe", "Fiction"));

        assert!(catalog.search("Non-existing").is_empty());
    }

    #[test]
    fn test_search_empty_keyword() {
        let mut catalog = Catalog::new();
        catalog.add(build_book("Existing Book", "John Doe", "Fiction"));

        assert!(catalog.search("").is_empty());
    }

    #[test]
    fn test_search_multiple_matches() {
        let mut catalog = Catalog::new();
        catalog.add(build_book("Book1", "Author1", "Genre1"));
        catalog.add(build_book("Book2", "Author2", "Genre2"));

        assert_eq!(catalog.search("Book").len(), 2);
    }

    #[test]
    fn test_search_partial_match_case_insensitive() {
        let mut catalog = Catalog::new();
        catalog.add(build_book("Complete Title", "Complete Author", "Complete Genre"));

        assert_eq!(catalog.search("com").len(), 1);
        assert_eq!(catalog.search("Com").len(), 1);
    }

    #[test]
    fn test_search_matches_author_and_genre() {
        let mut catalog = Catalog::new();
        catalog.add(build_book("Title", "Ursula K. Le Guin", "Science Fiction"));

        assert_eq!(catalog.search("le guin").len(), 1);
        assert_eq!(catalog.search("science").len(), 1);
    }

    #[test]
    fn test_search_missing_title() {
        let mut catalog = Catalog::new();
        catalog.add(Book::new(None, "John Doe".to_string(), "Fiction".to_string()));

        assert_eq!(catalog.search("Doe").len(), 1);
        assert!(catalog.search("Title").is_empty());
    }

    #[test]
    fn test_add_duplicate_descriptive_fields() {
        let mut catalog = Catalog::new();
        let first = catalog.add(build_book("Existing Book", "John Doe", "Fiction"));
        let second = catalog.add(build_book("Existing Book", "John Doe", "Fiction"));

        assert_ne!(first, second);
        assert_eq!(catalog.books_count(), 2);
    }

    #[test]
    fn test_remove_existing_book() {
        let mut catalog = Catalog::new();
        let id = catalog.add(build_book("Existing Book", "John Doe", "Fiction"));

        assert!(catalog.remove(id));
        assert_eq!(catalog.books_count(), 0);
    }

    #[test]
    fn test_remove_non_existing_book() {
        let mut catalog = Catalog::new();
        let stray = Book::new(None, "John Doe".to_string(), "Fiction".to_string());

        assert!(!catalog.remove(stray.id));
    }

    #[test]
    fn test_books_order() {
        let mut catalog = Catalog::new();
        let first = catalog.add(build_book("Book1", "Author1", "Genre1"));
        let second = catalog.add(build_book("Book2", "Author2", "Genre2"));

        let books = catalog.books();
        assert_eq!(books[0].id, first);
        assert_eq!(books[1].id, second);

        assert!(catalog.remove(first));
        assert_eq!(catalog.books().len(), 1);
        assert_eq!(catalog.books()[0].id, second);
    }

    #[test]
    fn test_purchase_existing_book() {
        let mut catalog = Catalog::new();
        let mut user = build_user();
        let id = catalog.add(build_book("Existing Book", "John Doe", "Fiction"));

        assert!(catalog.purchase(&mut user, id));
        assert_eq!(user.purchased(), &[id]);
    }

    #[test]
    fn test_purchase_non_existing_book() {
        let catalog = Catalog::new();
        let mut user = build_user();
        let stray = Book::new(None, "John Doe".to_string(), "Fiction".to_string());

        assert!(!catalog.purchase(&mut user, stray.id));
        assert!(user.purchased().is_empty());
    }

    #[test]
    fn test_purchase_is_idempotent() {
        let mut catalog = Catalog::new();
        let mut user = build_user();
        let id = catalog.add(build_book("Existing Book", "John Doe", "Fiction"));

        assert!(catalog.purchase(&mut user, id));
        assert!(catalog.purchase(&mut user, id));
        assert_eq!(user.purchased().len(), 1);
    }

    #[test]
    fn test_add_review_purchased_book() {
        let mut catalog = Catalog::new();
        let mut user = build_user();
        let id = catalog.add(build_book("Existing Book", "John Doe", "Fiction"));
        catalog.purchase(&mut user, id);

        assert!(catalog.add_review(&user, id, "Great book!"));
        let book = catalog.get(id).unwrap();
        assert_eq!(book.reviews(), &["Great book!".to_string()]);
    }

    #[test]
    fn test_add_review_not_purchased_book() {
        let mut catalog = Catalog::new();
        let user = build_user();
        let id = catalog.add(build_book("Existing Book", "John Doe", "Fiction"));

        assert!(!catalog.add_review(&user, id, "Great book!"));
        assert!(catalog.get(id).unwrap().reviews().is_empty());
    }

    #[test]
    fn test_add_review_empty_text() {
        let mut catalog = Catalog::new();
        let mut user = build_user();
        let id = catalog.add(build_book("Existing Book", "John Doe", "Fiction"));
        catalog.purchase(&mut user, id);

        assert!(catalog.add_review(&user, id, ""));
        assert_eq!(catalog.get(id).unwrap().reviews().len(), 1);
    }

    #[test]
    fn test_remove_keeps_purchased_entry() {
        let mut catalog = Catalog::new();
        let mut user = build_user();
        let id = catalog.add(build_book("Existing Book", "John Doe", "Fiction"));
        catalog.purchase(&mut user, id);

        assert!(catalog.remove(id));
        assert!(user.owns(id));
        // the canonical record is gone, there is nothing left to review
        assert!(!catalog.add_review(&user, id, "Too late"));
    }
}
