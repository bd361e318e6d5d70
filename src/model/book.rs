use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type BookId = Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: Option<String>,
    pub author: String,
    pub genre: String,
    pub reviews: Vec<String>,
}

impl Book {
    pub fn new(title: Option<String>, author: String, genre: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            author,
            genre,
            reviews: Vec::new(),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn reviews(&self) -> &[String] {
        &self.reviews
    }
}
