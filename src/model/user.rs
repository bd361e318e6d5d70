use serde::{Deserialize, Serialize};

use crate::model::BookId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password: String,
    pub email: String,
    pub purchased: Vec<BookId>,
}

impl User {
    pub fn new(username: String, password: String, email: String) -> Self {
        Self {
            username,
            password,
            email,
            purchased: Vec::new(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn purchased(&self) -> &[BookId] {
        &self.purchased
    }

    pub fn owns(&self, id: BookId) -> bool {
        self.purchased.contains(&id)
    }

    // Insertion order is kept, an already owned id is not re-added.
    pub fn record_purchase(&mut self, id: BookId) -> bool {
        if self.owns(id) {
            return false;
        }
        self.purchased.push(id);
        true
    }
}
