use std::collections::HashMap;

use tracing::debug;

use crate::model::User;

#[derive(Debug, Clone, Copy)]
pub enum DirectoryMetric {
    PurchasedCount,
}

#[derive(Debug, Default)]
pub struct AccountDirectory {
    accounts: HashMap<String, User>,
}

impl AccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    // Usernames are case-sensitive keys; the empty string is a valid one.
    pub fn register(&mut self, user: User) -> bool {
        if self.accounts.contains_key(&user.username) {
            debug!(username = %user.username, "registration rejected, username taken");
            return false;
        }
        self.accounts.insert(user.username.clone(), user);
        true
    }

    /// Unknown username and wrong password collapse to the same `None`.
    pub fn login(&self, username: &str, password: &str) -> Option<&User> {
        self.accounts
            .get(username)
            .filter(|user| user.password == password)
    }

    /// Guarded update: the collision check runs before no-op detection,
    /// and a rejected update leaves the directory untouched.
    pub fn update_profile(
        &mut self,
        username: &str,
        new_username: &str,
        new_password: &str,
        new_email: &str,
    ) -> bool {
        let current = match self.accounts.get(username) {
            Some(user) => user,
            None => return false,
        };
        if new_username != username && self.accounts.contains_key(new_username) {
            debug!(username, new_username, "profile update rejected, username taken");
            return false;
        }
        if current.username == new_username
            && current.password == new_password
            && current.email == new_email
        {
            debug!(username, "profile update rejected, nothing to change");
            return false;
        }
        let mut user = match self.accounts.remove(username) {
            Some(user) => user,
            None => return false,
        };
        user.username = new_username.to_string();
        user.password = new_password.to_string();
        user.email = new_email.to_string();
        debug!(username, new_username, "profile updated");
        self.accounts.insert(new_username.to_string(), user);
        true
    }

    pub fn get(&self, username: &str) -> Option<&User> {
        self.accounts.get(username)
    }

    pub fn get_mut(&mut self, username: &str) -> Option<&mut User> {
        self.accounts.get_mut(username)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.accounts.contains_key(username)
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.accounts.values()
    }

    pub fn accounts_count(&self) -> usize {
        self.accounts.len()
    }
}
