// src/store/users.rs

//! In-memory user accounts and per-user state.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{AppError, Result};
use crate::models::{QuizResult, UserAccount, UserState};
use crate::services::importer::merge_subjects;

/// Process-lifetime user store. Resets on restart.
#[derive(Debug, Default)]
pub struct UserStore {
    accounts: RwLock<HashMap<String, UserAccount>>,
    states: RwLock<HashMap<String, UserState>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical form of a submitted username.
    fn canonical(username: &str) -> String {
        username.trim().to_lowercase()
    }

    /// Register a new account.
    ///
    /// Usernames are stored trimmed and lowercased. An empty username or
    /// password, or a taken username, is a validation failure. An empty
    /// full name falls back to the username.
    pub fn signup(&self, username: &str, password: &str, full_name: &str) -> Result<()> {
        let username = Self::canonical(username);
        if username.is_empty() || password.is_empty() {
            return Err(AppError::validation("Username and password are required."));
        }

        let mut accounts = self.accounts.write().expect("user store lock poisoned");
        if accounts.contains_key(&username) {
            return Err(AppError::validation("That username is taken."));
        }

        let full_name = full_name.trim();
        let full_name = if full_name.is_empty() {
            username.clone()
        } else {
            full_name.to_string()
        };

        log::info!("New account: {username}");
        accounts.insert(
            username.clone(),
            UserAccount {
                username,
                password: password.to_string(),
                full_name,
            },
        );
        Ok(())
    }

    /// Check credentials and return the canonical username on success.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<String> {
        let username = Self::canonical(username);
        let accounts = self.accounts.read().expect("user store lock poisoned");
        match accounts.get(&username) {
            Some(account) if account.password == password => Ok(username),
            _ => Err(AppError::validation("Invalid credentials.")),
        }
    }

    /// Display name for a user, falling back to the username.
    pub fn full_name(&self, username: &str) -> String {
        let accounts = self.accounts.read().expect("user store lock poisoned");
        accounts
            .get(username)
            .map(|a| a.full_name.clone())
            .unwrap_or_else(|| username.to_string())
    }

    /// Snapshot of a user's state, created lazily on first access.
    pub fn state(&self, username: &str) -> UserState {
        let mut states = self.states.write().expect("user store lock poisoned");
        states.entry(username.to_string()).or_default().clone()
    }

    /// Add a single subject if not already present.
    pub fn add_subject(&self, username: &str, subject: &str) {
        let mut states = self.states.write().expect("user store lock poisoned");
        let state = states.entry(username.to_string()).or_default();
        merge_subjects(&mut state.subjects, &[subject.to_string()]);
    }

    /// Merge imported subjects; returns whether anything was added.
    pub fn import_subjects(&self, username: &str, incoming: &[String]) -> bool {
        let mut states = self.states.write().expect("user store lock poisoned");
        let state = states.entry(username.to_string()).or_default();
        merge_subjects(&mut state.subjects, incoming)
    }

    /// Store a quiz result, replacing any previous one.
    pub fn set_quiz_result(&self, username: &str, result: QuizResult) {
        let mut states = self.states.write().expect("user store lock poisoned");
        states.entry(username.to_string()).or_default().quiz = Some(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StressLevel;

    #[test]
    fn test_signup_then_login() {
        let store = UserStore::new();
        store.signup("  Aztec01 ", "hunter2", "Sam Rivera").unwrap();
        assert_eq!(store.authenticate("aztec01", "hunter2").unwrap(), "aztec01");
        assert_eq!(store.full_name("aztec01"), "Sam Rivera");
    }

    #[test]
    fn test_signup_rejects_missing_fields() {
        let store = UserStore::new();
        assert!(matches!(
            store.signup("", "pw", ""),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            store.signup("user", "", ""),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_signup_rejects_taken_username() {
        let store = UserStore::new();
        store.signup("sam", "a", "Sam").unwrap();
        assert!(store.signup("SAM", "b", "Other Sam").is_err());
    }

    #[test]
    fn test_full_name_falls_back_to_username() {
        let store = UserStore::new();
        store.signup("sam", "pw", "   ").unwrap();
        assert_eq!(store.full_name("sam"), "sam");
    }

    #[test]
    fn test_wrong_password_rejected() {
        let store = UserStore::new();
        store.signup("sam", "right", "Sam").unwrap();
        assert!(store.authenticate("sam", "wrong").is_err());
        assert!(store.authenticate("nobody", "right").is_err());
    }

    #[test]
    fn test_state_created_lazily() {
        let store = UserStore::new();
        let state = store.state("ghost");
        assert!(state.subjects.is_empty());
        assert!(state.quiz.is_none());
    }

    #[test]
    fn test_subject_add_and_import() {
        let store = UserStore::new();
        store.add_subject("sam", "Math 101");
        store.add_subject("sam", "Math 101");
        assert_eq!(store.state("sam").subjects, vec!["Math 101"]);

        let added = store.import_subjects(
            "sam",
            &["Math 101".to_string(), "Bio 200".to_string()],
        );
        assert!(added);
        assert_eq!(store.state("sam").subjects, vec!["Math 101", "Bio 200"]);

        let added = store.import_subjects("sam", &["Bio 200".to_string()]);
        assert!(!added);
    }

    #[test]
    fn test_quiz_result_overwritten() {
        let store = UserStore::new();
        store.set_quiz_result(
            "sam",
            QuizResult {
                score: 1,
                level: StressLevel::Low,
            },
        );
        store.set_quiz_result(
            "sam",
            QuizResult {
                score: 7,
                level: StressLevel::High,
            },
        );
        let state = store.state("sam");
        assert_eq!(state.quiz.unwrap().score, 7);
    }
}
