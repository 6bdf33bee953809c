//! User account and per-user state.

use serde::{Deserialize, Serialize};

/// A registered user. Created at signup, read at login, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserAccount {
    /// Unique login name (stored trimmed and lowercased)
    pub username: String,

    /// Plain-text password. Hashing is out of scope for this demo core.
    pub password: String,

    /// Display name shown on the dashboard
    pub full_name: String,
}

/// Mutable per-user state, created lazily on first access.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserState {
    /// Ordered, unique subject names
    pub subjects: Vec<String>,

    /// Last quiz submission, overwritten on each retake
    pub quiz: Option<QuizResult>,
}

/// Discrete stress band computed from a quiz score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StressLevel {
    Low,
    Moderate,
    High,
}

impl StressLevel {
    /// User-facing label for this band.
    pub fn label(&self) -> &'static str {
        match self {
            StressLevel::Low => "Low stress",
            StressLevel::Moderate => "Moderate stress",
            StressLevel::High => "High stress",
        }
    }

    /// Display color tag used by the result view.
    pub fn color(&self) -> &'static str {
        match self {
            StressLevel::Low => "good",
            StressLevel::Moderate => "ok",
            StressLevel::High => "warn",
        }
    }
}

/// Result of one quiz submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizResult {
    /// Sum of answer weights
    pub score: u32,

    /// Classified stress band
    pub level: StressLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_labels() {
        assert_eq!(StressLevel::Low.label(), "Low stress");
        assert_eq!(StressLevel::Moderate.label(), "Moderate stress");
        assert_eq!(StressLevel::High.label(), "High stress");
    }

    #[test]
    fn test_level_colors() {
        assert_eq!(StressLevel::Low.color(), "good");
        assert_eq!(StressLevel::Moderate.color(), "ok");
        assert_eq!(StressLevel::High.color(), "warn");
    }
}
