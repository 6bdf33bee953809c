// src/models/mod.rs

//! Domain models for the wellness application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod course;
mod service;
mod user;

// Re-export all public types
pub use config::{CatalogConfig, Config, ScraperConfig, SessionConfig};
pub use course::Course;
pub use service::{Page, ServiceEntry};
pub use user::{QuizResult, StressLevel, UserAccount, UserState};
