// src/lib.rs

//! Thrive: student-wellness core library.

pub mod app;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;
