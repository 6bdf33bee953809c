// src/services/mod.rs

//! Core application services.
//!
//! - [`extractor`]: HTML link extraction for the services directory
//! - [`directory`]: TTL cache over the directory scrape
//! - [`paginator`]: pure pagination of the extracted list
//! - [`catalog`]: paginated LMS course-catalog client
//! - [`importer`]: subject merge logic
//! - [`quiz`]: stress quiz scoring
//! - [`resources`]: static per-subject tutoring resources

pub mod catalog;
pub mod directory;
pub mod extractor;
pub mod importer;
pub mod paginator;
pub mod quiz;
pub mod resources;

pub use catalog::CatalogClient;
pub use directory::ServiceDirectory;
