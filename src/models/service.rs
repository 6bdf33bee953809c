//! Services-directory data structures.

use serde::{Deserialize, Serialize};

/// A single service or program link extracted from the campus directory page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceEntry {
    /// Display name of the service
    pub name: String,

    /// Absolute URL of the service page
    pub url: String,
}

impl ServiceEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Case-insensitive deduplication key.
    pub fn dedup_key(&self) -> (String, String) {
        (self.name.to_lowercase(), self.url.to_lowercase())
    }
}

/// One page of a paginated service listing. Derived, never persisted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Page {
    /// Items on this page, in directory order
    pub items: Vec<ServiceEntry>,

    /// 1-based page number after clamping
    pub page_number: usize,

    /// Effective page size after clamping to [1, 100]
    pub page_size: usize,

    /// Total item count across all pages
    pub total_items: usize,

    /// Total page count, always at least 1
    pub total_pages: usize,
}

impl Page {
    /// Whether a page follows this one.
    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }

    /// Whether a page precedes this one.
    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }
}
