//! Remote course-catalog record.

use serde::{Deserialize, Serialize};

/// A course as returned by the LMS catalog API.
///
/// The API returns many more fields; only the display name is consumed,
/// so everything else is left unmapped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Course {
    /// Catalog-assigned course id
    #[serde(default)]
    pub id: Option<i64>,

    /// Course display name
    #[serde(default)]
    pub name: Option<String>,
}

impl Course {
    /// The trimmed display name, if the record carries a usable one.
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
