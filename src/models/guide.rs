use serde::{Deserialize, Serialize};

use super::Category;

/// The complete style guide.
///
/// Serializes to the JSON intermediate representation used by
/// `stylebook export` and the `/api/v1/guide` endpoint. Deserializing that
/// output yields an identical value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guide {
    pub title: String,
    /// Semantic version of the guide content as a whole.
    pub version: String,
    pub categories: Vec<Category>,
}

impl Guide {
    pub fn rule_count(&self) -> usize {
        self.categories.iter().map(|c| c.rules.len()).sum()
    }
}
