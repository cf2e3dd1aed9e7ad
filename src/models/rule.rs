use serde::{Deserialize, Serialize};

use super::{Example, ExampleLabel};

/// A single named guideline.
///
/// The `summary` is a standalone sentence used as the index entry for the
/// rule, so it never ends with a period and stays within
/// [`Rule::MAX_SUMMARY_LEN`] characters. The `rationale` is Markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Stable identifier, unique within the owning category.
    pub id: String,
    pub summary: String,
    pub rationale: String,
    #[serde(default)]
    pub examples: Vec<Example>,
}

impl Rule {
    pub const MAX_SUMMARY_LEN: usize = 100;

    /// The one-line summary used in index listings.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn preferred(&self) -> impl Iterator<Item = &Example> {
        self.examples_labeled(ExampleLabel::Preferred)
    }

    pub fn discouraged(&self) -> impl Iterator<Item = &Example> {
        self.examples_labeled(ExampleLabel::Discouraged)
    }

    fn examples_labeled(&self, label: ExampleLabel) -> impl Iterator<Item = &Example> {
        self.examples.iter().filter(move |e| e.label == label)
    }

    /// Case-insensitive match against id, summary and rationale.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.id.to_lowercase().contains(&query)
            || self.summary.to_lowercase().contains(&query)
            || self.rationale.to_lowercase().contains(&query)
    }
}
