use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Rule;

/// A named grouping of related rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable identifier (e.g. `CodeStyle`), also used for page names.
    pub id: String,
    /// Human readable name (e.g. "Code Style").
    pub name: String,
    pub description: String,
    pub rules: Vec<Rule>,
}

impl Category {
    pub fn rule(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// File name of the rendered page for this category.
    pub fn page_name(&self) -> String {
        format!("{}.html", self.id)
    }
}

/// A category without its rules, used for listing responses over HTTP and MCP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub rule_count: usize,
}

impl From<&Category> for CategorySummary {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name.clone(),
            description: category.description.clone(),
            rule_count: category.rules.len(),
        }
    }
}

/// A rule reference paired with its owning category, used for search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRef {
    pub category: String,
    pub rule: String,
    pub summary: String,
}
