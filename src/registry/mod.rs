//! Read-only access to the style guide.
//!
//! [`Registry`] wraps a [`Guide`] behind an `Arc`, so clones are cheap and the
//! same content can be shared by the renderer, the preview server and the MCP
//! server without synchronization.

use std::sync::Arc;

use crate::content;
use crate::error::{GuideError, Result};
use crate::models::{Category, CategorySummary, Guide, Rule, RuleRef};

#[derive(Debug, Clone)]
pub struct Registry {
    guide: Arc<Guide>,
}

impl Registry {
    pub fn new(guide: Guide) -> Self {
        Self {
            guide: Arc::new(guide),
        }
    }

    /// The guide compiled into this binary.
    pub fn builtin() -> Self {
        Self::new(content::builtin_guide())
    }

    pub fn guide(&self) -> &Guide {
        &self.guide
    }

    pub fn title(&self) -> &str {
        &self.guide.title
    }

    pub fn version(&self) -> &str {
        &self.guide.version
    }

    /// Categories in authored order.
    pub fn list_categories(&self) -> &[Category] {
        &self.guide.categories
    }

    pub fn category_summaries(&self) -> Vec<CategorySummary> {
        self.list_categories()
            .iter()
            .map(CategorySummary::from)
            .collect()
    }

    pub fn category(&self, id: &str) -> Result<&Category> {
        self.guide
            .categories
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| GuideError::category_not_found(id))
    }

    /// Rules of a category in authored order.
    pub fn list_rules(&self, category_id: &str) -> Result<&[Rule]> {
        self.category(category_id).map(|c| c.rules.as_slice())
    }

    pub fn get_rule(&self, category_id: &str, rule_id: &str) -> Result<&Rule> {
        self.category(category_id)?
            .rule(rule_id)
            .ok_or_else(|| GuideError::rule_not_found(rule_id))
    }

    /// Look a rule up by id alone. Returns the first match in guide order.
    pub fn find_rule(&self, rule_id: &str) -> Result<(&Category, &Rule)> {
        self.guide
            .categories
            .iter()
            .find_map(|c| c.rule(rule_id).map(|r| (c, r)))
            .ok_or_else(|| GuideError::rule_not_found(rule_id))
    }

    pub fn get_summary<'a>(&self, rule: &'a Rule) -> &'a str {
        rule.summary()
    }

    /// Rules matching `query` in id, summary or rationale, in guide order.
    pub fn search(&self, query: &str) -> Vec<RuleRef> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        self.guide
            .categories
            .iter()
            .flat_map(|c| {
                c.rules.iter().filter(|r| r.matches(query)).map(|r| RuleRef {
                    category: c.id.clone(),
                    rule: r.id.clone(),
                    summary: r.summary.clone(),
                })
            })
            .collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
