//! Request and response types for MCP tools.

use rmcp::schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{CategorySummary, Example, Rule};

// ============================================================
// Request Types
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListRulesRequest {
    #[schemars(description = "Category id as returned by list_categories, e.g. 'CodeStyle'")]
    pub category: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetRuleRequest {
    #[schemars(
        description = "Category id the rule belongs to. Optional: when omitted the rule is looked up across all categories"
    )]
    #[serde(default)]
    pub category: Option<String>,
    #[schemars(description = "Rule id, e.g. 'inline_block_usage'")]
    pub rule: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchRulesRequest {
    #[schemars(
        description = "Case-insensitive text matched against rule ids, summaries and rationales"
    )]
    pub query: String,
}

// ============================================================
// Response Types
// ============================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GuideInfo {
    pub title: String,
    pub version: String,
    pub categories: Vec<CategorySummary>,
}

/// Index entry for a rule: enough to decide whether to fetch the full rule.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RuleSummaryInfo {
    pub category: String,
    pub id: String,
    pub summary: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RuleListResponse {
    pub category: String,
    pub rules: Vec<RuleSummaryInfo>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RuleInfo {
    pub category: String,
    pub id: String,
    pub summary: String,
    pub rationale: String,
    pub examples: Vec<ExampleInfo>,
}

impl RuleInfo {
    pub fn new(category: &str, rule: &Rule) -> Self {
        Self {
            category: category.to_string(),
            id: rule.id.clone(),
            summary: rule.summary.clone(),
            rationale: rule.rationale.clone(),
            examples: rule.examples.iter().map(ExampleInfo::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExampleInfo {
    /// 'preferred' or 'discouraged'
    pub label: String,
    pub code: String,
    pub caption: Option<String>,
}

impl From<&Example> for ExampleInfo {
    fn from(example: &Example) -> Self {
        Self {
            label: example.label.as_str().to_string(),
            code: example.code.clone(),
            caption: example.caption.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<RuleSummaryInfo>,
}
