//! Compiled-in guide content.
//!
//! Content is authored as static tables so that adding or editing a rule is a
//! plain data change. [`builtin_guide`] materializes the tables into the owned
//! models the rest of the crate works with.

mod code_style;
mod software_design;

use crate::models::{Category, Example, ExampleLabel, Guide, Rule};

pub const GUIDE_TITLE: &str = "Elixir Style Guide";

/// Version of the guide content. Bumped whenever rules are added, removed or
/// renamed.
pub const GUIDE_VERSION: &str = "0.3.0";

pub struct CategoryDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub rules: &'static [RuleDef],
}

pub struct RuleDef {
    pub id: &'static str,
    pub summary: &'static str,
    pub rationale: &'static str,
    pub examples: &'static [ExampleDef],
}

pub struct ExampleDef {
    pub label: ExampleLabel,
    pub code: &'static str,
    pub caption: Option<&'static str>,
}

/// All categories in the order they appear in the guide.
pub const CATEGORIES: &[CategoryDef] = &[code_style::CATEGORY, software_design::CATEGORY];

pub fn builtin_guide() -> Guide {
    Guide {
        title: GUIDE_TITLE.to_string(),
        version: GUIDE_VERSION.to_string(),
        categories: CATEGORIES.iter().map(Category::from).collect(),
    }
}

impl From<&CategoryDef> for Category {
    fn from(def: &CategoryDef) -> Self {
        Self {
            id: def.id.to_string(),
            name: def.name.to_string(),
            description: def.description.to_string(),
            rules: def.rules.iter().map(Rule::from).collect(),
        }
    }
}

impl From<&RuleDef> for Rule {
    fn from(def: &RuleDef) -> Self {
        Self {
            id: def.id.to_string(),
            summary: def.summary.to_string(),
            rationale: def.rationale.to_string(),
            examples: def.examples.iter().map(Example::from).collect(),
        }
    }
}

impl From<&ExampleDef> for Example {
    fn from(def: &ExampleDef) -> Self {
        Self {
            label: def.label,
            code: def.code.to_string(),
            caption: def.caption.map(str::to_string),
        }
    }
}
