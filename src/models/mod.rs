//! Domain models for Stylebook.
//!
//! # Core Concepts
//!
//! - [`Guide`]: The whole style guide. Carries a title, a semantic version and
//!   an ordered list of categories.
//! - [`Category`]: Top-level grouping of related rules (e.g. `CodeStyle`).
//! - [`Rule`]: A single named guideline with a one-line summary, a Markdown
//!   rationale and examples.
//! - [`Example`]: A code snippet labeled [`ExampleLabel::Preferred`] or
//!   [`ExampleLabel::Discouraged`].
//!
//! Ownership is strictly top-down: a guide owns its categories, a category
//! owns its rules and a rule owns its examples.

mod category;
mod example;
mod guide;
mod rule;

pub use category::*;
pub use example::*;
pub use guide::*;
pub use rule::*;
