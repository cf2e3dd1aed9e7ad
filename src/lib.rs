//! Stylebook: an Elixir style guide encoded as data.
//!
//! The guide lives in [`content`] as static tables and is accessed through
//! [`registry::Registry`]. [`render`] turns it into a static site or a
//! Markdown document, [`api`] serves a live preview and [`mcp`] exposes it to
//! AI assistants.

pub mod api;
pub mod config;
pub mod content;
pub mod error;
pub mod mcp;
pub mod models;
pub mod registry;
pub mod render;
pub mod validate;

pub use error::{GuideError, Result};
pub use registry::Registry;
