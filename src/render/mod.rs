//! Rendering of the guide into a browsable reference.
//!
//! Every renderer validates the guide first and fails with
//! [`GuideError::MalformedContent`](crate::error::GuideError) instead of
//! emitting mangled output. Output depends only on the guide content, so
//! rendering an unchanged guide twice yields byte-identical results.

mod highlight;
mod html;
mod markdown;
mod tree;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub use highlight::highlight_elixir;
pub use html::STYLESHEET;
pub use markdown::render_markdown;
pub use tree::render_tree;

use crate::error::Result;
use crate::models::Guide;
use crate::validate;

pub const INDEX_PAGE: &str = "index.html";
pub const STYLESHEET_PAGE: &str = "style.css";

/// Options that affect rendered output.
#[derive(Debug, Clone, Default)]
pub struct SiteOptions {
    /// Overrides the guide title in page headers.
    pub title: Option<String>,
}

/// A rendered static site held in memory, keyed by file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pages: BTreeMap<String, String>,
}

impl Site {
    pub fn page(&self, name: &str) -> Option<&str> {
        self.pages.get(name).map(String::as_str)
    }

    pub fn page_names(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Write every page under `dir`, creating it if needed.
    pub fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir)?;
        let mut written = Vec::with_capacity(self.pages.len());
        for (name, content) in &self.pages {
            let path = dir.join(name);
            fs::write(&path, content)?;
            tracing::debug!("Wrote {}", path.display());
            written.push(path);
        }
        Ok(written)
    }
}

/// Render the HTML site: an index page, one page per category and a
/// stylesheet.
pub fn render_site(guide: &Guide, options: &SiteOptions) -> Result<Site> {
    validate::ensure_valid(guide)?;

    let title = options.title.as_deref().unwrap_or(&guide.title);
    let renderer = html::PageRenderer::new(guide, title)?;
    let mut pages = BTreeMap::new();
    pages.insert(INDEX_PAGE.to_string(), renderer.index_page()?);
    pages.insert(STYLESHEET_PAGE.to_string(), STYLESHEET.to_string());
    for category in &guide.categories {
        pages.insert(category.page_name(), renderer.category_page(category)?);
    }

    tracing::info!(
        "Rendered {} pages for {} rules",
        pages.len(),
        guide.rule_count()
    );
    Ok(Site { pages })
}
