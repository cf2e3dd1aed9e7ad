//! HTML pages for the static site.
//!
//! Pages are rendered from Tera templates embedded at compile time. Page text
//! is escaped by Tera's autoescaping; only Markdown output and highlighted
//! code are inserted with `| safe`.

use pulldown_cmark::{html::push_html, Parser};
use serde::Serialize;
use tera::{Context, Tera};

use super::highlight::highlight_elixir;
use super::{INDEX_PAGE, STYLESHEET_PAGE};
use crate::error::Result;
use crate::models::{Category, Example, Guide, Rule};

const TPL_BASE: &str = include_str!("templates/base.html");
const TPL_INDEX: &str = include_str!("templates/index.html");
const TPL_CATEGORY: &str = include_str!("templates/category.html");

pub const STYLESHEET: &str = include_str!("templates/style.css");

#[derive(Serialize)]
struct NavLink<'a> {
    href: String,
    name: &'a str,
}

#[derive(Serialize)]
struct RuleLink<'a> {
    id: &'a str,
    summary: &'a str,
}

#[derive(Serialize)]
struct IndexCategory<'a> {
    page: String,
    name: &'a str,
    description_html: String,
    rules: Vec<RuleLink<'a>>,
}

#[derive(Serialize)]
struct CategoryView<'a> {
    name: &'a str,
    description_html: String,
    rules: Vec<RuleView<'a>>,
}

#[derive(Serialize)]
struct RuleView<'a> {
    id: &'a str,
    summary: &'a str,
    rationale_html: String,
    examples: Vec<ExampleView<'a>>,
}

#[derive(Serialize)]
struct ExampleView<'a> {
    label: &'a str,
    heading: String,
    caption: Option<&'a str>,
    code_html: String,
}

impl<'a> From<&'a Rule> for RuleView<'a> {
    fn from(rule: &'a Rule) -> Self {
        Self {
            id: &rule.id,
            summary: rule.summary(),
            rationale_html: markdown_to_html(&rule.rationale),
            examples: rule.examples.iter().map(ExampleView::from).collect(),
        }
    }
}

impl<'a> From<&'a Example> for ExampleView<'a> {
    fn from(example: &'a Example) -> Self {
        let label = example.label.as_str();
        Self {
            label,
            heading: capitalize(label),
            caption: example.caption.as_deref(),
            code_html: highlight_elixir(&example.code),
        }
    }
}

/// Renders the pages of one guide under one site title.
pub struct PageRenderer<'a> {
    tera: Tera,
    guide: &'a Guide,
    site_title: &'a str,
}

impl<'a> PageRenderer<'a> {
    pub fn new(guide: &'a Guide, site_title: &'a str) -> Result<Self> {
        let mut tera = Tera::default();
        // base.html first, the page templates extend it
        tera.add_raw_template("base.html", TPL_BASE)?;
        tera.add_raw_template("index.html", TPL_INDEX)?;
        tera.add_raw_template("category.html", TPL_CATEGORY)?;

        Ok(Self {
            tera,
            guide,
            site_title,
        })
    }

    fn base_context(&self, page_title: &str) -> Context {
        let nav: Vec<NavLink> = self
            .guide
            .categories
            .iter()
            .map(|c| NavLink {
                href: c.page_name(),
                name: &c.name,
            })
            .collect();

        let mut context = Context::new();
        context.insert("site_title", self.site_title);
        context.insert("page_title", page_title);
        context.insert("version", &self.guide.version);
        context.insert("stylesheet", STYLESHEET_PAGE);
        context.insert("index", INDEX_PAGE);
        context.insert("nav", &nav);
        context
    }

    /// The index page: every category with its rule summaries.
    pub fn index_page(&self) -> Result<String> {
        let categories: Vec<IndexCategory> = self
            .guide
            .categories
            .iter()
            .map(|c| IndexCategory {
                page: c.page_name(),
                name: &c.name,
                description_html: markdown_to_html(&c.description),
                rules: c
                    .rules
                    .iter()
                    .map(|r| RuleLink {
                        id: &r.id,
                        summary: r.summary(),
                    })
                    .collect(),
            })
            .collect();

        let mut context = self.base_context("Index");
        context.insert("categories", &categories);
        Ok(self.tera.render("index.html", &context)?)
    }

    /// One page per category with every rule in full.
    pub fn category_page(&self, category: &Category) -> Result<String> {
        let view = CategoryView {
            name: &category.name,
            description_html: markdown_to_html(&category.description),
            rules: category.rules.iter().map(RuleView::from).collect(),
        };

        let mut context = self.base_context(&category.name);
        context.insert("category", &view);
        Ok(self.tera.render("category.html", &context)?)
    }
}

fn markdown_to_html(text: &str) -> String {
    let mut out = String::new();
    push_html(&mut out, Parser::new(text));
    out
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guide(name: &str, summary: &str) -> Guide {
        Guide {
            title: "Tiny Guide".to_string(),
            version: "1.0.0".to_string(),
            categories: vec![Category {
                id: "CodeStyle".to_string(),
                name: name.to_string(),
                description: "Layout.".to_string(),
                rules: vec![Rule {
                    id: "with_clauses".to_string(),
                    summary: summary.to_string(),
                    rationale: "Keep **happy paths** flat.".to_string(),
                    examples: vec![Example::preferred("with {:ok, x} <- f() do\n  x\nend")],
                }],
            }],
        }
    }

    #[test]
    fn escapes_page_text() {
        let guide = guide("Pipes & <Friends>", "Match with <- in with clauses");
        let pages = PageRenderer::new(&guide, "Tiny Guide").unwrap();

        let index = pages.index_page().unwrap();
        assert!(index.contains("Pipes &amp; &lt;Friends&gt;"));
        assert!(index.contains("Match with &lt;- in with clauses"));
        assert!(!index.contains("<Friends>"));
    }

    #[test]
    fn keeps_markdown_and_highlighting_unescaped() {
        let guide = guide("Code Style", "Use with for happy paths");
        let pages = PageRenderer::new(&guide, "Tiny Guide").unwrap();

        let page = pages.category_page(&guide.categories[0]).unwrap();
        assert!(page.contains("<p>Keep <strong>happy paths</strong> flat.</p>"));
        assert!(page.contains("<span class=\"keyword\">with</span> {<span class=\"atom\">:ok</span>, x} &lt;- f()"));
        assert!(page.contains("<figcaption>Preferred</figcaption>"));
    }

    #[test]
    fn renders_title_in_layout() {
        let guide = guide("Code Style", "Use with for happy paths");
        let pages = PageRenderer::new(&guide, "House Style").unwrap();

        let page = pages.category_page(&guide.categories[0]).unwrap();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Code Style - House Style</title>"));
        assert!(page.contains("<footer>House Style v1.0.0</footer>"));
    }
}
