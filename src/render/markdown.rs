//! Single-document Markdown rendering.

use std::collections::HashSet;
use std::fmt::Write;

use crate::error::Result;
use crate::models::{Example, Guide};
use crate::validate;

/// Render the whole guide as one Markdown document with a table of contents.
pub fn render_markdown(guide: &Guide) -> Result<String> {
    validate::ensure_valid(guide)?;

    // Anchors are claimed in heading order so duplicates get GitHub's suffixes.
    let mut anchors = Anchors::default();
    anchors.claim(&guide.title);
    anchors.claim("Contents");

    let mut out = format!("# {}\n\nVersion {}\n\n", guide.title, guide.version);

    out.push_str("## Contents\n\n");
    for category in &guide.categories {
        let _ = writeln!(out, "- [{}](#{})", category.name, anchors.claim(&category.name));
        for rule in &category.rules {
            let _ = writeln!(
                out,
                "  - [{}](#{})",
                rule.summary(),
                anchors.claim(rule.summary())
            );
        }
    }

    for category in &guide.categories {
        let _ = write!(out, "\n## {}\n\n{}\n", category.name, category.description.trim());
        for rule in &category.rules {
            let _ = write!(
                out,
                "\n### {}\n\n`{}`\n\n{}\n",
                rule.summary(),
                rule.id,
                rule.rationale.trim()
            );
            for example in &rule.examples {
                write_example(&mut out, example);
            }
        }
    }

    Ok(out)
}

fn write_example(out: &mut String, example: &Example) {
    let heading = match &example.caption {
        Some(caption) => format!("{} ({})", example.label, caption),
        None => example.label.to_string(),
    };
    let fence = fence_for(&example.code);
    let _ = write!(
        out,
        "\n*{}*\n\n{fence}elixir\n{}\n{fence}\n",
        heading,
        example.code,
        fence = fence
    );
}

/// A backtick fence longer than any backtick run inside `code`.
fn fence_for(code: &str) -> String {
    let longest = code
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat((longest + 1).max(3))
}

/// GitHub-style heading anchors, with `-1`, `-2`... appended to repeats.
#[derive(Default)]
struct Anchors {
    used: HashSet<String>,
}

impl Anchors {
    fn claim(&mut self, heading: &str) -> String {
        let base = slug(heading);
        let mut candidate = base.clone();
        let mut n = 0;
        while !self.used.insert(candidate.clone()) {
            n += 1;
            candidate = format!("{}-{}", base, n);
        }
        candidate
    }
}

fn slug(heading: &str) -> String {
    heading
        .chars()
        .flat_map(|c| {
            let keep = if c.is_alphanumeric() || c == '_' || c == '-' {
                Some(c)
            } else if c == ' ' {
                Some('-')
            } else {
                None
            };
            keep.into_iter().flat_map(char::to_lowercase)
        })
        .collect()
}
