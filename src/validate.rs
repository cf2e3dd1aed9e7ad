//! Structural validation of guide content.
//!
//! Content is static, so every issue found here is an authoring mistake. The
//! renderer refuses to write anything while [`validate`] reports issues.

use std::collections::HashSet;
use std::fmt;

use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag};
use serde::Serialize;

use crate::error::{GuideError, Result};
use crate::models::{Category, Example, Guide, Rule};

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentIssue {
    /// Path to the offending entry, e.g. `CodeStyle/inline_block_usage`.
    pub location: String,
    pub reason: String,
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.reason)
    }
}

impl From<ContentIssue> for GuideError {
    fn from(issue: ContentIssue) -> Self {
        GuideError::MalformedContent {
            location: issue.location,
            reason: issue.reason,
        }
    }
}

/// Collect every issue in the guide, in guide order.
pub fn validate(guide: &Guide) -> Vec<ContentIssue> {
    let mut issues = Vec::new();

    if !is_semver(&guide.version) {
        issues.push(issue(
            "guide",
            format!("version '{}' is not a semantic version", guide.version),
        ));
    }

    let mut seen = HashSet::new();
    for category in &guide.categories {
        if !seen.insert(category.id.as_str()) {
            issues.push(issue(&category.id, "duplicate category id"));
        }
        validate_category(category, &mut issues);
    }

    issues
}

/// Fail with the first issue found, logging all of them.
pub fn ensure_valid(guide: &Guide) -> Result<()> {
    let issues = validate(guide);
    for issue in &issues {
        tracing::error!("Malformed content: {}", issue);
    }
    match issues.into_iter().next() {
        Some(first) => Err(first.into()),
        None => Ok(()),
    }
}

fn validate_category(category: &Category, issues: &mut Vec<ContentIssue>) {
    if category.id.trim().is_empty() {
        issues.push(issue("guide", "category with empty id"));
    }
    if category.rules.is_empty() {
        issues.push(issue(&category.id, "category has no rules"));
    }

    let mut seen = HashSet::new();
    for rule in &category.rules {
        let location = format!("{}/{}", category.id, rule.id);
        if !seen.insert(rule.id.as_str()) {
            issues.push(issue(&location, "duplicate rule id in category"));
        }
        validate_rule(&location, rule, issues);
    }
}

fn validate_rule(location: &str, rule: &Rule, issues: &mut Vec<ContentIssue>) {
    if rule.id.trim().is_empty() {
        issues.push(issue(location, "rule id is empty"));
    }
    if let Some(reason) = summary_problem(&rule.summary) {
        issues.push(issue(location, reason));
    }
    if let Some(reason) = rationale_problem(&rule.rationale) {
        issues.push(issue(location, reason));
    }
    if !rule.examples.iter().any(Example::is_preferred) {
        issues.push(issue(location, "rule has no preferred example"));
    }
    for (i, example) in rule.examples.iter().enumerate() {
        if example.code.trim().is_empty() {
            issues.push(issue(
                &format!("{}/examples[{}]", location, i),
                "example code is empty",
            ));
        }
    }
}

fn summary_problem(summary: &str) -> Option<String> {
    if summary.trim().is_empty() {
        return Some("summary is missing".to_string());
    }
    if summary.contains('\n') {
        return Some("summary spans more than one line".to_string());
    }
    if summary.trim() != summary {
        return Some("summary has surrounding whitespace".to_string());
    }
    let len = summary.chars().count();
    if len > Rule::MAX_SUMMARY_LEN {
        return Some(format!(
            "summary is {} characters, limit is {}",
            len,
            Rule::MAX_SUMMARY_LEN
        ));
    }
    if summary.ends_with('.') {
        return Some("summary ends with a period".to_string());
    }
    if [". ", "! ", "? "].iter().any(|sep| summary.contains(sep)) {
        return Some("summary is more than one sentence".to_string());
    }
    None
}

fn rationale_problem(rationale: &str) -> Option<String> {
    if rationale.trim().is_empty() {
        return Some("rationale is missing".to_string());
    }

    let mut has_html = false;
    for (event, range) in Parser::new(rationale).into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(_)))
                if !has_closing_fence(&rationale[range.clone()]) =>
            {
                return Some("rationale has an unterminated code fence".to_string());
            }
            Event::Html(_) | Event::InlineHtml(_) => has_html = true,
            _ => {}
        }
    }
    if has_html {
        return Some("rationale contains raw HTML".to_string());
    }
    None
}

/// Whether the source of a fenced code block ends with a closing fence at
/// least as long as its opening one. An unclosed block runs to end of input.
fn has_closing_fence(block: &str) -> bool {
    let mut lines = block.lines().map(str::trim).filter(|l| !l.is_empty());
    let Some(opening) = lines.next() else {
        return false;
    };
    let Some(fence) = opening.chars().next() else {
        return false;
    };
    let width = opening.chars().take_while(|&c| c == fence).count();
    lines.last().is_some_and(|closing| {
        closing.chars().count() >= width && closing.chars().all(|c| c == fence)
    })
}

/// Semantic version: `MAJOR.MINOR.PATCH` with optional `-pre.release` and
/// `+build` identifiers.
fn is_semver(version: &str) -> bool {
    let (rest, build) = match version.split_once('+') {
        Some((rest, build)) => (rest, Some(build)),
        None => (version, None),
    };
    let (core, pre) = match rest.split_once('-') {
        Some((core, pre)) => (core, Some(pre)),
        None => (rest, None),
    };

    let parts: Vec<&str> = core.split('.').collect();
    parts.len() == 3
        && parts.iter().all(|p| is_numeric_identifier(p))
        && pre.map_or(true, |p| dot_identifiers(p, true))
        && build.map_or(true, |b| dot_identifiers(b, false))
}

fn is_numeric_identifier(part: &str) -> bool {
    !part.is_empty()
        && part.chars().all(|c| c.is_ascii_digit())
        && (part == "0" || !part.starts_with('0'))
}

/// Non-empty dot-separated identifiers. Pre-release numeric identifiers may
/// not carry leading zeros; build identifiers may.
fn dot_identifiers(text: &str, strict_numbers: bool) -> bool {
    text.split('.').all(|id| {
        !id.is_empty()
            && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            && (!strict_numbers
                || !id.chars().all(|c| c.is_ascii_digit())
                || is_numeric_identifier(id))
    })
}

fn issue(location: &str, reason: impl Into<String>) -> ContentIssue {
    ContentIssue {
        location: location.to_string(),
        reason: reason.into(),
    }
}
