//! Minimal Elixir syntax highlighting for rendered examples.
//!
//! Produces escaped HTML with `<span>` classes for keywords, atoms, module
//! names, strings, numbers and comments. It is a tokenizer, not a parser, and
//! only needs to be good enough for short illustrative snippets.

use tera::escape_html;

const KEYWORDS: &[&str] = &[
    "after", "alias", "and", "case", "catch", "cond", "def", "defimpl", "defmacro",
    "defmodule", "defp", "defprotocol", "defstruct", "do", "else", "end", "false", "fn",
    "for", "if", "import", "in", "nil", "not", "or", "quote", "raise", "receive", "require",
    "rescue", "true", "try", "unless", "unquote", "use", "when", "with",
];

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '?' || c == '!'
}

fn push_span(out: &mut String, class: &str, text: &str) {
    out.push_str("<span class=\"");
    out.push_str(class);
    out.push_str("\">");
    out.push_str(&escape_html(text));
    out.push_str("</span>");
}

/// Highlight an Elixir snippet, returning HTML suitable for a `<code>` block.
pub fn highlight_elixir(code: &str) -> String {
    let chars: Vec<char> = code.chars().collect();
    let mut out = String::with_capacity(code.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let prev = if i > 0 { Some(chars[i - 1]) } else { None };

        if c == '#' {
            let end = chars[i..]
                .iter()
                .position(|&c| c == '\n')
                .map_or(chars.len(), |p| i + p);
            push_span(&mut out, "comment", &collect(&chars[i..end]));
            i = end;
        } else if c == '"' {
            let end = string_end(&chars, i);
            push_span(&mut out, "string", &collect(&chars[i..end]));
            i = end;
        } else if c == ':'
            && chars.get(i + 1).copied().is_some_and(is_ident_start)
            && !prev.is_some_and(|p| p == ':' || is_ident_char(p))
        {
            let end = ident_end(&chars, i + 1);
            push_span(&mut out, "atom", &collect(&chars[i..end]));
            i = end;
        } else if c.is_ascii_digit() && !prev.is_some_and(is_ident_char) {
            let end = chars[i..]
                .iter()
                .position(|&c| !(c.is_ascii_digit() || c == '_' || c == '.'))
                .map_or(chars.len(), |p| i + p);
            push_span(&mut out, "number", &collect(&chars[i..end]));
            i = end;
        } else if is_ident_start(c) && !prev.is_some_and(|p| is_ident_char(p) || p == '.') {
            let end = ident_end(&chars, i);
            let word = collect(&chars[i..end]);
            if c.is_ascii_uppercase() {
                push_span(&mut out, "module", &word);
            } else if chars.get(end) == Some(&':') && chars.get(end + 1) == Some(&' ') {
                push_span(&mut out, "atom", &word);
            } else if KEYWORDS.contains(&word.as_str()) {
                push_span(&mut out, "keyword", &word);
            } else {
                out.push_str(&escape_html(&word));
            }
            i = end;
        } else {
            out.push_str(&escape_html(&c.to_string()));
            i += 1;
        }
    }

    out
}

fn collect(chars: &[char]) -> String {
    chars.iter().collect()
}

fn ident_end(chars: &[char], start: usize) -> usize {
    chars[start..]
        .iter()
        .position(|&c| !is_ident_char(c))
        .map_or(chars.len(), |p| start + p)
}

/// Index one past the closing quote of the string starting at `start`.
/// Unterminated strings run to the end of the snippet.
fn string_end(chars: &[char], start: usize) -> usize {
    let mut i = start + 1;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            '"' => return i + 1,
            _ => i += 1,
        }
    }
    chars.len()
}
