//! ASCII tree rendering of the guide index.

use crate::models::{Guide, Rule};

const CONTRASTED: char = '●';
const PREFERRED_ONLY: char = '○';
const NO_PREFERRED: char = '✗';

/// Symbol describing which kinds of examples a rule carries.
fn example_symbol(rule: &Rule) -> char {
    let preferred = rule.preferred().next().is_some();
    let discouraged = rule.discouraged().next().is_some();
    match (preferred, discouraged) {
        (true, true) => CONTRASTED,
        (true, false) => PREFERRED_ONLY,
        (false, _) => NO_PREFERRED,
    }
}

struct Node<'a> {
    label: &'a str,
    symbol: Option<char>,
    children: Vec<Node<'a>>,
}

/// Render the guide as ASCII art, one branch per category and one leaf per
/// rule.
///
/// Example output:
/// ```text
/// Elixir Style Guide v0.3.0
/// ├── Code Style
/// │   ├── ● inline_block_usage
/// │   └── ○ zero_arity_parentheses
/// └── Software Design
///     └── ● assertive_code
/// ```
pub fn render_tree(guide: &Guide) -> String {
    let categories: Vec<Node> = guide
        .categories
        .iter()
        .map(|c| Node {
            label: &c.name,
            symbol: None,
            children: c
                .rules
                .iter()
                .map(|r| Node {
                    label: &r.id,
                    symbol: Some(example_symbol(r)),
                    children: Vec::new(),
                })
                .collect(),
        })
        .collect();

    let mut output = format!("{} v{}\n", guide.title, guide.version);
    for (i, node) in categories.iter().enumerate() {
        let is_last = i == categories.len() - 1;
        render_node(&mut output, node, "", is_last);
    }
    output
}

fn render_node(output: &mut String, node: &Node, prefix: &str, is_last: bool) {
    let branch = if is_last { "└── " } else { "├── " };
    output.push_str(prefix);
    output.push_str(branch);
    if let Some(symbol) = node.symbol {
        output.push(symbol);
        output.push(' ');
    }
    output.push_str(node.label);
    output.push('\n');

    let continuation = if is_last { "    " } else { "│   " };
    let child_prefix = format!("{}{}", prefix, continuation);

    for (i, child) in node.children.iter().enumerate() {
        let child_is_last = i == node.children.len() - 1;
        render_node(output, child, &child_prefix, child_is_last);
    }
}
