//! Graphviz DOT source for a `PlanGraph`.

use crate::graph::PlanGraph;
use std::fmt::Write;

/// Render the graph as an undirected DOT `graph`.
///
/// Example:
/// // The mapping plan for doc.ttl
/// graph mapping_tree {
///     n0 [label="SourceOp\n file:data.csv"]
/// }
pub fn to_dot(graph: &PlanGraph) -> String {
    let mut out = String::new();

    if let Some(comment) = graph.comment() {
        for line in comment.lines() {
            // Writing into a String cannot fail.
            let _ = writeln!(out, "// {}", line);
        }
    }
    let _ = writeln!(out, "graph {} {{", quote_id(graph.name()));
    for (id, label) in graph.nodes() {
        let _ = writeln!(out, "\t{} [label={}]", id, quote(label));
    }
    for (parent, child) in graph.edges() {
        let _ = writeln!(out, "\t{} -- {}", parent, child);
    }
    out.push_str("}\n");
    out
}

/// DOT ids made of `[A-Za-z0-9_]` (not starting with a digit) go unquoted.
fn quote_id(id: &str) -> String {
    let plain = !id.is_empty()
        && !id.starts_with(|c: char| c.is_ascii_digit())
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain { id.to_string() } else { quote(id) }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            // CRLF is one break; a lone CR still breaks the line.
            '\r' if chars.peek() == Some(&'\n') => {}
            '\r' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
