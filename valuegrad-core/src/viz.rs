//! Export of a computation graph as Graphviz DOT text.
//!
//! Each value becomes a record node `{ label | data | grad }`; each non-leaf also
//! gets a small operator node that feeds it, and operands point at their
//! consumer's operator node. Rendering the text (e.g. `dot -Tsvg`) is left to
//! Graphviz.

use crate::autograd::graph::NodeId;
use crate::value::Value;
use std::collections::BTreeSet;
use std::fmt;
use std::io;

/// Nodes and operand edges reachable from a root.
#[derive(Debug, Clone)]
pub struct Trace {
    /// Every reachable node once, operands before consumers.
    pub nodes: Vec<Value>,
    /// `(operand, consumer)` pairs, deduplicated: `x * x` yields a single edge.
    pub edges: Vec<(Value, Value)>,
}

/// Collects the subgraph reachable from `root`.
pub fn trace(root: &Value) -> Trace {
    let nodes = root.topological_order();
    let mut seen: BTreeSet<(NodeId, NodeId)> = BTreeSet::new();
    let mut edges = Vec::new();
    for node in &nodes {
        for operand in node.operands() {
            if seen.insert((operand.id(), node.id())) {
                edges.push((operand, node.clone()));
            }
        }
    }
    Trace { nodes, edges }
}

/// Escapes characters that carry meaning inside a DOT record label.
fn escape_record(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '"' | '{' | '}' | '|' | '<' | '>' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn render<W: fmt::Write>(root: &Value, out: &mut W) -> fmt::Result {
    let Trace { nodes, edges } = trace(root);
    writeln!(out, "digraph {{")?;
    writeln!(out, "    graph [rankdir=LR]")?;
    for node in &nodes {
        let uid = node.id().index();
        let label = node.label().unwrap_or_default();
        writeln!(
            out,
            "    \"{}\" [label=\"{{ {} | data {:.2} | grad {:.2} }}\" shape=record]",
            uid,
            escape_record(&label),
            node.data(),
            node.grad()
        )?;
        let op = node.operation_tag();
        if !op.is_empty() {
            writeln!(out, "    \"{}{}\" [label=\"{}\"]", uid, op, op)?;
            writeln!(out, "    \"{}{}\" -> \"{}\"", uid, op, uid)?;
        }
    }
    for (operand, consumer) in &edges {
        writeln!(
            out,
            "    \"{}\" -> \"{}{}\"",
            operand.id().index(),
            consumer.id().index(),
            consumer.operation_tag()
        )?;
    }
    writeln!(out, "}}")
}

/// Renders the subgraph reachable from `root` as DOT text, left to right.
pub fn to_dot(root: &Value) -> String {
    let mut out = String::new();
    // Formatting into a String never fails.
    let _ = render(root, &mut out);
    out
}

/// Writes the DOT text for `root` to `writer`.
pub fn write_dot<W: io::Write>(root: &Value, writer: &mut W) -> io::Result<()> {
    writer.write_all(to_dot(root).as_bytes())
}
