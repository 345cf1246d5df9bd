// src/inspect/tree.rs
// Renders an arbitrary JSON value as a tree of labeled nodes, every node
// carrying its canonical path. A pure function of the value: rendering the
// same value twice yields identical node identities per path.

use serde_json::Value;

use crate::inspect::path::{JsonPath, PathSegment};

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Object { len: usize },
    Array { len: usize },
    String(String),
    Number(String),
    Bool(bool),
    Null,
}

#[derive(Debug, Clone)]
pub struct JsonNode {
    /// Canonical path of this node within the rendered value.
    pub path: String,
    /// Object key or array index under the parent; `None` at the root.
    pub label: Option<String>,
    pub depth: usize,
    pub kind: NodeKind,
    pub children: Vec<JsonNode>,
}

impl JsonNode {
    fn build(value: &Value, path: &JsonPath, label: Option<String>, depth: usize) -> Self {
        let (kind, children) = match value {
            Value::Object(map) => (
                NodeKind::Object { len: map.len() },
                map.iter()
                    .map(|(key, child)| {
                        Self::build(child, &path.key(key), Some(key.clone()), depth + 1)
                    })
                    .collect(),
            ),
            Value::Array(items) => (
                NodeKind::Array { len: items.len() },
                items
                    .iter()
                    .enumerate()
                    .map(|(i, child)| {
                        Self::build(child, &path.index(i), Some(i.to_string()), depth + 1)
                    })
                    .collect(),
            ),
            Value::String(s) => (NodeKind::String(s.clone()), Vec::new()),
            Value::Number(n) => (NodeKind::Number(n.to_string()), Vec::new()),
            Value::Bool(b) => (NodeKind::Bool(*b), Vec::new()),
            Value::Null => (NodeKind::Null, Vec::new()),
        };
        Self {
            path: path.to_string(),
            label,
            depth,
            kind,
            children,
        }
    }
}

#[derive(Debug, Clone)]
pub struct JsonTree {
    root: JsonNode,
}

impl JsonTree {
    /// Render a value. Stable: node identity is a function of the path.
    pub fn render(value: &Value) -> Self {
        Self {
            root: JsonNode::build(value, &JsonPath::root(), None, 0),
        }
    }

    pub fn root(&self) -> &JsonNode {
        &self.root
    }

    /// The unique node at a canonical path, descending segment by segment.
    pub fn find(&self, path: &str) -> Option<&JsonNode> {
        let target = JsonPath::parse(path);
        let mut node = &self.root;
        for segment in target.segments() {
            let label = match segment {
                PathSegment::Key(key) => key.clone(),
                PathSegment::Index(index) => index.to_string(),
            };
            node = node
                .children
                .iter()
                .find(|child| child.label.as_deref() == Some(label.as_str()))?;
        }
        Some(node)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.find(path).is_some()
    }

    /// Preorder traversal of all nodes.
    pub fn nodes(&self) -> Vec<&JsonNode> {
        let mut out = Vec::new();
        collect(&self.root, &mut out);
        out
    }

    /// Flat text rendering, one line per node, marking the node at
    /// `highlight` when given. This is what the terminal front-end prints.
    pub fn lines(&self, highlight: Option<&str>) -> Vec<String> {
        self.nodes()
            .iter()
            .map(|node| {
                let indent = "  ".repeat(node.depth);
                let marker = if highlight == Some(node.path.as_str()) { "» " } else { "  " };
                let label = node
                    .label
                    .as_deref()
                    .map(|l| format!("{l}: "))
                    .unwrap_or_default();
                let preview = match &node.kind {
                    NodeKind::Object { len } => format!("{{…}} ({len} fields)"),
                    NodeKind::Array { len } => format!("[…] ({len} items)"),
                    NodeKind::String(s) => format!("\"{s}\""),
                    NodeKind::Number(n) => n.clone(),
                    NodeKind::Bool(b) => b.to_string(),
                    NodeKind::Null => "null".to_string(),
                };
                format!("{marker}{indent}{label}{preview}")
            })
            .collect()
    }
}

fn collect<'t>(node: &'t JsonNode, out: &mut Vec<&'t JsonNode>) {
    out.push(node);
    for child in &node.children {
        collect(child, out);
    }
}
