// src/inspect/path.rs
// Canonical JSON paths: dot notation for object keys, bracket indices for
// array elements (`types[0].type.name`). This is the exact shape a caller
// would use to address the same field in the original payload.

use std::fmt;

use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// A parsed canonical path. The empty path addresses the root value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct JsonPath {
    segments: Vec<PathSegment>,
}

impl JsonPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a dot/bracket path. Keys may contain any character except `.`
    /// and `[` (upstream keys like `official-artwork` are single segments).
    /// A malformed bracket group is treated as part of the key text, so
    /// parsing never fails; an unknown path simply matches nothing.
    pub fn parse(path: &str) -> Self {
        let mut segments = Vec::new();
        let mut key = String::new();
        let mut chars = path.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '.' => {
                    if !key.is_empty() {
                        segments.push(PathSegment::Key(std::mem::take(&mut key)));
                    }
                }
                '[' => {
                    let mut digits = String::new();
                    while let Some(d) = chars.peek() {
                        if d.is_ascii_digit() {
                            digits.push(*d);
                            chars.next();
                        } else {
                            break;
                        }
                    }
                    if chars.peek() == Some(&']') && !digits.is_empty() {
                        chars.next();
                        if !key.is_empty() {
                            segments.push(PathSegment::Key(std::mem::take(&mut key)));
                        }
                        // digits are ascii and non-empty, parse cannot fail
                        if let Ok(index) = digits.parse() {
                            segments.push(PathSegment::Index(index));
                        }
                    } else {
                        key.push('[');
                        key.push_str(&digits);
                    }
                }
                _ => key.push(c),
            }
        }
        if !key.is_empty() {
            segments.push(PathSegment::Key(key));
        }

        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Child path for an object key.
    pub fn key(&self, key: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Key(key.to_string()));
        Self { segments }
    }

    /// Child path for an array index.
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Follow the path into a value.
    pub fn resolve<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        let mut current = value;
        for segment in &self.segments {
            current = match segment {
                PathSegment::Key(key) => current.get(key.as_str())?,
                PathSegment::Index(index) => current.get(index)?,
            };
        }
        Some(current)
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{key}")?;
                }
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
