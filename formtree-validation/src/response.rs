// Error tree and validation response

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Errors for one field: messages for a leaf, a subtree for a nested record
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum ErrorNode {
    Messages(Vec<String>),
    Nested(ErrorTree),
}

impl ErrorNode {
    /// Messages of a leaf node, `None` for a subtree
    pub fn messages(&self) -> Option<&[String]> {
        match self {
            ErrorNode::Messages(messages) => Some(messages.as_slice()),
            ErrorNode::Nested(_) => None,
        }
    }

    /// Subtree of a nested node, `None` for a leaf
    pub fn nested(&self) -> Option<&ErrorTree> {
        match self {
            ErrorNode::Nested(tree) => Some(tree),
            ErrorNode::Messages(_) => None,
        }
    }

    fn error_count(&self) -> usize {
        match self {
            ErrorNode::Messages(messages) => messages.len(),
            ErrorNode::Nested(tree) => tree.error_count(),
        }
    }
}

/// Error messages keyed like the validated record, in record key order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorTree {
    entries: Vec<(String, ErrorNode)>,
}

impl ErrorTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, key: impl Into<String>, node: ErrorNode) {
        self.entries.push((key.into(), node));
    }

    pub fn get(&self, key: &str) -> Option<&ErrorNode> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)
    }

    /// Look up a node by dotted path, e.g. `venue.address.street`
    pub fn get_path(&self, path: &str) -> Option<&ErrorNode> {
        let mut segments = path.split('.');
        let mut node = self.get(segments.next()?)?;
        for segment in segments {
            node = node.nested()?.get(segment)?;
        }
        Some(node)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ErrorNode)> {
        self.entries.iter().map(|(k, node)| (k.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of messages in the tree
    pub fn error_count(&self) -> usize {
        self.entries.iter().map(|(_, node)| node.error_count()).sum()
    }

    /// Every message with the dotted path of its field, depth first
    pub fn messages(&self) -> Vec<(String, &str)> {
        let mut out = Vec::new();
        self.collect_messages("", &mut out);
        out
    }

    fn collect_messages<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a str)>) {
        for (key, node) in &self.entries {
            let path = crate::errors::join_path(prefix, key);
            match node {
                ErrorNode::Messages(messages) => {
                    out.extend(messages.iter().map(|m| (path.clone(), m.as_str())));
                }
                ErrorNode::Nested(tree) => tree.collect_messages(&path, out),
            }
        }
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl Serialize for ErrorTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, node) in &self.entries {
            map.serialize_entry(key, node)?;
        }
        map.end()
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (path, message) in self.messages() {
            writeln!(f, "{}: {}", path, message)?;
        }
        Ok(())
    }
}

/// Outcome of a validation call
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    /// True when no field produced any message
    pub valid: bool,
    pub error_state: ErrorTree,
}

impl ValidationResponse {
    /// Convert to JSON representation: `{"valid": .., "errorState": {..}}`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "valid": self.valid,
            "errorState": self.error_state.to_json(),
        })
    }
}
