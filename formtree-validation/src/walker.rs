//! Lockstep traversal of a data record and its configuration
//!
//! Traversal follows the data: every key of the record appears in the error
//! tree, in record order, whether or not it is configured. For each key:
//!
//! 1. no configuration mapping at this level, or an array value: `[]`
//! 2. a nested record: recurse with the nested configuration, if any
//! 3. a scalar: evaluate the field's rules, or `[]` when it has none
//!
//! A record whose configuration is missing (or is a rule config rather than a
//! nested one) is still recursed into, but every key under it maps to `[]`.

use crate::config::{ConfigNode, ValidationConfig};
use crate::errors::{ConfigError, Result, join_path};
use crate::evaluator::evaluate_leaf;
use crate::response::{ErrorNode, ErrorTree};
use crate::rules::RuleOverrides;
use crate::value::Record;
use serde_json::Value;
use tracing::trace;

pub(crate) struct TreeWalker<'a> {
    overrides: Option<&'a RuleOverrides>,
}

impl<'a> TreeWalker<'a> {
    pub(crate) fn new(overrides: Option<&'a RuleOverrides>) -> Self {
        Self { overrides }
    }

    /// Walk one level. Returns the error tree and whether any leaf under it
    /// produced a message.
    pub(crate) fn walk(
        &self,
        data: &Record,
        config: Option<&ValidationConfig>,
        path: &str,
    ) -> Result<(ErrorTree, bool)> {
        let mut tree = ErrorTree::new();
        let mut found = false;

        for (key, value) in data {
            let (node, node_found) = match (config, value) {
                (None, _) | (_, Value::Array(_)) => (ErrorNode::Messages(Vec::new()), false),
                (Some(config), Value::Object(nested)) => {
                    let unconfigured = ValidationConfig::new();
                    let nested_config = match config.get(key) {
                        Some(ConfigNode::Nested(nested_config)) => Some(nested_config),
                        // Rules on a record are never applied, but the walk
                        // still descends one more level.
                        Some(ConfigNode::Rules(_)) => Some(&unconfigured),
                        None => None,
                    };
                    let (subtree, sub_found) =
                        self.walk(nested, nested_config, &join_path(path, key))?;
                    (ErrorNode::Nested(subtree), sub_found)
                }
                (Some(config), scalar) => {
                    let messages = self.leaf(config.get(key), key, scalar, path)?;
                    let leaf_found = !messages.is_empty();
                    (ErrorNode::Messages(messages), leaf_found)
                }
            };

            found |= node_found;
            tree.push(key.clone(), node);
        }

        Ok((tree, found))
    }

    fn leaf(
        &self,
        node: Option<&ConfigNode>,
        key: &str,
        value: &Value,
        path: &str,
    ) -> Result<Vec<String>> {
        match node {
            None => Ok(Vec::new()),
            Some(ConfigNode::Rules(rules)) => {
                trace!(field = %join_path(path, key), rules = rules.rules().len(), "Evaluating leaf");
                Ok(evaluate_leaf(
                    rules.rules(),
                    key,
                    value,
                    rules.label_text(),
                    self.overrides,
                ))
            }
            Some(ConfigNode::Nested(_)) => Err(ConfigError::missing_rules(join_path(path, key))),
        }
    }
}
