//! Validation configuration
//!
//! A [`ValidationConfig`] mirrors the part of a data record that needs
//! validation. Each node is either a [`RuleConfig`] for a scalar field or a
//! nested configuration for a nested record.
//!
//! Configurations can be built in code or parsed from a JSON document of the
//! form:
//!
//! ```json
//! {
//!   "name": { "label": "Full name", "rules": { "required": true, "maxLength": 8 } },
//!   "email": { "rules": { "email": { "ruleProp": true, "messageOverride": "is not valid" } } },
//!   "venue": { "address": { "street": { "rules": { "required": true } } } }
//! }
//! ```

use crate::errors::{ConfigError, Result, join_path};
use crate::pattern::Pattern;
use crate::rules::*;
use crate::value::is_truthy;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::warn;

const LABEL_KEY: &str = "label";
const RULES_KEY: &str = "rules";
const RULE_PROP_KEY: &str = "ruleProp";
const MESSAGE_OVERRIDE_KEY: &str = "messageOverride";

/// A configuration node for one field
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigNode {
    /// Rules for a scalar field
    Rules(RuleConfig),
    /// Configuration for a nested record
    Nested(ValidationConfig),
}

/// Per-field configuration for a record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationConfig {
    nodes: HashMap<String, ConfigNode>,
}

impl ValidationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure rules for a scalar field
    pub fn field(mut self, key: impl Into<String>, rules: RuleConfig) -> Self {
        self.nodes.insert(key.into(), ConfigNode::Rules(rules));
        self
    }

    /// Configure a nested record
    pub fn nested(mut self, key: impl Into<String>, config: ValidationConfig) -> Self {
        self.nodes.insert(key.into(), ConfigNode::Nested(config));
        self
    }

    /// Insert or replace a node, returning the previous one
    pub fn insert(&mut self, key: impl Into<String>, node: ConfigNode) -> Option<ConfigNode> {
        self.nodes.insert(key.into(), node)
    }

    pub fn remove(&mut self, key: &str) -> Option<ConfigNode> {
        self.nodes.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&ConfigNode> {
        self.nodes.get(key)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Parse a configuration from a JSON value
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Object(map) => parse_config(map, ""),
            _ => Err(ConfigError::ParseError(
                "validation configuration must be an object".to_string(),
            )),
        }
    }
}

fn parse_config(map: &Map<String, Value>, path: &str) -> Result<ValidationConfig> {
    let mut config = ValidationConfig::new();

    for (key, node) in map {
        let node_path = join_path(path, key);
        // Falsy nodes count as no configuration.
        if !is_truthy(node) {
            continue;
        }
        config.insert(key.clone(), parse_node(node, &node_path)?);
    }

    Ok(config)
}

fn parse_node(node: &Value, path: &str) -> Result<ConfigNode> {
    let Value::Object(map) = node else {
        return Err(ConfigError::invalid_node(
            path,
            "expected a rule config or a nested configuration",
        ));
    };

    let only_rule_keys = map.keys().all(|k| k == LABEL_KEY || k == RULES_KEY);

    if only_rule_keys && map.contains_key(RULES_KEY) {
        return parse_rule_config(map, path).map(ConfigNode::Rules);
    }

    // `{"label": "..."}` is a rule config that forgot its rules; a nested
    // config with a field called `label` holds an object there instead.
    if only_rule_keys && map.get(LABEL_KEY).is_some_and(|label| !label.is_object()) {
        return Err(ConfigError::missing_rules(path));
    }

    parse_config(map, path).map(ConfigNode::Nested)
}

fn parse_rule_config(map: &Map<String, Value>, path: &str) -> Result<RuleConfig> {
    let mut config = RuleConfig::new();

    match map.get(LABEL_KEY) {
        None | Some(Value::Null) => {}
        Some(Value::String(label)) => config = config.label(label.clone()),
        Some(_) => return Err(ConfigError::invalid_node(path, "label must be a string")),
    }

    let rules = match map.get(RULES_KEY) {
        Some(Value::Object(rules)) => rules,
        _ => return Err(ConfigError::missing_rules(path)),
    };

    for (name, argument) in rules {
        config = config.argument(parse_argument(name, argument, path)?);
    }

    Ok(config)
}

fn parse_argument(name: &str, argument: &Value, path: &str) -> Result<RuleArgument> {
    let Value::Object(data) = argument else {
        return parse_rule(name, argument, path).map(RuleArgument::Bare);
    };

    // Flag rules ignore their prop, so `ruleProp` may be left out entirely.
    let rule = parse_rule(name, data.get(RULE_PROP_KEY).unwrap_or(argument), path)?;

    match data.get(MESSAGE_OVERRIDE_KEY) {
        None | Some(Value::Null) => Ok(RuleArgument::Bare(rule)),
        Some(Value::String(message)) => Ok(RuleArgument::WithOverride {
            rule,
            message: message.clone(),
        }),
        Some(_) => Err(ConfigError::invalid_rule(
            path,
            name,
            "messageOverride must be a string",
        )),
    }
}

fn parse_rule(name: &str, prop: &Value, path: &str) -> Result<Rule> {
    let rule = match name {
        // These rules take no argument; `true` is conventional.
        REQUIRED => Rule::Required,
        EMAIL => Rule::Email,
        PASSWORD => Rule::Password,
        MIN_LENGTH => Rule::MinLength(length_prop(name, prop, path)?),
        MAX_LENGTH => Rule::MaxLength(length_prop(name, prop, path)?),
        MIN_VALUE => Rule::MinValue(number_prop(name, prop, path)?),
        MAX_VALUE => Rule::MaxValue(number_prop(name, prop, path)?),
        PATTERN => {
            let source = prop.as_str().ok_or_else(|| {
                ConfigError::invalid_rule(path, name, "expected a regular expression string")
            })?;
            let pattern = Pattern::new(source).map_err(|source| ConfigError::InvalidPattern {
                path: path.to_string(),
                source,
            })?;
            Rule::Pattern(pattern)
        }
        other => {
            warn!(field = %path, rule = %other, "Unknown validation rule will be ignored");
            Rule::Unknown(other.to_string())
        }
    };

    Ok(rule)
}

fn length_prop(name: &str, prop: &Value, path: &str) -> Result<usize> {
    prop.as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| ConfigError::invalid_rule(path, name, "expected a non-negative integer"))
}

fn number_prop(name: &str, prop: &Value, path: &str) -> Result<f64> {
    prop.as_f64()
        .ok_or_else(|| ConfigError::invalid_rule(path, name, "expected a number"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rules_of<'a>(config: &'a ValidationConfig, key: &str) -> &'a RuleConfig {
        match config.get(key) {
            Some(ConfigNode::Rules(rules)) => rules,
            other => panic!("expected rules for {}, got {:?}", key, other),
        }
    }

    #[test]
    fn test_builder() {
        let config = ValidationConfig::new()
            .field("name", RuleConfig::new().required())
            .nested(
                "venue",
                ValidationConfig::new().field("name", RuleConfig::new().min_length(3)),
            );

        assert_eq!(config.len(), 2);
        assert!(matches!(config.get("venue"), Some(ConfigNode::Nested(_))));
        assert!(config.get("missing").is_none());
    }

    #[test]
    fn test_parse_bare_rules_in_order() {
        let config = ValidationConfig::from_json(&json!({
            "name": { "rules": { "required": true, "maxLength": 8, "minLength": 3 } }
        }))
        .unwrap();

        let rules = rules_of(&config, "name");
        assert_eq!(
            rules.rules(),
            &[
                RuleArgument::Bare(Rule::Required),
                RuleArgument::Bare(Rule::MaxLength(8)),
                RuleArgument::Bare(Rule::MinLength(3)),
            ]
        );
        assert_eq!(rules.label_text(), None);
    }

    #[test]
    fn test_parse_label_and_override() {
        let config = ValidationConfig::from_json(&json!({
            "street": {
                "label": "Super street",
                "rules": { "maxLength": { "ruleProp": 8, "messageOverride": "is way too long" } }
            }
        }))
        .unwrap();

        let rules = rules_of(&config, "street");
        assert_eq!(rules.label_text(), Some("Super street"));
        assert_eq!(
            rules.rules(),
            &[RuleArgument::WithOverride {
                rule: Rule::MaxLength(8),
                message: "is way too long".to_string(),
            }]
        );
    }

    #[test]
    fn test_parse_zero_rule_prop_is_kept() {
        let config = ValidationConfig::from_json(&json!({
            "count": { "rules": { "minValue": { "ruleProp": 0, "messageOverride": "too low" } } }
        }))
        .unwrap();

        assert_eq!(
            rules_of(&config, "count").rules()[0].rule(),
            &Rule::MinValue(0.0)
        );
    }

    #[test]
    fn test_parse_override_without_rule_prop() {
        let config = ValidationConfig::from_json(&json!({
            "name": { "rules": { "required": { "messageOverride": "is very much required" } } },
            "email": { "rules": { "email": { "messageOverride": "is not an email" } } }
        }))
        .unwrap();

        assert_eq!(
            rules_of(&config, "name").rules(),
            &[RuleArgument::WithOverride {
                rule: Rule::Required,
                message: "is very much required".to_string(),
            }]
        );
        assert_eq!(
            rules_of(&config, "email").rules()[0].message_override(),
            Some("is not an email")
        );

        // Rules that need a prop still need one.
        let error = ValidationConfig::from_json(&json!({
            "name": { "rules": { "minLength": { "messageOverride": "is too short" } } }
        }))
        .unwrap_err();
        assert!(matches!(error, ConfigError::InvalidRule { ref rule, .. } if rule == "minLength"));
    }

    #[test]
    fn test_parse_non_string_override() {
        let error = ValidationConfig::from_json(&json!({
            "name": { "rules": { "maxLength": { "ruleProp": 8, "messageOverride": 5 } } }
        }))
        .unwrap_err();

        assert!(matches!(
            error,
            ConfigError::InvalidRule { ref path, ref rule, .. } if path == "name" && rule == "maxLength"
        ));
    }

    #[test]
    fn test_parse_nested() {
        let config = ValidationConfig::from_json(&json!({
            "venue": { "address": { "street": { "rules": { "required": true } } } }
        }))
        .unwrap();

        let Some(ConfigNode::Nested(venue)) = config.get("venue") else {
            panic!("venue should be nested");
        };
        let Some(ConfigNode::Nested(address)) = venue.get("address") else {
            panic!("address should be nested");
        };
        assert_eq!(
            rules_of(address, "street").rules(),
            &[RuleArgument::Bare(Rule::Required)]
        );
    }

    #[test]
    fn test_parse_field_named_rules_is_nested() {
        let config = ValidationConfig::from_json(&json!({
            "policy": {
                "rules": { "rules": { "required": true } },
                "owner": { "rules": { "required": true } }
            }
        }))
        .unwrap();

        assert!(matches!(config.get("policy"), Some(ConfigNode::Nested(_))));
    }

    #[test]
    fn test_parse_falsy_nodes_are_skipped() {
        let config = ValidationConfig::from_json(&json!({
            "a": null,
            "b": false,
            "c": { "rules": { "required": true } }
        }))
        .unwrap();

        assert_eq!(config.len(), 1);
        assert!(config.get("a").is_none());
    }

    #[test]
    fn test_parse_unknown_rule() {
        let config = ValidationConfig::from_json(&json!({
            "password": { "rules": { "anomaly": "^x$", "password": true } }
        }))
        .unwrap();

        assert_eq!(
            rules_of(&config, "password").rules(),
            &[
                RuleArgument::Bare(Rule::Unknown("anomaly".to_string())),
                RuleArgument::Bare(Rule::Password),
            ]
        );
    }

    #[test]
    fn test_parse_label_without_rules() {
        let error = ValidationConfig::from_json(&json!({
            "venue": { "street": { "label": "Street" } }
        }))
        .unwrap_err();

        assert!(matches!(error, ConfigError::MissingRules { ref path } if path == "venue.street"));
    }

    #[test]
    fn test_parse_bad_arguments() {
        let error = ValidationConfig::from_json(&json!({
            "name": { "rules": { "minLength": "three" } }
        }))
        .unwrap_err();
        assert!(matches!(error, ConfigError::InvalidRule { ref rule, .. } if rule == "minLength"));

        let error = ValidationConfig::from_json(&json!({
            "price": { "rules": { "maxValue": true } }
        }))
        .unwrap_err();
        assert!(matches!(error, ConfigError::InvalidRule { .. }));

        let error = ValidationConfig::from_json(&json!({
            "code": { "rules": { "pattern": "(unclosed" } }
        }))
        .unwrap_err();
        assert!(matches!(error, ConfigError::InvalidPattern { ref path, .. } if path == "code"));
    }

    #[test]
    fn test_parse_invalid_nodes() {
        assert!(ValidationConfig::from_json(&json!("nope")).is_err());

        let error = ValidationConfig::from_json(&json!({ "name": true })).unwrap_err();
        assert!(matches!(error, ConfigError::InvalidNode { ref path, .. } if path == "name"));

        let error = ValidationConfig::from_json(&json!({
            "name": { "label": 5, "rules": {} }
        }))
        .unwrap_err();
        assert!(matches!(error, ConfigError::InvalidNode { .. }));
    }
}
