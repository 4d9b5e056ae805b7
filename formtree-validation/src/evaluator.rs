// Rule evaluation for a single leaf

use crate::rules::{Rule, RuleArgument, RuleOverrides};
use crate::validators::*;
use serde_json::Value;
use tracing::trace;

/// Uppercase the first character of a label, leaving the rest unchanged
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Run one rule against a value, returning its default message on failure
fn execute(rule: &Rule, value: &Value, overrides: Option<&RuleOverrides>) -> Result<(), String> {
    match rule {
        Rule::Required => Required::check(value),
        Rule::MinLength(min) => MinLength(*min).check(value),
        Rule::MaxLength(max) => MaxLength(*max).check(value),
        Rule::MinValue(min) => MinValue(*min).check(value),
        Rule::MaxValue(max) => MaxValue(*max).check(value),
        Rule::Email => IsEmail::check(value),
        Rule::Password => {
            IsPassword(overrides.and_then(RuleOverrides::password_pattern)).check(value)
        }
        Rule::Pattern(pattern) => Matches(pattern).check(value),
        Rule::Unknown(_) => Ok(()),
    }
}

/// Evaluate every rule of a leaf in order.
///
/// Each failing rule contributes one message prefixed with the capitalized
/// label (or the field key when no label is set).
pub fn evaluate_leaf(
    rules: &[RuleArgument],
    key: &str,
    value: &Value,
    label: Option<&str>,
    overrides: Option<&RuleOverrides>,
) -> Vec<String> {
    let display_label = capitalize(label.filter(|l| !l.is_empty()).unwrap_or(key));

    rules
        .iter()
        .filter_map(|argument| {
            let rule = argument.rule();
            let default_message = execute(rule, value, overrides).err()?;
            trace!(field = %key, rule = %rule.name(), "Rule failed");

            let message = argument
                .message_override()
                .map(str::to_string)
                .unwrap_or(default_message);
            Some(format!("{} {}", display_label, message))
        })
        .collect()
}
