// Rule definitions and the per-field rule configuration builder

use crate::pattern::Pattern;

pub const REQUIRED: &str = "required";
pub const MIN_LENGTH: &str = "minLength";
pub const MAX_LENGTH: &str = "maxLength";
pub const PATTERN: &str = "pattern";
pub const MIN_VALUE: &str = "minValue";
pub const MAX_VALUE: &str = "maxValue";
pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";

/// A single check applied to a leaf value, with its typed argument
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Value must be truthy
    Required,
    /// String value must have at least this many characters
    MinLength(usize),
    /// String value must have at most this many characters
    MaxLength(usize),
    /// Numeric value must be at least this
    MinValue(f64),
    /// Numeric value must be at most this
    MaxValue(f64),
    /// Value must look like an email address
    Email,
    /// Value must satisfy the password pattern (default or call override)
    Password,
    /// Value must match the given pattern
    Pattern(Pattern),
    /// A rule name this engine does not know. Always passes.
    Unknown(String),
}

impl Rule {
    /// The configuration name of the rule
    pub fn name(&self) -> &str {
        match self {
            Rule::Required => REQUIRED,
            Rule::MinLength(_) => MIN_LENGTH,
            Rule::MaxLength(_) => MAX_LENGTH,
            Rule::MinValue(_) => MIN_VALUE,
            Rule::MaxValue(_) => MAX_VALUE,
            Rule::Email => EMAIL,
            Rule::Password => PASSWORD,
            Rule::Pattern(_) => PATTERN,
            Rule::Unknown(name) => name.as_str(),
        }
    }
}

/// A rule as written in configuration: bare, or with a replacement message.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleArgument {
    Bare(Rule),
    WithOverride { rule: Rule, message: String },
}

impl RuleArgument {
    pub fn rule(&self) -> &Rule {
        match self {
            RuleArgument::Bare(rule) | RuleArgument::WithOverride { rule, .. } => rule,
        }
    }

    /// Replacement message, if one is set and non-empty
    pub fn message_override(&self) -> Option<&str> {
        match self {
            RuleArgument::WithOverride { message, .. } if !message.is_empty() => Some(message.as_str()),
            _ => None,
        }
    }
}

impl From<Rule> for RuleArgument {
    fn from(rule: Rule) -> Self {
        RuleArgument::Bare(rule)
    }
}

/// Rules and label for one scalar field
///
/// Rules run in the order they were added.
///
/// # Examples
///
/// ```
/// use formtree_validation::RuleConfig;
///
/// let rules = RuleConfig::new()
///     .label("Full name")
///     .required()
///     .with_message(formtree_validation::Rule::MaxLength(8), "is way too long")
///     .min_length(3);
///
/// assert_eq!(rules.rules().len(), 3);
/// assert_eq!(rules.label_text(), Some("Full name"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleConfig {
    label: Option<String>,
    rules: Vec<RuleArgument>,
}

impl RuleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label used to prefix messages instead of the field key
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Add a rule with its default message
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(RuleArgument::Bare(rule));
        self
    }

    /// Add a rule whose failure message replaces the default
    pub fn with_message(mut self, rule: Rule, message: impl Into<String>) -> Self {
        self.rules.push(RuleArgument::WithOverride {
            rule,
            message: message.into(),
        });
        self
    }

    /// Add an already-built rule argument
    pub fn argument(mut self, argument: RuleArgument) -> Self {
        self.rules.push(argument);
        self
    }

    pub fn required(self) -> Self {
        self.rule(Rule::Required)
    }

    pub fn min_length(self, min: usize) -> Self {
        self.rule(Rule::MinLength(min))
    }

    pub fn max_length(self, max: usize) -> Self {
        self.rule(Rule::MaxLength(max))
    }

    pub fn min_value(self, min: f64) -> Self {
        self.rule(Rule::MinValue(min))
    }

    pub fn max_value(self, max: f64) -> Self {
        self.rule(Rule::MaxValue(max))
    }

    pub fn email(self) -> Self {
        self.rule(Rule::Email)
    }

    pub fn password(self) -> Self {
        self.rule(Rule::Password)
    }

    pub fn pattern(self, pattern: impl Into<Pattern>) -> Self {
        self.rule(Rule::Pattern(pattern.into()))
    }

    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn rules(&self) -> &[RuleArgument] {
        &self.rules
    }
}

/// Call-scoped replacements for built-in comparison patterns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleOverrides {
    password: Option<Pattern>,
}

impl RuleOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the default password pattern for every `password` rule
    pub fn password(mut self, pattern: impl Into<Pattern>) -> Self {
        self.password = Some(pattern.into());
        self
    }

    pub fn password_pattern(&self) -> Option<&Pattern> {
        self.password.as_ref()
    }
}
