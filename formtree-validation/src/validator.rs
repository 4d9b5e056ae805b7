// Validation entry points

use crate::config::ValidationConfig;
use crate::errors::{ConfigError, Result};
use crate::loader::ConfigLoader;
use crate::response::{ErrorTree, ValidationResponse};
use crate::rules::RuleOverrides;
use crate::value::Record;
use crate::walker::TreeWalker;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Validate a record against a configuration.
///
/// Rule failures are reported in the returned error tree. An error is
/// returned only when the configuration cannot be applied, e.g. a scalar
/// field configured with a nested configuration instead of rules.
///
/// # Examples
///
/// ```
/// use formtree_validation::{validate, RuleConfig, ValidationConfig};
/// use serde_json::json;
///
/// let data = json!({ "name": "ab" });
/// let config = ValidationConfig::new().field("name", RuleConfig::new().min_length(3));
///
/// let response = validate(data.as_object().unwrap(), &config, None).unwrap();
/// assert!(!response.valid);
/// assert_eq!(
///     response.to_json(),
///     json!({
///         "valid": false,
///         "errorState": { "name": ["Name must be at least 3 characters in length"] }
///     })
/// );
/// ```
pub fn validate(
    data: &Record,
    config: &ValidationConfig,
    overrides: Option<&RuleOverrides>,
) -> Result<ValidationResponse> {
    debug!(fields = data.len(), configured = config.len(), "Validating record");

    let (error_state, found) = TreeWalker::new(overrides).walk(data, Some(config), "")?;
    let valid = !found;

    debug!(valid, errors = error_state.error_count(), "Validation complete");
    Ok(ValidationResponse { valid, error_state })
}

/// A configuration and its rule overrides, ready to validate many records
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
    overrides: RuleOverrides,
}

impl Validator {
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            config,
            overrides: RuleOverrides::default(),
        }
    }

    /// Load the configuration from a JSON or TOML file
    pub fn from_file(path: &str) -> Result<Self> {
        let config = ConfigLoader::auto(path)?.load_file(path)?;
        Ok(Self::new(config))
    }

    pub fn with_overrides(mut self, overrides: RuleOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub fn overrides(&self) -> &RuleOverrides {
        &self.overrides
    }

    /// Validate a record
    pub fn validate(&self, data: &Record) -> Result<ValidationResponse> {
        validate(data, &self.config, Some(&self.overrides))
    }

    /// Validate any JSON value. Only objects have fields; other values
    /// produce an empty, valid response.
    pub fn validate_value(&self, data: &Value) -> Result<ValidationResponse> {
        match data {
            Value::Object(record) => self.validate(record),
            _ => Ok(ValidationResponse {
                valid: true,
                error_state: ErrorTree::new(),
            }),
        }
    }

    /// Serialize a value and validate the result
    pub fn validate_serialize<T: Serialize + ?Sized>(&self, data: &T) -> Result<ValidationResponse> {
        let value = serde_json::to_value(data)
            .map_err(|e| ConfigError::SerializationError(e.to_string()))?;
        self.validate_value(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Pattern;
    use crate::rules::RuleConfig;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_valid_record() {
        let config = ValidationConfig::new()
            .field("name", RuleConfig::new().required().max_length(8).min_length(3))
            .field("email", RuleConfig::new().email());
        let data = record(json!({ "name": "abraham", "email": "abraham@lincoln.com" }));

        let response = validate(&data, &config, None).unwrap();
        assert!(response.valid);
        assert_eq!(response.error_state.error_count(), 0);
    }

    #[test]
    fn test_invalid_record() {
        let config = ValidationConfig::new().field("price", RuleConfig::new().max_value(20.0));
        let response = validate(&record(json!({ "price": 50 })), &config, None).unwrap();

        assert!(!response.valid);
        assert_eq!(
            response.error_state.to_json(),
            json!({ "price": ["Price must be less than 20 in value"] })
        );
    }

    #[test]
    fn test_validator_applies_overrides() {
        let config = ValidationConfig::new().field("password", RuleConfig::new().password());
        let data = record(json!({ "password": "abraham1" }));

        let strict = Validator::new(config.clone());
        assert!(!strict.validate(&data).unwrap().valid);

        let relaxed = Validator::new(config)
            .with_overrides(RuleOverrides::new().password(Pattern::new(r"^(\S*[0-8]\S*)$").unwrap()));
        assert!(relaxed.validate(&data).unwrap().valid);
    }

    #[test]
    fn test_validate_value_non_object() {
        let validator = Validator::new(ValidationConfig::new());
        let response = validator.validate_value(&json!("text")).unwrap();
        assert!(response.valid);
        assert!(response.error_state.is_empty());
    }

    #[test]
    fn test_validate_serialize() {
        #[derive(Serialize)]
        struct Signup {
            name: String,
            age: u32,
        }

        let validator = Validator::new(
            ValidationConfig::new()
                .field("name", RuleConfig::new().required())
                .field("age", RuleConfig::new().min_value(18.0)),
        );

        let response = validator
            .validate_serialize(&Signup {
                name: String::new(),
                age: 16,
            })
            .unwrap();

        assert_eq!(
            response.error_state.to_json(),
            json!({
                "name": ["Name is required"],
                "age": ["Age must be at least 18 in value"]
            })
        );
    }
}
