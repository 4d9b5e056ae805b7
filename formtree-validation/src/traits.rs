// Validation traits

use crate::config::ValidationConfig;
use crate::errors::Result;
use crate::response::ValidationResponse;
use crate::rules::RuleOverrides;
use crate::validator::Validator;
use serde::Serialize;

/// Trait for types that carry their own validation configuration
///
/// The value is serialized and its fields are checked against
/// [`validation_config`](Validate::validation_config).
pub trait Validate: Serialize {
    /// Configuration describing the fields of this type
    fn validation_config() -> ValidationConfig;

    /// Pattern overrides applied to every validation of this type
    fn rule_overrides() -> RuleOverrides {
        RuleOverrides::default()
    }

    /// Validate the value
    fn validate(&self) -> Result<ValidationResponse> {
        Validator::new(Self::validation_config())
            .with_overrides(Self::rule_overrides())
            .validate_serialize(self)
    }
}
