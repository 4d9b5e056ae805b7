//! Configuration-driven validation of nested records
//!
//! A data record (a JSON object) is walked in lockstep with a
//! [`ValidationConfig`] describing per-field rules. The result is an
//! [`ErrorTree`] keyed exactly like the record plus an overall verdict.
//!
//! - nested objects are recursed into
//! - arrays are opaque and always map to `[]`
//! - scalar fields run their rules in order and collect one message per
//!   failing rule, prefixed with the capitalized label or field key
//! - fields without configuration map to `[]`
//!
//! # Examples
//!
//! ## Building a configuration in code
//!
//! ```
//! use formtree_validation::{validate, RuleConfig, ValidationConfig};
//! use serde_json::json;
//!
//! let config = ValidationConfig::new()
//!     .field("name", RuleConfig::new().required().min_length(3))
//!     .nested(
//!         "venue",
//!         ValidationConfig::new().nested(
//!             "address",
//!             ValidationConfig::new().field(
//!                 "street",
//!                 RuleConfig::new().label("Super street").required(),
//!             ),
//!         ),
//!     );
//!
//! let data = json!({
//!     "name": "abraham",
//!     "venue": { "address": { "street": "" } },
//!     "tickets": [{ "id": "t1" }]
//! });
//!
//! let response = validate(data.as_object().unwrap(), &config, None).unwrap();
//! assert!(!response.valid);
//! assert_eq!(
//!     response.error_state.to_json(),
//!     json!({
//!         "name": [],
//!         "venue": { "address": { "street": ["Super street is required"] } },
//!         "tickets": []
//!     })
//! );
//! ```
//!
//! ## Loading a configuration from JSON
//!
//! ```
//! use formtree_validation::{ConfigLoader, FileFormat, Validator};
//! use serde_json::json;
//!
//! let config = ConfigLoader::new(FileFormat::Json)
//!     .parse(r#"{
//!         "email": { "rules": { "email": { "ruleProp": true, "messageOverride": "is not valid" } } }
//!     }"#)
//!     .unwrap();
//!
//! let response = Validator::new(config)
//!     .validate_value(&json!({ "email": "password" }))
//!     .unwrap();
//! assert_eq!(
//!     response.error_state.to_json(),
//!     json!({ "email": ["Email is not valid"] })
//! );
//! ```

mod config;
mod errors;
mod evaluator;
mod loader;
mod pattern;
mod response;
mod rules;
mod traits;
mod validator;
mod validators;
mod value;
mod walker;

pub use config::{ConfigNode, ValidationConfig};
pub use errors::{ConfigError, Result};
pub use evaluator::{capitalize, evaluate_leaf};
pub use loader::{ConfigLoader, FileFormat};
pub use pattern::{EMAIL_PATTERN, PASSWORD_PATTERN, Pattern};
pub use response::{ErrorNode, ErrorTree, ValidationResponse};
pub use rules::*;
pub use traits::Validate;
pub use validator::{Validator, validate};
pub use validators::*;
pub use value::{Record, is_truthy};
