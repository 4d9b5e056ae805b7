// formtree - configuration-driven validation of nested records
//
// This crate re-exports the rule engine and provides a prelude for the
// common entry points.

pub use formtree_validation::*;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ConfigError,
        ConfigLoader,
        ConfigNode,
        ErrorNode,
        ErrorTree,
        FileFormat,
        Pattern,
        Rule,
        RuleArgument,
        RuleConfig,
        RuleOverrides,
        Validate,
        ValidationConfig,
        ValidationResponse,
        Validator,
        validate,
    };
}
