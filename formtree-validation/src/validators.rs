// Built-in leaf checkers
//
// Each checker returns `Err(default_message)` on failure. Every checker except
// `Required` passes falsy values.

use crate::pattern::{EMAIL_PATTERN, PASSWORD_PATTERN, Pattern};
use crate::value::{char_length, is_truthy, numeric, string_form};
use serde_json::Value;

/// Validates that a value is present
pub struct Required;

impl Required {
    pub fn check(value: &Value) -> Result<(), String> {
        if is_truthy(value) {
            Ok(())
        } else {
            Err("is required".to_string())
        }
    }
}

/// Validates minimum string length
pub struct MinLength(pub usize);

impl MinLength {
    pub fn check(&self, value: &Value) -> Result<(), String> {
        match char_length(value) {
            Some(len) if is_truthy(value) && len < self.0 => Err(format!(
                "must be at least {} characters in length",
                self.0
            )),
            _ => Ok(()),
        }
    }
}

/// Validates maximum string length
pub struct MaxLength(pub usize);

impl MaxLength {
    pub fn check(&self, value: &Value) -> Result<(), String> {
        match char_length(value) {
            // The message names the first length that is too long.
            Some(len) if is_truthy(value) && len > self.0 => Err(format!(
                "must be less than {} characters in length",
                self.0.saturating_add(1)
            )),
            _ => Ok(()),
        }
    }
}

/// Validates minimum numeric value
pub struct MinValue(pub f64);

impl MinValue {
    pub fn check(&self, value: &Value) -> Result<(), String> {
        match numeric(value) {
            Some(n) if is_truthy(value) && n < self.0 => {
                Err(format!("must be at least {} in value", self.0))
            }
            _ => Ok(()),
        }
    }
}

/// Validates maximum numeric value
pub struct MaxValue(pub f64);

impl MaxValue {
    pub fn check(&self, value: &Value) -> Result<(), String> {
        match numeric(value) {
            Some(n) if is_truthy(value) && n > self.0 => {
                Err(format!("must be less than {} in value", self.0))
            }
            _ => Ok(()),
        }
    }
}

/// Validates email format
pub struct IsEmail;

impl IsEmail {
    pub fn check(value: &Value) -> Result<(), String> {
        if is_truthy(value) && !EMAIL_PATTERN.is_match(&string_form(value).to_lowercase()) {
            Err("is not a valid email address".to_string())
        } else {
            Ok(())
        }
    }
}

/// Validates password shape against an optional replacement pattern
pub struct IsPassword<'a>(pub Option<&'a Pattern>);

impl IsPassword<'_> {
    pub fn check(&self, value: &Value) -> Result<(), String> {
        let pattern = self.0.unwrap_or(&*PASSWORD_PATTERN);
        if is_truthy(value) && !pattern.is_match(&string_form(value)) {
            Err("must contain 1 special character and 1 number".to_string())
        } else {
            Ok(())
        }
    }
}

/// Custom pattern validator
pub struct Matches<'a>(pub &'a Pattern);

impl Matches<'_> {
    pub fn check(&self, value: &Value) -> Result<(), String> {
        if is_truthy(value) && !self.0.is_match(&string_form(value)) {
            Err(format!(
                "input value does not conform to pattern: {}",
                self.0
            ))
        } else {
            Ok(())
        }
    }
}
