//! Per-command request validation
//!
//! A [`Schema`] runs every field validator of a command, collecting all
//! field violations before deciding whether the request may proceed.

use std::collections::BTreeMap;

use crate::error::ValidationError;
use crate::validation::fields::{self, LimitError};

/// Collects the outcome of each field of one request
#[derive(Debug, Default)]
pub struct Schema {
    fields: BTreeMap<String, Vec<String>>,
    request: Option<String>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a required field; `None` if it was rejected
    pub fn required<T>(&mut self, field: &str, outcome: Result<T, String>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(message) => {
                self.reject(field, message);
                None
            }
        }
    }

    /// Record an optional field
    ///
    /// Absent input gives `Some(None)`; rejected input gives `None`.
    pub fn optional<R, T>(
        &mut self,
        field: &str,
        raw: Option<R>,
        check: impl FnOnce(R) -> Result<T, String>,
    ) -> Option<Option<T>> {
        match raw {
            None => Some(None),
            Some(raw) => self.required(field, check(raw)).map(Some),
        }
    }

    /// Record the optional `limit` field
    pub fn limit(&mut self, raw: Option<&str>) -> Option<Option<u64>> {
        let raw = match raw {
            None => return Some(None),
            Some(raw) => raw,
        };

        match fields::limit(raw) {
            Ok(limit) => Some(Some(limit)),
            Err(LimitError::Field(message)) => {
                self.reject("limit", message);
                None
            }
            Err(LimitError::Request(message)) => {
                self.request.get_or_insert(message);
                None
            }
        }
    }

    /// Add a violation for `field`
    pub fn reject(&mut self, field: &str, message: String) {
        self.fields.entry(field.to_string()).or_default().push(message);
    }

    /// Whether nothing has been rejected so far
    pub fn is_valid(&self) -> bool {
        self.fields.is_empty() && self.request.is_none()
    }

    /// Finish validation, building the request from the recorded values
    ///
    /// Field violations win over a request-level error.
    pub fn finish<T>(self, build: impl FnOnce() -> Option<T>) -> Result<T, ValidationError> {
        if !self.fields.is_empty() {
            return Err(ValidationError::Fields(self.fields));
        }
        if let Some(message) = self.request {
            return Err(ValidationError::Request(message));
        }
        build().ok_or_else(|| ValidationError::Request("Invalid request.".to_string()))
    }
}
