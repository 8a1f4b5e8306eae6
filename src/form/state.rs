//! Form State
//!
//! Locally-owned editing state: the field values plus which fields the user
//! has touched. Operations take the state by value and hand it back, so the
//! caller owns every version and nothing is shared or mutated behind its back.

use std::collections::BTreeSet;

use super::fields::{Field, FormFields};
use crate::validation::ValidationResult;

/// Editing state of a single form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState<F> {
    fields: F,
    touched: BTreeSet<Field>,
    submitted: bool,
}

impl<F: FormFields> FormState<F> {
    pub fn new(fields: F) -> Self {
        Self {
            fields,
            touched: BTreeSet::new(),
            submitted: false,
        }
    }

    pub fn fields(&self) -> &F {
        &self.fields
    }

    pub fn into_fields(self) -> F {
        self.fields
    }

    /// Set a field's value. Fields outside the form are ignored.
    pub fn with_value(mut self, field: Field, value: impl Into<String>) -> Self {
        if !self.fields.set_value(field, value.into()) {
            log::debug!("Ignoring value for field '{}' outside the form", field);
        }
        self
    }

    /// Mark a field as touched (typically on blur)
    pub fn touch(mut self, field: Field) -> Self {
        if F::FIELDS.contains(&field) {
            self.touched.insert(field);
        }
        self
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Full validation of the current values
    pub fn validate(&self) -> ValidationResult {
        self.fields.validate()
    }

    /// Errors the user should currently see: touched fields only until the
    /// form has been submitted once, every field afterwards.
    pub fn visible_errors(&self) -> ValidationResult {
        let mut result = self.validate();
        if !self.submitted {
            result.retain(|field| self.touched.contains(&field));
        }
        result
    }

    /// Attempt a submission. Marks every field as touched and returns the
    /// full validation result; the caller submits only if it is valid.
    pub fn submit(mut self) -> (Self, ValidationResult) {
        self.submitted = true;
        self.touched.extend(F::FIELDS.iter().copied());
        let result = self.validate();
        (self, result)
    }
}
