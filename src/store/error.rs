//! Store-specific error types.

use crate::model::{CompanyId, FiscalYearId};
use crate::validation::FieldErrors;

/// Errors that can occur during store operations. A failed operation leaves
/// the store untouched.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Submitted fields failed validation
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// Company not found in store
    #[error("Company not found: {id}")]
    CompanyNotFound { id: CompanyId },

    /// Fiscal year not found for the company
    #[error("Fiscal year not found: {id}")]
    FiscalYearNotFound { id: FiscalYearId },

    /// Operation needs an active company
    #[error("No company selected")]
    NoActiveCompany,

    /// The highest id is already taken
    #[error("No {kind} id left to assign")]
    IdsExhausted { kind: &'static str },
}

impl StoreError {
    /// Returns the field errors if this is a validation failure.
    ///
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            StoreError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
