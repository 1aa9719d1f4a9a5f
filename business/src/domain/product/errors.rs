/// A single field-level constraint violation collected during product
/// construction. Kept structured so callers can log the exact fields that
/// failed instead of a single opaque message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    /// One of the required fields was absent or empty on create.
    #[error("product.missing_fields")]
    MissingFields,
    /// Field-level constraint violations (length bounds, numeric bounds,
    /// category membership).
    #[error("product.invalid")]
    Invalid(Vec<FieldViolation>),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
