use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            ProductError::MissingFields => (
                StatusCode::BAD_REQUEST,
                "Please provide all required fields",
            ),
            // Constraint violations and persistence failures share the same
            // opaque response; the detail only goes to the log.
            ProductError::Invalid(_) | ProductError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;
    use business::domain::product::errors::FieldViolation;

    #[test]
    fn should_map_missing_fields_to_bad_request_with_source_message() {
        let (status, body) = ProductError::MissingFields.into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.error, "Please provide all required fields");
    }

    #[test]
    fn should_map_constraint_violations_to_opaque_internal_error() {
        let err = ProductError::Invalid(vec![FieldViolation::new(
            "category",
            "Invalid product category: furniture",
        )]);
        let (status, body) = err.into_error_response();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.error, "Internal server error");
    }

    #[test]
    fn should_map_repository_failures_to_opaque_internal_error() {
        for repo_err in [RepositoryError::Configuration, RepositoryError::Database] {
            let (status, body) = ProductError::Repository(repo_err).into_error_response();
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body.0.error, "Internal server error");
        }
    }
}
