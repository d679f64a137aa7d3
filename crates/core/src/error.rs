use crate::validation::FieldViolation;

/// Domain-level failures reported back to API callers.
///
/// The `Display` output of each variant is the exact message placed in the
/// response envelope.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The entity is missing or soft-deleted. `id` is the raw identifier as
    /// received, which may not even be numeric.
    #[error("{entity} doesn't exist.")]
    NotFound { entity: &'static str, id: String },

    /// A listing produced no active rows.
    #[error("No {}s found.", .entity.to_lowercase())]
    NoneFound { entity: &'static str },

    /// The first schema violation of a request payload.
    #[error("{}", .0.message)]
    Validation(FieldViolation),

    /// The request body carried no data at all.
    #[error("No data provided.")]
    EmptyPayload,

    /// The store accepted the write but returned no row.
    #[error("Can't add or update {} with given id.", .entity.to_lowercase())]
    PersistenceFailure { entity: &'static str },

    #[error("{0}")]
    Unauthorized(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_envelope_text() {
        let not_found = CoreError::NotFound {
            entity: "Project",
            id: "7".into(),
        };
        assert_eq!(not_found.to_string(), "Project doesn't exist.");

        let none = CoreError::NoneFound { entity: "Project" };
        assert_eq!(none.to_string(), "No projects found.");

        assert_eq!(CoreError::EmptyPayload.to_string(), "No data provided.");

        let failed = CoreError::PersistenceFailure { entity: "Project" };
        assert_eq!(
            failed.to_string(),
            "Can't add or update project with given id."
        );
    }

    #[test]
    fn validation_error_displays_violation_message() {
        let violation = FieldViolation {
            field: "name".into(),
            constraint: "not_blank",
            message: "This value should not be blank.".into(),
            parameters: serde_json::Map::new(),
        };
        let err = CoreError::Validation(violation);
        assert_eq!(err.to_string(), "This value should not be blank.");
    }
}
