//! Error types for the work-time criteria engine.
//!
//! Validation outcomes of the wizard (a blocked step, a pending rollover
//! confirmation) are ordinary values, not errors. The variants here cover
//! misuse of the wizard API and infrastructure failures.

use thiserror::Error;

use crate::models::Category;

/// The main error type for the work-time criteria engine.
///
/// # Example
///
/// ```
/// use worktime_criteria::error::CriteriaError;
///
/// let error = CriteriaError::InvalidTimeFormat {
///     value: "25:00".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time '25:00': expected HH:MM");
/// ```
#[derive(Debug, Error)]
pub enum CriteriaError {
    /// A wall-clock value did not match `HH:MM` with a valid hour and minute.
    #[error("Invalid time '{value}': expected HH:MM")]
    InvalidTimeFormat {
        /// The text that failed to parse.
        value: String,
    },

    /// A value is not one of the enumerated options for a setting.
    #[error("Invalid {option}: {value}")]
    InvalidOption {
        /// The setting being parsed.
        option: &'static str,
        /// The rejected value.
        value: String,
    },

    /// The requested wizard action is not allowed in the current state.
    #[error("Cannot {action} while the wizard is {state}")]
    InvalidTransition {
        /// The action that was attempted.
        action: &'static str,
        /// The wizard state at the time of the attempt.
        state: String,
    },

    /// A section editor was used for a category that is not selected.
    #[error("Category '{category}' is not enabled")]
    CategoryDisabled {
        /// The disabled category.
        category: Category,
    },

    /// The draft can no longer be edited in the current state.
    #[error("Draft is frozen while the wizard is {state}")]
    DraftFrozen {
        /// The wizard state at the time of the attempt.
        state: String,
    },

    /// No criteria with the given id exists in the registry.
    #[error("Criteria not found: {id}")]
    CriteriaNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// A record with the same id is already registered.
    #[error("Criteria id already registered: {id}")]
    DuplicateCriteriaId {
        /// The conflicting id.
        id: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return CriteriaError.
pub type CriteriaResult<T> = Result<T, CriteriaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_time_format_displays_value() {
        let error = CriteriaError::InvalidTimeFormat {
            value: "7:5".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid time '7:5': expected HH:MM");
    }

    #[test]
    fn test_invalid_transition_displays_action_and_state() {
        let error = CriteriaError::InvalidTransition {
            action: "commit",
            state: "on step 2".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Cannot commit while the wizard is on step 2"
        );
    }

    #[test]
    fn test_category_disabled_displays_category() {
        let error = CriteriaError::CategoryDisabled {
            category: Category::Night,
        };
        assert_eq!(error.to_string(), "Category 'night' is not enabled");
    }

    #[test]
    fn test_criteria_not_found_displays_id() {
        let error = CriteriaError::CriteriaNotFound {
            id: "missing".to_string(),
        };
        assert_eq!(error.to_string(), "Criteria not found: missing");
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = CriteriaError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<CriteriaError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> CriteriaResult<()> {
            Err(CriteriaError::CriteriaNotFound {
                id: "x".to_string(),
            })
        }

        fn propagates_error() -> CriteriaResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
