//! Domain validation errors for core domain types.
//!
//! These errors are returned when parsing the closed tag sets (dietary
//! preferences, difficulty, meal type) from user or config input.
//!
//! # Examples
//!
//! ```
//! use smartchef::domain::error::DomainError;
//! use smartchef::domain::DietaryPreference;
//!
//! let result = "carnivore".parse::<DietaryPreference>();
//! assert!(matches!(result, Err(DomainError::UnknownPreference { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain values cannot be constructed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The tag is not one of the fixed dietary preferences.
    #[error("unknown dietary preference '{value}'")]
    UnknownPreference {
        /// The rejected input.
        value: String,
    },

    /// The tag is not one of easy, medium, hard.
    #[error("unknown difficulty '{value}'")]
    UnknownDifficulty {
        /// The rejected input.
        value: String,
    },

    /// The tag is not a supported meal type.
    #[error("unknown meal type '{value}'")]
    UnknownMealType {
        /// The rejected input.
        value: String,
    },
}
