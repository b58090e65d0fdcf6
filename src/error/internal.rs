use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse an id from String
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A stored signup status did not match any known variant.
    ///
    /// Stored rows are written exclusively through the service layer, so an
    /// unknown status indicates data corruption or a missed migration.
    #[error("Unknown signup status '{0}' stored in database")]
    UnknownSignupStatus(String),

    /// A stored availability value did not match any known variant.
    #[error("Unknown availability '{0}' stored in database")]
    UnknownAvailability(String),

    /// A stored weekday or hour was outside its valid range.
    #[error("Stored slot ({weekday}, {hour}) outside the weekly grid")]
    SlotOutOfRange {
        /// Stored weekday value (expected 0..=6).
        weekday: i32,
        /// Stored hour value (expected 0..=23).
        hour: i32,
    },

    /// A stored preference value was not valid JSON.
    #[error("Preference '{key}' holds malformed JSON: {source}")]
    MalformedPreference {
        /// Preference key whose value failed to parse.
        key: String,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}
