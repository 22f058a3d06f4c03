//! Error types for the list card.
//!
//! This module defines the centralized error type [`CardError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for list card operations.
///
/// This enum consolidates all error conditions that can occur while configuring
/// or rendering a card. Configuration and template errors are raised before any
/// card state is committed; decode and resolution errors are raised during a
/// render pass and propagate to the host unhandled, since no meaningful content
/// can be displayed in their presence.
///
/// # Examples
///
/// ```
/// use listcard::CardError;
///
/// fn validate_config() -> Result<(), CardError> {
///     Err(CardError::Config("missing required field 'entity'".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum CardError {
    /// Configuration is invalid or missing a required field.
    ///
    /// Raised by `set_config` before any field of the previous configuration is
    /// replaced. The string names the offending field.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Item template compilation failed.
    ///
    /// Raised at configuration time, never during a render. The string contains
    /// the offending template fragment and a description of the problem.
    #[error("Template error: {0}")]
    Template(String),

    /// A textual state value could not be parsed as JSON.
    ///
    /// Occurs during a render pass when the decode format is `"json"` and the
    /// resolved value is malformed. Automatically converts from
    /// `serde_json::Error` using the `#[from]` attribute.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured entity id is absent from the state snapshot.
    ///
    /// The host guarantees the entity exists whenever state is pushed after a
    /// successful configuration, so this indicates a contract violation on the
    /// host side.
    #[error("Unknown entity: {0}")]
    UnknownEntity(String),

    /// The decoded value cannot form an item sequence.
    ///
    /// Occurs when decoding leaves a non-array value, for example a bare string
    /// combined with an empty decode format.
    #[error("Resolved value is not a sequence of items")]
    NotASequence,

    /// Theme or style fragment parsing failed.
    ///
    /// The string contains a description of what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Only raised by the reference host when reading configuration, snapshot,
    /// or theme files. Automatically converts from `std::io::Error`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for list card operations.
///
/// This is a type alias for `std::result::Result<T, CardError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, CardError>;
