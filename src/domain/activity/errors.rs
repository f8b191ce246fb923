//! Activity Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("Activity not found: {0}")]
    NotFound(String),

    #[error("Activity is at maximum capacity")]
    AtCapacity,

    #[error("Student is already signed up")]
    AlreadySignedUp,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,

    #[error("max_participants must be positive")]
    InvalidCapacity,
}
