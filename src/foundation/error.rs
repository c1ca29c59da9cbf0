use crate::notation::duration::Beats;

/// Convenience result type used across stave.
pub type StaveResult<T> = Result<T, StaveError>;

/// Top-level error taxonomy used by layout and rendering APIs.
#[derive(thiserror::Error, Debug)]
pub enum StaveError {
    /// The notes ask for more beats than the measure holds.
    #[error("too many beats: {requested} requested, measure holds {capacity}")]
    TooManyBeats {
        /// Running total at the point the measure overflowed.
        requested: Beats,
        /// Measure length in quarter notes.
        capacity: Beats,
    },

    /// The notes leave part of the measure unfilled.
    #[error("not enough beats: {provided} provided, measure holds {capacity}")]
    NotEnoughBeats {
        /// Total duration of all notes.
        provided: Beats,
        /// Measure length in quarter notes.
        capacity: Beats,
    },

    /// A note that cannot be placed: unknown name or non-positive duration.
    #[error("invalid note: {0}")]
    InvalidNote(String),

    /// Invalid user-provided parameters (time signature, color, render options).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StaveError {
    /// Build a [`StaveError::InvalidNote`] value.
    pub fn invalid_note(msg: impl Into<String>) -> Self {
        Self::InvalidNote(msg.into())
    }

    /// Build a [`StaveError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StaveError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// True for the two measure-fill failures.
    pub fn is_fill_error(&self) -> bool {
        matches!(
            self,
            Self::TooManyBeats { .. } | Self::NotEnoughBeats { .. }
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
