use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type GeometryResult<T> = Result<T, GeometryError>;

/// Error taxonomy for sight-line geometry.
///
/// All variants describe properties of the inputs, not transient faults, so
/// nothing here is retried or recovered internally; errors surface to the
/// caller immediately.
#[derive(Debug, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GeometryError {
    /// A precondition on the input vectors is violated (non-unit direction,
    /// zero-length observer-to-target vector).
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// The closest-approach vector has zero magnitude, so its spherical
    /// decomposition is undefined (the sight line passes through the target
    /// center).
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// A provider implementation failed (missing ephemeris coverage, unknown
    /// frame, unparseable clock string).
    ///
    /// Deliberately unstructured since provider error shapes vary widely;
    /// add dedicated variants if richer context becomes necessary.
    #[error("Provider error: {message}")]
    Provider { message: String },
}

impl GeometryError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }
}
