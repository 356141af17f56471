//! Error types for the fallible vector APIs

use crate::BackendType;

/// Result type alias
pub type Result<T> = core::result::Result<T, Error>;

/// Errors returned by the checked (`try_*`) vector operations
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A slice did not hold enough lanes to fill or receive the vector
    #[error("slice too short: need {required} lanes, got {actual}")]
    SliceTooShort {
        /// Lanes needed by the vector
        required: usize,
        /// Lanes available in the slice
        actual: usize,
    },

    /// A register holds a lane that is neither all-ones nor all-zeros
    #[error("register {register} is not a valid mask")]
    NotAMask {
        /// Index of the first offending native register
        register: usize,
    },

    /// A backend name could not be parsed
    #[error("unknown backend")]
    UnknownBackend,

    /// The backend is not compiled into this build
    #[error("backend {0} is not available in this build")]
    BackendUnavailable(BackendType),
}
