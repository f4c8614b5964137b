//! Error types for design-matrix construction

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, DesignError>;

/// Errors that can occur while building or normalizing design matrices
#[derive(Error, Debug)]
pub enum DesignError {
    /// Requested normalization axis does not exist on the input array
    #[error("axis {axis} is out of bounds for a {ndim}-dimensional array")]
    InvalidAxis { axis: usize, ndim: usize },

    /// Stimulus design covers zero time points
    #[error("stimulus design has no time points")]
    EmptyDesign,

    /// An event onset lies past the end of the run
    #[error("onset {onset} is out of range for condition '{condition}' ({timepoints} time points)")]
    OnsetOutOfRange {
        condition: String,
        onset: usize,
        timepoints: usize,
    },

    /// Amplitude list does not line up with the onset list
    #[error("condition '{condition}' has {onsets} onsets but {amplitudes} amplitudes")]
    AmplitudeMismatch {
        condition: String,
        onsets: usize,
        amplitudes: usize,
    },
}
