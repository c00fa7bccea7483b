//! Error types for the sampling and color helpers

use bevy::color::HexColorError;
use thiserror::Error;

/// Errors returned by the random selection helpers.
///
/// Every variant is reported before the input is touched, so a failed call
/// never leaves a slice partially shuffled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SamplingError {
    /// The collection has no element to pick from
    #[error("cannot pick from an empty collection")]
    EmptyCollection,

    /// Values and weights are parallel sequences of different length
    #[error("{values} values were given with {weights} weights")]
    LengthMismatch { values: usize, weights: usize },

    /// The weights add up to zero, so no value is reachable
    #[error("total weight must be greater than zero")]
    InvalidWeight,
}

/// Errors returned by the color helpers.
#[derive(Error, Debug)]
pub enum ColorError {
    #[error("\"{input}\" is not a valid hexadecimal color")]
    InvalidHex {
        input: String,
        #[source]
        source: HexColorError,
    },
}

/// Result type for sampling operations
pub type SamplingResult<T> = std::result::Result<T, SamplingError>;
