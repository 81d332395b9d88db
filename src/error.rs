//! Error types for encoder construction.
//!
//! Construction errors are fatal: the encoder is never created and no events
//! are ever emitted. Runtime sample noise is not an error condition; samples
//! that match no valid transition are silently dropped by the decoder.

use thiserror::Error;

/// Errors that abort encoder construction.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum ConfigError {
    /// The resolved steps-per-period value does not reduce to a supported
    /// full-, half- or quarter-period ratio for the configured line count.
    #[error("'{0}' is not a valid steps-per-period value")]
    StepsPerPeriod(u32),

    /// Fewer than two sensor lines were supplied.
    #[error("not enough sensor lines found")]
    NotEnoughLines,
}
