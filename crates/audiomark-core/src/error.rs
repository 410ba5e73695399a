//! Error taxonomy for the localization pipeline
//!
//! All failures are deterministic for a given input, so no variant is
//! retryable; skip/retry policy belongs to the batch driver.

use thiserror::Error;

/// Errors produced by the watermark localization pipeline
#[derive(Debug, Error)]
pub enum LocateError {
    /// A signal buffer must hold at least one sample
    #[error("signal buffer is empty")]
    EmptySignal,

    /// Sample rates are positive integers (samples per second)
    #[error("invalid sample rate: {0}")]
    InvalidSampleRate(u32),

    /// A buffer has zero variance (e.g. digital silence) and cannot be
    /// normalized to unit variance
    #[error("degenerate signal: zero variance over {len} samples")]
    DegenerateSignal { len: usize },

    /// Correlation is undefined when the segment is shorter than the
    /// watermark
    #[error("segment ({segment} samples) is shorter than watermark ({watermark} samples)")]
    InsufficientLength { segment: usize, watermark: usize },

    /// Watermark and segment must share one sample rate
    #[error("sample rate mismatch: watermark {watermark} Hz vs segment {segment} Hz")]
    SampleRateMismatch { watermark: u32, segment: u32 },

    /// Configuration failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Audio source collaborator could not decode an input file
    #[error("failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },
}
