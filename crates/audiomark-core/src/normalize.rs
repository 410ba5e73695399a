//! Signal normalization
//!
//! Rescales a buffer to zero mean and unit variance before correlation, so
//! peak scores are comparable across recordings. Normalization is global
//! over the whole buffer, matching the production pipeline; it is not a
//! sliding-window normalized cross-correlation.

use crate::error::LocateError;
use crate::signal::SignalBuffer;

/// Return a new buffer with sample mean 0 and standard deviation 1.
///
/// Fails with [`LocateError::DegenerateSignal`] when the input has zero
/// variance (e.g. digital silence), which would otherwise produce NaNs.
pub fn normalize(signal: &SignalBuffer) -> Result<SignalBuffer, LocateError> {
    let samples = signal.samples();
    let n = samples.len() as f64;

    // Accumulate in f64 to keep the statistics stable on long buffers
    let mean = samples.iter().map(|&s| s as f64).sum::<f64>() / n;
    let variance = samples
        .iter()
        .map(|&s| {
            let d = s as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;

    if variance == 0.0 {
        return Err(LocateError::DegenerateSignal {
            len: samples.len(),
        });
    }

    let std_dev = variance.sqrt();
    let normalized = samples
        .iter()
        .map(|&s| ((s as f64 - mean) / std_dev) as f32)
        .collect();

    Ok(SignalBuffer::from_parts(normalized, signal.sample_rate()))
}
