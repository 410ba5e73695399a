//! Mono PCM signal buffer

use crate::error::LocateError;

/// A mono PCM sample sequence tagged with its sample rate.
///
/// Immutable once constructed; operations that rescale samples return a
/// new buffer instead of mutating in place.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalBuffer {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl SignalBuffer {
    /// Create a buffer from mono samples. The buffer must hold at least
    /// one sample and carry a positive sample rate.
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Result<Self, LocateError> {
        if samples.is_empty() {
            return Err(LocateError::EmptySignal);
        }
        if sample_rate == 0 {
            return Err(LocateError::InvalidSampleRate(sample_rate));
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Internal constructor for slices whose invariants the caller has
    /// already established.
    pub(crate) fn from_parts(samples: Vec<f32>, sample_rate: u32) -> Self {
        debug_assert!(!samples.is_empty());
        debug_assert!(sample_rate > 0);
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        // Never true for a constructed buffer
        self.samples.is_empty()
    }

    /// Duration in seconds
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}
