//! Greedy top-k peak extraction with overlap suppression
//!
//! Repeatedly takes the current global maximum of a correlation array and
//! zeroes a window of one watermark length on each side of it, so the same
//! physical occurrence cannot be selected twice. The selection is greedy
//! and locally best: a true peak inside a suppressed window is permanently
//! lost. Two occurrences closer together than one watermark length cannot
//! both be found; the batch pipeline is designed around this behavior.

use serde::{Deserialize, Serialize};

/// One extracted correlation peak.
///
/// Candidates are ordered by extraction order: the first is the highest
/// value remaining at the time of extraction, which is not necessarily a
/// globally descending score ordering once suppression zones overlap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Integer lag of the peak, `index - (voice_len - 1)`
    pub lag: i64,
    /// Correlation value at the peak before suppression
    pub score: f64,
    /// Candidate watermark start within the voice, in seconds;
    /// `(lag + voice_len - watermark_len) / sample_rate`
    pub start_time: f64,
}

/// Extracts the top-k peaks from a correlation array
pub struct PeakExtractor {
    watermark_len: usize,
    voice_len: usize,
    sample_rate: u32,
}

impl PeakExtractor {
    pub fn new(watermark_len: usize, voice_len: usize, sample_rate: u32) -> Self {
        Self {
            watermark_len,
            voice_len,
            sample_rate,
        }
    }

    /// Run the greedy extraction loop over an owned correlation array.
    ///
    /// Takes the array by value: entries are zeroed as peaks are selected
    /// and the array is dropped afterward, so a caller can never observe
    /// or reuse the mutated scratch space. Returns `min(top_k, len)`
    /// candidates; when `top_k` exceeds the number of distinct peak
    /// regions the remaining candidates come from residual zero regions.
    pub fn extract(&self, mut corr: Vec<f64>, top_k: usize) -> Vec<Candidate> {
        let len = corr.len();
        let m = self.watermark_len;
        let rounds = top_k.min(len);

        let mut candidates = Vec::with_capacity(rounds);
        for round in 0..rounds {
            let (idx, score) = argmax(&corr);

            let lag = idx as i64 - (self.voice_len as i64 - 1);
            let start_sample = lag + self.voice_len as i64 - m as i64;
            let start_time = start_sample as f64 / self.sample_rate as f64;

            log::trace!(
                "peak {}: index {}, score {:.4}, start {:.3}s",
                round,
                idx,
                score,
                start_time
            );

            candidates.push(Candidate {
                lag,
                score,
                start_time,
            });

            // Suppress one watermark length on each side, clamped to bounds
            let lo = idx.saturating_sub(m);
            let hi = (idx + m).min(len);
            for value in &mut corr[lo..hi] {
                *value = 0.0;
            }
        }

        candidates
    }
}

/// Index and value of the first-seen maximum
fn argmax(values: &[f64]) -> (usize, f64) {
    let mut max_idx = 0;
    let mut max_val = f64::NEG_INFINITY;

    for (i, &val) in values.iter().enumerate() {
        if val > max_val {
            max_val = val;
            max_idx = i;
        }
    }

    (max_idx, max_val)
}
