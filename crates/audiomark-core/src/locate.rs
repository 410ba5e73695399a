//! Watermark locator
//!
//! Orchestrates the pipeline for one watermark against one audio segment:
//! normalize both buffers, cross-correlate, extract the top-k peaks and
//! map each to a start time in seconds relative to the segment start.

use crate::config::LocatorConfig;
use crate::correlate::cross_correlate;
use crate::error::LocateError;
use crate::normalize::normalize;
use crate::peaks::{Candidate, PeakExtractor};
use crate::signal::SignalBuffer;


/// Locates candidate watermark start times within audio segments
pub struct WatermarkLocator {
    config: LocatorConfig,
}

impl WatermarkLocator {
    pub fn new(config: LocatorConfig) -> Self {
        Self { config }
    }

    /// Candidate start times in seconds, in extraction order.
    ///
    /// Scores are discarded; results are not re-ranked, so the sequence
    /// follows the greedy extraction order rather than a guaranteed
    /// descending score order.
    pub fn locate(
        &self,
        watermark: &SignalBuffer,
        segment: &SignalBuffer,
    ) -> Result<Vec<f64>, LocateError> {
        let candidates = self.locate_candidates(watermark, segment)?;
        Ok(candidates.into_iter().map(|c| c.start_time).collect())
    }

    /// Full candidates, with lags and correlation scores.
    pub fn locate_candidates(
        &self,
        watermark: &SignalBuffer,
        segment: &SignalBuffer,
    ) -> Result<Vec<Candidate>, LocateError> {
        if watermark.sample_rate() != segment.sample_rate() {
            return Err(LocateError::SampleRateMismatch {
                watermark: watermark.sample_rate(),
                segment: segment.sample_rate(),
            });
        }
        if segment.len() < watermark.len() {
            return Err(LocateError::InsufficientLength {
                segment: segment.len(),
                watermark: watermark.len(),
            });
        }

        // Normalize each buffer by its own global mean and variance
        let watermark_norm = normalize(watermark)?;
        let segment_norm = normalize(segment)?;

        let corr = cross_correlate(segment_norm.samples(), watermark_norm.samples());

        log::debug!(
            "correlated {} segment samples against {} watermark samples ({} lags)",
            segment.len(),
            watermark.len(),
            corr.len()
        );

        // The extractor owns the correlation array; it is zeroed in place
        // during extraction and dropped afterward
        let extractor =
            PeakExtractor::new(watermark.len(), segment.len(), segment.sample_rate());
        let candidates = extractor.extract(corr, self.config.top_k);

        log::debug!(
            "extracted {} candidates: {:?}",
            candidates.len(),
            candidates
                .iter()
                .map(|c| c.start_time)
                .collect::<Vec<_>>()
        );

        Ok(candidates)
    }
}
