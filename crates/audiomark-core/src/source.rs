//! Audio source collaborator interface
//!
//! Decoding arbitrary audio/video containers is outside this crate; batch
//! drivers plug in their own decoder behind this trait. Implementations
//! must deliver mono PCM at the requested rate.

use crate::error::LocateError;
use crate::signal::SignalBuffer;
use std::path::Path;

/// Supplies decoded, resampled mono audio for localization.
pub trait AudioSource {
    /// Decode `path` to mono PCM at `target_sample_rate`.
    ///
    /// Unreadable or corrupt input must fail with [`LocateError::Decode`].
    fn load(&self, path: &Path, target_sample_rate: u32)
        -> Result<SignalBuffer, LocateError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LocatorConfig;
    use crate::locate::WatermarkLocator;

    /// In-memory source standing in for a real decoder
    struct SineSource;

    impl AudioSource for SineSource {
        fn load(
            &self,
            path: &Path,
            target_sample_rate: u32,
        ) -> Result<SignalBuffer, LocateError> {
            if path.extension().is_none() {
                return Err(LocateError::Decode {
                    path: path.display().to_string(),
                    reason: "unrecognized container".to_string(),
                });
            }
            let samples = (0..target_sample_rate as usize)
                .map(|i| (i as f32 * 0.05).sin())
                .collect();
            SignalBuffer::new(samples, target_sample_rate)
        }
    }

    #[test]
    fn test_source_feeds_locator() {
        let source = SineSource;
        let segment = source.load(Path::new("case.mp4"), 8000).unwrap();
        assert_eq!(segment.sample_rate(), 8000);

        let watermark =
            SignalBuffer::new(segment.samples()[100..300].to_vec(), 8000).unwrap();
        let locator = WatermarkLocator::new(LocatorConfig::default());
        let times = locator.locate(&watermark, &segment).unwrap();
        assert_eq!(times.len(), 2);
    }

    #[test]
    fn test_decode_error_surfaces() {
        let source = SineSource;
        let result = source.load(Path::new("unreadable"), 8000);
        assert!(matches!(result, Err(LocateError::Decode { .. })));
    }
}
