//! Audiomark Core - Audio Watermark Localization Library
//!
//! This crate locates occurrences of a short reference clip (a "watermark",
//! e.g. a spoken intro/outro jingle) inside a much longer recording and
//! returns the most likely start timestamps.

pub mod config;
pub mod correlate;
pub mod error;
pub mod locate;
pub mod normalize;
pub mod peaks;
pub mod signal;
pub mod source;
pub mod timefmt;
pub mod window;

pub use config::LocatorConfig;
pub use error::LocateError;
pub use locate::WatermarkLocator;
pub use normalize::normalize;
pub use peaks::{Candidate, PeakExtractor};
pub use signal::SignalBuffer;
pub use source::AudioSource;
pub use timefmt::format_timestamp;
pub use window::{leading_window, trailing_window, trailing_window_offset_secs, WindowConfig};

/// Locate watermark start times in a recording segment
pub fn locate_watermark(
    watermark: &SignalBuffer,
    segment: &SignalBuffer,
    config: &LocatorConfig,
) -> Result<Vec<f64>, LocateError> {
    // Validate configuration
    config.validate()?;

    // Run the locator pipeline: normalize -> correlate -> extract peaks
    let locator = WatermarkLocator::new(config.clone());
    locator.locate(watermark, segment)
}
