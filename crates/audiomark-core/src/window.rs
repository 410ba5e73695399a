//! Edge-window extraction for long recordings
//!
//! Batch drivers do not correlate a watermark against a whole recording:
//! intro jingles live near the start and outro jingles near the end, so
//! each recording is sliced into a leading "welcome" window and a trailing
//! "goodbye" window before localization. The production defaults skip the
//! first/last five seconds and keep fifteen minutes at each edge.

use crate::signal::SignalBuffer;
use serde::{Deserialize, Serialize};

/// Window geometry, in seconds from the nearest recording edge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Seconds discarded at the very edge of the recording
    pub edge_skip_secs: f64,
    /// Seconds from the edge at which the window ends
    pub window_secs: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            edge_skip_secs: 5.0,
            window_secs: 15.0 * 60.0,
        }
    }
}

/// Leading window: samples in `[edge_skip, window_secs)` from the start,
/// clamped to the recording. Short recordings yield whatever remains after
/// the skip; never an empty buffer.
pub fn leading_window(recording: &SignalBuffer, config: &WindowConfig) -> SignalBuffer {
    let sr = recording.sample_rate() as f64;
    let len = recording.len();

    let start = ((config.edge_skip_secs * sr) as usize).min(len - 1);
    let end = ((config.window_secs * sr) as usize).clamp(start + 1, len);

    SignalBuffer::from_parts(
        recording.samples()[start..end].to_vec(),
        recording.sample_rate(),
    )
}

/// Trailing window: samples in `[len - window_secs, len - edge_skip)`,
/// clamped to the recording.
pub fn trailing_window(recording: &SignalBuffer, config: &WindowConfig) -> SignalBuffer {
    let sr = recording.sample_rate() as f64;
    let len = recording.len();

    let end = len.saturating_sub((config.edge_skip_secs * sr) as usize).max(1);
    let start = len.saturating_sub((config.window_secs * sr) as usize).min(end - 1);

    SignalBuffer::from_parts(
        recording.samples()[start..end].to_vec(),
        recording.sample_rate(),
    )
}

/// Absolute time of the trailing window's first sample.
///
/// Candidate start times found inside the trailing window are relative to
/// that window; adding this offset maps them back to the full recording.
pub fn trailing_window_offset_secs(recording: &SignalBuffer, config: &WindowConfig) -> f64 {
    let sr = recording.sample_rate() as f64;
    let len = recording.len();

    let end = len.saturating_sub((config.edge_skip_secs * sr) as usize).max(1);
    let start = len.saturating_sub((config.window_secs * sr) as usize).min(end - 1);

    start as f64 / sr
}
