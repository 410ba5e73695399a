//! Full linear cross-correlation via FFT convolution
//!
//! The correlation of a voice buffer `v` (length `n`) against a watermark
//! `w` (length `m`) is an array of `n + m - 1` values, one per integer
//! alignment of the watermark against the voice. Index `i` corresponds to
//! lag `i - (n - 1)`; the watermark start sample for index `i` is
//! `i - (m - 1)`, which ranges from `-(m - 1)` (watermark hanging off the
//! left edge) to `n - 1`.
//!
//! The FFT path runs in O((n+m) log(n+m)) and matches the direct
//! time-domain sum to within standard floating-point tolerance; the direct
//! path is kept as the reference implementation.

use rustfft::{num_complex::Complex, FftPlanner};

/// Compute the full cross-correlation of `voice` against `watermark`.
///
/// Output length is `voice.len() + watermark.len() - 1`. Computation is
/// FFT-based: both inputs are zero-padded to a power of two, multiplied as
/// `V * conj(W)` in the frequency domain, and rotated so that index 0
/// holds the most negative lag. A planner is created per call, so
/// concurrent correlations share no state.
pub fn cross_correlate(voice: &[f32], watermark: &[f32]) -> Vec<f64> {
    let n = voice.len();
    let m = watermark.len();
    let out_len = n + m - 1;
    let fft_len = out_len.next_power_of_two();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(fft_len);
    let ifft = planner.plan_fft_inverse(fft_len);

    // Prepare zero-padded signals
    let mut voice_fft: Vec<Complex<f64>> = voice
        .iter()
        .map(|&s| Complex::new(s as f64, 0.0))
        .collect();
    voice_fft.resize(fft_len, Complex::new(0.0, 0.0));

    let mut mark_fft: Vec<Complex<f64>> = watermark
        .iter()
        .map(|&s| Complex::new(s as f64, 0.0))
        .collect();
    mark_fft.resize(fft_len, Complex::new(0.0, 0.0));

    fft.process(&mut voice_fft);
    fft.process(&mut mark_fft);

    // Cross-power spectrum: V * conj(W)
    let mut spectrum: Vec<Complex<f64>> = voice_fft
        .iter()
        .zip(mark_fft.iter())
        .map(|(v, w)| v * w.conj())
        .collect();

    ifft.process(&mut spectrum);

    // The circular result holds the correlation at watermark start offset
    // `s` in slot `s mod fft_len` (negative offsets wrap to the top).
    // Rotate so that output index i holds start offset i - (m - 1).
    let scale = 1.0 / fft_len as f64;
    (0..out_len)
        .map(|i| {
            let slot = (i + fft_len - (m - 1)) % fft_len;
            spectrum[slot].re * scale
        })
        .collect()
}

/// Direct O(n*m) time-domain cross-correlation.
///
/// Same output layout as [`cross_correlate`]. Used as the numerical
/// reference for the FFT path; prefer the FFT path for anything longer
/// than a few thousand samples.
pub fn cross_correlate_direct(voice: &[f32], watermark: &[f32]) -> Vec<f64> {
    let n = voice.len() as i64;
    let m = watermark.len() as i64;
    let out_len = (n + m - 1) as usize;

    let mut corr = vec![0.0f64; out_len];
    for (i, out) in corr.iter_mut().enumerate() {
        // Watermark start offset within the voice for this output index
        let start = i as i64 - (m - 1);
        let t_lo = (-start).max(0);
        let t_hi = m.min(n - start);

        let mut sum = 0.0f64;
        for t in t_lo..t_hi {
            sum += watermark[t as usize] as f64 * voice[(t + start) as usize] as f64;
        }
        *out = sum;
    }
    corr
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_direct_matches_hand_computed_example() {
        let w = [1.0f32, 0.0, -1.0];
        let v = [0.0f32, 1.0, 0.0, -1.0, 0.0];

        let corr = cross_correlate_direct(&v, &w);
        let expected = [0.0, -1.0, 0.0, 2.0, 0.0, -1.0, 0.0];

        assert_eq!(corr.len(), expected.len());
        for (got, want) in corr.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*got, *want, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_fft_matches_direct() {
        let w = [1.0f32, 0.0, -1.0];
        let v = [0.0f32, 1.0, 0.0, -1.0, 0.0];

        let fft = cross_correlate(&v, &w);
        let direct = cross_correlate_direct(&v, &w);

        assert_eq!(fft.len(), direct.len());
        for (a, b) in fft.iter().zip(direct.iter()) {
            // 1e-6 relative error bound, absolute floor for near-zero bins
            let tol = 1e-6 * b.abs().max(1.0);
            assert!(
                (a - b).abs() < tol,
                "fft {} vs direct {} out of tolerance",
                a,
                b
            );
        }
    }

    #[test]
    fn test_fft_matches_direct_on_longer_signals() {
        let v: Vec<f32> = (0..1024).map(|i| (i as f32 * 0.37).sin()).collect();
        let w: Vec<f32> = (0..100).map(|i| (i as f32 * 0.11).cos()).collect();

        let fft = cross_correlate(&v, &w);
        let direct = cross_correlate_direct(&v, &w);

        for (a, b) in fft.iter().zip(direct.iter()) {
            let tol = 1e-6 * b.abs().max(1.0);
            assert!((a - b).abs() < tol);
        }
    }

    #[test]
    fn test_output_length() {
        let v = vec![0.5f32; 17];
        let w = vec![0.25f32; 5];
        assert_eq!(cross_correlate(&v, &w).len(), 21);
        assert_eq!(cross_correlate_direct(&v, &w).len(), 21);
    }

    #[test]
    fn test_self_correlation_peaks_at_lag_zero() {
        // For equal-length buffers the lag-0 slot is the array center
        let v: Vec<f32> = (0..256).map(|i| (i as f32 * 0.21).sin()).collect();

        let corr = cross_correlate(&v, &v);
        let center = v.len() - 1;

        let max_val = corr.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert_abs_diff_eq!(corr[center], max_val, epsilon = 1e-9);
    }

    #[test]
    fn test_single_sample_signals() {
        let corr = cross_correlate(&[5.0], &[3.0]);
        assert_eq!(corr.len(), 1);
        assert_abs_diff_eq!(corr[0], 15.0, epsilon = 1e-9);
    }
}
