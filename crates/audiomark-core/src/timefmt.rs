//! Timestamp rendering for result tables

/// Render a time in seconds as `HH:MM:SS.s`.
///
/// Negative inputs (a candidate lag pointing before the segment start)
/// saturate to zero.
pub fn format_timestamp(secs: f64) -> String {
    let secs = secs.max(0.0);
    let whole = secs as u64;
    let frac = secs - whole as f64;

    let hours = whole / 3600;
    let minutes = (whole % 3600) / 60;
    let seconds = (whole % 60) as f64 + frac;

    format!("{:02}:{:02}:{:04.1}", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(format_timestamp(0.0), "00:00:00.0");
    }

    #[test]
    fn test_sub_minute() {
        assert_eq!(format_timestamp(7.25), "00:00:07.2");
        assert_eq!(format_timestamp(59.5), "00:00:59.5");
    }

    #[test]
    fn test_minutes_and_hours() {
        assert_eq!(format_timestamp(65.0), "00:01:05.0");
        assert_eq!(format_timestamp(3600.0), "01:00:00.0");
        assert_eq!(format_timestamp(3600.0 + 12.0 * 60.0 + 3.4), "01:12:03.4");
    }

    #[test]
    fn test_negative_saturates() {
        assert_eq!(format_timestamp(-1.5), "00:00:00.0");
    }
}
