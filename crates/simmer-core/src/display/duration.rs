//! Countdown and duration formatting.

/// Formats seconds as `MM:SS`, with minutes padded to at least two digits.
///
/// ```rust
/// use simmer_core::display::format_clock;
///
/// assert_eq!(format_clock(0), "00:00");
/// assert_eq!(format_clock(59), "00:59");
/// assert_eq!(format_clock(6000), "100:00");
/// ```
pub fn format_clock(sec: u32) -> String {
    format!("{:02}:{:02}", sec / 60, sec % 60)
}

/// Formats seconds as `M:SS` for compact one-line views.
pub fn format_short_clock(sec: u32) -> String {
    format!("{}:{:02}", sec / 60, sec % 60)
}

/// Formats seconds as whole minutes, rounding partial minutes up.
pub fn format_minutes(sec: u32) -> String {
    format!("{} min", sec.div_ceil(60))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(5), "00:05");
        assert_eq!(format_clock(60), "01:00");
        assert_eq!(format_clock(3599), "59:59");
        assert_eq!(format_clock(3600), "60:00");
    }

    #[test]
    fn test_format_short_clock() {
        assert_eq!(format_short_clock(45), "0:45");
        assert_eq!(format_short_clock(605), "10:05");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "0 min");
        assert_eq!(format_minutes(60), "1 min");
        assert_eq!(format_minutes(61), "2 min");
    }
}
