use chrono::Utc;

/// Current wall-clock time as fractional epoch seconds.
///
/// Matches the `time.time()` style float the JSON bodies carry.
pub fn epoch_seconds() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_seconds_is_recent_and_fractional() {
        let now = epoch_seconds();
        // Sometime after 2024-01-01 and before 2100.
        assert!(now > 1_704_067_200.0);
        assert!(now < 4_102_444_800.0);
    }
}
