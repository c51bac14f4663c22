//! Round statistics and the derived metrics shown on the HUD and end screen.

use std::time::Duration;

/// Counters for one round. Every counter only ever increases.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Stats {
    pub elapsed: Duration,
    pub hits: u32,
    /// Every mouse-down, whether or not it hit anything
    pub clicks: u32,
    pub misses: u32,
}

impl Stats {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn lives_remaining(&self, lives: u32) -> u32 {
        lives.saturating_sub(self.misses)
    }

    /// Targets hit per second, see [`speed`]
    pub fn speed(&self) -> f64 {
        speed(self.hits, self.elapsed_secs())
    }

    /// Hit percentage, see [`accuracy`]
    pub fn accuracy(&self) -> Option<f64> {
        accuracy(self.hits, self.clicks)
    }
}

/// Formats seconds as `MM:SS.d`, truncating to the tenth of a second
pub fn format_time(secs: f64) -> String {
    // Negative and NaN inputs saturate to zero
    let tenths = (secs * 1000.0) as u64 / 100;
    let minutes = tenths / 600;
    let seconds = (tenths / 10) % 60;
    let tenth = tenths % 10;
    format!("{:02}:{:02}.{}", minutes, seconds, tenth)
}

/// Hits per second rounded to one decimal; 0.0 before any time has passed
pub fn speed(hits: u32, elapsed_secs: f64) -> f64 {
    if elapsed_secs <= 0.0 {
        return 0.0;
    }
    round_to_tenth(f64::from(hits) / elapsed_secs)
}

/// Percentage of clicks that hit a target, rounded to one decimal.
/// `None` when there were no clicks.
pub fn accuracy(hits: u32, clicks: u32) -> Option<f64> {
    if clicks == 0 {
        return None;
    }
    Some(round_to_tenth(f64::from(hits) / f64::from(clicks) * 100.0))
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_zero() {
        assert_eq!(format_time(0.0), "00:00.0");
    }

    #[test]
    fn test_format_time_carries_minutes() {
        assert_eq!(format_time(65.0), "01:05.0");
        assert_eq!(format_time(600.0), "10:00.0");
        assert_eq!(format_time(3599.9), "59:59.9");
    }

    #[test]
    fn test_format_time_truncates_tenths() {
        assert_eq!(format_time(1.25), "00:01.2");
        assert_eq!(format_time(12.99), "00:12.9");
        // No rollover to 60 seconds
        assert_eq!(format_time(59.96), "00:59.9");
    }

    #[test]
    fn test_format_time_negative_is_zero() {
        assert_eq!(format_time(-3.0), "00:00.0");
    }

    #[test]
    fn test_speed_guards_zero_elapsed() {
        assert_eq!(speed(0, 0.0), 0.0);
        assert_eq!(speed(5, 0.0), 0.0);
    }

    #[test]
    fn test_speed_rounds_to_one_decimal() {
        assert_eq!(speed(10, 4.0), 2.5);
        assert_eq!(speed(1, 3.0), 0.3);
        assert_eq!(speed(2, 3.0), 0.7);
    }

    #[test]
    fn test_accuracy_guards_zero_clicks() {
        assert_eq!(accuracy(0, 0), None);
    }

    #[test]
    fn test_accuracy_percentage() {
        assert_eq!(accuracy(3, 4), Some(75.0));
        assert_eq!(accuracy(1, 3), Some(33.3));
        assert_eq!(accuracy(2, 3), Some(66.7));
        assert_eq!(accuracy(0, 7), Some(0.0));
    }

    #[test]
    fn test_lives_remaining_saturates() {
        let stats = Stats {
            misses: 5,
            ..Stats::default()
        };
        assert_eq!(stats.lives_remaining(3), 0);

        let stats = Stats {
            misses: 1,
            ..Stats::default()
        };
        assert_eq!(stats.lives_remaining(3), 2);
    }
}
