//! Launch countdown arithmetic for the hero poster.

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

const SECOND_MS: f64 = 1000.0;

/// Time remaining until a launch, split into display units. Never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Countdown {
    /// Remaining time from `now_ms` to `target_ms` (both Unix milliseconds),
    /// rounded down to whole seconds. Past targets yield all zeros.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn until(target_ms: f64, now_ms: f64) -> Self {
        let remaining = target_ms - now_ms;
        if !remaining.is_finite() || remaining <= 0.0 {
            return Self::default();
        }
        let total = (remaining / SECOND_MS).floor() as u64;
        Self {
            days: total / 86_400,
            hours: total / 3_600 % 24,
            minutes: total / 60 % 60,
            seconds: total % 60,
        }
    }

    #[must_use]
    pub fn is_elapsed(&self) -> bool {
        *self == Self::default()
    }

    /// `(value, unit)` pairs in display order, zero-padded to two digits.
    #[must_use]
    pub fn parts(&self) -> [(String, &'static str); 4] {
        [
            (format!("{:02}", self.days), "days"),
            (format!("{:02}", self.hours), "hrs"),
            (format!("{:02}", self.minutes), "min"),
            (format!("{:02}", self.seconds), "sec"),
        ]
    }
}
