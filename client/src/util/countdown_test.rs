use super::*;

const DAY_MS: f64 = 86_400_000.0;

#[test]
fn splits_into_units() {
    let remaining = 2.0 * DAY_MS + 3.0 * 3_600_000.0 + 4.0 * 60_000.0 + 5_000.0 + 999.0;
    let c = Countdown::until(remaining, 0.0);
    assert_eq!(c, Countdown { days: 2, hours: 3, minutes: 4, seconds: 5 });
    assert!(!c.is_elapsed());
}

#[test]
fn past_target_is_zero_not_negative() {
    let c = Countdown::until(1_000.0, 50_000.0);
    assert_eq!(c, Countdown::default());
    assert!(c.is_elapsed());
}

#[test]
fn non_finite_is_zero() {
    assert!(Countdown::until(f64::NAN, 0.0).is_elapsed());
}

#[test]
fn sub_second_remaining_counts_as_elapsed() {
    assert!(Countdown::until(500.0, 0.0).is_elapsed());
}

#[test]
fn parts_are_zero_padded() {
    let c = Countdown { days: 120, hours: 1, minutes: 0, seconds: 9 };
    let parts = c.parts();
    assert_eq!(parts[0], ("120".to_owned(), "days"));
    assert_eq!(parts[1].0, "01");
    assert_eq!(parts[2].0, "00");
    assert_eq!(parts[3], ("09".to_owned(), "sec"));
}
