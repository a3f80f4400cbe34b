//! Catalog price strings and their display form.

#[cfg(test)]
#[path = "price_test.rs"]
mod price_test;

/// Parse a catalog price such as `"24"` or `"$1,299.50"`.
///
/// Everything except ASCII digits and `.` is stripped first; anything that
/// still fails to parse (or is not finite) is 0.
#[must_use]
pub fn parse_price(raw: &str) -> f64 {
    let cleaned = raw.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect::<String>();
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// `$24` for whole amounts, `$24.50` otherwise.
#[must_use]
pub fn format_price(amount: f64) -> String {
    let cents = (amount * 100.0).round();
    if (cents % 100.0).abs() < 0.5 {
        format!("${:.0}", cents / 100.0)
    } else {
        format!("${:.2}", cents / 100.0)
    }
}
