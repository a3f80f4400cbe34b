#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn parses_plain_number() {
    assert_eq!(parse_price("24"), 24.0);
}

#[test]
fn strips_currency_and_grouping() {
    assert_eq!(parse_price("$1,299.50"), 1299.5);
    assert_eq!(parse_price(" 32 USD"), 32.0);
}

#[test]
fn unparseable_is_zero() {
    assert_eq!(parse_price(""), 0.0);
    assert_eq!(parse_price("free"), 0.0);
    assert_eq!(parse_price("1.2.3"), 0.0);
}

#[test]
fn formats_whole_and_fractional_amounts() {
    assert_eq!(format_price(24.0), "$24");
    assert_eq!(format_price(1299.5), "$1299.50");
    assert_eq!(format_price(0.0), "$0");
}
