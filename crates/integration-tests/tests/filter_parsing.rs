//! Integration tests for filter parsing and pagination math.

use pawmart_client::services::{
    PriceBounds, paginate, parse_numeric_param, parse_price_range,
};

#[test]
fn test_price_range_lookup_table() {
    let cases = [
        ("0-25", Some(0), Some(25)),
        ("25-50", Some(25), Some(50)),
        ("50-100", Some(50), Some(100)),
        ("100-200", Some(100), Some(200)),
        ("200+", Some(200), None),
    ];

    for (key, min, max) in cases {
        assert_eq!(parse_price_range(key), PriceBounds { min, max }, "key {key}");
    }
}

#[test]
fn test_unknown_price_range_keys_resolve_empty() {
    for key in ["any", "unknown-key", "", "25", "-25"] {
        assert_eq!(parse_price_range(key), PriceBounds::default(), "key {key}");
    }
}

#[test]
fn test_pagination_from_one_based_pages() {
    assert_eq!(paginate(3, 10).offset, 20);
    assert_eq!(paginate(3, 10).limit, 10);
    assert_eq!(paginate(1, 25).offset, 0);
    assert_eq!(paginate(10, 12).offset, 108);
}

#[test]
fn test_pagination_never_underflows() {
    assert_eq!(paginate(0, 10).offset, 0);
}

#[test]
fn test_numeric_param_fallbacks() {
    assert_eq!(parse_numeric_param(Some("3"), 1), 3);
    assert_eq!(parse_numeric_param(Some("x"), 1), 1);
    assert_eq!(parse_numeric_param(None, 5), 5);
}
