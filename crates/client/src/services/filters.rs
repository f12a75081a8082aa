//! Filter parsing: price ranges, pagination math, query parameters.

/// Price bounds resolved from a range key. Both ends optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriceBounds {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

/// Map a price-range key to bounds via a fixed lookup table.
///
/// `"any"` and unknown keys resolve to empty bounds.
#[must_use]
pub fn parse_price_range(key: &str) -> PriceBounds {
    match key {
        "0-25" => PriceBounds {
            min: Some(0),
            max: Some(25),
        },
        "25-50" => PriceBounds {
            min: Some(25),
            max: Some(50),
        },
        "50-100" => PriceBounds {
            min: Some(50),
            max: Some(100),
        },
        "100-200" => PriceBounds {
            min: Some(100),
            max: Some(200),
        },
        "200+" => PriceBounds {
            min: Some(200),
            max: None,
        },
        _ => PriceBounds::default(),
    }
}

/// Offset/limit pair for a list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub offset: u64,
    pub limit: u32,
}

/// Compute offset/limit from a 1-based page number.
///
/// Page numbers at or below 1 clamp to offset 0.
#[must_use]
pub fn paginate(page: u32, limit: u32) -> Pagination {
    Pagination {
        offset: u64::from(page.saturating_sub(1)) * u64::from(limit),
        limit,
    }
}

/// Parse a numeric query-string parameter, falling back when the value is
/// absent or not a number.
#[must_use]
pub fn parse_numeric_param(raw: Option<&str>, fallback: u32) -> u32 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_range_table() {
        assert_eq!(
            parse_price_range("0-25"),
            PriceBounds {
                min: Some(0),
                max: Some(25)
            }
        );
        assert_eq!(
            parse_price_range("100-200"),
            PriceBounds {
                min: Some(100),
                max: Some(200)
            }
        );
    }

    #[test]
    fn test_price_range_open_ended() {
        assert_eq!(
            parse_price_range("200+"),
            PriceBounds {
                min: Some(200),
                max: None
            }
        );
    }

    #[test]
    fn test_price_range_any_and_unknown_are_empty() {
        assert_eq!(parse_price_range("any"), PriceBounds::default());
        assert_eq!(parse_price_range("unknown-key"), PriceBounds::default());
        assert_eq!(parse_price_range(""), PriceBounds::default());
    }

    #[test]
    fn test_paginate_third_page() {
        assert_eq!(
            paginate(3, 10),
            Pagination {
                offset: 20,
                limit: 10
            }
        );
    }

    #[test]
    fn test_paginate_clamps_low_pages() {
        assert_eq!(paginate(1, 10).offset, 0);
        assert_eq!(paginate(0, 10).offset, 0);
    }

    #[test]
    fn test_parse_numeric_param() {
        assert_eq!(parse_numeric_param(Some("7"), 1), 7);
        assert_eq!(parse_numeric_param(Some(" 7 "), 1), 7);
        assert_eq!(parse_numeric_param(Some("seven"), 1), 1);
        assert_eq!(parse_numeric_param(Some(""), 1), 1);
        assert_eq!(parse_numeric_param(None, 12), 12);
    }
}
