//! Price parsing
//!
//! Prices are fixed-point decimals with two fractional digits. Text is parsed
//! with `rust_decimal`, so `"19.99"` is exactly 19.99 and never a float.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use super::ValidationError;

/// Fractional digits kept in storage.
pub const PRICE_SCALE: u32 = 2;

const FIELD: &str = "Price";

/// Parse optional price text.
///
/// Blank or missing text means "no price". Anything else must be a
/// non-negative decimal; it is rounded half away from zero to two places.
///
/// # Example
/// ```
/// use items_server::models::parse_price;
///
/// assert_eq!(parse_price(Some("19.99")).unwrap().unwrap().to_string(), "19.99");
/// assert!(parse_price(Some("")).unwrap().is_none());
/// assert!(parse_price(Some("abc")).is_err());
/// ```
pub fn parse_price(raw: Option<&str>) -> Result<Option<Decimal>, ValidationError> {
    let text = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(text) => text,
    };

    let mut value = Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| ValidationError::NotANumber { field: FIELD })?;

    if value.is_sign_negative() {
        if !value.is_zero() {
            return Err(ValidationError::Negative { field: FIELD });
        }
        // "-0" is stored as 0
        value.set_sign_positive(true);
    }

    Ok(Some(
        value.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn absent_or_blank_is_none() {
        assert_eq!(parse_price(None), Ok(None));
        assert_eq!(parse_price(Some("")), Ok(None));
        assert_eq!(parse_price(Some("   ")), Ok(None));
    }

    #[test]
    fn exact_decimal() {
        assert_eq!(parse_price(Some("19.99")), Ok(Some(dec("19.99"))));
        assert_eq!(parse_price(Some(" 5 ")), Ok(Some(dec("5"))));
        assert_eq!(parse_price(Some("0")), Ok(Some(Decimal::ZERO)));
    }

    #[test]
    fn rounds_to_two_places() {
        assert_eq!(parse_price(Some("1.005")), Ok(Some(dec("1.01"))));
        assert_eq!(parse_price(Some("2.994")), Ok(Some(dec("2.99"))));
        assert_eq!(parse_price(Some("19.990")).unwrap().unwrap().scale(), 2);
    }

    #[test]
    fn scientific_notation() {
        assert_eq!(parse_price(Some("1e2")), Ok(Some(dec("100"))));
    }

    #[test]
    fn rejects_non_numbers() {
        for text in ["abc", "12,50", "1.2.3", "NaN", "Infinity"] {
            assert_eq!(
                parse_price(Some(text)),
                Err(ValidationError::NotANumber { field: "Price" }),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_negative() {
        assert_eq!(
            parse_price(Some("-0.01")),
            Err(ValidationError::Negative { field: "Price" })
        );
        let zero = parse_price(Some("-0")).unwrap().unwrap();
        assert!(zero.is_zero());
        assert!(!zero.is_sign_negative());
    }
}
