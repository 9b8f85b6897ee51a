//! Limits on quantities accepted at data entry.
//!
//! Quantities keep at most two decimal places. Energy consumption allows ten
//! digits in total and every other quantity eight, which keeps any month's
//! footprint far inside the range of [`Decimal`].

use rust_decimal::Decimal;
use thiserror::Error;

pub const QUANTITY_DECIMAL_PLACES: u32 = 2;
/// Digits allowed for energy consumption.
pub const ENERGY_MAX_DIGITS: u32 = 10;
/// Digits allowed for distances and weights.
pub const AMOUNT_MAX_DIGITS: u32 = 8;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    #[error("Field '{0}' must not be negative")]
    Negative(&'static str),
    #[error("Field '{field}' must be less than {limit}")]
    TooLarge { field: &'static str, limit: Decimal },
    #[error("Field '{field}' allows at most {places} decimal places", places = QUANTITY_DECIMAL_PLACES)]
    TooPrecise { field: &'static str },
}

/// Exclusive upper bound for a quantity of `max_digits` digits.
pub fn quantity_limit(max_digits: u32) -> Decimal {
    Decimal::from(10u64.pow(max_digits - QUANTITY_DECIMAL_PLACES))
}

/// Checks `value` against the sign, size and precision limits.
pub fn check_quantity(field: &'static str, value: Decimal, max_digits: u32) -> Result<(), QuantityError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(QuantityError::Negative(field));
    }
    let limit = quantity_limit(max_digits);
    if value >= limit {
        return Err(QuantityError::TooLarge { field, limit });
    }
    if value.normalize().scale() > QUANTITY_DECIMAL_PLACES {
        return Err(QuantityError::TooPrecise { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_accepts_values_within_limits() {
        for value in [dec!(0), dec!(-0), dec!(12.5), dec!(999999.99), dec!(1.50000)] {
            assert_eq!(check_quantity("distance_km", value, AMOUNT_MAX_DIGITS), Ok(()), "{}", value);
        }
        assert_eq!(check_quantity("consumption", dec!(99999999.99), ENERGY_MAX_DIGITS), Ok(()));
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        assert_eq!(
            check_quantity("rice_kg", dec!(-0.5), AMOUNT_MAX_DIGITS),
            Err(QuantityError::Negative("rice_kg"))
        );
        let err = check_quantity("distance_km", dec!(1000000), AMOUNT_MAX_DIGITS).unwrap_err();
        assert_eq!(err.to_string(), "Field 'distance_km' must be less than 1000000");
        let err = check_quantity("consumption", dec!(100000000), ENERGY_MAX_DIGITS).unwrap_err();
        assert_eq!(err.to_string(), "Field 'consumption' must be less than 100000000");
        assert!(check_quantity("bus_km", dec!(70000000000000000000000000000), AMOUNT_MAX_DIGITS).is_err());
    }

    #[test]
    fn test_rejects_more_than_two_decimal_places() {
        let err = check_quantity("lpg_kg", dec!(14.205), ENERGY_MAX_DIGITS).unwrap_err();
        assert_eq!(err, QuantityError::TooPrecise { field: "lpg_kg" });
        assert_eq!(err.to_string(), "Field 'lpg_kg' allows at most 2 decimal places");
    }
}
