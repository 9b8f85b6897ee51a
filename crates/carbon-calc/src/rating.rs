//! Classification of a household's monthly footprint per family member.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::FootprintError;

/// Upper bound (inclusive) of the `low` level, kg CO2e per person per month.
pub const LOW_THRESHOLD: Decimal = dec!(200);
/// Upper bound (inclusive) of the `medium` level.
pub const HIGH_THRESHOLD: Decimal = dec!(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FootprintLevel {
    Low,
    Medium,
    High,
}

impl FootprintLevel {
    /// Boundary values belong to the lower level.
    pub fn classify(per_person: Decimal) -> Self {
        if per_person <= LOW_THRESHOLD {
            FootprintLevel::Low
        } else if per_person <= HIGH_THRESHOLD {
            FootprintLevel::Medium
        } else {
            FootprintLevel::High
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            FootprintLevel::Low => "low",
            FootprintLevel::Medium => "medium",
            FootprintLevel::High => "high",
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            FootprintLevel::Low => "Excellent! You have a low carbon footprint.",
            FootprintLevel::Medium => "Good effort! There's room for improvement.",
            FootprintLevel::High => "Your footprint is high. Consider making changes.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerPersonFootprint {
    pub per_person: Decimal,
    pub level: FootprintLevel,
    pub message: &'static str,
}

pub fn categorize_per_person_footprint(
    monthly_total: Decimal,
    family_size: i32,
) -> Result<PerPersonFootprint, FootprintError> {
    if family_size <= 0 {
        return Err(FootprintError::DivisionByZero { family_size });
    }
    let per_person = monthly_total / Decimal::from(family_size);
    let level = FootprintLevel::classify(per_person);
    Ok(PerPersonFootprint { per_person, level, message: level.message() })
}

/// Reference per-person monthly footprints for Indian households.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionalAverages {
    pub low_income: Decimal,
    pub middle_income: Decimal,
    pub high_income: Decimal,
}

pub const INDIAN_AVERAGES: RegionalAverages = RegionalAverages {
    low_income: dec!(150),
    middle_income: dec!(300),
    high_income: dec!(600),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_belong_to_lower_level() {
        assert_eq!(FootprintLevel::classify(dec!(0)), FootprintLevel::Low);
        assert_eq!(FootprintLevel::classify(dec!(200)), FootprintLevel::Low);
        assert_eq!(FootprintLevel::classify(dec!(200.01)), FootprintLevel::Medium);
        assert_eq!(FootprintLevel::classify(dec!(400)), FootprintLevel::Medium);
        assert_eq!(FootprintLevel::classify(dec!(400.01)), FootprintLevel::High);
    }

    #[test]
    fn test_per_person_division() {
        let result = categorize_per_person_footprint(dec!(900), 3).unwrap();
        assert_eq!(result.per_person, dec!(300));
        assert_eq!(result.level, FootprintLevel::Medium);
        assert_eq!(result.message, "Good effort! There's room for improvement.");

        let result = categorize_per_person_footprint(dec!(800), 4).unwrap();
        assert_eq!(result.level, FootprintLevel::Low);

        let result = categorize_per_person_footprint(dec!(401), 1).unwrap();
        assert_eq!(result.level, FootprintLevel::High);
        assert_eq!(result.message, "Your footprint is high. Consider making changes.");
    }

    #[test]
    fn test_zero_family_size_fails() {
        assert_eq!(
            categorize_per_person_footprint(dec!(100), 0),
            Err(FootprintError::DivisionByZero { family_size: 0 })
        );
        assert!(categorize_per_person_footprint(dec!(100), -2).is_err());
    }

    #[test]
    fn test_level_keys() {
        assert_eq!(FootprintLevel::Low.as_str(), "low");
        assert_eq!(FootprintLevel::High.as_str(), "high");
        assert_eq!(INDIAN_AVERAGES.middle_income, dec!(300));
    }
}
