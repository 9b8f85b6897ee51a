//! Carbon footprint arithmetic for household consumption records.
//!
//! Monthly consumption is recorded in four categories (energy, transport,
//! diet, waste). Each category has a static table of emission factors in
//! kg CO2e per unit; a footprint is the sum of `quantity × factor` over the
//! records of one household-month. All arithmetic is done in
//! [`rust_decimal::Decimal`] so that many small entries do not accumulate
//! floating point error.
//!
//! # Example
//! ```
//! use carbon_calc::{MonthlyRecords, EnergyRecord, calculate_total_footprint};
//! use rust_decimal_macros::dec;
//!
//! let mut records = MonthlyRecords::default();
//! records.energy.push(EnergyRecord::new("electricity", dec!(100)));
//! let breakdown = calculate_total_footprint(&records);
//! assert_eq!(breakdown.total, dec!(82.0));
//! ```

mod calculator;
mod error;
mod factors;
mod kinds;
mod rating;

pub use calculator::{
    Consumption, DietRecord, EnergyRecord, FootprintBreakdown, MonthlyRecords, OverflowingRecord,
    TransportRecord, UnmatchedType, WEEKS_PER_MONTH, WasteRecord, calculate_category_footprint,
    calculate_category_footprint_strict, calculate_total_footprint, overflowing_type_keys,
    unmatched_type_keys,
};
pub use error::FootprintError;
pub use factors::{DIET_FACTORS, ENERGY_FACTORS, FactorTable, TRANSPORT_FACTORS, WASTE_FACTORS};
pub use kinds::{Category, FoodType, FuelType, VehicleType, WasteType};
pub use rating::{
    FootprintLevel, HIGH_THRESHOLD, INDIAN_AVERAGES, LOW_THRESHOLD, PerPersonFootprint,
    RegionalAverages, categorize_per_person_footprint,
};
