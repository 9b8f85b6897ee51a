use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::FootprintError;
use crate::factors::{DIET_FACTORS, ENERGY_FACTORS, FactorTable, TRANSPORT_FACTORS, WASTE_FACTORS};
use crate::kinds::Category;

/// Average number of weeks in a calendar month.
pub const WEEKS_PER_MONTH: Decimal = dec!(4.33);

/// A consumption record that can be priced against a [`FactorTable`].
pub trait Consumption {
    /// Type key looked up in the category's factor table.
    fn type_key(&self) -> &str;

    /// Quantity for the whole month, in the unit the factor is expressed in.
    /// `None` when it does not fit in a [`Decimal`].
    fn monthly_quantity(&self) -> Option<Decimal>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyRecord {
    pub fuel_type: String,
    pub consumption: Decimal,
}

impl EnergyRecord {
    pub fn new(fuel_type: impl Into<String>, consumption: Decimal) -> Self {
        Self { fuel_type: fuel_type.into(), consumption }
    }
}

impl Consumption for EnergyRecord {
    fn type_key(&self) -> &str {
        &self.fuel_type
    }

    fn monthly_quantity(&self) -> Option<Decimal> {
        Some(self.consumption)
    }
}

/// A recurring trip: `distance_km` per trip, `frequency_per_week` trips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportRecord {
    pub vehicle_type: String,
    pub distance_km: Decimal,
    pub frequency_per_week: u32,
}

impl TransportRecord {
    pub fn new(vehicle_type: impl Into<String>, distance_km: Decimal, frequency_per_week: u32) -> Self {
        Self { vehicle_type: vehicle_type.into(), distance_km, frequency_per_week }
    }
}

impl Consumption for TransportRecord {
    fn type_key(&self) -> &str {
        &self.vehicle_type
    }

    /// Monthly distance: per-trip distance × trips per week × weeks per month.
    fn monthly_quantity(&self) -> Option<Decimal> {
        self.distance_km
            .checked_mul(Decimal::from(self.frequency_per_week))?
            .checked_mul(WEEKS_PER_MONTH)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietRecord {
    pub food_type: String,
    pub consumption_kg: Decimal,
}

impl DietRecord {
    pub fn new(food_type: impl Into<String>, consumption_kg: Decimal) -> Self {
        Self { food_type: food_type.into(), consumption_kg }
    }
}

impl Consumption for DietRecord {
    fn type_key(&self) -> &str {
        &self.food_type
    }

    fn monthly_quantity(&self) -> Option<Decimal> {
        Some(self.consumption_kg)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WasteRecord {
    pub waste_type: String,
    pub quantity_kg: Decimal,
}

impl WasteRecord {
    pub fn new(waste_type: impl Into<String>, quantity_kg: Decimal) -> Self {
        Self { waste_type: waste_type.into(), quantity_kg }
    }
}

impl Consumption for WasteRecord {
    fn type_key(&self) -> &str {
        &self.waste_type
    }

    fn monthly_quantity(&self) -> Option<Decimal> {
        Some(self.quantity_kg)
    }
}

/// All records of one household for one month, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlyRecords {
    pub energy: Vec<EnergyRecord>,
    pub transport: Vec<TransportRecord>,
    pub diet: Vec<DietRecord>,
    pub waste: Vec<WasteRecord>,
}

impl MonthlyRecords {
    pub fn is_empty(&self) -> bool {
        self.energy.is_empty()
            && self.transport.is_empty()
            && self.diet.is_empty()
            && self.waste.is_empty()
    }

    /// Type keys that none of the factor tables know about. These contribute
    /// zero to the footprint.
    pub fn unmatched_types(&self) -> Vec<UnmatchedType> {
        let mut unmatched = Vec::new();
        let mut collect = |category: Category, keys: Vec<&str>| {
            unmatched.extend(keys.into_iter().map(|kind| UnmatchedType {
                category,
                kind: kind.to_string(),
            }));
        };
        collect(Category::Energy, unmatched_type_keys(&self.energy, &ENERGY_FACTORS));
        collect(Category::Transport, unmatched_type_keys(&self.transport, &TRANSPORT_FACTORS));
        collect(Category::Diet, unmatched_type_keys(&self.diet, &DIET_FACTORS));
        collect(Category::Waste, unmatched_type_keys(&self.waste, &WASTE_FACTORS));
        unmatched
    }

    /// Records left out of the footprint because their contribution does not
    /// fit in a [`Decimal`].
    pub fn overflowing_records(&self) -> Vec<OverflowingRecord> {
        let mut overflowing = Vec::new();
        let mut collect = |category: Category, keys: Vec<&str>| {
            overflowing.extend(keys.into_iter().map(|kind| OverflowingRecord {
                category,
                kind: kind.to_string(),
            }));
        };
        collect(Category::Energy, overflowing_type_keys(&self.energy, &ENERGY_FACTORS));
        collect(Category::Transport, overflowing_type_keys(&self.transport, &TRANSPORT_FACTORS));
        collect(Category::Diet, overflowing_type_keys(&self.diet, &DIET_FACTORS));
        collect(Category::Waste, overflowing_type_keys(&self.waste, &WASTE_FACTORS));
        overflowing
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnmatchedType {
    pub category: Category,
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverflowingRecord {
    pub category: Category,
    pub kind: String,
}

/// Footprint of one household-month in kg CO2e.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FootprintBreakdown {
    pub total: Decimal,
    pub energy: Decimal,
    pub transport: Decimal,
    pub diet: Decimal,
    pub waste: Decimal,
}

impl FootprintBreakdown {
    /// Builds a breakdown whose total is the exact sum of the four categories.
    /// The total saturates at [`Decimal::MAX`].
    pub fn from_categories(
        energy: Decimal,
        transport: Decimal,
        diet: Decimal,
        waste: Decimal,
    ) -> Self {
        let total = energy.saturating_add(transport).saturating_add(diet).saturating_add(waste);
        Self { total, energy, transport, diet, waste }
    }

    pub fn category(&self, category: Category) -> Decimal {
        match category {
            Category::Energy => self.energy,
            Category::Transport => self.transport,
            Category::Diet => self.diet,
            Category::Waste => self.waste,
        }
    }
}

fn contribution<R: Consumption>(record: &R, factor: Decimal) -> Option<Decimal> {
    record.monthly_quantity()?.checked_mul(factor)
}

/// Running sum over `records` plus the indices of records skipped because
/// their contribution, or the sum with it, overflows.
fn price_records<R: Consumption>(records: &[R], table: &FactorTable) -> (Decimal, Vec<usize>) {
    let mut total = Decimal::ZERO;
    let mut skipped = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let Some(factor) = table.factor(record.type_key()) else {
            continue;
        };
        match contribution(record, factor).and_then(|c| total.checked_add(c)) {
            Some(sum) => total = sum,
            None => skipped.push(index),
        }
    }
    (total, skipped)
}

/// Sums `monthly_quantity × factor` over `records`. Records whose type key is
/// not in `table` contribute zero, as do records whose contribution would
/// overflow (see [`overflowing_type_keys`]).
pub fn calculate_category_footprint<R: Consumption>(records: &[R], table: &FactorTable) -> Decimal {
    price_records(records, table).0
}

/// Like [`calculate_category_footprint`] but fails on the first record whose
/// type key is not in `table` or whose contribution overflows.
pub fn calculate_category_footprint_strict<R: Consumption>(
    records: &[R],
    table: &FactorTable,
) -> Result<Decimal, FootprintError> {
    records.iter().try_fold(Decimal::ZERO, |acc, record| {
        let factor = table.factor(record.type_key()).ok_or_else(|| {
            FootprintError::UnknownCategoryType {
                category: table.category(),
                kind: record.type_key().to_string(),
            }
        })?;
        contribution(record, factor).and_then(|c| acc.checked_add(c)).ok_or_else(|| {
            FootprintError::Overflow {
                category: table.category(),
                kind: record.type_key().to_string(),
            }
        })
    })
}

/// Type keys of the records [`calculate_category_footprint`] skips for
/// overflowing, in record order.
pub fn overflowing_type_keys<'a, R: Consumption>(
    records: &'a [R],
    table: &FactorTable,
) -> Vec<&'a str> {
    price_records(records, table).1.into_iter().map(|i| records[i].type_key()).collect()
}

/// Type keys in `records` with no entry in `table`, in record order.
pub fn unmatched_type_keys<'a, R: Consumption>(records: &'a [R], table: &FactorTable) -> Vec<&'a str> {
    records
        .iter()
        .map(Consumption::type_key)
        .filter(|key| table.factor(key).is_none())
        .collect()
}

/// Prices every category of `records` against the static factor tables.
pub fn calculate_total_footprint(records: &MonthlyRecords) -> FootprintBreakdown {
    FootprintBreakdown::from_categories(
        calculate_category_footprint(&records.energy, &ENERGY_FACTORS),
        calculate_category_footprint(&records.transport, &TRANSPORT_FACTORS),
        calculate_category_footprint(&records.diet, &DIET_FACTORS),
        calculate_category_footprint(&records.waste, &WASTE_FACTORS),
    )
}
