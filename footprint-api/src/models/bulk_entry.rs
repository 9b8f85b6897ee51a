//! The one-page monthly entry form: a handful of common quantities that
//! expand into individual consumption records.

use carbon_calc::{FoodType, FuelType, VehicleType, WasteType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::{
    AMOUNT_MAX_DIGITS, ENERGY_MAX_DIGITS, Month, NewDiet, NewEnergyUsage, NewTransportation,
    NewWaste, QuantityError, check_quantity,
};

/// Quantities for one month. Absent and zero fields produce no record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, TS)]
#[ts(export)]
pub struct BulkEntry {
    #[ts(type = "string | number | null")]
    pub electricity_kwh: Option<Decimal>,
    #[ts(type = "string | number | null")]
    pub lpg_kg: Option<Decimal>,
    /// Petrol car, km per week.
    #[ts(type = "string | number | null")]
    pub car_km: Option<Decimal>,
    /// Petrol two-wheeler, km per week.
    #[ts(type = "string | number | null")]
    pub bike_km: Option<Decimal>,
    /// Bus, km per week.
    #[ts(type = "string | number | null")]
    pub bus_km: Option<Decimal>,
    #[ts(type = "string | number | null")]
    pub rice_kg: Option<Decimal>,
    #[ts(type = "string | number | null")]
    pub wheat_kg: Option<Decimal>,
    #[ts(type = "string | number | null")]
    pub milk_kg: Option<Decimal>,
    #[ts(type = "string | number | null")]
    pub organic_waste_kg: Option<Decimal>,
    #[ts(type = "string | number | null")]
    pub plastic_waste_kg: Option<Decimal>,
}

/// Records produced by expanding a [`BulkEntry`].
#[derive(Debug, Clone, Default)]
pub struct BulkRecords {
    pub energy: Vec<NewEnergyUsage>,
    pub transport: Vec<NewTransportation>,
    pub diet: Vec<NewDiet>,
    pub waste: Vec<NewWaste>,
}

impl BulkRecords {
    pub fn len(&self) -> usize {
        self.energy.len() + self.transport.len() + self.diet.len() + self.waste.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn present(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|v| !v.is_zero())
}

impl BulkEntry {
    /// Checks every present field, reporting the first one out of range.
    pub fn validate(&self) -> Result<(), QuantityError> {
        for (field, value, max_digits) in self.fields() {
            if let Some(value) = value {
                check_quantity(field, value, max_digits)?;
            }
        }
        Ok(())
    }

    fn fields(&self) -> [(&'static str, Option<Decimal>, u32); 10] {
        [
            ("electricity_kwh", self.electricity_kwh, ENERGY_MAX_DIGITS),
            ("lpg_kg", self.lpg_kg, ENERGY_MAX_DIGITS),
            ("car_km", self.car_km, AMOUNT_MAX_DIGITS),
            ("bike_km", self.bike_km, AMOUNT_MAX_DIGITS),
            ("bus_km", self.bus_km, AMOUNT_MAX_DIGITS),
            ("rice_kg", self.rice_kg, AMOUNT_MAX_DIGITS),
            ("wheat_kg", self.wheat_kg, AMOUNT_MAX_DIGITS),
            ("milk_kg", self.milk_kg, AMOUNT_MAX_DIGITS),
            ("organic_waste_kg", self.organic_waste_kg, AMOUNT_MAX_DIGITS),
            ("plastic_waste_kg", self.plastic_waste_kg, AMOUNT_MAX_DIGITS),
        ]
    }

    /// Expands the form into records for `household_id`. Distances are entered
    /// per week, so each is stored as one trip per week and the calculator
    /// scales it to the month.
    pub fn into_records(&self, household_id: i32, month: Month) -> BulkRecords {
        let month = month.first_day();
        let mut records = BulkRecords::default();

        for (fuel, value) in [(FuelType::Electricity, self.electricity_kwh), (FuelType::Lpg, self.lpg_kg)] {
            if let Some(consumption) = present(value) {
                records.energy.push(NewEnergyUsage {
                    household_id,
                    fuel_type: fuel.key().to_string(),
                    consumption,
                    unit: fuel.default_unit().to_string(),
                    month,
                });
            }
        }

        for (vehicle, value) in [
            (VehicleType::CarPetrol, self.car_km),
            (VehicleType::BikePetrol, self.bike_km),
            (VehicleType::Bus, self.bus_km),
        ] {
            if let Some(distance_km) = present(value) {
                records.transport.push(NewTransportation {
                    household_id,
                    vehicle_type: vehicle.key().to_string(),
                    distance_km,
                    frequency_per_week: 1,
                    month,
                });
            }
        }

        for (food, value) in [
            (FoodType::Rice, self.rice_kg),
            (FoodType::Wheat, self.wheat_kg),
            (FoodType::Milk, self.milk_kg),
        ] {
            if let Some(consumption_kg) = present(value) {
                records.diet.push(NewDiet {
                    household_id,
                    food_type: food.key().to_string(),
                    consumption_kg,
                    month,
                });
            }
        }

        for (waste, value) in [
            (WasteType::Organic, self.organic_waste_kg),
            (WasteType::Plastic, self.plastic_waste_kg),
        ] {
            if let Some(quantity_kg) = present(value) {
                records.waste.push(NewWaste {
                    household_id,
                    waste_type: waste.key().to_string(),
                    quantity_kg,
                    month,
                });
            }
        }

        records
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_zero_and_absent_fields_are_skipped() {
        let entry = BulkEntry {
            electricity_kwh: Some(dec!(120)),
            lpg_kg: Some(dec!(0)),
            car_km: Some(dec!(300)),
            ..Default::default()
        };
        let month = Month::parse("2025-03").unwrap();
        let records = entry.into_records(7, month);

        assert_eq!(records.len(), 2);
        assert_eq!(records.energy[0].fuel_type, "electricity");
        assert_eq!(records.energy[0].unit, "kWh");
        assert_eq!(records.transport[0].vehicle_type, "car_petrol");
        assert_eq!(records.transport[0].frequency_per_week, 1);
        assert_eq!(records.transport[0].month, month.first_day());
        assert!(records.diet.is_empty());
    }

    #[test]
    fn test_every_field_maps_to_a_record() {
        let entry = BulkEntry {
            electricity_kwh: Some(dec!(1)),
            lpg_kg: Some(dec!(1)),
            car_km: Some(dec!(1)),
            bike_km: Some(dec!(1)),
            bus_km: Some(dec!(1)),
            rice_kg: Some(dec!(1)),
            wheat_kg: Some(dec!(1)),
            milk_kg: Some(dec!(1)),
            organic_waste_kg: Some(dec!(1)),
            plastic_waste_kg: Some(dec!(1)),
        };
        let records = entry.into_records(1, Month::parse("2025-01").unwrap());
        assert_eq!(records.len(), 10);
        assert_eq!(records.energy[1].unit, "kg");
        let vehicles: Vec<_> = records.transport.iter().map(|t| t.vehicle_type.as_str()).collect();
        assert_eq!(vehicles, ["car_petrol", "bike_petrol", "bus"]);
        let waste: Vec<_> = records.waste.iter().map(|w| w.waste_type.as_str()).collect();
        assert_eq!(waste, ["organic", "plastic"]);
    }

    #[test]
    fn test_out_of_range_field_is_reported() {
        let entry = BulkEntry { rice_kg: Some(dec!(-2)), ..Default::default() };
        assert_eq!(entry.validate(), Err(QuantityError::Negative("rice_kg")));
        assert_eq!(BulkEntry::default().validate(), Ok(()));

        let entry = BulkEntry {
            electricity_kwh: Some(dec!(5000000)),
            bus_km: Some(dec!(1000000)),
            ..Default::default()
        };
        assert_eq!(
            entry.validate(),
            Err(QuantityError::TooLarge { field: "bus_km", limit: dec!(1000000) })
        );

        let entry = BulkEntry { milk_kg: Some(dec!(1.234)), ..Default::default() };
        assert_eq!(entry.validate(), Err(QuantityError::TooPrecise { field: "milk_kg" }));
    }

    #[test]
    fn test_accepts_numbers_and_strings() {
        let entry: BulkEntry =
            serde_json::from_str(r#"{"electricity_kwh": 150, "milk_kg": "12.5"}"#).unwrap();
        assert_eq!(entry.electricity_kwh, Some(dec!(150)));
        assert_eq!(entry.milk_kg, Some(dec!(12.5)));
        assert_eq!(entry.bus_km, None);
    }
}
