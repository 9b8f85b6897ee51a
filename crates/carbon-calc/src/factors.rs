//! Indian emission factors, in kg CO2e per unit of recorded quantity.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::kinds::{Category, FoodType, FuelType, VehicleType, WasteType};

/// Immutable mapping from a category's type key to its emission factor.
#[derive(Debug)]
pub struct FactorTable {
    category: Category,
    entries: &'static [(&'static str, Decimal)],
}

impl FactorTable {
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Factor for `key`, or `None` if the key is not in this table.
    pub fn factor(&self, key: &str) -> Option<Decimal> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, factor)| *factor)
    }

    pub fn entries(&self) -> &'static [(&'static str, Decimal)] {
        self.entries
    }

    pub fn for_category(category: Category) -> &'static FactorTable {
        match category {
            Category::Energy => &ENERGY_FACTORS,
            Category::Transport => &TRANSPORT_FACTORS,
            Category::Diet => &DIET_FACTORS,
            Category::Waste => &WASTE_FACTORS,
        }
    }
}

/// kWh for electricity, kg for lpg/firewood/charcoal, litres of kerosene,
/// cubic metres of biogas.
pub static ENERGY_FACTORS: FactorTable = FactorTable {
    category: Category::Energy,
    entries: &[
        (FuelType::Electricity.key(), dec!(0.82)),
        (FuelType::Lpg.key(), dec!(2.31)),
        (FuelType::Kerosene.key(), dec!(2.53)),
        (FuelType::Biogas.key(), dec!(0.5)),
        (FuelType::Firewood.key(), dec!(1.5)),
        (FuelType::Charcoal.key(), dec!(2.93)),
    ],
};

/// Per km travelled. The electric car figure assumes the Indian grid mix.
pub static TRANSPORT_FACTORS: FactorTable = FactorTable {
    category: Category::Transport,
    entries: &[
        (VehicleType::CarPetrol.key(), dec!(0.20)),
        (VehicleType::CarDiesel.key(), dec!(0.18)),
        (VehicleType::CarCng.key(), dec!(0.12)),
        (VehicleType::CarElectric.key(), dec!(0.05)),
        (VehicleType::BikePetrol.key(), dec!(0.08)),
        (VehicleType::BikeElectric.key(), dec!(0.02)),
        (VehicleType::Bus.key(), dec!(0.04)),
        (VehicleType::Train.key(), dec!(0.02)),
        (VehicleType::Metro.key(), dec!(0.015)),
        (VehicleType::Auto.key(), dec!(0.06)),
        (VehicleType::Cycle.key(), dec!(0)),
        (VehicleType::Walk.key(), dec!(0)),
    ],
};

/// Per kg consumed.
pub static DIET_FACTORS: FactorTable = FactorTable {
    category: Category::Diet,
    entries: &[
        (FoodType::Rice.key(), dec!(2.5)),
        (FoodType::Wheat.key(), dec!(1.4)),
        (FoodType::Pulses.key(), dec!(0.9)),
        (FoodType::Vegetables.key(), dec!(0.4)),
        (FoodType::Fruits.key(), dec!(0.3)),
        (FoodType::Milk.key(), dec!(1.4)),
        (FoodType::Eggs.key(), dec!(4.8)),
        (FoodType::Chicken.key(), dec!(6.9)),
        (FoodType::Mutton.key(), dec!(24.0)),
        (FoodType::Fish.key(), dec!(3.0)),
        (FoodType::ProcessedFood.key(), dec!(2.0)),
    ],
};

/// Per kg discarded.
pub static WASTE_FACTORS: FactorTable = FactorTable {
    category: Category::Waste,
    entries: &[
        (WasteType::Organic.key(), dec!(0.5)),
        (WasteType::Plastic.key(), dec!(2.7)),
        (WasteType::Paper.key(), dec!(0.8)),
        (WasteType::Glass.key(), dec!(0.3)),
        (WasteType::Metal.key(), dec!(1.2)),
        (WasteType::Electronic.key(), dec!(4.5)),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_covers(table: &FactorTable, keys: &[&str]) {
        assert_eq!(table.entries().len(), keys.len());
        for key in keys {
            assert!(table.factor(key).is_some(), "missing factor for '{}'", key);
        }
    }

    #[test]
    fn test_every_type_has_a_factor() {
        let fuels: Vec<_> = FuelType::ALL.iter().map(|t| t.key()).collect();
        assert_covers(&ENERGY_FACTORS, &fuels);
        let vehicles: Vec<_> = VehicleType::ALL.iter().map(|t| t.key()).collect();
        assert_covers(&TRANSPORT_FACTORS, &vehicles);
        let foods: Vec<_> = FoodType::ALL.iter().map(|t| t.key()).collect();
        assert_covers(&DIET_FACTORS, &foods);
        let wastes: Vec<_> = WasteType::ALL.iter().map(|t| t.key()).collect();
        assert_covers(&WASTE_FACTORS, &wastes);
    }

    #[test]
    fn test_factor_values() {
        assert_eq!(ENERGY_FACTORS.factor("electricity"), Some(dec!(0.82)));
        assert_eq!(ENERGY_FACTORS.factor("charcoal"), Some(dec!(2.93)));
        assert_eq!(TRANSPORT_FACTORS.factor("metro"), Some(dec!(0.015)));
        assert_eq!(TRANSPORT_FACTORS.factor("walk"), Some(Decimal::ZERO));
        assert_eq!(DIET_FACTORS.factor("mutton"), Some(dec!(24)));
        assert_eq!(WASTE_FACTORS.factor("electronic"), Some(dec!(4.5)));
    }

    #[test]
    fn test_unknown_key_has_no_factor() {
        assert_eq!(ENERGY_FACTORS.factor("petrol"), None);
        assert_eq!(DIET_FACTORS.factor("Rice"), None);
    }

    #[test]
    fn test_factors_are_non_negative() {
        for category in Category::ALL {
            let table = FactorTable::for_category(category);
            assert_eq!(table.category(), category);
            assert!(table.entries().iter().all(|(_, f)| !f.is_sign_negative()));
        }
    }
}
