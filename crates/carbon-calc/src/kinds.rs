//! Consumption categories and the per-category type keys that records are
//! tagged with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FootprintError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Energy,
    Transport,
    Diet,
    Waste,
}

impl Category {
    pub const ALL: [Category; 4] =
        [Category::Energy, Category::Transport, Category::Diet, Category::Waste];

    pub const fn key(self) -> &'static str {
        match self {
            Category::Energy => "energy",
            Category::Transport => "transport",
            Category::Diet => "diet",
            Category::Waste => "waste",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Declares a type-key enum with its storage key, display label, and a
/// `FromStr` that rejects keys outside the set.
macro_rules! emission_kind {
    (
        $(#[$meta:meta])*
        $name:ident in $category:expr => {
            $($variant:ident => $key:literal, $label:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const CATEGORY: Category = $category;
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Key used in storage and in the factor table.
            pub const fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }

            pub const fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = FootprintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok($name::$variant),)+
                    other => Err(FootprintError::UnknownCategoryType {
                        category: $category,
                        kind: other.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }
    };
}

emission_kind! {
    /// Household cooking, heating and lighting fuels.
    FuelType in Category::Energy => {
        Electricity => "electricity", "Electricity";
        Lpg => "lpg", "LPG";
        Kerosene => "kerosene", "Kerosene";
        Biogas => "biogas", "Biogas";
        Firewood => "firewood", "Firewood";
        Charcoal => "charcoal", "Charcoal";
    }
}

emission_kind! {
    VehicleType in Category::Transport => {
        CarPetrol => "car_petrol", "Car (Petrol)";
        CarDiesel => "car_diesel", "Car (Diesel)";
        CarCng => "car_cng", "Car (CNG)";
        CarElectric => "car_electric", "Car (Electric)";
        BikePetrol => "bike_petrol", "Bike (Petrol)";
        BikeElectric => "bike_electric", "Bike (Electric)";
        Bus => "bus", "Bus";
        Train => "train", "Train";
        Metro => "metro", "Metro";
        Auto => "auto", "Auto Rickshaw";
        Cycle => "cycle", "Cycle";
        Walk => "walk", "Walking";
    }
}

emission_kind! {
    FoodType in Category::Diet => {
        Rice => "rice", "Rice";
        Wheat => "wheat", "Wheat";
        Pulses => "pulses", "Pulses";
        Vegetables => "vegetables", "Vegetables";
        Fruits => "fruits", "Fruits";
        Milk => "milk", "Milk & Dairy";
        Eggs => "eggs", "Eggs";
        Chicken => "chicken", "Chicken";
        Mutton => "mutton", "Mutton";
        Fish => "fish", "Fish";
        ProcessedFood => "processed_food", "Processed Food";
    }
}

emission_kind! {
    WasteType in Category::Waste => {
        Organic => "organic", "Organic Waste";
        Plastic => "plastic", "Plastic Waste";
        Paper => "paper", "Paper Waste";
        Glass => "glass", "Glass Waste";
        Metal => "metal", "Metal Waste";
        Electronic => "electronic", "Electronic Waste";
    }
}

impl FuelType {
    /// Unit the quantity of this fuel is normally entered in.
    pub const fn default_unit(self) -> &'static str {
        match self {
            FuelType::Electricity => "kWh",
            FuelType::Kerosene => "liter",
            FuelType::Biogas => "m3",
            FuelType::Lpg | FuelType::Firewood | FuelType::Charcoal => "kg",
        }
    }
}
