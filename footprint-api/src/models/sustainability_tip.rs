use std::fmt;
use std::str::FromStr;

use diesel::{Identifiable, Insertable, Queryable, Selectable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::StoredDecimal;
use crate::schema::sustainability_tips;

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[diesel(table_name = sustainability_tips)]
#[ts(export)]
pub struct SustainabilityTip {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Potential CO2 savings in kg.
    #[diesel(deserialize_as = StoredDecimal)]
    #[ts(type = "string")]
    pub impact_kg_co2: Decimal,
    /// Tip is specific to Indian households.
    pub indian_context: bool,
    #[ts(type = "string")]
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = sustainability_tips)]
pub struct NewSustainabilityTip {
    pub title: String,
    pub description: String,
    pub category: String,
    #[diesel(serialize_as = StoredDecimal)]
    pub impact_kg_co2: Decimal,
    pub indian_context: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum TipCategory {
    Energy,
    Transport,
    Diet,
    Waste,
    General,
}

impl TipCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            TipCategory::Energy => "energy",
            TipCategory::Transport => "transport",
            TipCategory::Diet => "diet",
            TipCategory::Waste => "waste",
            TipCategory::General => "general",
        }
    }
}

impl fmt::Display for TipCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TipCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "energy" => Ok(TipCategory::Energy),
            "transport" => Ok(TipCategory::Transport),
            "diet" => Ok(TipCategory::Diet),
            "waste" => Ok(TipCategory::Waste),
            "general" => Ok(TipCategory::General),
            other => Err(format!("Unknown tip category '{}'", other)),
        }
    }
}
