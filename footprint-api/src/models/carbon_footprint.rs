use carbon_calc::FootprintBreakdown;
use diesel::{Associations, Identifiable, Insertable, Queryable, Selectable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::{Month, StoredDecimal};
use crate::schema::carbon_footprints;

/// Stored footprint of one household-month, in kg CO2e. Unique per
/// (household, month); rewritten whenever the month is recomputed.
#[derive(
    Queryable, Selectable, Identifiable, Associations, Debug, Clone, PartialEq, Serialize, Deserialize, TS,
)]
#[diesel(belongs_to(crate::models::household::Household))]
#[diesel(table_name = carbon_footprints)]
#[ts(export)]
pub struct CarbonFootprint {
    pub id: i32,
    pub household_id: i32,
    #[ts(type = "string")]
    pub month: chrono::NaiveDate,
    #[diesel(deserialize_as = StoredDecimal)]
    #[ts(type = "string")]
    pub total_footprint: Decimal,
    #[diesel(deserialize_as = StoredDecimal)]
    #[ts(type = "string")]
    pub energy_footprint: Decimal,
    #[diesel(deserialize_as = StoredDecimal)]
    #[ts(type = "string")]
    pub transport_footprint: Decimal,
    #[diesel(deserialize_as = StoredDecimal)]
    #[ts(type = "string")]
    pub diet_footprint: Decimal,
    #[diesel(deserialize_as = StoredDecimal)]
    #[ts(type = "string")]
    pub waste_footprint: Decimal,
    #[ts(type = "string")]
    pub created_at: chrono::NaiveDateTime,
    #[ts(type = "string")]
    pub updated_at: chrono::NaiveDateTime,
}

impl CarbonFootprint {
    pub fn breakdown(&self) -> FootprintBreakdown {
        FootprintBreakdown {
            total: self.total_footprint,
            energy: self.energy_footprint,
            transport: self.transport_footprint,
            diet: self.diet_footprint,
            waste: self.waste_footprint,
        }
    }

    pub fn month(&self) -> Month {
        Month::from_date(self.month)
    }
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = carbon_footprints)]
pub struct NewCarbonFootprint {
    pub household_id: i32,
    pub month: chrono::NaiveDate,
    #[diesel(serialize_as = StoredDecimal)]
    pub total_footprint: Decimal,
    #[diesel(serialize_as = StoredDecimal)]
    pub energy_footprint: Decimal,
    #[diesel(serialize_as = StoredDecimal)]
    pub transport_footprint: Decimal,
    #[diesel(serialize_as = StoredDecimal)]
    pub diet_footprint: Decimal,
    #[diesel(serialize_as = StoredDecimal)]
    pub waste_footprint: Decimal,
}

impl NewCarbonFootprint {
    pub fn from_breakdown(household_id: i32, month: Month, breakdown: FootprintBreakdown) -> Self {
        Self {
            household_id,
            month: month.first_day(),
            total_footprint: breakdown.total,
            energy_footprint: breakdown.energy,
            transport_footprint: breakdown.transport,
            diet_footprint: breakdown.diet,
            waste_footprint: breakdown.waste,
        }
    }
}
