use carbon_calc::EnergyRecord;
use diesel::{Associations, Identifiable, Insertable, Queryable, Selectable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::StoredDecimal;
use crate::schema::energy_usages;

#[derive(
    Queryable, Selectable, Identifiable, Associations, Debug, Clone, PartialEq, Serialize, Deserialize, TS,
)]
#[diesel(belongs_to(crate::models::household::Household))]
#[diesel(table_name = energy_usages)]
#[ts(export)]
pub struct EnergyUsage {
    pub id: i32,
    pub household_id: i32,
    pub fuel_type: String,
    #[diesel(deserialize_as = StoredDecimal)]
    #[ts(type = "string")]
    pub consumption: Decimal,
    pub unit: String,
    #[ts(type = "string")]
    pub month: chrono::NaiveDate,
    #[ts(type = "string")]
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = energy_usages)]
pub struct NewEnergyUsage {
    pub household_id: i32,
    pub fuel_type: String,
    #[diesel(serialize_as = StoredDecimal)]
    pub consumption: Decimal,
    pub unit: String,
    pub month: chrono::NaiveDate,
}

impl From<&EnergyUsage> for EnergyRecord {
    fn from(usage: &EnergyUsage) -> Self {
        EnergyRecord::new(usage.fuel_type.clone(), usage.consumption)
    }
}
