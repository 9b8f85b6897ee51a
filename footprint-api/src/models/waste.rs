use carbon_calc::WasteRecord;
use diesel::{Associations, Identifiable, Insertable, Queryable, Selectable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::StoredDecimal;
use crate::schema::wastes;

#[derive(
    Queryable, Selectable, Identifiable, Associations, Debug, Clone, PartialEq, Serialize, Deserialize, TS,
)]
#[diesel(belongs_to(crate::models::household::Household))]
#[diesel(table_name = wastes)]
#[ts(export)]
pub struct Waste {
    pub id: i32,
    pub household_id: i32,
    pub waste_type: String,
    #[diesel(deserialize_as = StoredDecimal)]
    #[ts(type = "string")]
    pub quantity_kg: Decimal,
    #[ts(type = "string")]
    pub month: chrono::NaiveDate,
    #[ts(type = "string")]
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = wastes)]
pub struct NewWaste {
    pub household_id: i32,
    pub waste_type: String,
    #[diesel(serialize_as = StoredDecimal)]
    pub quantity_kg: Decimal,
    pub month: chrono::NaiveDate,
}

impl From<&Waste> for WasteRecord {
    fn from(waste: &Waste) -> Self {
        WasteRecord::new(waste.waste_type.clone(), waste.quantity_kg)
    }
}
