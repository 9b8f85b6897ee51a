use carbon_calc::DietRecord;
use diesel::{Associations, Identifiable, Insertable, Queryable, Selectable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::StoredDecimal;
use crate::schema::diets;

#[derive(
    Queryable, Selectable, Identifiable, Associations, Debug, Clone, PartialEq, Serialize, Deserialize, TS,
)]
#[diesel(belongs_to(crate::models::household::Household))]
#[diesel(table_name = diets)]
#[ts(export)]
pub struct Diet {
    pub id: i32,
    pub household_id: i32,
    pub food_type: String,
    #[diesel(deserialize_as = StoredDecimal)]
    #[ts(type = "string")]
    pub consumption_kg: Decimal,
    #[ts(type = "string")]
    pub month: chrono::NaiveDate,
    #[ts(type = "string")]
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = diets)]
pub struct NewDiet {
    pub household_id: i32,
    pub food_type: String,
    #[diesel(serialize_as = StoredDecimal)]
    pub consumption_kg: Decimal,
    pub month: chrono::NaiveDate,
}

impl From<&Diet> for DietRecord {
    fn from(diet: &Diet) -> Self {
        DietRecord::new(diet.food_type.clone(), diet.consumption_kg)
    }
}
