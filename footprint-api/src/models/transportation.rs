use carbon_calc::TransportRecord;
use diesel::{Associations, Identifiable, Insertable, Queryable, Selectable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::StoredDecimal;
use crate::schema::transportations;

/// A recurring trip: distance per trip and trips per week.
#[derive(
    Queryable, Selectable, Identifiable, Associations, Debug, Clone, PartialEq, Serialize, Deserialize, TS,
)]
#[diesel(belongs_to(crate::models::household::Household))]
#[diesel(table_name = transportations)]
#[ts(export)]
pub struct Transportation {
    pub id: i32,
    pub household_id: i32,
    pub vehicle_type: String,
    #[diesel(deserialize_as = StoredDecimal)]
    #[ts(type = "string")]
    pub distance_km: Decimal,
    pub frequency_per_week: i32,
    #[ts(type = "string")]
    pub month: chrono::NaiveDate,
    #[ts(type = "string")]
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = transportations)]
pub struct NewTransportation {
    pub household_id: i32,
    pub vehicle_type: String,
    #[diesel(serialize_as = StoredDecimal)]
    pub distance_km: Decimal,
    pub frequency_per_week: i32,
    pub month: chrono::NaiveDate,
}

impl From<&Transportation> for TransportRecord {
    fn from(trip: &Transportation) -> Self {
        TransportRecord::new(
            trip.vehicle_type.clone(),
            trip.distance_km,
            u32::try_from(trip.frequency_per_week).unwrap_or_default(),
        )
    }
}
