use std::sync::LazyLock;

use diesel::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::schema::households;

/// Largest family size accepted at data entry.
pub const MAX_FAMILY_SIZE: i32 = 20;

static PINCODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{6}$").expect("pincode pattern is valid"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HouseholdValidationError {
    #[error("Pincode must be exactly 6 digits, got '{0}'")]
    InvalidPincode(String),
    #[error("Family size must be between 1 and {max}, got {0}", max = MAX_FAMILY_SIZE)]
    FamilySizeOutOfRange(i32),
    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),
}

fn check_pincode(pincode: &str) -> Result<(), HouseholdValidationError> {
    if PINCODE_PATTERN.is_match(pincode) {
        Ok(())
    } else {
        Err(HouseholdValidationError::InvalidPincode(pincode.to_string()))
    }
}

fn check_family_size(size: i32) -> Result<(), HouseholdValidationError> {
    if (1..=MAX_FAMILY_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(HouseholdValidationError::FamilySizeOutOfRange(size))
    }
}

fn check_not_blank(field: &'static str, value: &str) -> Result<(), HouseholdValidationError> {
    if value.trim().is_empty() {
        Err(HouseholdValidationError::EmptyField(field))
    } else {
        Ok(())
    }
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[diesel(table_name = households)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[ts(export)]
pub struct Household {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub family_size: i32,
    #[ts(type = "string")]
    pub created_at: chrono::NaiveDateTime,
    #[ts(type = "string")]
    pub updated_at: chrono::NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = households)]
pub struct NewHousehold {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub family_size: i32,
}

impl NewHousehold {
    pub fn validate(&self) -> Result<(), HouseholdValidationError> {
        check_not_blank("name", &self.name)?;
        check_not_blank("city", &self.city)?;
        check_not_blank("state", &self.state)?;
        check_pincode(&self.pincode)?;
        check_family_size(self.family_size)
    }
}

/// Partial update; `None` fields keep their current value.
#[derive(AsChangeset, Debug, Clone, Default)]
#[diesel(table_name = households)]
pub struct HouseholdChanges {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub family_size: Option<i32>,
}

impl HouseholdChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.address.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.pincode.is_none()
            && self.family_size.is_none()
    }

    pub fn validate(&self) -> Result<(), HouseholdValidationError> {
        if let Some(name) = &self.name {
            check_not_blank("name", name)?;
        }
        if let Some(city) = &self.city {
            check_not_blank("city", city)?;
        }
        if let Some(state) = &self.state {
            check_not_blank("state", state)?;
        }
        if let Some(pincode) = &self.pincode {
            check_pincode(pincode)?;
        }
        if let Some(size) = self.family_size {
            check_family_size(size)?;
        }
        Ok(())
    }
}
