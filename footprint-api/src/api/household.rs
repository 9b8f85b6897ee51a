//! Household profile endpoints.
//!
//! A household is the unit everything else hangs off: consumption records,
//! stored footprints and the per-person rating (via `family_size`).

use rocket::Route;
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::api::{ApiError, api_error, household_not_found, internal_error, require_household};
use crate::logged_json::LoggedJson;
use crate::models::{Household, HouseholdChanges, NewHousehold};
use crate::orm::DbConn;
use crate::orm::household::{delete_household, get_all_households, insert_household, update_household};

#[derive(Deserialize, Serialize, TS, Debug)]
#[ts(export)]
pub struct CreateHouseholdRequest {
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub family_size: i32,
}

/// Only the fields present are changed.
#[derive(Deserialize, Serialize, TS, Debug, Default)]
#[ts(export)]
pub struct UpdateHouseholdRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub family_size: Option<i32>,
}

impl From<CreateHouseholdRequest> for NewHousehold {
    fn from(req: CreateHouseholdRequest) -> Self {
        NewHousehold {
            name: req.name.trim().to_string(),
            address: req.address.trim().to_string(),
            city: req.city.trim().to_string(),
            state: req.state.trim().to_string(),
            pincode: req.pincode.trim().to_string(),
            family_size: req.family_size,
        }
    }
}

impl From<UpdateHouseholdRequest> for HouseholdChanges {
    fn from(req: UpdateHouseholdRequest) -> Self {
        let trimmed = |value: Option<String>| value.map(|v| v.trim().to_string());
        HouseholdChanges {
            name: trimmed(req.name),
            address: trimmed(req.address),
            city: trimmed(req.city),
            state: trimmed(req.state),
            pincode: trimmed(req.pincode),
            family_size: req.family_size,
        }
    }
}

/// `POST /api/1/Households`
///
/// ```json
/// {
///   "name": "Sharma Family",
///   "address": "12 MG Road",
///   "city": "Pune",
///   "state": "Maharashtra",
///   "pincode": "411001",
///   "family_size": 4
/// }
/// ```
///
/// Responds 201 with the stored household, or 422 when a field is invalid
/// (pincode not 6 digits, family size outside 1..=20, blank name/city/state).
#[post("/1/Households", data = "<request>")]
pub async fn create_household(
    db: DbConn,
    request: LoggedJson<CreateHouseholdRequest>,
) -> Result<status::Created<Json<Household>>, ApiError> {
    let new_household = NewHousehold::from(request.into_inner());
    new_household
        .validate()
        .map_err(|e| api_error(Status::UnprocessableEntity, e.to_string()))?;

    db.run(move |conn| {
        insert_household(conn, &new_household)
            .map(|household| {
                let location = format!("/api/1/Households/{}", household.id);
                status::Created::new(location).body(Json(household))
            })
            .map_err(|e| internal_error("creating household", e))
    })
    .await
}

/// `GET /api/1/Households`
#[get("/1/Households")]
pub async fn list_households(db: DbConn) -> Result<Json<Vec<Household>>, ApiError> {
    db.run(|conn| {
        get_all_households(conn)
            .map(Json)
            .map_err(|e| internal_error("listing households", e))
    })
    .await
}

/// `GET /api/1/Households/<household_id>`
#[get("/1/Households/<household_id>")]
pub async fn get_household(db: DbConn, household_id: i32) -> Result<Json<Household>, ApiError> {
    db.run(move |conn| require_household(conn, household_id).map(Json)).await
}

/// `PUT /api/1/Households/<household_id>`
#[put("/1/Households/<household_id>", data = "<request>")]
pub async fn update_household_endpoint(
    db: DbConn,
    household_id: i32,
    request: LoggedJson<UpdateHouseholdRequest>,
) -> Result<Json<Household>, ApiError> {
    let changes = HouseholdChanges::from(request.into_inner());
    changes
        .validate()
        .map_err(|e| api_error(Status::UnprocessableEntity, e.to_string()))?;

    db.run(move |conn| {
        require_household(conn, household_id)?;
        update_household(conn, household_id, &changes)
            .map(Json)
            .map_err(|e| internal_error("updating household", e))
    })
    .await
}

/// `DELETE /api/1/Households/<household_id>`
///
/// Removes the household with all its consumption records and footprints.
#[delete("/1/Households/<household_id>")]
pub async fn delete_household_endpoint(db: DbConn, household_id: i32) -> Result<Status, ApiError> {
    db.run(move |conn| match delete_household(conn, household_id) {
        Ok(0) => Err(household_not_found(household_id)),
        Ok(_) => {
            info!("Deleted household {}", household_id);
            Ok(Status::NoContent)
        }
        Err(e) => Err(internal_error("deleting household", e)),
    })
    .await
}

pub fn routes() -> Vec<Route> {
    routes![
        create_household,
        list_households,
        get_household,
        update_household_endpoint,
        delete_household_endpoint
    ]
}
