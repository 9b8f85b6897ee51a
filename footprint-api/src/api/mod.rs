//! HTTP API, mounted under `/api`. Every route lives under `/api/1/`.

use diesel::SqliteConnection;
use rocket::Route;
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use serde::Serialize;
use ts_rs::TS;

use crate::models::{Household, Month};
use crate::orm::household::get_household_by_id;

pub mod consumption;
pub mod footprint;
pub mod household;
pub mod status;
pub mod tip;

/// Error body shared by all endpoints.
#[derive(Serialize, TS, Debug)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
    /// Set when the household has to be created before the request can work.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_required: Option<bool>,
}

pub type ApiError = Custom<Json<ErrorResponse>>;

pub(crate) fn api_error(code: Status, message: impl Into<String>) -> ApiError {
    Custom(code, Json(ErrorResponse { error: message.into(), setup_required: None }))
}

/// Logs `err` and hides it behind a generic 500.
pub(crate) fn internal_error(action: &str, err: impl std::fmt::Debug) -> ApiError {
    error!("Error {}: {:?}", action, err);
    api_error(Status::InternalServerError, format!("Internal server error while {}", action))
}

pub(crate) fn household_not_found(household_id: i32) -> ApiError {
    Custom(
        Status::NotFound,
        Json(ErrorResponse {
            error: format!("Household with ID {} not found. Please set up your household profile.", household_id),
            setup_required: Some(true),
        }),
    )
}

/// Loads the household or answers 404 with `setup_required`.
pub(crate) fn require_household(
    conn: &mut SqliteConnection,
    household_id: i32,
) -> Result<Household, ApiError> {
    match get_household_by_id(conn, household_id) {
        Ok(Some(household)) => Ok(household),
        Ok(None) => Err(household_not_found(household_id)),
        Err(e) => Err(internal_error("loading household", e)),
    }
}

pub(crate) fn parse_month(raw: &str) -> Result<Month, ApiError> {
    Month::parse(raw).map_err(|e| api_error(Status::BadRequest, e.to_string()))
}

pub(crate) fn parse_optional_month(raw: Option<&str>) -> Result<Option<Month>, ApiError> {
    raw.map(parse_month).transpose()
}

pub fn routes() -> Vec<Route> {
    let mut routes = Vec::new();
    routes.extend(status::routes());
    routes.extend(household::routes());
    routes.extend(consumption::routes());
    routes.extend(footprint::routes());
    routes.extend(tip::routes());
    routes
}
