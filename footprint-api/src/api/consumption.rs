//! Monthly consumption data entry.
//!
//! Records are append-only. Adding records does not touch the stored
//! footprint; the household recomputes it through the footprint endpoints,
//! except for the bulk form which recomputes the month straight away.

use std::str::FromStr;

use carbon_calc::{FoodType, FuelType, VehicleType, WasteType};
use rocket::Route;
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::api::{
    ApiError, api_error, internal_error, parse_month, parse_optional_month, require_household,
};
use crate::logged_json::LoggedJson;
use crate::models::{
    AMOUNT_MAX_DIGITS, BulkEntry, CarbonFootprint, Diet, ENERGY_MAX_DIGITS, EnergyUsage, NewDiet,
    NewEnergyUsage, NewTransportation, NewWaste, Transportation, Waste, check_quantity,
};
use crate::orm::DbConn;
use crate::orm::consumption::{
    get_diets, get_energy_usages, get_transportations, get_wastes, insert_bulk_records, insert_diet,
    insert_energy_usage, insert_transportation, insert_waste,
};
use crate::orm::footprint::recompute_footprint;

const ENERGY_UNITS: [&str; 4] = ["kWh", "kg", "liter", "m3"];
const MAX_TRIPS_PER_WEEK: i32 = 7;

#[derive(Deserialize, Serialize, TS, Debug)]
#[ts(export)]
pub struct EnergyUsageRequest {
    pub fuel_type: String,
    #[ts(type = "string | number")]
    pub consumption: Decimal,
    /// Defaults to the usual unit of the fuel.
    pub unit: Option<String>,
    /// `YYYY-MM`
    pub month: String,
}

#[derive(Deserialize, Serialize, TS, Debug)]
#[ts(export)]
pub struct TransportationRequest {
    pub vehicle_type: String,
    /// Distance of one trip.
    #[ts(type = "string | number")]
    pub distance_km: Decimal,
    pub frequency_per_week: i32,
    pub month: String,
}

#[derive(Deserialize, Serialize, TS, Debug)]
#[ts(export)]
pub struct DietRequest {
    pub food_type: String,
    #[ts(type = "string | number")]
    pub consumption_kg: Decimal,
    pub month: String,
}

#[derive(Deserialize, Serialize, TS, Debug)]
#[ts(export)]
pub struct WasteRequest {
    pub waste_type: String,
    #[ts(type = "string | number")]
    pub quantity_kg: Decimal,
    pub month: String,
}

#[derive(Deserialize, Serialize, TS, Debug)]
#[ts(export)]
pub struct BulkEntryRequest {
    pub month: String,
    #[serde(flatten)]
    #[ts(flatten)]
    pub entry: BulkEntry,
}

#[derive(Serialize, TS, Debug)]
#[ts(export)]
pub struct BulkEntryResponse {
    pub records_created: usize,
    pub footprint: CarbonFootprint,
}

fn unprocessable(message: impl Into<String>) -> ApiError {
    api_error(Status::UnprocessableEntity, message)
}

fn check_field(field: &'static str, value: Decimal, max_digits: u32) -> Result<(), ApiError> {
    check_quantity(field, value, max_digits).map_err(|e| unprocessable(e.to_string()))
}

fn check_type<T: FromStr<Err = carbon_calc::FootprintError>>(key: &str) -> Result<T, ApiError> {
    key.parse::<T>().map_err(|e| unprocessable(e.to_string()))
}

fn records_location(household_id: i32, category: &str) -> String {
    format!("/api/1/Households/{}/{}", household_id, category)
}

/// `POST /api/1/Households/<household_id>/Energy`
///
/// ```json
/// { "fuel_type": "electricity", "consumption": "180.5", "unit": "kWh", "month": "2025-03" }
/// ```
#[post("/1/Households/<household_id>/Energy", data = "<request>")]
pub async fn add_energy_usage(
    db: DbConn,
    household_id: i32,
    request: LoggedJson<EnergyUsageRequest>,
) -> Result<status::Created<Json<EnergyUsage>>, ApiError> {
    let request = request.into_inner();
    let fuel: FuelType = check_type(&request.fuel_type)?;
    check_field("consumption", request.consumption, ENERGY_MAX_DIGITS)?;
    let unit = request.unit.unwrap_or_else(|| fuel.default_unit().to_string());
    if !ENERGY_UNITS.contains(&unit.as_str()) {
        return Err(unprocessable(format!(
            "Unknown unit '{}': expected one of {}",
            unit,
            ENERGY_UNITS.join(", ")
        )));
    }
    let month = parse_month(&request.month)?;

    let new_usage = NewEnergyUsage {
        household_id,
        fuel_type: fuel.key().to_string(),
        consumption: request.consumption,
        unit,
        month: month.first_day(),
    };

    db.run(move |conn| {
        require_household(conn, household_id)?;
        insert_energy_usage(conn, new_usage)
            .map(|usage| {
                status::Created::new(records_location(household_id, "Energy")).body(Json(usage))
            })
            .map_err(|e| internal_error("recording energy usage", e))
    })
    .await
}

/// `GET /api/1/Households/<household_id>/Energy?month=YYYY-MM`
#[get("/1/Households/<household_id>/Energy?<month>")]
pub async fn list_energy_usages(
    db: DbConn,
    household_id: i32,
    month: Option<String>,
) -> Result<Json<Vec<EnergyUsage>>, ApiError> {
    let month = parse_optional_month(month.as_deref())?;
    db.run(move |conn| {
        require_household(conn, household_id)?;
        get_energy_usages(conn, household_id, month)
            .map(Json)
            .map_err(|e| internal_error("listing energy usage", e))
    })
    .await
}

/// `POST /api/1/Households/<household_id>/Transport`
///
/// ```json
/// { "vehicle_type": "bus", "distance_km": 10, "frequency_per_week": 3, "month": "2025-03" }
/// ```
#[post("/1/Households/<household_id>/Transport", data = "<request>")]
pub async fn add_transportation(
    db: DbConn,
    household_id: i32,
    request: LoggedJson<TransportationRequest>,
) -> Result<status::Created<Json<Transportation>>, ApiError> {
    let request = request.into_inner();
    let vehicle: VehicleType = check_type(&request.vehicle_type)?;
    check_field("distance_km", request.distance_km, AMOUNT_MAX_DIGITS)?;
    if !(1..=MAX_TRIPS_PER_WEEK).contains(&request.frequency_per_week) {
        return Err(unprocessable(format!(
            "Field 'frequency_per_week' must be between 1 and {}, got {}",
            MAX_TRIPS_PER_WEEK, request.frequency_per_week
        )));
    }
    let month = parse_month(&request.month)?;

    let new_trip = NewTransportation {
        household_id,
        vehicle_type: vehicle.key().to_string(),
        distance_km: request.distance_km,
        frequency_per_week: request.frequency_per_week,
        month: month.first_day(),
    };

    db.run(move |conn| {
        require_household(conn, household_id)?;
        insert_transportation(conn, new_trip)
            .map(|trip| {
                status::Created::new(records_location(household_id, "Transport")).body(Json(trip))
            })
            .map_err(|e| internal_error("recording transportation", e))
    })
    .await
}

/// `GET /api/1/Households/<household_id>/Transport?month=YYYY-MM`
#[get("/1/Households/<household_id>/Transport?<month>")]
pub async fn list_transportations(
    db: DbConn,
    household_id: i32,
    month: Option<String>,
) -> Result<Json<Vec<Transportation>>, ApiError> {
    let month = parse_optional_month(month.as_deref())?;
    db.run(move |conn| {
        require_household(conn, household_id)?;
        get_transportations(conn, household_id, month)
            .map(Json)
            .map_err(|e| internal_error("listing transportation", e))
    })
    .await
}

/// `POST /api/1/Households/<household_id>/Diet`
#[post("/1/Households/<household_id>/Diet", data = "<request>")]
pub async fn add_diet(
    db: DbConn,
    household_id: i32,
    request: LoggedJson<DietRequest>,
) -> Result<status::Created<Json<Diet>>, ApiError> {
    let request = request.into_inner();
    let food: FoodType = check_type(&request.food_type)?;
    check_field("consumption_kg", request.consumption_kg, AMOUNT_MAX_DIGITS)?;
    let month = parse_month(&request.month)?;

    let new_diet = NewDiet {
        household_id,
        food_type: food.key().to_string(),
        consumption_kg: request.consumption_kg,
        month: month.first_day(),
    };

    db.run(move |conn| {
        require_household(conn, household_id)?;
        insert_diet(conn, new_diet)
            .map(|diet| status::Created::new(records_location(household_id, "Diet")).body(Json(diet)))
            .map_err(|e| internal_error("recording diet", e))
    })
    .await
}

/// `GET /api/1/Households/<household_id>/Diet?month=YYYY-MM`
#[get("/1/Households/<household_id>/Diet?<month>")]
pub async fn list_diets(
    db: DbConn,
    household_id: i32,
    month: Option<String>,
) -> Result<Json<Vec<Diet>>, ApiError> {
    let month = parse_optional_month(month.as_deref())?;
    db.run(move |conn| {
        require_household(conn, household_id)?;
        get_diets(conn, household_id, month)
            .map(Json)
            .map_err(|e| internal_error("listing diet", e))
    })
    .await
}

/// `POST /api/1/Households/<household_id>/Waste`
#[post("/1/Households/<household_id>/Waste", data = "<request>")]
pub async fn add_waste(
    db: DbConn,
    household_id: i32,
    request: LoggedJson<WasteRequest>,
) -> Result<status::Created<Json<Waste>>, ApiError> {
    let request = request.into_inner();
    let waste_type: WasteType = check_type(&request.waste_type)?;
    check_field("quantity_kg", request.quantity_kg, AMOUNT_MAX_DIGITS)?;
    let month = parse_month(&request.month)?;

    let new_waste = NewWaste {
        household_id,
        waste_type: waste_type.key().to_string(),
        quantity_kg: request.quantity_kg,
        month: month.first_day(),
    };

    db.run(move |conn| {
        require_household(conn, household_id)?;
        insert_waste(conn, new_waste)
            .map(|waste| status::Created::new(records_location(household_id, "Waste")).body(Json(waste)))
            .map_err(|e| internal_error("recording waste", e))
    })
    .await
}

/// `GET /api/1/Households/<household_id>/Waste?month=YYYY-MM`
#[get("/1/Households/<household_id>/Waste?<month>")]
pub async fn list_wastes(
    db: DbConn,
    household_id: i32,
    month: Option<String>,
) -> Result<Json<Vec<Waste>>, ApiError> {
    let month = parse_optional_month(month.as_deref())?;
    db.run(move |conn| {
        require_household(conn, household_id)?;
        get_wastes(conn, household_id, month)
            .map(Json)
            .map_err(|e| internal_error("listing waste", e))
    })
    .await
}

/// `POST /api/1/Households/<household_id>/BulkEntry`
///
/// One month of the most common quantities in a single form. Distances are
/// km per week. Absent or zero fields are skipped; the month's footprint is
/// recomputed afterwards.
///
/// ```json
/// {
///   "month": "2025-03",
///   "electricity_kwh": 150,
///   "lpg_kg": 14.2,
///   "bus_km": 120,
///   "rice_kg": 15,
///   "organic_waste_kg": 20
/// }
/// ```
#[post("/1/Households/<household_id>/BulkEntry", data = "<request>")]
pub async fn bulk_entry(
    db: DbConn,
    household_id: i32,
    request: LoggedJson<BulkEntryRequest>,
) -> Result<Json<BulkEntryResponse>, ApiError> {
    let request = request.into_inner();
    request.entry.validate().map_err(|e| unprocessable(e.to_string()))?;
    let month = parse_month(&request.month)?;
    let records = request.entry.into_records(household_id, month);

    db.run(move |conn| {
        require_household(conn, household_id)?;
        let records_created = insert_bulk_records(conn, records)
            .map_err(|e| internal_error("recording bulk entry", e))?;
        let footprint = recompute_footprint(conn, household_id, month)
            .map_err(|e| internal_error("recomputing footprint", e))?;
        Ok(Json(BulkEntryResponse { records_created, footprint }))
    })
    .await
}

pub fn routes() -> Vec<Route> {
    routes![
        add_energy_usage,
        list_energy_usages,
        add_transportation,
        list_transportations,
        add_diet,
        list_diets,
        add_waste,
        list_wastes,
        bulk_entry
    ]
}
