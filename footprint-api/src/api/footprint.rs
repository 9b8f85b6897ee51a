//! Footprint calculation, history and reporting endpoints.
//!
//! Results are stored per (household, month). `POST` recomputes from the
//! month's consumption records and overwrites the stored row; the `GET`
//! endpoints only read stored results.

use carbon_calc::{
    FootprintBreakdown, INDIAN_AVERAGES, RegionalAverages, categorize_per_person_footprint,
};
use diesel::SqliteConnection;
use rocket::Route;
use rocket::http::Status;
use rocket::serde::json::Json;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use ts_rs::TS;

use crate::api::{ApiError, api_error, internal_error, parse_month, require_household};
use crate::models::{CarbonFootprint, Household, Month, SustainabilityTip};
use crate::orm::DbConn;
use crate::orm::footprint::{
    HISTORY_MONTHS, average_footprint, get_footprint, get_footprints, get_recent_footprints,
    recompute_footprint,
};
use crate::orm::tip::get_tips;

/// Tips shown on the dashboard.
const DASHBOARD_TIPS: i64 = 5;

/// Per-person value and its rating. `level` is `unknown` when there is no
/// stored result to rate.
#[derive(Serialize, TS, Debug, Clone, PartialEq)]
#[ts(export)]
pub struct FootprintRating {
    #[ts(type = "string")]
    pub per_person: Decimal,
    pub level: String,
    pub message: String,
}

impl FootprintRating {
    fn unknown() -> Self {
        FootprintRating {
            per_person: Decimal::ZERO,
            level: "unknown".to_string(),
            message: "No data available for current month.".to_string(),
        }
    }
}

#[derive(Serialize, TS, Debug)]
#[ts(export)]
pub struct FootprintResult {
    pub month: String,
    pub footprint: CarbonFootprint,
    #[serde(flatten)]
    #[ts(flatten)]
    pub rating: FootprintRating,
    #[ts(type = "{ low_income: string, middle_income: string, high_income: string }")]
    pub regional_averages: RegionalAverages,
}

#[derive(Serialize, TS, Debug)]
#[ts(export)]
pub struct Dashboard {
    pub household: Household,
    pub current_month: String,
    pub current_footprint: Option<CarbonFootprint>,
    #[serde(flatten)]
    #[ts(flatten)]
    pub rating: FootprintRating,
    pub footprints: Vec<CarbonFootprint>,
    pub tips: Vec<SustainabilityTip>,
}

#[derive(Serialize, TS, Debug)]
#[ts(export)]
pub struct Report {
    pub household: Household,
    pub footprints: Vec<CarbonFootprint>,
    #[ts(type = "{ total: string, energy: string, transport: string, diet: string, waste: string }")]
    pub averages: FootprintBreakdown,
    #[ts(type = "{ low_income: string, middle_income: string, high_income: string }")]
    pub regional_averages: RegionalAverages,
}

#[derive(Serialize, TS, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChartDataset {
    pub label: &'static str,
    pub data: Vec<f64>,
    pub border_color: &'static str,
    pub background_color: &'static str,
}

#[derive(Serialize, TS, Debug, Clone, PartialEq)]
#[ts(export)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

/// Line series drawn by the chart, in display order.
const CHART_SERIES: [(&str, &str, &str, fn(&CarbonFootprint) -> Decimal); 5] = [
    ("Total Footprint", "#28a745", "rgba(40, 167, 69, 0.1)", |f: &CarbonFootprint| f.total_footprint),
    ("Energy", "#ffc107", "rgba(255, 193, 7, 0.1)", |f: &CarbonFootprint| f.energy_footprint),
    ("Transport", "#17a2b8", "rgba(23, 162, 184, 0.1)", |f: &CarbonFootprint| f.transport_footprint),
    ("Diet", "#dc3545", "rgba(220, 53, 69, 0.1)", |f: &CarbonFootprint| f.diet_footprint),
    ("Waste", "#6c757d", "rgba(108, 117, 125, 0.1)", |f: &CarbonFootprint| f.waste_footprint),
];

/// Builds the chart payload from results already in ascending month order.
pub fn chart_data(footprints: &[CarbonFootprint]) -> ChartData {
    ChartData {
        labels: footprints.iter().map(|f| f.month().label()).collect(),
        datasets: CHART_SERIES
            .iter()
            .map(|&(label, border_color, background_color, pick)| ChartDataset {
                label,
                data: footprints.iter().map(|f| pick(f).to_f64().unwrap_or_default()).collect(),
                border_color,
                background_color,
            })
            .collect(),
    }
}

fn rate(household: &Household, footprint: &CarbonFootprint) -> Result<FootprintRating, ApiError> {
    let rated = categorize_per_person_footprint(footprint.total_footprint, household.family_size)
        .map_err(|e| internal_error("rating footprint", e))?;
    Ok(FootprintRating {
        per_person: rated.per_person,
        level: rated.level.as_str().to_string(),
        message: rated.message.to_string(),
    })
}

fn recompute_for(
    conn: &mut SqliteConnection,
    household_id: i32,
    month: Month,
) -> Result<FootprintResult, ApiError> {
    let household = require_household(conn, household_id)?;
    let footprint = recompute_footprint(conn, household_id, month)
        .map_err(|e| internal_error("recomputing footprint", e))?;
    let rating = rate(&household, &footprint)?;
    Ok(FootprintResult {
        month: month.to_string(),
        footprint,
        rating,
        regional_averages: INDIAN_AVERAGES,
    })
}

/// `POST /api/1/Households/<household_id>/Footprints`
///
/// Recomputes the current month.
#[post("/1/Households/<household_id>/Footprints")]
pub async fn recompute_current_month(
    db: DbConn,
    household_id: i32,
) -> Result<Json<FootprintResult>, ApiError> {
    let month = Month::current();
    db.run(move |conn| recompute_for(conn, household_id, month).map(Json)).await
}

/// `POST /api/1/Households/<household_id>/Footprints/<month>`
///
/// Recomputes `month` (`YYYY-MM`) from its consumption records and stores
/// the result, replacing any earlier one.
///
/// ```json
/// {
///   "month": "2025-03",
///   "footprint": { "id": 1, "household_id": 1, "month": "2025-03-01", "total_footprint": "87.196", ... },
///   "per_person": "21.799",
///   "level": "low",
///   "message": "Excellent! You have a low carbon footprint.",
///   "regional_averages": { "low_income": "150", "middle_income": "300", "high_income": "600" }
/// }
/// ```
#[post("/1/Households/<household_id>/Footprints/<month>")]
pub async fn recompute_month(
    db: DbConn,
    household_id: i32,
    month: &str,
) -> Result<Json<FootprintResult>, ApiError> {
    let month = parse_month(month)?;
    db.run(move |conn| recompute_for(conn, household_id, month).map(Json)).await
}

/// `GET /api/1/Households/<household_id>/Footprints/<month>`
#[get("/1/Households/<household_id>/Footprints/<month>")]
pub async fn get_month_footprint(
    db: DbConn,
    household_id: i32,
    month: &str,
) -> Result<Json<FootprintResult>, ApiError> {
    let month = parse_month(month)?;
    db.run(move |conn| {
        let household = require_household(conn, household_id)?;
        let footprint = get_footprint(conn, household_id, month)
            .map_err(|e| internal_error("loading footprint", e))?
            .ok_or_else(|| {
                api_error(Status::NotFound, format!("No footprint calculated for {}", month))
            })?;
        let rating = rate(&household, &footprint)?;
        Ok(Json(FootprintResult {
            month: month.to_string(),
            footprint,
            rating,
            regional_averages: INDIAN_AVERAGES,
        }))
    })
    .await
}

/// `GET /api/1/Households/<household_id>/Footprints`
///
/// Every stored result, oldest month first.
#[get("/1/Households/<household_id>/Footprints")]
pub async fn list_footprints(
    db: DbConn,
    household_id: i32,
) -> Result<Json<Vec<CarbonFootprint>>, ApiError> {
    db.run(move |conn| {
        require_household(conn, household_id)?;
        get_footprints(conn, household_id)
            .map(Json)
            .map_err(|e| internal_error("listing footprints", e))
    })
    .await
}

/// `GET /api/1/Households/<household_id>/Dashboard`
#[get("/1/Households/<household_id>/Dashboard")]
pub async fn dashboard(db: DbConn, household_id: i32) -> Result<Json<Dashboard>, ApiError> {
    let month = Month::current();
    db.run(move |conn| {
        let household = require_household(conn, household_id)?;
        let current_footprint = get_footprint(conn, household_id, month)
            .map_err(|e| internal_error("loading footprint", e))?;
        let rating = match &current_footprint {
            Some(footprint) => rate(&household, footprint)?,
            None => FootprintRating::unknown(),
        };
        let footprints = get_recent_footprints(conn, household_id, HISTORY_MONTHS)
            .map_err(|e| internal_error("loading footprint history", e))?;
        let tips = get_tips(conn, None, Some(DASHBOARD_TIPS))
            .map_err(|e| internal_error("loading tips", e))?;

        Ok(Json(Dashboard {
            household,
            current_month: month.to_string(),
            current_footprint,
            rating,
            footprints,
            tips,
        }))
    })
    .await
}

/// `GET /api/1/Households/<household_id>/Reports`
///
/// The last 12 stored months with per-category averages over them.
#[get("/1/Households/<household_id>/Reports")]
pub async fn report(db: DbConn, household_id: i32) -> Result<Json<Report>, ApiError> {
    db.run(move |conn| {
        let household = require_household(conn, household_id)?;
        let footprints = get_recent_footprints(conn, household_id, HISTORY_MONTHS)
            .map_err(|e| internal_error("loading footprint history", e))?;
        let averages = average_footprint(&footprints);
        Ok(Json(Report { household, footprints, averages, regional_averages: INDIAN_AVERAGES }))
    })
    .await
}

/// `GET /api/1/Households/<household_id>/ChartData`
///
/// ```json
/// {
///   "labels": ["Jan 2025", "Feb 2025"],
///   "datasets": [
///     { "label": "Total Footprint", "data": [289.42, 301.1], "borderColor": "#28a745", "backgroundColor": "rgba(40, 167, 69, 0.1)" },
///     ...
///   ]
/// }
/// ```
#[get("/1/Households/<household_id>/ChartData")]
pub async fn chart(db: DbConn, household_id: i32) -> Result<Json<ChartData>, ApiError> {
    db.run(move |conn| {
        require_household(conn, household_id)?;
        get_recent_footprints(conn, household_id, HISTORY_MONTHS)
            .map(|footprints| Json(chart_data(&footprints)))
            .map_err(|e| internal_error("loading footprint history", e))
    })
    .await
}

pub fn routes() -> Vec<Route> {
    routes![
        recompute_current_month,
        recompute_month,
        get_month_footprint,
        list_footprints,
        dashboard,
        report,
        chart
    ]
}
