//! Sustainability tips.

use rocket::Route;
use rocket::http::Status;
use rocket::serde::json::Json;
use serde::Serialize;
use ts_rs::TS;

use crate::api::{ApiError, api_error, internal_error};
use crate::models::{SustainabilityTip, TipCategory};
use crate::orm::DbConn;
use crate::orm::tip::{count_tips, get_tips, seed_sample_tips};

#[derive(Serialize, TS, Debug)]
#[ts(export)]
pub struct SeedTipsResponse {
    pub created: usize,
    pub total: i64,
}

/// `GET /api/1/Tips?category=energy`
///
/// Tips for Indian households; `category` is one of energy, transport, diet,
/// waste, general.
#[get("/1/Tips?<category>")]
pub async fn list_tips(
    db: DbConn,
    category: Option<String>,
) -> Result<Json<Vec<SustainabilityTip>>, ApiError> {
    let category = category
        .filter(|c| !c.is_empty())
        .map(|c| c.parse::<TipCategory>())
        .transpose()
        .map_err(|e| api_error(Status::BadRequest, e))?;

    db.run(move |conn| {
        get_tips(conn, category, None)
            .map(Json)
            .map_err(|e| internal_error("listing tips", e))
    })
    .await
}

/// `POST /api/1/Tips/Seed`
///
/// Adds any missing sample tips. Safe to repeat.
#[post("/1/Tips/Seed")]
pub async fn seed_tips(db: DbConn) -> Result<Json<SeedTipsResponse>, ApiError> {
    db.run(|conn| {
        let created = seed_sample_tips(conn).map_err(|e| internal_error("seeding tips", e))?;
        let total = count_tips(conn).map_err(|e| internal_error("counting tips", e))?;
        info!("Seeded {} sample tips ({} total)", created, total);
        Ok(Json(SeedTipsResponse { created, total }))
    })
    .await
}

pub fn routes() -> Vec<Route> {
    routes![list_tips, seed_tips]
}
