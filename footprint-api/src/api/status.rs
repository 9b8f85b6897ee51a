//! Liveness, build information and a database check.

use rocket::{Route, serde::json::Json};
use serde::Serialize;
use ts_rs::TS;

use crate::api::{ApiError, internal_error};
use crate::orm::DbConn;
use crate::orm::household::count_households;
use crate::orm::tip::count_tips;

pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

#[derive(Serialize, TS)]
#[ts(export)]
pub struct HealthStatus {
    status: &'static str,
    version: &'static str,
    built: &'static str,
    git_commit: Option<&'static str>,
    households: i64,
    tips: i64,
}

/// `GET /api/1/status`
///
/// Answers 500 when the database cannot be queried.
///
/// ```json
/// {
///   "status": "running",
///   "version": "0.1.0",
///   "built": "Sun, 01 Jun 2025 10:00:00 +0000",
///   "git_commit": "3f1c2d9...",
///   "households": 12,
///   "tips": 10
/// }
/// ```
#[get("/1/status")]
pub async fn health_status(db: DbConn) -> Result<Json<HealthStatus>, ApiError> {
    let (households, tips) = db
        .run(|conn| Ok::<_, diesel::result::Error>((count_households(conn)?, count_tips(conn)?)))
        .await
        .map_err(|e| internal_error("checking database", e))?;

    Ok(Json(HealthStatus {
        status: "running",
        version: built_info::PKG_VERSION,
        built: built_info::BUILT_TIME_UTC,
        git_commit: built_info::GIT_COMMIT_HASH,
        households,
        tips,
    }))
}

pub fn routes() -> Vec<Route> {
    routes![health_status]
}
