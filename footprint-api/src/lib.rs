#[macro_use]
extern crate rocket;

use std::path::Path;

use rocket::figment::value::Map;
use rocket::figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use rocket::fs::FileServer;
use rocket::request::Request;
use rocket::serde::json::{Json, Value, json};
use rocket::{Build, Rocket};

pub mod api;
pub mod logged_json;
pub mod models;
pub mod orm;
pub use orm::DbConn;
pub mod schema;
pub mod tip_seed_fairing;

#[cfg(test)]
pub mod generate_types;

fn error_body(error: &str, req: &Request, code: u16) -> Json<Value> {
    Json(json!({
        "error": error,
        "path": req.uri().path().to_string(),
        "status": code
    }))
}

#[catch(400)]
fn bad_request(req: &Request) -> Json<Value> {
    error_body("Bad Request", req, 400)
}

#[catch(404)]
fn not_found(req: &Request) -> Json<Value> {
    error_body("Not Found", req, 404)
}

/// Bodies that parse as JSON but do not fit the request type land here.
#[catch(422)]
fn unprocessable_entity(req: &Request) -> Json<Value> {
    error_body("Unprocessable Entity", req, 422)
}

#[catch(500)]
fn internal_server_error(req: &Request) -> Json<Value> {
    error_body("Internal Server Error", req, 500)
}

#[catch(default)]
fn default_catcher(status: rocket::http::Status, req: &Request) -> Json<Value> {
    error_body(status.reason().unwrap_or("Unknown Error"), req, status.code)
}

pub fn mount_api_routes(rocket: Rocket<Build>) -> Rocket<Build> {
    rocket.mount("/api", api::routes())
}

pub fn register_catchers(rocket: Rocket<Build>) -> Rocket<Build> {
    rocket.register(
        "/",
        catchers![
            bad_request,
            not_found,
            unprocessable_entity,
            internal_server_error,
            default_catcher
        ],
    )
}

fn log_rocket_info(rocket: &Rocket<Build>) {
    let figment = rocket.figment();

    if let Ok(address) = figment.extract_inner::<String>("address") {
        info!("Rocket is running at: {}", address);
    }

    if let Ok(port) = figment.extract_inner::<u16>("port") {
        info!("Rocket is listening on port: {}", port);
    }

    match figment.extract_inner::<Map<String, Value>>("databases.sqlite_db") {
        Ok(db_config) => {
            if let Some(Value::String(url)) = db_config.get("url") {
                info!("Database URL: {}", url);
            } else {
                warn!("Database URL not found in configuration");
            }
        }
        Err(e) => {
            warn!("Failed to extract database configuration: {}", e);
        }
    }
}

/// Builds the production server: `Rocket.toml` and `ROCKET_*` settings,
/// the database at `DATABASE_URL`, migrations and tip seeding at ignition,
/// and the static front end from `FOOTPRINT_STATIC_DIR` when present.
///
/// Tests use `orm::testing::test_rocket` instead.
pub fn rocket() -> Result<Rocket<Build>, std::env::VarError> {
    dotenvy::dotenv().ok();
    let database_url = std::env::var("DATABASE_URL")?;

    let figment = Figment::from(rocket::Config::default())
        .merge(Toml::file("Rocket.toml").nested())
        .merge(Env::prefixed("ROCKET_").global())
        .merge(("databases.sqlite_db.url", database_url));

    let rocket = rocket::custom(figment)
        .attach(DbConn::fairing())
        .attach(orm::set_foreign_keys_fairing())
        .attach(orm::run_migrations_fairing())
        .attach(tip_seed_fairing::tip_seed_fairing());

    log_rocket_info(&rocket);

    let rocket = register_catchers(mount_api_routes(rocket));

    let static_dir = std::env::var("FOOTPRINT_STATIC_DIR").unwrap_or_else(|_| "static".to_string());
    if Path::new(&static_dir).is_dir() {
        info!("Serving static files from {}", static_dir);
        Ok(rocket.mount("/", FileServer::from(static_dir).rank(10)))
    } else {
        warn!("Static directory '{}' not found, serving the API only", static_dir);
        Ok(rocket)
    }
}
