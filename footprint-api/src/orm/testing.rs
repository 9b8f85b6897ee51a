//! Database fixtures for unit and integration tests.

use diesel::connection::SimpleConnection;
use diesel::sqlite::SqliteConnection;
use rocket::figment::{
    util::map,
    value::{Map, Value},
};
use rocket::{Build, Rocket, fairing::AdHoc};
use rocket_sync_db_pools::diesel;

use super::db::{DbConn, run_pending_migrations, set_foreign_keys};
use super::household::insert_household;
use crate::models::{Household, NewHousehold};

/// Trades durability for speed. Test databases only.
fn set_sqlite_test_pragmas(conn: &mut diesel::SqliteConnection) {
    conn.batch_execute(
        r#"
        PRAGMA synchronous = OFF;
        PRAGMA journal_mode = OFF;
        "#,
    )
    .expect("Failed to set SQLite PRAGMAs");
}

fn set_sqlite_test_pragmas_fairing() -> AdHoc {
    AdHoc::on_ignite("Set SQLite Test Pragmas", |rocket| async {
        let conn = DbConn::get_one(&rocket)
            .await
            .expect("database connection for test pragmas");
        conn.run(set_sqlite_test_pragmas).await;
        rocket
    })
}

/// A Rocket instance backed by its own shared in-memory SQLite database,
/// migrated and with every API route mounted. Tips are not seeded; tests
/// that need them call the seed endpoint.
pub fn test_rocket() -> Rocket<Build> {
    use uuid::Uuid;

    let unique_db_name = format!("file:test_db_{}?mode=memory&cache=shared", Uuid::new_v4());

    let db_config: Map<_, Value> = map! {
        "url" => unique_db_name.into(),
        "pool_size" => 5.into(),
        "timeout" => 5.into(),
    };

    let figment = rocket::Config::figment().merge(("databases", map!["sqlite_db" => db_config]));

    let rocket = rocket::custom(figment)
        .attach(DbConn::fairing())
        .attach(super::db::set_foreign_keys_fairing())
        .attach(set_sqlite_test_pragmas_fairing())
        .attach(super::db::run_migrations_fairing());

    crate::register_catchers(crate::mount_api_routes(rocket))
}

/// A fresh, migrated in-memory connection for synchronous tests. Every call
/// returns an independent database.
pub fn setup_test_db() -> SqliteConnection {
    use diesel::Connection;

    let mut conn = SqliteConnection::establish(":memory:")
        .expect("Failed to create in-memory SQLite database");
    set_foreign_keys(&mut conn).expect("Failed to enable foreign keys");
    run_pending_migrations(&mut conn).expect("Failed to run pending migrations");
    conn
}

/// A valid household in Pune with the given name and size.
pub fn sample_household(name: &str, family_size: i32) -> NewHousehold {
    NewHousehold {
        name: name.to_string(),
        address: "12 MG Road".to_string(),
        city: "Pune".to_string(),
        state: "Maharashtra".to_string(),
        pincode: "411001".to_string(),
        family_size,
    }
}

/// Inserts a [`sample_household`] and returns the stored row.
pub fn create_test_household(conn: &mut SqliteConnection, name: &str, family_size: i32) -> Household {
    insert_household(conn, &sample_household(name, family_size))
        .expect("Failed to insert test household")
}
