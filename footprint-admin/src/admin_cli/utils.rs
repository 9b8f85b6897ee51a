use diesel::{prelude::*, sqlite::SqliteConnection};
use dotenvy::dotenv;
use footprint_api::orm::{run_pending_migrations, set_foreign_keys};
use regex::Regex;

/// Opens `DATABASE_URL` (from the environment or `.env`).
pub fn establish_connection() -> Result<SqliteConnection, Box<dyn std::error::Error>> {
    dotenv().ok();
    let database_url =
        std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?;
    establish_connection_to(&database_url)
}

/// Opens `database_url` and brings its schema up to date.
pub fn establish_connection_to(
    database_url: &str,
) -> Result<SqliteConnection, Box<dyn std::error::Error>> {
    let mut conn = SqliteConnection::establish(database_url)?;
    set_foreign_keys(&mut conn)?;
    run_pending_migrations(&mut conn).map_err(|e| format!("Failed to run migrations: {}", e))?;
    Ok(conn)
}

/// Name matcher for `ls`/`rm`: a regex, or a plain substring with `-F`.
pub enum NameFilter {
    Regex(Regex),
    Fixed(String),
}

impl NameFilter {
    pub fn new(term: &str, fixed_string: bool) -> Result<Self, Box<dyn std::error::Error>> {
        if fixed_string {
            Ok(NameFilter::Fixed(term.to_string()))
        } else {
            Regex::new(term)
                .map(NameFilter::Regex)
                .map_err(|e| format!("Invalid regex pattern '{}': {}", term, e).into())
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            NameFilter::Regex(regex) => regex.is_match(name),
            NameFilter::Fixed(term) => name.contains(term.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_filter_regex_and_fixed() {
        let regex = NameFilter::new("^Sh.*a$", false).unwrap();
        assert!(regex.matches("Sharma"));
        assert!(!regex.matches("Iyer"));

        let fixed = NameFilter::new("a.", true).unwrap();
        assert!(fixed.matches("Mehta. Family"));
        assert!(!fixed.matches("Sharma"));
    }

    #[test]
    fn test_invalid_regex_is_an_error() {
        assert!(NameFilter::new("(", false).is_err());
        assert!(NameFilter::new("(", true).is_ok());
    }

    #[test]
    fn test_connection_runs_migrations() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("footprint.db");
        let url = path.to_str().expect("utf-8 path");

        let mut conn = establish_connection_to(url).expect("Failed to open database");
        let households = footprint_api::orm::household::get_all_households(&mut conn)
            .expect("households table should exist");
        assert!(households.is_empty());

        // Reopening an up-to-date database is a no-op.
        drop(conn);
        establish_connection_to(url).expect("Failed to reopen database");
    }
}
