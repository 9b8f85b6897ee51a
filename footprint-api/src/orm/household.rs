use diesel::prelude::*;

use crate::models::{Household, HouseholdChanges, NewHousehold};

/// Inserts a household (timestamps are filled in by the database).
pub fn insert_household(
    conn: &mut SqliteConnection,
    new_household: &NewHousehold,
) -> Result<Household, diesel::result::Error> {
    use crate::schema::households::dsl::*;

    diesel::insert_into(households).values(new_household).execute(conn)?;

    households.order(id.desc()).select(Household::as_select()).first(conn)
}

pub fn get_household_by_id(
    conn: &mut SqliteConnection,
    household_id: i32,
) -> Result<Option<Household>, diesel::result::Error> {
    use crate::schema::households::dsl::*;
    households
        .filter(id.eq(household_id))
        .select(Household::as_select())
        .first(conn)
        .optional()
}

pub fn get_all_households(
    conn: &mut SqliteConnection,
) -> Result<Vec<Household>, diesel::result::Error> {
    use crate::schema::households::dsl::*;
    households.order(id.asc()).select(Household::as_select()).load(conn)
}

pub fn count_households(conn: &mut SqliteConnection) -> Result<i64, diesel::result::Error> {
    use crate::schema::households::dsl::*;
    households.count().get_result(conn)
}

/// Applies `changes` and returns the updated row. An empty change set leaves
/// the row untouched.
pub fn update_household(
    conn: &mut SqliteConnection,
    household_id: i32,
    changes: &HouseholdChanges,
) -> Result<Household, diesel::result::Error> {
    use crate::schema::households::dsl::*;

    if !changes.is_empty() {
        diesel::update(households.filter(id.eq(household_id)))
            .set(changes)
            .execute(conn)?;
    }

    households
        .filter(id.eq(household_id))
        .select(Household::as_select())
        .first(conn)
}

/// Deletes a household together with its consumption records and stored
/// footprints. Returns the number of household rows removed.
pub fn delete_household(
    conn: &mut SqliteConnection,
    household_id: i32,
) -> Result<usize, diesel::result::Error> {
    use crate::schema::{carbon_footprints, diets, energy_usages, households, transportations, wastes};

    conn.transaction(|conn| {
        diesel::delete(energy_usages::table.filter(energy_usages::household_id.eq(household_id)))
            .execute(conn)?;
        diesel::delete(
            transportations::table.filter(transportations::household_id.eq(household_id)),
        )
        .execute(conn)?;
        diesel::delete(diets::table.filter(diets::household_id.eq(household_id))).execute(conn)?;
        diesel::delete(wastes::table.filter(wastes::household_id.eq(household_id))).execute(conn)?;
        diesel::delete(
            carbon_footprints::table.filter(carbon_footprints::household_id.eq(household_id)),
        )
        .execute(conn)?;
        diesel::delete(households::table.filter(households::id.eq(household_id))).execute(conn)
    })
}
