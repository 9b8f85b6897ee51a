//! Consumption records: append-only rows per household and month.

use carbon_calc::MonthlyRecords;
use diesel::prelude::*;

use crate::models::{
    BulkRecords, Diet, EnergyUsage, Month, NewDiet, NewEnergyUsage, NewTransportation, NewWaste,
    Transportation, Waste,
};

pub fn insert_energy_usage(
    conn: &mut SqliteConnection,
    new_usage: NewEnergyUsage,
) -> Result<EnergyUsage, diesel::result::Error> {
    use crate::schema::energy_usages::dsl::*;

    diesel::insert_into(energy_usages).values(new_usage).execute(conn)?;
    energy_usages.order(id.desc()).select(EnergyUsage::as_select()).first(conn)
}

/// Energy records of a household, optionally restricted to one month.
pub fn get_energy_usages(
    conn: &mut SqliteConnection,
    for_household: i32,
    for_month: Option<Month>,
) -> Result<Vec<EnergyUsage>, diesel::result::Error> {
    use crate::schema::energy_usages::dsl::*;

    let mut query = energy_usages.filter(household_id.eq(for_household)).into_boxed();
    if let Some(m) = for_month {
        query = query.filter(month.eq(m.first_day()));
    }
    query.order(id.asc()).select(EnergyUsage::as_select()).load(conn)
}

pub fn insert_transportation(
    conn: &mut SqliteConnection,
    new_trip: NewTransportation,
) -> Result<Transportation, diesel::result::Error> {
    use crate::schema::transportations::dsl::*;

    diesel::insert_into(transportations).values(new_trip).execute(conn)?;
    transportations.order(id.desc()).select(Transportation::as_select()).first(conn)
}

pub fn get_transportations(
    conn: &mut SqliteConnection,
    for_household: i32,
    for_month: Option<Month>,
) -> Result<Vec<Transportation>, diesel::result::Error> {
    use crate::schema::transportations::dsl::*;

    let mut query = transportations.filter(household_id.eq(for_household)).into_boxed();
    if let Some(m) = for_month {
        query = query.filter(month.eq(m.first_day()));
    }
    query.order(id.asc()).select(Transportation::as_select()).load(conn)
}

pub fn insert_diet(
    conn: &mut SqliteConnection,
    new_diet: NewDiet,
) -> Result<Diet, diesel::result::Error> {
    use crate::schema::diets::dsl::*;

    diesel::insert_into(diets).values(new_diet).execute(conn)?;
    diets.order(id.desc()).select(Diet::as_select()).first(conn)
}

pub fn get_diets(
    conn: &mut SqliteConnection,
    for_household: i32,
    for_month: Option<Month>,
) -> Result<Vec<Diet>, diesel::result::Error> {
    use crate::schema::diets::dsl::*;

    let mut query = diets.filter(household_id.eq(for_household)).into_boxed();
    if let Some(m) = for_month {
        query = query.filter(month.eq(m.first_day()));
    }
    query.order(id.asc()).select(Diet::as_select()).load(conn)
}

pub fn insert_waste(
    conn: &mut SqliteConnection,
    new_waste: NewWaste,
) -> Result<Waste, diesel::result::Error> {
    use crate::schema::wastes::dsl::*;

    diesel::insert_into(wastes).values(new_waste).execute(conn)?;
    wastes.order(id.desc()).select(Waste::as_select()).first(conn)
}

pub fn get_wastes(
    conn: &mut SqliteConnection,
    for_household: i32,
    for_month: Option<Month>,
) -> Result<Vec<Waste>, diesel::result::Error> {
    use crate::schema::wastes::dsl::*;

    let mut query = wastes.filter(household_id.eq(for_household)).into_boxed();
    if let Some(m) = for_month {
        query = query.filter(month.eq(m.first_day()));
    }
    query.order(id.asc()).select(Waste::as_select()).load(conn)
}

/// Inserts every record of a bulk entry in one transaction and returns how
/// many rows were written.
pub fn insert_bulk_records(
    conn: &mut SqliteConnection,
    records: BulkRecords,
) -> Result<usize, diesel::result::Error> {
    use crate::schema::{diets, energy_usages, transportations, wastes};

    conn.transaction(|conn| {
        let mut written = 0;
        for usage in records.energy {
            written += diesel::insert_into(energy_usages::table).values(usage).execute(conn)?;
        }
        for trip in records.transport {
            written += diesel::insert_into(transportations::table).values(trip).execute(conn)?;
        }
        for diet in records.diet {
            written += diesel::insert_into(diets::table).values(diet).execute(conn)?;
        }
        for waste in records.waste {
            written += diesel::insert_into(wastes::table).values(waste).execute(conn)?;
        }
        Ok(written)
    })
}

/// Everything a household recorded for `month`, ready for the calculator.
pub fn load_monthly_records(
    conn: &mut SqliteConnection,
    household_id: i32,
    month: Month,
) -> Result<MonthlyRecords, diesel::result::Error> {
    Ok(MonthlyRecords {
        energy: get_energy_usages(conn, household_id, Some(month))?
            .iter()
            .map(Into::into)
            .collect(),
        transport: get_transportations(conn, household_id, Some(month))?
            .iter()
            .map(Into::into)
            .collect(),
        diet: get_diets(conn, household_id, Some(month))?.iter().map(Into::into).collect(),
        waste: get_wastes(conn, household_id, Some(month))?.iter().map(Into::into).collect(),
    })
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::BulkEntry;
    use crate::orm::household::delete_household;
    use crate::orm::testing::{create_test_household, setup_test_db};

    fn march() -> Month {
        Month::parse("2025-03").unwrap()
    }

    fn april() -> Month {
        Month::parse("2025-04").unwrap()
    }

    #[test]
    fn test_insert_and_list_energy_by_month() {
        let mut conn = setup_test_db();
        let household = create_test_household(&mut conn, "Rao", 3);

        for (m, kwh) in [(march(), dec!(100)), (march(), dec!(20.5)), (april(), dec!(90))] {
            insert_energy_usage(
                &mut conn,
                NewEnergyUsage {
                    household_id: household.id,
                    fuel_type: "electricity".to_string(),
                    consumption: kwh,
                    unit: "kWh".to_string(),
                    month: m.first_day(),
                },
            )
            .expect("Failed to insert energy usage");
        }

        let in_march = get_energy_usages(&mut conn, household.id, Some(march())).unwrap();
        assert_eq!(in_march.len(), 2);
        assert_eq!(in_march[1].consumption, dec!(20.5));
        assert_eq!(get_energy_usages(&mut conn, household.id, None).unwrap().len(), 3);
    }

    #[test]
    fn test_records_belong_to_existing_household() {
        let mut conn = setup_test_db();
        let result = insert_waste(
            &mut conn,
            NewWaste {
                household_id: 42,
                waste_type: "plastic".to_string(),
                quantity_kg: dec!(1),
                month: march().first_day(),
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_monthly_records_converts_rows() {
        let mut conn = setup_test_db();
        let household = create_test_household(&mut conn, "Das", 2);

        insert_transportation(
            &mut conn,
            NewTransportation {
                household_id: household.id,
                vehicle_type: "bus".to_string(),
                distance_km: dec!(10),
                frequency_per_week: 3,
                month: march().first_day(),
            },
        )
        .unwrap();
        insert_diet(
            &mut conn,
            NewDiet {
                household_id: household.id,
                food_type: "rice".to_string(),
                consumption_kg: dec!(15),
                month: april().first_day(),
            },
        )
        .unwrap();

        let records = load_monthly_records(&mut conn, household.id, march()).unwrap();
        assert_eq!(records.transport.len(), 1);
        assert_eq!(records.transport[0].frequency_per_week, 3);
        assert_eq!(records.transport[0].distance_km, dec!(10));
        assert!(records.diet.is_empty());
        assert!(records.energy.is_empty());
    }

    #[test]
    fn test_bulk_records_are_written_together() {
        let mut conn = setup_test_db();
        let household = create_test_household(&mut conn, "Khan", 5);

        let entry = BulkEntry {
            electricity_kwh: Some(dec!(150)),
            bus_km: Some(dec!(40)),
            milk_kg: Some(dec!(20)),
            plastic_waste_kg: Some(dec!(2)),
            ..Default::default()
        };
        let written = insert_bulk_records(&mut conn, entry.into_records(household.id, march())).unwrap();
        assert_eq!(written, 4);

        let records = load_monthly_records(&mut conn, household.id, march()).unwrap();
        assert_eq!(records.energy.len(), 1);
        assert_eq!(records.transport.len(), 1);
        assert_eq!(records.diet.len(), 1);
        assert_eq!(records.waste.len(), 1);
    }

    #[test]
    fn test_delete_household_removes_records() {
        let mut conn = setup_test_db();
        let household = create_test_household(&mut conn, "Bose", 2);
        let entry = BulkEntry { rice_kg: Some(dec!(10)), ..Default::default() };
        insert_bulk_records(&mut conn, entry.into_records(household.id, march())).unwrap();

        delete_household(&mut conn, household.id).unwrap();
        assert!(get_diets(&mut conn, household.id, None).unwrap().is_empty());
    }
}
