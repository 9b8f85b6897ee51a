//! Stored footprint results. One row per (household, month), rewritten in
//! full whenever the month is recomputed.

use carbon_calc::{FootprintBreakdown, calculate_total_footprint};
use diesel::prelude::*;
use diesel::upsert::excluded;
use rust_decimal::Decimal;

use crate::models::{CarbonFootprint, Month, NewCarbonFootprint};
use crate::orm::consumption::load_monthly_records;

/// Number of months shown by dashboards, reports and charts.
pub const HISTORY_MONTHS: i64 = 12;

/// Inserts the result for its (household, month) or overwrites the existing
/// one.
pub fn upsert_footprint(
    conn: &mut SqliteConnection,
    new_footprint: NewCarbonFootprint,
) -> Result<CarbonFootprint, diesel::result::Error> {
    use crate::schema::carbon_footprints::dsl::*;

    let (for_household, for_month) = (new_footprint.household_id, new_footprint.month);

    diesel::insert_into(carbon_footprints)
        .values(new_footprint)
        .on_conflict((household_id, month))
        .do_update()
        .set((
            total_footprint.eq(excluded(total_footprint)),
            energy_footprint.eq(excluded(energy_footprint)),
            transport_footprint.eq(excluded(transport_footprint)),
            diet_footprint.eq(excluded(diet_footprint)),
            waste_footprint.eq(excluded(waste_footprint)),
            updated_at.eq(diesel::dsl::now),
        ))
        .execute(conn)?;

    carbon_footprints
        .filter(household_id.eq(for_household))
        .filter(month.eq(for_month))
        .select(CarbonFootprint::as_select())
        .first(conn)
}

pub fn get_footprint(
    conn: &mut SqliteConnection,
    for_household: i32,
    for_month: Month,
) -> Result<Option<CarbonFootprint>, diesel::result::Error> {
    use crate::schema::carbon_footprints::dsl::*;
    carbon_footprints
        .filter(household_id.eq(for_household))
        .filter(month.eq(for_month.first_day()))
        .select(CarbonFootprint::as_select())
        .first(conn)
        .optional()
}

/// All stored results of a household, oldest month first.
pub fn get_footprints(
    conn: &mut SqliteConnection,
    for_household: i32,
) -> Result<Vec<CarbonFootprint>, diesel::result::Error> {
    use crate::schema::carbon_footprints::dsl::*;
    carbon_footprints
        .filter(household_id.eq(for_household))
        .order(month.asc())
        .select(CarbonFootprint::as_select())
        .load(conn)
}

/// The `limit` most recent results, oldest month first.
pub fn get_recent_footprints(
    conn: &mut SqliteConnection,
    for_household: i32,
    limit: i64,
) -> Result<Vec<CarbonFootprint>, diesel::result::Error> {
    use crate::schema::carbon_footprints::dsl::*;
    let mut recent = carbon_footprints
        .filter(household_id.eq(for_household))
        .order(month.desc())
        .limit(limit)
        .select(CarbonFootprint::as_select())
        .load(conn)?;
    recent.reverse();
    Ok(recent)
}

/// Recalculates a household-month from its consumption records and stores
/// the result. Records with unknown type keys, and records too large to
/// price, count as zero.
pub fn recompute_footprint(
    conn: &mut SqliteConnection,
    household_id: i32,
    month: Month,
) -> Result<CarbonFootprint, diesel::result::Error> {
    let records = load_monthly_records(conn, household_id, month)?;

    for unmatched in records.unmatched_types() {
        warn!(
            "[footprint] household {} month {}: unknown {} type '{}' counted as zero",
            household_id, month, unmatched.category, unmatched.kind
        );
    }

    for overflowing in records.overflowing_records() {
        warn!(
            "[footprint] household {} month {}: {} '{}' record overflows, skipped",
            household_id, month, overflowing.category, overflowing.kind
        );
    }

    let breakdown = calculate_total_footprint(&records);
    info!(
        "[footprint] household {} month {}: total {} kg CO2e",
        household_id, month, breakdown.total
    );
    upsert_footprint(conn, NewCarbonFootprint::from_breakdown(household_id, month, breakdown))
}

/// Per-category mean of `footprints`, rounded to 2 places. Zero when empty.
pub fn average_footprint(footprints: &[CarbonFootprint]) -> FootprintBreakdown {
    if footprints.is_empty() {
        return FootprintBreakdown::default();
    }
    let count = Decimal::from(footprints.len());
    let mean = |pick: fn(&CarbonFootprint) -> Decimal| {
        let sum = footprints.iter().map(pick).fold(Decimal::ZERO, Decimal::saturating_add);
        (sum / count).round_dp(2)
    };
    FootprintBreakdown {
        total: mean(|f| f.total_footprint),
        energy: mean(|f| f.energy_footprint),
        transport: mean(|f| f.transport_footprint),
        diet: mean(|f| f.diet_footprint),
        waste: mean(|f| f.waste_footprint),
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{NewEnergyUsage, NewTransportation};
    use crate::orm::consumption::{insert_energy_usage, insert_transportation};
    use crate::orm::testing::{create_test_household, setup_test_db};

    fn month(raw: &str) -> Month {
        Month::parse(raw).unwrap()
    }

    fn add_electricity(conn: &mut SqliteConnection, household: i32, m: Month, kwh: Decimal) {
        insert_energy_usage(
            conn,
            NewEnergyUsage {
                household_id: household,
                fuel_type: "electricity".to_string(),
                consumption: kwh,
                unit: "kWh".to_string(),
                month: m.first_day(),
            },
        )
        .expect("Failed to insert energy usage");
    }

    #[test]
    fn test_recompute_stores_breakdown() {
        let mut conn = setup_test_db();
        let household = create_test_household(&mut conn, "Nair", 4);
        let march = month("2025-03");

        add_electricity(&mut conn, household.id, march, dec!(100));
        insert_transportation(
            &mut conn,
            NewTransportation {
                household_id: household.id,
                vehicle_type: "bus".to_string(),
                distance_km: dec!(10),
                frequency_per_week: 3,
                month: march.first_day(),
            },
        )
        .unwrap();

        let stored = recompute_footprint(&mut conn, household.id, march).unwrap();
        assert_eq!(stored.energy_footprint, dec!(82.0));
        assert_eq!(stored.transport_footprint, dec!(5.196));
        assert_eq!(stored.total_footprint, dec!(87.196));
        assert_eq!(stored.month(), march);

        let breakdown = stored.breakdown();
        assert_eq!(
            breakdown.total,
            breakdown.energy + breakdown.transport + breakdown.diet + breakdown.waste
        );
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut conn = setup_test_db();
        let household = create_test_household(&mut conn, "Patel", 2);
        let march = month("2025-03");
        add_electricity(&mut conn, household.id, march, dec!(50));

        let first = recompute_footprint(&mut conn, household.id, march).unwrap();
        let second = recompute_footprint(&mut conn, household.id, march).unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(first.breakdown(), second.breakdown());
        assert_eq!(get_footprints(&mut conn, household.id).unwrap().len(), 1);
    }

    #[test]
    fn test_recompute_overwrites_after_new_records() {
        let mut conn = setup_test_db();
        let household = create_test_household(&mut conn, "Gill", 3);
        let march = month("2025-03");

        add_electricity(&mut conn, household.id, march, dec!(100));
        recompute_footprint(&mut conn, household.id, march).unwrap();
        add_electricity(&mut conn, household.id, march, dec!(100));
        let updated = recompute_footprint(&mut conn, household.id, march).unwrap();

        assert_eq!(updated.total_footprint, dec!(164.0));
        let stored = get_footprint(&mut conn, household.id, march).unwrap().unwrap();
        assert_eq!(stored.total_footprint, dec!(164.0));
    }

    #[test]
    fn test_empty_month_recomputes_to_zero() {
        let mut conn = setup_test_db();
        let household = create_test_household(&mut conn, "Empty", 1);
        let stored = recompute_footprint(&mut conn, household.id, month("2025-01")).unwrap();
        assert!(stored.total_footprint.is_zero());
        assert!(stored.energy_footprint.is_zero());
    }

    #[test]
    fn test_unknown_type_counts_as_zero() {
        let mut conn = setup_test_db();
        let household = create_test_household(&mut conn, "Odd", 2);
        let march = month("2025-03");
        add_electricity(&mut conn, household.id, march, dec!(10));
        insert_energy_usage(
            &mut conn,
            NewEnergyUsage {
                household_id: household.id,
                fuel_type: "solar".to_string(),
                consumption: dec!(500),
                unit: "kWh".to_string(),
                month: march.first_day(),
            },
        )
        .unwrap();

        let stored = recompute_footprint(&mut conn, household.id, march).unwrap();
        assert_eq!(stored.energy_footprint, dec!(8.2));
    }

    #[test]
    fn test_overflowing_record_is_skipped() {
        let mut conn = setup_test_db();
        let household = create_test_household(&mut conn, "Huge", 1);
        let march = month("2025-03");
        add_electricity(&mut conn, household.id, march, dec!(100));
        insert_transportation(
            &mut conn,
            NewTransportation {
                household_id: household.id,
                vehicle_type: "bus".to_string(),
                distance_km: dec!(70000000000000000000000000000),
                frequency_per_week: 7,
                month: march.first_day(),
            },
        )
        .unwrap();

        let stored = recompute_footprint(&mut conn, household.id, march).unwrap();
        assert!(stored.transport_footprint.is_zero());
        assert_eq!(stored.total_footprint, dec!(82));
    }

    #[test]
    fn test_recent_footprints_are_last_twelve_ascending() {
        let mut conn = setup_test_db();
        let household = create_test_household(&mut conn, "Long", 2);

        for m in 1..=12 {
            recompute_footprint(&mut conn, household.id, month(&format!("2024-{:02}", m))).unwrap();
        }
        for m in 1..=3 {
            recompute_footprint(&mut conn, household.id, month(&format!("2025-{:02}", m))).unwrap();
        }

        let recent = get_recent_footprints(&mut conn, household.id, HISTORY_MONTHS).unwrap();
        assert_eq!(recent.len(), 12);
        assert_eq!(recent.first().unwrap().month(), month("2024-04"));
        assert_eq!(recent.last().unwrap().month(), month("2025-03"));
        assert!(recent.windows(2).all(|w| w[0].month < w[1].month));

        assert_eq!(get_footprints(&mut conn, household.id).unwrap().len(), 15);
    }

    #[test]
    fn test_average_footprint() {
        let mut conn = setup_test_db();
        let household = create_test_household(&mut conn, "Avg", 2);
        add_electricity(&mut conn, household.id, month("2025-01"), dec!(100));
        add_electricity(&mut conn, household.id, month("2025-02"), dec!(1));
        recompute_footprint(&mut conn, household.id, month("2025-01")).unwrap();
        recompute_footprint(&mut conn, household.id, month("2025-02")).unwrap();

        let averages = average_footprint(&get_footprints(&mut conn, household.id).unwrap());
        // (82.0 + 0.82) / 2
        assert_eq!(averages.energy, dec!(41.41));
        assert_eq!(averages.total, dec!(41.41));
        assert!(averages.diet.is_zero());

        assert_eq!(average_footprint(&[]), FootprintBreakdown::default());
    }
}
