use carbon_calc::categorize_per_person_footprint;
use clap::Subcommand;
use diesel::sqlite::SqliteConnection;
use footprint_api::models::{CarbonFootprint, Month};
use footprint_api::orm::footprint::{get_footprints, recompute_footprint};
use footprint_api::orm::household::{get_all_households, get_household_by_id};

#[derive(Subcommand)]
pub enum FootprintAction {
    #[command(about = "Recalculate one household's footprint for a month")]
    Recompute {
        #[arg(short = 'H', long, help = "Household ID")]
        household: i32,
        #[arg(short, long, help = "Month as YYYY-MM (defaults to the current month)")]
        month: Option<String>,
    },
    #[command(about = "Recalculate every household's footprint for a month")]
    RecomputeAll {
        #[arg(short, long, help = "Month as YYYY-MM (defaults to the current month)")]
        month: Option<String>,
    },
    #[command(about = "Show stored footprints of a household")]
    Show {
        #[arg(short = 'H', long, help = "Household ID")]
        household: i32,
    },
}

pub fn handle_footprint_command_with_conn(
    conn: &mut SqliteConnection,
    action: FootprintAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        FootprintAction::Recompute { household, month } => {
            let month = resolve_month(month.as_deref())?;
            let footprint = footprint_recompute_impl(conn, household, month)?;
            println!("{}", describe(&footprint));
        }
        FootprintAction::RecomputeAll { month } => {
            let month = resolve_month(month.as_deref())?;
            let summary = footprint_recompute_all_impl(conn, month)?;
            println!("Recomputed {} household(s) for {}.", summary.footprints.len(), month);

            if !summary.errors.is_empty() {
                println!("Errors encountered:");
                for error in &summary.errors {
                    println!("  {}", error);
                }
                return Err(format!("{} household(s) failed to recompute", summary.errors.len()).into());
            }
        }
        FootprintAction::Show { household } => {
            for line in footprint_show_impl(conn, household)? {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn resolve_month(month: Option<&str>) -> Result<Month, Box<dyn std::error::Error>> {
    match month {
        Some(raw) => Ok(Month::parse(raw)?),
        None => Ok(Month::current()),
    }
}

fn describe(footprint: &CarbonFootprint) -> String {
    format!(
        "  {}: total {} (energy {}, transport {}, diet {}, waste {}) kg CO2e",
        footprint.month(),
        footprint.total_footprint.round_dp(2),
        footprint.energy_footprint.round_dp(2),
        footprint.transport_footprint.round_dp(2),
        footprint.diet_footprint.round_dp(2),
        footprint.waste_footprint.round_dp(2),
    )
}

pub fn footprint_recompute_impl(
    conn: &mut SqliteConnection,
    household_id: i32,
    month: Month,
) -> Result<CarbonFootprint, Box<dyn std::error::Error>> {
    if get_household_by_id(conn, household_id)?.is_none() {
        return Err(format!("Household with ID {} not found", household_id).into());
    }
    Ok(recompute_footprint(conn, household_id, month)?)
}

/// Outcome of a batch recompute. One failing household does not stop the
/// others.
#[derive(Debug, Default)]
pub struct RecomputeSummary {
    pub footprints: Vec<CarbonFootprint>,
    pub errors: Vec<String>,
}

pub fn footprint_recompute_all_impl(
    conn: &mut SqliteConnection,
    month: Month,
) -> Result<RecomputeSummary, Box<dyn std::error::Error>> {
    let mut summary = RecomputeSummary::default();
    for household in get_all_households(conn)? {
        match recompute_footprint(conn, household.id, month) {
            Ok(footprint) => {
                println!(
                    "  {} (ID: {}): {} kg CO2e",
                    household.name,
                    household.id,
                    footprint.total_footprint.round_dp(2)
                );
                summary.footprints.push(footprint);
            }
            Err(e) => summary.errors.push(format!(
                "Failed to recompute household {} (ID: {}): {}",
                household.name, household.id, e
            )),
        }
    }
    Ok(summary)
}

pub fn footprint_show_impl(
    conn: &mut SqliteConnection,
    household_id: i32,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let household = get_household_by_id(conn, household_id)?
        .ok_or_else(|| format!("Household with ID {} not found", household_id))?;
    let footprints = get_footprints(conn, household_id)?;

    let mut lines = vec![format!(
        "Footprints for {} (ID: {}, family size {}):",
        household.name, household.id, household.family_size
    )];
    if footprints.is_empty() {
        lines.push("  No footprints calculated yet.".to_string());
        return Ok(lines);
    }
    for footprint in &footprints {
        lines.push(describe(footprint));
    }
    if let Some(latest) = footprints.last() {
        let rating = categorize_per_person_footprint(latest.total_footprint, household.family_size)?;
        lines.push(format!(
            "Latest per person: {} kg CO2e ({}). {}",
            rating.per_person.round_dp(2),
            rating.level.as_str(),
            rating.message
        ));
    }
    Ok(lines)
}
