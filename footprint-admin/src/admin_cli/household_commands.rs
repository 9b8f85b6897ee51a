use clap::Subcommand;
use diesel::sqlite::SqliteConnection;
use footprint_api::models::{Household, NewHousehold};
use footprint_api::orm::household::{delete_household, get_all_households, insert_household};
use std::io::{self, BufRead, Write};

use super::utils::NameFilter;

#[derive(Subcommand)]
pub enum HouseholdAction {
    #[command(about = "List households, optionally filtered by name")]
    Ls {
        #[arg(help = "Search term (regex by default, use -F for fixed string)")]
        search_term: Option<String>,
        #[arg(
            short = 'F',
            long = "fixed-string",
            help = "Treat search term as fixed string instead of regex"
        )]
        fixed_string: bool,
    },
    #[command(about = "Add a new household")]
    Add {
        #[arg(short, long, help = "Household name")]
        name: String,
        #[arg(short, long, default_value = "", help = "Street address")]
        address: String,
        #[arg(long, help = "City")]
        city: String,
        #[arg(long, help = "State")]
        state: String,
        #[arg(short, long, help = "6-digit pincode")]
        pincode: String,
        #[arg(short = 's', long, help = "Number of family members (1-20)")]
        family_size: i32,
    },
    #[command(about = "Remove households matching search term, with all their data")]
    Rm {
        #[arg(help = "Search term to match household names (regex by default, use -F for fixed string)")]
        search_term: String,
        #[arg(
            short = 'F',
            long = "fixed-string",
            help = "Treat search term as fixed string instead of regex"
        )]
        fixed_string: bool,
        #[arg(short = 'y', long = "yes", help = "Skip confirmation prompt")]
        yes: bool,
    },
}

pub fn handle_household_command_with_conn(
    conn: &mut SqliteConnection,
    action: HouseholdAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        HouseholdAction::Ls { search_term, fixed_string } => {
            for line in household_ls_impl(conn, search_term.as_deref(), fixed_string)? {
                println!("{}", line);
            }
        }
        HouseholdAction::Add { name, address, city, state, pincode, family_size } => {
            let household = household_add_impl(
                conn,
                NewHousehold { name, address, city, state, pincode, family_size },
            )?;
            println!("Household created successfully!");
            println!("{}", describe(&household));
        }
        HouseholdAction::Rm { search_term, fixed_string, yes } => {
            let stdin = io::stdin();
            household_rm_impl(conn, &search_term, fixed_string, yes, &mut stdin.lock())?;
        }
    }
    Ok(())
}

fn describe(household: &Household) -> String {
    format!(
        "  ID: {}, Name: {}, City: {}, State: {}, Pincode: {}, Family size: {}",
        household.id,
        household.name,
        household.city,
        household.state,
        household.pincode,
        household.family_size
    )
}

fn matching_households(
    conn: &mut SqliteConnection,
    search_term: Option<&str>,
    fixed_string: bool,
) -> Result<Vec<Household>, Box<dyn std::error::Error>> {
    let households = get_all_households(conn)?;
    match search_term {
        Some(term) => {
            let filter = NameFilter::new(term, fixed_string)?;
            Ok(households.into_iter().filter(|h| filter.matches(&h.name)).collect())
        }
        None => Ok(households),
    }
}

/// Lines to print for `household ls`.
pub fn household_ls_impl(
    conn: &mut SqliteConnection,
    search_term: Option<&str>,
    fixed_string: bool,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let households = matching_households(conn, search_term, fixed_string)?;
    if households.is_empty() {
        return Ok(vec!["No households found.".to_string()]);
    }
    let mut lines = vec!["Households:".to_string()];
    lines.extend(households.iter().map(describe));
    Ok(lines)
}

pub fn household_add_impl(
    conn: &mut SqliteConnection,
    new_household: NewHousehold,
) -> Result<Household, Box<dyn std::error::Error>> {
    new_household.validate()?;
    Ok(insert_household(conn, &new_household)?)
}

/// Deletes matching households after confirmation read from `input`
/// (skipped with `yes`). Returns how many were deleted.
pub fn household_rm_impl(
    conn: &mut SqliteConnection,
    search_term: &str,
    fixed_string: bool,
    yes: bool,
    input: &mut dyn BufRead,
) -> Result<usize, Box<dyn std::error::Error>> {
    let matching = matching_households(conn, Some(search_term), fixed_string)?;

    if matching.is_empty() {
        println!("No households found matching the search term.");
        return Ok(0);
    }

    println!("Found {} household(s) matching the search term:", matching.len());
    for household in &matching {
        println!("{}", describe(household));
    }

    if !yes {
        print!(
            "Delete these {} household(s) with all their records and footprints? [y/N]: ",
            matching.len()
        );
        io::stdout().flush()?;

        let mut answer = String::new();
        input.read_line(&mut answer)?;
        let answer = answer.trim().to_lowercase();
        if answer != "y" && answer != "yes" {
            println!("Operation cancelled.");
            return Ok(0);
        }
    }

    let mut deleted_count = 0;
    let mut errors = Vec::new();
    for household in matching {
        match delete_household(conn, household.id) {
            Ok(0) => {}
            Ok(_) => {
                deleted_count += 1;
                println!("Deleted household: {} (ID: {})", household.name, household.id);
            }
            Err(e) => errors.push(format!(
                "Failed to delete household {} (ID: {}): {}",
                household.name, household.id, e
            )),
        }
    }

    println!("Successfully deleted {} household(s).", deleted_count);

    if !errors.is_empty() {
        println!("Errors encountered:");
        for error in errors {
            println!("  {}", error);
        }
        return Err("Some deletions failed".into());
    }

    Ok(deleted_count)
}
