/*!
 * Administrative CLI for a footprint-api SQLite database.
 *
 * Manages households, seeds the sustainability tip catalogue and recomputes
 * stored monthly footprints, using the same ORM functions the API server
 * uses. The database is taken from `DATABASE_URL` (environment or `.env`)
 * and migrated on connect.
 *
 * Run with --help for the available commands.
 */

use clap::{Parser, Subcommand};

mod admin_cli;

use admin_cli::footprint_commands::{FootprintAction, handle_footprint_command_with_conn};
use admin_cli::household_commands::{HouseholdAction, handle_household_command_with_conn};
use admin_cli::tip_commands::{TipAction, handle_tip_command_with_conn};
use admin_cli::utils::establish_connection;

#[derive(Parser)]
#[command(name = "footprint-admin")]
#[command(about = "Administrative CLI for household carbon footprint data")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Household {
        #[command(subcommand)]
        action: HouseholdAction,
    },
    Tips {
        #[command(subcommand)]
        action: TipAction,
    },
    Footprint {
        #[command(subcommand)]
        action: FootprintAction,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = establish_connection()?;
    match command {
        Commands::Household { action } => handle_household_command_with_conn(&mut conn, action),
        Commands::Tips { action } => handle_tip_command_with_conn(&mut conn, action),
        Commands::Footprint { action } => handle_footprint_command_with_conn(&mut conn, action),
    }
}
