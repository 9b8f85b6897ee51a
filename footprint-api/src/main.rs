use clap::Parser;
use rocket::{error, info};
use std::env;

pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

#[derive(Parser)]
#[command(name = "footprint-api")]
#[command(about = "Household carbon footprint tracking API server")]
#[command(version)]
struct Cli {
    /// Show extended version information
    #[arg(long, action = clap::ArgAction::SetTrue)]
    version_info: bool,
}

#[rocket::main]
async fn main() {
    let cli = Cli::parse();

    if cli.version_info {
        println!("footprint-api {}", built_info::PKG_VERSION);
        println!("Built: {}", built_info::BUILT_TIME_UTC);
        if let Some(commit) = built_info::GIT_COMMIT_HASH {
            println!("Git commit: {}", commit);
        }
        return;
    }

    match env::current_dir() {
        Ok(path) => info!("Current directory: {}", path.display()),
        Err(e) => error!("Error getting current directory: {}", e),
    };

    info!("footprint-api v{} starting", built_info::PKG_VERSION);
    info!("Built: {}", built_info::BUILT_TIME_UTC);

    let rocket = match footprint_api::rocket() {
        Ok(rocket) => rocket,
        Err(e) => {
            eprintln!("DATABASE_URL must be set: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = rocket.launch().await {
        eprintln!("Server failed to launch: {}", e);
        std::process::exit(1);
    }
}
