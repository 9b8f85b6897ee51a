use clap::Subcommand;
use diesel::sqlite::SqliteConnection;
use footprint_api::models::TipCategory;
use footprint_api::orm::tip::{count_tips, get_tips, seed_sample_tips};

#[derive(Subcommand)]
pub enum TipAction {
    #[command(about = "Insert the built-in sample tips that are not present yet")]
    Seed,
    #[command(about = "List sustainability tips")]
    Ls {
        #[arg(short, long, help = "Only show one category (energy, transport, diet, waste, general)")]
        category: Option<String>,
    },
}

pub fn handle_tip_command_with_conn(
    conn: &mut SqliteConnection,
    action: TipAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TipAction::Seed => {
            let (created, total) = tip_seed_impl(conn)?;
            println!("Created {} tip(s), {} in total.", created, total);
        }
        TipAction::Ls { category } => {
            for line in tip_ls_impl(conn, category.as_deref())? {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

/// Returns `(created, total)`.
pub fn tip_seed_impl(
    conn: &mut SqliteConnection,
) -> Result<(usize, i64), Box<dyn std::error::Error>> {
    let created = seed_sample_tips(conn)?;
    let total = count_tips(conn)?;
    Ok((created, total))
}

pub fn tip_ls_impl(
    conn: &mut SqliteConnection,
    category: Option<&str>,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let category = category.map(str::parse::<TipCategory>).transpose()?;
    let tips = get_tips(conn, category, None)?;
    if tips.is_empty() {
        return Ok(vec!["No tips found.".to_string()]);
    }
    Ok(tips
        .iter()
        .map(|tip| {
            format!(
                "  [{}] {} (saves {} kg CO2): {}",
                tip.category, tip.title, tip.impact_kg_co2, tip.description
            )
        })
        .collect())
}
