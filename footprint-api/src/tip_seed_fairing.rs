use dotenvy::dotenv;
use rocket::fairing::AdHoc;

use crate::orm::DbConn;
use crate::orm::tip::{count_tips, seed_sample_tips};

/// Seeds the sample sustainability tips when the tips table is empty.
///
/// Disabled by setting `FOOTPRINT_SEED_TIPS` to `0`, `false` or `off`.
pub fn tip_seed_fairing() -> AdHoc {
    AdHoc::try_on_ignite("Sustainability Tip Seeding", |rocket| async {
        dotenv().ok();

        if !seeding_enabled(std::env::var("FOOTPRINT_SEED_TIPS").ok().as_deref()) {
            info!("[tip-seed] Disabled by FOOTPRINT_SEED_TIPS");
            return Ok(rocket);
        }

        let Some(conn) = DbConn::get_one(&rocket).await else {
            error!("[tip-seed] ERROR: Could not get DB connection.");
            return Err(rocket);
        };

        let result = conn
            .run(|c| match count_tips(c)? {
                0 => seed_sample_tips(c),
                _ => Ok(0),
            })
            .await;

        match result {
            Ok(0) => Ok(rocket),
            Ok(created) => {
                info!("[tip-seed] Created {} sustainability tips", created);
                Ok(rocket)
            }
            Err(e) => {
                error!("[tip-seed] ERROR seeding tips: {:?}", e);
                Err(rocket)
            }
        }
    })
}

fn seeding_enabled(setting: Option<&str>) -> bool {
    !matches!(
        setting.map(|s| s.trim().to_ascii_lowercase()).as_deref(),
        Some("0" | "false" | "off" | "no")
    )
}
