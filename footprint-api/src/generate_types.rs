//! TypeScript bindings for the JSON API.
//!
//! Running the test suite writes one `.ts` file per exported type into
//! `FOOTPRINT_TS_OUTPUT_DIR` (default `../ts-bindings`).

#[cfg(test)]
mod tests {
    use std::{env, path::Path};

    use ts_rs::TS;

    #[test]
    fn generate_typescript_types() {
        let output_dir_str =
            env::var("FOOTPRINT_TS_OUTPUT_DIR").unwrap_or_else(|_| "../ts-bindings".to_string());
        let output_dir = Path::new(&output_dir_str);
        println!("Writing TypeScript types to {:?}", output_dir);

        std::fs::create_dir_all(output_dir).expect("Failed to create output directory");

        // Drop bindings of types that no longer exist.
        for entry in std::fs::read_dir(output_dir).expect("Failed to read output directory") {
            let path = entry.expect("Failed to read directory entry").path();
            if path.extension().and_then(|s| s.to_str()) == Some("ts") {
                std::fs::remove_file(&path)
                    .unwrap_or_else(|e| panic!("Failed to remove {:?}: {}", path, e));
            }
        }

        unsafe {
            env::set_var("TS_RS_EXPORT_DIR", output_dir);
        }

        use crate::api::{
            ErrorResponse,
            consumption::{
                BulkEntryRequest, BulkEntryResponse, DietRequest, EnergyUsageRequest,
                TransportationRequest, WasteRequest,
            },
            footprint::{ChartData, ChartDataset, Dashboard, FootprintRating, FootprintResult, Report},
            household::{CreateHouseholdRequest, UpdateHouseholdRequest},
            status::HealthStatus,
            tip::SeedTipsResponse,
        };
        use crate::models::*;

        Household::export().expect("Failed to export Household type");
        EnergyUsage::export().expect("Failed to export EnergyUsage type");
        Transportation::export().expect("Failed to export Transportation type");
        Diet::export().expect("Failed to export Diet type");
        Waste::export().expect("Failed to export Waste type");
        CarbonFootprint::export().expect("Failed to export CarbonFootprint type");
        SustainabilityTip::export().expect("Failed to export SustainabilityTip type");
        TipCategory::export().expect("Failed to export TipCategory type");
        BulkEntry::export().expect("Failed to export BulkEntry type");

        ErrorResponse::export().expect("Failed to export ErrorResponse type");
        HealthStatus::export().expect("Failed to export HealthStatus type");

        CreateHouseholdRequest::export().expect("Failed to export CreateHouseholdRequest type");
        UpdateHouseholdRequest::export().expect("Failed to export UpdateHouseholdRequest type");

        EnergyUsageRequest::export().expect("Failed to export EnergyUsageRequest type");
        TransportationRequest::export().expect("Failed to export TransportationRequest type");
        DietRequest::export().expect("Failed to export DietRequest type");
        WasteRequest::export().expect("Failed to export WasteRequest type");
        BulkEntryRequest::export().expect("Failed to export BulkEntryRequest type");
        BulkEntryResponse::export().expect("Failed to export BulkEntryResponse type");

        FootprintRating::export().expect("Failed to export FootprintRating type");
        FootprintResult::export().expect("Failed to export FootprintResult type");
        Dashboard::export().expect("Failed to export Dashboard type");
        Report::export().expect("Failed to export Report type");
        ChartData::export().expect("Failed to export ChartData type");
        ChartDataset::export().expect("Failed to export ChartDataset type");

        SeedTipsResponse::export().expect("Failed to export SeedTipsResponse type");

        println!("TypeScript types generated successfully in {:?}", output_dir);
    }
}
