pub mod footprint_commands;
pub mod household_commands;
pub mod tip_commands;
pub mod utils;
