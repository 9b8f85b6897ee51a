pub mod consumption;
mod db;
pub mod footprint;
pub mod household;
pub mod testing;
pub mod tip;

pub use db::*;
