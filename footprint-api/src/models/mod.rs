pub mod bulk_entry;
pub mod carbon_footprint;
pub mod diet;
pub mod energy_usage;
pub mod household;
pub mod month;
pub mod quantity;
pub mod stored_decimal;
pub mod sustainability_tip;
pub mod transportation;
pub mod waste;

// Re-export models for easier access
pub use bulk_entry::*;
pub use carbon_footprint::*;
pub use diet::*;
pub use energy_usage::*;
pub use household::*;
pub use month::*;
pub use quantity::*;
pub use stored_decimal::*;
pub use sustainability_tip::*;
pub use transportation::*;
pub use waste::*;
