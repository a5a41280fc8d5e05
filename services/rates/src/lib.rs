pub mod reference;
pub mod snapshot;
pub mod tiers;
pub mod zones;


pub use reference::{AccessorialCatalog, ClientTierDirectory, RateReference, TierTable, ZoneDirectory};
pub use snapshot::{ReferenceSnapshot, SnapshotError};
pub use tiers::ZoneRate;
