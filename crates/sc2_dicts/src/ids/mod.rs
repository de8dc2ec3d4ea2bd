//! Game id enums.
//!
//! These files are read by the build script, which only understands one
//! `Variant = value,` per line inside each enum.

mod ability_id;
mod unit_typeid;
mod upgrade_id;

pub use ability_id::AbilityId;
pub use unit_typeid::UnitTypeId;
pub use upgrade_id::UpgradeId;
