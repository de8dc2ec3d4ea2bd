//! sc2_dicts - SC2 id enums and the relationship tables between them
//!
//! The tables are generated at build time from the python-sc2 dict
//! snapshots in `data/`. Entries that reference ids missing from the enums
//! are left out and reported as build warnings.

/// Unit, ability and upgrade ids
pub mod ids;

/// Research ability -> upgrade
pub mod research_abilities {
    include!(concat!(env!("OUT_DIR"), "/research_abilities.rs"));
}

/// Unit type -> abilities
pub mod unit_abilities {
    include!(concat!(env!("OUT_DIR"), "/unit_abilities.rs"));
}

// Re-export commonly used types
pub use ids::{AbilityId, UnitTypeId, UpgradeId};
pub use research_abilities::{get_upgrade_for_ability, ABILITY_TO_UPGRADE};
pub use unit_abilities::{abilities_for_unit, UnitAbilities, UNIT_ABILITIES};
