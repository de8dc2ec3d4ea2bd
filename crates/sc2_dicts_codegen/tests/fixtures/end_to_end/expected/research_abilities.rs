// THIS FILE WAS AUTOMATICALLY GENERATED.
// Source: python-sc2 sc2/dicts/unit_research_abilities.py

use crate::ids::{AbilityId, UpgradeId};

/// Research abilities and the upgrade each one starts, sorted by ability id.
pub static ABILITY_TO_UPGRADE: &[(AbilityId, UpgradeId)] = &[
    (AbilityId::Foo, UpgradeId::P),
];

/// Get the upgrade started by a research ability, `None` for any other ability.
pub fn get_upgrade_for_ability (ability : AbilityId) -> Option < UpgradeId > { ABILITY_TO_UPGRADE . binary_search_by_key (& (ability as u32) , | & (a , _) | a as u32) . ok () . map (| i | ABILITY_TO_UPGRADE [i] . 1) }
