//! Research ability -> upgrade table generation.

use crate::dataset::ResearchDataset;
use crate::emit::Artifact;
use crate::enums::{Ability, EnumKind, Upgrade};
use crate::error::{CodegenError, Result};
use crate::models::{ResearchEntry, UpgradeEntry};
use crate::resolve::{Diagnostic, DuplicatePolicy, ResolvedRef, Resolver};
use quote::{format_ident, quote};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Resolved research ability -> upgrade pairs, sorted by ability value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityUpgradeTable {
    source: String,
    entries: Vec<(ResolvedRef<Ability>, ResolvedRef<Upgrade>)>,
}

impl AbilityUpgradeTable {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn entries(&self) -> &[(ResolvedRef<Ability>, ResolvedRef<Upgrade>)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Upgrade for an ability value
    pub fn get(&self, ability: u32) -> Option<&ResolvedRef<Upgrade>> {
        self.entries
            .binary_search_by_key(&ability, |(a, _)| a.value())
            .ok()
            .map(|i| &self.entries[i].1)
    }
}

/// Build the table from `RESEARCH_INFO`.
///
/// Units only group the data here and are not resolved. Units are walked by
/// ascending value, then their upgrades by ascending value; an ability seen
/// again with a different upgrade is settled by `policy`.
pub fn build(
    dataset: &ResearchDataset,
    resolver: &mut Resolver<'_>,
    policy: DuplicatePolicy,
) -> Result<AbilityUpgradeTable> {
    let mut units: Vec<&ResearchEntry> = dataset.units.iter().collect();
    units.sort_by_key(|entry| entry.unit.value);

    let mut by_ability: BTreeMap<u32, (ResolvedRef<Ability>, ResolvedRef<Upgrade>)> =
        BTreeMap::new();

    for entry in units {
        let mut upgrades: Vec<&UpgradeEntry> = entry.upgrades.iter().collect();
        upgrades.sort_by_key(|u| u.upgrade.value);

        for research in upgrades {
            let Some(raw_ability) = &research.info.ability else {
                continue;
            };
            let upgrade = resolver.resolve(&research.upgrade);
            let ability = resolver.resolve(raw_ability);
            let (Some(ability), Some(upgrade)) = (ability, upgrade) else {
                continue;
            };

            match by_ability.entry(ability.value()) {
                Entry::Vacant(slot) => {
                    slot.insert((ability, upgrade));
                }
                Entry::Occupied(mut slot) => {
                    let existing = slot.get().1.clone();
                    if existing == upgrade {
                        continue;
                    }
                    match policy {
                        DuplicatePolicy::LastWins => {
                            resolver.note(Diagnostic::Conflict {
                                ability: ability.to_string(),
                                kept: upgrade.to_string(),
                                discarded: existing.to_string(),
                            });
                            slot.insert((ability, upgrade));
                        }
                        DuplicatePolicy::FirstWins => {
                            resolver.note(Diagnostic::Conflict {
                                ability: ability.to_string(),
                                kept: existing.to_string(),
                                discarded: upgrade.to_string(),
                            });
                        }
                        DuplicatePolicy::Reject => {
                            return Err(CodegenError::ConflictingAssociation {
                                ability: ability.to_string(),
                                existing: existing.to_string(),
                                incoming: upgrade.to_string(),
                            });
                        }
                    }
                }
            }
        }
    }

    Ok(AbilityUpgradeTable {
        source: dataset.source.clone(),
        entries: by_ability.into_values().collect(),
    })
}

/// Render `research_abilities.rs`.
pub fn render(table: &AbilityUpgradeTable, ids_module: &str) -> String {
    let ability_id = format_ident!("{}", EnumKind::Ability.enum_name());
    let upgrade_id = format_ident!("{}", EnumKind::Upgrade.enum_name());

    let mut out = Artifact::new(&table.source);
    out.line(format!(
        "use {}::{{{}, {}}};",
        ids_module, ability_id, upgrade_id
    ));
    out.blank();
    out.line("/// Research abilities and the upgrade each one starts, sorted by ability id.");
    out.line(format!(
        "pub static ABILITY_TO_UPGRADE: &[({}, {})] = &[",
        ability_id, upgrade_id
    ));
    for (ability, upgrade) in &table.entries {
        out.line(format!("    ({}, {}),", ability, upgrade));
    }
    out.line("];");
    out.blank();

    out.line("/// Get the upgrade started by a research ability, `None` for any other ability.");
    out.tokens(quote! {
        pub fn get_upgrade_for_ability(ability: #ability_id) -> Option<#upgrade_id> {
            ABILITY_TO_UPGRADE
                .binary_search_by_key(&(ability as u32), |&(a, _)| a as u32)
                .ok()
                .map(|i| ABILITY_TO_UPGRADE[i].1)
        }
    });

    out.finish()
}
