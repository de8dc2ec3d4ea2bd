//! Unit type -> abilities table generation.

use crate::dataset::UnitAbilitiesDataset;
use crate::emit::Artifact;
use crate::enums::{Ability, EnumKind, Unit};
use crate::models::UnitAbilitiesEntry;
use crate::resolve::{Diagnostic, ResolvedRef, Resolver};
use quote::{format_ident, quote};

/// One unit's slot in the table, in unit-value order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitAbilityRow {
    Resolved {
        unit: ResolvedRef<Unit>,
        abilities: Vec<ResolvedRef<Ability>>,
    },
    /// Left out of the table; the note is rendered as a comment in its place
    Dropped { note: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitAbilityTable {
    source: String,
    rows: Vec<UnitAbilityRow>,
}

impl UnitAbilityTable {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn rows(&self) -> &[UnitAbilityRow] {
        &self.rows
    }

    /// Resolved units with their abilities
    pub fn entries(&self) -> impl Iterator<Item = (&ResolvedRef<Unit>, &[ResolvedRef<Ability>])> {
        self.rows.iter().filter_map(|row| match row {
            UnitAbilityRow::Resolved { unit, abilities } => Some((unit, abilities.as_slice())),
            UnitAbilityRow::Dropped { .. } => None,
        })
    }

    /// Number of resolved units
    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the table from `UNIT_ABILITIES`.
///
/// An unknown unit drops its whole row. Unknown abilities are dropped one by
/// one, and a unit left with no abilities is dropped as well.
pub fn build(dataset: &UnitAbilitiesDataset, resolver: &mut Resolver<'_>) -> UnitAbilityTable {
    let mut units: Vec<&UnitAbilitiesEntry> = dataset.units.iter().collect();
    units.sort_by_key(|entry| entry.unit.value);

    let mut rows = Vec::with_capacity(units.len());
    for entry in units {
        let raw_unit = &entry.unit;
        let Some(unit) = resolver.resolve(raw_unit) else {
            resolver.note(Diagnostic::UnitDropped {
                name: raw_unit.name.clone(),
                value: raw_unit.value,
            });
            rows.push(UnitAbilityRow::Dropped {
                note: format!("Unit {} not in Rust enums", raw_unit),
            });
            continue;
        };

        // Already sorted and deduplicated by the loader
        let abilities: Vec<ResolvedRef<Ability>> = entry
            .abilities
            .iter()
            .filter_map(|raw| resolver.resolve(raw))
            .collect();

        if abilities.is_empty() {
            resolver.note(Diagnostic::EmptyAfterFiltering {
                name: raw_unit.name.clone(),
                value: raw_unit.value,
            });
            rows.push(UnitAbilityRow::Dropped {
                note: format!("{} abilities missing", raw_unit),
            });
            continue;
        }

        rows.push(UnitAbilityRow::Resolved { unit, abilities });
    }

    UnitAbilityTable {
        source: dataset.source.clone(),
        rows,
    }
}

/// Render `unit_abilities.rs`.
pub fn render(table: &UnitAbilityTable, ids_module: &str) -> String {
    let ability_id = format_ident!("{}", EnumKind::Ability.enum_name());
    let unit_type_id = format_ident!("{}", EnumKind::Unit.enum_name());

    let mut out = Artifact::new(&table.source);
    out.line(format!(
        "use {}::{{{}, {}}};",
        ids_module, ability_id, unit_type_id
    ));
    out.line("use std::collections::{HashMap, HashSet};");
    out.blank();
    out.line("/// Abilities available to each unit type, sorted by unit id.");
    out.line(format!(
        "pub static UNIT_ABILITIES: &[({}, &[{}])] = &[",
        unit_type_id, ability_id
    ));
    for row in &table.rows {
        match row {
            UnitAbilityRow::Resolved { unit, abilities } => {
                out.line("    (");
                out.line(format!("        {},", unit));
                out.line("        &[");
                for ability in abilities {
                    out.line(format!("            {},", ability));
                }
                out.line("        ],");
                out.line("    ),");
            }
            UnitAbilityRow::Dropped { note } => {
                out.line(format!("    // {}", note));
            }
        }
    }
    out.line("];");
    out.blank();

    out.line("/// Abilities of a unit type, `None` when the unit has no entry.");
    out.tokens(quote! {
        pub fn abilities_for_unit(unit: #unit_type_id) -> Option<&'static [#ability_id]> {
            UNIT_ABILITIES
                .binary_search_by_key(&(unit as u32), |&(u, _)| u as u32)
                .ok()
                .map(|i| UNIT_ABILITIES[i].1)
        }
    });
    out.blank();

    out.line("/// Unit type -> ability set, built once from `UNIT_ABILITIES`.");
    out.line("///");
    out.line("/// Construct it at startup and pass it by reference.");
    out.tokens(quote! {
        #[derive(Clone, Debug)]
        pub struct UnitAbilities {
            map: HashMap<#unit_type_id, HashSet<#ability_id>>,
        }
    });
    out.blank();

    out.tokens(quote! {
        impl UnitAbilities {
            pub fn new() -> Self {
                let map = UNIT_ABILITIES
                    .iter()
                    .map(|&(unit, abilities)| (unit, abilities.iter().copied().collect()))
                    .collect();
                UnitAbilities { map }
            }

            pub fn get(&self, unit: #unit_type_id) -> Option<&HashSet<#ability_id>> {
                self.map.get(&unit)
            }

            pub fn contains(&self, unit: #unit_type_id, ability: #ability_id) -> bool {
                self.map.get(&unit).is_some_and(|abilities| abilities.contains(&ability))
            }

            pub fn contains_key(&self, unit: #unit_type_id) -> bool {
                self.map.contains_key(&unit)
            }

            pub fn len(&self) -> usize {
                self.map.len()
            }

            pub fn is_empty(&self) -> bool {
                self.map.is_empty()
            }

            pub fn iter(&self) -> impl Iterator<Item = (&#unit_type_id, &HashSet<#ability_id>)> {
                self.map.iter()
            }
        }
    });
    out.blank();

    out.tokens(quote! {
        impl Default for UnitAbilities {
            fn default() -> Self {
                Self::new()
            }
        }
    });

    out.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::load_unit_abilities;
    use crate::enums::IdTables;

    fn tables() -> IdTables {
        IdTables::from_sources(
            "pub enum UnitTypeId {\n    SCV = 45,\n    Marine = 48,\n    Probe = 84,\n}",
            "pub enum AbilityId {\n    Smart = 1,\n    MoveMove = 16,\n    AttackAttack = 23,\n}",
            "pub enum UpgradeId {\n}",
        )
        .unwrap()
    }

    const DATASET: &str = r#"{ "UNIT_ABILITIES": [
        { "unit": { "name": "PROBE", "value": 84 }, "abilities": [
            { "name": "NEW_THING", "value": 9000 }
        ] },
        { "unit": { "name": "SCV", "value": 45 }, "abilities": [
            { "name": "ATTACK_ATTACK", "value": 23 },
            { "name": "NEW_THING", "value": 9000 },
            { "name": "SMART", "value": 1 }
        ] },
        { "unit": { "name": "GHOSTX", "value": 1234 }, "abilities": [
            { "name": "SMART", "value": 1 }
        ] },
        { "unit": { "name": "MARINE", "value": 48 }, "abilities": [] }
    ] }"#;

    fn build_table() -> (UnitAbilityTable, Vec<Diagnostic>) {
        let tables = tables();
        let dataset = load_unit_abilities(DATASET).unwrap();
        let mut resolver = Resolver::new(&tables);
        let table = build(&dataset, &mut resolver);
        (table, resolver.into_diagnostics().iter().cloned().collect())
    }

    #[test]
    fn test_rows_follow_unit_order() {
        let (table, _) = build_table();
        let rows: Vec<String> = table
            .rows()
            .iter()
            .map(|row| match row {
                UnitAbilityRow::Resolved { unit, .. } => unit.to_string(),
                UnitAbilityRow::Dropped { note } => note.clone(),
            })
            .collect();
        assert_eq!(
            rows,
            vec![
                "UnitTypeId::SCV",
                "MARINE(48) abilities missing",
                "PROBE(84) abilities missing",
                "Unit GHOSTX(1234) not in Rust enums",
            ]
        );
    }

    #[test]
    fn test_partial_ability_set_is_kept() {
        let (table, _) = build_table();
        assert_eq!(table.len(), 1);
        let (unit, abilities) = table.entries().next().unwrap();
        assert_eq!(unit.variant(), "SCV");
        let names: Vec<&str> = abilities.iter().map(|a| a.variant()).collect();
        assert_eq!(names, vec!["Smart", "AttackAttack"]);
    }

    #[test]
    fn test_diagnostics() {
        let (_, diagnostics) = build_table();
        assert_eq!(
            diagnostics,
            vec![
                Diagnostic::Unresolved {
                    kind: EnumKind::Ability,
                    name: "NEW_THING".to_string(),
                    value: 9000,
                },
                Diagnostic::EmptyAfterFiltering {
                    name: "MARINE".to_string(),
                    value: 48,
                },
                // NEW_THING was already reported for SCV
                Diagnostic::EmptyAfterFiltering {
                    name: "PROBE".to_string(),
                    value: 84,
                },
                Diagnostic::Unresolved {
                    kind: EnumKind::Unit,
                    name: "GHOSTX".to_string(),
                    value: 1234,
                },
                Diagnostic::UnitDropped {
                    name: "GHOSTX".to_string(),
                    value: 1234,
                },
            ]
        );
    }

    #[test]
    fn test_render() {
        let (table, _) = build_table();
        let text = render(&table, "crate::ids");
        assert!(text.contains("use crate::ids::{AbilityId, UnitTypeId};\n"));
        assert!(text.contains(
            "    (\n        UnitTypeId::SCV,\n        &[\n            AbilityId::Smart,\n            AbilityId::AttackAttack,\n        ],\n    ),\n"
        ));
        assert!(text.contains("    // MARINE(48) abilities missing\n"));
        assert!(text.contains("    // Unit GHOSTX(1234) not in Rust enums\n"));
        assert!(!text.contains("Probe"));
        assert!(text.contains("abilities_for_unit"));
    }
}
