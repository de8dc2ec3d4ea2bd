//! Loading the external python-sc2 dict snapshots.
//!
//! The upstream data is a Python module; the generator consumes a JSON
//! rendition of it where every id is spelled `{ "name": ..., "value": ... }`.
//! Each shape is validated into explicit record types up front so the
//! resolver never walks arbitrary structure.

use crate::error::{CodegenError, Result};
use crate::models::{
    RawEntity, ResearchEntry, ResearchInfoFile, UnitAbilitiesEntry, UnitAbilitiesFile,
};
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const UNIT_ABILITIES_ORIGIN: &str = "python-sc2 sc2/dicts/unit_abilities.py";
pub const RESEARCH_INFO_ORIGIN: &str = "python-sc2 sc2/dicts/unit_research_abilities.py";

/// Where raw dataset text comes from.
pub trait DatasetSource {
    /// Human readable location, used in errors and logs
    fn describe(&self) -> String;

    fn fetch(&self) -> Result<String>;
}

/// Dataset stored on the local filesystem.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| CodegenError::DatasetUnavailable {
            origin: self.describe(),
            reason: e.to_string(),
        })
    }
}

/// `UNIT_ABILITIES`: unit -> set of abilities.
#[derive(Clone, Debug)]
pub struct UnitAbilitiesDataset {
    /// Provenance for the artifact header
    pub source: String,
    pub units: Vec<UnitAbilitiesEntry>,
}

/// `RESEARCH_INFO`: unit -> (upgrade -> research info).
#[derive(Clone, Debug)]
pub struct ResearchDataset {
    pub source: String,
    pub units: Vec<ResearchEntry>,
}

pub fn load_unit_abilities(text: &str) -> Result<UnitAbilitiesDataset> {
    let file: UnitAbilitiesFile = parse_top_level(text, "UNIT_ABILITIES")?;

    let mut seen = BTreeSet::new();
    let mut units = file.unit_abilities;
    for entry in &mut units {
        check_name(&entry.unit)?;
        for ability in &entry.abilities {
            check_name(ability)?;
        }
        if !seen.insert(entry.unit.value) {
            return Err(CodegenError::malformed(format!(
                "unit {} listed more than once in UNIT_ABILITIES",
                entry.unit
            )));
        }
        // Ability lists are sets upstream
        entry.abilities.sort_by_key(|a| a.value);
        entry.abilities.dedup_by_key(|a| a.value);
    }

    Ok(UnitAbilitiesDataset {
        source: file
            .source
            .unwrap_or_else(|| UNIT_ABILITIES_ORIGIN.to_string()),
        units,
    })
}

pub fn load_research_info(text: &str) -> Result<ResearchDataset> {
    let file: ResearchInfoFile = parse_top_level(text, "RESEARCH_INFO")?;

    let mut seen = BTreeSet::new();
    for entry in &file.research_info {
        check_name(&entry.unit)?;
        for upgrade in &entry.upgrades {
            check_name(&upgrade.upgrade)?;
            if let Some(ability) = &upgrade.info.ability {
                check_name(ability)?;
            }
        }
        if !seen.insert(entry.unit.value) {
            return Err(CodegenError::malformed(format!(
                "unit {} listed more than once in RESEARCH_INFO",
                entry.unit
            )));
        }
        let mut upgrades = BTreeSet::new();
        for upgrade in &entry.upgrades {
            if !upgrades.insert(upgrade.upgrade.value) {
                return Err(CodegenError::malformed(format!(
                    "upgrade {} listed more than once for unit {}",
                    upgrade.upgrade, entry.unit
                )));
            }
        }
    }

    Ok(ResearchDataset {
        source: file
            .source
            .unwrap_or_else(|| RESEARCH_INFO_ORIGIN.to_string()),
        units: file.research_info,
    })
}

/// Names end up in artifact comments and `cargo:` lines, which are line based.
fn check_name<K>(raw: &RawEntity<K>) -> Result<()> {
    if raw.name.chars().any(char::is_control) {
        return Err(CodegenError::malformed(format!(
            "name {:?} of id {} contains control characters",
            raw.name, raw.value
        )));
    }
    Ok(())
}

fn parse_top_level<T: DeserializeOwned>(text: &str, key: &str) -> Result<T> {
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| CodegenError::malformed(format!("not valid JSON: {}", e)))?;

    match value.as_object() {
        Some(top) if top.contains_key(key) => {}
        Some(_) => {
            return Err(CodegenError::malformed(format!(
                "missing top-level `{}`",
                key
            )))
        }
        None => return Err(CodegenError::malformed("top level is not an object")),
    }

    serde_json::from_value(value).map_err(|e| CodegenError::malformed(format!("`{}`: {}", key, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_unit_abilities() {
        let text = r#"{
            "UNIT_ABILITIES": [
                { "unit": { "name": "SCV", "value": 45 },
                  "abilities": [
                      { "name": "MOVE_MOVE", "value": 16 },
                      { "name": "SMART", "value": 1 },
                      { "name": "SMART", "value": 1 }
                  ] }
            ]
        }"#;
        let dataset = load_unit_abilities(text).unwrap();
        assert_eq!(dataset.source, UNIT_ABILITIES_ORIGIN);
        assert_eq!(dataset.units.len(), 1);
        let values: Vec<u32> = dataset.units[0].abilities.iter().map(|a| a.value).collect();
        assert_eq!(values, vec![1, 16]);
    }

    #[test]
    fn test_load_research_info_with_extra_keys() {
        let text = r#"{
            "source": "snapshot 2024-01",
            "RESEARCH_INFO": [
                { "unit": { "name": "BARRACKSTECHLAB", "value": 37 },
                  "upgrades": [
                      { "upgrade": { "name": "STIMPACK", "value": 15 },
                        "info": { "ability": { "name": "BARRACKSTECHLABRESEARCH_STIMPACK", "value": 730 },
                                  "requires_power": true } },
                      { "upgrade": { "name": "SHIELDWALL", "value": 16 },
                        "info": { "required_building": { "name": "FACTORY", "value": 27 } } }
                  ] }
            ]
        }"#;
        let dataset = load_research_info(text).unwrap();
        assert_eq!(dataset.source, "snapshot 2024-01");
        let upgrades = &dataset.units[0].upgrades;
        assert_eq!(upgrades[0].info.ability.as_ref().map(|a| a.value), Some(730));
        assert!(upgrades[1].info.ability.is_none());
    }

    #[test]
    fn test_missing_top_level_key() {
        let err = load_research_info(r#"{ "UNIT_ABILITIES": [] }"#).unwrap_err();
        assert!(matches!(err, CodegenError::DatasetMalformed { .. }));
        assert!(err.to_string().contains("RESEARCH_INFO"));
    }

    #[test]
    fn test_rejects_bad_shapes() {
        for text in [
            "not json",
            "[1, 2, 3]",
            r#"{ "UNIT_ABILITIES": {} }"#,
            r#"{ "UNIT_ABILITIES": [ { "unit": { "name": "X", "value": -4 }, "abilities": [] } ] }"#,
            r#"{ "UNIT_ABILITIES": [ { "unit": { "name": "X" }, "abilities": [] } ] }"#,
            r#"{ "UNIT_ABILITIES": [ { "unit": { "name": "X", "value": 1 } } ] }"#,
        ] {
            assert!(
                matches!(load_unit_abilities(text), Err(CodegenError::DatasetMalformed { .. })),
                "expected malformed: {}",
                text
            );
        }
    }

    #[test]
    fn test_rejects_duplicate_units() {
        let text = r#"{ "UNIT_ABILITIES": [
            { "unit": { "name": "SCV", "value": 45 }, "abilities": [] },
            { "unit": { "name": "SCV2", "value": 45 }, "abilities": [] }
        ] }"#;
        assert!(matches!(
            load_unit_abilities(text),
            Err(CodegenError::DatasetMalformed { .. })
        ));
    }

    #[test]
    fn test_rejects_duplicate_upgrades_per_unit() {
        let text = r#"{ "RESEARCH_INFO": [
            { "unit": { "name": "FORGE", "value": 63 }, "upgrades": [
                { "upgrade": { "name": "A", "value": 39 }, "info": {} },
                { "upgrade": { "name": "B", "value": 39 }, "info": {} }
            ] }
        ] }"#;
        assert!(matches!(
            load_research_info(text),
            Err(CodegenError::DatasetMalformed { .. })
        ));
    }

    #[test]
    fn test_rejects_control_characters_in_names() {
        let units = [
            r#"{ "UNIT_ABILITIES": [ { "unit": { "name": "X\n];\npub fn f() {}", "value": 999 }, "abilities": [] } ] }"#,
            r#"{ "UNIT_ABILITIES": [ { "unit": { "name": "SCV", "value": 45 }, "abilities": [ { "name": "A\rB", "value": 1 } ] } ] }"#,
        ];
        for text in units {
            let err = load_unit_abilities(text).unwrap_err();
            assert!(matches!(err, CodegenError::DatasetMalformed { .. }), "{}", text);
            assert!(!err.to_string().contains('\n'));
        }

        let research = [
            r#"{ "RESEARCH_INFO": [ { "unit": { "name": "F\u0000", "value": 63 }, "upgrades": [] } ] }"#,
            r#"{ "RESEARCH_INFO": [ { "unit": { "name": "FORGE", "value": 63 }, "upgrades": [
                { "upgrade": { "name": "U\n", "value": 39 }, "info": {} } ] } ] }"#,
            r#"{ "RESEARCH_INFO": [ { "unit": { "name": "FORGE", "value": 63 }, "upgrades": [
                { "upgrade": { "name": "U", "value": 39 }, "info": { "ability": { "name": "A\tB", "value": 1 } } } ] } ] }"#,
        ];
        for text in research {
            assert!(
                matches!(load_research_info(text), Err(CodegenError::DatasetMalformed { .. })),
                "{}",
                text
            );
        }
    }

    #[test]
    fn test_file_source_unavailable() {
        let source = FileSource::new("/nonexistent/unit_abilities.json");
        assert!(matches!(
            source.fetch(),
            Err(CodegenError::DatasetUnavailable { .. })
        ));
    }
}
