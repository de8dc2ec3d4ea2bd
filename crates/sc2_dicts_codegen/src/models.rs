//! JSON deserialization structures for the python-sc2 dict snapshots.

use crate::enums::{Ability, Unit, Upgrade};
use serde::Deserialize;
use std::fmt;
use std::marker::PhantomData;

/// An id as the dataset spells it: unverified value plus display name.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(bound = "")]
pub struct RawEntity<K> {
    pub name: String,
    pub value: u32,
    #[serde(skip)]
    kind: PhantomData<K>,
}

impl<K> RawEntity<K> {
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        RawEntity {
            name: name.into(),
            value,
            kind: PhantomData,
        }
    }
}

impl<K> fmt::Display for RawEntity<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.value)
    }
}

pub type RawUnit = RawEntity<Unit>;
pub type RawAbility = RawEntity<Ability>;
pub type RawUpgrade = RawEntity<Upgrade>;

/// `UNIT_ABILITIES` row: a unit and every ability it can use.
#[derive(Deserialize, Debug, Clone)]
pub struct UnitAbilitiesEntry {
    pub unit: RawUnit,
    pub abilities: Vec<RawAbility>,
}

/// `RESEARCH_INFO` row: a unit and the upgrades researched from it.
#[derive(Deserialize, Debug, Clone)]
pub struct ResearchEntry {
    pub unit: RawUnit,
    pub upgrades: Vec<UpgradeEntry>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct UpgradeEntry {
    pub upgrade: RawUpgrade,
    pub info: ResearchInfo,
}

/// Research details. Only `ability` is consumed; other keys
/// (`required_building`, `requires_power`, ...) are accepted and ignored.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ResearchInfo {
    #[serde(default)]
    pub ability: Option<RawAbility>,
}

#[derive(Deserialize)]
pub(crate) struct UnitAbilitiesFile {
    pub source: Option<String>,
    #[serde(rename = "UNIT_ABILITIES")]
    pub unit_abilities: Vec<UnitAbilitiesEntry>,
}

#[derive(Deserialize)]
pub(crate) struct ResearchInfoFile {
    pub source: Option<String>,
    #[serde(rename = "RESEARCH_INFO")]
    pub research_info: Vec<ResearchEntry>,
}

