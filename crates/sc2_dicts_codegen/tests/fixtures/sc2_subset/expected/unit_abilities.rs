// THIS FILE WAS AUTOMATICALLY GENERATED.
// Source: python-sc2 sc2/dicts/unit_abilities.py

use crate::ids::{AbilityId, UnitTypeId};
use std::collections::{HashMap, HashSet};

/// Abilities available to each unit type, sorted by unit id.
pub static UNIT_ABILITIES: &[(UnitTypeId, &[AbilityId])] = &[
    (
        UnitTypeId::SCV,
        &[
            AbilityId::Smart,
            AbilityId::HarvestGatherSCV,
            AbilityId::HarvestReturnSCV,
        ],
    ),
    (
        UnitTypeId::Marine,
        &[
            AbilityId::Smart,
            AbilityId::MoveMove,
            AbilityId::AttackAttack,
            AbilityId::EffectStimMarine,
        ],
    ),
    // FORGE(63) abilities missing
    // Unit PROBE(84) not in Rust enums
];

/// Abilities of a unit type, `None` when the unit has no entry.
pub fn abilities_for_unit (unit : UnitTypeId) -> Option < & 'static [AbilityId] > { UNIT_ABILITIES . binary_search_by_key (& (unit as u32) , | & (u , _) | u as u32) . ok () . map (| i | UNIT_ABILITIES [i] . 1) }

/// Unit type -> ability set, built once from `UNIT_ABILITIES`.
///
/// Construct it at startup and pass it by reference.
# [derive (Clone , Debug)] pub struct UnitAbilities { map : HashMap < UnitTypeId , HashSet < AbilityId >> , }

impl UnitAbilities { pub fn new () -> Self { let map = UNIT_ABILITIES . iter () . map (| & (unit , abilities) | (unit , abilities . iter () . copied () . collect ())) . collect () ; UnitAbilities { map } } pub fn get (& self , unit : UnitTypeId) -> Option < & HashSet < AbilityId >> { self . map . get (& unit) } pub fn contains (& self , unit : UnitTypeId , ability : AbilityId) -> bool { self . map . get (& unit) . is_some_and (| abilities | abilities . contains (& ability)) } pub fn contains_key (& self , unit : UnitTypeId) -> bool { self . map . contains_key (& unit) } pub fn len (& self) -> usize { self . map . len () } pub fn is_empty (& self) -> bool { self . map . is_empty () } pub fn iter (& self) -> impl Iterator < Item = (& UnitTypeId , & HashSet < AbilityId >) > { self . map . iter () } }

impl Default for UnitAbilities { fn default () -> Self { Self :: new () } }
