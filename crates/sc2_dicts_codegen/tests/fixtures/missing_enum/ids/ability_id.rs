#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AbilityId {
    Smart = 1,
    MoveMove = 16,
    AttackAttack = 23,
    // Harvesting
    HarvestGatherSCV = 295,
    #[doc(hidden)]
    HarvestReturnSCV = 296,
    EffectStimMarine = 380,
    EngineeringBayResearchTerranInfantryWeaponsLevel1 = 652,
    BarracksTechLabResearchStimpack = 730,
    ResearchCombatShield = 731,
    ForgeResearchProtossGroundWeaponsLevel1 = 1062,
}
