//! Ability ids as reported by the game.

/// Ability identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum AbilityId {
    #[default]
    Invalid = 0,
    Smart = 1,
    StopStop = 4,
    MoveMove = 16,
    PatrolPatrol = 17,
    HoldPositionHold = 18,
    AttackAttack = 23,

    // Harvesting
    HarvestGatherSCV = 295,
    HarvestReturnSCV = 296,
    HarvestGatherProbe = 298,
    HarvestReturnProbe = 299,
    HarvestGatherDrone = 1183,
    HarvestReturnDrone = 1184,

    // Construction
    TerranBuildCommandCenter = 318,
    TerranBuildSupplyDepot = 319,
    TerranBuildRefinery = 320,
    TerranBuildBarracks = 321,
    TerranBuildEngineeringBay = 322,
    ProtossBuildNexus = 880,
    ProtossBuildPylon = 881,
    ProtossBuildGateway = 883,
    ProtossBuildForge = 884,
    ZergBuildHatchery = 1152,
    ZergBuildSpawningPool = 1155,

    // Training
    CommandCenterTrainSCV = 524,
    BarracksTrainMarine = 560,
    GatewayTrainZealot = 916,
    NexusTrainProbe = 1006,
    LarvaTrainDrone = 1342,
    LarvaTrainZergling = 1343,

    EffectStimMarine = 380,

    // Research
    EngineeringBayResearchTerranInfantryWeaponsLevel1 = 652,
    EngineeringBayResearchTerranInfantryArmorLevel1 = 656,
    BarracksTechLabResearchStimpack = 730,
    ResearchCombatShield = 731,
    ResearchConcussiveShells = 732,
    ForgeResearchProtossGroundWeaponsLevel1 = 1062,
    ForgeResearchProtossGroundArmorLevel1 = 1065,
    ResearchZerglingMetabolicBoost = 1253,
    ResearchWarpGate = 1568,
    ResearchCharge = 1592,
}
