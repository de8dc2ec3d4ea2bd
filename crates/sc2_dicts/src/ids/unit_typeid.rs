//! Unit type ids as reported by the game.

/// Unit type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum UnitTypeId {
    #[default]
    NotAUnit = 0,
    CommandCenter = 18,
    SupplyDepot = 19,
    Refinery = 20,
    Barracks = 21,
    EngineeringBay = 22,
    Factory = 27,
    BarracksTechLab = 37,
    SCV = 45,
    Marine = 48,
    Nexus = 59,
    Pylon = 60,
    Gateway = 62,
    Forge = 63,
    TwilightCouncil = 65,
    CyberneticsCore = 72,
    Zealot = 73,
    Probe = 84,
    Hatchery = 86,
    SpawningPool = 89,
    Drone = 104,
    Zergling = 105,
    Larva = 151,
}
