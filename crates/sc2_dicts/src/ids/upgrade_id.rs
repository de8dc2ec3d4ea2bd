//! Upgrade ids as reported by the game.

/// Upgrade identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum UpgradeId {
    #[default]
    Null = 0,
    TerranInfantryWeaponsLevel1 = 7,
    TerranInfantryArmorsLevel1 = 11,
    Stimpack = 15,
    ShieldWall = 16,
    PunisherGrenades = 17,
    ProtossGroundWeaponsLevel1 = 39,
    ProtossGroundArmorsLevel1 = 42,
    ZerglingMovementSpeed = 66,
    WarpGateResearch = 84,
    Charge = 86,
}
