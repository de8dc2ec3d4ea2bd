#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UpgradeId {
    Null = 0,
    TerranInfantryWeaponsLevel1 = 7,
    Stimpack = 15,
    ShieldWall = 16,
    ProtossGroundWeaponsLevel1 = 39,
}
