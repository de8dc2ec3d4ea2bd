pub enum UpgradeId {
    P = 5,
}
