// Upgrade ids were renamed upstream.
pub enum UpgradeIds {
    Null = 0,
}
