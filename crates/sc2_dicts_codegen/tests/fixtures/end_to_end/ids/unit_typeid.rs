pub enum UnitTypeId {
}
