pub enum AbilityId {
    Foo = 1,
    Bar = 2,
}
