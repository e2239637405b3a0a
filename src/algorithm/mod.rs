/// Pre-sized marker record slots
pub mod arena;
/// Cyclic and moment-balanced marker scaling
pub mod balance;
/// Walk engine orchestrating complete runs
pub mod executor;
/// Fixed-capacity history of accepted placements
pub mod history;
/// Run-owned seeded random draws
pub mod random;
/// Neighbor candidate scoring and selection
pub mod selection;
