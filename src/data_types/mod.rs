
/// Flat per-operation costs and the character equality predicate
pub mod cost_model;
/// Edit operations recovered from an alignment
pub mod operation;
