/// Bounded generation of single patterns and mutually distant option sets
pub mod generator;
/// Round orchestration and conflict policy
pub mod round;
/// Bounded sanitization loop protecting the planted pattern
pub mod sanitize;
/// Directional sweeps that break accidental decoy occurrences
pub mod sweep;
