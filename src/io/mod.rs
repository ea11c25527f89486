/// Command-line interface for batch round generation
pub mod cli;
/// Generation constants and configuration validation
pub mod configuration;
/// Error types for generation operations
pub mod error;
/// Plain-text export of generated rounds
pub mod export;
/// Progress display for multi-round batches
pub mod progress;
