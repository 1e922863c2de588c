/// Command-line parsing and run orchestration
pub mod cli;
/// Sprite set constants and runtime defaults
pub mod configuration;
/// Error taxonomy shared by every operation
pub mod error;
/// Looping GIF export
pub mod export;
/// Terminal progress display
pub mod progress;
