/// Main configuration module.
///
/// Re-exports the gameplay configuration (board layout and economy).
pub mod game;
