//! Command implementations

pub mod config;
pub mod families;
pub mod play;
pub mod simulate;

pub use config::GameConfig;
pub use families::{FamilyReport, FamilyRow, analyze_families};
pub use play::{PlayOptions, run_play};
pub use simulate::{GameRecord, SimulationStatistics, play_game, run_simulation};
