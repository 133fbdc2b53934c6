//! Command implementations for the Revenue Radar CLI.

pub mod inspect;
pub mod predict;

pub use inspect::InspectCommand;
pub use predict::PredictCommand;
