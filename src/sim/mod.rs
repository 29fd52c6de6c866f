//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No randomness
//! - No rendering or platform dependencies

pub mod control;
pub mod fighter;
pub mod state;
pub mod tick;

pub use control::Control;
pub use fighter::{Bounds, Fighter, Pose, Side};
pub use state::{MatchOutcome, MatchPhase, MatchReport, MatchRules, MatchState, StrikeRule};
pub use tick::{TickInput, tick};
