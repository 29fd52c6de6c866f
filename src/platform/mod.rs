//! Platform layer
//!
//! Handles the native-window side of the game loop:
//! - Key state
//! - Tick pacing
//! - Loop phases around the end of a match

pub mod clock;
pub mod input;
pub mod loop_phase;

pub use clock::TickClock;
pub use input::KeyState;
pub use loop_phase::LoopPhase;
