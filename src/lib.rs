//! Duel - a two-fighter arena brawler
//!
//! Core modules:
//! - `sim`: Deterministic simulation (fighters, AI control, match state)
//! - `scene`: What a frame contains, drawn through the `Canvas` trait
//! - `assets`: Sprite bundle loaded once at startup
//! - `error`: Fatal startup errors
//! - `renderer`: wgpu implementation of `Canvas`
//! - `platform`: Key state and fixed-rate tick pacing

pub mod assets;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod sim;

pub use assets::{AssetBundle, AssetError};
pub use error::StartupError;
pub use scene::Canvas;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: i32 = 800;
    pub const ARENA_HEIGHT: i32 = 600;

    /// Simulation rate
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Fighter bounding box
    pub const FIGHTER_WIDTH: i32 = 50;
    pub const FIGHTER_HEIGHT: i32 = 50;

    /// Fighter defaults
    pub const STARTING_HEALTH: i32 = 100;
    pub const ATTACK_DAMAGE: i32 = 1;
    pub const ATTACK_COOLDOWN_TICKS: u32 = 30;
    /// Human horizontal step per tick while a move key is held
    pub const MOVE_SPEED: i32 = 5;
    /// Center-to-center distance within which the AI swings
    pub const AI_ATTACK_RANGE: i32 = 70;
    /// AI chase step per tick
    pub const AI_STEP: i32 = 1;

    /// Starting positions (top-left corners)
    pub const PLAYER1_START: (i32, i32) = (100, ARENA_HEIGHT / 2);
    pub const PLAYER2_START: (i32, i32) = (ARENA_WIDTH - 150, ARENA_HEIGHT / 2);

    /// Health bar layout
    pub const HEALTH_BAR_HEIGHT: i32 = 20;
    pub const HEALTH_BAR_Y: i32 = 10;
    pub const HEALTH_BAR_PIXELS_PER_HP: i32 = 2;
    pub const PLAYER1_BAR_X: i32 = 10;
    pub const PLAYER2_BAR_X: i32 = ARENA_WIDTH - 210;

    /// How long the win message stays up before exit
    pub const WIN_MESSAGE_HOLD_MS: u64 = 2000;

    pub const WINDOW_TITLE: &str = "Fighting Game with AI";
}
