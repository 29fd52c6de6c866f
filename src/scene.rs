//! Frame composition
//!
//! Decides what goes on screen for a match, expressed as calls on a [`Canvas`].
//! The canvas is whatever can draw sprites, rectangles and text; the wgpu
//! frame builder is the real one, tests use a recorder.

use glam::IVec2;

use crate::consts::*;
use crate::sim::{Fighter, MatchState, Pose, Side};

/// RGBA color in 0..1
pub type Color = [f32; 4];

/// Colors used on screen
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [1.0, 1.0, 1.0, 1.0];
    pub const TEXT: Color = [0.0, 0.0, 0.0, 1.0];
    pub const PLAYER1_HEALTH: Color = [0.0, 1.0, 0.0, 1.0];
    pub const PLAYER2_HEALTH: Color = [0.0, 0.0, 1.0, 1.0];
}

/// One of the four fighter sprites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteKey {
    pub side: Side,
    pub pose: Pose,
}

impl SpriteKey {
    /// All sprites, in atlas order
    pub const ALL: [SpriteKey; 4] = [
        SpriteKey::new(Side::Player1, Pose::Idle),
        SpriteKey::new(Side::Player1, Pose::Attacking),
        SpriteKey::new(Side::Player2, Pose::Idle),
        SpriteKey::new(Side::Player2, Pose::Attacking),
    ];

    pub const fn new(side: Side, pose: Pose) -> Self {
        Self { side, pose }
    }

    /// Position in [`SpriteKey::ALL`]
    pub fn index(self) -> usize {
        let pose = match self.pose {
            Pose::Idle => 0,
            Pose::Attacking => 1,
        };
        self.side.index() * 2 + pose
    }

    /// Image file name, relative to the asset directory
    pub fn file_name(self) -> String {
        let pose = match self.pose {
            Pose::Idle => "idle",
            Pose::Attacking => "attack",
        };
        format!("player{}_{}.png", self.side.number(), pose)
    }
}

/// Rendering collaborator: receives draw requests for one frame
pub trait Canvas {
    /// Fill the whole frame
    fn clear(&mut self, color: Color);
    /// Draw a sprite at its native size with its top-left corner at `top_left`
    fn sprite(&mut self, key: SpriteKey, top_left: IVec2);
    /// Filled axis-aligned rectangle
    fn fill_rect(&mut self, top_left: IVec2, size: IVec2, color: Color);
    /// Text centered on `center`
    fn text_centered(&mut self, text: &str, center: IVec2, color: Color);
}

impl Fighter {
    /// Submit this fighter's current sprite
    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.sprite(SpriteKey::new(self.side, self.pose()), self.bounds.pos);
    }
}

/// Health bar width in pixels; an empty bar once health is gone
pub fn health_bar_width(health: i32) -> i32 {
    health.max(0) * HEALTH_BAR_PIXELS_PER_HP
}

pub fn win_message(winner: Side) -> String {
    format!("Player {} Wins!", winner.number())
}

/// Draw one frame of a match in progress
pub fn draw_match(state: &MatchState, canvas: &mut impl Canvas) {
    canvas.clear(colors::BACKGROUND);

    state.human.draw(canvas);
    state.ai.draw(canvas);

    for (side, x, color) in [
        (Side::Player1, PLAYER1_BAR_X, colors::PLAYER1_HEALTH),
        (Side::Player2, PLAYER2_BAR_X, colors::PLAYER2_HEALTH),
    ] {
        let width = health_bar_width(state.fighter(side).health);
        if width > 0 {
            canvas.fill_rect(
                IVec2::new(x, HEALTH_BAR_Y),
                IVec2::new(width, HEALTH_BAR_HEIGHT),
                color,
            );
        }
    }
}

/// What a presented frame shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Fighters and health bars
    Match,
    /// Win message for the given side
    Result(Side),
}

/// Draw `screen` for the current match
pub fn draw_screen(screen: Screen, state: &MatchState, canvas: &mut impl Canvas) {
    match screen {
        Screen::Match => draw_match(state, canvas),
        Screen::Result(winner) => draw_result(winner, canvas),
    }
}

/// Draw the end-of-match screen
pub fn draw_result(winner: Side, canvas: &mut impl Canvas) {
    canvas.clear(colors::BACKGROUND);
    canvas.text_centered(
        &win_message(winner),
        IVec2::new(ARENA_WIDTH / 2, ARENA_HEIGHT / 2),
        colors::TEXT,
    );
}
