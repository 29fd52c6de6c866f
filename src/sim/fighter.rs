//! Fighter entity
//!
//! A fighter is an axis-aligned box in the arena with health, an attack
//! cooldown and the pose derived from it. How it decides what to do each tick
//! lives in its attached [`Control`] policy.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::control::Control;
use crate::consts::*;

/// Which player slot a fighter occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Human-controlled, starts on the left
    Player1,
    /// AI-controlled, starts on the right
    Player2,
}

impl Side {
    /// 1-based player number, as shown in the win message
    pub fn number(self) -> u8 {
        match self {
            Side::Player1 => 1,
            Side::Player2 => 2,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::Player1 => 0,
            Side::Player2 => 1,
        }
    }
}

/// Animation pose, derived from the attack cooldown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Pose {
    #[default]
    Idle,
    Attacking,
}

/// Axis-aligned bounding box in arena pixels (top-left origin, y down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    pub fn left(&self) -> i32 {
        self.pos.x
    }

    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> i32 {
        self.pos.y
    }

    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    pub fn center_x(&self) -> i32 {
        self.pos.x + self.size.x / 2
    }

    /// Strict overlap: boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Clamp the box so it lies entirely inside `[0, width] x [0, height]`
    pub fn clamp_into(&mut self, width: i32, height: i32) {
        self.pos.x = self.pos.x.clamp(0, (width - self.size.x).max(0));
        self.pos.y = self.pos.y.clamp(0, (height - self.size.y).max(0));
    }
}

/// A fighter in the arena
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fighter {
    pub side: Side,
    pub bounds: Bounds,
    /// Remaining health; may go below zero on the final hit
    pub health: i32,
    /// Decision policy run by [`Fighter::think`]
    pub control: Control,
    pose: Pose,
    /// Ticks until the next attack is allowed
    cooldown: u32,
}

impl Fighter {
    /// Create a fighter with its top-left corner at `(x, y)`, clamped into the arena
    pub fn new(side: Side, x: i32, y: i32, control: Control) -> Self {
        let mut bounds = Bounds::new(x, y, FIGHTER_WIDTH, FIGHTER_HEIGHT);
        bounds.clamp_into(ARENA_WIDTH, ARENA_HEIGHT);
        Self {
            side,
            bounds,
            health: STARTING_HEALTH,
            control,
            pose: Pose::Idle,
            cooldown: 0,
        }
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    pub fn is_attacking(&self) -> bool {
        self.pose == Pose::Attacking
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    pub fn center_x(&self) -> i32 {
        self.bounds.center_x()
    }

    pub fn overlaps(&self, other: &Fighter) -> bool {
        self.bounds.overlaps(&other.bounds)
    }

    /// Translate by the delta, then clamp back into the arena
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.bounds.pos += IVec2::new(dx, dy);
        self.bounds.clamp_into(ARENA_WIDTH, ARENA_HEIGHT);
    }

    /// Swing if the cooldown has run out.
    ///
    /// Returns the damage dealt, or 0 while still cooling down. The hit is not
    /// range-checked here; callers decide whether proximity matters.
    pub fn attack(&mut self) -> i32 {
        if self.cooldown > 0 {
            return 0;
        }
        self.pose = Pose::Attacking;
        self.cooldown = ATTACK_COOLDOWN_TICKS;
        ATTACK_DAMAGE
    }

    /// Advance the cooldown by one tick
    pub fn update(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);
        if self.cooldown == 0 {
            self.pose = Pose::Idle;
        }
    }

    /// Run this fighter's control policy for one tick against `target`.
    ///
    /// Returns the damage to apply to `target`.
    pub fn think(&mut self, target: &Fighter) -> i32 {
        let control = self.control;
        control.decide(self, target)
    }

    /// Subtract damage from health. Negative damage is ignored so health
    /// never goes back up.
    pub fn take_damage(&mut self, damage: i32) {
        self.health -= damage.max(0);
    }
}
