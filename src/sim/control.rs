//! Fighter control policies
//!
//! The human fighter is steered by key input from the match loop; the AI
//! fighter runs a single-tick chase-and-swing rule against its target.

use serde::{Deserialize, Serialize};

use super::fighter::Fighter;
use crate::consts::{AI_ATTACK_RANGE, AI_STEP};

/// Decision policy attached to a fighter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control {
    /// Driven by key input; only the cooldown advances on its own
    Human,
    /// Walk toward the target, swing back when hit at close range
    ScriptedChase { attack_range: i32 },
}

impl Control {
    /// The AI policy with the default attack range
    pub fn chase() -> Self {
        Control::ScriptedChase {
            attack_range: AI_ATTACK_RANGE,
        }
    }

    /// Run one tick of this policy for `fighter`. Returns damage dealt to `target`.
    pub fn decide(&self, fighter: &mut Fighter, target: &Fighter) -> i32 {
        fighter.update();
        match *self {
            Control::Human => 0,
            Control::ScriptedChase { attack_range } => chase_step(fighter, target, attack_range),
        }
    }
}

/// Horizontal step toward the target's center. Equal centers step left.
fn step_toward(fighter: &Fighter, target: &Fighter) -> i32 {
    if fighter.center_x() < target.center_x() {
        AI_STEP
    } else {
        -AI_STEP
    }
}

/// The chase rule proper, after the cooldown has been advanced.
///
/// When the target is swinging and the boxes overlap, the fighter still closes
/// in by one step and answers with its own attack if within range. Otherwise
/// it only walks toward the target.
fn chase_step(fighter: &mut Fighter, target: &Fighter, attack_range: i32) -> i32 {
    let dx = step_toward(fighter, target);
    if fighter.overlaps(target) && target.is_attacking() {
        fighter.move_by(dx, 0);
        if (fighter.center_x() - target.center_x()).abs() <= attack_range {
            return fighter.attack();
        }
        return 0;
    }

    fighter.move_by(dx, 0);
    0
}
