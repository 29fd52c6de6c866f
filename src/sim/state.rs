//! Match state and rules
//!
//! Everything the match loop owns between ticks lives here.

use serde::{Deserialize, Serialize};

use super::control::Control;
use super::fighter::{Fighter, Side};
use crate::consts::*;

/// How the human fighter's swing turns into damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StrikeRule {
    /// The damage returned by the key-press swing is applied once, and the
    /// human's cooldown advances every tick.
    #[default]
    KeyPress,
    /// The key-press swing's damage is dropped, a second swing is attempted
    /// every tick while the fighter is in its attack pose, and the human's
    /// cooldown never advances. A single key press therefore locks the human
    /// into the attack pose and deals no damage.
    Legacy,
}

/// Match rules. Everything else is a compiled-in constant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRules {
    pub strike: StrikeRule,
}

/// How a match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// A fighter's health reached zero
    Decisive { winner: Side },
    /// The player quit
    Aborted,
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    Running,
    Finished(MatchOutcome),
}

/// Summary logged when a match ends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub outcome: Option<MatchOutcome>,
    pub ticks: u64,
    pub player1_health: i32,
    pub player2_health: i32,
}

/// Complete match state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub rules: MatchRules,
    /// Player 1, key-controlled
    pub human: Fighter,
    /// Player 2, scripted chase
    pub ai: Fighter,
    pub phase: MatchPhase,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl MatchState {
    /// New match with both fighters at their starting positions
    pub fn new(rules: MatchRules) -> Self {
        let (hx, hy) = PLAYER1_START;
        let (ax, ay) = PLAYER2_START;
        Self::with_fighters(
            rules,
            Fighter::new(Side::Player1, hx, hy, Control::Human),
            Fighter::new(Side::Player2, ax, ay, Control::chase()),
        )
    }

    /// New match from explicitly placed fighters
    pub fn with_fighters(rules: MatchRules, human: Fighter, ai: Fighter) -> Self {
        Self {
            rules,
            human,
            ai,
            phase: MatchPhase::Running,
            time_ticks: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == MatchPhase::Running
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        match self.phase {
            MatchPhase::Running => None,
            MatchPhase::Finished(outcome) => Some(outcome),
        }
    }

    /// Winner once either fighter is down. Player 2 takes it if both are.
    pub fn decisive_winner(&self) -> Option<Side> {
        if self.human.is_defeated() {
            Some(Side::Player2)
        } else if self.ai.is_defeated() {
            Some(Side::Player1)
        } else {
            None
        }
    }

    pub fn fighter(&self, side: Side) -> &Fighter {
        match side {
            Side::Player1 => &self.human,
            Side::Player2 => &self.ai,
        }
    }

    pub fn report(&self) -> MatchReport {
        MatchReport {
            outcome: self.outcome(),
            ticks: self.time_ticks,
            player1_health: self.human.health,
            player2_health: self.ai.health,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::fighter::Pose;

    #[test]
    fn test_new_match_layout() {
        let state = MatchState::new(MatchRules::default());
        assert!(state.is_running());
        assert_eq!(state.human.bounds.pos.x, 100);
        assert_eq!(state.human.bounds.pos.y, 300);
        assert_eq!(state.ai.bounds.pos.x, 650);
        assert_eq!(state.ai.bounds.pos.y, 300);
        assert_eq!(state.human.health, STARTING_HEALTH);
        assert_eq!(state.ai.health, STARTING_HEALTH);
        assert_eq!(state.human.pose(), Pose::Idle);
        assert_eq!(state.ai.control, Control::chase());
    }

    #[test]
    fn test_both_down_goes_to_player2() {
        let mut state = MatchState::new(MatchRules::default());
        assert_eq!(state.decisive_winner(), None);

        state.ai.health = 0;
        assert_eq!(state.decisive_winner(), Some(Side::Player1));

        state.human.health = -1;
        assert_eq!(state.decisive_winner(), Some(Side::Player2));
    }

    #[test]
    fn test_report_serializes_outcome() {
        let mut state = MatchState::new(MatchRules::default());
        state.phase = MatchPhase::Finished(MatchOutcome::Decisive {
            winner: Side::Player1,
        });
        state.time_ticks = 42;

        let json = serde_json::to_value(state.report()).unwrap();
        assert_eq!(json["ticks"], 42);
        assert_eq!(json["outcome"]["Decisive"]["winner"], "Player1");
        assert_eq!(json["player2_health"], STARTING_HEALTH);
    }
}
