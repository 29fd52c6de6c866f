//! Fixed timestep simulation tick
//!
//! One call advances the match by exactly one tick: input, strikes, AI, end check.

use super::state::{MatchOutcome, MatchPhase, MatchState, StrikeRule};
use crate::consts::MOVE_SPEED;

/// Logical key state sampled for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub attack: bool,
    /// Window closed or quit key pressed
    pub quit: bool,
}

/// Advance the match by one tick. Does nothing once the match has finished.
pub fn tick(state: &mut MatchState, input: &TickInput) {
    if !state.is_running() {
        return;
    }

    if input.quit {
        state.phase = MatchPhase::Finished(MatchOutcome::Aborted);
        log::info!("Match aborted at tick {}", state.time_ticks);
        return;
    }

    state.time_ticks += 1;
    let rules = state.rules;

    // Human policy: advances the cooldown, never strikes on its own
    if rules.strike == StrikeRule::KeyPress {
        state.human.think(&state.ai);
    }

    // Human input
    if input.move_left {
        state.human.move_by(-MOVE_SPEED, 0);
    }
    if input.move_right {
        state.human.move_by(MOVE_SPEED, 0);
    }
    let key_damage = if input.attack {
        state.human.attack()
    } else {
        0
    };

    // Human strike; never range-checked
    let strike_damage = match rules.strike {
        StrikeRule::KeyPress => key_damage,
        StrikeRule::Legacy => {
            if state.human.is_attacking() {
                state.human.attack()
            } else {
                0
            }
        }
    };
    if strike_damage > 0 {
        state.ai.take_damage(strike_damage);
        log::debug!(
            "tick {}: player 1 hits for {} (player 2 at {})",
            state.time_ticks,
            strike_damage,
            state.ai.health
        );
    }

    // AI decision
    let ai_damage = state.ai.think(&state.human);
    if ai_damage > 0 {
        state.human.take_damage(ai_damage);
        log::debug!(
            "tick {}: player 2 hits for {} (player 1 at {})",
            state.time_ticks,
            ai_damage,
            state.human.health
        );
    }

    if let Some(winner) = state.decisive_winner() {
        state.phase = MatchPhase::Finished(MatchOutcome::Decisive { winner });
        log::info!(
            "Player {} wins at tick {}",
            winner.number(),
            state.time_ticks
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::control::Control;
    use crate::sim::fighter::{Fighter, Pose, Side};
    use crate::sim::state::MatchRules;

    fn duel(human_x: i32, ai_x: i32, rules: MatchRules) -> MatchState {
        MatchState::with_fighters(
            rules,
            Fighter::new(Side::Player1, human_x, 300, Control::Human),
            Fighter::new(Side::Player2, ai_x, 300, Control::chase()),
        )
    }

    fn attack_input() -> TickInput {
        TickInput {
            attack: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_quit_aborts_without_touching_fighters() {
        let mut state = MatchState::new(MatchRules::default());
        let before = state.ai.bounds;
        let input = TickInput {
            quit: true,
            attack: true,
            ..Default::default()
        };
        tick(&mut state, &input);

        assert_eq!(state.phase, MatchPhase::Finished(MatchOutcome::Aborted));
        assert_eq!(state.ai.bounds, before);
        assert_eq!(state.ai.health, STARTING_HEALTH);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_finished_match_does_not_advance() {
        let mut state = MatchState::new(MatchRules::default());
        state.phase = MatchPhase::Finished(MatchOutcome::Aborted);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.ai.bounds.pos.x, PLAYER2_START.0);
    }

    #[test]
    fn test_human_moves_five_per_tick() {
        let mut state = MatchState::new(MatchRules::default());
        let left = TickInput {
            move_left: true,
            ..Default::default()
        };
        tick(&mut state, &left);
        assert_eq!(state.human.bounds.pos.x, PLAYER1_START.0 - MOVE_SPEED);

        let both = TickInput {
            move_left: true,
            move_right: true,
            ..Default::default()
        };
        tick(&mut state, &both);
        assert_eq!(state.human.bounds.pos.x, PLAYER1_START.0 - MOVE_SPEED);
    }

    #[test]
    fn test_idle_human_is_approached_without_damage() {
        // AI 500 units away, outside attack range
        let mut state = duel(100, 600, MatchRules::default());
        for t in 1..=430 {
            tick(&mut state, &TickInput::default());
            assert_eq!(state.ai.bounds.pos.x, 600 - t);
            assert_eq!(state.ai.bounds.pos.y, 300);
            assert_eq!(state.human.health, STARTING_HEALTH);
            assert!(state.is_running());
        }
    }

    #[test]
    fn test_key_press_hits_once_regardless_of_distance() {
        let mut state = duel(100, 650, MatchRules::default());
        tick(&mut state, &attack_input());
        assert_eq!(state.ai.health, STARTING_HEALTH - ATTACK_DAMAGE);
        assert!(state.human.is_attacking());

        // Holding the key does nothing until the cooldown runs out
        for _ in 1..ATTACK_COOLDOWN_TICKS {
            tick(&mut state, &attack_input());
        }
        assert_eq!(state.ai.health, STARTING_HEALTH - ATTACK_DAMAGE);

        tick(&mut state, &attack_input());
        assert_eq!(state.ai.health, STARTING_HEALTH - 2 * ATTACK_DAMAGE);
    }

    #[test]
    fn test_attack_pose_lasts_thirty_ticks() {
        let mut state = duel(100, 650, MatchRules::default());
        tick(&mut state, &attack_input());
        for _ in 1..ATTACK_COOLDOWN_TICKS {
            tick(&mut state, &TickInput::default());
            assert_eq!(state.human.pose(), Pose::Attacking);
        }
        tick(&mut state, &TickInput::default());
        assert_eq!(state.human.pose(), Pose::Idle);
    }

    #[test]
    fn test_human_cooldown_advances_each_tick_without_moving() {
        let mut state = duel(100, 650, MatchRules::default());
        state.human.attack();
        tick(&mut state, &TickInput::default());

        assert_eq!(state.human.cooldown(), ATTACK_COOLDOWN_TICKS - 1);
        assert_eq!(state.human.bounds.pos.x, 100);
        assert_eq!(state.ai.health, STARTING_HEALTH);
    }

    #[test]
    fn test_single_counterattack_leaves_match_running() {
        let mut state = duel(300, 330, MatchRules::default());
        tick(&mut state, &attack_input());

        assert_eq!(state.human.health, STARTING_HEALTH - 1);
        assert_eq!(state.ai.health, STARTING_HEALTH - 1);
        assert!(state.is_running());
    }

    #[test]
    fn test_match_ends_on_first_tick_health_hits_zero() {
        let mut state = duel(100, 650, MatchRules::default());
        state.ai.health = 1;
        tick(&mut state, &attack_input());

        assert_eq!(
            state.phase,
            MatchPhase::Finished(MatchOutcome::Decisive {
                winner: Side::Player1
            })
        );
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_human_defeat_gives_player2() {
        let mut state = duel(300, 330, MatchRules::default());
        state.human.health = 1;
        tick(&mut state, &attack_input());

        // Both took a hit; the AI survives at 99
        assert_eq!(
            state.outcome(),
            Some(MatchOutcome::Decisive {
                winner: Side::Player2
            })
        );
    }

    #[test]
    fn test_legacy_strike_drops_key_press_damage() {
        let rules = MatchRules {
            strike: StrikeRule::Legacy,
        };
        let mut state = duel(100, 650, rules);
        for _ in 0..120 {
            tick(&mut state, &attack_input());
        }

        // Cooldown never advances, so the replayed swing never lands
        assert_eq!(state.ai.health, STARTING_HEALTH);
        assert!(state.human.is_attacking());
        assert_eq!(state.human.cooldown(), ATTACK_COOLDOWN_TICKS);
    }
}
