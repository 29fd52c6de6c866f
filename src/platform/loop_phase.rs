//! Match loop phases
//!
//! Playing until the match finishes, then either straight out (quit) or a
//! fixed hold on the win message before exiting.

use std::time::{Duration, Instant};

use crate::consts::WIN_MESSAGE_HOLD_MS;
use crate::scene::Screen;
use crate::sim::{MatchOutcome, Side};

/// Where the match loop is between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    Playing,
    /// Win message is up until the deadline
    Holding { winner: Side, until: Instant },
    /// The loop should exit
    Done,
}

impl LoopPhase {
    /// Phase after a tick that left the match with `outcome`
    pub fn after_tick(self, outcome: Option<MatchOutcome>, now: Instant) -> Self {
        match (self, outcome) {
            (LoopPhase::Playing, None) => LoopPhase::Playing,
            (LoopPhase::Playing, Some(MatchOutcome::Aborted)) => LoopPhase::Done,
            (LoopPhase::Playing, Some(MatchOutcome::Decisive { winner })) => LoopPhase::Holding {
                winner,
                until: now + Duration::from_millis(WIN_MESSAGE_HOLD_MS),
            },
            (phase, _) => phase,
        }
    }

    /// Screens to present, in order, right after the tick that entered this
    /// phase. The deciding tick still shows its final match frame.
    pub fn screens_after_tick(self) -> Vec<Screen> {
        match self {
            LoopPhase::Playing => vec![Screen::Match],
            LoopPhase::Holding { winner, .. } => vec![Screen::Match, Screen::Result(winner)],
            LoopPhase::Done => Vec::new(),
        }
    }

    /// Screen to show on a plain redraw
    pub fn screen(self) -> Option<Screen> {
        match self {
            LoopPhase::Playing => Some(Screen::Match),
            LoopPhase::Holding { winner, .. } => Some(Screen::Result(winner)),
            LoopPhase::Done => None,
        }
    }

    /// Window closed. While playing this becomes a quit input on the next
    /// tick; during the hold it ends the loop at once.
    pub fn close_requested(self) -> Self {
        match self {
            LoopPhase::Holding { .. } => LoopPhase::Done,
            phase => phase,
        }
    }

    /// End the hold once its deadline has passed
    pub fn poll(self, now: Instant) -> Self {
        match self {
            LoopPhase::Holding { until, .. } if now >= until => LoopPhase::Done,
            phase => phase,
        }
    }

    /// When the event loop should wake next. `None` once done.
    pub fn wake_at(self, tick_deadline: Instant) -> Option<Instant> {
        match self {
            LoopPhase::Playing => Some(tick_deadline),
            LoopPhase::Holding { until, .. } => Some(until),
            LoopPhase::Done => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{MatchRules, MatchState, TickInput, tick};

    const HOLD: Duration = Duration::from_millis(WIN_MESSAGE_HOLD_MS);

    #[test]
    fn test_running_match_keeps_playing() {
        let now = Instant::now();
        let phase = LoopPhase::Playing.after_tick(None, now);
        assert_eq!(phase, LoopPhase::Playing);
        assert_eq!(phase.screens_after_tick(), vec![Screen::Match]);
        assert_eq!(phase.wake_at(now), Some(now));
    }

    #[test]
    fn test_quit_exits_without_win_message() {
        let mut state = MatchState::new(MatchRules::default());
        tick(
            &mut state,
            &TickInput {
                quit: true,
                ..Default::default()
            },
        );

        let phase = LoopPhase::Playing.after_tick(state.outcome(), Instant::now());
        assert_eq!(phase, LoopPhase::Done);
        assert!(phase.screens_after_tick().is_empty());
        assert_eq!(phase.screen(), None);
        assert_eq!(phase.wake_at(Instant::now()), None);
    }

    #[test]
    fn test_decisive_end_shows_final_frame_then_holds_message() {
        let now = Instant::now();
        let outcome = MatchOutcome::Decisive {
            winner: Side::Player1,
        };
        let phase = LoopPhase::Playing.after_tick(Some(outcome), now);

        assert_eq!(
            phase,
            LoopPhase::Holding {
                winner: Side::Player1,
                until: now + HOLD
            }
        );
        assert_eq!(
            phase.screens_after_tick(),
            vec![Screen::Match, Screen::Result(Side::Player1)]
        );
        assert_eq!(phase.screen(), Some(Screen::Result(Side::Player1)));
        assert_eq!(phase.wake_at(now), Some(now + HOLD));

        // Held for the full two seconds, then done
        assert_eq!(phase.poll(now + HOLD - Duration::from_millis(1)), phase);
        assert_eq!(phase.poll(now + HOLD), LoopPhase::Done);
    }

    #[test]
    fn test_close_during_hold_exits() {
        let now = Instant::now();
        let holding = LoopPhase::Holding {
            winner: Side::Player2,
            until: now + HOLD,
        };
        assert_eq!(holding.close_requested(), LoopPhase::Done);

        // While playing, closing is routed through the quit input instead
        assert_eq!(LoopPhase::Playing.close_requested(), LoopPhase::Playing);
    }

    #[test]
    fn test_finished_phases_ignore_later_ticks() {
        let now = Instant::now();
        let outcome = Some(MatchOutcome::Aborted);
        let holding = LoopPhase::Holding {
            winner: Side::Player1,
            until: now + HOLD,
        };
        assert_eq!(holding.after_tick(outcome, now), holding);
        assert_eq!(LoopPhase::Done.after_tick(None, now), LoopPhase::Done);
    }
}
