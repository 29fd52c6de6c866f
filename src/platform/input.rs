//! Keyboard state
//!
//! Tracks which logical keys are held between ticks. Physical bindings:
//! `A` left, `D` right, `J` attack, `Escape` quit.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::sim::TickInput;

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Attack,
    Quit,
}

impl Action {
    pub fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::KeyA => Some(Action::MoveLeft),
            KeyCode::KeyD => Some(Action::MoveRight),
            KeyCode::KeyJ => Some(Action::Attack),
            KeyCode::Escape => Some(Action::Quit),
            _ => None,
        }
    }
}

/// Held-key snapshot plus a latched quit request
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    left: bool,
    right: bool,
    attack: bool,
    quit: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition. Unbound keys are ignored.
    pub fn handle_key(&mut self, code: KeyCode, state: ElementState) {
        let pressed = state.is_pressed();
        match Action::from_key(code) {
            Some(Action::MoveLeft) => self.left = pressed,
            Some(Action::MoveRight) => self.right = pressed,
            Some(Action::Attack) => self.attack = pressed,
            Some(Action::Quit) => self.quit |= pressed,
            None => {}
        }
    }

    /// Window close or any other external quit signal
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Input for the next tick, from the keys currently held
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            move_left: self.left,
            move_right: self.right,
            attack: self.attack,
            quit: self.quit,
        }
    }
}
