//! Keyboard handling: turns crossterm key events into player commands.
//!
//! Classic terminals report presses and OS key-repeat, never releases, so a
//! direction counts as held while its last press or repeat is younger than
//! `HOLD_WINDOW`. Terminals with keyboard enhancement also send releases,
//! which drop the key at once.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use survivor_core::commands::{MoveInput, PlayerCommand};
use survivor_core::enums::{Archetype, GamePhase};

/// How long a press keeps a direction held without a repeat.
pub const HOLD_WINDOW: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// What the front end should do in response to a key.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Send(PlayerCommand),
    Quit,
    None,
}

#[derive(Debug, Default)]
pub struct Controls {
    held: HashMap<Direction, Instant>,
    shape_cursor: usize,
    last_sent: MoveInput,
}

fn direction_of(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        _ => None,
    }
}

fn digit_of(code: KeyCode) -> Option<u8> {
    match code {
        KeyCode::Char(c) => c.to_digit(10).and_then(|d| u8::try_from(d).ok()),
        _ => None,
    }
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlighted entry on the shape-selection screen.
    pub fn shape_cursor(&self) -> usize {
        self.shape_cursor
    }

    /// React to one key event in the given phase.
    pub fn handle_key(&mut self, phase: GamePhase, key: KeyEvent, now: Instant) -> Action {
        if key.kind == KeyEventKind::Release {
            if let Some(direction) = direction_of(key.code) {
                self.held.remove(&direction);
            }
            return Action::None;
        }

        let quit = matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL));
        if quit {
            return Action::Quit;
        }

        match phase {
            GamePhase::ShapeSelect => self.shape_select_key(key),
            GamePhase::Playing => {
                if let Some(direction) = direction_of(key.code) {
                    self.held.insert(direction, now);
                }
                Action::None
            }
            GamePhase::UpgradeMenuOpen => digit_of(key.code)
                .and_then(PlayerCommand::select_key)
                .map_or(Action::None, Action::Send),
            GamePhase::GameOver | GamePhase::Won => match key.code {
                KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => {
                    Action::Send(PlayerCommand::Restart)
                }
                KeyCode::Char('m') | KeyCode::Char('M') => Action::Send(PlayerCommand::ReturnToMenu),
                _ => Action::None,
            },
        }
    }

    fn shape_select_key(&mut self, key: KeyEvent) -> Action {
        if key.kind != KeyEventKind::Press {
            return Action::None;
        }
        let last = Archetype::ALL.len() - 1;
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                Action::Send(PlayerCommand::start(Archetype::ALL[self.shape_cursor]))
            }
            code => match (digit_of(code), direction_of(code)) {
                (Some(d @ 1..=3), _) => {
                    self.shape_cursor = usize::from(d - 1);
                    Action::Send(PlayerCommand::start(Archetype::ALL[self.shape_cursor]))
                }
                (_, Some(Direction::Up | Direction::Left)) => {
                    self.shape_cursor = self.shape_cursor.saturating_sub(1);
                    Action::None
                }
                (_, Some(Direction::Down | Direction::Right)) => {
                    self.shape_cursor = (self.shape_cursor + 1).min(last);
                    Action::None
                }
                _ => Action::None,
            },
        }
    }

    /// Directions still inside the hold window at `now`.
    pub fn held_input(&mut self, now: Instant) -> MoveInput {
        self.held
            .retain(|_, seen| now.saturating_duration_since(*seen) <= HOLD_WINDOW);
        MoveInput {
            up: self.held.contains_key(&Direction::Up),
            down: self.held.contains_key(&Direction::Down),
            left: self.held.contains_key(&Direction::Left),
            right: self.held.contains_key(&Direction::Right),
        }
    }

    /// A movement command when the held set changed since the last one sent.
    ///
    /// Outside `Playing` the held set is dropped; the engine clears its own
    /// copy when the menu opens.
    pub fn movement_command(&mut self, phase: GamePhase, now: Instant) -> Option<PlayerCommand> {
        if phase != GamePhase::Playing {
            self.held.clear();
            self.last_sent = MoveInput::default();
            return None;
        }
        let input = self.held_input(now);
        if input == self.last_sent {
            return None;
        }
        self.last_sent = input;
        Some(PlayerCommand::SetMovement(input))
    }
}
