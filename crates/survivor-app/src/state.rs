//! State shared between the input/render thread and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};

use survivor_core::commands::PlayerCommand;
use survivor_core::state::GameStateSnapshot;

/// Commands sent from the front end to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handles the front end keeps on the running game loop.
pub struct AppState {
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
}

impl AppState {
    pub fn send(&self, command: PlayerCommand) -> Result<()> {
        self.command_tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|_| anyhow!("game loop has stopped"))
    }

    /// Most recent snapshot carrying every event published since the
    /// previous call. `None` until the loop has ticked.
    pub fn snapshot(&self) -> Result<Option<GameStateSnapshot>> {
        let mut lock = self
            .latest_snapshot
            .lock()
            .map_err(|_| anyhow!("snapshot lock poisoned"))?;
        Ok(lock.as_mut().map(|snap| {
            let events = std::mem::take(&mut snap.events);
            GameStateSnapshot {
                events,
                ..snap.clone()
            }
        }))
    }

    pub fn shutdown(&self) {
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use survivor_core::events::GameEvent;

    #[test]
    fn test_snapshot_hands_out_events_once() {
        let (tx, _rx) = mpsc::channel();
        let state = AppState {
            command_tx: tx,
            latest_snapshot: Arc::new(Mutex::new(Some(GameStateSnapshot {
                events: vec![GameEvent::OrbExpired],
                ..Default::default()
            }))),
        };
        assert_eq!(state.snapshot().unwrap().unwrap().events.len(), 1);
        assert!(state.snapshot().unwrap().unwrap().events.is_empty());
    }

    #[test]
    fn test_send_after_loop_exit_is_an_error() {
        let (tx, rx) = mpsc::channel();
        let state = AppState {
            command_tx: tx,
            latest_snapshot: Arc::new(Mutex::new(None)),
        };
        assert!(state.snapshot().unwrap().is_none());
        drop(rx);
        assert!(state.send(PlayerCommand::Restart).is_err());
    }
}
