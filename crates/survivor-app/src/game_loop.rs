//! Game loop thread. Runs the simulation engine at the fixed tick rate and
//! publishes snapshots.
//!
//! The engine is created inside this thread so it never crosses threads.
//! Commands arrive via `mpsc` channel; snapshots land in shared state for
//! the renderer to poll.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use survivor_core::constants::TICK_RATE;
use survivor_core::state::GameStateSnapshot;
use survivor_sim::engine::{SimConfig, SimulationEngine};

use crate::state::{AppState, GameLoopCommand};

/// Wall-clock duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawn the game loop thread and return the front end's handles to it.
pub fn spawn_game_loop(config: SimConfig) -> std::io::Result<(AppState, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    let handle = std::thread::Builder::new()
        .name("survivor-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &shared);
        })?;

    Ok((
        AppState {
            command_tx: cmd_tx,
            latest_snapshot,
        },
        handle,
    ))
}

/// Runs until a Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    tracing::debug!(seed = config.seed, "game loop started");
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    tracing::debug!("game loop stopped");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        let snapshot = engine.tick();
        if let Ok(mut lock) = latest_snapshot.lock() {
            // Events are per tick; keep any the renderer has not seen yet.
            if let Some(previous) = lock.take() {
                let mut merged = snapshot;
                let mut events = previous.events;
                events.append(&mut merged.events);
                merged.events = events;
                *lock = Some(merged);
            } else {
                *lock = Some(snapshot);
            }
        }

        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; reset to avoid a catch-up spiral.
            next_tick_time = now;
        }
    }
}
