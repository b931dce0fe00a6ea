//! Terminal host for the survivor arcade game.
//!
//! Usage: `survivor [TUNING.json]`, or `survivor --print-tuning` to dump
//! the default tuning as a starting point for a file.

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    terminal,
};
use tracing_subscriber::EnvFilter;

use survivor_app::controls::{Action, Controls};
use survivor_app::game_loop;
use survivor_app::render::{self, Frame};
use survivor_app::screen::{self, Session};
use survivor_app::state::AppState;
use survivor_core::config::Tuning;
use survivor_core::enums::GamePhase;
use survivor_core::events::GameEvent;
use survivor_core::state::GameStateSnapshot;
use survivor_sim::engine::SimConfig;

/// Render cadence (≈30 FPS); the simulation ticks independently at 60 Hz.
const FRAME: Duration = Duration::from_millis(33);
const STATUS_DURATION: Duration = Duration::from_millis(1500);
const DEFAULT_LOG_FILE: &str = "survivor.log";

fn init_logging() -> Result<()> {
    let path = std::env::var("SURVIVOR_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
    let file = File::create(&path).with_context(|| format!("cannot create log file {path}"))?;
    // stdout belongs to the renderer.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_tuning(args: &[String]) -> Result<Tuning> {
    let path = args
        .iter()
        .skip(1)
        .find(|a| !a.starts_with("--"))
        .cloned()
        .or_else(|| std::env::var("SURVIVOR_TUNING").ok());
    match path {
        Some(path) => {
            let tuning =
                Tuning::load(&path).with_context(|| format!("failed to load tuning from {path}"))?;
            tracing::info!(%path, "tuning loaded");
            Ok(tuning)
        }
        None => Ok(Tuning::default()),
    }
}

fn seed_from_env() -> Result<u64> {
    match std::env::var("SURVIVOR_SEED") {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("SURVIVOR_SEED is not a number: {raw}")),
        Err(_) => Ok(SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64),
    }
}

/// Footer message for events worth calling out.
fn status_message(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::PlayerDamaged { health, .. } => Some(format!("Hit! {health} health left")),
        GameEvent::LevelUp { level } => Some(format!("Level {level}!")),
        GameEvent::UpgradeApplied { upgrade } => Some(format!("{} applied", upgrade.label())),
        GameEvent::SpawnRateIncreased { .. } => Some("Enemies are spawning faster".to_string()),
        _ => None,
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--print-tuning") {
        println!("{}", serde_json::to_string_pretty(&Tuning::default())?);
        return Ok(());
    }

    init_logging()?;
    let tuning = load_tuning(&args)?;
    let seed = seed_from_env()?;
    tracing::info!(seed, "starting survivor");

    let (app, loop_handle) =
        game_loop::spawn_game_loop(SimConfig { seed, tuning }).context("failed to start game loop")?;

    let mut out = BufWriter::new(stdout());
    let mut session = Session::default();
    let result = match screen::enter(&mut out, &mut session) {
        Ok(()) => {
            // Blocking reads live on their own thread so the frame loop never waits.
            let (tx, rx) = mpsc::channel::<Event>();
            thread::spawn(move || {
                while let Ok(ev) = event::read() {
                    if tx.send(ev).is_err() {
                        break;
                    }
                }
            });
            run(&mut out, &app, &rx)
        }
        Err(err) => Err(anyhow::Error::new(err).context("failed to prepare terminal")),
    };
    screen::leave(&mut out, session);

    app.shutdown();
    if loop_handle.join().is_err() {
        tracing::error!("game loop thread panicked");
    }
    tracing::info!("exiting");
    result
}

fn run<W: Write>(out: &mut W, app: &AppState, rx: &mpsc::Receiver<Event>) -> Result<()> {
    let mut controls = Controls::new();
    let mut latest = GameStateSnapshot::default();
    let mut phase = GamePhase::ShapeSelect;
    let mut status: Option<(String, Instant)> = None;

    loop {
        let frame_start = Instant::now();

        while let Ok(ev) = rx.try_recv() {
            if let Event::Key(key) = ev {
                match controls.handle_key(phase, key, frame_start) {
                    Action::Send(command) => app.send(command)?,
                    Action::Quit => return Ok(()),
                    Action::None => {}
                }
            }
        }
        if let Some(command) = controls.movement_command(phase, frame_start) {
            app.send(command)?;
        }

        if let Some(snap) = app.snapshot()? {
            for event in &snap.events {
                tracing::debug!(?event, "game event");
                if let Some(message) = status_message(event) {
                    status = Some((message, frame_start));
                }
            }
            phase = snap.phase;
            latest = snap;
        }
        status = status.filter(|(_, at)| frame_start.duration_since(*at) < STATUS_DURATION);

        let (cols, rows) = terminal::size()?;
        let frame = Frame {
            cols,
            rows,
            shape_cursor: controls.shape_cursor(),
            status: status.as_ref().map(|(message, _)| message.as_str()),
        };
        render::render(out, &latest, &frame)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}
