//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the run state, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely
//! headless, so runs are deterministic and testable.

use std::collections::VecDeque;

use glam::DVec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use survivor_core::commands::PlayerCommand;
use survivor_core::config::Tuning;
use survivor_core::constants::DT;
use survivor_core::enums::{Archetype, GamePhase};
use survivor_core::events::GameEvent;
use survivor_core::state::GameStateSnapshot;

use crate::progression;
use crate::systems;
use crate::world::World;
use crate::world_setup;

/// Configuration for a new engine.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: Tuning::default(),
        }
    }
}

/// The simulation engine. Owns the current run and all sim state.
pub struct SimulationEngine {
    world: Option<World>,
    tuning: Tuning,
    rng: ChaCha8Rng,
    archetype: Archetype,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: None,
            tuning: config.tuning,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            archetype: Archetype::default(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance by one fixed tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.tick_with_delta(DT)
    }

    /// Advance by `dt` seconds and return the resulting snapshot.
    pub fn tick_with_delta(&mut self, dt: f64) -> GameStateSnapshot {
        self.process_commands();
        if let Some(world) = self.world.as_mut() {
            step(world, &self.tuning, &mut self.rng, &mut self.events, dt);
        }
        self.snapshot()
    }

    pub fn phase(&self) -> GamePhase {
        self.world
            .as_ref()
            .map_or(GamePhase::ShapeSelect, |world| world.phase)
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// The current run, if one is in progress or finished.
    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    /// Mutable access to the current run for scripted scenarios.
    pub fn world_mut(&mut self) -> Option<&mut World> {
        self.world.as_mut()
    }

    /// Snapshot of the current state, draining pending events.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        match self.world.as_ref() {
            Some(world) => systems::snapshot::build_snapshot(world, &self.tuning, events),
            None => systems::snapshot::build_idle_snapshot(events),
        }
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartRun { archetype } => {
                if self.world.as_ref().map_or(true, |w| w.phase.is_terminal()) {
                    self.begin_run(archetype);
                }
            }
            PlayerCommand::SetMovement(input) => {
                if let Some(world) = self.world.as_mut().filter(|w| w.is_playing()) {
                    world.input = input;
                }
            }
            PlayerCommand::SelectUpgrade { slot } => {
                if let Some(world) = self.world.as_mut() {
                    progression::select_upgrade(world, &self.tuning, slot, &mut self.events);
                }
            }
            PlayerCommand::Restart => {
                if self.phase().is_terminal() {
                    let archetype = self.archetype;
                    tracing::info!(?archetype, "restart");
                    self.begin_run(archetype);
                }
            }
            PlayerCommand::ReturnToMenu => {
                if self.world.take().is_some() {
                    tracing::info!("returned to shape selection");
                }
            }
        }
    }

    fn begin_run(&mut self, archetype: Archetype) {
        self.archetype = archetype;
        self.world = Some(world_setup::start_run(&self.tuning, archetype, &mut self.rng));
        tracing::info!(?archetype, "run started");
    }
}

/// One tick of a run.
///
/// Terminal phases are frozen. The menu phase keeps the clock, deferred
/// actions and survival timer moving but nothing else.
fn step(
    world: &mut World,
    tuning: &Tuning,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
    dt: f64,
) {
    if world.phase.is_terminal() {
        return;
    }
    world.clock.advance(dt);
    systems::combat::run_deferred(world, events);

    if world.phase == GamePhase::UpgradeMenuOpen {
        world.survival_secs += dt;
        return;
    }

    if world.survival_secs >= tuning.progression.win_time {
        world.phase = GamePhase::Won;
        world.player.velocity = DVec2::ZERO;
        tracing::info!(
            survival_secs = world.survival_secs,
            level = world.progress.level,
            "run won"
        );
        events.push(GameEvent::Won {
            survival_secs: world.survival_secs,
            level: world.progress.level,
        });
        return;
    }

    systems::spawner::apply_scaling(world, tuning, events);
    systems::movement::apply_input(world);
    systems::weapon::run(world, tuning, events);
    world.survival_secs += dt;
    systems::cleanup::run(world, tuning);

    systems::movement::integrate(world, tuning, dt);
    for contact in systems::collision::detect(world, tuning) {
        if !world.is_playing() {
            break;
        }
        systems::combat::resolve(world, tuning, contact, events);
    }
    if !world.is_playing() {
        return;
    }

    systems::spawner::run(world, tuning, rng, dt);
    systems::behavior::run(world, tuning);
}
