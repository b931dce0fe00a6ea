//! Per-run simulation state.
//!
//! Created at run start, dropped on restart or return to the selection
//! screen. Systems borrow it mutably for one tick at a time.

use survivor_core::commands::MoveInput;
use survivor_core::components::{Enemy, Orb, Player, Projectile};
use survivor_core::enums::{Behavior, GamePhase, UpgradeKind};
use survivor_core::types::SimTime;

use crate::pool::Pool;
use crate::scheduler::Scheduler;
use crate::systems::spawner::SpawnState;

/// Level and experience bookkeeping.
#[derive(Debug, Clone)]
pub struct Progress {
    pub level: u32,
    /// Orbs collected toward the next level.
    pub exp: u32,
    /// Options offered by the open upgrade menu, if any.
    pub menu: Option<Vec<UpgradeKind>>,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            level: 1,
            exp: 0,
            menu: None,
        }
    }
}

/// Everything that belongs to one run.
pub struct World {
    pub phase: GamePhase,
    /// Run clock. Drives cooldowns, motion and deferred actions.
    pub clock: SimTime,
    /// HUD timer; compared against the win threshold.
    pub survival_secs: f64,
    pub player: Player,
    pub enemies: Pool<Enemy>,
    pub projectiles: Pool<Projectile>,
    pub orbs: Pool<Orb>,
    pub scheduler: Scheduler,
    pub spawner: SpawnState,
    pub progress: Progress,
    /// Latest held-direction snapshot from the host.
    pub input: MoveInput,
    pub next_blink_id: u32,
}

impl World {
    pub fn now(&self) -> f64 {
        self.clock.elapsed_secs
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn count_behavior(&self, behavior: Behavior) -> usize {
        self.enemies
            .iter()
            .filter(|(_, enemy)| enemy.behavior() == behavior)
            .count()
    }
}
