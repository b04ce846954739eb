pub mod command;
pub mod configs;
pub mod physics;
pub mod projectile;
mod schedule;
pub mod ship;
pub mod sim_events;
pub mod spawner;

use indexmap::IndexMap;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use physics::collider::Collider;
use physics::shape::HullShape;
use ship::cannon::Cannon;
use ship::mobility::{Mobility, Side, ThrustDirection, TurnPolicy};

pub use command::Command;
pub use configs::SimulationConfigs;
pub use glam::Vec2;
pub use projectile::{Projectile, ProjectileId};
pub use ship::data::{Faction, ShipDataId};
pub use ship::{Ship, ShipId};
pub use sim_events::SimulationEvents;
pub use spawner::GameStatus;

type SimRng = rand_xoshiro::Xoshiro128StarStar;

#[derive(Serialize, Deserialize)]
pub struct Simulation {
    pub configs: SimulationConfigs,
    pub tick: u64,
    rng: SimRng,

    next_ship_id: ShipId,
    next_projectile_id: ProjectileId,
    pub ships: IndexMap<ShipId, Ship, ahash::RandomState>,
    pub projectiles: IndexMap<ProjectileId, Projectile, ahash::RandomState>,
}
impl Simulation {
    pub fn new(seed: u64, configs: SimulationConfigs) -> Self {
        Self {
            configs,
            tick: 0,
            rng: SimRng::seed_from_u64(seed),
            next_ship_id: Default::default(),
            next_projectile_id: Default::default(),
            ships: Default::default(),
            projectiles: Default::default(),
        }
    }

    /// Advance the world by one tick.
    ///
    /// `dt` is the elapsed time in milliseconds supplied by the external loop.
    /// It only ages weapon cooldowns. Kinematics use a fixed per tick step.
    pub fn step(&mut self, dt: f32, cmds: &[Command]) -> SimulationEvents {
        self._step(dt, cmds)
    }

    pub fn spawn_ship(
        &mut self,
        ship_data_id: ShipDataId,
        faction: Faction,
        position: Vec2,
    ) -> ShipId {
        let ship_id = self.new_ship_id();
        self.ships
            .insert(ship_id, Ship::new(ship_data_id, faction, position));
        log::debug!("Spawned {:?} {:?} as {:?}", faction, ship_data_id, ship_id);
        ship_id
    }

    /// Register a projectile produced by [`Ship::fire`].
    pub fn register_projectile(&mut self, projectile: Projectile) -> ProjectileId {
        let projectile_id = self.new_projectile_id();
        self.projectiles.insert(projectile_id, projectile);
        projectile_id
    }

    fn new_ship_id(&mut self) -> ShipId {
        let id = self.next_ship_id;
        self.next_ship_id.0 += 1;
        id
    }

    fn new_projectile_id(&mut self) -> ProjectileId {
        let id = self.next_projectile_id;
        self.next_projectile_id.0 += 1;
        id
    }
}
impl Default for Simulation {
    fn default() -> Self {
        Self::new(1337, Default::default())
    }
}
