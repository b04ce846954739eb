use super::*;

/// What happened during one call to [`Simulation::step`].
///
/// Destroyed ids are already removed from the registries when `step` returns.
#[derive(Debug, Clone, Default)]
pub struct SimulationEvents {
    pub projectiles_spawned: Vec<ProjectileId>,
    /// `(projectile, ship)` pairs. At most one ship per projectile per tick.
    pub projectile_hits: Vec<(ProjectileId, ShipId)>,
    pub projectiles_destroyed: Vec<ProjectileId>,
    pub ships_destroyed: Vec<ShipId>,
}
