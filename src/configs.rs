use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimulationConfigs {
    /// World size on the x axis. Ships are clamped inside `0.0..=world_width`.
    pub world_width: f32,
    /// World size on the y axis.
    pub world_height: f32,
    /// Two ships are pushed apart until their centers are at least this far.
    pub min_ship_separation: f32,
    /// Projectiles this far outside the world bounds are destroyed.
    pub projectile_bound_margin: f32,
    /// The autopilot brakes instead of closing in below this distance.
    pub autopilot_tolerance: f32,
    /// Enemies only fire at a target closer than this.
    pub enemy_fire_range: f32,
    /// Enemies only fire when their alignment to the target is at most this.
    pub enemy_fire_alignment: f32,
    /// Enemies spawn at least this far from the reference point.
    pub min_spawn_distance: f32,
    /// How many positions are sampled per enemy before giving up.
    pub max_spawn_attempts: u32,
}
impl Default for SimulationConfigs {
    fn default() -> Self {
        Self {
            world_width: 4000.0,
            world_height: 4000.0,
            min_ship_separation: 25.0,
            projectile_bound_margin: 10.0,
            autopilot_tolerance: 150.0,
            enemy_fire_range: 500.0,
            enemy_fire_alignment: 0.2,
            min_spawn_distance: 300.0,
            max_spawn_attempts: 32,
        }
    }
}
