use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct ProjectileId(pub u32);

/// Inertial cannon round. Nothing mutates after spawn except position
/// integration until it leaves the world, hits a ship or meets another
/// projectile.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct Projectile {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Firing heading, fixed at spawn.
    pub angle: f32,
    pub faction: Faction,
    pub destroyed: bool,
}
impl Projectile {
    pub const RADIUS: f32 = 2.0;

    pub fn update(&mut self) {
        self.position += self.velocity;
    }

    pub fn is_alive(&self) -> bool {
        !self.destroyed
    }

    pub fn collider(&self) -> Collider {
        Collider {
            radius: Self::RADIUS,
            position: self.position,
        }
    }
}
