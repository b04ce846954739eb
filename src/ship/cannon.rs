use super::*;

#[derive(Serialize, Deserialize, Default, Clone, Copy, Debug)]
pub struct Cannon {
    /// Milliseconds until the next shot is permitted. Never negative.
    pub cooldown: f32,
}
impl Cannon {
    pub fn ready(&self) -> bool {
        self.cooldown <= 0.0
    }

    /// The only place the cooldown decreases.
    pub fn update(&mut self, dt: f32) {
        self.cooldown = (self.cooldown - dt).max(0.0);
    }
}

impl Ship {
    /// Spawn one projectile per hardpoint, or nothing while the cooldown is
    /// still running. Returned projectiles belong to the caller and must be
    /// registered with the simulation.
    pub fn fire(&mut self) -> SmallVec<[Projectile; 2]> {
        if self.destroyed || !self.cannon.ready() {
            return SmallVec::new();
        }
        let data = self.data();
        self.cannon.cooldown = data.cannon.shoot_delay;

        let muzzle_velocity = heading_vector(self.angle) * data.cannon.projectile_speed;
        data.hull
            .hardpoints
            .iter()
            .map(|&hardpoint| Projectile {
                position: self.position + rotate_to_world(hardpoint, self.angle),
                velocity: self.velocity + muzzle_velocity,
                angle: self.angle,
                faction: self.faction,
                destroyed: false,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_cooldown_gates_fire() {
        let mut ship = Ship::new(ShipDataId::Fighter, Faction::Player, Vec2::ZERO);
        let shoot_delay = ship.data().cannon.shoot_delay;

        assert_eq!(ship.fire().len(), 2);
        assert!(ship.fire().is_empty());

        // Not quite elapsed.
        ship.cannon.update(shoot_delay - 1.0);
        assert!(ship.fire().is_empty());

        ship.cannon.update(1.0);
        assert_eq!(ship.fire().len(), 2);
    }

    #[test]
    fn test_cooldown_never_negative() {
        let mut cannon = Cannon { cooldown: 10.0 };
        cannon.update(500.0);
        assert_eq!(cannon.cooldown, 0.0);
        cannon.update(500.0);
        assert_eq!(cannon.cooldown, 0.0);
    }

    #[test]
    fn test_projectiles_inherit_ship_velocity() {
        let mut ship = Ship::new(ShipDataId::Scout, Faction::Player, Vec2::new(100.0, 100.0));
        ship.velocity = Vec2::new(0.0, 3.0);
        let speed = ship.data().cannon.projectile_speed;

        let projectiles = ship.fire();
        assert_eq!(projectiles.len(), 1);
        let projectile = &projectiles[0];
        assert_abs_diff_eq!(projectile.velocity.x, speed, epsilon = 1e-4);
        assert_abs_diff_eq!(projectile.velocity.y, 3.0, epsilon = 1e-4);
        assert_eq!(projectile.angle, ship.angle);
        // Spawned at the hardpoint, ahead of the hull.
        assert_abs_diff_eq!(projectile.position.x, 114.0, epsilon = 1e-4);
    }
}
