use super::*;

#[derive(Serialize, Deserialize, Default, Clone, Copy, Debug)]
pub struct Mobility {
    pub forward_thrust: f32,
    pub lateral_thrust: f32,
    pub max_linear_velocity: f32,
    /// Degrees per tick.
    pub turn_rate: f32,
    pub turn_policy: TurnPolicy,
    pub mass: f32,
}
impl Mobility {
    /// Heavier ships accelerate more slowly.
    pub fn resistance(&self) -> f32 {
        1.0 / (1.0 + self.mass)
    }
}

/// How `turn` is applied. One policy per ship class, never mixed.
#[derive(Serialize, Deserialize, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPolicy {
    /// The heading changes by `turn_rate` degrees per call.
    #[default]
    Instant,
    /// Calls accumulate angular velocity, applied during integration
    /// and decayed by `brake_rotation`.
    Inertial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThrustDirection {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Ship {
    /// Thrust along the heading. The velocity magnitude never exceeds
    /// `max_linear_velocity`, no matter how often this is called per tick.
    pub fn accelerate(&mut self, direction: ThrustDirection) {
        if self.destroyed {
            return;
        }
        let thrust = self.mobility.forward_thrust * self.mobility.resistance();
        let accel = heading_vector(self.angle) * thrust;
        match direction {
            ThrustDirection::Forward => self.velocity += accel,
            ThrustDirection::Backward => self.velocity -= accel,
        }
        self.velocity = self
            .velocity
            .clamp_length_max(self.mobility.max_linear_velocity);
    }

    /// Strafe perpendicular to the heading. Shares the same speed budget as
    /// forward thrust.
    pub fn accelerate_lateral(&mut self, side: Side) {
        if self.destroyed {
            return;
        }
        let thrust = self.mobility.lateral_thrust * self.mobility.resistance();
        // Left of the heading in a y-down world.
        let accel = heading_vector(self.angle + 90.0) * thrust;
        match side {
            Side::Left => self.velocity += accel,
            Side::Right => self.velocity -= accel,
        }
        self.velocity = self
            .velocity
            .clamp_length_max(self.mobility.max_linear_velocity);
    }

    /// Reduce speed by one thrust unit, snapping to exactly zero at the end
    /// so braking terminates instead of decaying forever.
    pub fn brake(&mut self) {
        if self.destroyed {
            return;
        }
        let speed = self.velocity.length();
        if speed <= 0.0 {
            return;
        }
        let thrust = self.mobility.forward_thrust * self.mobility.resistance();
        if speed < thrust {
            self.velocity = Vec2::ZERO;
        } else {
            self.velocity -= self.velocity * (thrust / speed);
        }
    }

    pub fn turn(&mut self, side: Side) {
        if self.destroyed {
            return;
        }
        match self.mobility.turn_policy {
            TurnPolicy::Instant => {
                let turn = match side {
                    Side::Left => self.mobility.turn_rate,
                    Side::Right => -self.mobility.turn_rate,
                };
                self.angle = (self.angle + turn).rem_euclid(360.0);
            }
            TurnPolicy::Inertial => {
                let step = self.turn_acceleration();
                let step = match side {
                    Side::Left => step,
                    Side::Right => -step,
                };
                self.angular_velocity = (self.angular_velocity + step)
                    .clamp(-self.mobility.turn_rate, self.mobility.turn_rate);
            }
        }
    }

    /// Decay angular velocity toward zero. A no-op for instant-turn classes,
    /// which never build up any.
    pub fn brake_rotation(&mut self) {
        if self.destroyed {
            return;
        }
        let step = self.turn_acceleration();
        if self.angular_velocity.abs() < step {
            self.angular_velocity = 0.0;
        } else {
            self.angular_velocity -= step * self.angular_velocity.signum();
        }
    }

    fn turn_acceleration(&self) -> f32 {
        self.mobility.turn_rate * self.mobility.resistance() * 0.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn test_ship(ship_data_id: ShipDataId) -> Ship {
        Ship::new(ship_data_id, Faction::Player, Vec2::new(2000.0, 2000.0))
    }

    #[test]
    fn test_speed_clamp() {
        let mut rng = rand_xoshiro::Xoshiro128StarStar::seed_from_u64(7);
        let mut ship = test_ship(ShipDataId::Scout);
        for _ in 0..2000 {
            match rng.gen_range(0..4) {
                0 => ship.accelerate(ThrustDirection::Forward),
                1 => ship.accelerate(ThrustDirection::Backward),
                2 => ship.accelerate_lateral(Side::Left),
                _ => ship.accelerate_lateral(Side::Right),
            }
            if rng.gen_bool(0.2) {
                ship.turn(Side::Left);
            }
            assert!(ship.velocity.length() <= ship.mobility.max_linear_velocity + 1e-4);
        }
    }

    #[test]
    fn test_braking_terminates() {
        let mut ship = test_ship(ShipDataId::Fighter);
        for _ in 0..100 {
            ship.accelerate(ThrustDirection::Forward);
        }
        assert!(ship.velocity.length() > 0.0);

        let max_ticks = (ship.mobility.max_linear_velocity
            / (ship.mobility.forward_thrust * ship.mobility.resistance()))
        .ceil() as usize
            + 1;
        let mut ticks = 0;
        while ship.velocity != Vec2::ZERO {
            ship.brake();
            ticks += 1;
            assert!(ticks <= max_ticks, "braking did not terminate");
        }
        assert_eq!(ship.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_angle_normalized() {
        let mut ship = test_ship(ShipDataId::Scout);
        for _ in 0..500 {
            ship.turn(Side::Right);
            assert!((0.0..360.0).contains(&ship.angle));
        }
        for _ in 0..500 {
            ship.turn(Side::Left);
            assert!((0.0..360.0).contains(&ship.angle));
        }
    }

    #[test]
    fn test_inertial_turn_and_rotation_brake() {
        let mut ship = test_ship(ShipDataId::HeavyFighter);
        assert_eq!(ship.mobility.turn_policy, TurnPolicy::Inertial);

        for _ in 0..1000 {
            ship.turn(Side::Left);
        }
        assert!(ship.angular_velocity > 0.0);
        assert!(ship.angular_velocity <= ship.mobility.turn_rate);

        let before = ship.angle;
        ship.update(0.0);
        assert!((0.0..360.0).contains(&ship.angle));
        assert_ne!(ship.angle, before);

        for _ in 0..1000 {
            ship.brake_rotation();
        }
        assert_eq!(ship.angular_velocity, 0.0);
    }

    #[test]
    fn test_resistance_slows_heavy_ships() {
        let mut scout = test_ship(ShipDataId::Scout);
        let mut heavy = test_ship(ShipDataId::HeavyFighter);
        scout.accelerate(ThrustDirection::Forward);
        heavy.accelerate(ThrustDirection::Forward);
        assert!(scout.velocity.length() > heavy.velocity.length());
    }

    #[test]
    fn test_destroyed_ship_ignores_commands() {
        let mut ship = test_ship(ShipDataId::Scout);
        ship.destroyed = true;
        ship.accelerate(ThrustDirection::Forward);
        ship.turn(Side::Left);
        assert_eq!(ship.velocity, Vec2::ZERO);
        assert_eq!(ship.angle, 0.0);
        assert!(ship.fire().is_empty());
    }
}
