pub mod autopilot;
pub mod cannon;
pub mod data;
pub mod mobility;

use super::*;
use data::ShipData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct ShipId(pub u32);

/// Unit vector of a heading in degrees. The world's y axis points down,
/// so a positive angle rotates counter-clockwise on screen.
pub fn heading_vector(angle: f32) -> Vec2 {
    let (sin, cos) = angle.to_radians().sin_cos();
    Vec2::new(cos, -sin)
}

/// Rotate a ship local offset into a world offset.
pub fn rotate_to_world(offset: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.to_radians().sin_cos();
    Vec2::new(
        offset.x * cos - offset.y * sin,
        -(offset.x * sin + offset.y * cos),
    )
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Ship {
    pub ship_data_id: ShipDataId,
    pub faction: Faction,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Heading in degrees, always in `[0.0, 360.0)`.
    pub angle: f32,
    /// Degrees per tick. Only nonzero for inertial-turn classes.
    pub angular_velocity: f32,
    pub hullpoints: i32,
    pub mobility: Mobility,
    pub cannon: Cannon,
    /// Set during the tick, removed from the registry at end of tick.
    pub destroyed: bool,
}
impl Ship {
    pub fn new(ship_data_id: ShipDataId, faction: Faction, position: Vec2) -> Self {
        let data = ship_data_id.data();
        Self {
            ship_data_id,
            faction,
            position,
            velocity: Vec2::ZERO,
            angle: 0.0,
            angular_velocity: 0.0,
            hullpoints: data.hull.max_hullpoints,
            mobility: data.mobility,
            cannon: Cannon::default(),
            destroyed: false,
        }
    }

    pub fn data(&self) -> ShipData {
        self.ship_data_id.data()
    }

    /// Fixed step position and heading integration plus cooldown aging.
    /// `dt` is in milliseconds and only ages the cooldown.
    pub fn update(&mut self, dt: f32) {
        if self.destroyed {
            return;
        }
        self.position += self.velocity;
        if self.angular_velocity != 0.0 {
            self.angle = (self.angle + self.angular_velocity).rem_euclid(360.0);
        }
        self.cannon.update(dt);
    }

    pub fn is_alive(&self) -> bool {
        !self.destroyed
    }

    pub fn max_hullpoints(&self) -> i32 {
        self.data().hull.max_hullpoints
    }

    /// World positions of the weapon mounts, for fire spawning and
    /// aiming-reticle overlays.
    pub fn hardpoint_world_positions(&self) -> SmallVec<[Vec2; 2]> {
        self.data()
            .hull
            .hardpoints
            .iter()
            .map(|&hardpoint| self.position + rotate_to_world(hardpoint, self.angle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_heading_vector_y_down() {
        let up = heading_vector(90.0);
        assert_abs_diff_eq!(up.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(up.y, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_hardpoints_follow_heading() {
        let mut ship = Ship::new(ShipDataId::Scout, Faction::Player, Vec2::ZERO);
        ship.angle = 90.0;
        let hardpoints = ship.hardpoint_world_positions();
        // The scout's single mount is 14 units ahead of the nose.
        assert_abs_diff_eq!(hardpoints[0].x, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(hardpoints[0].y, -14.0, epsilon = 1e-4);
    }
}
