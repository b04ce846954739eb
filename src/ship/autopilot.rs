use super::*;

/// What the autopilot saw this tick.
#[derive(Debug, Clone, Copy)]
pub struct Steering {
    pub distance: f32,
    /// 0.0 = heading straight at the target, 1.0 = facing directly away.
    pub alignment: f32,
}

impl Ship {
    /// Proportional pursuit steering. Each call issues at most one turn and
    /// one thrust command toward `target`; within `tolerance` it brakes
    /// instead. Convergence depends entirely on tolerance, turn rate and the
    /// per-tick call cadence, there is no memory of past error.
    pub fn navigate_to_target(&mut self, target: Vec2, tolerance: f32) -> Steering {
        let delta = target - self.position;
        let distance = delta.length();
        if distance < tolerance {
            self.brake();
            return Steering {
                distance,
                alignment: 0.0,
            };
        }

        // Bearing in the same y-down degrees convention as `angle`.
        let target_angle = ((-delta.y).atan2(delta.x).to_degrees() + 180.0).rem_euclid(360.0);
        // 0 = aligned, 180 = directly behind; below 180 the target is on the
        // left, above it on the right.
        let angle_diff = (target_angle - self.angle + 180.0).rem_euclid(360.0);
        if angle_diff > 180.0 {
            self.turn(Side::Right);
        } else if angle_diff < 180.0 {
            self.turn(Side::Left);
        }
        // Exactly 180 is the directly-behind tie: no turn this tick.

        let deviation = 180.0 - (angle_diff - 180.0).abs();
        let alignment = deviation / 180.0;

        if alignment <= 0.5 {
            self.accelerate(ThrustDirection::Forward);
        } else if deviation > 45.0 && deviation < 135.0 {
            // The target sits to one side: strafe toward it. The side
            // threshold is 180, the same midpoint the turn decision uses.
            if angle_diff < 180.0 {
                self.accelerate_lateral(Side::Left);
            } else {
                self.accelerate_lateral(Side::Right);
            }
        }

        Steering {
            distance,
            alignment,
        }
    }
}
