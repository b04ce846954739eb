use super::*;
use anyhow::bail;

/// Which side a ship fights for. Decides color and targeting, not stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Player,
    Enemy,
    Ally,
}
impl Faction {
    pub fn from_name(name: &str) -> anyhow::Result<Self> {
        Ok(match name {
            "player" => Self::Player,
            "enemy" => Self::Enemy,
            "ally" => Self::Ally,
            _ => bail!("unknown faction: {:?}", name),
        })
    }
}

/// Immutable per archetype stats, looked up at ship creation.
#[derive(Debug, Clone, Copy)]
pub struct ShipData {
    pub mobility: Mobility,
    pub hull: HullData,
    pub cannon: CannonData,
}

#[derive(Debug, Clone, Copy)]
pub struct HullData {
    pub max_hullpoints: i32,
    /// Ship local weapon mounts, x along the heading.
    pub hardpoints: &'static [Vec2],
    pub shape: HullShape,
}

#[derive(Debug, Clone, Copy)]
pub struct CannonData {
    /// Minimum time between shots in milliseconds.
    pub shoot_delay: f32,
    /// Muzzle velocity added on top of the ship's own velocity.
    pub projectile_speed: f32,
}

const SCOUT_HARDPOINTS: &[Vec2] = &[Vec2::new(14.0, 0.0)];
const FIGHTER_HARDPOINTS: &[Vec2] = &[Vec2::new(22.0, 4.0), Vec2::new(22.0, -4.0)];
const HEAVY_FIGHTER_HARDPOINTS: &[Vec2] = &[Vec2::new(24.0, 6.0), Vec2::new(24.0, -6.0)];

const FIGHTER_VERTICES: &[Vec2] = &[
    Vec2::new(18.0, 0.0),
    Vec2::new(-10.0, 8.0),
    Vec2::new(-10.0, -8.0),
];
const HEAVY_FIGHTER_VERTICES: &[Vec2] = &[
    Vec2::new(20.0, 0.0),
    Vec2::new(-4.0, 12.0),
    Vec2::new(-14.0, 6.0),
    Vec2::new(-14.0, -6.0),
    Vec2::new(-4.0, -12.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ShipDataId {
    #[default]
    Scout,
    Fighter,
    HeavyFighter,
}
impl ShipDataId {
    pub const fn data(self) -> ShipData {
        match self {
            Self::Scout => ShipData {
                mobility: Mobility {
                    forward_thrust: 0.3,
                    lateral_thrust: 0.25,
                    max_linear_velocity: 6.0,
                    turn_rate: 6.0,
                    turn_policy: TurnPolicy::Instant,
                    mass: 0.5,
                },
                hull: HullData {
                    max_hullpoints: 2,
                    hardpoints: SCOUT_HARDPOINTS,
                    shape: HullShape::Ball { radius: 10.0 },
                },
                cannon: CannonData {
                    shoot_delay: 600.0,
                    projectile_speed: 9.0,
                },
            },
            Self::Fighter => ShipData {
                mobility: Mobility {
                    forward_thrust: 0.25,
                    lateral_thrust: 0.2,
                    max_linear_velocity: 5.0,
                    turn_rate: 4.5,
                    turn_policy: TurnPolicy::Instant,
                    mass: 1.0,
                },
                hull: HullData {
                    max_hullpoints: 4,
                    hardpoints: FIGHTER_HARDPOINTS,
                    shape: HullShape::Polygon {
                        vertices: FIGHTER_VERTICES,
                    },
                },
                cannon: CannonData {
                    shoot_delay: 450.0,
                    projectile_speed: 10.0,
                },
            },
            Self::HeavyFighter => ShipData {
                mobility: Mobility {
                    forward_thrust: 0.2,
                    lateral_thrust: 0.15,
                    max_linear_velocity: 4.0,
                    turn_rate: 3.0,
                    turn_policy: TurnPolicy::Inertial,
                    mass: 2.5,
                },
                hull: HullData {
                    max_hullpoints: 7,
                    hardpoints: HEAVY_FIGHTER_HARDPOINTS,
                    shape: HullShape::Polygon {
                        vertices: HEAVY_FIGHTER_VERTICES,
                    },
                },
                cannon: CannonData {
                    shoot_delay: 300.0,
                    projectile_speed: 11.0,
                },
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Scout => "scout",
            Self::Fighter => "fighter",
            Self::HeavyFighter => "heavy_fighter",
        }
    }

    pub fn from_name(name: &str) -> anyhow::Result<Self> {
        Ok(match name {
            "scout" => Self::Scout,
            "fighter" => Self::Fighter,
            "heavy_fighter" => Self::HeavyFighter,
            _ => bail!("unknown ship class: {:?}", name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The catalog must stay usable in const contexts.
    const SCOUT_DATA: ShipData = ShipDataId::Scout.data();

    #[test]
    fn test_catalog_is_const() {
        assert_eq!(SCOUT_DATA.hull.max_hullpoints, 2);
    }

    #[test]
    fn test_class_names_round_trip() {
        for id in [ShipDataId::Scout, ShipDataId::Fighter, ShipDataId::HeavyFighter] {
            assert_eq!(ShipDataId::from_name(id.name()).unwrap(), id);
        }
        assert!(ShipDataId::from_name("battlecruiser").is_err());
        assert!(Faction::from_name("pirate").is_err());
    }

    #[test]
    fn test_hardpoints_clear_the_hull() {
        // Projectiles spawn at the hardpoints and must not overlap the
        // firing ship's own shape.
        for id in [ShipDataId::Scout, ShipDataId::Fighter, ShipDataId::HeavyFighter] {
            let data = id.data();
            for &hardpoint in data.hull.hardpoints {
                assert!(
                    !data.hull.shape.overlaps_circle(
                        Vec2::ZERO,
                        0.0,
                        hardpoint,
                        Projectile::RADIUS
                    ),
                    "{:?} hardpoint {} is inside its hull",
                    id,
                    hardpoint
                );
            }
        }
    }
}
