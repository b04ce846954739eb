pub mod collider;
pub mod shape;

use super::*;

impl Simulation {
    /// Per-tick collision sweep. Ship-ship separation runs before any
    /// projectile test so a ship pushed apart this tick is the one
    /// projectiles are tested against.
    pub(crate) fn physics_step(&mut self, events: &mut SimulationEvents) {
        self.apply_world_bounds();
        self.resolve_ship_collisions();
        self.projectile_sweep(events);
    }

    /// One-sided clamp into the world: the position is clamped and any
    /// velocity component still pushing outward is zeroed, no bounce.
    fn apply_world_bounds(&mut self) {
        let width = self.configs.world_width;
        let height = self.configs.world_height;
        for ship in self.ships.values_mut() {
            if ship.destroyed {
                continue;
            }
            if ship.position.x < 0.0 {
                ship.position.x = 0.0;
                ship.velocity.x = ship.velocity.x.max(0.0);
            } else if ship.position.x > width {
                ship.position.x = width;
                ship.velocity.x = ship.velocity.x.min(0.0);
            }
            if ship.position.y < 0.0 {
                ship.position.y = 0.0;
                ship.velocity.y = ship.velocity.y.max(0.0);
            } else if ship.position.y > height {
                ship.position.y = height;
                ship.velocity.y = ship.velocity.y.min(0.0);
            }
        }
    }

    fn resolve_ship_collisions(&mut self) {
        // Broad phase: sweep bounding circles along the y axis.
        let mut candidates: Vec<(usize, Collider)> = self
            .ships
            .values()
            .enumerate()
            .filter(|(_, ship)| !ship.destroyed)
            .map(|(index, ship)| (index, ship.collider()))
            .collect();
        candidates.sort_unstable_by(|(_, a), (_, b)| {
            a.top().partial_cmp(&b.top()).unwrap_or(std::cmp::Ordering::Equal)
        });

        for a in 0..candidates.len() {
            let (index_a, collider_a) = candidates[a];
            for &(index_b, collider_b) in &candidates[a + 1..] {
                if collider_b.top() > collider_a.bot() {
                    break;
                }
                if collider_a.right() < collider_b.left()
                    || collider_b.right() < collider_a.left()
                {
                    continue;
                }
                if !collider_a.intersection_test(collider_b) {
                    continue;
                }
                self.resolve_ship_pair(index_a, index_b);
            }
        }
    }

    /// Soft positional correction: both ships are pushed half the
    /// penetration apart along the line between their centers. Velocity is
    /// untouched, so overlapping ships keep separating a bit every tick.
    fn resolve_ship_pair(&mut self, index_a: usize, index_b: usize) {
        let ship_a = self.ships.get_index(index_a).unwrap().1;
        let ship_b = self.ships.get_index(index_b).unwrap().1;
        if ship_a.destroyed || ship_b.destroyed {
            return;
        }

        let shape_a = ship_a.data().hull.shape;
        let shape_b = ship_b.data().hull.shape;
        if !shape_a.overlaps(
            ship_a.position,
            ship_a.angle,
            &shape_b,
            ship_b.position,
            ship_b.angle,
        ) {
            return;
        }

        let delta = ship_b.position - ship_a.position;
        let mut distance = delta.length();
        let normal = if distance == 0.0 {
            // Coincident centers: push along a random direction instead of
            // dividing by zero.
            distance = 1.0;
            Vec2::new(self.rng.gen_range(-1.0..1.0), self.rng.gen_range(-1.0..1.0))
        } else {
            delta / distance
        };

        let overlap = self.configs.min_ship_separation - distance;
        if overlap > 0.0 {
            let push = normal * (overlap * 0.5);
            self.ships.get_index_mut(index_a).unwrap().1.position -= push;
            self.ships.get_index_mut(index_b).unwrap().1.position += push;
        }
    }

    fn projectile_sweep(&mut self, events: &mut SimulationEvents) {
        let margin = self.configs.projectile_bound_margin;
        let width = self.configs.world_width;
        let height = self.configs.world_height;
        let projectile_count = self.projectiles.len();
        let ship_count = self.ships.len();

        for i in 0..projectile_count {
            let (projectile_id, projectile) = {
                let (id, projectile) = self.projectiles.get_index(i).unwrap();
                (*id, *projectile)
            };
            if projectile.destroyed {
                continue;
            }

            // Lifecycle check before any collision test.
            let position = projectile.position;
            if position.x < -margin
                || position.x > width + margin
                || position.y < -margin
                || position.y > height + margin
            {
                self.projectiles.get_index_mut(i).unwrap().1.destroyed = true;
                events.projectiles_destroyed.push(projectile_id);
                continue;
            }

            // Projectile against ships: first live ship in registry order
            // wins, at most one hit per projectile per tick.
            let mut hit_ship = false;
            for ship_index in 0..ship_count {
                let Some(ship_id) = self.projectile_hit_test(ship_index, &projectile) else {
                    continue;
                };

                let ship = self.ships.get_index_mut(ship_index).unwrap().1;
                ship.hullpoints = (ship.hullpoints - 1).max(0);
                events.projectile_hits.push((projectile_id, ship_id));
                if ship.hullpoints == 0 && !ship.destroyed {
                    ship.destroyed = true;
                    events.ships_destroyed.push(ship_id);
                    log::debug!("{:?} was destroyed by {:?}", ship_id, projectile_id);
                }

                self.projectiles.get_index_mut(i).unwrap().1.destroyed = true;
                events.projectiles_destroyed.push(projectile_id);
                hit_ship = true;
                break;
            }
            if hit_ship {
                continue;
            }

            // Mutual annihilation with projectiles not yet processed.
            for j in (i + 1)..projectile_count {
                let other = *self.projectiles.get_index(j).unwrap().1;
                if other.destroyed {
                    continue;
                }
                if !projectile.collider().intersection_test(other.collider()) {
                    continue;
                }
                let (other_id, other) = self.projectiles.get_index_mut(j).unwrap();
                let other_id = *other_id;
                other.destroyed = true;
                self.projectiles.get_index_mut(i).unwrap().1.destroyed = true;
                events.projectiles_destroyed.push(projectile_id);
                events.projectiles_destroyed.push(other_id);
                break;
            }
        }
    }

    fn projectile_hit_test(&self, ship_index: usize, projectile: &Projectile) -> Option<ShipId> {
        let (ship_id, ship) = self.ships.get_index(ship_index).unwrap();
        if ship.destroyed {
            return None;
        }
        // Broad then narrow phase.
        if !ship.collider().intersection_test(projectile.collider()) {
            return None;
        }
        let shape = ship.data().hull.shape;
        shape
            .overlaps_circle(
                ship.position,
                ship.angle,
                projectile.position,
                Projectile::RADIUS,
            )
            .then_some(*ship_id)
    }

    /// Remove everything flagged destroyed. Runs once at end of tick, never
    /// as a side effect of iteration.
    pub(crate) fn compact(&mut self) {
        self.ships.retain(|_, ship| !ship.destroyed);
        self.projectiles.retain(|_, projectile| !projectile.destroyed);
    }
}
