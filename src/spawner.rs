use super::*;
use anyhow::{bail, Context};

/// Which ship classes a difficulty level may spawn.
fn difficulty_pool(difficulty: u8) -> anyhow::Result<&'static [ShipDataId]> {
    Ok(match difficulty {
        1 => &[ShipDataId::Scout],
        2 => &[ShipDataId::Scout, ShipDataId::Fighter],
        3 => &[
            ShipDataId::Scout,
            ShipDataId::Fighter,
            ShipDataId::HeavyFighter,
        ],
        4 => &[ShipDataId::Fighter, ShipDataId::HeavyFighter],
        5 => &[ShipDataId::HeavyFighter],
        _ => bail!("unknown difficulty level: {}", difficulty),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    /// No live enemy remains.
    Victory,
    /// No live player remains.
    Defeat,
}

impl Simulation {
    /// Spawn `num_enemies` ships of classes drawn from the difficulty pool,
    /// each at least `min_distance` from `reference`. Position sampling is
    /// bounded; an unsatisfiable constraint is a configuration error, not an
    /// infinite loop.
    pub fn spawn_enemies(
        &mut self,
        num_enemies: usize,
        difficulty: u8,
        reference: Vec2,
        min_distance: f32,
    ) -> anyhow::Result<Vec<ShipId>> {
        let pool = difficulty_pool(difficulty)?;

        let mut spawned = Vec::with_capacity(num_enemies);
        for _ in 0..num_enemies {
            let position = self
                .sample_spawn_position(reference, min_distance)
                .context("cannot satisfy minimum spawn distance in given world size")?;
            let ship_data_id = *pool.choose(&mut self.rng).unwrap();
            spawned.push(self.spawn_ship(ship_data_id, Faction::Enemy, position));
        }
        Ok(spawned)
    }

    fn sample_spawn_position(&mut self, reference: Vec2, min_distance: f32) -> Option<Vec2> {
        for _ in 0..self.configs.max_spawn_attempts {
            let candidate = Vec2::new(
                self.rng.gen_range(0.0..=self.configs.world_width),
                self.rng.gen_range(0.0..=self.configs.world_height),
            );
            if candidate.distance(reference) >= min_distance {
                return Some(candidate);
            }
        }
        None
    }

    /// Start a fresh encounter: clear all entities, spawn the player and a
    /// wave of enemies. Returns the player's id.
    pub fn setup_game(
        &mut self,
        player_position: Vec2,
        num_enemies: usize,
        difficulty: u8,
    ) -> anyhow::Result<ShipId> {
        self.ships.clear();
        self.projectiles.clear();

        let player_id = self.spawn_ship(ShipDataId::HeavyFighter, Faction::Player, player_position);
        let min_distance = self.configs.min_spawn_distance;
        self.spawn_enemies(num_enemies, difficulty, player_position, min_distance)?;
        log::debug!(
            "Set up difficulty {} encounter with {} enemies",
            difficulty,
            num_enemies
        );
        Ok(player_id)
    }

    pub fn status(&self) -> GameStatus {
        let player_alive = self
            .ships
            .values()
            .any(|ship| ship.faction == Faction::Player && !ship.destroyed);
        if !player_alive {
            return GameStatus::Defeat;
        }
        let enemy_alive = self
            .ships
            .values()
            .any(|ship| ship.faction == Faction::Enemy && !ship.destroyed);
        if !enemy_alive {
            return GameStatus::Victory;
        }
        GameStatus::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_respects_min_distance() {
        let mut sim = Simulation::new(42, Default::default());
        let reference = Vec2::new(2000.0, 2000.0);
        let spawned = sim.spawn_enemies(20, 3, reference, 300.0).unwrap();
        assert_eq!(spawned.len(), 20);
        for ship_id in spawned {
            let ship = &sim.ships[&ship_id];
            assert!(ship.position.distance(reference) >= 300.0);
            assert_eq!(ship.faction, Faction::Enemy);
        }
    }

    #[test]
    fn test_difficulty_pools() {
        let mut sim = Simulation::new(7, Default::default());
        let spawned = sim
            .spawn_enemies(30, 1, Vec2::new(2000.0, 2000.0), 300.0)
            .unwrap();
        for ship_id in spawned {
            assert_eq!(sim.ships[&ship_id].ship_data_id, ShipDataId::Scout);
        }
        assert!(sim.spawn_enemies(1, 0, Vec2::ZERO, 0.0).is_err());
        assert!(sim.spawn_enemies(1, 6, Vec2::ZERO, 0.0).is_err());
    }

    #[test]
    fn test_unsatisfiable_spawn_distance_fails() {
        // No point of a 4000x4000 world is 10000 away from its center.
        let mut sim = Simulation::new(7, Default::default());
        let result = sim.spawn_enemies(1, 1, Vec2::new(2000.0, 2000.0), 10_000.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_setup_game_and_status() {
        let mut sim = Simulation::new(7, Default::default());
        let player_id = sim
            .setup_game(Vec2::new(2000.0, 2000.0), 5, 2)
            .unwrap();
        assert_eq!(sim.ships.len(), 6);
        assert_eq!(sim.status(), GameStatus::Running);

        // Wiping the enemies is a victory.
        sim.ships
            .retain(|id, ship| *id == player_id || ship.faction != Faction::Enemy);
        assert_eq!(sim.status(), GameStatus::Victory);

        // No player is a defeat, checked before victory.
        sim.ships.clear();
        assert_eq!(sim.status(), GameStatus::Defeat);
    }
}
