mod apply_commands;

use super::*;

impl Simulation {
    pub(crate) fn _step(&mut self, dt: f32, cmds: &[Command]) -> SimulationEvents {
        let mut events = SimulationEvents::default();

        self.apply_commands(cmds, &mut events);
        self.enemy_ai(&mut events);

        for ship in self.ships.values_mut() {
            ship.update(dt);
        }
        for projectile in self.projectiles.values_mut() {
            if !projectile.destroyed {
                projectile.update();
            }
        }

        self.physics_step(&mut events);
        self.compact();

        self.tick += 1;
        events
    }

    /// Every live enemy pursues the player and fires when close and roughly
    /// lined up. Does nothing when no live player exists.
    fn enemy_ai(&mut self, events: &mut SimulationEvents) {
        let Some(target) = self
            .ships
            .values()
            .find(|ship| ship.faction == Faction::Player && !ship.destroyed)
            .map(|ship| ship.position)
        else {
            return;
        };

        let tolerance = self.configs.autopilot_tolerance;
        let fire_range = self.configs.enemy_fire_range;
        let fire_alignment = self.configs.enemy_fire_alignment;

        let mut spawned: SmallVec<[Projectile; 8]> = SmallVec::new();
        for ship in self.ships.values_mut() {
            if ship.destroyed || ship.faction != Faction::Enemy {
                continue;
            }
            let steering = ship.navigate_to_target(target, tolerance);
            if steering.distance < fire_range && steering.alignment <= fire_alignment {
                spawned.extend(ship.fire());
            }
        }
        for projectile in spawned {
            let projectile_id = self.register_projectile(projectile);
            events.projectiles_spawned.push(projectile_id);
        }
    }
}
