use super::*;

impl Simulation {
    pub(crate) fn apply_commands(&mut self, cmds: &[Command], events: &mut SimulationEvents) {
        for cmd in cmds {
            match *cmd {
                Command::Accelerate { ship_id, direction } => {
                    if let Some(ship) = self.ship_mut(ship_id) {
                        ship.accelerate(direction);
                    }
                }
                Command::AccelerateLateral { ship_id, side } => {
                    if let Some(ship) = self.ship_mut(ship_id) {
                        ship.accelerate_lateral(side);
                    }
                }
                Command::Turn { ship_id, side } => {
                    if let Some(ship) = self.ship_mut(ship_id) {
                        ship.turn(side);
                    }
                }
                Command::Brake { ship_id } => {
                    if let Some(ship) = self.ship_mut(ship_id) {
                        ship.brake();
                    }
                }
                Command::BrakeRotation { ship_id } => {
                    if let Some(ship) = self.ship_mut(ship_id) {
                        ship.brake_rotation();
                    }
                }
                Command::Fire { ship_id } => {
                    let Some(ship) = self.ship_mut(ship_id) else {
                        continue;
                    };
                    let projectiles = ship.fire();
                    for projectile in projectiles {
                        let projectile_id = self.register_projectile(projectile);
                        events.projectiles_spawned.push(projectile_id);
                    }
                }
            }
        }
    }

    /// Commands to unknown or destroyed ships are ignored, not an error.
    fn ship_mut(&mut self, ship_id: ShipId) -> Option<&mut Ship> {
        match self.ships.get_mut(&ship_id) {
            Some(ship) => Some(ship),
            None => {
                log::warn!("{:?} does not exist. Ignoring command", ship_id);
                None
            }
        }
    }
}
