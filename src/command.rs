use super::*;

/// Per-tick ship orders from the input layer.
///
/// Commands addressed to an unknown or destroyed ship are ignored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Command {
    Accelerate {
        ship_id: ShipId,
        direction: ThrustDirection,
    },
    AccelerateLateral {
        ship_id: ShipId,
        side: Side,
    },
    Turn {
        ship_id: ShipId,
        side: Side,
    },
    Brake {
        ship_id: ShipId,
    },
    BrakeRotation {
        ship_id: ShipId,
    },
    Fire {
        ship_id: ShipId,
    },
}
