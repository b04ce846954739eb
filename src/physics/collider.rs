use super::*;

/// Bounding circle of an entity for the broad phase. The sweep sorts on
/// `top` and prunes against the other three edges before any narrow test.
#[derive(Debug, Clone, Copy)]
pub struct Collider {
    pub radius: f32,
    pub position: Vec2,
}
impl Collider {
    pub fn top(self) -> f32 {
        self.position.y - self.radius
    }

    pub fn bot(self) -> f32 {
        self.position.y + self.radius
    }

    pub fn right(self) -> f32 {
        self.position.x + self.radius
    }

    pub fn left(self) -> f32 {
        self.position.x - self.radius
    }

    /// Circle-circle overlap, touching counts.
    pub fn intersection_test(self, other: Collider) -> bool {
        let reach = self.radius + other.radius;
        self.position.distance_squared(other.position) <= reach * reach
    }
}

impl Ship {
    pub fn collider(&self) -> Collider {
        Collider {
            radius: self.data().hull.shape.bounding_radius(),
            position: self.position,
        }
    }
}
