use super::*;
use crate::ship::rotate_to_world;

/// Ship local collision shape. Polygons must be convex.
#[derive(Debug, Clone, Copy)]
pub enum HullShape {
    Ball { radius: f32 },
    Polygon { vertices: &'static [Vec2] },
}
impl HullShape {
    /// Radius of the bounding circle the broad phase uses.
    pub fn bounding_radius(&self) -> f32 {
        match self {
            HullShape::Ball { radius } => *radius,
            HullShape::Polygon { vertices } => vertices
                .iter()
                .fold(0.0f32, |radius, v| radius.max(v.length())),
        }
    }

    /// Exact narrow phase test between two placed shapes.
    pub fn overlaps(
        &self,
        position: Vec2,
        angle: f32,
        other: &HullShape,
        other_position: Vec2,
        other_angle: f32,
    ) -> bool {
        match (self, other) {
            (HullShape::Ball { radius }, _) => {
                other.overlaps_circle(other_position, other_angle, position, *radius)
            }
            (HullShape::Polygon { .. }, HullShape::Ball { radius }) => {
                self.overlaps_circle(position, angle, other_position, *radius)
            }
            (
                HullShape::Polygon { vertices },
                HullShape::Polygon {
                    vertices: other_vertices,
                },
            ) => {
                let a = world_vertices(vertices, position, angle);
                let b = world_vertices(other_vertices, other_position, other_angle);
                !has_separating_axis(&a, &b) && !has_separating_axis(&b, &a)
            }
        }
    }

    /// Narrow phase test against a circle (projectiles, hardpoint checks).
    pub fn overlaps_circle(&self, position: Vec2, angle: f32, center: Vec2, radius: f32) -> bool {
        match self {
            HullShape::Ball { radius: own_radius } => {
                position.distance_squared(center) <= (own_radius + radius).powi(2)
            }
            HullShape::Polygon { vertices } => {
                let world = world_vertices(vertices, position, angle);
                if point_in_convex_polygon(center, &world) {
                    return true;
                }
                let radius_squared = radius * radius;
                (0..world.len()).any(|i| {
                    let a = world[i];
                    let b = world[(i + 1) % world.len()];
                    segment_distance_squared(center, a, b) <= radius_squared
                })
            }
        }
    }
}

fn world_vertices(vertices: &[Vec2], position: Vec2, angle: f32) -> SmallVec<[Vec2; 8]> {
    vertices
        .iter()
        .map(|&v| position + rotate_to_world(v, angle))
        .collect()
}

fn project(axis: Vec2, vertices: &[Vec2]) -> (f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &v in vertices {
        let d = axis.dot(v);
        min = min.min(d);
        max = max.max(d);
    }
    (min, max)
}

/// SAT over the edge normals of `a`.
fn has_separating_axis(a: &[Vec2], b: &[Vec2]) -> bool {
    (0..a.len()).any(|i| {
        let axis = (a[(i + 1) % a.len()] - a[i]).perp();
        let (min_a, max_a) = project(axis, a);
        let (min_b, max_b) = project(axis, b);
        max_a < min_b || max_b < min_a
    })
}

fn point_in_convex_polygon(point: Vec2, vertices: &[Vec2]) -> bool {
    let mut sign = 0.0f32;
    for i in 0..vertices.len() {
        let edge = vertices[(i + 1) % vertices.len()] - vertices[i];
        let cross = edge.perp_dot(point - vertices[i]);
        if cross != 0.0 {
            if sign == 0.0 {
                sign = cross.signum();
            } else if sign != cross.signum() {
                return false;
            }
        }
    }
    true
}

fn segment_distance_squared(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let length_squared = ab.length_squared();
    if length_squared == 0.0 {
        return point.distance_squared(a);
    }
    let t = ((point - a).dot(ab) / length_squared).clamp(0.0, 1.0);
    point.distance_squared(a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: &[Vec2] = &[
        Vec2::new(18.0, 0.0),
        Vec2::new(-10.0, 8.0),
        Vec2::new(-10.0, -8.0),
    ];

    #[test]
    fn test_polygon_polygon_overlap() {
        let shape = HullShape::Polygon { vertices: TRIANGLE };
        // Noses 8 units apart, both heading right: the second triangle's
        // tail sits on top of the first one's nose.
        assert!(shape.overlaps(Vec2::ZERO, 0.0, &shape, Vec2::new(20.0, 0.0), 0.0));
        // Far apart.
        assert!(!shape.overlaps(Vec2::ZERO, 0.0, &shape, Vec2::new(60.0, 0.0), 0.0));
    }

    #[test]
    fn test_rotation_matters() {
        let shape = HullShape::Polygon { vertices: TRIANGLE };
        // 30 units apart: only the 18 unit noses can reach across the gap,
        // and only when both point at each other.
        assert!(shape.overlaps(Vec2::ZERO, 0.0, &shape, Vec2::new(30.0, 0.0), 180.0));
        assert!(!shape.overlaps(Vec2::ZERO, 180.0, &shape, Vec2::new(30.0, 0.0), 0.0));
    }

    #[test]
    fn test_circle_polygon() {
        let shape = HullShape::Polygon { vertices: TRIANGLE };
        // Center inside.
        assert!(shape.overlaps_circle(Vec2::ZERO, 0.0, Vec2::new(1.0, 1.0), 2.0));
        // Touching the nose from outside.
        assert!(shape.overlaps_circle(Vec2::ZERO, 0.0, Vec2::new(19.5, 0.0), 2.0));
        // Clear of the hull.
        assert!(!shape.overlaps_circle(Vec2::ZERO, 0.0, Vec2::new(25.0, 0.0), 2.0));
    }

    #[test]
    fn test_ball_ball() {
        let a = HullShape::Ball { radius: 10.0 };
        let b = HullShape::Ball { radius: 5.0 };
        assert!(a.overlaps(Vec2::ZERO, 0.0, &b, Vec2::new(14.0, 0.0), 0.0));
        assert!(!a.overlaps(Vec2::ZERO, 0.0, &b, Vec2::new(16.0, 0.0), 0.0));
    }

    #[test]
    fn test_bounding_radius() {
        assert_eq!(HullShape::Ball { radius: 10.0 }.bounding_radius(), 10.0);
        assert_eq!(
            HullShape::Polygon { vertices: TRIANGLE }.bounding_radius(),
            18.0
        );
    }
}
