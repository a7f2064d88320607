use crate::collision::Aabb;
use crate::math::Vec2;
use crate::shapes::{Geometry, Shape};

/// Default damping coefficients applied to new bodies.
pub const DEFAULT_LINEAR_DAMPING: f64 = 0.05;
pub const DEFAULT_ANGULAR_DAMPING: f64 = 0.1;

/// Identity of a body, unique and monotonically increasing within the
/// `World` that issued it. The counter lives on the world, not in a global,
/// so independent simulations never share state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(pub u64);

/// A rigid body: one exclusively-owned `Shape` plus its world-space pose and
/// velocities, and the cached AABB the spatial index reads.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    pub id: BodyId,
    pub shape: Shape,
    pub position: Vec2,
    /// Orientation in radians.
    pub angle: f64,
    pub velocity: Vec2,
    pub angular_velocity: f64,
    pub linear_damping: f64,
    pub angular_damping: f64,
    /// Bounds of the shape at the current pose. The index's sole view of
    /// this body; refresh with `update_aabb` after any pose change and
    /// before the index is rebuilt.
    pub aabb: Aabb,
}

impl RigidBody {
    /// Creates a body at `position` with zero velocity and the default
    /// damping coefficients. Ids come from `World::add_body`; construct
    /// directly only when managing identities yourself.
    pub fn new(id: BodyId, shape: Shape, position: Vec2) -> Self {
        let mut body = Self {
            id,
            shape,
            position,
            angle: 0.0,
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            linear_damping: DEFAULT_LINEAR_DAMPING,
            angular_damping: DEFAULT_ANGULAR_DAMPING,
            aabb: Aabb::new(position, position),
        };
        body.update_aabb();
        body
    }

    /// Advances the body by `dt` seconds.
    ///
    /// Damping is the continuous-decay form `v *= exp(-damping * dt)`, not a
    /// linear Euler decay: it is stable for any dt >= 0 and shrinks the
    /// velocity toward zero without ever flipping its sign. Each position
    /// axis integrates from its own already-damped velocity component.
    ///
    /// Negative `dt` is unsupported caller error.
    pub fn update(&mut self, dt: f64) {
        let linear_decay = (-self.linear_damping * dt).exp();
        self.velocity *= linear_decay;
        self.position += self.velocity * dt;

        let angular_decay = (-self.angular_damping * dt).exp();
        self.angular_velocity *= angular_decay;
        self.angle += self.angular_velocity * dt;
    }

    /// Recomputes the cached AABB from the shape at the current pose.
    pub fn update_aabb(&mut self) {
        self.aabb = match &self.shape.geometry {
            Geometry::Circle(circle) => {
                // Rotation-invariant: position +/- radius on both axes.
                let extent = Vec2::new(circle.radius, circle.radius);
                Aabb::new(self.position - extent, self.position + extent)
            }
            Geometry::Polygon(polygon) => {
                let mut vertices = polygon.vertices.iter();
                // Shape::polygon guarantees at least 3 vertices.
                let first = self.position + vertices.next().copied().unwrap_or(Vec2::ZERO).rotate(self.angle);
                let mut min = first;
                let mut max = first;
                for &vertex in vertices {
                    let world = self.position + vertex.rotate(self.angle);
                    min.x = min.x.min(world.x);
                    min.y = min.y.min(world.y);
                    max.x = max.x.max(world.x);
                    max.y = max.y.max(world.y);
                }
                Aabb::new(min, max)
            }
        };
    }
}
