//! 2D rigid-body simulation core: mass properties of convex shapes, damped
//! body integration, and broad-phase collision detection over a uniform
//! spatial hash grid. Narrow-phase resolution and rendering are left to the
//! embedding application.

pub mod collision;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{Aabb, SpatialGrid};
pub use math::Vec2;
pub use objects::{BodyId, RigidBody};
pub use shapes::{Circle, Geometry, Polygon, Shape, ShapeError};
pub use world::World;
