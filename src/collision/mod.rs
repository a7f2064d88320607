pub mod aabb;
pub mod spatial_grid;

pub use aabb::Aabb;
pub use spatial_grid::{GridEntry, SpatialGrid};
