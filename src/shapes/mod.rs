pub mod circle;
pub mod polygon;

pub use circle::Circle;
pub use polygon::Polygon;

use thiserror::Error;

use crate::math::Vec2;

/// Default surface material coefficients, applied to every new shape.
pub const DEFAULT_STATIC_FRICTION: f64 = 0.5;
pub const DEFAULT_DYNAMIC_FRICTION: f64 = 0.3;
pub const DEFAULT_RESTITUTION: f64 = 0.2;

/// Rejected geometry at shape construction. All validation happens here;
/// once a `Shape` exists its mass properties are well defined.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("circle radius must be positive, got {0}")]
    NonPositiveRadius(f64),
    #[error("density must be positive, got {0}")]
    NonPositiveDensity(f64),
    #[error("polygon requires at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("polygon vertices must be wound for positive signed area, got {0}")]
    NonPositiveArea(f64),
}

/// The geometric variants a shape can take. A tagged enum rather than a
/// trait object: `update_weight` dispatches with a plain `match`, which
/// keeps the per-body hot loops free of virtual calls.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Circle(Circle),
    Polygon(Polygon),
}

/// Convex geometry plus the density-derived mass properties and surface
/// coefficients the narrow phase needs.
///
/// Invariant: `inverse_mass == 1/mass` when `mass > 0`, else `0.0` (a fixed,
/// immovable body); `inverse_inertia` follows the identical rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub geometry: Geometry,
    /// Mass per unit area.
    pub density: f64,
    pub mass: f64,
    pub inverse_mass: f64,
    /// Moment of inertia about the shape's centroid.
    pub inertia: f64,
    pub inverse_inertia: f64,
    pub static_friction: f64,
    pub dynamic_friction: f64,
    pub restitution: f64,
}

impl Shape {
    /// Creates a circular shape and computes its mass properties.
    pub fn circle(radius: f64, density: f64) -> Result<Self, ShapeError> {
        if radius <= 0.0 {
            return Err(ShapeError::NonPositiveRadius(radius));
        }
        if density <= 0.0 {
            return Err(ShapeError::NonPositiveDensity(density));
        }
        Ok(Self::from_geometry(Geometry::Circle(Circle::new(radius)), density))
    }

    /// Creates a convex polygon shape and computes its mass properties.
    ///
    /// Vertices must describe a simple convex polygon wound so the signed
    /// area comes out positive (counter-clockwise in the usual y-up
    /// convention). A zero or negative area is rejected, not corrected.
    pub fn polygon(vertices: Vec<Vec2>, density: f64) -> Result<Self, ShapeError> {
        if density <= 0.0 {
            return Err(ShapeError::NonPositiveDensity(density));
        }
        if vertices.len() < 3 {
            return Err(ShapeError::TooFewVertices(vertices.len()));
        }
        let polygon = Polygon::new(vertices);
        let signed_area = polygon.signed_area();
        if signed_area <= 0.0 {
            return Err(ShapeError::NonPositiveArea(signed_area));
        }
        Ok(Self::from_geometry(Geometry::Polygon(polygon), density))
    }

    fn from_geometry(geometry: Geometry, density: f64) -> Self {
        let mut shape = Self {
            geometry,
            density,
            mass: 0.0,
            inverse_mass: 0.0,
            inertia: 0.0,
            inverse_inertia: 0.0,
            static_friction: DEFAULT_STATIC_FRICTION,
            dynamic_friction: DEFAULT_DYNAMIC_FRICTION,
            restitution: DEFAULT_RESTITUTION,
        };
        shape.update_weight();
        shape
    }

    /// Recomputes mass, inertia and their inverses from the current
    /// geometry and density. Call after mutating either.
    ///
    /// A zero mass or inertia yields a zero inverse: the body is treated as
    /// fixed rather than surfacing a division error. The guard applies to
    /// both inverses.
    pub fn update_weight(&mut self) {
        let (mass, inertia) = match &self.geometry {
            Geometry::Circle(circle) => circle.mass_properties(self.density),
            Geometry::Polygon(polygon) => polygon.mass_properties(self.density),
        };
        self.mass = mass;
        self.inverse_mass = if mass > 0.0 { 1.0 / mass } else { 0.0 };
        self.inertia = inertia;
        self.inverse_inertia = if inertia > 0.0 { 1.0 / inertia } else { 0.0 };
    }
}
