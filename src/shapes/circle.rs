use std::f64::consts::PI;

/// Circle geometry, centered on the owning body's position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    /// Radius validation lives in `Shape::circle`; this just stores geometry.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Closed-form mass and centroidal inertia of a solid disk:
    /// mass = pi * r^2 * density, inertia = mass * r^2 / 2.
    pub fn mass_properties(&self, density: f64) -> (f64, f64) {
        let radius_squared = self.radius * self.radius;
        let mass = PI * radius_squared * density;
        let inertia = 0.5 * mass * radius_squared;
        (mass, inertia)
    }
}
