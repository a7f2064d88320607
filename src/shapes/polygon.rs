use crate::math::Vec2;

/// Convex polygon geometry in local space. Vertices are stored in the order
/// given; `Shape::polygon` requires a winding that yields positive signed
/// area before one of these is wrapped into a `Shape`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Vec2>,
}

impl Polygon {
    /// Vertex-count and winding validation live in `Shape::polygon`.
    pub fn new(vertices: Vec<Vec2>) -> Self {
        Self { vertices }
    }

    /// Signed area via the shoelace formula. Positive for counter-clockwise
    /// winding, negative for clockwise.
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        let mut cross_sum = 0.0;
        for i in 0..n {
            cross_sum += self.vertices[i].cross(self.vertices[(i + 1) % n]);
        }
        0.5 * cross_sum
    }

    /// Area centroid, from the first-moment shoelace sums. Meaningful only
    /// when the signed area is nonzero.
    pub fn centroid(&self) -> Vec2 {
        let (signed_area, centroid, _) = self.integrate_edges();
        if signed_area == 0.0 {
            return Vec2::ZERO;
        }
        centroid
    }

    /// Mass and centroidal inertia from the standard polygon integrals.
    ///
    /// One pass over the edges (including the wrap-around edge) accumulates
    /// the cross term `xi*yj - xj*yi`, the first moments and the second
    /// moment `(xi^2 + xi*xj + xj^2 + yi^2 + yi*yj + yj^2) * cross`. The
    /// inertia about the origin is then shifted to the centroid with the
    /// parallel-axis theorem.
    ///
    /// Degenerate geometry (zero area) yields zero mass and inertia; the
    /// owning `Shape` maps those to zero inverses, i.e. a fixed body.
    pub fn mass_properties(&self, density: f64) -> (f64, f64) {
        let (signed_area, centroid, second_moment) = self.integrate_edges();
        let mass = density * signed_area;
        if mass <= 0.0 {
            return (0.0, 0.0);
        }
        let inertia_about_origin = density * second_moment / 12.0;
        let inertia = inertia_about_origin - mass * centroid.magnitude_squared();
        (mass, inertia)
    }

    /// Single pass over consecutive edge pairs, wrap-around edge included.
    /// Returns (signed area, centroid, second-moment integral).
    fn integrate_edges(&self) -> (f64, Vec2, f64) {
        let n = self.vertices.len();
        let mut cross_sum = 0.0;
        let mut first_moment_x = 0.0;
        let mut first_moment_y = 0.0;
        let mut second_moment = 0.0;
        for i in 0..n {
            let vi = self.vertices[i];
            let vj = self.vertices[(i + 1) % n];
            let cross = vi.cross(vj);
            cross_sum += cross;
            first_moment_x += (vi.x + vj.x) * cross;
            first_moment_y += (vi.y + vj.y) * cross;
            second_moment += (vi.x * vi.x + vi.x * vj.x + vj.x * vj.x
                + vi.y * vi.y + vi.y * vj.y + vj.y * vj.y)
                * cross;
        }
        let signed_area = 0.5 * cross_sum;
        let centroid = if signed_area == 0.0 {
            Vec2::ZERO
        } else {
            Vec2::new(first_moment_x, first_moment_y) * (1.0 / (6.0 * signed_area))
        };
        (signed_area, centroid, second_moment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-9;

    /// Counter-clockwise axis-aligned square of side `side` centered at `center`.
    fn square(center: Vec2, side: f64) -> Polygon {
        let h = side / 2.0;
        Polygon::new(vec![
            center + Vec2::new(-h, -h),
            center + Vec2::new(h, -h),
            center + Vec2::new(h, h),
            center + Vec2::new(-h, h),
        ])
    }

    #[test]
    fn test_signed_area_square() {
        let polygon = square(Vec2::ZERO, 2.0);
        assert!((polygon.signed_area() - 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_signed_area_clockwise_is_negative() {
        let mut vertices = square(Vec2::ZERO, 1.0).vertices;
        vertices.reverse();
        let polygon = Polygon::new(vertices);
        assert!((polygon.signed_area() + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_centroid_offset_square() {
        let center = Vec2::new(10.0, -5.0);
        let centroid = square(center, 3.0).centroid();
        assert!((centroid.x - center.x).abs() < EPSILON);
        assert!((centroid.y - center.y).abs() < EPSILON);
    }

    #[test]
    fn test_square_mass_and_inertia() {
        // Regression fixture: side s, density d => mass = s^2 * d,
        // centroidal inertia = mass * s^2 / 6.
        let side = 2.0;
        let density = 3.0;
        let (mass, inertia) = square(Vec2::ZERO, side).mass_properties(density);
        assert!((mass - side * side * density).abs() < EPSILON);
        assert!((inertia - mass * side * side / 6.0).abs() < EPSILON);
    }

    #[test]
    fn test_inertia_is_translation_invariant() {
        // Centroidal inertia must not depend on where the vertices sit
        // relative to the local origin (parallel-axis shift).
        let density = 2.0;
        let (_, inertia_centered) = square(Vec2::ZERO, 2.0).mass_properties(density);
        let (_, inertia_offset) = square(Vec2::new(25.0, -13.0), 2.0).mass_properties(density);
        assert_relative_eq!(inertia_centered, inertia_offset, max_relative = 1e-9);
    }

    #[test]
    fn test_regular_polygon_converges_to_disk() {
        // A many-sided regular polygon approximates a disk; mass and inertia
        // must converge to the closed-form circle values.
        let radius = 2.0;
        let density = 1.0;
        let disk_mass = std::f64::consts::PI * radius * radius * density;
        let disk_inertia = 0.5 * disk_mass * radius * radius;

        let mut last_mass_error = f64::INFINITY;
        for sides in [8_usize, 32, 128] {
            let vertices: Vec<Vec2> = (0..sides)
                .map(|i| {
                    let theta = 2.0 * std::f64::consts::PI * i as f64 / sides as f64;
                    Vec2::new(radius * theta.cos(), radius * theta.sin())
                })
                .collect();
            let (mass, inertia) = Polygon::new(vertices).mass_properties(density);
            let mass_error = (mass - disk_mass).abs();
            assert!(mass_error < last_mass_error, "error must shrink with more sides");
            last_mass_error = mass_error;

            if sides == 128 {
                assert_relative_eq!(mass, disk_mass, max_relative = 1e-3);
                assert_relative_eq!(inertia, disk_inertia, max_relative = 1e-2);
            }
        }
    }

    #[test]
    fn test_degenerate_polygon_is_fixed() {
        // Collinear vertices: zero area, zero mass and inertia.
        let polygon = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
        ]);
        let (mass, inertia) = polygon.mass_properties(1.0);
        assert_eq!(mass, 0.0);
        assert_eq!(inertia, 0.0);
    }
}
