use crate::math::Vec2;

/// An axis-aligned bounding box defined by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Creates an AABB, swapping coordinates per axis so min <= max holds.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self {
            min: Vec2::new(min.x.min(max.x), min.y.min(max.y)),
            max: Vec2::new(min.x.max(max.x), min.y.max(max.y)),
        }
    }

    /// Inclusive overlap test: boxes that merely touch along an edge or
    /// corner count as overlapping, so the broad phase never drops a
    /// grazing contact.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Inclusive point containment.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min.x && x <= self.max.x && y >= self.min.y && y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_corners() {
        let aabb = Aabb::new(Vec2::new(2.0, -1.0), Vec2::new(-2.0, 1.0));
        assert_eq!(aabb.min, Vec2::new(-2.0, -1.0));
        assert_eq!(aabb.max, Vec2::new(2.0, 1.0));
    }

    #[test]
    fn test_overlaps() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0));
        let b = Aabb::new(Vec2::new(1.0, 1.0), Vec2::new(3.0, 3.0));
        let c = Aabb::new(Vec2::new(5.0, 5.0), Vec2::new(6.0, 6.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_touching_edges_count_as_overlap() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        let b = Aabb::new(Vec2::new(1.0, 0.0), Vec2::new(2.0, 1.0));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_contains_point() {
        let aabb = Aabb::new(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0));
        assert!(aabb.contains_point(0.0, 0.0));
        assert!(aabb.contains_point(1.0, -1.0)); // boundary is inclusive
        assert!(!aabb.contains_point(1.1, 0.0));
    }
}
