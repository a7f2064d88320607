use tracing::{debug, trace};

use crate::collision::SpatialGrid;
use crate::math::Vec2;
use crate::objects::{BodyId, RigidBody};
use crate::shapes::Shape;

/// Owns the bodies, the spatial index and the id counter, and drives the
/// per-tick sequence: integrate, rebuild the index, enumerate candidate
/// pairs. Resolving those pairs (the narrow phase) is the caller's job.
pub struct World {
    pub bodies: Vec<RigidBody>,
    grid: SpatialGrid,
    next_id: u64,
}

impl World {
    /// `cell_size` is the grid resolution; pick it near the diameter of a
    /// typical body so most AABBs land in a handful of cells.
    pub fn new(cell_size: f64) -> Self {
        debug!(cell_size, "creating world");
        Self {
            bodies: Vec::new(),
            grid: SpatialGrid::new(cell_size),
            next_id: 0,
        }
    }

    /// Adds a body at `position`, issuing the next identity from this
    /// world's counter. Returns the body's index into `bodies`.
    ///
    /// The counter belongs to the world, so two worlds never contend for or
    /// share identities.
    pub fn add_body(&mut self, shape: Shape, position: Vec2) -> usize {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        let index = self.bodies.len();
        self.bodies.push(RigidBody::new(id, shape, position));
        index
    }

    /// The spatial index as of the last `step` (or last manual rebuild),
    /// for point and range queries between ticks.
    pub fn grid(&self) -> &SpatialGrid {
        &self.grid
    }

    /// Advances the simulation by `dt` seconds and returns the candidate
    /// pairs (as indices into `bodies`) for the narrow phase.
    pub fn step(&mut self, dt: f64) -> Vec<(usize, usize)> {
        self.integrate_and_rebuild(dt);
        let mut pairs = Vec::new();
        self.grid.collisions(|a, b| pairs.push((a, b)));
        trace!(
            bodies = self.bodies.len(),
            candidate_pairs = pairs.len(),
            "step complete"
        );
        pairs
    }

    /// Like `step`, but streams each candidate pair to `narrow_phase` as
    /// body references instead of materializing an index list.
    pub fn step_with<F>(&mut self, dt: f64, mut narrow_phase: F)
    where
        F: FnMut(&RigidBody, &RigidBody),
    {
        self.integrate_and_rebuild(dt);
        let bodies = &self.bodies;
        self.grid
            .collisions(|a, b| narrow_phase(&bodies[a], &bodies[b]));
    }

    /// Phases 1 and 2 of a tick: advance every body, refresh its cached
    /// AABB, then repopulate the index from scratch.
    fn integrate_and_rebuild(&mut self, dt: f64) {
        for body in self.bodies.iter_mut() {
            body.update(dt);
            body.update_aabb();
        }
        self.grid.clear();
        for (index, body) in self.bodies.iter().enumerate() {
            self.grid.insert(index, body.id, body.aabb);
        }
    }
}
