// Uniform spatial hash grid for broad-phase collision detection.

use std::collections::{HashMap, HashSet};

use crate::collision::Aabb;
use crate::objects::BodyId;

/// One non-owning record in a grid cell: the body's index into the driver's
/// arena, its identity, and a snapshot of its AABB. Entries are valid only
/// for the tick in which they were inserted; the grid is rebuilt from
/// scratch every tick.
#[derive(Debug, Clone, Copy)]
pub struct GridEntry {
    pub body: usize,
    pub id: BodyId,
    pub aabb: Aabb,
}

/// A uniform grid hashing bodies into buckets by AABB.
///
/// Unlike a bounded-array grid, the cell map is sparse and unbounded: any
/// signed 32-bit cell coordinate hashes to its own bucket, so the world
/// needs no preconfigured extent.
#[derive(Debug)]
pub struct SpatialGrid {
    cell_size: f64,
    inv_cell_size: f64,
    cells: HashMap<u64, Vec<GridEntry>>,
}

/// Packs two signed 32-bit cell coordinates into one 64-bit key.
///
/// Each axis keeps its full 32 bits, so the packing is collision-free over
/// the whole supported coordinate range, negatives included. Narrower
/// bit-fields (e.g. 16 bits for one axis) alias distinct cells once
/// coordinates grow or go negative, which silently corrupts buckets.
fn cell_key(cell_x: i32, cell_y: i32) -> u64 {
    ((cell_x as u32 as u64) << 32) | (cell_y as u32 as u64)
}

impl SpatialGrid {
    pub fn new(cell_size: f64) -> Self {
        assert!(cell_size > 0.0, "cell size must be positive");
        Self {
            cell_size,
            inv_cell_size: 1.0 / cell_size,
            cells: HashMap::new(),
        }
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Cell coordinates of a world-space point. Coordinates beyond the i32
    /// cell range saturate; the supported world spans +/- 2^31 cells.
    fn cell_coords(&self, x: f64, y: f64) -> (i32, i32) {
        (
            (x * self.inv_cell_size).floor() as i32,
            (y * self.inv_cell_size).floor() as i32,
        )
    }

    /// The inclusive rectangle of cells an AABB covers.
    fn cell_range(&self, aabb: &Aabb) -> (i32, i32, i32, i32) {
        let (min_x, min_y) = self.cell_coords(aabb.min.x, aabb.min.y);
        let (max_x, max_y) = self.cell_coords(aabb.max.x, aabb.max.y);
        (min_x, min_y, max_x, max_y)
    }

    /// Inserts a body into every cell its AABB covers.
    ///
    /// Single-cell, single-row and full-rectangle AABBs are all the same
    /// nested range walk; the degenerate ranges just collapse to one
    /// iteration.
    pub fn insert(&mut self, body: usize, id: BodyId, aabb: Aabb) {
        let (min_x, min_y, max_x, max_y) = self.cell_range(&aabb);
        for cell_y in min_y..=max_y {
            for cell_x in min_x..=max_x {
                self.cells
                    .entry(cell_key(cell_x, cell_y))
                    .or_default()
                    .push(GridEntry { body, id, aabb });
            }
        }
    }

    /// Returns the bodies whose AABB overlaps the given rectangle, each at
    /// most once even when it straddles several of the visited cells.
    pub fn query(&self, region: &Aabb) -> Vec<usize> {
        let (min_x, min_y, max_x, max_y) = self.cell_range(region);
        let mut seen: HashSet<BodyId> = HashSet::new();
        let mut hits = Vec::new();
        for cell_y in min_y..=max_y {
            for cell_x in min_x..=max_x {
                let Some(bucket) = self.cells.get(&cell_key(cell_x, cell_y)) else {
                    continue;
                };
                for entry in bucket {
                    if entry.aabb.overlaps(region) && seen.insert(entry.id) {
                        hits.push(entry.body);
                    }
                }
            }
        }
        hits
    }

    /// Returns the bodies whose AABB contains the point. The cell lookup is
    /// the coarse filter; the AABB containment test is the exact one.
    pub fn query_point(&self, x: f64, y: f64) -> Vec<usize> {
        let (cell_x, cell_y) = self.cell_coords(x, y);
        let Some(bucket) = self.cells.get(&cell_key(cell_x, cell_y)) else {
            return Vec::new();
        };
        bucket
            .iter()
            .filter(|entry| entry.aabb.contains_point(x, y))
            .map(|entry| entry.body)
            .collect()
    }

    /// Invokes `callback` exactly once per unordered pair of bodies with
    /// overlapping AABBs.
    ///
    /// Pairs are found cell by cell; a pair sharing several cells would be
    /// found once per shared cell, so a seen-pairs set keyed on the ordered
    /// id pair suppresses the repeats.
    pub fn collisions<F>(&self, mut callback: F)
    where
        F: FnMut(usize, usize),
    {
        let mut seen: HashSet<(BodyId, BodyId)> = HashSet::new();
        for bucket in self.cells.values() {
            if bucket.len() < 2 {
                continue;
            }
            for i in 0..bucket.len() {
                let a = &bucket[i];
                for b in &bucket[i + 1..] {
                    if !a.aabb.overlaps(&b.aabb) {
                        continue;
                    }
                    let pair = if a.id < b.id { (a.id, b.id) } else { (b.id, a.id) };
                    if seen.insert(pair) {
                        callback(a.body, b.body);
                    }
                }
            }
        }
    }

    /// Drops every cell. Call before each tick's repopulation so stale
    /// entries from the previous tick never leak into a query.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Number of occupied cells. Diagnostic; a body spanning several cells
    /// counts each of them.
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }
}
