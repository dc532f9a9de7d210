//! Fixed-capacity obstacle pool
//!
//! Obstacles are preallocated slots, either free or occupied. The pool owns
//! them exclusively; nothing outside the sim holds references across ticks.
//! Iteration is in index order, which carries no gameplay meaning but keeps
//! runs reproducible.

use glam::Vec3;

/// A single obstacle slot. `pos.x` is the lane, `pos.y` the height, `pos.z`
/// the world scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub pos: Vec3,
    pub active: bool,
}

impl Obstacle {
    fn free() -> Self {
        Self {
            pos: Vec3::ZERO,
            active: false,
        }
    }
}

/// Fixed-capacity collection of obstacle slots with first-fit allocation.
#[derive(Debug, Clone)]
pub struct ObstaclePool {
    slots: Vec<Obstacle>,
}

impl ObstaclePool {
    /// Create a pool of `capacity` free slots
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![Obstacle::free(); capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Find the first free slot by index and mark it active.
    /// Returns `None` when every slot is occupied.
    pub fn allocate(&mut self) -> Option<usize> {
        let idx = self.slots.iter().position(|o| !o.active)?;
        self.slots[idx].active = true;
        Some(idx)
    }

    /// Mark a slot free again
    pub fn recycle(&mut self, idx: usize) {
        self.slots[idx] = Obstacle::free();
    }

    /// Allocate a slot and fully initialize it at the given position.
    /// Returns false (a silent no-op for callers) when the pool is full.
    pub fn spawn_at(&mut self, x: f32, y: f32, z: f32) -> bool {
        match self.allocate() {
            Some(idx) => {
                self.slots[idx].pos = Vec3::new(x, y, z);
                true
            }
            None => false,
        }
    }

    /// All active slots with their indices, in index order
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &Obstacle)> {
        self.slots.iter().enumerate().filter(|(_, o)| o.active)
    }

    /// Apply a read/mutate callback to every active slot, in index order
    pub fn for_each_active(&mut self, mut f: impl FnMut(usize, &mut Obstacle)) {
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            if slot.active {
                f(idx, slot);
            }
        }
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|o| o.active).count()
    }

    /// Recycle every active slot strictly behind the given z position.
    /// Returns the number of slots freed.
    pub fn recycle_behind(&mut self, z: f32) -> usize {
        let mut freed = 0;
        for idx in 0..self.slots.len() {
            if self.slots[idx].active && self.slots[idx].pos.z < z {
                self.recycle(idx);
                freed += 1;
            }
        }
        freed
    }
}
