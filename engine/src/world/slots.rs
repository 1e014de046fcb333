//! Flat Slot Array
//!
//! Unordered storage for world entities with tombstone-then-compact removal.
//! Every query is a linear scan; the board is small enough that no spatial
//! acceleration structure is needed.
//!
//! # Index contract
//!
//! - `push` returns the index of the new entry. Indices stay valid until the
//!   next `compact()` that actually removes something.
//! - `compact()` keeps active entries in their original relative order and
//!   bumps `generation()` when at least one entry was dropped.
//! - Capacity starts at the requested size and at least doubles whenever an
//!   append would overflow.

/// An entry that can be tombstoned and later reclaimed by compaction.
pub trait Slot {
    /// Whether the entry is still present in the world.
    fn is_active(&self) -> bool;

    /// Mark the entry as removed. The slot is reclaimed on the next compaction.
    fn deactivate(&mut self);
}

/// Dense, order-preserving array of [`Slot`] entries.
#[derive(Debug, Clone)]
pub struct SlotArray<T> {
    entries: Vec<T>,
    generation: u32,
}

impl<T: Slot> SlotArray<T> {
    /// Create an empty array with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity.max(1)),
            generation: 0,
        }
    }

    /// Append an entry, doubling capacity if the array is full.
    pub fn push(&mut self, entry: T) -> usize {
        if self.entries.len() == self.entries.capacity() {
            let grow_by = self.entries.capacity().max(1);
            self.entries.reserve_exact(grow_by);
        }
        self.entries.push(entry);
        self.entries.len() - 1
    }

    /// Tombstone the entry at `index`.
    ///
    /// Returns `false` if the index is out of range or already inactive.
    pub fn deactivate(&mut self, index: usize) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) if entry.is_active() => {
                entry.deactivate();
                true
            }
            _ => false,
        }
    }

    /// Drop every inactive entry, keeping survivors in relative order.
    ///
    /// O(n). Returns how many entries were removed.
    pub fn compact(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.is_active());
        let removed = before - self.entries.len();
        if removed > 0 {
            self.generation = self.generation.wrapping_add(1);
        }
        removed
    }

    /// Entry at `index`, active or not.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    /// Mutable entry at `index`, active or not.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.entries.get_mut(index)
    }

    /// Iterate active entries with their indices.
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &T)> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.is_active())
    }

    /// Mutable iteration over active entries.
    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.iter_mut().filter(|entry| entry.is_active())
    }

    /// All stored entries including tombstones.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    /// Number of stored entries including tombstones.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of active entries.
    pub fn active_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_active()).count()
    }

    /// Currently allocated capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Compaction generation; changes whenever indices were invalidated.
    #[inline]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            self.entries.clear();
            self.generation = self.generation.wrapping_add(1);
        }
    }
}
