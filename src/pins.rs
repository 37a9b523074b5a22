//! Fixed-capacity set of pinned point indices.

use alloc::vec::Vec as AllocVec;

/// Which points of a chain are held in place.
///
/// Capacity equals the chain's point count and never changes. Indices outside
/// the capacity are ignored rather than reported.
#[derive(Clone, Debug, PartialEq)]
pub struct PinSet {
    flags: AllocVec<bool>,
    count: usize,
}

impl PinSet {
    /// Empty set for a chain of `capacity` points.
    pub fn new(capacity: usize) -> Self {
        PinSet { flags: alloc::vec![false; capacity], count: 0 }
    }

    /// Set containing `0..min(leading, capacity)`.
    pub fn leading(capacity: usize, leading: usize) -> Self {
        let mut set = PinSet::new(capacity);
        if leading > 0 {
            set.set_range(0, leading - 1);
        }
        set
    }

    /// Replace the set with the inclusive range between `start` and `end`.
    ///
    /// The bounds may come in either order and are clamped to the capacity.
    pub fn set_range(&mut self, start: usize, end: usize) {
        self.clear();
        if self.flags.is_empty() {
            return;
        }
        let last = self.flags.len() - 1;
        let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
        let (lo, hi) = (lo.min(last), hi.min(last));
        for flag in &mut self.flags[lo..=hi] {
            *flag = true;
        }
        self.count = hi - lo + 1;
    }

    /// Pin a single index. Returns false if it was out of range or already pinned.
    pub fn insert(&mut self, index: usize) -> bool {
        match self.flags.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                self.count += 1;
                true
            }
            _ => false,
        }
    }

    /// Unpin a single index. Returns false if it was not pinned.
    pub fn remove(&mut self, index: usize) -> bool {
        match self.flags.get_mut(index) {
            Some(flag) if *flag => {
                *flag = false;
                self.count -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.flags.iter_mut().for_each(|f| *f = false);
        self.count = 0;
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    /// Pinned indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(i, &pinned)| pinned.then_some(i))
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn capacity(&self) -> usize {
        self.flags.len()
    }
}
