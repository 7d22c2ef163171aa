use std::collections::BTreeSet;

use crate::stack::HasSlabs;

use super::Z;

/// The canonical sorted set of layer boundaries for a stack.
///
/// Holds every distinct `zmin` and `zmin + thickness` across all slabs, in
/// strictly increasing order, so at most `2 × layer count` entries. A grid is
/// cheap to rebuild and is recomputed fresh for every operation; nothing in
/// this crate caches one across calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZGrid(Vec<Z>);

impl ZGrid {
    /// Collects the stack's boundaries into a grid.
    ///
    /// Duplicate heights collapse under bitwise equality. An empty stack
    /// yields an empty grid.
    #[must_use]
    pub fn build(stack: &impl HasSlabs) -> Self {
        let boundaries: BTreeSet<Z> = stack
            .slabs()
            .flat_map(|(_, slab)| [Z::new(slab.zmin), Z::new(slab.zmax())])
            .collect();
        Self(boundaries.into_iter().collect())
    }

    /// Number of distinct boundaries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the stack contributed no boundaries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowest and highest boundary, or `None` for an empty grid.
    #[must_use]
    pub fn bounds(&self) -> Option<(Z, Z)> {
        Some((*self.0.first()?, *self.0.last()?))
    }

    /// First boundary at or above `z`.
    ///
    /// Returns `None` if `z` lies above every boundary, or the grid is
    /// empty. Binary search; the grid is already sorted.
    #[must_use]
    pub fn snap_up(&self, z: Z) -> Option<Z> {
        let idx = self.0.partition_point(|boundary| *boundary < z);
        self.0.get(idx).copied()
    }

    /// Boundaries in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Z> + '_ {
        self.0.iter().copied()
    }

    /// The boundaries as a sorted slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Z] {
        &self.0
    }
}

/// Lists all distinct boundary z-coordinates in the stack, ascending.
///
/// Every `zmin` and every `zmin + thickness` appears exactly once. An empty
/// stack yields an empty list.
pub fn list_unique_z(stack: &impl HasSlabs) -> Vec<f64> {
    ZGrid::build(stack).iter().map(Z::get).collect()
}
