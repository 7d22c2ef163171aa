use std::collections::{BTreeMap, BTreeSet};

use crate::stack::{HasSlabs, Slab};

use super::{Z, ZGrid};

/// Whether a layer's upper boundary counts as inside the layer.
///
/// The policy only affects membership at a span's top: under
/// [`ExcludeUpper`](BoundaryPolicy::ExcludeUpper) a layer is absent from its
/// own top boundary, and a zero-thickness layer is absent everywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Closed interval: a layer is present at its own top boundary.
    #[default]
    IncludeUpper,

    /// Half-open interval: the top boundary is excluded.
    ExcludeUpper,
}

/// A layer's vertical extent with its endpoints in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    start: Z,
    end: Z,
}

impl Span {
    /// Sorted extent of a slab.
    ///
    /// A negative thickness is normalized by swapping the endpoints, so
    /// `start <= end` always holds.
    #[must_use]
    pub fn of(slab: &Slab) -> Self {
        let a = Z::new(slab.zmin);
        let b = Z::new(slab.zmax());
        let (start, end) = if b < a { (b, a) } else { (a, b) };
        Self { start, end }
    }

    /// Lower endpoint.
    #[must_use]
    pub fn start(&self) -> Z {
        self.start
    }

    /// Upper endpoint.
    #[must_use]
    pub fn end(&self) -> Z {
        self.end
    }

    /// Membership of `z` under the given boundary policy.
    #[must_use]
    pub fn contains(&self, z: Z, policy: BoundaryPolicy) -> bool {
        match policy {
            BoundaryPolicy::IncludeUpper => self.start <= z && z <= self.end,
            BoundaryPolicy::ExcludeUpper => self.start <= z && z < self.end,
        }
    }
}

/// Maps each layer to the grid boundaries lying inside its span.
///
/// The grid is rebuilt from the full stack, so a layer's membership set can
/// include boundaries contributed by other layers. Always succeeds; an empty
/// stack yields an empty map.
pub fn map_unique_z<'a>(
    stack: &'a impl HasSlabs,
    policy: BoundaryPolicy,
) -> BTreeMap<&'a str, BTreeSet<Z>> {
    let grid = ZGrid::build(stack);
    stack
        .slabs()
        .map(|(name, slab)| {
            let span = Span::of(slab);
            let members = grid.iter().filter(|z| span.contains(*z, policy)).collect();
            (name, members)
        })
        .collect()
}
