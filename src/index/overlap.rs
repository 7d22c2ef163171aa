use std::collections::{BTreeMap, BTreeSet};

use crate::stack::HasSlabs;

use super::{BoundaryPolicy, Z, ZGrid, map_unique_z};

/// Inverts the per-layer membership map: for every grid boundary, the set of
/// layers present there.
///
/// Every boundary appears as a key. The sets are rebuilt by walking the grid
/// itself rather than the membership values, so a boundary that no layer
/// claims is still keyed, with an empty set. That case arises under
/// [`BoundaryPolicy::ExcludeUpper`] at the top of the stack.
pub fn layer_overlaps_by_z<'a>(
    stack: &'a impl HasSlabs,
    policy: BoundaryPolicy,
) -> BTreeMap<Z, BTreeSet<&'a str>> {
    let grid = ZGrid::build(stack);
    let memberships = map_unique_z(stack, policy);
    grid.iter()
        .map(|z| {
            let present: BTreeSet<&str> = memberships
                .iter()
                .filter(|(_, zs)| zs.contains(&z))
                .map(|(name, _)| *name)
                .collect();
            (z, present)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::index::test_support::{photonic_stack, stack_of};

    use super::*;

    #[test]
    fn every_boundary_is_keyed() {
        let stack = photonic_stack();
        let overlaps = layer_overlaps_by_z(&stack, BoundaryPolicy::IncludeUpper);
        let grid = ZGrid::build(&stack);
        assert_eq!(overlaps.len(), grid.len());
        assert!(grid.iter().all(|z| overlaps.contains_key(&z)));
    }

    #[test]
    fn inverts_the_membership_map() {
        let stack = photonic_stack();
        for policy in [BoundaryPolicy::IncludeUpper, BoundaryPolicy::ExcludeUpper] {
            let memberships = map_unique_z(&stack, policy);
            let overlaps = layer_overlaps_by_z(&stack, policy);
            for (z, names) in &overlaps {
                for (name, zs) in &memberships {
                    assert_eq!(
                        names.contains(name),
                        zs.contains(z),
                        "layer {name} at z = {z}"
                    );
                }
            }
        }
    }

    #[test]
    fn shared_boundary_reports_both_layers() {
        let stack = stack_of(&[("a", 0.0, 1.0), ("b", 1.0, 2.0)]);
        let overlaps = layer_overlaps_by_z(&stack, BoundaryPolicy::IncludeUpper);
        let at_seam: Vec<_> = overlaps[&Z::new(1.0)].iter().copied().collect();
        assert_eq!(at_seam, vec!["a", "b"]);
    }

    #[test]
    fn upper_open_policy_drops_the_top_boundary() {
        let stack = stack_of(&[("a", 0.0, 1.0), ("b", 1.0, 2.0)]);
        let overlaps = layer_overlaps_by_z(&stack, BoundaryPolicy::ExcludeUpper);
        assert!(!overlaps[&Z::new(1.0)].contains("a"));
        assert!(overlaps[&Z::new(1.0)].contains("b"));
        // Nothing claims the topmost boundary, but it stays keyed.
        assert!(overlaps[&Z::new(3.0)].is_empty());
    }
}
