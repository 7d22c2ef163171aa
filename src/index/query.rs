use std::collections::BTreeSet;

use crate::stack::HasSlabs;

use super::{BoundaryPolicy, QueryError, Z, ZGrid, layer_overlaps_by_z};

/// Returns the layers present at height `z`.
///
/// The query snaps up to the first boundary at or above `z` and returns that
/// boundary's layer set, so `z` is resolved within the half-open band
/// `(previous_boundary, boundary]`. Membership at the boundary uses the
/// default [`BoundaryPolicy::IncludeUpper`], so a layer is reported at its
/// own top boundary.
///
/// # Errors
///
/// - [`QueryError::EmptyStack`] if the stack has no layers.
/// - [`QueryError::BelowMinimum`] or [`QueryError::AboveMaximum`] if `z`
///   lies outside the stack's boundary range. A NaN height always fails
///   here, as it sorts outside any finite range.
/// - [`QueryError::InvariantViolation`] if no boundary matches after the
///   range check passes. This indicates a defect in this crate, not in the
///   caller's input, and is never silently swallowed.
///
/// # Example
///
/// ```
/// use layerstack_zindex::index::layers_at_z;
/// use layerstack_zindex::stack::{LayerStack, Slab};
///
/// let mut stack = LayerStack::new();
/// stack.insert("box", Slab::new(-3.0, 3.0, 9));
/// stack.insert("core", Slab::new(0.0, 0.22, 1));
///
/// let layers = layers_at_z(&stack, -1.0)?;
/// assert!(layers.contains("box"));
/// assert!(layers_at_z(&stack, 7.0).is_err());
/// # Ok::<(), layerstack_zindex::index::QueryError>(())
/// ```
pub fn layers_at_z(stack: &impl HasSlabs, z: f64) -> Result<BTreeSet<&str>, QueryError> {
    let grid = ZGrid::build(stack);
    let (min, max) = grid.bounds().ok_or(QueryError::EmptyStack)?;

    let height = Z::new(z);
    if height < min {
        return Err(QueryError::BelowMinimum {
            z,
            min: min.get(),
            max: max.get(),
        });
    }
    if height > max {
        return Err(QueryError::AboveMaximum {
            z,
            min: min.get(),
            max: max.get(),
        });
    }

    let boundary = grid
        .snap_up(height)
        .ok_or(QueryError::InvariantViolation { z })?;

    let mut overlaps = layer_overlaps_by_z(stack, BoundaryPolicy::IncludeUpper);
    overlaps
        .remove(&boundary)
        .ok_or(QueryError::InvariantViolation { z })
}
