//! Shared stack fixtures for z-index tests.

use crate::stack::{LayerStack, Slab};

/// Builds a stack from `(name, zmin, thickness)` triples, assigning mesh
/// orders by position.
pub(crate) fn stack_of(layers: &[(&str, f64, f64)]) -> LayerStack {
    layers
        .iter()
        .enumerate()
        .map(|(i, (name, zmin, thickness))| (*name, Slab::new(*zmin, *thickness, i as i32)))
        .collect()
}

/// A reduced photonic stack: buried oxide, a 220 nm silicon core with its
/// partially etched slab, and top cladding.
pub(crate) fn photonic_stack() -> LayerStack {
    let mut stack = LayerStack::new();
    stack.insert("box", Slab::new(-3.0, 3.0, 9));
    stack.insert("core", Slab::new(0.0, 0.22, 1));
    stack.insert("slab90", Slab::new(0.0, 0.09, 2));
    stack.insert("clad", Slab::new(0.0, 3.0, 10));
    stack
}
