use crate::stack::HasSlabs;

/// Returns layer names ascending by `mesh_order`.
///
/// The sort is stable: layers with equal priority keep the stack's native
/// iteration order. An empty stack yields an empty list.
///
/// # Example
///
/// ```
/// use layerstack_zindex::index::order_by_mesh_priority;
/// use layerstack_zindex::stack::{LayerStack, Slab};
///
/// let mut stack = LayerStack::new();
/// stack.insert("clad", Slab::new(0.0, 3.0, 10));
/// stack.insert("core", Slab::new(0.0, 0.22, 1));
///
/// assert_eq!(order_by_mesh_priority(&stack), vec!["core", "clad"]);
/// ```
pub fn order_by_mesh_priority(stack: &impl HasSlabs) -> Vec<&str> {
    let mut layers: Vec<(&str, i32)> = stack
        .slabs()
        .map(|(name, slab)| (name, slab.mesh_order))
        .collect();
    layers.sort_by_key(|(_, order)| *order);
    layers.into_iter().map(|(name, _)| name).collect()
}
