//! Layer stack types and the read-only contract the z-index consumes.
//!
//! A layer stack describes a vertical cross-section: named slabs, each with a
//! start height, a thickness, and a meshing priority. The index in
//! [`crate::index`] never mutates a stack; it only reads [`Slab`] records
//! through the [`HasSlabs`] trait.

mod layer_stack;
mod slab;

pub use layer_stack::LayerStack;
pub use slab::Slab;

/// Read-only access to a stack's layers.
///
/// The z-index consumes stacks exclusively through this trait: it needs each
/// layer's name and [`Slab`] record, yielded in a stable order the caller can
/// observe. Mesh ordering preserves that order between layers of equal
/// priority.
///
/// [`LayerStack`] is the crate-provided implementor. Host environments with
/// their own stack representation can implement the trait directly instead of
/// converting.
pub trait HasSlabs {
    /// Iterates `(name, slab)` pairs in the stack's native order.
    fn slabs(&self) -> impl Iterator<Item = (&str, &Slab)>;
}
