//! # layerstack-zindex
//!
//! Vertical (z-axis) indexing over chip and photonic device layer stacks.
//!
//! A layer stack describes a vertical cross-section as named slabs, each with
//! a start height, a thickness, and a meshing priority. This crate derives
//! the boundary grid those slabs induce, classifies which layers are present
//! at each boundary, answers point queries ("which layers exist at height
//! z?"), and orders layers for downstream meshing consumers.
//!
//! ## Crate layout
//!
//! - [`stack`]: layer records, the [`LayerStack`](stack::LayerStack)
//!   container, and the read-only [`HasSlabs`](stack::HasSlabs) contract a
//!   host stack type must satisfy.
//! - [`index`]: the derived z-index: boundary grid, membership maps, point
//!   queries, and mesh ordering.
//!
//! Every index result is a pure function of the stack snapshot it is given,
//! recomputed on each call. Nothing is cached, so a stack mutated between
//! calls can never serve stale answers, and concurrent queries over a shared
//! stack are safe by construction.
//!
//! ## Example
//!
//! ```
//! use layerstack_zindex::index::{layers_at_z, list_unique_z};
//! use layerstack_zindex::stack::{LayerStack, Slab};
//!
//! let mut stack = LayerStack::new();
//! stack.insert("box", Slab::new(-3.0, 3.0, 9));
//! stack.insert("core", Slab::new(0.0, 0.22, 1));
//!
//! assert_eq!(list_unique_z(&stack), vec![-3.0, 0.0, 0.22]);
//!
//! let at_core = layers_at_z(&stack, 0.1)?;
//! assert!(at_core.contains("core"));
//! # Ok::<(), layerstack_zindex::index::QueryError>(())
//! ```

pub mod index;
pub mod stack;
