//! Vertical (z-axis) indexing over a layer stack.
//!
//! Every operation here is a pure function of a stack snapshot, recomputed on
//! each call. Data flows one way through the components:
//!
//! 1. [`ZGrid`] collects the distinct boundary heights induced by all slabs.
//! 2. [`map_unique_z`] classifies, per layer, which boundaries fall inside
//!    its span under a [`BoundaryPolicy`].
//! 3. [`layer_overlaps_by_z`] inverts that classification into a
//!    boundary → layers lookup.
//! 4. [`layers_at_z`] answers range-validated point queries against the
//!    lookup.
//!
//! [`order_by_mesh_priority`] stands apart: it reads the raw stack and orders
//! layers by meshing priority.
//!
//! Boundary heights are compared bitwise through [`Z`]; no epsilon merging is
//! applied anywhere (see [`Z`] for the consequences).

mod error;
mod order;
mod overlap;
mod query;
mod span;
mod z;
mod zgrid;

#[cfg(test)]
mod test_support;

pub use error::QueryError;
pub use order::order_by_mesh_priority;
pub use overlap::layer_overlaps_by_z;
pub use query::layers_at_z;
pub use span::{BoundaryPolicy, Span, map_unique_z};
pub use z::Z;
pub use zgrid::{ZGrid, list_unique_z};
