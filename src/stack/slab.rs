/// A single material layer: a named vertical interval within a stack.
///
/// The interval runs from `zmin` to `zmin + thickness`. No sign is assumed
/// for `thickness`; consumers sort the endpoint pair, so an inverted slab
/// describes the same extent as its upright counterpart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slab {
    /// Vertical start position of the layer.
    pub zmin: f64,

    /// Vertical extent above (or, if negative, below) `zmin`.
    pub thickness: f64,

    /// Meshing priority: lower values mesh first.
    pub mesh_order: i32,
}

impl Slab {
    /// Creates a slab record.
    #[must_use]
    pub fn new(zmin: f64, thickness: f64, mesh_order: i32) -> Self {
        Self {
            zmin,
            thickness,
            mesh_order,
        }
    }

    /// The layer's far boundary, `zmin + thickness`.
    ///
    /// Computed in floating arithmetic, so it may differ from a neighboring
    /// layer's `zmin` by a rounding error even when the two are nominally
    /// equal.
    #[must_use]
    pub fn zmax(&self) -> f64 {
        self.zmin + self.thickness
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zmax_is_offset_by_thickness() {
        assert_eq!(Slab::new(1.0, 0.5, 0).zmax(), 1.5);
        assert_eq!(Slab::new(1.0, -0.5, 0).zmax(), 0.5);
    }
}
