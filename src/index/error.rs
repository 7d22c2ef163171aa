use thiserror::Error;

/// Errors from point queries over a layer stack.
///
/// Queries are deterministic, so a failed call fails identically on retry;
/// callers wanting to avoid errors in a hot path can validate against
/// [`list_unique_z`](super::list_unique_z) bounds first.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum QueryError {
    /// The stack has no layers, so its z-range is undefined.
    #[error("layer stack has no layers")]
    EmptyStack,

    /// The query height lies below the lowest boundary in the stack.
    #[error("z = {z} is below the layer stack minimum (valid range [{min}, {max}])")]
    BelowMinimum {
        /// The offending query height.
        z: f64,
        /// Lowest boundary in the stack.
        min: f64,
        /// Highest boundary in the stack.
        max: f64,
    },

    /// The query height lies above the highest boundary in the stack.
    #[error("z = {z} is above the layer stack maximum (valid range [{min}, {max}])")]
    AboveMaximum {
        /// The offending query height.
        z: f64,
        /// Lowest boundary in the stack.
        min: f64,
        /// Highest boundary in the stack.
        max: f64,
    },

    /// No boundary matched a height that passed the range check.
    ///
    /// Unreachable by construction: once a height is range-checked, the
    /// boundary search always lands on a valid entry. Surfacing it as an
    /// error rather than a panic means a future logic defect propagates to
    /// the caller instead of being masked.
    #[error("no boundary at or above z = {z} despite passing the range check")]
    InvariantViolation {
        /// The query height that exposed the defect.
        z: f64,
    },
}
