use indexmap::IndexMap;

use super::{HasSlabs, Slab};

/// An insertion-ordered mapping from layer name to [`Slab`].
///
/// Iteration yields layers in the order they were first inserted, which is
/// the order mesh sorting preserves between equal priorities. Re-inserting an
/// existing name replaces its slab without moving it.
///
/// # Example
///
/// ```
/// use layerstack_zindex::stack::{LayerStack, Slab};
///
/// let mut stack = LayerStack::new();
/// stack.insert("box", Slab::new(-3.0, 3.0, 9));
/// stack.insert("core", Slab::new(0.0, 0.22, 1));
///
/// assert_eq!(stack.len(), 2);
/// assert_eq!(stack.get("core"), Some(&Slab::new(0.0, 0.22, 1)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerStack {
    layers: IndexMap<String, Slab>,
}

impl LayerStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a layer, returning the previous slab if the name was already
    /// present. A replaced layer keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, slab: Slab) -> Option<Slab> {
        self.layers.insert(name.into(), slab)
    }

    /// Looks up a layer by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Slab> {
        self.layers.get(name)
    }

    /// Number of layers in the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// True if the stack has no layers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Iterates `(name, slab)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Slab)> {
        self.layers.iter().map(|(name, slab)| (name.as_str(), slab))
    }
}

impl HasSlabs for LayerStack {
    fn slabs(&self) -> impl Iterator<Item = (&str, &Slab)> {
        self.iter()
    }
}

impl<N: Into<String>> FromIterator<(N, Slab)> for LayerStack {
    fn from_iter<I: IntoIterator<Item = (N, Slab)>>(iter: I) -> Self {
        Self {
            layers: iter.into_iter().map(|(name, slab)| (name.into(), slab)).collect(),
        }
    }
}

impl<N: Into<String>> Extend<(N, Slab)> for LayerStack {
    fn extend<I: IntoIterator<Item = (N, Slab)>>(&mut self, iter: I) {
        self.layers
            .extend(iter.into_iter().map(|(name, slab)| (name.into(), slab)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterates_in_insertion_order() {
        let mut stack = LayerStack::new();
        stack.insert("substrate", Slab::new(-10.0, 10.0, 99));
        stack.insert("core", Slab::new(0.0, 0.22, 1));
        stack.insert("clad", Slab::new(0.0, 3.0, 10));

        let names: Vec<_> = stack.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["substrate", "core", "clad"]);
    }

    #[test]
    fn reinserting_replaces_in_place() {
        let mut stack = LayerStack::new();
        stack.insert("core", Slab::new(0.0, 0.22, 1));
        stack.insert("clad", Slab::new(0.0, 3.0, 10));

        let previous = stack.insert("core", Slab::new(0.0, 0.3, 1));
        assert_eq!(previous, Some(Slab::new(0.0, 0.22, 1)));

        let names: Vec<_> = stack.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["core", "clad"]);
        assert_eq!(stack.get("core"), Some(&Slab::new(0.0, 0.3, 1)));
    }

    #[test]
    fn collects_from_pairs() {
        let stack: LayerStack = [
            ("a", Slab::new(0.0, 1.0, 0)),
            ("b", Slab::new(1.0, 1.0, 1)),
        ]
        .into_iter()
        .collect();

        assert_eq!(stack.len(), 2);
        assert!(!stack.is_empty());
        assert_eq!(stack.get("b"), Some(&Slab::new(1.0, 1.0, 1)));
    }
}
