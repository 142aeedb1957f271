//! Cardinality wrappers mirroring the schema's occurrence constraints:
//! [`Optional`] for `minOccurs="0" maxOccurs="1"` and [`Sequence`] for
//! `maxOccurs="unbounded"` particles.

use crate::error::CcmpError;

/// A schema field with `minOccurs="0"`: at most one exclusively owned value,
/// with "absent" distinguished from any contained value.
#[derive(Clone, Debug, PartialEq)]
pub struct Optional<T> {
    value: Option<T>,
}

// Absence is the default for any T; a derive would demand T: Default.
impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Optional<T> {
    pub const fn empty() -> Self {
        Self { value: None }
    }

    pub fn present(&self) -> bool {
        self.value.is_some()
    }

    /// Checked access. Callers are expected to check [`present`](Self::present)
    /// first; access while absent is a state error, not a default.
    pub fn get(&self) -> Result<&T, CcmpError> {
        self.value.as_ref().ok_or(CcmpError::AbsentOptional)
    }

    pub fn get_mut(&mut self) -> Result<&mut T, CcmpError> {
        self.value.as_mut().ok_or(CcmpError::AbsentOptional)
    }

    /// Unchecked view, for callers that treat absence as a normal case.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Replaces (and drops) any prior value.
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Transfers ownership of the contained value out, leaving the container
    /// empty. Used to repurpose a parsed sub-object without copying it.
    pub fn detach(&mut self) -> Option<T> {
        self.value.take()
    }

    pub fn clear(&mut self) {
        self.value = None;
    }

    pub fn into_option(self) -> Option<T> {
        self.value
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self { value }
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self { value: Some(value) }
    }
}

/// A `maxOccurs="unbounded"` particle: an insertion-ordered list of owned
/// values mirroring document order. No uniqueness or sorting invariant.
#[derive(Clone, Debug, PartialEq)]
pub struct Sequence<T> {
    items: Vec<T>,
}

impl<T> Sequence<T> {
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Whole-sequence replace.
    pub fn replace(&mut self, items: impl IntoIterator<Item = T>) {
        self.items = items.into_iter().collect();
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_presence_contract() {
        let mut field: Optional<String> = Optional::empty();
        assert!(!field.present());
        assert!(matches!(field.get(), Err(CcmpError::AbsentOptional)));

        field.set("xcon-userA@example.com".to_string());
        assert!(field.present());
        assert_eq!(field.get().unwrap(), "xcon-userA@example.com");

        let detached = field.detach();
        assert_eq!(detached.as_deref(), Some("xcon-userA@example.com"));
        assert!(!field.present());
        assert!(field.get().is_err());
    }

    #[test]
    fn optional_default_is_absent_without_a_default_value_type() {
        struct NoDefault;
        let field: Optional<NoDefault> = Optional::default();
        assert!(!field.present());
    }

    #[test]
    fn optional_set_replaces_prior_value() {
        let mut field = Optional::from("first".to_string());
        field.set("second".to_string());
        assert_eq!(field.get().unwrap(), "second");
    }

    #[test]
    fn sequence_preserves_insertion_order() {
        let mut seq = Sequence::new();
        seq.push(3);
        seq.push(1);
        seq.push(3);
        assert_eq!(seq.iter().copied().collect::<Vec<_>>(), vec![3, 1, 3]);

        seq.replace([7, 8]);
        assert_eq!(seq.len(), 2);
    }
}
