use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// Type-safe identifier wrapper. The phantom type parameter `T` prevents
/// mixing ids from different record types (e.g., Intern ID vs Placement ID).
///
/// Ids are opaque strings of the shape `<prefix>-<sequence>`, assigned by the
/// owning store. The sequence part encodes creation order.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T> {
    value: String,
    #[serde(skip)]
    _phantom: PhantomData<T>,
}

impl<T> Id<T> {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _phantom: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The trailing decimal digits of the id, or 0 when there are none.
    /// Table ordering relies on this being monotone in creation order.
    pub fn sequence(&self) -> u64 {
        let start = self
            .value
            .rfind(|c: char| !c.is_ascii_digit())
            .map(|pos| pos + 1)
            .unwrap_or(0);
        self.value[start..].parse().unwrap_or(0)
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Foo;

    #[test]
    fn sequence_reads_trailing_digits() {
        assert_eq!(Id::<Foo>::new("INT-1042").sequence(), 1042);
    }

    #[test]
    fn sequence_ignores_embedded_digits() {
        assert_eq!(Id::<Foo>::new("v2-batch-77").sequence(), 77);
    }

    #[test]
    fn sequence_defaults_to_zero_without_digits() {
        assert_eq!(Id::<Foo>::new("opaque").sequence(), 0);
    }

    #[test]
    fn ids_compare_by_value() {
        assert_eq!(Id::<Foo>::new("INT-1"), Id::<Foo>::new("INT-1"));
        assert_ne!(Id::<Foo>::new("INT-1"), Id::<Foo>::new("INT-2"));
    }
}
