//! The immutable, field-named record produced by the builder.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::ops::Index;

/// An ordered, field-named container of values.
///
/// Fields are addressable by name and by position. A `Record` cannot be
/// mutated after it is built; consume it with [`Record::into_values`] or
/// [`IntoIterator`] to take the values back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<T> {
    names: Vec<String>,
    values: Vec<T>,
}

impl<T> Record<T> {
    /// Callers must pass unique names of the same length as `values`;
    /// the builder is the only producer.
    pub(crate) fn from_parts(names: Vec<String>, values: Vec<T>) -> Self {
        debug_assert_eq!(names.len(), values.len());
        Self { names, values }
    }

    /// A record with no fields.
    pub fn empty() -> Self {
        Self {
            names: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Field names in order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Values in order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Value at a zero-based position.
    pub fn field(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    /// Value of the field called `name`.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.position(name).map(|i| &self.values[i])
    }

    /// Position of the field called `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Iterate `(name, value)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.names.iter().map(String::as_str).zip(self.values.iter())
    }

    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}

impl<T> Default for Record<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Index<usize> for Record<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<T> Index<&str> for Record<T> {
    type Output = T;

    fn index(&self, name: &str) -> &T {
        match self.get(name) {
            Some(value) => value,
            None => panic!("record has no field named '{name}'"),
        }
    }
}

impl<T> IntoIterator for Record<T> {
    type Item = (String, T);
    type IntoIter = std::iter::Zip<std::vec::IntoIter<String>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter().zip(self.values)
    }
}

/// `Record(food="pizza", season="summer")`
impl<T: fmt::Debug> fmt::Display for Record<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Record(")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}={value:?}")?;
        }
        f.write_str(")")
    }
}

/// Serializes as a map that keeps field order.
impl<T: Serialize> Serialize for Record<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
