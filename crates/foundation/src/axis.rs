//! Axes and axis lists.
//!
//! An [`Axis`] is one dimension of a combinatorial space: a name plus an
//! ordered set of distinct values. An [`AxisList`] orders axes; that order is
//! the digit order used for dense indexing, so it is significant and stable.

use std::fmt;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building axes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AxisError {
    /// Axis names must be non-empty.
    #[error("axis name must not be empty")]
    EmptyName,
    /// A value appeared twice on the same axis.
    #[error("duplicate value {value:?} on axis {axis}")]
    DuplicateValue { axis: String, value: String },
    /// Two axes in one list share a name.
    #[error("duplicate axis {0}")]
    DuplicateAxis(String),
}

/// A named, ordered, finite set of distinct values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAxis")]
pub struct Axis {
    name: String,
    values: IndexSet<String>,
}

/// Unvalidated wire shape of an [`Axis`].
#[derive(Deserialize)]
struct RawAxis {
    name: String,
    values: Vec<String>,
}

impl TryFrom<RawAxis> for Axis {
    type Error = AxisError;

    fn try_from(raw: RawAxis) -> Result<Self, Self::Error> {
        Axis::new(raw.name, raw.values)
    }
}

impl Axis {
    /// Creates an axis, keeping `values` in the given order.
    ///
    /// ```
    /// use lattice_foundation::Axis;
    ///
    /// let jdk = Axis::new("jdk", ["8", "11", "17"]).unwrap();
    /// assert_eq!(jdk.index_of("11"), Some(1));
    /// assert!(Axis::new("jdk", ["8", "8"]).is_err());
    /// ```
    pub fn new<I, V>(name: impl Into<String>, values: I) -> Result<Self, AxisError>
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(AxisError::EmptyName);
        }

        let mut set = IndexSet::new();
        for value in values {
            let value = value.into();
            if set.contains(&value) {
                return Err(AxisError::DuplicateValue { axis: name, value });
            }
            set.insert(value);
        }

        Ok(Self { name, values: set })
    }

    /// The axis name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Values in axis order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.values.iter().map(String::as_str)
    }

    /// Number of values (the radix of this axis when indexing).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the axis has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Position of `value` in axis order.
    pub fn index_of(&self, value: &str) -> Option<usize> {
        self.values.get_index_of(value)
    }

    /// Value at position `index`.
    pub fn value_at(&self, index: usize) -> Option<&str> {
        self.values.get_index(index).map(String::as_str)
    }

    /// True if `value` is one of this axis' values.
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={{", self.name)?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(v)?;
        }
        f.write_str("}")
    }
}

/// An ordered sequence of axes with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Axis>", into = "Vec<Axis>")]
pub struct AxisList {
    axes: IndexMap<String, Axis>,
}

impl AxisList {
    /// Creates an axis list, preserving the order of `axes`.
    pub fn new(axes: impl IntoIterator<Item = Axis>) -> Result<Self, AxisError> {
        let mut map = IndexMap::new();
        for axis in axes {
            if map.contains_key(axis.name()) {
                return Err(AxisError::DuplicateAxis(axis.name));
            }
            map.insert(axis.name.clone(), axis);
        }
        Ok(Self { axes: map })
    }

    /// Axes in list order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Axis> + ExactSizeIterator + '_ {
        self.axes.values()
    }

    /// Axis names in list order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.axes.keys().map(String::as_str)
    }

    /// Number of axes.
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    /// True if the list has no axes.
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Axis at position `index`.
    pub fn get(&self, index: usize) -> Option<&Axis> {
        self.axes.get_index(index).map(|(_, axis)| axis)
    }

    /// Axis named `name`.
    pub fn find(&self, name: &str) -> Option<&Axis> {
        self.axes.get(name)
    }

    /// Size of the full cartesian product, or `None` if it overflows `usize`.
    ///
    /// The empty list spans exactly one point: the empty combination.
    pub fn combination_count(&self) -> Option<usize> {
        self.iter()
            .try_fold(1usize, |acc, axis| acc.checked_mul(axis.len()))
    }
}

impl TryFrom<Vec<Axis>> for AxisList {
    type Error = AxisError;

    fn try_from(axes: Vec<Axis>) -> Result<Self, Self::Error> {
        AxisList::new(axes)
    }
}

impl From<AxisList> for Vec<Axis> {
    fn from(list: AxisList) -> Self {
        list.axes.into_values().collect()
    }
}

impl<'a> IntoIterator for &'a AxisList {
    type Item = &'a Axis;
    type IntoIter = indexmap::map::Values<'a, String, Axis>;

    fn into_iter(self) -> Self::IntoIter {
        self.axes.values()
    }
}
