//! Dense indexing over the full cartesian product of an axis list.
//!
//! The axis list is read as a mixed-radix number: the first axis is the most
//! significant digit and each axis' size is its radix. Every combination of
//! the product maps to exactly one index in `0..combination_count()`.

use std::iter::FusedIterator;

use lattice_foundation::AxisList;
use tracing::{debug, trace};

use crate::combination::Combination;
use crate::error::{CombinationError, Result};

impl Combination {
    /// Position of this combination in the dense enumeration of `axes`.
    ///
    /// Depends only on the order of `axes`, never on the key order of the
    /// combination. Entries for axes not in `axes` are ignored.
    ///
    /// ```
    /// use lattice_combination::Combination;
    /// use lattice_foundation::{Axis, AxisList};
    ///
    /// let axes = AxisList::new([
    ///     Axis::new("x", ["1", "2"]).unwrap(),
    ///     Axis::new("y", ["a", "b", "c"]).unwrap(),
    /// ])
    /// .unwrap();
    /// let c = Combination::from_values(&axes, ["2", "b"]).unwrap();
    /// assert_eq!(c.to_index(&axes).unwrap(), 4);
    /// ```
    pub fn to_index(&self, axes: &AxisList) -> Result<usize> {
        let mut index = 0usize;
        for axis in axes {
            let value = self.get_axis(axis).ok_or_else(|| {
                debug!(axis = axis.name(), combination = %self, "axis has no value");
                CombinationError::missing(axis.name())
            })?;
            let digit = axis.index_of(value).ok_or_else(|| {
                debug!(axis = axis.name(), value, "value not declared on axis");
                CombinationError::UnknownAxisValue {
                    axis: axis.name().to_string(),
                    value: value.to_string(),
                }
            })?;
            index = index
                .checked_mul(axis.len())
                .and_then(|i| i.checked_add(digit))
                .ok_or(CombinationError::IndexOverflow)?;
        }
        trace!(combination = %self, index, "computed combination index");
        Ok(index)
    }

    /// Combination at `index` in the dense enumeration of `axes`.
    ///
    /// Inverse of [`Combination::to_index`] for combinations over exactly
    /// the axes of `axes`.
    pub fn from_index(axes: &AxisList, index: usize) -> Result<Self> {
        let count = axes
            .combination_count()
            .ok_or(CombinationError::IndexOverflow)?;
        if index >= count {
            return Err(CombinationError::IndexOutOfRange { index, count });
        }
        Ok(decode(axes, index))
    }
}

/// Decodes an index known to be in range.
fn decode(axes: &AxisList, mut index: usize) -> Combination {
    let mut pairs = Vec::with_capacity(axes.len());
    for axis in axes.iter().rev() {
        let radix = axis.len();
        // In range implies every axis is non-empty.
        if let Some(value) = axis.value_at(index % radix) {
            pairs.push((axis.name(), value));
        }
        index /= radix;
    }
    Combination::from_pairs(pairs)
}

/// Every combination of `axes`, in dense-index order.
///
/// Fails if the product does not fit in `usize`.
///
/// ```
/// use lattice_combination::enumerate;
/// use lattice_foundation::{Axis, AxisList};
///
/// let axes = AxisList::new([
///     Axis::new("x", ["1", "2"]).unwrap(),
///     Axis::new("y", ["a", "b"]).unwrap(),
/// ])
/// .unwrap();
/// let ids: Vec<String> = enumerate(&axes).unwrap().map(|c| c.to_string()).collect();
/// assert_eq!(ids, ["x=1,y=a", "x=1,y=b", "x=2,y=a", "x=2,y=b"]);
/// ```
pub fn enumerate(axes: &AxisList) -> Result<Combinations<'_>> {
    let count = axes
        .combination_count()
        .ok_or(CombinationError::IndexOverflow)?;
    Ok(Combinations {
        axes,
        next: 0,
        count,
    })
}

/// Iterator returned by [`enumerate`].
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    axes: &'a AxisList,
    next: usize,
    count: usize,
}

impl Iterator for Combinations<'_> {
    type Item = Combination;

    fn next(&mut self) -> Option<Combination> {
        if self.next >= self.count {
            return None;
        }
        let combination = decode(self.axes, self.next);
        self.next += 1;
        Some(combination)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Combinations<'_> {}

impl FusedIterator for Combinations<'_> {}
