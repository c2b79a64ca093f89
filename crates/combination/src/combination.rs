//! The [`Combination`] value type.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use lattice_foundation::{Axis, AxisList};
use serde::{Deserialize, Serialize};

use crate::error::{CombinationError, Result};

/// One point of the coordinate space spanned by an [`AxisList`]: an
/// immutable mapping from axis name to axis value.
///
/// Entries are kept in ascending key order, independent of the order of
/// any axis list the combination was built from. Once built, a combination
/// cannot change. It has no mutating API, and the underlying map is only
/// ever lent out as a shared borrow:
///
/// ```compile_fail
/// use lattice_combination::Combination;
///
/// let mut c: Combination = [("x", "1")].into_iter().collect();
/// c.insert("y".to_string(), "2".to_string());
/// ```
///
/// ```compile_fail
/// use lattice_combination::Combination;
///
/// let c: Combination = [("x", "1")].into_iter().collect();
/// c.as_map().clear();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Combination {
    entries: BTreeMap<String, String>,
}

impl Combination {
    /// The empty combination (canonical form `default`).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Binds the i-th axis of `axes` to the i-th element of `values`.
    ///
    /// `values` follows the order of `axes`, not the key order of the result.
    ///
    /// ```
    /// use lattice_combination::Combination;
    /// use lattice_foundation::{Axis, AxisList};
    ///
    /// let axes = AxisList::new([
    ///     Axis::new("os", ["linux", "mac"]).unwrap(),
    ///     Axis::new("jdk", ["8", "11"]).unwrap(),
    /// ])
    /// .unwrap();
    ///
    /// let c = Combination::from_values(&axes, ["mac", "11"]).unwrap();
    /// assert_eq!(c.to_string(), "jdk=11,os=mac");
    /// assert!(Combination::from_values(&axes, ["mac"]).is_err());
    /// ```
    pub fn from_values<I, V>(axes: &AxisList, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.len() != axes.len() {
            return Err(CombinationError::ValueCountMismatch {
                expected: axes.len(),
                actual: values.len(),
            });
        }

        let entries = axes
            .names()
            .map(str::to_string)
            .zip(values)
            .collect::<BTreeMap<_, _>>();
        Ok(Self { entries })
    }

    /// Copies every pair verbatim. Later pairs replace earlier ones with
    /// the same key. Nothing is checked against an axis list.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// Value bound to `axis_name`.
    pub fn get(&self, axis_name: &str) -> Option<&str> {
        self.entries.get(axis_name).map(String::as_str)
    }

    /// Value bound to `axis`; same as `get(axis.name())`.
    pub fn get_axis(&self, axis: &Axis) -> Option<&str> {
        self.get(axis.name())
    }

    /// Values for `axes`, in the order given.
    ///
    /// An axis this combination has no entry for yields `None` in its slot.
    pub fn values<'a>(&self, axes: impl IntoIterator<Item = &'a Axis>) -> Vec<Option<&str>> {
        axes.into_iter().map(|axis| self.get_axis(axis)).collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True for the empty combination.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if `axis_name` has a value.
    pub fn contains_key(&self, axis_name: &str) -> bool {
        self.entries.contains_key(axis_name)
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, &str)> + ExactSizeIterator + '_ {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Axis names in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Read-only view of the underlying map.
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.entries
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Combination {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<BTreeMap<String, String>> for Combination {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a Combination {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Fewer entries sort first. Between combinations of equal size, entries are
/// compared pairwise in key order, key before value, and the first difference
/// decides.
///
/// Keys and values compare by UTF-8 byte order (`str`'s `Ord`), which is
/// also the key order of the canonical string. This differs from UTF-16
/// code-unit order between supplementary-plane characters and U+E000..=U+FFFF.
///
/// When two same-size combinations have different key sets the result is
/// still a total order, but it interleaves key and value comparisons:
/// `{a:9}` sorts before `{b:1}` because `a < b`, whatever the values.
impl Ord for Combination {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len().cmp(&other.len()).then_with(|| {
            self.entries
                .iter()
                .zip(&other.entries)
                .map(|((k1, v1), (k2, v2))| k1.cmp(k2).then_with(|| v1.cmp(v2)))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl PartialOrd for Combination {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Serialized as the canonical string so combinations can key maps and caches.
impl Serialize for Combination {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Combination {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct CombinationVisitor;

        impl<'de> serde::de::Visitor<'de> for CombinationVisitor {
            type Value = Combination;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a canonical combination string")
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Combination, E>
            where
                E: serde::de::Error,
            {
                Combination::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(CombinationVisitor)
    }
}
