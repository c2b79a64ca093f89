//! Canonical, subset and compact string forms, parsing, and digests.
//!
//! The canonical form is `name=value,name=value` in ascending key order, or
//! `default` for the empty combination. It is used as an on-disk identifier,
//! so rendering and parsing must stay exactly as they are.
//!
//! No escaping is defined. A value containing `,`, or a key containing `,` or
//! `=`, renders fine but does not parse back to the same combination:
//! `{"a=b": "c"}` renders as `a=b=c`, which parses as `{"a": "b=c"}`.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use indexmap::IndexMap;
use lattice_foundation::{sha256_short, Axis, AxisList};
use tracing::{debug, trace};

use crate::combination::Combination;
use crate::config::{FormatConfig, DEFAULT_NAME, ENTRY_SEPARATOR, PAIR_SEPARATOR};
use crate::error::{CombinationError, Result};

impl Combination {
    /// Canonical identifier, same as `to_string()`.
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }

    /// Renders entries in key order as `key<sep2>value`, joined by `sep1`.
    ///
    /// ```
    /// use lattice_combination::Combination;
    ///
    /// let c: Combination = [("os", "linux"), ("jdk", "8")].into_iter().collect();
    /// assert_eq!(c.to_string_with('/', ':'), "jdk:8/os:linux");
    /// assert_eq!(Combination::empty().to_string_with('/', ':'), "default");
    /// ```
    pub fn to_string_with(&self, sep1: char, sep2: char) -> String {
        let mut buf = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_with(&mut buf, sep1, sep2);
        buf
    }

    /// Renders with the separators of `config`.
    pub fn format_with(&self, config: &FormatConfig) -> String {
        self.to_string_with(config.entry_separator, config.pair_separator)
    }

    fn write_with(&self, out: &mut impl fmt::Write, sep1: char, sep2: char) -> fmt::Result {
        if self.is_empty() {
            return out.write_str(DEFAULT_NAME);
        }
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                out.write_char(sep1)?;
            }
            out.write_str(key)?;
            out.write_char(sep2)?;
            out.write_str(value)?;
        }
        Ok(())
    }

    /// Renders only the given axes, in the order given.
    ///
    /// When both this combination and `subset` have exactly one element the
    /// bare value is returned without its name. An empty subset renders as
    /// `default`. Fails if an axis in `subset` has no value here.
    ///
    /// ```
    /// use lattice_combination::Combination;
    /// use lattice_foundation::Axis;
    ///
    /// let x = Axis::new("x", ["1", "2"]).unwrap();
    /// let c: Combination = [("x", "1")].into_iter().collect();
    /// assert_eq!(c.to_string_subset([&x]).unwrap(), "1");
    /// ```
    pub fn to_string_subset<'a>(&self, subset: impl IntoIterator<Item = &'a Axis>) -> Result<String> {
        let subset: Vec<&Axis> = subset.into_iter().collect();

        if self.len() == 1 && subset.len() == 1 {
            if let Some((_, value)) = self.iter().next() {
                return Ok(value.to_string());
            }
        }

        if subset.is_empty() {
            return Ok(DEFAULT_NAME.to_string());
        }

        let mut buf = String::new();
        for (i, axis) in subset.iter().enumerate() {
            let value = self
                .get_axis(axis)
                .ok_or_else(|| CombinationError::missing(axis.name()))?;
            if i > 0 {
                buf.push(ENTRY_SEPARATOR);
            }
            buf.push_str(axis.name());
            buf.push(PAIR_SEPARATOR);
            buf.push_str(value);
        }
        Ok(buf)
    }

    /// Display form that drops axis names where the value alone is
    /// unambiguous.
    ///
    /// An entry keeps its `name=` prefix when its value is declared by more
    /// than one axis of `axes`. This is a per-value rule: an axis that shares
    /// some other value with another axis still renders bare when its own
    /// value is unique. It differs from marking every axis involved in any
    /// collision, which would render the example below as `x=B,y=C`.
    /// There is no inverse parse.
    ///
    /// ```
    /// use lattice_combination::Combination;
    /// use lattice_foundation::{Axis, AxisList};
    ///
    /// let axes = AxisList::new([
    ///     Axis::new("x", ["A", "B"]).unwrap(),
    ///     Axis::new("y", ["B", "C"]).unwrap(),
    /// ])
    /// .unwrap();
    /// let c: Combination = [("x", "B"), ("y", "C")].into_iter().collect();
    /// assert_eq!(c.to_compact_string(&axes), "x=B,C");
    /// ```
    pub fn to_compact_string(&self, axes: &AxisList) -> String {
        if self.is_empty() {
            return DEFAULT_NAME.to_string();
        }

        // value -> number of axes declaring it
        let mut declared: IndexMap<&str, usize> = IndexMap::new();
        for axis in axes {
            for value in axis.values() {
                *declared.entry(value).or_default() += 1;
            }
        }

        let mut buf = String::new();
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                buf.push(ENTRY_SEPARATOR);
            }
            if declared.get(value).is_some_and(|&n| n > 1) {
                buf.push_str(key);
                buf.push(PAIR_SEPARATOR);
            }
            buf.push_str(value);
        }
        buf
    }

    /// Eight-character fingerprint of the canonical string (truncated SHA-256).
    pub fn digest(&self) -> String {
        self.digest_with(sha256_short)
    }

    /// Fingerprint of the canonical string using `digest`.
    pub fn digest_with(&self, digest: impl Fn(&str) -> String) -> String {
        digest(&self.to_string())
    }

    /// Fingerprint of the canonical string using the algorithm in `config`.
    pub fn digest_with_config(&self, config: &FormatConfig) -> String {
        self.digest_with(config.digest.function())
    }

    /// Parses the canonical form produced by `to_string()`.
    ///
    /// `default` is the empty combination. Each entry is split on its first
    /// `=`, so values may contain `=`. Empty entries are skipped, and a
    /// repeated key keeps its last value.
    ///
    /// ```
    /// use lattice_combination::Combination;
    ///
    /// let c = Combination::parse("jdk=8,flags=-Xmx=1g").unwrap();
    /// assert_eq!(c.get("flags"), Some("-Xmx=1g"));
    /// assert!(Combination::parse("default").unwrap().is_empty());
    /// assert!(Combination::parse("jdk").is_err());
    /// ```
    pub fn parse(id: &str) -> Result<Self> {
        Self::parse_with(id, &FormatConfig::default())
    }

    /// Inverse of [`Combination::format_with`].
    pub fn parse_with(id: &str, config: &FormatConfig) -> Result<Self> {
        config.validate()?;

        if id == DEFAULT_NAME {
            return Ok(Self::empty());
        }

        let mut pairs = Vec::new();
        for token in id.split(config.entry_separator).filter(|t| !t.is_empty()) {
            match token.split_once(config.pair_separator) {
                Some((key, value)) => pairs.push((key, value)),
                None => {
                    debug!(input = id, token, "combination entry has no pair separator");
                    return Err(CombinationError::parse(id));
                }
            }
        }

        let combination = Self::from_pairs(pairs);
        trace!(input = id, entries = combination.len(), "parsed combination");
        Ok(combination)
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, ENTRY_SEPARATOR, PAIR_SEPARATOR)
    }
}

impl FromStr for Combination {
    type Err = CombinationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
