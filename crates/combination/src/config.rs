//! Formatting configuration.

use lattice_foundation::DigestAlgorithm;
use serde::{Deserialize, Serialize};

use crate::error::{CombinationError, Result};

/// Canonical name of the empty combination.
///
/// Part of the identifier contract; no non-empty combination renders to it.
pub const DEFAULT_NAME: &str = "default";

/// Separator between entries in the canonical form.
pub const ENTRY_SEPARATOR: char = ',';

/// Separator between an axis name and its value in the canonical form.
pub const PAIR_SEPARATOR: char = '=';

/// How combinations are rendered to and parsed from identifier strings.
///
/// The defaults produce the canonical `name=value,name=value` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Placed between entries.
    pub entry_separator: char,
    /// Placed between an axis name and its value.
    pub pair_separator: char,
    /// Fingerprint used by [`crate::Combination::digest_with_config`].
    pub digest: DigestAlgorithm,
}

impl FormatConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.entry_separator == self.pair_separator {
            return Err(CombinationError::InvalidConfig(format!(
                "entry and pair separators must differ (both {:?})",
                self.entry_separator
            )));
        }
        for sep in [self.entry_separator, self.pair_separator] {
            if DEFAULT_NAME.contains(sep) {
                return Err(CombinationError::InvalidConfig(format!(
                    "separator {sep:?} occurs in the reserved name {DEFAULT_NAME:?}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            entry_separator: ENTRY_SEPARATOR,
            pair_separator: PAIR_SEPARATOR,
            digest: DigestAlgorithm::Sha256,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_canonical_and_valid() {
        let config = FormatConfig::default();
        assert_eq!(config.entry_separator, ',');
        assert_eq!(config.pair_separator, '=');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn equal_separators_are_rejected() {
        let config = FormatConfig {
            entry_separator: '/',
            pair_separator: '/',
            ..FormatConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CombinationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn separators_from_reserved_name_are_rejected() {
        for (entry, pair) in [(',', 'e'), ('d', '='), ('t', ':')] {
            let config = FormatConfig {
                entry_separator: entry,
                pair_separator: pair,
                ..FormatConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(CombinationError::InvalidConfig(_))),
                "{entry:?}/{pair:?} should be rejected"
            );
        }
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: FormatConfig =
            serde_json::from_str(r#"{"entry_separator": "/", "digest": "fnv1a"}"#).unwrap();
        assert_eq!(config.entry_separator, '/');
        assert_eq!(config.pair_separator, '=');
        assert_eq!(config.digest, DigestAlgorithm::Fnv1a);
    }
}
