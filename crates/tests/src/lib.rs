//! Integration test harness for lattice.
//!
//! Provides compact axis fixtures and a logging bootstrap so integration
//! tests can exercise the foundation and combination crates together.

use std::sync::Once;

use lattice_combination::{enumerate, Combination};
use lattice_foundation::{Axis, AxisList};
use tracing_subscriber::{fmt, EnvFilter};

static LOGGING: Once = Once::new();

/// Install a test-friendly tracing subscriber once per process.
///
/// Use `RUST_LOG` to override the default filter.
pub fn init_test_logging() {
    LOGGING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,lattice_combination=debug"));

        // Another harness may already have installed a global subscriber.
        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(false)
            .try_init();
    });
}

/// An axis list built from `(name, values)` literals.
pub struct AxisFixture {
    axes: AxisList,
}

impl AxisFixture {
    /// Build a fixture.
    ///
    /// # Panics
    ///
    /// Panics if the literals do not form a valid axis list.
    pub fn new(shape: &[(&str, &[&str])]) -> Self {
        let axes = shape
            .iter()
            .map(|(name, values)| {
                Axis::new(*name, values.iter().copied())
                    .unwrap_or_else(|e| panic!("invalid axis {name}: {e}"))
            })
            .collect::<Vec<_>>();
        let axes = AxisList::new(axes).unwrap_or_else(|e| panic!("invalid axis list: {e}"));
        Self { axes }
    }

    /// The underlying axis list.
    pub fn axes(&self) -> &AxisList {
        &self.axes
    }

    /// Axis named `name`.
    ///
    /// # Panics
    ///
    /// Panics if there is no such axis.
    pub fn axis(&self, name: &str) -> &Axis {
        self.axes
            .find(name)
            .unwrap_or_else(|| panic!("no axis named {name}"))
    }

    /// Combination binding the axes, in list order, to `values`.
    ///
    /// # Panics
    ///
    /// Panics on a value count mismatch.
    pub fn combination(&self, values: &[&str]) -> Combination {
        Combination::from_values(&self.axes, values.iter().copied())
            .unwrap_or_else(|e| panic!("cannot build combination: {e}"))
    }

    /// Every combination of the fixture, in dense-index order.
    ///
    /// # Panics
    ///
    /// Panics if the product overflows `usize`.
    pub fn all(&self) -> Vec<Combination> {
        enumerate(&self.axes)
            .unwrap_or_else(|e| panic!("cannot enumerate: {e}"))
            .collect()
    }
}
