//! Lattice Combination
//!
//! A [`Combination`] is one point of the coordinate space spanned by an
//! [`AxisList`](lattice_foundation::AxisList): an immutable, key-ordered
//! mapping from axis name to axis value. It converts losslessly between
//! four representations:
//!
//! - the mapping itself,
//! - the canonical identifier `name=value,name=value` (`default` when empty),
//! - a dense mixed-radix index over the full product of an axis list,
//! - an eight-character fingerprint of the canonical identifier.
//!
//! A lossy compact display form is also provided.
//!
//! ```
//! use lattice_combination::Combination;
//! use lattice_foundation::{Axis, AxisList};
//!
//! let axes = AxisList::new([
//!     Axis::new("jdk", ["8", "11"]).unwrap(),
//!     Axis::new("os", ["linux", "mac"]).unwrap(),
//! ])
//! .unwrap();
//!
//! let c = Combination::from_values(&axes, ["11", "linux"]).unwrap();
//! assert_eq!(c.to_string(), "jdk=11,os=linux");
//! assert_eq!(c.to_index(&axes).unwrap(), 2);
//! assert_eq!("jdk=11,os=linux".parse::<Combination>().unwrap(), c);
//! ```

mod combination;
pub mod config;
pub mod error;
mod format;
mod index;

pub use combination::Combination;
pub use config::{FormatConfig, DEFAULT_NAME};
pub use error::{CombinationError, Result};
pub use index::{enumerate, Combinations};
