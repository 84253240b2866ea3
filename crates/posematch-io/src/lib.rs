#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

mod error;
pub use error::IoError;

/// Reading pose sets.
pub mod loader;

/// Writing and reading back matched offsets.
pub mod exporter;

/// Serialized record layouts.
pub mod records;

pub use exporter::{read_offsets_json, write_offsets_json};
pub use loader::{load_pose_set, parse_pose_set, read_pose_set};
