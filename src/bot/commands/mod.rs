//! Discord command implementations.

/// `/say4me`
pub mod say;

pub use say::*;
