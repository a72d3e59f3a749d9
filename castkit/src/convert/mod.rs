//! The conversion operators themselves: numeric truncation (safe and legacy
//! forms), opaque bit reinterpretation, and read-only qualifier stripping.
//!
//! The hierarchy conversions (up- and downcasts) live with their fixtures in
//! [`crate::fixture`].

pub mod numeric;
pub mod opaque;
pub mod readonly;

pub use numeric::{legacy_truncate, truncate, PI};
pub use opaque::Opaque;
pub use readonly::ReadonlyView;
