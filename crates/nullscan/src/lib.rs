//! Nullable-aware adapter for positional SQL row scanners.
//!
//! Scanning a nullable column into a plain `bool`, `String`, `i64`, or
//! `f64` destination fails on SQL NULL, because plain primitives have no
//! "no value" state. [`NullScanner`] wraps any [`Scanner`] and absorbs
//! that: plain-primitive destinations are scanned through transient
//! nullable intermediates, non-NULL results are copied back, and NULL
//! results leave the destination at its previous value.
//!
//! # Example
//!
//! ```rust,ignore
//! use nullscan::{NullScanner, ScanSlot, Scanner};
//!
//! let mut nickname = String::from("(none)");
//! let mut score = 0f64;
//!
//! // `row` is whatever positional scanner the driver layer exposes.
//! NullScanner::new(row).scan(&mut [
//!     ScanSlot::Text(&mut nickname), // keeps "(none)" on NULL
//!     ScanSlot::Double(&mut score),
//! ])?;
//! ```
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod scan;
pub mod slot;

// Re-export main types for convenience
pub use error::{Result, ScanError};
pub use scan::{NullScanner, Scanner};
pub use slot::ScanSlot;
