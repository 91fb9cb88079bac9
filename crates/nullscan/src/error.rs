//! Error hierarchy for nullscan.
//!
//! Follows the "canonical error struct" pattern: a single public error type
//! over an internal `ErrorKind`, exposing `is_xxx()` methods rather than the
//! kind itself for future-proofing.
//!
//! The adapter in [`crate::scan`] never constructs these errors — it only
//! propagates whatever the wrapped scanner returns. The kinds here are the
//! failure modes a positional row scanner is expected to report.

use thiserror::Error;

/// Root error type for scan operations.
///
/// Produced by [`Scanner`](crate::Scanner) implementations and passed
/// through the [`NullScanner`](crate::NullScanner) adapter unchanged.
/// Exposes predicate methods (`is_xxx()`) for error classification without
/// exposing internals.
///
/// # Example
///
/// ```rust,ignore
/// use nullscan::ScanError;
///
/// fn handle_error(err: ScanError) {
///     if err.is_no_rows() {
///         eprintln!("query returned no rows");
///     } else if err.is_type_mismatch() {
///         eprintln!("column value did not fit its destination");
///     }
/// }
/// ```
#[derive(Error, Debug)]
#[error("{kind}")]
pub struct ScanError {
    kind: ErrorKind,
}

/// Internal error classification.
///
/// This enum is `pub(crate)` to allow adding variants without breaking
/// changes. External code should use the `is_xxx()` predicate methods
/// instead.
#[derive(Error, Debug)]
#[non_exhaustive]
pub(crate) enum ErrorKind {
    /// The cursor was exhausted before the scan.
    #[error("no rows in result set")]
    NoRows,

    /// Destination count does not match the row's column count.
    #[error("column count mismatch: expected {expected} destinations, got {actual}")]
    ColumnCount { expected: usize, actual: usize },

    /// A column value cannot populate its destination slot.
    #[error("type mismatch at column {index}: {message}")]
    TypeMismatch { index: usize, message: String },

    /// Opaque failure reported by the database driver.
    #[error("backend error: {0}")]
    Backend(String),
}

impl ScanError {
    // ═══════════════════════════════════════════════════════════════════════
    // Constructors
    // ═══════════════════════════════════════════════════════════════════════

    /// Create error for an exhausted cursor.
    #[must_use]
    pub const fn no_rows() -> Self {
        Self {
            kind: ErrorKind::NoRows,
        }
    }

    /// Create error for a destination/column count mismatch.
    #[must_use]
    pub const fn column_count(expected: usize, actual: usize) -> Self {
        Self {
            kind: ErrorKind::ColumnCount { expected, actual },
        }
    }

    /// Create error for a value that cannot populate its destination.
    ///
    /// `index` is the zero-based column position. SQL NULL scanned into a
    /// non-nullable destination is reported through this constructor.
    #[must_use]
    pub fn type_mismatch(index: usize, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::TypeMismatch {
                index,
                message: message.into(),
            },
        }
    }

    /// Create error for a driver-level failure.
    #[must_use]
    pub fn backend(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Backend(message.into()),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Predicate Methods (is_xxx)
    // ═══════════════════════════════════════════════════════════════════════

    /// Returns true if this is a no-rows error.
    #[must_use]
    pub const fn is_no_rows(&self) -> bool {
        matches!(self.kind, ErrorKind::NoRows)
    }

    /// Returns true if this is a column count mismatch error.
    #[must_use]
    pub const fn is_column_count(&self) -> bool {
        matches!(self.kind, ErrorKind::ColumnCount { .. })
    }

    /// Returns true if this is a type mismatch error.
    #[must_use]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self.kind, ErrorKind::TypeMismatch { .. })
    }

    /// Returns true if this is a backend error.
    #[must_use]
    pub const fn is_backend(&self) -> bool {
        matches!(self.kind, ErrorKind::Backend(_))
    }
}

/// Result type alias for scan operations.
pub type Result<T> = std::result::Result<T, ScanError>;
