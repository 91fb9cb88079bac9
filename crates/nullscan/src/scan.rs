//! The nullable scan adapter.
//!
//! [`NullScanner`] wraps any [`Scanner`] (a single-row or multi-row
//! cursor's positional value extraction) and lets callers scan nullable
//! columns straight into plain `bool`/`String`/`i64`/`f64` destinations.
//! For each such destination it hands the delegate a `None`-initialized
//! nullable intermediate instead; after the delegate returns, non-NULL
//! results are copied into the original destinations and NULL results
//! leave them untouched.
//!
//! The adapter holds no state across calls and introduces no failure modes
//! of its own: a delegate error is returned verbatim.

use tracing::trace;

use crate::error::Result;
use crate::slot::{NullCell, ScanSlot};

/// Positional row scanner.
///
/// One call populates every destination in `dest` from the current row,
/// slot `i` from column `i`, synchronously. Implementations must honor the
/// nullable convention for the `Null*` slot variants: an absent column
/// value scans as `None`, never as an error.
///
/// Failure is reported through [`ScanError`](crate::ScanError); on failure
/// the contents of the destinations are unspecified.
pub trait Scanner {
    /// Scan the current row into `dest`, one slot per column.
    fn scan(&mut self, dest: &mut [ScanSlot<'_>]) -> Result<()>;

    /// Wrap this scanner in a NULL-tolerant adapter.
    ///
    /// Equivalent to [`NullScanner::new`].
    fn nullable(self) -> NullScanner<Self>
    where
        Self: Sized,
    {
        NullScanner::new(self)
    }
}

impl<S: Scanner + ?Sized> Scanner for &mut S {
    fn scan(&mut self, dest: &mut [ScanSlot<'_>]) -> Result<()> {
        (**self).scan(dest)
    }
}

impl<S: Scanner + ?Sized> Scanner for Box<S> {
    fn scan(&mut self, dest: &mut [ScanSlot<'_>]) -> Result<()> {
        (**self).scan(dest)
    }
}

/// Scanner adapter that tolerates SQL NULL in plain-primitive destinations.
///
/// Wraps a delegate [`Scanner`]. On each scan, plain `Bool`/`Text`/
/// `BigInt`/`Double` slots are replaced by fresh nullable intermediates
/// before delegation; every other slot is forwarded unmodified. After a
/// successful delegate scan, each intermediate that received a value is
/// copied back into the caller's destination, and each that stayed NULL
/// leaves the destination's previous value in place.
///
/// # Example
///
/// ```rust,ignore
/// use nullscan::{NullScanner, Scanner, ScanSlot};
///
/// let mut name = String::new();
/// let mut age = 0i64;
/// let mut scanner = NullScanner::new(row);
/// scanner.scan(&mut [
///     ScanSlot::Text(&mut name),
///     ScanSlot::BigInt(&mut age), // stays 0 if the column is NULL
/// ])?;
/// ```
#[derive(Debug)]
pub struct NullScanner<S> {
    inner: S,
}

impl<S> NullScanner<S> {
    /// Wrap a scanner.
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped scanner.
    pub const fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Unwrap, returning the inner scanner.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Scanner> Scanner for NullScanner<S> {
    fn scan(&mut self, dest: &mut [ScanSlot<'_>]) -> Result<()> {
        // Substitution map, positionally parallel to `dest`: Some marks a
        // slot replaced by a nullable intermediate for this call.
        let mut intermediates: Vec<Option<NullCell>> =
            dest.iter().map(ScanSlot::null_intermediate).collect();

        let substituted = intermediates.iter().filter(|c| c.is_some()).count();
        trace!(slots = dest.len(), substituted, "delegating scan");

        {
            let mut forwarded: Vec<ScanSlot<'_>> = dest
                .iter_mut()
                .zip(intermediates.iter_mut())
                .map(|(slot, cell)| match cell {
                    Some(cell) => cell.as_slot(),
                    None => slot.reborrow(),
                })
                .collect();
            self.inner.scan(&mut forwarded)?;
        }

        for (slot, cell) in dest.iter_mut().zip(intermediates) {
            if let Some(cell) = cell {
                cell.write_back(slot);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScanError;

    /// Records the slot kinds the delegate observes, writing nothing.
    struct KindProbe {
        seen: Vec<&'static str>,
    }

    impl Scanner for KindProbe {
        fn scan(&mut self, dest: &mut [ScanSlot<'_>]) -> Result<()> {
            for slot in dest.iter_mut() {
                self.seen.push(match slot {
                    ScanSlot::Bool(_) => "bool",
                    ScanSlot::Text(_) => "text",
                    ScanSlot::BigInt(_) => "bigint",
                    ScanSlot::Double(_) => "double",
                    ScanSlot::NullBool(_) => "null_bool",
                    ScanSlot::NullText(_) => "null_text",
                    ScanSlot::NullBigInt(_) => "null_bigint",
                    ScanSlot::NullDouble(_) => "null_double",
                    ScanSlot::Other(_) => "other",
                });
            }
            Ok(())
        }
    }

    /// Writes `Some(i)` into every nullable slot, erroring on anything else.
    struct CountingRow;

    impl Scanner for CountingRow {
        fn scan(&mut self, dest: &mut [ScanSlot<'_>]) -> Result<()> {
            for (i, slot) in dest.iter_mut().enumerate() {
                #[allow(clippy::cast_precision_loss)]
                match slot {
                    ScanSlot::NullBool(v) => **v = Some(i % 2 == 1),
                    ScanSlot::NullText(v) => **v = Some(i.to_string()),
                    ScanSlot::NullBigInt(v) => **v = Some(i as i64),
                    ScanSlot::NullDouble(v) => **v = Some(i as f64),
                    _ => return Err(ScanError::type_mismatch(i, "nullable slot expected")),
                }
            }
            Ok(())
        }
    }

    struct FailingScanner;

    impl Scanner for FailingScanner {
        fn scan(&mut self, _dest: &mut [ScanSlot<'_>]) -> Result<()> {
            Err(ScanError::no_rows())
        }
    }

    #[test]
    fn test_delegate_sees_nullable_intermediates() {
        let mut adapter = NullScanner::new(KindProbe { seen: Vec::new() });
        let mut b = false;
        let mut s: Option<String> = None;
        let mut o = 0u32;
        adapter
            .scan(&mut [
                ScanSlot::Bool(&mut b),
                ScanSlot::NullText(&mut s),
                ScanSlot::Other(&mut o),
            ])
            .unwrap();
        assert_eq!(
            adapter.into_inner().seen,
            vec!["null_bool", "null_text", "other"]
        );
    }

    #[test]
    fn test_values_copied_back_into_plain_destinations() {
        let mut adapter = NullScanner::new(CountingRow);
        let mut b = true;
        let mut s = String::new();
        let mut i = 0i64;
        let mut f = 0f64;
        adapter
            .scan(&mut [
                ScanSlot::Bool(&mut b),
                ScanSlot::Text(&mut s),
                ScanSlot::BigInt(&mut i),
                ScanSlot::Double(&mut f),
            ])
            .unwrap();
        assert!(!b);
        assert_eq!(s, "1");
        assert_eq!(i, 2);
        assert!((f - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_delegate_error_returned_verbatim() {
        let mut adapter = NullScanner::new(FailingScanner);
        let mut i = 0i64;
        let err = adapter
            .scan(&mut [ScanSlot::BigInt(&mut i)])
            .unwrap_err();
        assert!(err.is_no_rows());
    }

    #[test]
    fn test_adapter_reusable_across_calls() {
        let mut adapter = NullScanner::new(CountingRow);
        for _ in 0..2 {
            let mut i = -1i64;
            adapter.scan(&mut [ScanSlot::BigInt(&mut i)]).unwrap();
            assert_eq!(i, 0);
        }
    }

    #[test]
    fn test_scan_through_mut_reference() {
        let mut probe = KindProbe { seen: Vec::new() };
        {
            let mut adapter = NullScanner::new(&mut probe);
            let mut f = 0f64;
            adapter.scan(&mut [ScanSlot::Double(&mut f)]).unwrap();
        }
        assert_eq!(probe.seen, vec!["null_double"]);
    }
}
