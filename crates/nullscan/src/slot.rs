//! Positional scan destinations.
//!
//! A row scanner receives its destinations as a slice of [`ScanSlot`]s, one
//! per column. Four variants borrow plain primitives and are the slots the
//! [`NullScanner`](crate::NullScanner) adapter rewrites; the `Null*`
//! variants borrow `Option`s and follow the usual nullable-column
//! convention (`None` ⇔ SQL NULL); [`ScanSlot::Other`] carries any other
//! destination for the scanner to downcast.
//!
//! All variants borrow caller-owned storage. A slot writes through its
//! borrow and is never retained past the scan call.

use std::any::Any;
use std::fmt;

/// A single scan destination, positionally matched to one result column.
pub enum ScanSlot<'a> {
    /// Plain boolean destination. Rejected by scanners on SQL NULL.
    Bool(&'a mut bool),
    /// Plain string destination. Rejected by scanners on SQL NULL.
    Text(&'a mut String),
    /// Plain 64-bit integer destination. Rejected by scanners on SQL NULL.
    BigInt(&'a mut i64),
    /// Plain 64-bit float destination. Rejected by scanners on SQL NULL.
    Double(&'a mut f64),
    /// Nullable boolean destination; SQL NULL scans as `None`.
    NullBool(&'a mut Option<bool>),
    /// Nullable string destination; SQL NULL scans as `None`.
    NullText(&'a mut Option<String>),
    /// Nullable 64-bit integer destination; SQL NULL scans as `None`.
    NullBigInt(&'a mut Option<i64>),
    /// Nullable 64-bit float destination; SQL NULL scans as `None`.
    NullDouble(&'a mut Option<f64>),
    /// Any other destination type the underlying scanner understands.
    ///
    /// Scanners downcast this to their supported concrete types. The
    /// adapter forwards it untouched in both directions.
    Other(&'a mut dyn Any),
}

impl ScanSlot<'_> {
    /// Reborrow this slot with a shorter lifetime.
    ///
    /// Lets a wrapping scanner build a second destination list over the
    /// same storage without consuming the original slots.
    pub fn reborrow(&mut self) -> ScanSlot<'_> {
        match self {
            Self::Bool(v) => ScanSlot::Bool(&mut **v),
            Self::Text(v) => ScanSlot::Text(&mut **v),
            Self::BigInt(v) => ScanSlot::BigInt(&mut **v),
            Self::Double(v) => ScanSlot::Double(&mut **v),
            Self::NullBool(v) => ScanSlot::NullBool(&mut **v),
            Self::NullText(v) => ScanSlot::NullText(&mut **v),
            Self::NullBigInt(v) => ScanSlot::NullBigInt(&mut **v),
            Self::NullDouble(v) => ScanSlot::NullDouble(&mut **v),
            Self::Other(v) => ScanSlot::Other(&mut **v),
        }
    }

    /// Classify this slot for nullable substitution.
    ///
    /// Returns a fresh intermediate (`None`-initialized) for exactly the
    /// four plain-primitive variants; every other variant is forwarded to
    /// the delegate as-is.
    pub(crate) fn null_intermediate(&self) -> Option<NullCell> {
        match self {
            Self::Bool(_) => Some(NullCell::Bool(None)),
            Self::Text(_) => Some(NullCell::Text(None)),
            Self::BigInt(_) => Some(NullCell::BigInt(None)),
            Self::Double(_) => Some(NullCell::Double(None)),
            _ => None,
        }
    }
}

impl fmt::Debug for ScanSlot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Self::Text(v) => f.debug_tuple("Text").field(v).finish(),
            Self::BigInt(v) => f.debug_tuple("BigInt").field(v).finish(),
            Self::Double(v) => f.debug_tuple("Double").field(v).finish(),
            Self::NullBool(v) => f.debug_tuple("NullBool").field(v).finish(),
            Self::NullText(v) => f.debug_tuple("NullText").field(v).finish(),
            Self::NullBigInt(v) => f.debug_tuple("NullBigInt").field(v).finish(),
            Self::NullDouble(v) => f.debug_tuple("NullDouble").field(v).finish(),
            Self::Other(_) => f.debug_tuple("Other").field(&"<dyn Any>").finish(),
        }
    }
}

impl<'a> From<&'a mut bool> for ScanSlot<'a> {
    fn from(v: &'a mut bool) -> Self {
        Self::Bool(v)
    }
}

impl<'a> From<&'a mut String> for ScanSlot<'a> {
    fn from(v: &'a mut String) -> Self {
        Self::Text(v)
    }
}

impl<'a> From<&'a mut i64> for ScanSlot<'a> {
    fn from(v: &'a mut i64) -> Self {
        Self::BigInt(v)
    }
}

impl<'a> From<&'a mut f64> for ScanSlot<'a> {
    fn from(v: &'a mut f64) -> Self {
        Self::Double(v)
    }
}

impl<'a> From<&'a mut Option<bool>> for ScanSlot<'a> {
    fn from(v: &'a mut Option<bool>) -> Self {
        Self::NullBool(v)
    }
}

impl<'a> From<&'a mut Option<String>> for ScanSlot<'a> {
    fn from(v: &'a mut Option<String>) -> Self {
        Self::NullText(v)
    }
}

impl<'a> From<&'a mut Option<i64>> for ScanSlot<'a> {
    fn from(v: &'a mut Option<i64>) -> Self {
        Self::NullBigInt(v)
    }
}

impl<'a> From<&'a mut Option<f64>> for ScanSlot<'a> {
    fn from(v: &'a mut Option<f64>) -> Self {
        Self::NullDouble(v)
    }
}

/// Call-scoped nullable intermediate for one substituted slot.
///
/// Created `None`-initialized during classification, handed to the delegate
/// as the matching `Null*` slot, then consumed by [`Self::write_back`].
/// Never visible to the caller of the adapter.
#[derive(Debug)]
pub(crate) enum NullCell {
    Bool(Option<bool>),
    Text(Option<String>),
    BigInt(Option<i64>),
    Double(Option<f64>),
}

impl NullCell {
    /// View this cell as the nullable slot the delegate scans into.
    pub(crate) fn as_slot(&mut self) -> ScanSlot<'_> {
        match self {
            Self::Bool(v) => ScanSlot::NullBool(v),
            Self::Text(v) => ScanSlot::NullText(v),
            Self::BigInt(v) => ScanSlot::NullBigInt(v),
            Self::Double(v) => ScanSlot::NullDouble(v),
        }
    }

    /// Copy a non-NULL result into the original destination.
    ///
    /// A `None` cell (SQL NULL) leaves the destination's previous value in
    /// place. Total: kind pairings other than the one this cell was created
    /// for cannot occur and are ignored.
    pub(crate) fn write_back(self, slot: &mut ScanSlot<'_>) {
        match (self, slot) {
            (Self::Bool(Some(v)), ScanSlot::Bool(dst)) => **dst = v,
            (Self::Text(Some(v)), ScanSlot::Text(dst)) => **dst = v,
            (Self::BigInt(Some(v)), ScanSlot::BigInt(dst)) => **dst = v,
            (Self::Double(Some(v)), ScanSlot::Double(dst)) => **dst = v,
            _ => {}
        }
    }
}
