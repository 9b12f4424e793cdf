//! The Strand runtime value.
//!
//! Strand has a single numeric type. Booleans are `0` and `1`, and any
//! non-zero value is truthy. `Value` wraps `i64` and intentionally does NOT
//! implement `Add`, `Sub`, `Mul` or `Div`: arithmetic goes through checked
//! methods so overflow is always reported.

use std::fmt;

/// A Strand value: a signed 64-bit integer.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct Value(i64);

impl Value {
    /// The zero value; also `false`.
    pub const ZERO: Self = Self(0);

    /// The one value; also `true`.
    pub const ONE: Self = Self(1);

    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Extract the raw `i64` value.
    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Non-zero values are truthy.
    #[inline]
    pub const fn is_truthy(self) -> bool {
        self.0 != 0
    }

    /// Convert a boolean to `1` / `0`.
    #[inline]
    pub const fn from_bool(b: bool) -> Self {
        if b {
            Self::ONE
        } else {
            Self::ZERO
        }
    }

    /// Checked addition. Returns `None` on overflow.
    #[inline]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on overflow.
    #[inline]
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.0.checked_sub(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[inline]
    pub const fn checked_mul(self, rhs: Self) -> Option<Self> {
        match self.0.checked_mul(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked division, truncating toward zero (`-5 / 2 == -2`).
    ///
    /// Returns `None` on division by zero or overflow (`i64::MIN / -1`).
    #[inline]
    pub const fn checked_div(self, rhs: Self) -> Option<Self> {
        match self.0.checked_div(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl From<i64> for Value {
    #[inline]
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(b: bool) -> Self {
        Self::from_bool(b)
    }
}

impl From<Value> for i64 {
    #[inline]
    fn from(value: Value) -> Self {
        value.0
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
