//! Numeric payload wrappers.
//!
//! [`Int64`] and [`Float64`] are thin wrappers around `i64` / `f64` that
//! give the node layer a comparison with an explicit unordered outcome
//! and the special value predicates JavaScript coercion needs.

use std::cmp::Ordering;

/// Result of comparing two numeric values.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Compare {
    Less,
    Equal,
    Greater,
    /// At least one operand was NaN.
    Unordered,
}

impl Compare {
    #[inline]
    pub fn is_ordered(self) -> bool {
        self != Compare::Unordered
    }
}

impl From<Ordering> for Compare {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Compare::Less,
            Ordering::Equal => Compare::Equal,
            Ordering::Greater => Compare::Greater,
        }
    }
}

/// 64-bit signed integer payload.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Int64(i64);

impl Int64 {
    #[inline]
    pub const fn new(value: i64) -> Self {
        Int64(value)
    }

    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    #[inline]
    pub fn set(&mut self, value: i64) {
        self.0 = value;
    }

    /// Integers are totally ordered, so this never yields `Unordered`.
    pub fn compare(self, rhs: Int64) -> Compare {
        self.0.cmp(&rhs.0).into()
    }
}

macro_rules! int64_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Int64 {
                #[inline]
                fn from(value: $t) -> Self {
                    Int64(i64::from(value))
                }
            }
        )*
    };
}

int64_from!(i8, i16, i32, i64, u8, u16, u32);

/// 64-bit floating point payload.
///
/// Equality follows IEEE 754 (`NaN != NaN`, `-0.0 == 0.0`); use
/// [`Float64::compare`] to observe the unordered case explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Float64(f64);

impl Float64 {
    /// Default tolerance for [`Float64::nearly_equal`].
    pub const DEFAULT_EPSILON: f64 = 0.000_01;

    #[inline]
    pub const fn new(value: f64) -> Self {
        Float64(value)
    }

    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn set(&mut self, value: f64) {
        self.0 = value;
    }

    pub fn set_nan(&mut self) {
        self.0 = f64::NAN;
    }

    /// Set to positive infinity.
    pub fn set_infinity(&mut self) {
        self.0 = f64::INFINITY;
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// Either signed infinity.
    #[inline]
    pub fn is_infinity(self) -> bool {
        self.0.is_infinite()
    }

    #[inline]
    pub fn is_positive_infinity(self) -> bool {
        self.0 == f64::INFINITY
    }

    #[inline]
    pub fn is_negative_infinity(self) -> bool {
        self.0 == f64::NEG_INFINITY
    }

    /// `-1` for negative infinity, `1` for positive infinity, `0` otherwise.
    pub fn classify_infinity(self) -> i32 {
        if self.is_positive_infinity() {
            1
        } else if self.is_negative_infinity() {
            -1
        } else {
            0
        }
    }

    /// Four-way comparison; `Unordered` when either side is NaN.
    pub fn compare(self, rhs: Float64) -> Compare {
        self.0
            .partial_cmp(&rhs.0)
            .map_or(Compare::Unordered, Compare::from)
    }

    /// Relative comparison with tolerance `epsilon`.
    ///
    /// Values that compare equal are always nearly equal (this includes
    /// same-signed infinities). Near zero, where a relative error is
    /// meaningless, the absolute difference is scaled against the
    /// smallest normal `f64` instead.
    #[allow(clippy::float_cmp, reason = "exact equality is the fast path")]
    pub fn nearly_equal(self, rhs: Float64, epsilon: f64) -> bool {
        let (a, b) = (self.0, rhs.0);
        if a == b {
            return true;
        }

        let diff = (a - b).abs();
        if a == 0.0 || b == 0.0 || diff < f64::MIN_POSITIVE {
            return diff < epsilon * f64::MIN_POSITIVE;
        }

        diff / (a.abs() + b.abs()) < epsilon
    }
}

macro_rules! float64_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Float64 {
                #[inline]
                fn from(value: $t) -> Self {
                    Float64(f64::from(value))
                }
            }
        )*
    };
}

float64_from!(f32, f64, i8, i16, i32, u8, u16, u32);

/// Parse text as a floating point number using string-to-number rules.
///
/// The accepted shape is `[+-]?digits(.digits)?([eE][+-]?digits)?`.
/// An empty string yields `0.0`; anything that does not fit the shape,
/// or has no digits where they are required, yields NaN. Spellings such
/// as `inf` that `str::parse` would accept are rejected.
pub fn parse_float64(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    if !has_float_shape(text.as_bytes()) {
        return f64::NAN;
    }
    text.parse().unwrap_or(f64::NAN)
}

fn has_float_shape(bytes: &[u8]) -> bool {
    let mut i = 0;
    let skip_digits = |i: &mut usize| {
        while bytes.get(*i).is_some_and(u8::is_ascii_digit) {
            *i += 1;
        }
    };

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    skip_digits(&mut i);
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        skip_digits(&mut i);
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        skip_digits(&mut i);
    }
    i == bytes.len()
}

#[cfg(test)]
mod tests;
