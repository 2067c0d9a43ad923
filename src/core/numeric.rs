use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Rem, Sub};

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Arithmetic capability set required from a chart value type.
///
/// Geometry math happens in `f64`; `to_f64` is the single lossy bridge into
/// that space. Integer types saturate instead of overflowing in `from_i64`
/// and `add_saturating`.
pub trait NumericValue:
    Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
{
    /// Additive identity.
    fn zero() -> Self;

    fn from_i64(value: i64) -> Self;

    fn to_f64(self) -> f64;

    /// Addition clamped to the representable range.
    #[must_use]
    fn add_saturating(self, other: Self) -> Self;

    /// Returns the larger of `self` and zero.
    #[must_use]
    fn clamp_non_negative(self) -> Self {
        if self > Self::zero() { self } else { Self::zero() }
    }
}

macro_rules! impl_integer_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl NumericValue for $ty {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn from_i64(value: i64) -> Self {
                    <$ty>::try_from(value).unwrap_or(if value < 0 { <$ty>::MIN } else { <$ty>::MAX })
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn add_saturating(self, other: Self) -> Self {
                    self.saturating_add(other)
                }
            }
        )*
    };
}

macro_rules! impl_float_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl NumericValue for $ty {
                #[inline]
                fn zero() -> Self {
                    0.0
                }

                #[inline]
                fn from_i64(value: i64) -> Self {
                    value as $ty
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    f64::from(self)
                }

                #[inline]
                fn add_saturating(self, other: Self) -> Self {
                    self + other
                }
            }
        )*
    };
}

impl_integer_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_float_value!(f32, f64);

impl NumericValue for Decimal {
    fn zero() -> Self {
        Decimal::ZERO
    }

    fn from_i64(value: i64) -> Self {
        Decimal::from(value)
    }

    fn to_f64(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(0.0)
    }

    fn add_saturating(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

/// Sums values in the value type, saturating at its bounds.
pub fn sum_values<V: NumericValue>(values: impl IntoIterator<Item = V>) -> V {
    values
        .into_iter()
        .fold(V::zero(), |acc, value| acc.add_saturating(value))
}

/// Sums values in `f64`, the space geometry is computed in.
pub fn sum_values_f64<V: NumericValue>(values: impl IntoIterator<Item = V>) -> f64 {
    values.into_iter().map(NumericValue::to_f64).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn integer_and_float_types_convert_to_f64() {
        assert_eq!(7_u8.to_f64(), 7.0);
        assert_eq!((-3_i64).to_f64(), -3.0);
        assert_eq!(2.5_f32.to_f64(), 2.5);
        assert_eq!(<i32 as NumericValue>::from_i64(12), 12);
        assert_eq!(<f64 as NumericValue>::zero(), 0.0);
    }

    #[test]
    fn decimal_uses_exact_arithmetic_then_converts() {
        let a = Decimal::from_str("0.1").expect("decimal");
        let b = Decimal::from_str("0.2").expect("decimal");
        assert_eq!(sum_values([a, b]), Decimal::from_str("0.3").expect("decimal"));
        assert!((NumericValue::to_f64(sum_values([a, b])) - 0.3).abs() <= 1e-12);
    }

    #[test]
    fn narrow_integers_saturate_instead_of_overflowing() {
        assert_eq!(<i8 as NumericValue>::from_i64(128), i8::MAX);
        assert_eq!(<i8 as NumericValue>::from_i64(-500), i8::MIN);
        assert_eq!(<u8 as NumericValue>::from_i64(-1), 0);
        assert_eq!(sum_values([200_u8, 100]), u8::MAX);
        assert_eq!(sum_values([-100_i8, -100]), i8::MIN);
        assert_eq!(sum_values_f64([200_u8, 100]), 300.0);
    }

    #[test]
    fn clamp_non_negative_drops_negative_values() {
        assert_eq!((-4_i32).clamp_non_negative(), 0);
        assert_eq!(4_i32.clamp_non_negative(), 4);
        assert_eq!((-0.5_f64).clamp_non_negative(), 0.0);
    }
}
