use core::ops::{Add, AddAssign, Sub};

use super::{clamped_cast, Accu, Sample};

/// Signed fixed-point value with `F` fractional bits.
///
/// The scale is carried in the type so that shift amounts cannot be mixed up:
/// a `Fixed<F>` with bits `v` represents `v / 2^F`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fixed<const F: u32>(i64);

/// Sample-resolution value with 15 bits of additional fraction.
pub type Q15 = Fixed<15>;

/// Fraction with denominator `2^31`.
pub type Q31 = Fixed<31>;

impl<const F: u32> Fixed<F> {
    /// The value 1.
    pub const ONE: Self = Self(1 << F);

    pub const fn from_bits(bits: i64) -> Self {
        Self(bits)
    }

    pub const fn to_bits(self) -> i64 {
        self.0
    }

    /// Promote a sample to this scale (`x << F`).
    #[inline]
    pub fn from_sample(x: Sample) -> Self {
        Self((x as i64) << F)
    }

    /// Drop the fraction (rounding towards negative infinity) and saturate to a
    /// sample.
    #[inline]
    pub fn to_sample(self) -> Sample {
        let y = self.0 >> F;
        clamped_cast(y.clamp(Accu::MIN as i64, Accu::MAX as i64) as Accu)
    }

    /// Convert from floating point, truncating towards zero.
    ///
    /// Not meant for the sample path.
    pub fn from_f64(x: f64) -> Self {
        Self((x * (1i64 << F) as f64) as i64)
    }

    /// Multiply by a fixed-point factor: `(self * k) >> G`.
    ///
    /// The full product is formed before shifting. The caller must ensure it
    /// fits 64 bits.
    #[inline]
    pub fn scale<const G: u32>(self, k: Fixed<G>) -> Self {
        Self((self.0 * k.0) >> G)
    }
}

impl<const F: u32> Add for Fixed<F> {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<const F: u32> Sub for Fixed<F> {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl<const F: u32> AddAssign for Fixed<F> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}
