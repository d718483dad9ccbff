/// One instantaneous measurement.
pub type Sample = i16;

/// Intermediate sums and products, wide enough that a single product of two
/// samples or a window of sample sums cannot wrap before being narrowed.
pub type Accu = i32;

/// Narrow an accumulator to a sample, saturating at `±0x7fff`.
///
/// Note that the lower bound is `-0x7fff`, not `Sample::MIN`: `-0x8000` is
/// never produced.
#[inline]
pub fn clamped_cast(x: Accu) -> Sample {
    if x <= -0x7fff {
        -0x7fff
    } else if x >= 0x7fff {
        0x7fff
    } else {
        x as Sample
    }
}

/// Round a buffer length up to the next power of two.
///
/// # Panics
/// On a zero length. In a const context this is a build error.
pub const fn next_power_of_two(n: usize) -> usize {
    assert!(n != 0, "zero-length buffer");
    n.next_power_of_two()
}

/// Base-2 exponent of `next_power_of_two(n)`.
pub const fn size_as_bitshift(n: usize) -> u32 {
    next_power_of_two(n).trailing_zeros()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn clamped_cast_passes_through() {
        for x in [-0x7fff, -1234, -1, 0, 1, 0x4000, 0x7ffe, 0x7fff] {
            assert_eq!(clamped_cast(x) as Accu, x);
        }
    }

    #[test]
    fn clamped_cast_saturates() {
        assert_eq!(clamped_cast(0x8000), 0x7fff);
        assert_eq!(clamped_cast(Accu::MAX), 0x7fff);
        assert_eq!(clamped_cast(-0x8000), -0x7fff);
        assert_eq!(clamped_cast(-0x8001), -0x7fff);
        assert_eq!(clamped_cast(Accu::MIN), -0x7fff);
    }

    #[test]
    fn min_sample_is_unreachable() {
        assert!((-0x10000..0x10000).all(|x| clamped_cast(x) != Sample::MIN));
    }

    #[test]
    fn power_of_two_sizing() {
        assert_eq!(next_power_of_two(1), 1);
        assert_eq!(next_power_of_two(2), 2);
        assert_eq!(next_power_of_two(3), 4);
        assert_eq!(next_power_of_two(100), 128);
        assert_eq!(next_power_of_two(128), 128);
        assert_eq!(next_power_of_two(129), 256);
        assert_eq!(size_as_bitshift(1), 0);
        assert_eq!(size_as_bitshift(100), 7);
        assert_eq!(size_as_bitshift(128), 7);
        assert_eq!(size_as_bitshift(129), 8);
    }

    #[test]
    #[should_panic]
    fn zero_length_is_rejected() {
        let n = core::hint::black_box(0);
        next_power_of_two(n);
    }
}
