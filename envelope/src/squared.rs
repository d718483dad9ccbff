use super::{clamped_cast, Accu, Filter, Sample};

/// Stateless square, scaled down by `2^15`.
///
/// The output is never negative.
#[derive(Copy, Clone, Debug, Default)]
pub struct Squared;

impl Filter for Squared {
    #[inline]
    fn update(&mut self, x: Sample) -> Sample {
        let x = x as Accu;
        clamped_cast((x * x) >> 15)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn even_and_non_negative() {
        let mut s = Squared;
        assert_eq!(s.update(0), 0);
        for k in -0x7fff..=0x7fff {
            let y = s.update(k);
            assert!(y >= 0);
            assert_eq!(y, s.update(-k));
        }
    }

    #[test]
    fn scaling() {
        let mut s = Squared;
        assert_eq!(s.update(181), 0);
        assert_eq!(s.update(182), 1);
        assert_eq!(s.update(0x4000), 0x2000);
        assert_eq!(s.update(-0x4000), 0x2000);
    }

    #[test]
    fn saturates_at_full_scale() {
        let mut s = Squared;
        assert_eq!(s.update(0x7fff), 0x7ffe);
        assert_eq!(s.update(Sample::MIN), 0x7fff);
    }
}
