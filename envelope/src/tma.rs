use super::{clamped_cast, size_as_bitshift, Accu, Filter, Sample};

/// Moving average over a power-of-two window.
///
/// The running sum is maintained incrementally: each update adds the new
/// sample and removes the one leaving the window, so the cost per sample is
/// constant. Two of these in series weight the input with a triangular
/// window.
///
/// `SIZE` is the buffer length and must be a power of two no larger than
/// `2^16`. Use [`tma!`](crate::tma) to build one for a requested window
/// length, which is rounded up to the next power of two.
#[derive(Clone, Debug)]
pub struct Tma<const SIZE: usize> {
    buffer: [Sample; SIZE],
    index: usize,
    accu: Accu,
}

impl<const SIZE: usize> Tma<SIZE> {
    const MASK: usize = SIZE - 1;

    /// `log2(SIZE)`
    pub const SHIFT: u32 = size_as_bitshift(SIZE);

    const VALID: () = assert!(
        SIZE.is_power_of_two() && SIZE <= 1 << 16,
        "buffer size must be a power of two no larger than 2^16"
    );

    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID;
        Self {
            buffer: [0; SIZE],
            index: 0,
            accu: 0,
        }
    }

    /// The number of samples averaged.
    pub const fn window(&self) -> usize {
        SIZE
    }
}

impl<const SIZE: usize> Default for Tma<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const SIZE: usize> Filter for Tma<SIZE> {
    #[inline]
    fn update(&mut self, x: Sample) -> Sample {
        self.accu += x as Accu - self.buffer[self.index] as Accu;
        self.buffer[self.index] = x;
        self.index = (self.index + 1) & Self::MASK;
        clamped_cast(self.accu >> Self::SHIFT)
    }
}

/// Build a [`Tma`] averaging over at least `$n` samples.
///
/// The window is rounded up to the next power of two: `tma!(100)` averages
/// over 128 samples. A zero window does not compile.
#[macro_export]
macro_rules! tma {
    ($n:expr) => {
        $crate::Tma::<{ $crate::next_power_of_two($n) }>::new()
    };
}
