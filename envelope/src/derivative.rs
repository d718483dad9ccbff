use super::{clamped_cast, Accu, Filter, Sample};

/// First difference, halved.
///
/// `y[n] = (x[n] - x[n-1]) >> 1`. The halving keeps the largest possible
/// difference within the sample range.
#[derive(Copy, Clone, Debug, Default)]
pub struct Derivative {
    x1: Accu,
}

impl Derivative {
    pub const fn new() -> Self {
        Self { x1: 0 }
    }
}

impl Filter for Derivative {
    #[inline]
    fn update(&mut self, x: Sample) -> Sample {
        let x = x as Accu;
        let dx = (x - self.x1) >> 1;
        self.x1 = x;
        clamped_cast(dx)
    }
}
