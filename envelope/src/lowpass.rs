use super::{Error, Filter, Sample, Q15, Q31};

/// First order exponential smoothing.
///
/// `y[n] = y[n-1] + k * (x[n] - y[n-1])`
///
/// The state is kept with 15 fractional bits below sample resolution so that
/// small coefficients still move it. The coefficient `k` is a Q31 fraction.
/// The update forms the full 64 bit product of the difference and `k` before
/// shifting back down.
#[derive(Copy, Clone, Debug)]
pub struct LowPass {
    k: Q31,
    y1: Q15,
}

impl LowPass {
    /// Create a smoothing stage from a coefficient `t` in `(0, 1]`.
    ///
    /// `t = 1` passes the input through, small `t` smooth heavily.
    pub fn new(t: f64) -> Result<Self, Error> {
        if !(t > 0. && t <= 1.) {
            return Err(Error::Coefficient);
        }
        Self::from_coefficient(Q31::from_f64(t))
    }

    /// Create a smoothing stage from a raw Q31 coefficient in `(0, 2^31]`.
    pub fn from_coefficient(k: Q31) -> Result<Self, Error> {
        if !(Q31::default() < k && k <= Q31::ONE) {
            return Err(Error::Coefficient);
        }
        Ok(Self {
            k,
            y1: Q15::default(),
        })
    }

    /// The smoothing coefficient.
    pub fn coefficient(&self) -> Q31 {
        self.k
    }
}

impl Filter for LowPass {
    #[inline]
    fn update(&mut self, x: Sample) -> Sample {
        let x = Q15::from_sample(x);
        self.y1 += (x - self.y1).scale(self.k);
        self.y1.to_sample()
    }
}
