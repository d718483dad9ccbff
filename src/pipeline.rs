//! The breath envelope pipeline.
//!
//! Differentiate to bring out rate of change, square to rectify and emphasize
//! large swings, average twice for a triangular smoothing window, then smooth
//! exponentially twice to get a slowly varying amplitude.
use envelope::{
    chain, next_power_of_two, Chain, Derivative, LowPass, Squared, Tma,
};

use crate::design_parameters::{SMOOTHING, WINDOW};

/// Moving average stage of the pipeline.
pub type Window = Tma<{ next_power_of_two(WINDOW) }>;

/// The composed pipeline type.
pub type Envelope = Chain<
    Derivative,
    Chain<Squared, Chain<Window, Chain<Window, Chain<LowPass, LowPass>>>>,
>;

/// Build a fresh pipeline.
pub fn envelope() -> Result<Envelope, envelope::Error> {
    Ok(chain!(
        Derivative::new(),
        Squared,
        Window::new(),
        Window::new(),
        LowPass::new(SMOOTHING)?,
        LowPass::new(SMOOTHING)?,
    ))
}

#[cfg(test)]
mod test {
    use super::*;
    use envelope::{Filter, Sample};
    use rand_core::{RngCore, SeedableRng};
    use rand_xorshift::XorShiftRng;

    fn run(seed: u64) -> Vec<Sample> {
        let mut rng = XorShiftRng::seed_from_u64(seed);
        let mut p = envelope().unwrap();
        (0..10_000).map(|_| p.update(rng.next_u32() as Sample)).collect()
    }

    #[test]
    fn window_rounding() {
        assert_eq!(Window::new().window(), 128);
    }

    #[test]
    fn deterministic() {
        assert_eq!(run(0x5eed), run(0x5eed));
        assert_ne!(run(0x5eed), run(0x5eee));
    }

    #[test]
    fn silence() {
        let mut p = envelope().unwrap();
        assert!((0..10_000).all(|_| p.update(-1234) == 0));
    }

    #[test]
    fn output_is_non_negative() {
        assert!(run(7).iter().all(|&y| y >= 0));
    }
}
