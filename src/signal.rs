//! Test signal source standing in for the microphone.
use rand_core::{RngCore, SeedableRng};
use rand_xorshift::XorShiftRng;
use serde::{Deserialize, Serialize};

use crate::convert::AdcCode;
use crate::design_parameters::ADC_BITS;

/// Types of signals that can be generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum Signal {
    /// A constant mid-scale code.
    Silence,
    /// Uniform white noise.
    WhiteNoise,
    /// White noise switched on for the first half of every period.
    Breath,
}

/// Test signal configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// The signal type that should be generated. See [Signal] variants.
    pub signal: Signal,

    /// Peak deviation from mid-scale in ADC codes.
    pub amplitude: u16,

    /// Breath cycle length in samples.
    pub period: u32,

    /// Random number generator seed.
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            signal: Signal::Breath,
            amplitude: 1 << (ADC_BITS - 3),
            period: 4 << 12,
            seed: 0,
        }
    }
}

/// Represents the errors that can occur when configuring the signal source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The amplitude exceeds half the ADC range.
    #[error("Invalid amplitude")]
    Amplitude,
    /// The period is zero.
    #[error("Invalid period")]
    Period,
}

impl Config {
    pub fn build(&self) -> Result<Source, Error> {
        if self.amplitude > AdcCode::MIDSCALE {
            return Err(Error::Amplitude);
        }
        if self.period == 0 {
            return Err(Error::Period);
        }
        Ok(Source {
            signal: self.signal,
            amplitude: self.amplitude,
            period: self.period,
            phase: 0,
            rng: XorShiftRng::seed_from_u64(self.seed),
        })
    }
}

/// An endless stream of ADC codes.
#[derive(Clone, Debug)]
pub struct Source {
    signal: Signal,
    amplitude: u16,
    period: u32,
    phase: u32,
    rng: XorShiftRng,
}

impl Source {
    fn noise(&mut self) -> u16 {
        let span = 2 * self.amplitude as u32 + 1;
        let offset = (self.rng.next_u32() as u64 * span as u64 >> 32) as u16;
        AdcCode::MIDSCALE - self.amplitude + offset
    }
}

impl Iterator for Source {
    type Item = AdcCode;

    #[inline]
    fn next(&mut self) -> Option<AdcCode> {
        let code = match self.signal {
            Signal::Silence => AdcCode::MIDSCALE,
            Signal::WhiteNoise => self.noise(),
            Signal::Breath => {
                if self.phase < self.period / 2 {
                    self.noise()
                } else {
                    AdcCode::MIDSCALE
                }
            }
        };
        self.phase = (self.phase + 1) % self.period;
        Some(AdcCode(code))
    }
}
