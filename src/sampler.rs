//! Per-tick sample processing.
use envelope::{Filter, Sample};

use crate::convert::AdcCode;
use crate::telemetry::{LatestValue, SampleCounter};

/// The sampling tick handler.
///
/// Owns the filter pipeline. Each ADC code is converted, run through the
/// pipeline once, and the result published to the latest-value slot.
///
/// # Note
/// Processing must complete within one sample period. It neither blocks,
/// allocates, nor logs.
pub struct Sampler<'a, F> {
    filter: F,
    amplitude: &'a LatestValue,
    samples: &'a SampleCounter,
}

impl<'a, F: Filter> Sampler<'a, F> {
    pub fn new(
        filter: F,
        amplitude: &'a LatestValue,
        samples: &'a SampleCounter,
    ) -> Self {
        Self {
            filter,
            amplitude,
            samples,
        }
    }

    /// Process one ADC sample.
    #[inline]
    pub fn process(&mut self, code: AdcCode) -> Sample {
        let y = self.filter.update(Sample::from(code));
        self.amplitude.set(y);
        self.samples.increment();
        y
    }
}
