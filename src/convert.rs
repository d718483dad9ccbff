use envelope::{clamped_cast, Accu, Sample};

use crate::design_parameters::ADC_BITS;

/// A raw microphone ADC code.
///
/// Codes are unsigned, `ADC_BITS` wide, with silence at half scale.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AdcCode(pub u16);

impl AdcCode {
    /// The code of a silent input.
    pub const MIDSCALE: u16 = 1 << (ADC_BITS - 1);

    /// Left shift taking an ADC code difference to sample resolution.
    pub const SHIFT: u32 = Sample::BITS - ADC_BITS;
}

impl From<AdcCode> for Sample {
    /// Center the code and scale it to full sample range.
    fn from(code: AdcCode) -> Sample {
        let centered = code.0 as Accu - AdcCode::MIDSCALE as Accu;
        clamped_cast(centered << AdcCode::SHIFT)
    }
}
