//! Run-time settings.
//!
//! # Design
//! Settings are loaded once at start-up from a JSON document and are fixed
//! afterwards. Every entry is optional: missing entries keep their defaults
//! from [crate::design_parameters]. The filter pipeline itself is not
//! configurable at run time.
use serde::{Deserialize, Serialize};

use crate::design_parameters::{
    DEVICE_NAME, DISPLAY_PERIOD, MAX_RUNAHEAD, NOTIFY_RATE, SAMPLE_RATE,
};
use crate::pacer::Duration;
use crate::signal;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Name the device advertises under.
    pub name: heapless::String<32>,

    /// ADC sampling rate in Hz.
    pub sample_rate: u32,

    /// Status display refresh period in ms.
    pub display_period: u32,

    /// Notification rate in Hz.
    pub notify_rate: u32,

    /// Notification loop resynchronization threshold in ms.
    pub max_runahead: u32,

    /// Test signal used in place of the microphone.
    pub signal: signal::Config,
}

impl Default for Settings {
    fn default() -> Self {
        let mut name = heapless::String::new();
        // The default name is statically known to fit.
        name.push_str(DEVICE_NAME).ok();
        Self {
            name,
            sample_rate: SAMPLE_RATE,
            display_period: DISPLAY_PERIOD,
            notify_rate: NOTIFY_RATE,
            max_runahead: MAX_RUNAHEAD,
            signal: signal::Config::default(),
        }
    }
}

/// Represents the errors that can occur when loading settings.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// The document is not valid settings JSON.
    #[error("Malformed settings: {0:?}")]
    Json(serde_json_core::de::Error),
    /// The sampling rate is zero or above 1 MHz.
    #[error("Invalid sample rate")]
    SampleRate,
    /// The notification rate is zero or above the sampling rate.
    #[error("Invalid notification rate")]
    NotifyRate,
    /// The display period is zero.
    #[error("Invalid display period")]
    DisplayPeriod,
    /// The test signal configuration is invalid.
    #[error("Invalid signal: {0}")]
    Signal(#[from] signal::Error),
}

impl Settings {
    /// Parse and validate settings from JSON.
    pub fn load(json: &[u8]) -> Result<Self, Error> {
        let (settings, _): (Self, _) =
            serde_json_core::from_slice(json).map_err(Error::Json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !(1..=1_000_000).contains(&self.sample_rate) {
            return Err(Error::SampleRate);
        }
        if !(1..=self.sample_rate).contains(&self.notify_rate) {
            return Err(Error::NotifyRate);
        }
        if self.display_period == 0 {
            return Err(Error::DisplayPeriod);
        }
        self.signal.build()?;
        Ok(())
    }

    pub fn display_period(&self) -> Duration {
        Duration::millis(self.display_period as u64)
    }

    pub fn notify_period(&self) -> Duration {
        Duration::from_ticks(1_000_000 / self.notify_rate as u64)
    }

    pub fn max_runahead(&self) -> Duration {
        Duration::millis(self.max_runahead as u64)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert!(s.validate().is_ok());
        assert_eq!(s.name, "Breathometer");
        assert_eq!(s.notify_period(), Duration::micros(33_333));
        assert_eq!(Settings::load(b"{}").unwrap(), s);
    }

    #[test]
    fn partial() {
        let json = concat!(
            r#"{"name":"Lab","notify_rate":10,"#,
            r#""signal":{"signal":"WhiteNoise","seed":3}}"#
        );
        let s = Settings::load(json.as_bytes()).unwrap();
        assert_eq!(s.name, "Lab");
        assert_eq!(s.notify_rate, 10);
        assert_eq!(s.sample_rate, SAMPLE_RATE);
        assert_eq!(s.signal.signal, signal::Signal::WhiteNoise);
        assert_eq!(s.signal.seed, 3);
        assert_eq!(s.signal.period, signal::Config::default().period);
    }

    #[test]
    fn invalid() {
        assert!(matches!(Settings::load(b"{"), Err(Error::Json(_))));
        assert_eq!(
            Settings::load(br#"{"sample_rate":0}"#),
            Err(Error::SampleRate)
        );
        assert_eq!(
            Settings::load(br#"{"sample_rate":20,"notify_rate":30}"#),
            Err(Error::NotifyRate)
        );
        assert_eq!(
            Settings::load(br#"{"display_period":0}"#),
            Err(Error::DisplayPeriod)
        );
        assert_eq!(
            Settings::load(br#"{"signal":{"period":0}}"#),
            Err(Error::Signal(signal::Error::Period))
        );
    }
}
