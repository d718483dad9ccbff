//! Compile-time configuration parameters.

/// Sampling Frequency
///
/// The rate at which the microphone ADC is sampled and the envelope pipeline is
/// advanced.
///
/// # Units
/// Hz
pub const SAMPLE_RATE: u32 = 4096;

/// ADC resolution in bits. Raw codes are unsigned and centered at half scale.
pub const ADC_BITS: u32 = 12;

/// Requested length of each moving average window, in samples.
///
/// The buffer is rounded up to a power of two.
pub const WINDOW: usize = 128;

/// Exponential smoothing coefficient of each low pass stage.
pub const SMOOTHING: f64 = 1.0 / 512.0;

/// Status display refresh period.
///
/// # Units
/// ms
pub const DISPLAY_PERIOD: u32 = 100;

/// Rate of outbound amplitude notifications.
///
/// # Units
/// Hz
pub const NOTIFY_RATE: u32 = 30;

/// Maximum drift of the notification loop from its schedule before it
/// resynchronizes instead of catching up.
///
/// # Units
/// ms
pub const MAX_RUNAHEAD: u32 = 1000;

/// Title line of the status display.
pub const TITLE: &str = "BREATHOMETER";

/// Name the device advertises under.
pub const DEVICE_NAME: &str = "Breathometer";
