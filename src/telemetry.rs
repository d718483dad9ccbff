//! Data shared between the sampling context and the lower-rate reporting
//! contexts.
//!
//! # Design
//! The sampler is the single writer. It overwrites the latest amplitude once
//! per sample and counts processed samples. Readers (status display, notifier)
//! poll at their own cadence and only ever see the most recently completed
//! value. Nothing is queued and no side ever blocks.
use core::sync::atomic::{AtomicI16, AtomicU32, Ordering};

use envelope::Sample;
use serde::Serialize;

/// Single-slot, most-recent-value store.
#[derive(Debug, Default)]
pub struct LatestValue(AtomicI16);

impl LatestValue {
    pub const fn new() -> Self {
        Self(AtomicI16::new(0))
    }

    #[inline]
    pub fn set(&self, value: Sample) {
        self.0.store(value, Ordering::Relaxed);
    }

    pub fn get(&self) -> Sample {
        self.0.load(Ordering::Relaxed)
    }
}

/// Number of samples processed since the last report.
#[derive(Debug, Default)]
pub struct SampleCounter(AtomicU32);

impl SampleCounter {
    pub const fn new() -> Self {
        Self(AtomicU32::new(0))
    }

    #[inline]
    pub fn increment(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the count and restart counting from zero.
    pub fn take(&self) -> u32 {
        self.0.swap(0, Ordering::Relaxed)
    }
}

/// An amplitude notification as sent to connected clients.
///
/// # Format
/// Four bytes, big-endian: the magic word `0xBEEF` followed by the amplitude.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub amplitude: Sample,
}

impl Frame {
    /// Magic first bytes identifying an amplitude frame.
    pub const MAGIC: u16 = 0xBEEF;

    /// Serialized frame size in bytes.
    pub const SIZE: usize = 4;

    pub fn new(amplitude: Sample) -> Self {
        Self { amplitude }
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let [m0, m1] = Self::MAGIC.to_be_bytes();
        let [a0, a1] = self.amplitude.to_be_bytes();
        [m0, m1, a0, a1]
    }

    /// Parse a received frame. Trailing bytes are ignored.
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        match data {
            [m0, m1, a0, a1, ..]
                if u16::from_be_bytes([*m0, *m1]) == Self::MAGIC =>
            {
                Some(Self::new(Sample::from_be_bytes([*a0, *a1])))
            }
            _ => None,
        }
    }
}

/// The periodically reported device state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Telemetry {
    /// Most recent envelope amplitude.
    pub amplitude: Sample,
    /// Samples processed since the previous report.
    pub samples: u32,
    /// Whether a client is connected.
    pub connected: bool,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn latest_value_overwrites() {
        let slot = LatestValue::new();
        assert_eq!(slot.get(), 0);
        slot.set(5);
        slot.set(-7);
        assert_eq!(slot.get(), -7);
        assert_eq!(slot.get(), -7);
    }

    #[test]
    fn counter_take_resets() {
        let count = SampleCounter::new();
        for _ in 0..136 {
            count.increment();
        }
        assert_eq!(count.take(), 136);
        assert_eq!(count.take(), 0);
    }

    #[test]
    fn frame_layout() {
        assert_eq!(Frame::new(0x1234).to_bytes(), [0xBE, 0xEF, 0x12, 0x34]);
        assert_eq!(Frame::new(-2).to_bytes(), [0xBE, 0xEF, 0xFF, 0xFE]);
    }

    #[test]
    fn frame_parse() {
        assert_eq!(
            Frame::from_bytes(&[0xBE, 0xEF, 0x01, 0x02, 0xAA]),
            Some(Frame::new(0x0102))
        );
        assert_eq!(Frame::from_bytes(&[0xBE, 0xEF, 0x01]), None);
        assert_eq!(Frame::from_bytes(&[0xEF, 0xBE, 0x01, 0x02]), None);
        let frame = Frame::new(-0x7fff);
        assert_eq!(Frame::from_bytes(&frame.to_bytes()), Some(frame));
    }

    #[test]
    fn telemetry_json() {
        let t = Telemetry {
            amplitude: 42,
            samples: 136,
            connected: true,
        };
        let json: heapless::String<64> =
            serde_json_core::to_string(&t).unwrap();
        assert_eq!(json, r#"{"amplitude":42,"samples":136,"connected":true}"#);
    }
}
