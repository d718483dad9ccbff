//! Periodic amplitude notifications to a connected client.
use core::sync::atomic::{AtomicBool, Ordering};

use crate::pacer::{Duration, Instant, Pacer};
use crate::telemetry::{Frame, LatestValue, SampleCounter, Telemetry};

/// Client connection state as reported by the transport.
#[derive(Debug, Default)]
pub struct Connection(AtomicBool);

impl Connection {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    pub fn set(&self, connected: bool) {
        self.0.store(connected, Ordering::Relaxed);
    }

    pub fn is_connected(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// The notification transport.
pub trait Link {
    type Error: core::fmt::Debug;

    /// Whether a client is currently subscribed.
    fn is_connected(&self) -> bool;

    /// Send one notification payload to the client.
    fn notify(&mut self, payload: &[u8]) -> Result<(), Self::Error>;
}

/// Reports the latest amplitude over a [Link] at a fixed rate.
pub struct Notifier<'a, L> {
    link: L,
    amplitude: &'a LatestValue,
    samples: &'a SampleCounter,
    pacer: Pacer,
}

impl<'a, L: Link> Notifier<'a, L> {
    /// # Args
    /// * `link` - The transport to notify clients through.
    /// * `amplitude` - The slot the sampler publishes to.
    /// * `samples` - The sampler's sample counter.
    /// * `period` - Notification period.
    /// * `max_runahead` - See [Pacer].
    pub fn new(
        link: L,
        amplitude: &'a LatestValue,
        samples: &'a SampleCounter,
        period: Duration,
        max_runahead: Duration,
    ) -> Self {
        Self {
            link,
            amplitude,
            samples,
            pacer: Pacer::new(period, max_runahead),
        }
    }

    pub fn link(&self) -> &L {
        &self.link
    }

    /// Run one notification cycle.
    ///
    /// # Returns
    /// The report that was made and how long to sleep before the next cycle.
    pub fn poll(&mut self, now: Instant) -> (Telemetry, Option<Duration>) {
        let telemetry = Telemetry {
            amplitude: self.amplitude.get(),
            samples: self.samples.take(),
            connected: self.link.is_connected(),
        };

        if log::log_enabled!(log::Level::Debug) {
            match serde_json_core::to_string::<_, 64>(&telemetry) {
                Ok(json) => log::debug!("{json}"),
                Err(e) => log::warn!("Failed to serialize telemetry: {e:?}"),
            }
        }

        if telemetry.connected {
            let frame = Frame::new(telemetry.amplitude);
            if let Err(e) = self.link.notify(&frame.to_bytes()) {
                log::warn!("Notification failed: {e:?}");
            }
        }

        (telemetry, self.pacer.poll(now))
    }
}
