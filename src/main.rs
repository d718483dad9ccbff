//! Host runner.
//!
//! Drives the envelope pipeline from a test signal at the configured sampling
//! rate, refreshes the status display in the log, and writes notification
//! frames to stdout as hex, one per line. Log output goes to stderr so stdout
//! carries frames only.
//!
//! Usage: `breathometer [settings.json]`
use std::io::Write;
use std::time::{Duration as StdDuration, Instant as StdInstant};
use std::{env, fs, io, thread};

use log::LevelFilter;
use simple_logger::SimpleLogger;

use breathometer::{
    design_parameters::TITLE,
    display::{Panel, Screen, StatusDisplay},
    notifier::{Connection, Link, Notifier},
    pacer, pipeline,
    sampler::Sampler,
    settings::Settings,
    telemetry::{LatestValue, SampleCounter},
};

static AMPLITUDE: LatestValue = LatestValue::new();
static SAMPLES: SampleCounter = SampleCounter::new();
static CONNECTION: Connection = Connection::new();

/// Notification transport writing frames as hex lines.
struct HexLink<'a, W> {
    connection: &'a Connection,
    out: W,
}

impl<W: Write> Link for HexLink<'_, W> {
    type Error = io::Error;

    fn is_connected(&self) -> bool {
        self.connection.is_connected()
    }

    fn notify(&mut self, payload: &[u8]) -> Result<(), io::Error> {
        for byte in payload {
            write!(self.out, "{byte:02X}")?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// Renders the status screen as a log line.
struct LogPanel;

impl LogPanel {
    const WIDTH: u8 = 32;
}

impl Panel for LogPanel {
    type Error = core::convert::Infallible;

    fn draw(&mut self, screen: &Screen<'_>) -> Result<(), Self::Error> {
        let bar = "#".repeat(screen.fill(Self::WIDTH) as usize);
        log::info!(
            "{} | {} | [{bar:<width$}]",
            screen.title,
            screen.status,
            width = Self::WIDTH as usize
        );
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()?;

    let settings = match env::args().nth(1) {
        Some(path) => Settings::load(&fs::read(path)?)?,
        None => Settings::default(),
    };
    log::info!("{settings:?}");

    let start = StdInstant::now();
    let now =
        move || pacer::Instant::from_ticks(start.elapsed().as_micros() as u64);

    let mut source = settings.signal.build()?;
    let mut sampler = Sampler::new(pipeline::envelope()?, &AMPLITUDE, &SAMPLES);
    let sample_rate = settings.sample_rate as u64;
    thread::Builder::new()
        .name("sampler".into())
        .spawn(move || {
            // Stand-in for the sampling timer interrupt: process every tick
            // that has come due.
            let mut ticks = 0;
            loop {
                let due = now().ticks() * sample_rate / 1_000_000;
                for code in source.by_ref().take((due - ticks) as usize) {
                    sampler.process(code);
                }
                ticks = due;
                thread::sleep(StdDuration::from_millis(1));
            }
        })?;

    log::info!("Advertising as {}", settings.name);
    // stdout is always listening.
    CONNECTION.set(true);

    let display_period =
        StdDuration::from_micros(settings.display_period().ticks());
    thread::Builder::new()
        .name("display".into())
        .spawn(move || {
            let mut display = StatusDisplay::new(TITLE);
            let mut panel = LogPanel;
            loop {
                let screen =
                    display.update(CONNECTION.is_connected(), AMPLITUDE.get());
                if let Err(e) = panel.draw(&screen) {
                    log::warn!("Display update failed: {e:?}");
                }
                thread::sleep(display_period);
            }
        })?;

    let link = HexLink {
        connection: &CONNECTION,
        out: io::stdout().lock(),
    };
    let mut notifier = Notifier::new(
        link,
        &AMPLITUDE,
        &SAMPLES,
        settings.notify_period(),
        settings.max_runahead(),
    );
    loop {
        if let (_, Some(wait)) = notifier.poll(now()) {
            thread::sleep(StdDuration::from_micros(wait.ticks()));
        }
    }
}
