//! Status display contents.
//!
//! The panel driver is external. This module decides what is shown: a title,
//! the connection status, and a bar proportional to the breath amplitude.
use core::fmt;

use envelope::Sample;

/// Right shift from amplitude to bar level.
pub const BAR_SHIFT: u32 = 6;

/// Bar level corresponding to a full bar.
pub const BAR_FULL: u16 = 256;

/// The connection status line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Connected,
    /// Waiting for a client, animated with one to three dots.
    Waiting(u8),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connected => f.write_str("Connected"),
            Self::Waiting(dots) => {
                let dots = (*dots).clamp(1, 3) as usize;
                write!(f, "Waiting{:<3}", &"..."[..dots])
            }
        }
    }
}

/// One frame of display content.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Screen<'a> {
    pub title: &'a str,
    pub status: Status,
    /// Bar level, 0 to [BAR_FULL].
    pub level: u16,
}

impl Screen<'_> {
    /// Filled width of a bar `width` pixels wide.
    pub fn fill(&self, width: u8) -> u8 {
        (width as u32 * self.level as u32 / BAR_FULL as u32) as u8
    }
}

/// Map an amplitude to a bar level.
///
/// Levels above [BAR_FULL] are clipped to 255.
pub fn bar_level(amplitude: Sample) -> u16 {
    let level = (amplitude >> BAR_SHIFT) as u16;
    if level > BAR_FULL {
        BAR_FULL - 1
    } else {
        level
    }
}

/// The display driver.
pub trait Panel {
    type Error: fmt::Debug;

    fn draw(&mut self, screen: &Screen<'_>) -> Result<(), Self::Error>;
}

/// Builds successive display frames.
#[derive(Clone, Debug)]
pub struct StatusDisplay<'a> {
    title: &'a str,
    dots: u8,
}

impl<'a> StatusDisplay<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title, dots: 1 }
    }

    /// Produce the next frame.
    ///
    /// The waiting animation advances only while disconnected.
    pub fn update(&mut self, connected: bool, amplitude: Sample) -> Screen<'a> {
        let status = if connected {
            Status::Connected
        } else {
            let status = Status::Waiting(self.dots);
            self.dots = self.dots % 3 + 1;
            status
        };
        Screen {
            title: self.title,
            status,
            level: bar_level(amplitude),
        }
    }
}
