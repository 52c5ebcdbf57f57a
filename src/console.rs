//! Text console
//!
//! The console device draws characters into tile layer A. Cursor placement
//! and clearing are done with escape sequences embedded in the text stream.

use core::fmt::{self, Write};

const ESC: char = '\x1b';

/// Where and what to print once the display is set up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleGreeting {
    pub x: u16,
    pub y: u16,
    pub text: &'static str,
}

impl ConsoleGreeting {
    pub const DEFAULT: Self = Self {
        x: 2,
        y: 5,
        text: "Hello World!",
    };
}

impl Default for ConsoleGreeting {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Escape-sequence writer over a character device
///
/// The underlying writer must be unbuffered, otherwise nothing shows up until
/// its buffer fills.
pub struct Console<W> {
    out: W,
}

impl<W: Write> Console<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Clear the console, including any tiles already on layer A
    pub fn clear(&mut self) -> fmt::Result {
        write!(self.out, "{ESC}C")
    }

    /// Set the cursor column
    pub fn set_x(&mut self, x: u16) -> fmt::Result {
        write!(self.out, "{ESC}{x}X")
    }

    /// Set the cursor row
    pub fn set_y(&mut self, y: u16) -> fmt::Result {
        write!(self.out, "{ESC}{y}Y")
    }

    pub fn move_to(&mut self, x: u16, y: u16) -> fmt::Result {
        self.set_x(x)?;
        self.set_y(y)
    }

    /// Print a greeting at its position
    pub fn greet(&mut self, greeting: &ConsoleGreeting) -> fmt::Result {
        self.move_to(greeting.x, greeting.y)?;
        self.out.write_str(greeting.text)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Write for Console<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.out.write_str(s)
    }
}
