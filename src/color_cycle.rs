//! Color cycle state
//!
//! Three 8-bit intensities, each walking one step per frame in its own
//! direction. A channel turns around only when it lands exactly on zero,
//! which happens both when it decreases to zero and when it overflows from
//! 255 while increasing.

use crate::color::Rgb;

/// Initial intensities of the cycle, phase-shifted by a third of the range.
pub const DEFAULT_START: Rgb = Rgb {
    r: 0x00,
    g: 0x55,
    b: 0xAA,
};

/// Step direction of a single channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// +1 per frame
    #[default]
    Up,
    /// -1 per frame
    Down,
}

impl Direction {
    /// Signed step applied to the intensity
    pub const fn step(self) -> i8 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }

    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

/// One intensity value with its step direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelRamp {
    value: u8,
    direction: Direction,
}

impl ChannelRamp {
    pub const fn new(value: u8, direction: Direction) -> Self {
        Self { value, direction }
    }

    pub const fn value(self) -> u8 {
        self.value
    }

    pub const fn direction(self) -> Direction {
        self.direction
    }

    /// Move one step, reversing the direction if the value lands on zero.
    pub const fn advance(&mut self) {
        self.value = self.value.wrapping_add_signed(self.direction.step());
        if self.value == 0 {
            self.direction = self.direction.reversed();
        }
    }
}

/// The animated color: red, green and blue ramps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCycle {
    pub red: ChannelRamp,
    pub green: ChannelRamp,
    pub blue: ChannelRamp,
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self::new(DEFAULT_START)
    }
}

impl ColorCycle {
    /// Create a cycle starting at `start` with every channel increasing
    pub const fn new(start: Rgb) -> Self {
        Self {
            red: ChannelRamp::new(start.r, Direction::Up),
            green: ChannelRamp::new(start.g, Direction::Up),
            blue: ChannelRamp::new(start.b, Direction::Up),
        }
    }

    /// Current intensities
    pub const fn color(&self) -> Rgb {
        Rgb {
            r: self.red.value(),
            g: self.green.value(),
            b: self.blue.value(),
        }
    }

    /// Advance every channel by one step
    pub const fn advance(&mut self) {
        self.red.advance();
        self.green.advance();
        self.blue.advance();
    }

    /// Advance by `steps` frames
    pub fn advance_by(&mut self, steps: u32) {
        for _ in 0..steps {
            self.advance();
        }
    }
}
