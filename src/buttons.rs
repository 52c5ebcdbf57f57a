//! Button state register

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use crate::delay::delay_for;

/// Bitmask of pressed buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Buttons(pub u32);

impl Buttons {
    pub const NONE: Self = Self(0);
    pub const UP: Self = Self(1 << 0);
    pub const DOWN: Self = Self(1 << 1);
    pub const LEFT: Self = Self(1 << 2);
    pub const RIGHT: Self = Self(1 << 3);
    pub const B: Self = Self(1 << 4);
    pub const A: Self = Self(1 << 5);
    pub const SELECT: Self = Self(1 << 6);
    pub const START: Self = Self(1 << 7);

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns true if no button is pressed
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if any of the buttons in `other` is pressed
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl core::ops::BitOr for Buttons {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

/// Button state register
pub trait ButtonPort {
    /// Sample the currently pressed buttons
    fn pressed(&mut self) -> Buttons;
}

impl<T: ButtonPort + ?Sized> ButtonPort for &mut T {
    fn pressed(&mut self) -> Buttons {
        T::pressed(self)
    }
}

/// Block until no button is pressed
///
/// Samples the buttons every `poll_interval`. Returns the number of samples
/// that still showed a pressed button.
pub fn wait_for_release<B, D>(buttons: &mut B, delay: &mut D, poll_interval: Duration) -> u32
where
    B: ButtonPort + ?Sized,
    D: DelayNs + ?Sized,
{
    let mut held = 0_u32;
    while !buttons.pressed().is_empty() {
        held = held.saturating_add(1);
        delay_for(delay, poll_interval);
    }
    held
}
