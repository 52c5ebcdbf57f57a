//! LED color-cycle animator
//!
//! Renders the color cycle through the three LED columns, one frame at a
//! time, until the exit button is pressed.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use log::trace;

use crate::buttons::{ButtonPort, Buttons};
use crate::color::Rgb;
use crate::color_cycle::ColorCycle;
use crate::delay::delay_for;
use crate::leds::{Column, LedMatrix};
use crate::pwm::render_column;

/// Default pause after each column pass
pub const DEFAULT_COLUMN_DELAY: Duration = Duration::from_millis(1);

/// Configuration for the animator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimatorConfig {
    /// Buttons that stop the animation
    pub exit: Buttons,
    /// Pause after each column pass
    pub column_delay: Duration,
    /// Starting intensities, all channels increasing
    pub start: Rgb,
}

impl AnimatorConfig {
    pub const DEFAULT: Self = Self {
        exit: Buttons::A,
        column_delay: DEFAULT_COLUMN_DELAY,
        start: crate::color_cycle::DEFAULT_START,
    };
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// What the animation did before it was stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSummary {
    /// Number of fully rendered frames
    pub frames: u32,
    /// Intensities at exit
    pub color: Rgb,
    /// Button state that stopped the loop
    pub exit_buttons: Buttons,
}

/// Busy-wait software PWM animator
pub struct LedAnimator<L, B, D> {
    leds: L,
    buttons: B,
    delay: D,
    config: AnimatorConfig,
    cycle: ColorCycle,
    frames: u32,
}

impl<L, B, D> LedAnimator<L, B, D>
where
    L: LedMatrix,
    B: ButtonPort,
    D: DelayNs,
{
    pub fn new(leds: L, buttons: B, delay: D, config: AnimatorConfig) -> Self {
        Self {
            leds,
            buttons,
            delay,
            cycle: ColorCycle::new(config.start),
            config,
            frames: 0,
        }
    }

    /// Render frames until an exit button is pressed
    ///
    /// The buttons are sampled before every frame, so a press already held
    /// at the start renders nothing.
    pub fn run(&mut self) -> AnimationSummary {
        loop {
            let pressed = self.buttons.pressed();
            if pressed.intersects(self.config.exit) {
                return AnimationSummary {
                    frames: self.frames,
                    color: self.cycle.color(),
                    exit_buttons: pressed,
                };
            }
            self.frame();
        }
    }

    /// Render one frame and advance the color cycle
    pub fn frame(&mut self) {
        let color = self.cycle.color();
        trace!(
            "frame {}: r={:#04x} g={:#04x} b={:#04x}",
            self.frames, color.r, color.g, color.b
        );

        for column in Column::ALL {
            render_column(&mut self.leds, column, color);
            delay_for(&mut self.delay, self.config.column_delay);
        }

        self.cycle.advance();
        self.frames = self.frames.wrapping_add(1);
    }

    pub fn color_cycle(&self) -> &ColorCycle {
        &self.cycle
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Give back the hardware handles
    pub fn release(self) -> (L, B, D) {
        (self.leds, self.buttons, self.delay)
    }
}
