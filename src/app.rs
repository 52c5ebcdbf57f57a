//! The badge application
//!
//! Sets up the display, prints a greeting on the console and runs the LED
//! animator until button A is pressed.

use core::fmt::Write;

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use log::{debug, info};

use crate::animator::{AnimationSummary, AnimatorConfig, LedAnimator};
use crate::buttons::{ButtonPort, wait_for_release};
use crate::console::{Console, ConsoleGreeting};
use crate::display::{self, CacheFlush, DisplayConfig, GfxRegisters};
use crate::error::Error;
use crate::leds::LedMatrix;

/// Default button poll interval while waiting for release
pub const DEFAULT_RELEASE_POLL: Duration = Duration::from_millis(1);

/// Configuration of the whole application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub greeting: ConsoleGreeting,
    pub animator: AnimatorConfig,
    /// Poll interval of the wait for all buttons to be released
    pub release_poll: Duration,
}

impl AppConfig {
    pub const DEFAULT: Self = Self {
        display: DisplayConfig::DEFAULT,
        greeting: ConsoleGreeting::DEFAULT,
        animator: AnimatorConfig::DEFAULT,
        release_poll: DEFAULT_RELEASE_POLL,
    };
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Peripherals the application drives
pub struct Badge<G, C, W, L, B, D> {
    /// Display controller
    pub gfx: G,
    /// Data cache
    pub cache: C,
    /// Unbuffered console device
    pub console: W,
    /// LED matrix
    pub leds: L,
    /// Button state
    pub buttons: B,
    /// Blocking delay
    pub delay: D,
}

/// Run the application to completion
///
/// `framebuffer` is zeroed and handed to the display; it has to hold at least
/// `width * height` bytes of the configured display.
pub fn run<G, C, W, L, B, D>(
    badge: &mut Badge<G, C, W, L, B, D>,
    framebuffer: &mut [u8],
    config: &AppConfig,
) -> Result<AnimationSummary, Error>
where
    G: GfxRegisters,
    C: CacheFlush,
    W: Write,
    L: LedMatrix,
    B: ButtonPort,
    D: DelayNs,
{
    info!("main running");

    // Only the background is visible while the framebuffer is being set up
    display::blank(&mut badge.gfx, config.display.background);

    framebuffer.fill(0);
    info!("framebuffer at {:p}", framebuffer.as_ptr());
    display::attach_framebuffer(&mut badge.gfx, &mut badge.cache, framebuffer, &config.display)?;

    // Drawn on tile layer A, over whatever tiles are already there
    Console::new(&mut badge.console).greet(&config.greeting)?;

    display::enable_layers(&mut badge.gfx, config.display.layers);

    info!("ready. Press a button to exit.");
    let held = wait_for_release(&mut badge.buttons, &mut badge.delay, config.release_poll);
    debug!("buttons released after {} polls", held);

    let summary = LedAnimator::new(
        &mut badge.leds,
        &mut badge.buttons,
        &mut badge.delay,
        config.animator,
    )
    .run();
    debug!("animation stopped after {} frames", summary.frames);

    info!("done. Bye!");
    Ok(summary)
}
