#![no_std]

pub mod animator;
pub mod app;
pub mod buttons;
pub mod color;
pub mod color_cycle;
pub mod console;
pub mod delay;
pub mod display;
pub mod error;
pub mod leds;
pub mod mmio;
pub mod pwm;

pub use animator::{AnimationSummary, AnimatorConfig, LedAnimator};
pub use app::{AppConfig, Badge, run};
pub use buttons::{ButtonPort, Buttons, wait_for_release};
pub use color_cycle::{ChannelRamp, ColorCycle, Direction};
pub use console::{Console, ConsoleGreeting};
pub use display::{CacheFlush, DisplayConfig, GfxRegister, GfxRegisters, Layers};
pub use error::Error;
pub use leds::{Column, LedMatrix};

pub use color::Rgb;
pub use embassy_time::Duration;
