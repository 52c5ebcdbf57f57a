//! Software PWM pass over one LED column
//!
//! A column starts fully lit and is swept through 256 sub-steps. From the
//! sub-step equal to a channel's intensity on, that channel's bits are
//! cleared, so each channel stays lit for a number of sub-steps proportional
//! to its intensity.

use heapless::Vec;

use crate::color::Rgb;
use crate::leds::{ALL_ON, Channel, Column, LedMatrix};

/// Number of sub-steps in one column pass
pub const SUB_STEPS: u16 = 256;

/// Bits cleared from `threshold` on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate {
    pub threshold: u8,
    pub mask: u16,
}

/// Gates of every channel that has bits in the column
pub type GatePlan = Vec<Gate, 3>;

const fn intensity(color: Rgb, channel: Channel) -> u8 {
    match channel {
        Channel::Red => color.r,
        Channel::Green => color.g,
        Channel::Blue => color.b,
    }
}

/// Build the gates of `column` for the given intensities
///
/// Channels without bits in the column are skipped.
pub fn gate_plan(column: Column, color: Rgb) -> GatePlan {
    let masks = column.masks();
    Channel::ALL
        .into_iter()
        .filter_map(|channel| {
            let mask = masks.get(channel);
            (mask != 0).then(|| Gate {
                threshold: intensity(color, channel),
                mask,
            })
        })
        .collect()
}

/// Bit pattern left lit after sub-step `step` of a column pass
pub fn column_pattern(column: Column, color: Rgb, step: u8) -> u16 {
    gate_plan(column, color)
        .iter()
        .filter(|gate| step >= gate.threshold)
        .fold(ALL_ON, |pattern, gate| pattern & !gate.mask)
}

/// Run the PWM pass of one column on the LED registers
///
/// Selects the column, lights every bit and then sweeps the 256 sub-steps,
/// clearing a channel's bits on every sub-step at or past its threshold.
pub fn render_column<L: LedMatrix + ?Sized>(leds: &mut L, column: Column, color: Rgb) {
    let plan = gate_plan(column, color);

    leds.select_column(column);
    leds.write_pattern(ALL_ON);
    for step in 0..SUB_STEPS {
        for gate in &plan {
            if step >= u16::from(gate.threshold) {
                leds.clear_bits(gate.mask);
            }
        }
    }
}
