//! LED matrix layout
//!
//! The badge drives its RGB LEDs as three multiplexed columns of 11 bits.
//! A column is selected first, then the bit pattern is written; every bit of
//! a column belongs to exactly one color channel.

/// All 11 bits of a column lit
pub const ALL_ON: u16 = 0x07FF;

/// Color channel of an LED bit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];
}

/// Bit masks of each color channel within one column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelMasks {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

impl ChannelMasks {
    pub const fn get(self, channel: Channel) -> u16 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }
}

/// One of the three LED columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    First,
    Second,
    Third,
}

impl Column {
    /// Columns in render order
    pub const ALL: [Self; 3] = [Self::First, Self::Second, Self::Third];

    /// Value of the column-select register
    pub const fn select(self) -> u8 {
        match self {
            Self::First => 0b001,
            Self::Second => 0b010,
            Self::Third => 0b100,
        }
    }

    pub const fn masks(self) -> ChannelMasks {
        match self {
            Self::First => ChannelMasks {
                red: 0b110_0001_0101,
                green: 0b001_1000_0000,
                blue: 0b000_0110_1010,
            },
            Self::Second => ChannelMasks {
                red: 0b001_1000_0000,
                green: 0b110_0111_1111,
                blue: 0,
            },
            Self::Third => ChannelMasks {
                red: 0b000_0110_1010,
                green: 0,
                blue: 0b111_1001_0101,
            },
        }
    }
}

/// LED column-select and bit-pattern registers
pub trait LedMatrix {
    /// Select the column the next pattern writes go to
    fn select_column(&mut self, column: Column);

    /// Write the bit pattern of the selected column
    fn write_pattern(&mut self, pattern: u16);

    /// Read back the bit pattern of the selected column
    fn read_pattern(&mut self) -> u16;

    /// Turn off the bits in `mask`, leaving the others untouched
    fn clear_bits(&mut self, mask: u16) {
        let pattern = self.read_pattern();
        self.write_pattern(pattern & !mask);
    }
}

impl<T: LedMatrix + ?Sized> LedMatrix for &mut T {
    fn select_column(&mut self, column: Column) {
        T::select_column(self, column);
    }

    fn write_pattern(&mut self, pattern: u16) {
        T::write_pattern(self, pattern);
    }

    fn read_pattern(&mut self) -> u16 {
        T::read_pattern(self)
    }

    fn clear_bits(&mut self, mask: u16) {
        T::clear_bits(self, mask);
    }
}
