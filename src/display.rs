//! Display controller setup
//!
//! One-shot register writes that point the display at an 8-bit framebuffer
//! and choose which layers are composited.

use log::debug;

use crate::color::{Rgb, rgb_from_u32, rgb_to_u32};
use crate::error::Error;

/// Palette offset field of the pitch register
pub const FBPITCH_PAL_OFF: u32 = 16;
/// Pitch field of the pitch register
pub const FBPITCH_PITCH_OFF: u32 = 0;

/// Display controller registers written by the setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GfxRegister {
    /// Color shown where no layer draws (0xRRGGBB)
    BackgroundColor,
    /// Bitmask of enabled layers, see [`Layers`]
    LayerEnable,
    /// Framebuffer pitch and palette offset
    FramebufferPitch,
    /// Base address of the framebuffer
    FramebufferAddress,
}

pub trait GfxRegisters {
    fn write(&mut self, register: GfxRegister, value: u32);
}

impl<T: GfxRegisters + ?Sized> GfxRegisters for &mut T {
    fn write(&mut self, register: GfxRegister, value: u32) {
        T::write(self, register, value);
    }
}

/// Writes a memory range back from the data cache
///
/// The display streams the framebuffer from RAM, so anything written through
/// the cache has to be flushed before it becomes visible.
pub trait CacheFlush {
    fn flush(&mut self, region: &[u8]);
}

impl<T: CacheFlush + ?Sized> CacheFlush for &mut T {
    fn flush(&mut self, region: &[u8]) {
        T::flush(self, region);
    }
}

/// Layer-enable bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Layers(pub u32);

impl Layers {
    pub const NONE: Self = Self(0);
    pub const FB: Self = Self(1 << 0);
    pub const TILEA: Self = Self(1 << 1);
    pub const TILEB: Self = Self(1 << 2);
    pub const SPRITES: Self = Self(1 << 3);
    /// Framebuffer holds 8-bit palette indices
    pub const FB_8BIT: Self = Self(1 << 16);

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl core::ops::BitOr for Layers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

/// Framebuffer geometry and layer selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    pub width: u16,
    pub height: u16,
    /// First palette entry used by the framebuffer. Entries below it belong
    /// to the tiles left behind by the boot loader.
    pub palette_offset: u8,
    /// Shown while all layers are disabled
    pub background: Rgb,
    /// Layers enabled once setup is done
    pub layers: Layers,
}

impl DisplayConfig {
    pub const DEFAULT: Self = Self {
        width: 512,
        height: 320,
        palette_offset: 128,
        background: rgb_from_u32(0x20_20_20),
        layers: Layers::FB_8BIT.union(Layers::FB).union(Layers::TILEA),
    };

    /// Framebuffer size in bytes, one byte per pixel
    pub const fn framebuffer_len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Value of the framebuffer pitch register
    pub const fn pitch_register(&self) -> u32 {
        ((self.palette_offset as u32) << FBPITCH_PAL_OFF)
            | ((self.width as u32) << FBPITCH_PITCH_OFF)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Show only the background color
pub fn blank<G: GfxRegisters + ?Sized>(gfx: &mut G, background: Rgb) {
    gfx.write(GfxRegister::BackgroundColor, rgb_to_u32(background));
    gfx.write(GfxRegister::LayerEnable, Layers::NONE.bits());
}

/// Point the display at `framebuffer` and flush it to RAM
///
/// Returns the address written to the framebuffer address register.
pub fn attach_framebuffer<G, C>(
    gfx: &mut G,
    cache: &mut C,
    framebuffer: &[u8],
    config: &DisplayConfig,
) -> Result<u32, Error>
where
    G: GfxRegisters + ?Sized,
    C: CacheFlush + ?Sized,
{
    let required = config.framebuffer_len();
    let Some(region) = framebuffer.get(..required) else {
        return Err(Error::FramebufferTooSmall {
            required,
            actual: framebuffer.len(),
        });
    };

    // The display controller has a 32-bit address space
    #[allow(clippy::cast_possible_truncation)]
    let address = region.as_ptr().addr() as u32;
    debug!(
        "framebuffer {}x{} at {:#010x}, pitch register {:#010x}",
        config.width,
        config.height,
        address,
        config.pitch_register()
    );

    gfx.write(GfxRegister::FramebufferPitch, config.pitch_register());
    gfx.write(GfxRegister::FramebufferAddress, address);
    cache.flush(region);

    Ok(address)
}

pub fn enable_layers<G: GfxRegisters + ?Sized>(gfx: &mut G, layers: Layers) {
    gfx.write(GfxRegister::LayerEnable, layers.bits());
}
