//! Memory-mapped register implementations of the hardware traits
//!
//! Register addresses come from the board; nothing here assumes a memory map.

use core::ptr::NonNull;

use crate::buttons::{ButtonPort, Buttons};
use crate::display::{CacheFlush, GfxRegister, GfxRegisters};
use crate::leds::{Column, LedMatrix};

/// A single 32-bit register accessed with volatile loads and stores
#[derive(Debug)]
pub struct Register {
    ptr: NonNull<u32>,
}

impl Register {
    /// # Safety
    ///
    /// `addr` must be the 4-byte aligned address of a readable and writable
    /// device register that stays mapped for the lifetime of the value, and
    /// nothing else may access it concurrently.
    pub unsafe fn from_addr(addr: usize) -> Option<Self> {
        NonNull::new(core::ptr::with_exposed_provenance_mut::<u32>(addr)).map(|ptr| Self { ptr })
    }

    pub fn read(&self) -> u32 {
        // SAFETY: validity is a precondition of `from_addr`
        unsafe { self.ptr.as_ptr().read_volatile() }
    }

    pub fn write(&mut self, value: u32) {
        // SAFETY: validity is a precondition of `from_addr`
        unsafe { self.ptr.as_ptr().write_volatile(value) }
    }
}

/// Button state register of the input controller
#[derive(Debug)]
pub struct ButtonRegister(pub Register);

impl ButtonPort for ButtonRegister {
    fn pressed(&mut self) -> Buttons {
        Buttons(self.0.read())
    }
}

/// LED column-select and bit-pattern registers of the input controller
#[derive(Debug)]
pub struct LedRegisters {
    pub column: Register,
    pub pattern: Register,
}

impl LedMatrix for LedRegisters {
    fn select_column(&mut self, column: Column) {
        self.column.write(u32::from(column.select()));
    }

    fn write_pattern(&mut self, pattern: u16) {
        self.pattern.write(u32::from(pattern));
    }

    #[allow(clippy::cast_possible_truncation)]
    fn read_pattern(&mut self) -> u16 {
        self.pattern.read() as u16
    }
}

/// Display controller
#[derive(Debug)]
pub struct GfxRegisterBlock {
    pub background_color: Register,
    pub layer_enable: Register,
    pub framebuffer_pitch: Register,
    pub framebuffer_address: Register,
}

impl GfxRegisters for GfxRegisterBlock {
    fn write(&mut self, register: GfxRegister, value: u32) {
        let target = match register {
            GfxRegister::BackgroundColor => &mut self.background_color,
            GfxRegister::LayerEnable => &mut self.layer_enable,
            GfxRegister::FramebufferPitch => &mut self.framebuffer_pitch,
            GfxRegister::FramebufferAddress => &mut self.framebuffer_address,
        };
        target.write(value);
    }
}

/// Cache flush through a board routine taking a `[start, end)` range
#[derive(Debug, Clone, Copy)]
pub struct FlushRoutine(pub fn(start: *const u8, end: *const u8));

impl CacheFlush for FlushRoutine {
    fn flush(&mut self, region: &[u8]) {
        let range = region.as_ptr_range();
        (self.0)(range.start, range.end);
    }
}
