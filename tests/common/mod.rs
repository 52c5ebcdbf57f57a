#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use badge_led_cycle::display::{CacheFlush, GfxRegister, GfxRegisters};
use badge_led_cycle::{ButtonPort, Buttons, Column, LedMatrix};
use embedded_hal::delay::DelayNs;

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// LED registers that remember every write
#[derive(Debug, Default)]
pub(crate) struct FakeLeds {
    pub(crate) pattern: u16,
    pub(crate) selects: Vec<Column>,
    pub(crate) writes: Vec<u16>,
}

impl LedMatrix for FakeLeds {
    fn select_column(&mut self, column: Column) {
        self.selects.push(column);
    }

    fn write_pattern(&mut self, pattern: u16) {
        self.pattern = pattern;
        self.writes.push(pattern);
    }

    fn read_pattern(&mut self) -> u16 {
        self.pattern
    }
}

/// Button register replaying a script, then repeating `idle`
#[derive(Debug, Default)]
pub(crate) struct ScriptedButtons {
    pub(crate) script: VecDeque<Buttons>,
    pub(crate) idle: Buttons,
    pub(crate) reads: usize,
}

impl ScriptedButtons {
    pub(crate) fn new(script: impl IntoIterator<Item = Buttons>, idle: Buttons) -> Self {
        Self {
            script: script.into_iter().collect(),
            idle,
            reads: 0,
        }
    }
}

impl ButtonPort for ScriptedButtons {
    fn pressed(&mut self) -> Buttons {
        self.reads += 1;
        self.script.pop_front().unwrap_or(self.idle)
    }
}

/// Delay that only counts
#[derive(Debug, Default)]
pub(crate) struct FakeDelay {
    pub(crate) total_ns: u64,
    pub(crate) calls: usize,
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
        self.calls += 1;
    }
}

/// Something that happened on the display side of the badge
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    Gfx(GfxRegister, u32),
    Flush { start: usize, len: usize },
    Console(String),
}

pub(crate) type Timeline = Rc<RefCell<Vec<Event>>>;

#[derive(Debug, Default, Clone)]
pub(crate) struct FakeGfx(pub(crate) Timeline);

impl GfxRegisters for FakeGfx {
    fn write(&mut self, register: GfxRegister, value: u32) {
        self.0.borrow_mut().push(Event::Gfx(register, value));
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct FakeCache(pub(crate) Timeline);

impl CacheFlush for FakeCache {
    fn flush(&mut self, region: &[u8]) {
        self.0.borrow_mut().push(Event::Flush {
            start: region.as_ptr() as usize,
            len: region.len(),
        });
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct FakeConsole(pub(crate) Timeline);

impl fmt::Write for FakeConsole {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.borrow_mut().push(Event::Console(s.to_owned()));
        Ok(())
    }
}

/// Console device that rejects everything
#[derive(Debug, Default)]
pub(crate) struct BrokenConsole;

impl fmt::Write for BrokenConsole {
    fn write_str(&mut self, _s: &str) -> fmt::Result {
        Err(fmt::Error)
    }
}
