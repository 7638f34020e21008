//! A DMG Game Boy core: CPU, bus, display timing and timer, stepped one
//! instruction at a time.

#[macro_use]
extern crate log;

pub mod bits;
pub mod cpu;
pub mod error;
pub mod gameboy;
pub mod gpu;
pub mod interrupt;
pub mod mem;

pub use crate::error::{Error, Result};
pub use crate::gameboy::{Config, GameBoy};
