use crate::cpu::CPU;
use crate::error::Result;
use crate::gpu;
use crate::interrupt::Interrupt;
use crate::mem::bootrom::Bootrom;
use crate::mem::mbc::{self, Header};
use crate::mem::Memory;

pub const CLOCK_SPEED: u32 = 4_194_304;
pub const CYCLES_PER_FRAME: u32 = CLOCK_SPEED / 60;

/// What to boot: a cartridge image, optionally behind a bootrom.
#[derive(Debug, Clone, Default)]
pub struct Config {
  pub bootrom: Option<Vec<u8>>,
  pub cartridge: Vec<u8>,
}

pub struct GameBoy {
  cpu: CPU,
  mem: Memory,
  header: Header,

  /// When set, `run_frame` does nothing.
  pub paused: bool,
}

impl GameBoy {
  pub fn new(config: Config) -> Result<GameBoy> {
    let (header, cartridge) = mbc::load(config.cartridge)?;
    let bootrom = match config.bootrom {
      Some(data) => Some(Bootrom::new(data)?),
      None => None,
    };

    let booting = bootrom.is_some();
    let mut gb = GameBoy {
      cpu: if booting { CPU::new() } else { CPU::after_boot() },
      mem: Memory::new(cartridge, bootrom),
      header: header,
      paused: false,
    };
    if !booting {
      gb.power_on();
    }
    Ok(gb)
  }

  /// I/O registers as the bootrom leaves them.
  fn power_on(&mut self) {
    self.mem.wb(0xff40, 0x91); // LCDC
    self.mem.wb(0xff47, 0xfc); // BGP
    self.mem.wb(0xff48, 0xff); // OBP0
    self.mem.wb(0xff49, 0xff); // OBP1
  }

  pub fn header(&self) -> &Header {
    &self.header
  }

  pub fn title(&self) -> &str {
    &self.header.title
  }

  pub fn cpu(&self) -> &CPU {
    &self.cpu
  }

  pub fn mem(&self) -> &Memory {
    &self.mem
  }

  pub fn mem_mut(&mut self) -> &mut Memory {
    &mut self.mem
  }

  /// Shade indices of the last rendered frame.
  pub fn frame(&self) -> &[u8] {
    self.mem.gpu.frame()
  }

  /// The last rendered frame as RGBA bytes.
  pub fn pixels(&self) -> Vec<u8> {
    self.mem.gpu.rgba()
  }

  pub fn set_palette(&mut self, palette: [gpu::RGBA; 4]) {
    self.mem.gpu.palette = palette;
  }

  /// Service the highest-priority pending interrupt if IME allows it.
  /// Returns the cycles spent.
  fn interrupt(&mut self) -> u32 {
    if !self.cpu.ime || self.cpu.prefixed() {
      return 0;
    }
    let pending = self.mem.interrupt_enable & self.mem.interrupt_flags;
    match Interrupt::highest(pending) {
      Some(int) => {
        debug!(
          "interrupt {:?}: ie=0b{:05b} if=0b{:05b}",
          int, self.mem.interrupt_enable, self.mem.interrupt_flags
        );
        self.mem.interrupt_flags &= !int.mask();
        self.cpu.handle_interrupt(&mut self.mem, int.vector())
      }
      None => 0,
    }
  }

  /// Run one instruction (and any interrupt dispatch before it) and feed the
  /// elapsed cycles to the peripherals.
  pub fn step(&mut self) -> Result<u32> {
    let mut t = self.interrupt();
    t += self.cpu.step(&mut self.mem)?;
    let ints = self.mem.step(t);
    self.mem.interrupt_flags |= ints;
    Ok(t)
  }

  /// Run until a frame's worth of cycles has elapsed.
  pub fn run_frame(&mut self) -> Result<()> {
    if self.paused {
      return Ok(());
    }
    let mut cycles = 0;
    while cycles < CYCLES_PER_FRAME {
      cycles += self.step()?;
    }
    Ok(())
  }
}
