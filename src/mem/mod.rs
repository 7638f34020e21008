pub mod bootrom;
pub mod mbc;
pub mod timer;

use self::bootrom::Bootrom;
use self::mbc::MBC;
use self::timer::Timer;
use crate::gpu::{self, GPU};
use crate::interrupt::Interrupt;

const WRAM_BANK_SIZE: usize = 0x1000;
const HRAM_SIZE: usize = 0x7f;

/// The address bus. Owns every memory region and peripheral register.
pub struct Memory {
  bootrom: Option<Bootrom>,
  cartridge: Box<dyn MBC>,
  wram0: Vec<u8>,
  wram1: Vec<u8>,
  hram: Vec<u8>,
  /// Joypad select bits (P14/P15).
  joypad: u8,

  pub timer: Timer,
  pub gpu: GPU,

  pub interrupt_enable: u8,
  pub interrupt_flags: u8,
}

impl Memory {
  pub fn new(cartridge: Box<dyn MBC>, bootrom: Option<Bootrom>) -> Memory {
    Memory {
      bootrom: bootrom,
      cartridge: cartridge,
      wram0: vec![0; WRAM_BANK_SIZE],
      wram1: vec![0; WRAM_BANK_SIZE],
      hram: vec![0; HRAM_SIZE],
      joypad: 0x30,

      timer: Timer::new(),
      gpu: GPU::new(),

      interrupt_enable: 0,
      interrupt_flags: 0,
    }
  }

  /// Whether 0x0000-0x00ff still shows the bootrom.
  pub fn boot_mapped(&self) -> bool {
    self.bootrom.as_ref().map_or(false, |b| b.enabled())
  }

  /// Read a byte at address `addr`.
  pub fn rb(&self, addr: u16) -> u8 {
    if let Some(ref boot) = self.bootrom {
      if addr <= 0x00ff && boot.enabled() {
        return boot.rb(addr);
      }
    }
    match addr {
      0x0000..=0x7fff => self.cartridge.rb(addr),
      0x8000..=0x9fff => self.gpu.vram[(addr - 0x8000) as usize],
      0xa000..=0xbfff => self.cartridge.rb(addr),
      0xc000..=0xcfff => self.wram0[(addr - 0xc000) as usize],
      0xd000..=0xdfff => self.wram1[(addr - 0xd000) as usize],
      // Echo of 0xc000-0xddff.
      0xe000..=0xfdff => self.rb(addr - 0x2000),
      0xfe00..=0xfe9f => self.gpu.oam[(addr - 0xfe00) as usize],
      0xfea0..=0xfeff => {
        debug!("read from unusable {:#06x}", addr);
        0
      }
      0xff00..=0xff7f => self.read_io(addr),
      0xff80..=0xfffe => self.hram[(addr - 0xff80) as usize],
      0xffff => self.interrupt_enable,
    }
  }

  /// Read a 2-byte little-endian word from `addr`.
  pub fn rw(&self, addr: u16) -> u16 {
    let a = u16::from(self.rb(addr));
    let b = u16::from(self.rb(addr.wrapping_add(1)));
    (b << 8) | a
  }

  /// Write `value` at address `addr`.
  pub fn wb(&mut self, addr: u16, value: u8) {
    match addr {
      0x0000..=0x7fff => self.cartridge.wb(addr, value),
      0x8000..=0x9fff => self.gpu.vram[(addr - 0x8000) as usize] = value,
      0xa000..=0xbfff => self.cartridge.wb(addr, value),
      0xc000..=0xcfff => self.wram0[(addr - 0xc000) as usize] = value,
      0xd000..=0xdfff => self.wram1[(addr - 0xd000) as usize] = value,
      0xe000..=0xfdff => self.wb(addr - 0x2000, value),
      0xfe00..=0xfe9f => self.gpu.oam[(addr - 0xfe00) as usize] = value,
      0xfea0..=0xfeff => {
        debug!("dropped write to unusable {:#06x} <- {:#04x}", addr, value)
      }
      0xff00..=0xff7f => self.write_io(addr, value),
      0xff80..=0xfffe => self.hram[(addr - 0xff80) as usize] = value,
      0xffff => self.interrupt_enable = value,
    }
  }

  /// Write a 2-byte little-endian word to `addr`.
  pub fn ww(&mut self, addr: u16, value: u16) {
    self.wb(addr, (value & 0xff) as u8);
    self.wb(addr.wrapping_add(1), (value >> 8) as u8);
  }

  /// Write an arbitrary number of bytes to memory.
  pub fn write(&mut self, addr: u16, values: &[u8]) {
    let mut cur = addr;
    for v in values {
      self.wb(cur, *v);
      cur = cur.wrapping_add(1);
    }
  }

  fn read_io(&self, addr: u16) -> u8 {
    match addr {
      // No buttons held: the four input lines read high.
      0xff00 => 0xc0 | self.joypad | 0x0f,
      0xff04 => self.timer.div,
      0xff05 => self.timer.tima,
      0xff06 => self.timer.tma,
      0xff07 => 0xf8 | self.timer.tac(),
      0xff0f => 0xe0 | self.interrupt_flags,
      0xff40 => self.gpu.lcdc,
      0xff41 => 0x80 | self.gpu.stat(),
      0xff42 => self.gpu.scy,
      0xff43 => self.gpu.scx,
      0xff44 => self.gpu.ly,
      0xff45 => self.gpu.lyc,
      0xff46 => self.gpu.dma,
      0xff47 => self.gpu.bgp,
      0xff48 => self.gpu.obp0,
      0xff49 => self.gpu.obp1,
      0xff4a => self.gpu.wy,
      0xff4b => self.gpu.wx,
      _ => {
        debug!("read from unmapped io {:#06x}", addr);
        0
      }
    }
  }

  fn write_io(&mut self, addr: u16, value: u8) {
    match addr {
      0xff00 => self.joypad = value & 0x30,
      0xff04 => self.timer.reset_div(),
      0xff05 => self.timer.tima = value,
      0xff06 => self.timer.tma = value,
      0xff07 => self.timer.set_tac(value),
      0xff0f => self.interrupt_flags = value & 0x1f,
      0xff40 => self.gpu.lcdc = value,
      0xff41 => self.gpu.set_stat(value),
      0xff42 => self.gpu.scy = value,
      0xff43 => self.gpu.scx = value,
      0xff44 => self.gpu.ly = 0,
      0xff45 => self.gpu.lyc = value,
      0xff46 => self.oam_dma(value),
      0xff47 => self.gpu.bgp = value,
      0xff48 => self.gpu.obp0 = value,
      0xff49 => self.gpu.obp1 = value,
      0xff4a => self.gpu.wy = value,
      0xff4b => self.gpu.wx = value,
      0xff50 => {
        if let Some(ref mut boot) = self.bootrom {
          boot.disable();
        }
      }
      _ => debug!("dropped write to unmapped io {:#06x} <- {:#04x}", addr, value),
    }
  }

  /// Copy 160 bytes from `page << 8` into OAM.
  fn oam_dma(&mut self, page: u8) {
    self.gpu.dma = page;
    let src = u16::from(page) << 8;
    for i in 0..gpu::OAM_SIZE {
      let b = self.rb(src.wrapping_add(i as u16));
      self.gpu.oam[i] = b;
    }
  }

  /// Advance the peripherals by `t` cycles.
  /// Returns the interrupt bits they raised.
  pub fn step(&mut self, t: u32) -> u8 {
    let mut ints = self.gpu.step(t);
    if self.timer.step(t) {
      ints |= Interrupt::Timer.mask();
    }
    ints
  }
}

#[cfg(test)]
pub fn blank() -> Memory {
  Memory::new(Box::new(mbc::MBC0::new(vec![0; 0x8000])), None)
}
