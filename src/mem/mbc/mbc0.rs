use crate::mem::mbc::MBC;

const ROM_SIZE: usize = 0x8000;
const RAM_SIZE: usize = 0x2000;

/// ROM only: two fixed 16KiB banks and 8KiB of RAM.
#[derive(Debug)]
pub struct MBC0 {
  rom: Vec<u8>,
  ram: Vec<u8>,
}

impl MBC0 {
  pub fn new(mut rom: Vec<u8>) -> Self {
    if rom.len() < ROM_SIZE {
      rom.resize(ROM_SIZE, 0);
    }
    Self {
      rom: rom,
      ram: vec![0; RAM_SIZE],
    }
  }
}

impl MBC for MBC0 {
  fn rb(&self, addr: u16) -> u8 {
    match addr {
      0x0000..=0x7fff => self.rom[addr as usize],
      0xa000..=0xbfff => self.ram[(addr & 0x1fff) as usize],
      _ => {
        debug!("cartridge read outside its window: {:#06x}", addr);
        0
      }
    }
  }

  fn wb(&mut self, addr: u16, value: u8) {
    match addr {
      0xa000..=0xbfff => self.ram[(addr & 0x1fff) as usize] = value,
      _ => debug!("dropped cartridge write {:#06x} <- {:#04x}", addr, value),
    }
  }
}
