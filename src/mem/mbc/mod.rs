//! Cartridges and their bank controllers.

mod mbc0;

pub use self::mbc0::MBC0;

use crate::error::{Error, Result};

/// Bytes 0..0x150 hold the entry point, logo and header.
pub const HEADER_END: usize = 0x150;

const TITLE: usize = 0x134;
const TITLE_END: usize = 0x143;
const CGB_FLAG: usize = 0x143;
const SGB_FLAG: usize = 0x146;
const CARTRIDGE_TYPE: usize = 0x147;
const ROM_SIZE: usize = 0x148;
const RAM_SIZE: usize = 0x149;

/// A bank controller owns the cartridge ROM and RAM and decodes accesses to
/// 0x0000-0x7fff and 0xa000-0xbfff.
pub trait MBC {
  fn rb(&self, addr: u16) -> u8;
  fn wb(&mut self, addr: u16, value: u8);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
  pub title: String,
  pub cgb: u8,
  pub sgb: u8,
  pub cartridge_type: u8,
  pub rom_size: u8,
  pub ram_size: u8,
}

impl Header {
  pub fn parse(rom: &[u8]) -> Result<Header> {
    if rom.len() < HEADER_END {
      return Err(Error::TruncatedCartridge(rom.len()));
    }
    let title = rom[TITLE..TITLE_END]
      .iter()
      .take_while(|&&b| b != 0)
      .map(|&b| b as char)
      .collect();
    Ok(Header {
      title: title,
      cgb: rom[CGB_FLAG],
      sgb: rom[SGB_FLAG],
      cartridge_type: rom[CARTRIDGE_TYPE],
      rom_size: rom[ROM_SIZE],
      ram_size: rom[RAM_SIZE],
    })
  }
}

/// Parse the header and pick the controller the cartridge type asks for.
pub fn load(rom: Vec<u8>) -> Result<(Header, Box<dyn MBC>)> {
  let header = Header::parse(&rom)?;
  info!(
    "cartridge {:?}: type {:#04x} rom {:#04x} ram {:#04x}",
    header.title, header.cartridge_type, header.rom_size, header.ram_size
  );

  let unsupported = |field, code| Error::UnsupportedCartridge {
    field: field,
    code: code,
  };
  if header.rom_size != 0 {
    return Err(unsupported("rom size", header.rom_size));
  }
  if header.ram_size != 0 {
    return Err(unsupported("ram size", header.ram_size));
  }
  let mbc: Box<dyn MBC> = match header.cartridge_type {
    0x00 => Box::new(MBC0::new(rom)),
    code => return Err(unsupported("type", code)),
  };
  Ok((header, mbc))
}
