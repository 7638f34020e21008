use crate::error::{Error, Result};

pub const SIZE: usize = 0x100;

/// The 256-byte boot program overlaid on the bottom of the cartridge.
#[derive(Debug)]
pub struct Bootrom {
  data: Vec<u8>,
  enabled: bool,
}

impl Bootrom {
  pub fn new(data: Vec<u8>) -> Result<Bootrom> {
    if data.len() != SIZE {
      return Err(Error::InvalidBootrom(data.len()));
    }
    Ok(Bootrom {
      data: data,
      enabled: true,
    })
  }

  pub fn enabled(&self) -> bool {
    self.enabled
  }

  /// Unmap the overlay. There is no way back for the rest of the session.
  pub fn disable(&mut self) {
    if self.enabled {
      info!("bootrom unmapped");
    }
    self.enabled = false;
  }

  pub fn rb(&self, addr: u16) -> u8 {
    self.data[usize::from(addr) % SIZE]
  }
}
