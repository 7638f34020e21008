use crate::bits;
use crate::cpu::Registers;

pub const Z: u8 = 0x80;
pub const N: u8 = 0x40;
pub const H: u8 = 0x20;
pub const C: u8 = 0x10;

impl Registers {
  /// All zero, as the hardware comes up before the bootrom runs.
  pub fn new() -> Registers {
    Registers {
      a: 0,
      f: 0,
      b: 0,
      c: 0,
      d: 0,
      e: 0,
      h: 0,
      l: 0,

      sp: 0,
      pc: 0,
    }
  }

  /// The state the bootrom leaves behind when it hands over to the cartridge.
  pub fn after_boot() -> Registers {
    Registers {
      a: 0x01,
      f: 0xb0,
      b: 0x00,
      c: 0x13,
      d: 0x00,
      e: 0xd8,
      h: 0x01,
      l: 0x4d,

      sp: 0xfffe,
      pc: 0x100,
    }
  }

  pub fn f(&self) -> u8 {
    self.f
  }
  pub fn set_f(&mut self, value: u8) {
    self.f = value & 0xf0;
  }

  pub fn af(&self) -> u16 {
    bits::join(self.a, self.f)
  }
  pub fn bc(&self) -> u16 {
    bits::join(self.b, self.c)
  }
  pub fn de(&self) -> u16 {
    bits::join(self.d, self.e)
  }
  pub fn hl(&self) -> u16 {
    bits::join(self.h, self.l)
  }

  pub fn set_af(&mut self, value: u16) {
    self.a = bits::high(value);
    self.set_f(bits::low(value));
  }
  pub fn set_bc(&mut self, value: u16) {
    self.b = bits::high(value);
    self.c = bits::low(value);
  }
  pub fn set_de(&mut self, value: u16) {
    self.d = bits::high(value);
    self.e = bits::low(value);
  }
  pub fn set_hl(&mut self, value: u16) {
    self.h = bits::high(value);
    self.l = bits::low(value);
  }

  pub fn z(&self) -> bool {
    //! Zero flag
    self.f & Z != 0
  }
  pub fn n(&self) -> bool {
    //! Subtract flag
    self.f & N != 0
  }
  pub fn h(&self) -> bool {
    //! Half carry flag
    self.f & H != 0
  }
  pub fn c(&self) -> bool {
    //! Carry flag
    self.f & C != 0
  }

  pub fn set_flag(&mut self, flag: u8, on: bool) {
    if on {
      self.f |= flag;
    } else {
      self.f &= !flag;
    }
  }

  /// Overwrite all four flags at once.
  pub fn set_flags(&mut self, z: bool, n: bool, h: bool, c: bool) {
    let mut f = 0;
    f = bits::assign(f, 7, z);
    f = bits::assign(f, 6, n);
    f = bits::assign(f, 5, h);
    f = bits::assign(f, 4, c);
    self.f = f;
  }
}
