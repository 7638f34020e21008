/// Interrupt sources, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
  VBlank,
  Stat,
  Timer,
  Serial,
  Joypad,
}

impl Interrupt {
  pub const ALL: [Interrupt; 5] = [
    Interrupt::VBlank,
    Interrupt::Stat,
    Interrupt::Timer,
    Interrupt::Serial,
    Interrupt::Joypad,
  ];

  /// Bit in IE and IF.
  pub fn mask(self) -> u8 {
    match self {
      Interrupt::VBlank => 0b00001,
      Interrupt::Stat => 0b00010,
      Interrupt::Timer => 0b00100,
      Interrupt::Serial => 0b01000,
      Interrupt::Joypad => 0b10000,
    }
  }

  pub fn vector(self) -> u16 {
    match self {
      Interrupt::VBlank => 0x40,
      Interrupt::Stat => 0x48,
      Interrupt::Timer => 0x50,
      Interrupt::Serial => 0x58,
      Interrupt::Joypad => 0x60,
    }
  }

  /// The source to service first out of a pending `IE & IF` mask.
  pub fn highest(pending: u8) -> Option<Interrupt> {
    Interrupt::ALL.iter().cloned().find(|i| pending & i.mask() != 0)
  }
}
