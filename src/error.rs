use std::error;
use std::fmt;

/// Faults that stop emulation. None of these are recoverable: the emulated
/// program cannot make progress once one is raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// The opcode is missing from the active table, or the table entry names an
  /// operand or condition its mnemonic cannot use.
  UnsupportedInstruction { opcode: u8, prefixed: bool, pc: u16 },
  /// The cartridge header asks for hardware we do not emulate.
  UnsupportedCartridge { field: &'static str, code: u8 },
  /// The cartridge image is too short to hold a header.
  TruncatedCartridge(usize),
  /// Bootrom images are exactly 256 bytes.
  InvalidBootrom(usize),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      Error::UnsupportedInstruction {
        opcode,
        prefixed,
        pc,
      } => {
        let prefix = if prefixed { "0xcb " } else { "" };
        write!(
          f,
          "unsupported instruction {}0x{:02x} at pc 0x{:04x}",
          prefix, opcode, pc
        )
      }
      Error::UnsupportedCartridge { field, code } => {
        write!(f, "unsupported cartridge {} 0x{:02x}", field, code)
      }
      Error::TruncatedCartridge(len) => {
        write!(f, "cartridge image of {} bytes has no header", len)
      }
      Error::InvalidBootrom(len) => {
        write!(f, "bootrom must be 256 bytes, got {}", len)
      }
    }
  }
}

impl error::Error for Error {}
