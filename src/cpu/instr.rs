use std::fmt;

/// Everything the dispatcher needs to know about one opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
  pub opcode: u8,
  pub mnemonic: Mnemonic,
  /// Destination first, as written in assembly.
  pub operands: &'static [Operand],
  pub width: Width,
  /// T-cycles when the branch is taken, or for every non-branching opcode.
  pub cycles: u32,
  pub cycles_not_taken: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
  W8,
  W16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
  Nop,
  Ld,
  Inc,
  Dec,
  Add,
  Adc,
  Sub,
  Sbc,
  And,
  Xor,
  Or,
  Cp,
  Rlca,
  Rrca,
  Rla,
  Rra,
  Daa,
  Cpl,
  Scf,
  Ccf,
  Jr,
  Jp,
  Call,
  Ret,
  Reti,
  Rst,
  Push,
  Pop,
  Halt,
  Stop,
  Di,
  Ei,
  Prefix,
  // 0xcb page.
  Rlc,
  Rrc,
  Rl,
  Rr,
  Sla,
  Sra,
  Swap,
  Srl,
  Bit,
  Res,
  Set,
}

/// Addressing modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
  A,
  B,
  C,
  D,
  E,
  H,
  L,
  AF,
  BC,
  DE,
  HL,
  SP,
  /// Immediate byte.
  D8,
  /// Immediate little-endian word.
  D16,
  /// Signed immediate byte, sign-extended to 16 bits.
  R8,
  /// SP plus a signed immediate byte.
  SpR8,
  IndBC,
  IndDE,
  IndHL,
  /// (HL), then HL += 1.
  IndHLInc,
  /// (HL), then HL -= 1.
  IndHLDec,
  /// Memory at an immediate word.
  IndA16,
  /// 0xff00 + immediate byte.
  HighA8,
  /// 0xff00 + C.
  HighC,
  Cond(Condition),
  Bit(u8),
  Vector(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
  Always,
  Z,
  NZ,
  C,
  NC,
}

impl Mnemonic {
  /// Whether the mnemonic lives on the 0xcb page.
  pub fn is_prefixed(self) -> bool {
    match self {
      Mnemonic::Rlc
      | Mnemonic::Rrc
      | Mnemonic::Rl
      | Mnemonic::Rr
      | Mnemonic::Sla
      | Mnemonic::Sra
      | Mnemonic::Swap
      | Mnemonic::Srl
      | Mnemonic::Bit
      | Mnemonic::Res
      | Mnemonic::Set => true,
      _ => false,
    }
  }
}

impl fmt::Display for Operand {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      Operand::A => write!(f, "A"),
      Operand::B => write!(f, "B"),
      Operand::C => write!(f, "C"),
      Operand::D => write!(f, "D"),
      Operand::E => write!(f, "E"),
      Operand::H => write!(f, "H"),
      Operand::L => write!(f, "L"),
      Operand::AF => write!(f, "AF"),
      Operand::BC => write!(f, "BC"),
      Operand::DE => write!(f, "DE"),
      Operand::HL => write!(f, "HL"),
      Operand::SP => write!(f, "SP"),
      Operand::D8 => write!(f, "u8"),
      Operand::D16 => write!(f, "u16"),
      Operand::R8 => write!(f, "i8"),
      Operand::SpR8 => write!(f, "SP+i8"),
      Operand::IndBC => write!(f, "(BC)"),
      Operand::IndDE => write!(f, "(DE)"),
      Operand::IndHL => write!(f, "(HL)"),
      Operand::IndHLInc => write!(f, "(HL+)"),
      Operand::IndHLDec => write!(f, "(HL-)"),
      Operand::IndA16 => write!(f, "(u16)"),
      Operand::HighA8 => write!(f, "(FF00+u8)"),
      Operand::HighC => write!(f, "(FF00+C)"),
      Operand::Cond(cond) => write!(f, "{:?}", cond),
      Operand::Bit(bit) => write!(f, "{}", bit),
      Operand::Vector(addr) => write!(f, "{:02x}h", addr),
    }
  }
}

impl fmt::Display for Instruction {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", format!("{:?}", self.mnemonic).to_uppercase())?;
    for (i, operand) in self.operands.iter().enumerate() {
      let sep = if i == 0 { " " } else { "," };
      write!(f, "{}{}", sep, operand)?;
    }
    Ok(())
  }
}
