mod cpu;
pub mod instr;
mod operand;
pub mod reg;
pub mod table;

pub use self::instr::{Condition, Instruction, Mnemonic, Operand, Width};

#[derive(Debug)]
pub struct CPU {
  pub regs: Registers,

  /// Interrupt master enable.
  pub ime: bool,
  /// Steps left until a pending EI takes effect.
  ei_delay: u8,

  pub halt: bool,
  /// The previous instruction was the 0xcb prefix.
  prefixed: bool,
  /// Address of the opcode being executed, for fault reports.
  fetched_at: u16,
}

#[cfg(test)]
mod optest;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Registers {
  /// General-purpose registers.
  pub a: u8,
  pub b: u8,
  pub c: u8,
  pub d: u8,
  pub e: u8,
  f: u8, // Flag register, only through f()/set_f().
  pub h: u8,
  pub l: u8,

  /// Program counter.
  pub pc: u16,

  /// Stack pointer.
  pub sp: u16,
}
