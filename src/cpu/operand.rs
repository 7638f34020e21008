//! Operand resolution. Immediate modes advance PC as they fetch.

use crate::cpu::instr::{Condition, Instruction, Operand};
use crate::cpu::CPU;
use crate::error::{Error, Result};
use crate::mem::Memory;

impl CPU {
  /// Move PC past the last byte of the current instruction.
  pub(super) fn next(&mut self) {
    self.regs.pc = self.regs.pc.wrapping_add(1);
  }

  pub(super) fn imm8(&mut self, mem: &Memory) -> u8 {
    self.regs.pc = self.regs.pc.wrapping_add(1);
    mem.rb(self.regs.pc)
  }

  pub(super) fn imm16(&mut self, mem: &Memory) -> u16 {
    let value = mem.rw(self.regs.pc.wrapping_add(1));
    self.regs.pc = self.regs.pc.wrapping_add(2);
    value
  }

  pub(super) fn unsupported(&self, inst: &Instruction) -> Error {
    Error::UnsupportedInstruction {
      opcode: inst.opcode,
      prefixed: inst.mnemonic.is_prefixed(),
      pc: self.fetched_at,
    }
  }

  pub(super) fn operand(&self, inst: &Instruction, idx: usize) -> Result<Operand> {
    inst
      .operands
      .get(idx)
      .cloned()
      .ok_or_else(|| self.unsupported(inst))
  }

  /// Split a branch into its condition and target. Unconditional forms carry
  /// no condition operand; `RET` may have no target at all.
  pub(super) fn branch(
    &self,
    inst: &Instruction,
  ) -> Result<(Condition, Option<Operand>)> {
    match inst.operands {
      [Operand::Cond(cond)] => Ok((*cond, None)),
      [Operand::Cond(cond), target] => Ok((*cond, Some(*target))),
      [] => Ok((Condition::Always, None)),
      [target] => Ok((Condition::Always, Some(*target))),
      _ => Err(self.unsupported(inst)),
    }
  }

  pub(super) fn check(&self, cond: Condition) -> bool {
    match cond {
      Condition::Always => true,
      Condition::Z => self.regs.z(),
      Condition::NZ => !self.regs.z(),
      Condition::C => self.regs.c(),
      Condition::NC => !self.regs.c(),
    }
  }

  fn hl_post(&mut self, delta: i16) -> u16 {
    let hl = self.regs.hl();
    self.regs.set_hl(hl.wrapping_add(delta as u16));
    hl
  }

  /// Resolve `op` as an 8-bit source.
  pub(super) fn read8(
    &mut self,
    mem: &Memory,
    inst: &Instruction,
    op: Operand,
  ) -> Result<u8> {
    let value = match op {
      Operand::A => self.regs.a,
      Operand::B => self.regs.b,
      Operand::C => self.regs.c,
      Operand::D => self.regs.d,
      Operand::E => self.regs.e,
      Operand::H => self.regs.h,
      Operand::L => self.regs.l,
      Operand::D8 => self.imm8(mem),
      Operand::IndBC => mem.rb(self.regs.bc()),
      Operand::IndDE => mem.rb(self.regs.de()),
      Operand::IndHL => mem.rb(self.regs.hl()),
      Operand::IndHLInc => {
        let addr = self.hl_post(1);
        mem.rb(addr)
      }
      Operand::IndHLDec => {
        let addr = self.hl_post(-1);
        mem.rb(addr)
      }
      Operand::IndA16 => {
        let addr = self.imm16(mem);
        mem.rb(addr)
      }
      Operand::HighA8 => {
        let addr = 0xff00 | u16::from(self.imm8(mem));
        mem.rb(addr)
      }
      Operand::HighC => mem.rb(0xff00 | u16::from(self.regs.c)),
      _ => return Err(self.unsupported(inst)),
    };
    Ok(value)
  }

  /// Store `value` through `op` as an 8-bit destination.
  pub(super) fn write8(
    &mut self,
    mem: &mut Memory,
    inst: &Instruction,
    op: Operand,
    value: u8,
  ) -> Result<()> {
    match op {
      Operand::A => self.regs.a = value,
      Operand::B => self.regs.b = value,
      Operand::C => self.regs.c = value,
      Operand::D => self.regs.d = value,
      Operand::E => self.regs.e = value,
      Operand::H => self.regs.h = value,
      Operand::L => self.regs.l = value,
      Operand::IndBC => mem.wb(self.regs.bc(), value),
      Operand::IndDE => mem.wb(self.regs.de(), value),
      Operand::IndHL => mem.wb(self.regs.hl(), value),
      Operand::IndHLInc => {
        let addr = self.hl_post(1);
        mem.wb(addr, value);
      }
      Operand::IndHLDec => {
        let addr = self.hl_post(-1);
        mem.wb(addr, value);
      }
      Operand::IndA16 => {
        let addr = self.imm16(mem);
        mem.wb(addr, value);
      }
      Operand::HighA8 => {
        let addr = 0xff00 | u16::from(self.imm8(mem));
        mem.wb(addr, value);
      }
      Operand::HighC => mem.wb(0xff00 | u16::from(self.regs.c), value),
      _ => return Err(self.unsupported(inst)),
    }
    Ok(())
  }

  /// Resolve `op` as a 16-bit source.
  pub(super) fn read16(
    &mut self,
    mem: &Memory,
    inst: &Instruction,
    op: Operand,
  ) -> Result<u16> {
    let value = match op {
      Operand::AF => self.regs.af(),
      Operand::BC => self.regs.bc(),
      Operand::DE => self.regs.de(),
      Operand::HL => self.regs.hl(),
      Operand::SP => self.regs.sp,
      Operand::D16 => self.imm16(mem),
      Operand::R8 => self.imm8(mem) as i8 as u16,
      Operand::SpR8 => {
        let offset = self.imm8(mem);
        self.sp_plus(offset)
      }
      Operand::Vector(addr) => addr,
      _ => return Err(self.unsupported(inst)),
    };
    Ok(value)
  }

  /// Store `value` through `op` as a 16-bit destination.
  pub(super) fn write16(
    &mut self,
    mem: &mut Memory,
    inst: &Instruction,
    op: Operand,
    value: u16,
  ) -> Result<()> {
    match op {
      Operand::AF => self.regs.set_af(value),
      Operand::BC => self.regs.set_bc(value),
      Operand::DE => self.regs.set_de(value),
      Operand::HL => self.regs.set_hl(value),
      Operand::SP => self.regs.sp = value,
      Operand::IndA16 => {
        let addr = self.imm16(mem);
        mem.ww(addr, value);
      }
      _ => return Err(self.unsupported(inst)),
    }
    Ok(())
  }

  /// SP + signed `offset`. Flags come from the unsigned low byte addition.
  pub(super) fn sp_plus(&mut self, offset: u8) -> u16 {
    let sp = self.regs.sp;
    let h = (sp & 0xf) + u16::from(offset & 0xf) > 0xf;
    let c = (sp & 0xff) + u16::from(offset) > 0xff;
    self.regs.set_flags(false, false, h, c);
    sp.wrapping_add(offset as i8 as u16)
  }

  pub(super) fn push(&mut self, mem: &mut Memory, value: u16) {
    self.regs.sp = self.regs.sp.wrapping_sub(2);
    mem.ww(self.regs.sp, value);
  }

  pub(super) fn pop(&mut self, mem: &Memory) -> u16 {
    let value = mem.rw(self.regs.sp);
    self.regs.sp = self.regs.sp.wrapping_add(2);
    value
  }
}
