use crate::bits;
use crate::cpu::instr::{Instruction, Mnemonic, Operand, Width};
use crate::cpu::reg;
use crate::cpu::table::{PREFIXED, UNPREFIXED};
use crate::cpu::{Registers, CPU};
use crate::error::{Error, Result};
use crate::mem::Memory;

/// Cost of pushing PC and jumping to an interrupt vector.
const INTERRUPT_CYCLES: u32 = 20;

impl CPU {
  pub fn new() -> CPU {
    CPU {
      regs: Registers::new(),
      ime: false,
      ei_delay: 0,
      halt: false,
      prefixed: false,
      fetched_at: 0,
    }
  }

  /// A CPU in the state the bootrom hands over in.
  pub fn after_boot() -> CPU {
    CPU {
      regs: Registers::after_boot(),
      ..CPU::new()
    }
  }

  /// True between a 0xcb byte and the opcode it prefixes.
  pub fn prefixed(&self) -> bool {
    self.prefixed
  }

  /// Run one instruction and return the T-cycles it took.
  ///
  /// PC points at the opcode while it executes; every routine is responsible
  /// for moving it on.
  pub fn step(&mut self, mem: &mut Memory) -> Result<u32> {
    if self.halt {
      if mem.interrupt_enable & mem.interrupt_flags & 0x1f == 0 {
        self.tick_ei();
        return Ok(4);
      }
      self.halt = false;
    }

    let pc = self.regs.pc;
    let opcode = mem.rb(pc);
    let prefixed = self.prefixed;
    self.prefixed = false;
    self.fetched_at = pc;

    let table = if prefixed { &PREFIXED } else { &UNPREFIXED };
    let inst = table[usize::from(opcode)].ok_or(Error::UnsupportedInstruction {
      opcode,
      prefixed,
      pc,
    })?;
    trace!("{:04x}: {}", pc, inst);

    let cycles = self.exec(mem, &inst)?;
    self.tick_ei();
    Ok(cycles)
  }

  /// Push PC and jump to `vector`. The caller has already picked the source
  /// and cleared its request bit.
  pub fn handle_interrupt(&mut self, mem: &mut Memory, vector: u16) -> u32 {
    self.ime = false;
    self.ei_delay = 0;
    self.halt = false;
    let pc = self.regs.pc;
    self.push(mem, pc);
    self.regs.pc = vector;
    INTERRUPT_CYCLES
  }

  fn tick_ei(&mut self) {
    if self.ei_delay > 0 {
      self.ei_delay -= 1;
      if self.ei_delay == 0 {
        self.ime = true;
      }
    }
  }

  fn exec(&mut self, mem: &mut Memory, inst: &Instruction) -> Result<u32> {
    let mut cycles = inst.cycles;
    match inst.mnemonic {
      Mnemonic::Nop => self.next(),

      Mnemonic::Ld => {
        let dst = self.operand(inst, 0)?;
        let src = self.operand(inst, 1)?;
        match inst.width {
          Width::W8 => {
            let v = self.read8(mem, inst, src)?;
            self.write8(mem, inst, dst, v)?;
          }
          Width::W16 => {
            let v = self.read16(mem, inst, src)?;
            self.write16(mem, inst, dst, v)?;
          }
        }
        self.next();
      }

      Mnemonic::Inc | Mnemonic::Dec => {
        let op = self.operand(inst, 0)?;
        let inc = inst.mnemonic == Mnemonic::Inc;
        match inst.width {
          Width::W8 => {
            let v = self.read8(mem, inst, op)?;
            let r = if inc { self.inc8(v) } else { self.dec8(v) };
            self.write8(mem, inst, op, r)?;
          }
          Width::W16 => {
            let v = self.read16(mem, inst, op)?;
            let r = if inc {
              v.wrapping_add(1)
            } else {
              v.wrapping_sub(1)
            };
            self.write16(mem, inst, op, r)?;
          }
        }
        self.next();
      }

      Mnemonic::Add if inst.width == Width::W16 => {
        let dst = self.operand(inst, 0)?;
        let src = self.operand(inst, 1)?;
        let n = self.read16(mem, inst, src)?;
        match dst {
          Operand::HL => self.add_hl(n),
          Operand::SP => self.regs.sp = self.sp_plus(bits::low(n)),
          _ => return Err(self.unsupported(inst)),
        }
        self.next();
      }

      Mnemonic::Add
      | Mnemonic::Adc
      | Mnemonic::Sub
      | Mnemonic::Sbc
      | Mnemonic::And
      | Mnemonic::Xor
      | Mnemonic::Or
      | Mnemonic::Cp => {
        let src = self.operand(inst, 1)?;
        let n = self.read8(mem, inst, src)?;
        let carry = self.regs.c();
        match inst.mnemonic {
          Mnemonic::Add => self.regs.a = self.add8(n, false),
          Mnemonic::Adc => self.regs.a = self.add8(n, carry),
          Mnemonic::Sub => self.regs.a = self.sub8(n, false),
          Mnemonic::Sbc => self.regs.a = self.sub8(n, carry),
          Mnemonic::Cp => {
            self.sub8(n, false);
          }
          Mnemonic::And => {
            self.regs.a &= n;
            let z = self.regs.a == 0;
            self.regs.set_flags(z, false, true, false);
          }
          Mnemonic::Xor => {
            self.regs.a ^= n;
            let z = self.regs.a == 0;
            self.regs.set_flags(z, false, false, false);
          }
          _ => {
            self.regs.a |= n;
            let z = self.regs.a == 0;
            self.regs.set_flags(z, false, false, false);
          }
        }
        self.next();
      }

      Mnemonic::Rlca | Mnemonic::Rrca | Mnemonic::Rla | Mnemonic::Rra => {
        let a = self.regs.a;
        self.regs.a = match inst.mnemonic {
          Mnemonic::Rlca => self.rlc(a),
          Mnemonic::Rrca => self.rrc(a),
          Mnemonic::Rla => self.rl(a),
          _ => self.rr(a),
        };
        // The accumulator forms always clear Z.
        self.regs.set_flag(reg::Z, false);
        self.next();
      }

      Mnemonic::Daa => {
        self.daa();
        self.next();
      }
      Mnemonic::Cpl => {
        self.regs.a = !self.regs.a;
        self.regs.set_flag(reg::N, true);
        self.regs.set_flag(reg::H, true);
        self.next();
      }
      Mnemonic::Scf => {
        let z = self.regs.z();
        self.regs.set_flags(z, false, false, true);
        self.next();
      }
      Mnemonic::Ccf => {
        let z = self.regs.z();
        let c = self.regs.c();
        self.regs.set_flags(z, false, false, !c);
        self.next();
      }

      Mnemonic::Jr => {
        let (cond, target) = self.branch(inst)?;
        let target = target.ok_or_else(|| self.unsupported(inst))?;
        let offset = self.read16(mem, inst, target)?;
        if self.check(cond) {
          self.regs.pc = self.regs.pc.wrapping_add(1).wrapping_add(offset);
        } else {
          self.next();
          cycles = inst.cycles_not_taken;
        }
      }
      Mnemonic::Jp => {
        let (cond, target) = self.branch(inst)?;
        let target = target.ok_or_else(|| self.unsupported(inst))?;
        let addr = self.read16(mem, inst, target)?;
        if self.check(cond) {
          self.regs.pc = addr;
        } else {
          self.next();
          cycles = inst.cycles_not_taken;
        }
      }
      Mnemonic::Call => {
        let (cond, target) = self.branch(inst)?;
        let target = target.ok_or_else(|| self.unsupported(inst))?;
        let addr = self.read16(mem, inst, target)?;
        if self.check(cond) {
          let ret = self.regs.pc.wrapping_add(1);
          self.push(mem, ret);
          self.regs.pc = addr;
        } else {
          self.next();
          cycles = inst.cycles_not_taken;
        }
      }
      Mnemonic::Ret => {
        let (cond, _) = self.branch(inst)?;
        if self.check(cond) {
          self.regs.pc = self.pop(mem);
        } else {
          self.next();
          cycles = inst.cycles_not_taken;
        }
      }
      Mnemonic::Reti => {
        self.regs.pc = self.pop(mem);
        self.ime = true;
        self.ei_delay = 0;
      }
      Mnemonic::Rst => {
        let vector = self.operand(inst, 0)?;
        let addr = self.read16(mem, inst, vector)?;
        let ret = self.regs.pc.wrapping_add(1);
        self.push(mem, ret);
        self.regs.pc = addr;
      }

      Mnemonic::Push => {
        let op = self.operand(inst, 0)?;
        let v = self.read16(mem, inst, op)?;
        self.push(mem, v);
        self.next();
      }
      Mnemonic::Pop => {
        let op = self.operand(inst, 0)?;
        let v = self.pop(mem);
        self.write16(mem, inst, op, v)?;
        self.next();
      }

      Mnemonic::Halt => {
        self.halt = true;
        self.next();
      }
      Mnemonic::Stop => {
        let op = self.operand(inst, 0)?;
        self.read8(mem, inst, op)?;
        self.halt = true;
        self.next();
      }
      Mnemonic::Di => {
        self.ime = false;
        self.ei_delay = 0;
        self.next();
      }
      Mnemonic::Ei => {
        if !self.ime {
          // Counted down at the end of this step and the next one.
          self.ei_delay = 2;
        }
        self.next();
      }
      Mnemonic::Prefix => {
        self.prefixed = true;
        self.next();
      }

      Mnemonic::Rlc
      | Mnemonic::Rrc
      | Mnemonic::Rl
      | Mnemonic::Rr
      | Mnemonic::Sla
      | Mnemonic::Sra
      | Mnemonic::Swap
      | Mnemonic::Srl => {
        let op = self.operand(inst, 0)?;
        let v = self.read8(mem, inst, op)?;
        let r = match inst.mnemonic {
          Mnemonic::Rlc => self.rlc(v),
          Mnemonic::Rrc => self.rrc(v),
          Mnemonic::Rl => self.rl(v),
          Mnemonic::Rr => self.rr(v),
          Mnemonic::Sla => self.shift(v << 1, v & 0x80 != 0),
          Mnemonic::Sra => self.shift((v >> 1) | (v & 0x80), v & 1 != 0),
          Mnemonic::Srl => self.shift(v >> 1, v & 1 != 0),
          _ => self.shift(v.rotate_left(4), false),
        };
        self.write8(mem, inst, op, r)?;
        self.next();
      }

      Mnemonic::Bit | Mnemonic::Res | Mnemonic::Set => {
        let bit = match self.operand(inst, 0)? {
          Operand::Bit(bit) => bit,
          _ => return Err(self.unsupported(inst)),
        };
        let op = self.operand(inst, 1)?;
        let v = self.read8(mem, inst, op)?;
        match inst.mnemonic {
          Mnemonic::Bit => {
            let z = !bits::test(v, bit);
            let c = self.regs.c();
            self.regs.set_flags(z, false, true, c);
          }
          Mnemonic::Res => self.write8(mem, inst, op, bits::clear(v, bit))?,
          _ => self.write8(mem, inst, op, bits::set(v, bit))?,
        }
        self.next();
      }
    }
    Ok(cycles)
  }

  fn inc8(&mut self, v: u8) -> u8 {
    let r = v.wrapping_add(1);
    let c = self.regs.c();
    self.regs.set_flags(r == 0, false, v & 0xf == 0xf, c);
    r
  }

  fn dec8(&mut self, v: u8) -> u8 {
    let r = v.wrapping_sub(1);
    let c = self.regs.c();
    self.regs.set_flags(r == 0, true, v & 0xf == 0, c);
    r
  }

  fn add8(&mut self, n: u8, carry: bool) -> u8 {
    let a = self.regs.a;
    let c = u8::from(carry);
    let r = a.wrapping_add(n).wrapping_add(c);
    let h = (a & 0xf) + (n & 0xf) + c > 0xf;
    let full = u16::from(a) + u16::from(n) + u16::from(c) > 0xff;
    self.regs.set_flags(r == 0, false, h, full);
    r
  }

  /// A - n - carry. CP uses this and drops the result.
  fn sub8(&mut self, n: u8, carry: bool) -> u8 {
    let a = self.regs.a;
    let c = u8::from(carry);
    let r = a.wrapping_sub(n).wrapping_sub(c);
    let h = (a & 0xf) < (n & 0xf) + c;
    let borrow = u16::from(a) < u16::from(n) + u16::from(c);
    self.regs.set_flags(r == 0, true, h, borrow);
    r
  }

  fn add_hl(&mut self, n: u16) {
    let hl = self.regs.hl();
    let h = (hl & 0xfff) + (n & 0xfff) > 0xfff;
    let c = u32::from(hl) + u32::from(n) > 0xffff;
    let z = self.regs.z();
    self.regs.set_flags(z, false, h, c);
    self.regs.set_hl(hl.wrapping_add(n));
  }

  fn rlc(&mut self, v: u8) -> u8 {
    self.shift(v.rotate_left(1), v & 0x80 != 0)
  }

  fn rrc(&mut self, v: u8) -> u8 {
    self.shift(v.rotate_right(1), v & 1 != 0)
  }

  fn rl(&mut self, v: u8) -> u8 {
    let r = (v << 1) | u8::from(self.regs.c());
    self.shift(r, v & 0x80 != 0)
  }

  fn rr(&mut self, v: u8) -> u8 {
    let r = (v >> 1) | (u8::from(self.regs.c()) << 7);
    self.shift(r, v & 1 != 0)
  }

  /// Flags shared by every rotate and shift: Z from the result, C from the
  /// bit shifted out.
  fn shift(&mut self, r: u8, c: bool) -> u8 {
    self.regs.set_flags(r == 0, false, false, c);
    r
  }

  fn daa(&mut self) {
    let mut a = self.regs.a;
    let n = self.regs.n();
    let mut c = self.regs.c();
    let mut adjust = 0;
    if self.regs.h() || (!n && a & 0xf > 9) {
      adjust |= 0x06;
    }
    if c || (!n && a > 0x99) {
      adjust |= 0x60;
      c = true;
    }
    a = if n {
      a.wrapping_sub(adjust)
    } else {
      a.wrapping_add(adjust)
    };
    self.regs.a = a;
    self.regs.set_flags(a == 0, n, false, c);
  }
}
