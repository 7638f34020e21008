use crate::cpu::reg;
use crate::cpu::table::{PREFIXED, UNPREFIXED};
use crate::cpu::CPU;
use crate::error::Error;
use crate::mem::{self, Memory};

fn init() -> (CPU, Memory) {
  let mut cpu = CPU::new();
  let mem = mem::blank();
  // Start in WRAM so the program can be poked in.
  cpu.regs.pc = 0xc000;
  cpu.regs.sp = 0xfffe;
  (cpu, mem)
}

fn run(cpu: &mut CPU, mem: &mut Memory, opcode: u8, len: u16, time_expected: u32) {
  let start = cpu.regs.pc;
  mem.wb(cpu.regs.pc, opcode);
  let time_actual = cpu.step(mem).unwrap();
  // Test time.
  assert_eq!(time_actual, time_expected, "opcode {:#04x}", opcode);
  // Test that the PC was incremented.
  assert_eq!(cpu.regs.pc, start + len, "opcode {:#04x}", opcode);
}

/// Run a 0xcb-prefixed opcode as two steps.
fn run_cb(cpu: &mut CPU, mem: &mut Memory, opcode: u8, time_expected: u32) {
  let start = cpu.regs.pc;
  mem.write(start, &[0xcb, opcode]);
  assert_eq!(cpu.step(mem).unwrap(), 4);
  assert!(cpu.prefixed());
  assert_eq!(cpu.step(mem).unwrap(), time_expected);
  assert!(!cpu.prefixed());
  assert_eq!(cpu.regs.pc, start + 2);
}

#[test]
fn nop() {
  let (mut cpu, mut mem) = init();
  let cycles = UNPREFIXED[0x00].unwrap().cycles;
  run(&mut cpu, &mut mem, 0x00, 1, cycles);
}

#[test]
fn ld_nn_n() {
  macro_rules! run_test {
    ($reg:ident, $opcode:expr) => {{
      let (mut cpu, mut mem) = init();
      mem.wb(cpu.regs.pc + 1, 0x42);
      let f = cpu.regs.f();
      run(&mut cpu, &mut mem, $opcode, 2, 8);
      assert_eq!(cpu.regs.f(), f);
      assert_eq!(cpu.regs.$reg, 0x42);
    }};
  }
  run_test!(b, 0x06);
  run_test!(c, 0x0e);
  run_test!(d, 0x16);
  run_test!(e, 0x1e);
  run_test!(h, 0x26);
  run_test!(l, 0x2e);
  run_test!(a, 0x3e);
}

#[test]
fn ld_r1_r2() {
  macro_rules! reg_reg {
    ($r1:ident, $r2:ident, $opcode:expr) => {{
      let (mut cpu, mut mem) = init();
      cpu.regs.$r2 = 0x42;
      let f = cpu.regs.f();
      run(&mut cpu, &mut mem, $opcode, 1, 4);
      assert_eq!(cpu.regs.f(), f);
      assert_eq!(cpu.regs.$r1, 0x42);
      assert_eq!(cpu.regs.$r2, 0x42);
    }};
  }

  reg_reg!(a, a, 0x7f);
  reg_reg!(a, b, 0x78);
  reg_reg!(a, c, 0x79);
  reg_reg!(a, d, 0x7a);
  reg_reg!(a, e, 0x7b);
  reg_reg!(a, h, 0x7c);
  reg_reg!(a, l, 0x7d);

  reg_reg!(b, b, 0x40);
  reg_reg!(b, c, 0x41);
  reg_reg!(b, d, 0x42);
  reg_reg!(b, e, 0x43);
  reg_reg!(b, h, 0x44);
  reg_reg!(b, l, 0x45);
  reg_reg!(b, a, 0x47);

  reg_reg!(c, b, 0x48);
  reg_reg!(c, e, 0x4b);
  reg_reg!(d, h, 0x54);
  reg_reg!(e, l, 0x5d);
  reg_reg!(h, a, 0x67);
  reg_reg!(l, d, 0x6a);
}

#[test]
fn ld_hl_indirect() {
  let (mut cpu, mut mem) = init();
  cpu.regs.set_hl(0xc100);
  cpu.regs.b = 0x99;
  run(&mut cpu, &mut mem, 0x70, 1, 8);
  assert_eq!(mem.rb(0xc100), 0x99);

  run(&mut cpu, &mut mem, 0x7e, 1, 8);
  assert_eq!(cpu.regs.a, 0x99);

  // LD (HL+),A and LD A,(HL-)
  cpu.regs.a = 0x11;
  run(&mut cpu, &mut mem, 0x22, 1, 8);
  assert_eq!(mem.rb(0xc100), 0x11);
  assert_eq!(cpu.regs.hl(), 0xc101);
  run(&mut cpu, &mut mem, 0x3a, 1, 8);
  assert_eq!(cpu.regs.hl(), 0xc100);

  // LD (HL),u8
  mem.wb(cpu.regs.pc + 1, 0x77);
  run(&mut cpu, &mut mem, 0x36, 2, 12);
  assert_eq!(mem.rb(0xc100), 0x77);
}

#[test]
fn ld_immediate_addresses() {
  let (mut cpu, mut mem) = init();
  cpu.regs.a = 0x5a;
  // LD (u16),A
  mem.ww(cpu.regs.pc + 1, 0xc200);
  run(&mut cpu, &mut mem, 0xea, 3, 16);
  assert_eq!(mem.rb(0xc200), 0x5a);

  // LDH (u8),A then LDH A,(u8)
  mem.wb(cpu.regs.pc + 1, 0x80);
  run(&mut cpu, &mut mem, 0xe0, 2, 12);
  assert_eq!(mem.rb(0xff80), 0x5a);
  cpu.regs.a = 0;
  mem.wb(cpu.regs.pc + 1, 0x80);
  run(&mut cpu, &mut mem, 0xf0, 2, 12);
  assert_eq!(cpu.regs.a, 0x5a);

  // LD (FF00+C),A
  cpu.regs.c = 0x81;
  run(&mut cpu, &mut mem, 0xe2, 1, 8);
  assert_eq!(mem.rb(0xff81), 0x5a);

  // LD (u16),SP
  cpu.regs.sp = 0xabcd;
  mem.ww(cpu.regs.pc + 1, 0xc300);
  run(&mut cpu, &mut mem, 0x08, 3, 20);
  assert_eq!(mem.rw(0xc300), 0xabcd);
}

#[test]
fn ld_16() {
  let (mut cpu, mut mem) = init();
  mem.ww(cpu.regs.pc + 1, 0x1234);
  run(&mut cpu, &mut mem, 0x01, 3, 12);
  assert_eq!(cpu.regs.bc(), 0x1234);

  mem.ww(cpu.regs.pc + 1, 0xc0de);
  run(&mut cpu, &mut mem, 0x21, 3, 12);
  run(&mut cpu, &mut mem, 0xf9, 1, 8);
  assert_eq!(cpu.regs.sp, 0xc0de);
}

#[test]
fn ld_16_across_wram_banks() {
  let (mut cpu, mut mem) = init();
  cpu.regs.pc = 0xcffe;
  mem.ww(0xcfff, 0xbeef);
  run(&mut cpu, &mut mem, 0x11, 3, 12);
  assert_eq!(cpu.regs.de(), 0xbeef);

  // LD (a16),SP
  cpu.regs.sp = 0x1234;
  mem.ww(cpu.regs.pc + 1, 0xc100);
  run(&mut cpu, &mut mem, 0x08, 3, 20);
  assert_eq!(mem.rw(0xc100), 0x1234);
}

#[test]
fn ld_hl_sp_offset() {
  let (mut cpu, mut mem) = init();
  cpu.regs.sp = 0xfff8;
  mem.wb(cpu.regs.pc + 1, 0x02);
  run(&mut cpu, &mut mem, 0xf8, 2, 12);
  assert_eq!(cpu.regs.hl(), 0xfffa);
  assert!(!cpu.regs.z() && !cpu.regs.n() && !cpu.regs.h() && !cpu.regs.c());

  cpu.regs.sp = 0x00ff;
  mem.wb(cpu.regs.pc + 1, 0xff);
  run(&mut cpu, &mut mem, 0xf8, 2, 12);
  assert_eq!(cpu.regs.hl(), 0x00fe);
  assert!(cpu.regs.h() && cpu.regs.c());
}

#[test]
fn inc_dec() {
  let (mut cpu, mut mem) = init();
  cpu.regs.set_flag(reg::C, true);
  cpu.regs.b = 0xff;
  run(&mut cpu, &mut mem, 0x04, 1, 4);
  assert_eq!(cpu.regs.b, 0x00);
  assert!(cpu.regs.z());
  assert!(cpu.regs.h());
  assert!(!cpu.regs.n());
  assert!(cpu.regs.c());

  cpu.regs.c = 0x00;
  run(&mut cpu, &mut mem, 0x0d, 1, 4);
  assert_eq!(cpu.regs.c, 0xff);
  assert!(!cpu.regs.z());
  assert!(cpu.regs.n());
  assert!(cpu.regs.h());

  cpu.regs.set_hl(0xc100);
  mem.wb(0xc100, 0x0f);
  run(&mut cpu, &mut mem, 0x34, 1, 12);
  assert_eq!(mem.rb(0xc100), 0x10);
  assert!(cpu.regs.h());

  cpu.regs.set_de(0xffff);
  run(&mut cpu, &mut mem, 0x13, 1, 8);
  assert_eq!(cpu.regs.de(), 0);
  // 16-bit forms leave flags alone.
  assert!(cpu.regs.h());
  run(&mut cpu, &mut mem, 0x1b, 1, 8);
  assert_eq!(cpu.regs.de(), 0xffff);
}

#[test]
fn alu() {
  macro_rules! alu {
    ($opcode:expr, $a:expr, $b:expr, $carry:expr => $res:expr, $f:expr) => {{
      let (mut cpu, mut mem) = init();
      cpu.regs.a = $a;
      cpu.regs.b = $b;
      cpu.regs.set_flag(reg::C, $carry);
      run(&mut cpu, &mut mem, $opcode, 1, 4);
      assert_eq!(cpu.regs.a, $res, "opcode {:#04x}", $opcode);
      assert_eq!(cpu.regs.f(), $f, "opcode {:#04x}", $opcode);
    }};
  }

  // ADD A,B
  alu!(0x80, 0x3a, 0xc6, false => 0x00, reg::Z | reg::H | reg::C);
  alu!(0x80, 0x0f, 0x01, false => 0x10, reg::H);
  // ADC A,B
  alu!(0x88, 0xe1, 0x0f, true => 0xf1, reg::H);
  alu!(0x88, 0xff, 0x00, true => 0x00, reg::Z | reg::H | reg::C);
  // SUB B
  alu!(0x90, 0x3e, 0x3e, false => 0x00, reg::Z | reg::N);
  alu!(0x90, 0x3e, 0x0f, false => 0x2f, reg::N | reg::H);
  alu!(0x90, 0x3e, 0x40, false => 0xfe, reg::N | reg::C);
  // SBC A,B
  alu!(0x98, 0x3b, 0x2a, true => 0x10, reg::N);
  alu!(0x98, 0x3b, 0x4f, true => 0xeb, reg::N | reg::H | reg::C);
  // AND B
  alu!(0xa0, 0x5a, 0x3f, true => 0x1a, reg::H);
  alu!(0xa0, 0x5a, 0x00, false => 0x00, reg::Z | reg::H);
  // XOR B
  alu!(0xa8, 0xff, 0xff, true => 0x00, reg::Z);
  // OR B
  alu!(0xb0, 0x5a, 0x03, true => 0x5b, 0);
  // CP B leaves A alone.
  alu!(0xb8, 0x3c, 0x2f, false => 0x3c, reg::N | reg::H);
  alu!(0xb8, 0x3c, 0x3c, false => 0x3c, reg::Z | reg::N);
  alu!(0xb8, 0x3c, 0x40, false => 0x3c, reg::N | reg::C);
}

#[test]
fn alu_immediate() {
  let (mut cpu, mut mem) = init();
  cpu.regs.a = 0x10;
  mem.wb(cpu.regs.pc + 1, 0x05);
  run(&mut cpu, &mut mem, 0xc6, 2, 8);
  assert_eq!(cpu.regs.a, 0x15);
  mem.wb(cpu.regs.pc + 1, 0x15);
  run(&mut cpu, &mut mem, 0xfe, 2, 8);
  assert!(cpu.regs.z());
}

#[test]
fn add_hl() {
  let (mut cpu, mut mem) = init();
  cpu.regs.set_flag(reg::Z, true);
  cpu.regs.set_hl(0x8a23);
  cpu.regs.set_bc(0x0605);
  run(&mut cpu, &mut mem, 0x09, 1, 8);
  assert_eq!(cpu.regs.hl(), 0x9028);
  assert!(cpu.regs.z());
  assert!(cpu.regs.h());
  assert!(!cpu.regs.c());

  cpu.regs.set_hl(0x8a23);
  run(&mut cpu, &mut mem, 0x29, 1, 8);
  assert_eq!(cpu.regs.hl(), 0x1446);
  assert!(cpu.regs.h());
  assert!(cpu.regs.c());
  assert!(!cpu.regs.n());
}

#[test]
fn add_sp() {
  let (mut cpu, mut mem) = init();
  cpu.regs.sp = 0xfff8;
  mem.wb(cpu.regs.pc + 1, 0xfe);
  run(&mut cpu, &mut mem, 0xe8, 2, 16);
  assert_eq!(cpu.regs.sp, 0xfff6);
  assert!(!cpu.regs.z());
  assert!(cpu.regs.h() && cpu.regs.c());
}

#[test]
fn rotate_accumulator() {
  let (mut cpu, mut mem) = init();
  cpu.regs.a = 0x85;
  run(&mut cpu, &mut mem, 0x07, 1, 4);
  assert_eq!(cpu.regs.a, 0x0b);
  assert!(cpu.regs.c());

  cpu.regs.a = 0x00;
  run(&mut cpu, &mut mem, 0x17, 1, 4);
  assert_eq!(cpu.regs.a, 0x01);
  assert!(!cpu.regs.c());
  assert!(!cpu.regs.z());

  cpu.regs.a = 0x01;
  run(&mut cpu, &mut mem, 0x0f, 1, 4);
  assert_eq!(cpu.regs.a, 0x80);
  assert!(cpu.regs.c());

  cpu.regs.a = 0x01;
  cpu.regs.set_flag(reg::C, false);
  run(&mut cpu, &mut mem, 0x1f, 1, 4);
  assert_eq!(cpu.regs.a, 0x00);
  // Z stays clear even for a zero result.
  assert!(!cpu.regs.z());
  assert!(cpu.regs.c());
}

#[test]
fn daa() {
  let (mut cpu, mut mem) = init();
  // 0x45 + 0x38 = 0x83 in BCD.
  cpu.regs.a = 0x45;
  cpu.regs.b = 0x38;
  run(&mut cpu, &mut mem, 0x80, 1, 4);
  run(&mut cpu, &mut mem, 0x27, 1, 4);
  assert_eq!(cpu.regs.a, 0x83);
  assert!(!cpu.regs.c());

  // 0x83 - 0x38 = 0x45 in BCD.
  cpu.regs.b = 0x38;
  run(&mut cpu, &mut mem, 0x90, 1, 4);
  run(&mut cpu, &mut mem, 0x27, 1, 4);
  assert_eq!(cpu.regs.a, 0x45);
  assert!(cpu.regs.n());

  // 0x99 + 0x01 = 0x00 carry 1.
  cpu.regs.a = 0x99;
  cpu.regs.b = 0x01;
  run(&mut cpu, &mut mem, 0x80, 1, 4);
  run(&mut cpu, &mut mem, 0x27, 1, 4);
  assert_eq!(cpu.regs.a, 0x00);
  assert!(cpu.regs.z());
  assert!(cpu.regs.c());
}

#[test]
fn misc_flags() {
  let (mut cpu, mut mem) = init();
  cpu.regs.a = 0x35;
  run(&mut cpu, &mut mem, 0x2f, 1, 4);
  assert_eq!(cpu.regs.a, 0xca);
  assert!(cpu.regs.n() && cpu.regs.h());

  run(&mut cpu, &mut mem, 0x37, 1, 4);
  assert!(cpu.regs.c() && !cpu.regs.n() && !cpu.regs.h());
  run(&mut cpu, &mut mem, 0x3f, 1, 4);
  assert!(!cpu.regs.c());
}

#[test]
fn jumps() {
  let (mut cpu, mut mem) = init();
  // JP u16
  mem.ww(cpu.regs.pc + 1, 0xc100);
  mem.wb(cpu.regs.pc, 0xc3);
  assert_eq!(cpu.step(&mut mem).unwrap(), 16);
  assert_eq!(cpu.regs.pc, 0xc100);

  // JP HL
  cpu.regs.set_hl(0xc200);
  mem.wb(cpu.regs.pc, 0xe9);
  assert_eq!(cpu.step(&mut mem).unwrap(), 4);
  assert_eq!(cpu.regs.pc, 0xc200);

  // JP NZ,u16 not taken.
  cpu.regs.set_flag(reg::Z, true);
  run(&mut cpu, &mut mem, 0xc2, 3, 12);
}

#[test]
fn relative_jumps() {
  let (mut cpu, mut mem) = init();
  // JR NZ,i8 taken backwards.
  mem.wb(0xc101, 0xfe);
  cpu.regs.pc = 0xc100;
  mem.wb(0xc100, 0x20);
  assert_eq!(cpu.step(&mut mem).unwrap(), 12);
  assert_eq!(cpu.regs.pc, 0xc100);

  // Not taken.
  cpu.regs.set_flag(reg::Z, true);
  run(&mut cpu, &mut mem, 0x20, 2, 8);

  // JR i8 forwards.
  mem.wb(cpu.regs.pc + 1, 0x10);
  let start = cpu.regs.pc;
  mem.wb(start, 0x18);
  assert_eq!(cpu.step(&mut mem).unwrap(), 12);
  assert_eq!(cpu.regs.pc, start + 2 + 0x10);
}

#[test]
fn call_ret() {
  let (mut cpu, mut mem) = init();
  let sp = cpu.regs.sp;
  mem.ww(0xc001, 0xc100);
  mem.wb(0xc000, 0xcd);
  mem.wb(0xc100, 0xc9);

  assert_eq!(cpu.step(&mut mem).unwrap(), 24);
  assert_eq!(cpu.regs.pc, 0xc100);
  assert_eq!(cpu.regs.sp, sp - 2);
  assert_eq!(mem.rw(cpu.regs.sp), 0xc003);

  assert_eq!(cpu.step(&mut mem).unwrap(), 16);
  assert_eq!(cpu.regs.pc, 0xc003);
  assert_eq!(cpu.regs.sp, sp);
}

#[test]
fn conditional_call_ret() {
  let (mut cpu, mut mem) = init();
  let sp = cpu.regs.sp;
  // CALL C,u16 and RET NC with C clear.
  run(&mut cpu, &mut mem, 0xdc, 3, 12);
  assert_eq!(cpu.regs.sp, sp);

  cpu.regs.set_flag(reg::C, true);
  run(&mut cpu, &mut mem, 0xd0, 1, 8);

  mem.ww(cpu.regs.pc + 1, 0xc200);
  mem.wb(cpu.regs.pc, 0xdc);
  assert_eq!(cpu.step(&mut mem).unwrap(), 24);
  mem.wb(0xc200, 0xd8);
  assert_eq!(cpu.step(&mut mem).unwrap(), 20);
  assert_eq!(cpu.regs.sp, sp);
}

#[test]
fn rst() {
  let (mut cpu, mut mem) = init();
  mem.wb(0xc000, 0xef);
  assert_eq!(cpu.step(&mut mem).unwrap(), 16);
  assert_eq!(cpu.regs.pc, 0x28);
  assert_eq!(mem.rw(cpu.regs.sp), 0xc001);
}

#[test]
fn push_pop() {
  let (mut cpu, mut mem) = init();
  cpu.regs.set_bc(0x1234);
  run(&mut cpu, &mut mem, 0xc5, 1, 16);
  assert_eq!(mem.rb(0xfffd), 0x12);
  assert_eq!(mem.rb(0xfffc), 0x34);
  run(&mut cpu, &mut mem, 0xd1, 1, 12);
  assert_eq!(cpu.regs.de(), 0x1234);
  assert_eq!(cpu.regs.sp, 0xfffe);

  // POP AF drops the low nibble of F.
  mem.ww(0xfffc, 0x12ff);
  cpu.regs.sp = 0xfffc;
  run(&mut cpu, &mut mem, 0xf1, 1, 12);
  assert_eq!(cpu.regs.a, 0x12);
  assert_eq!(cpu.regs.f(), 0xf0);
}

#[test]
fn cb_ops() {
  let (mut cpu, mut mem) = init();
  // BIT 7,H
  cpu.regs.h = 0x7f;
  cpu.regs.set_flag(reg::C, true);
  run_cb(&mut cpu, &mut mem, 0x7c, 4);
  assert!(cpu.regs.z() && cpu.regs.h() && cpu.regs.c());

  // SWAP A
  cpu.regs.a = 0xf1;
  run_cb(&mut cpu, &mut mem, 0x37, 4);
  assert_eq!(cpu.regs.a, 0x1f);
  assert!(!cpu.regs.c());

  // RL C
  cpu.regs.c = 0x80;
  cpu.regs.set_flag(reg::C, false);
  run_cb(&mut cpu, &mut mem, 0x11, 4);
  assert_eq!(cpu.regs.c, 0x00);
  assert!(cpu.regs.z() && cpu.regs.c());

  // SRA B keeps the sign bit.
  cpu.regs.b = 0x81;
  run_cb(&mut cpu, &mut mem, 0x28, 4);
  assert_eq!(cpu.regs.b, 0xc0);
  assert!(cpu.regs.c());

  // SRL (HL), SET 0,(HL), RES 6,(HL)
  cpu.regs.set_hl(0xc100);
  mem.wb(0xc100, 0x82);
  run_cb(&mut cpu, &mut mem, 0x3e, 12);
  assert_eq!(mem.rb(0xc100), 0x41);
  run_cb(&mut cpu, &mut mem, 0xc6, 12);
  assert_eq!(mem.rb(0xc100), 0x41);
  run_cb(&mut cpu, &mut mem, 0xb6, 12);
  assert_eq!(mem.rb(0xc100), 0x01);
  run_cb(&mut cpu, &mut mem, 0x46, 8);
  assert!(!cpu.regs.z());
}

#[test]
fn unsupported_opcode() {
  let (mut cpu, mut mem) = init();
  mem.wb(0xc000, 0xd3);
  assert_eq!(
    cpu.step(&mut mem),
    Err(Error::UnsupportedInstruction {
      opcode: 0xd3,
      prefixed: false,
      pc: 0xc000,
    })
  );
}

#[test]
fn every_opcode_decodes() {
  // Each table entry runs without a dispatch fault from a neutral state.
  for (code, inst) in UNPREFIXED.iter().enumerate() {
    if inst.is_none() || code == 0xcb {
      continue;
    }
    let (mut cpu, mut mem) = init();
    cpu.regs.set_hl(0xc800);
    mem.wb(0xc000, code as u8);
    assert!(cpu.step(&mut mem).is_ok(), "opcode {:#04x}", code);
  }
  for code in 0..PREFIXED.len() {
    let (mut cpu, mut mem) = init();
    cpu.regs.set_hl(0xc800);
    mem.write(0xc000, &[0xcb, code as u8]);
    cpu.step(&mut mem).unwrap();
    assert!(cpu.step(&mut mem).is_ok(), "opcode 0xcb {:#04x}", code);
  }
}

#[test]
fn ei_takes_effect_after_next_instruction() {
  let (mut cpu, mut mem) = init();
  mem.write(0xc000, &[0xfb, 0x00, 0x00, 0xf3]);
  cpu.step(&mut mem).unwrap();
  assert!(!cpu.ime);
  cpu.step(&mut mem).unwrap();
  assert!(cpu.ime);
  cpu.step(&mut mem).unwrap();
  assert!(cpu.ime);
  cpu.step(&mut mem).unwrap();
  assert!(!cpu.ime);
}

#[test]
fn reti_enables_immediately() {
  let (mut cpu, mut mem) = init();
  cpu.regs.sp = 0xfffc;
  mem.ww(0xfffc, 0xc123);
  run(&mut cpu, &mut mem, 0xd9, 0x123, 16);
  assert!(cpu.ime);
}

#[test]
fn halt_until_interrupt() {
  let (mut cpu, mut mem) = init();
  mem.write(0xc000, &[0x76, 0x00]);
  cpu.step(&mut mem).unwrap();
  assert!(cpu.halt);
  assert_eq!(cpu.regs.pc, 0xc001);

  for _ in 0..10 {
    assert_eq!(cpu.step(&mut mem).unwrap(), 4);
    assert_eq!(cpu.regs.pc, 0xc001);
  }

  // A pending request wakes it even with IME clear.
  mem.interrupt_enable = 0x04;
  mem.interrupt_flags = 0x04;
  cpu.step(&mut mem).unwrap();
  assert!(!cpu.halt);
  assert_eq!(cpu.regs.pc, 0xc002);
}

#[test]
fn handle_interrupt() {
  let (mut cpu, mut mem) = init();
  cpu.ime = true;
  cpu.regs.pc = 0xc123;
  assert_eq!(cpu.handle_interrupt(&mut mem, 0x50), 20);
  assert!(!cpu.ime);
  assert_eq!(cpu.regs.pc, 0x50);
  assert_eq!(mem.rw(cpu.regs.sp), 0xc123);
}
