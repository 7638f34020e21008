//! Opcode metadata for the two instruction pages.
//!
//! Generated once from the published opcode tables; edit by hand with care.

use crate::cpu::instr::Condition as Cc;
use crate::cpu::instr::Operand::*;
use crate::cpu::instr::Width::*;
use crate::cpu::instr::{Instruction, Mnemonic};

macro_rules! op {
  ($code:expr, $m:ident, [$($o:expr),*], $w:expr, $t:expr) => {
    op!($code, $m, [$($o),*], $w, $t, $t)
  };
  ($code:expr, $m:ident, [$($o:expr),*], $w:expr, $t:expr, $nt:expr) => {
    Some(Instruction {
      opcode: $code,
      mnemonic: Mnemonic::$m,
      operands: &[$($o),*],
      width: $w,
      cycles: $t,
      cycles_not_taken: $nt,
    })
  };
}

pub static UNPREFIXED: [Option<Instruction>; 256] = [
  op!(0x00, Nop, [], W8, 4),
  op!(0x01, Ld, [BC, D16], W16, 12),
  op!(0x02, Ld, [IndBC, A], W8, 8),
  op!(0x03, Inc, [BC], W16, 8),
  op!(0x04, Inc, [B], W8, 4),
  op!(0x05, Dec, [B], W8, 4),
  op!(0x06, Ld, [B, D8], W8, 8),
  op!(0x07, Rlca, [], W8, 4),
  op!(0x08, Ld, [IndA16, SP], W16, 20),
  op!(0x09, Add, [HL, BC], W16, 8),
  op!(0x0a, Ld, [A, IndBC], W8, 8),
  op!(0x0b, Dec, [BC], W16, 8),
  op!(0x0c, Inc, [C], W8, 4),
  op!(0x0d, Dec, [C], W8, 4),
  op!(0x0e, Ld, [C, D8], W8, 8),
  op!(0x0f, Rrca, [], W8, 4),
  op!(0x10, Stop, [D8], W8, 4),
  op!(0x11, Ld, [DE, D16], W16, 12),
  op!(0x12, Ld, [IndDE, A], W8, 8),
  op!(0x13, Inc, [DE], W16, 8),
  op!(0x14, Inc, [D], W8, 4),
  op!(0x15, Dec, [D], W8, 4),
  op!(0x16, Ld, [D, D8], W8, 8),
  op!(0x17, Rla, [], W8, 4),
  op!(0x18, Jr, [R8], W16, 12),
  op!(0x19, Add, [HL, DE], W16, 8),
  op!(0x1a, Ld, [A, IndDE], W8, 8),
  op!(0x1b, Dec, [DE], W16, 8),
  op!(0x1c, Inc, [E], W8, 4),
  op!(0x1d, Dec, [E], W8, 4),
  op!(0x1e, Ld, [E, D8], W8, 8),
  op!(0x1f, Rra, [], W8, 4),
  op!(0x20, Jr, [Cond(Cc::NZ), R8], W16, 12, 8),
  op!(0x21, Ld, [HL, D16], W16, 12),
  op!(0x22, Ld, [IndHLInc, A], W8, 8),
  op!(0x23, Inc, [HL], W16, 8),
  op!(0x24, Inc, [H], W8, 4),
  op!(0x25, Dec, [H], W8, 4),
  op!(0x26, Ld, [H, D8], W8, 8),
  op!(0x27, Daa, [], W8, 4),
  op!(0x28, Jr, [Cond(Cc::Z), R8], W16, 12, 8),
  op!(0x29, Add, [HL, HL], W16, 8),
  op!(0x2a, Ld, [A, IndHLInc], W8, 8),
  op!(0x2b, Dec, [HL], W16, 8),
  op!(0x2c, Inc, [L], W8, 4),
  op!(0x2d, Dec, [L], W8, 4),
  op!(0x2e, Ld, [L, D8], W8, 8),
  op!(0x2f, Cpl, [], W8, 4),
  op!(0x30, Jr, [Cond(Cc::NC), R8], W16, 12, 8),
  op!(0x31, Ld, [SP, D16], W16, 12),
  op!(0x32, Ld, [IndHLDec, A], W8, 8),
  op!(0x33, Inc, [SP], W16, 8),
  op!(0x34, Inc, [IndHL], W8, 12),
  op!(0x35, Dec, [IndHL], W8, 12),
  op!(0x36, Ld, [IndHL, D8], W8, 12),
  op!(0x37, Scf, [], W8, 4),
  op!(0x38, Jr, [Cond(Cc::C), R8], W16, 12, 8),
  op!(0x39, Add, [HL, SP], W16, 8),
  op!(0x3a, Ld, [A, IndHLDec], W8, 8),
  op!(0x3b, Dec, [SP], W16, 8),
  op!(0x3c, Inc, [A], W8, 4),
  op!(0x3d, Dec, [A], W8, 4),
  op!(0x3e, Ld, [A, D8], W8, 8),
  op!(0x3f, Ccf, [], W8, 4),
  op!(0x40, Ld, [B, B], W8, 4),
  op!(0x41, Ld, [B, C], W8, 4),
  op!(0x42, Ld, [B, D], W8, 4),
  op!(0x43, Ld, [B, E], W8, 4),
  op!(0x44, Ld, [B, H], W8, 4),
  op!(0x45, Ld, [B, L], W8, 4),
  op!(0x46, Ld, [B, IndHL], W8, 8),
  op!(0x47, Ld, [B, A], W8, 4),
  op!(0x48, Ld, [C, B], W8, 4),
  op!(0x49, Ld, [C, C], W8, 4),
  op!(0x4a, Ld, [C, D], W8, 4),
  op!(0x4b, Ld, [C, E], W8, 4),
  op!(0x4c, Ld, [C, H], W8, 4),
  op!(0x4d, Ld, [C, L], W8, 4),
  op!(0x4e, Ld, [C, IndHL], W8, 8),
  op!(0x4f, Ld, [C, A], W8, 4),
  op!(0x50, Ld, [D, B], W8, 4),
  op!(0x51, Ld, [D, C], W8, 4),
  op!(0x52, Ld, [D, D], W8, 4),
  op!(0x53, Ld, [D, E], W8, 4),
  op!(0x54, Ld, [D, H], W8, 4),
  op!(0x55, Ld, [D, L], W8, 4),
  op!(0x56, Ld, [D, IndHL], W8, 8),
  op!(0x57, Ld, [D, A], W8, 4),
  op!(0x58, Ld, [E, B], W8, 4),
  op!(0x59, Ld, [E, C], W8, 4),
  op!(0x5a, Ld, [E, D], W8, 4),
  op!(0x5b, Ld, [E, E], W8, 4),
  op!(0x5c, Ld, [E, H], W8, 4),
  op!(0x5d, Ld, [E, L], W8, 4),
  op!(0x5e, Ld, [E, IndHL], W8, 8),
  op!(0x5f, Ld, [E, A], W8, 4),
  op!(0x60, Ld, [H, B], W8, 4),
  op!(0x61, Ld, [H, C], W8, 4),
  op!(0x62, Ld, [H, D], W8, 4),
  op!(0x63, Ld, [H, E], W8, 4),
  op!(0x64, Ld, [H, H], W8, 4),
  op!(0x65, Ld, [H, L], W8, 4),
  op!(0x66, Ld, [H, IndHL], W8, 8),
  op!(0x67, Ld, [H, A], W8, 4),
  op!(0x68, Ld, [L, B], W8, 4),
  op!(0x69, Ld, [L, C], W8, 4),
  op!(0x6a, Ld, [L, D], W8, 4),
  op!(0x6b, Ld, [L, E], W8, 4),
  op!(0x6c, Ld, [L, H], W8, 4),
  op!(0x6d, Ld, [L, L], W8, 4),
  op!(0x6e, Ld, [L, IndHL], W8, 8),
  op!(0x6f, Ld, [L, A], W8, 4),
  op!(0x70, Ld, [IndHL, B], W8, 8),
  op!(0x71, Ld, [IndHL, C], W8, 8),
  op!(0x72, Ld, [IndHL, D], W8, 8),
  op!(0x73, Ld, [IndHL, E], W8, 8),
  op!(0x74, Ld, [IndHL, H], W8, 8),
  op!(0x75, Ld, [IndHL, L], W8, 8),
  op!(0x76, Halt, [], W8, 4),
  op!(0x77, Ld, [IndHL, A], W8, 8),
  op!(0x78, Ld, [A, B], W8, 4),
  op!(0x79, Ld, [A, C], W8, 4),
  op!(0x7a, Ld, [A, D], W8, 4),
  op!(0x7b, Ld, [A, E], W8, 4),
  op!(0x7c, Ld, [A, H], W8, 4),
  op!(0x7d, Ld, [A, L], W8, 4),
  op!(0x7e, Ld, [A, IndHL], W8, 8),
  op!(0x7f, Ld, [A, A], W8, 4),
  op!(0x80, Add, [A, B], W8, 4),
  op!(0x81, Add, [A, C], W8, 4),
  op!(0x82, Add, [A, D], W8, 4),
  op!(0x83, Add, [A, E], W8, 4),
  op!(0x84, Add, [A, H], W8, 4),
  op!(0x85, Add, [A, L], W8, 4),
  op!(0x86, Add, [A, IndHL], W8, 8),
  op!(0x87, Add, [A, A], W8, 4),
  op!(0x88, Adc, [A, B], W8, 4),
  op!(0x89, Adc, [A, C], W8, 4),
  op!(0x8a, Adc, [A, D], W8, 4),
  op!(0x8b, Adc, [A, E], W8, 4),
  op!(0x8c, Adc, [A, H], W8, 4),
  op!(0x8d, Adc, [A, L], W8, 4),
  op!(0x8e, Adc, [A, IndHL], W8, 8),
  op!(0x8f, Adc, [A, A], W8, 4),
  op!(0x90, Sub, [A, B], W8, 4),
  op!(0x91, Sub, [A, C], W8, 4),
  op!(0x92, Sub, [A, D], W8, 4),
  op!(0x93, Sub, [A, E], W8, 4),
  op!(0x94, Sub, [A, H], W8, 4),
  op!(0x95, Sub, [A, L], W8, 4),
  op!(0x96, Sub, [A, IndHL], W8, 8),
  op!(0x97, Sub, [A, A], W8, 4),
  op!(0x98, Sbc, [A, B], W8, 4),
  op!(0x99, Sbc, [A, C], W8, 4),
  op!(0x9a, Sbc, [A, D], W8, 4),
  op!(0x9b, Sbc, [A, E], W8, 4),
  op!(0x9c, Sbc, [A, H], W8, 4),
  op!(0x9d, Sbc, [A, L], W8, 4),
  op!(0x9e, Sbc, [A, IndHL], W8, 8),
  op!(0x9f, Sbc, [A, A], W8, 4),
  op!(0xa0, And, [A, B], W8, 4),
  op!(0xa1, And, [A, C], W8, 4),
  op!(0xa2, And, [A, D], W8, 4),
  op!(0xa3, And, [A, E], W8, 4),
  op!(0xa4, And, [A, H], W8, 4),
  op!(0xa5, And, [A, L], W8, 4),
  op!(0xa6, And, [A, IndHL], W8, 8),
  op!(0xa7, And, [A, A], W8, 4),
  op!(0xa8, Xor, [A, B], W8, 4),
  op!(0xa9, Xor, [A, C], W8, 4),
  op!(0xaa, Xor, [A, D], W8, 4),
  op!(0xab, Xor, [A, E], W8, 4),
  op!(0xac, Xor, [A, H], W8, 4),
  op!(0xad, Xor, [A, L], W8, 4),
  op!(0xae, Xor, [A, IndHL], W8, 8),
  op!(0xaf, Xor, [A, A], W8, 4),
  op!(0xb0, Or, [A, B], W8, 4),
  op!(0xb1, Or, [A, C], W8, 4),
  op!(0xb2, Or, [A, D], W8, 4),
  op!(0xb3, Or, [A, E], W8, 4),
  op!(0xb4, Or, [A, H], W8, 4),
  op!(0xb5, Or, [A, L], W8, 4),
  op!(0xb6, Or, [A, IndHL], W8, 8),
  op!(0xb7, Or, [A, A], W8, 4),
  op!(0xb8, Cp, [A, B], W8, 4),
  op!(0xb9, Cp, [A, C], W8, 4),
  op!(0xba, Cp, [A, D], W8, 4),
  op!(0xbb, Cp, [A, E], W8, 4),
  op!(0xbc, Cp, [A, H], W8, 4),
  op!(0xbd, Cp, [A, L], W8, 4),
  op!(0xbe, Cp, [A, IndHL], W8, 8),
  op!(0xbf, Cp, [A, A], W8, 4),
  op!(0xc0, Ret, [Cond(Cc::NZ)], W16, 20, 8),
  op!(0xc1, Pop, [BC], W16, 12),
  op!(0xc2, Jp, [Cond(Cc::NZ), D16], W16, 16, 12),
  op!(0xc3, Jp, [D16], W16, 16),
  op!(0xc4, Call, [Cond(Cc::NZ), D16], W16, 24, 12),
  op!(0xc5, Push, [BC], W16, 16),
  op!(0xc6, Add, [A, D8], W8, 8),
  op!(0xc7, Rst, [Vector(0x00)], W16, 16),
  op!(0xc8, Ret, [Cond(Cc::Z)], W16, 20, 8),
  op!(0xc9, Ret, [], W16, 16),
  op!(0xca, Jp, [Cond(Cc::Z), D16], W16, 16, 12),
  op!(0xcb, Prefix, [], W8, 4),
  op!(0xcc, Call, [Cond(Cc::Z), D16], W16, 24, 12),
  op!(0xcd, Call, [D16], W16, 24),
  op!(0xce, Adc, [A, D8], W8, 8),
  op!(0xcf, Rst, [Vector(0x08)], W16, 16),
  op!(0xd0, Ret, [Cond(Cc::NC)], W16, 20, 8),
  op!(0xd1, Pop, [DE], W16, 12),
  op!(0xd2, Jp, [Cond(Cc::NC), D16], W16, 16, 12),
  None, // 0xd3
  op!(0xd4, Call, [Cond(Cc::NC), D16], W16, 24, 12),
  op!(0xd5, Push, [DE], W16, 16),
  op!(0xd6, Sub, [A, D8], W8, 8),
  op!(0xd7, Rst, [Vector(0x10)], W16, 16),
  op!(0xd8, Ret, [Cond(Cc::C)], W16, 20, 8),
  op!(0xd9, Reti, [], W16, 16),
  op!(0xda, Jp, [Cond(Cc::C), D16], W16, 16, 12),
  None, // 0xdb
  op!(0xdc, Call, [Cond(Cc::C), D16], W16, 24, 12),
  None, // 0xdd
  op!(0xde, Sbc, [A, D8], W8, 8),
  op!(0xdf, Rst, [Vector(0x18)], W16, 16),
  op!(0xe0, Ld, [HighA8, A], W8, 12),
  op!(0xe1, Pop, [HL], W16, 12),
  op!(0xe2, Ld, [HighC, A], W8, 8),
  None, // 0xe3
  None, // 0xe4
  op!(0xe5, Push, [HL], W16, 16),
  op!(0xe6, And, [A, D8], W8, 8),
  op!(0xe7, Rst, [Vector(0x20)], W16, 16),
  op!(0xe8, Add, [SP, R8], W16, 16),
  op!(0xe9, Jp, [HL], W16, 4),
  op!(0xea, Ld, [IndA16, A], W8, 16),
  None, // 0xeb
  None, // 0xec
  None, // 0xed
  op!(0xee, Xor, [A, D8], W8, 8),
  op!(0xef, Rst, [Vector(0x28)], W16, 16),
  op!(0xf0, Ld, [A, HighA8], W8, 12),
  op!(0xf1, Pop, [AF], W16, 12),
  op!(0xf2, Ld, [A, HighC], W8, 8),
  op!(0xf3, Di, [], W8, 4),
  None, // 0xf4
  op!(0xf5, Push, [AF], W16, 16),
  op!(0xf6, Or, [A, D8], W8, 8),
  op!(0xf7, Rst, [Vector(0x30)], W16, 16),
  op!(0xf8, Ld, [HL, SpR8], W16, 12),
  op!(0xf9, Ld, [SP, HL], W16, 8),
  op!(0xfa, Ld, [A, IndA16], W8, 16),
  op!(0xfb, Ei, [], W8, 4),
  None, // 0xfc
  None, // 0xfd
  op!(0xfe, Cp, [A, D8], W8, 8),
  op!(0xff, Rst, [Vector(0x38)], W16, 16),
];

/// Cycle counts here exclude the 4 cycles already charged for the 0xcb byte.
pub static PREFIXED: [Option<Instruction>; 256] = [
  op!(0x00, Rlc, [B], W8, 4),
  op!(0x01, Rlc, [C], W8, 4),
  op!(0x02, Rlc, [D], W8, 4),
  op!(0x03, Rlc, [E], W8, 4),
  op!(0x04, Rlc, [H], W8, 4),
  op!(0x05, Rlc, [L], W8, 4),
  op!(0x06, Rlc, [IndHL], W8, 12),
  op!(0x07, Rlc, [A], W8, 4),
  op!(0x08, Rrc, [B], W8, 4),
  op!(0x09, Rrc, [C], W8, 4),
  op!(0x0a, Rrc, [D], W8, 4),
  op!(0x0b, Rrc, [E], W8, 4),
  op!(0x0c, Rrc, [H], W8, 4),
  op!(0x0d, Rrc, [L], W8, 4),
  op!(0x0e, Rrc, [IndHL], W8, 12),
  op!(0x0f, Rrc, [A], W8, 4),
  op!(0x10, Rl, [B], W8, 4),
  op!(0x11, Rl, [C], W8, 4),
  op!(0x12, Rl, [D], W8, 4),
  op!(0x13, Rl, [E], W8, 4),
  op!(0x14, Rl, [H], W8, 4),
  op!(0x15, Rl, [L], W8, 4),
  op!(0x16, Rl, [IndHL], W8, 12),
  op!(0x17, Rl, [A], W8, 4),
  op!(0x18, Rr, [B], W8, 4),
  op!(0x19, Rr, [C], W8, 4),
  op!(0x1a, Rr, [D], W8, 4),
  op!(0x1b, Rr, [E], W8, 4),
  op!(0x1c, Rr, [H], W8, 4),
  op!(0x1d, Rr, [L], W8, 4),
  op!(0x1e, Rr, [IndHL], W8, 12),
  op!(0x1f, Rr, [A], W8, 4),
  op!(0x20, Sla, [B], W8, 4),
  op!(0x21, Sla, [C], W8, 4),
  op!(0x22, Sla, [D], W8, 4),
  op!(0x23, Sla, [E], W8, 4),
  op!(0x24, Sla, [H], W8, 4),
  op!(0x25, Sla, [L], W8, 4),
  op!(0x26, Sla, [IndHL], W8, 12),
  op!(0x27, Sla, [A], W8, 4),
  op!(0x28, Sra, [B], W8, 4),
  op!(0x29, Sra, [C], W8, 4),
  op!(0x2a, Sra, [D], W8, 4),
  op!(0x2b, Sra, [E], W8, 4),
  op!(0x2c, Sra, [H], W8, 4),
  op!(0x2d, Sra, [L], W8, 4),
  op!(0x2e, Sra, [IndHL], W8, 12),
  op!(0x2f, Sra, [A], W8, 4),
  op!(0x30, Swap, [B], W8, 4),
  op!(0x31, Swap, [C], W8, 4),
  op!(0x32, Swap, [D], W8, 4),
  op!(0x33, Swap, [E], W8, 4),
  op!(0x34, Swap, [H], W8, 4),
  op!(0x35, Swap, [L], W8, 4),
  op!(0x36, Swap, [IndHL], W8, 12),
  op!(0x37, Swap, [A], W8, 4),
  op!(0x38, Srl, [B], W8, 4),
  op!(0x39, Srl, [C], W8, 4),
  op!(0x3a, Srl, [D], W8, 4),
  op!(0x3b, Srl, [E], W8, 4),
  op!(0x3c, Srl, [H], W8, 4),
  op!(0x3d, Srl, [L], W8, 4),
  op!(0x3e, Srl, [IndHL], W8, 12),
  op!(0x3f, Srl, [A], W8, 4),
  op!(0x40, Bit, [Bit(0), B], W8, 4),
  op!(0x41, Bit, [Bit(0), C], W8, 4),
  op!(0x42, Bit, [Bit(0), D], W8, 4),
  op!(0x43, Bit, [Bit(0), E], W8, 4),
  op!(0x44, Bit, [Bit(0), H], W8, 4),
  op!(0x45, Bit, [Bit(0), L], W8, 4),
  op!(0x46, Bit, [Bit(0), IndHL], W8, 8),
  op!(0x47, Bit, [Bit(0), A], W8, 4),
  op!(0x48, Bit, [Bit(1), B], W8, 4),
  op!(0x49, Bit, [Bit(1), C], W8, 4),
  op!(0x4a, Bit, [Bit(1), D], W8, 4),
  op!(0x4b, Bit, [Bit(1), E], W8, 4),
  op!(0x4c, Bit, [Bit(1), H], W8, 4),
  op!(0x4d, Bit, [Bit(1), L], W8, 4),
  op!(0x4e, Bit, [Bit(1), IndHL], W8, 8),
  op!(0x4f, Bit, [Bit(1), A], W8, 4),
  op!(0x50, Bit, [Bit(2), B], W8, 4),
  op!(0x51, Bit, [Bit(2), C], W8, 4),
  op!(0x52, Bit, [Bit(2), D], W8, 4),
  op!(0x53, Bit, [Bit(2), E], W8, 4),
  op!(0x54, Bit, [Bit(2), H], W8, 4),
  op!(0x55, Bit, [Bit(2), L], W8, 4),
  op!(0x56, Bit, [Bit(2), IndHL], W8, 8),
  op!(0x57, Bit, [Bit(2), A], W8, 4),
  op!(0x58, Bit, [Bit(3), B], W8, 4),
  op!(0x59, Bit, [Bit(3), C], W8, 4),
  op!(0x5a, Bit, [Bit(3), D], W8, 4),
  op!(0x5b, Bit, [Bit(3), E], W8, 4),
  op!(0x5c, Bit, [Bit(3), H], W8, 4),
  op!(0x5d, Bit, [Bit(3), L], W8, 4),
  op!(0x5e, Bit, [Bit(3), IndHL], W8, 8),
  op!(0x5f, Bit, [Bit(3), A], W8, 4),
  op!(0x60, Bit, [Bit(4), B], W8, 4),
  op!(0x61, Bit, [Bit(4), C], W8, 4),
  op!(0x62, Bit, [Bit(4), D], W8, 4),
  op!(0x63, Bit, [Bit(4), E], W8, 4),
  op!(0x64, Bit, [Bit(4), H], W8, 4),
  op!(0x65, Bit, [Bit(4), L], W8, 4),
  op!(0x66, Bit, [Bit(4), IndHL], W8, 8),
  op!(0x67, Bit, [Bit(4), A], W8, 4),
  op!(0x68, Bit, [Bit(5), B], W8, 4),
  op!(0x69, Bit, [Bit(5), C], W8, 4),
  op!(0x6a, Bit, [Bit(5), D], W8, 4),
  op!(0x6b, Bit, [Bit(5), E], W8, 4),
  op!(0x6c, Bit, [Bit(5), H], W8, 4),
  op!(0x6d, Bit, [Bit(5), L], W8, 4),
  op!(0x6e, Bit, [Bit(5), IndHL], W8, 8),
  op!(0x6f, Bit, [Bit(5), A], W8, 4),
  op!(0x70, Bit, [Bit(6), B], W8, 4),
  op!(0x71, Bit, [Bit(6), C], W8, 4),
  op!(0x72, Bit, [Bit(6), D], W8, 4),
  op!(0x73, Bit, [Bit(6), E], W8, 4),
  op!(0x74, Bit, [Bit(6), H], W8, 4),
  op!(0x75, Bit, [Bit(6), L], W8, 4),
  op!(0x76, Bit, [Bit(6), IndHL], W8, 8),
  op!(0x77, Bit, [Bit(6), A], W8, 4),
  op!(0x78, Bit, [Bit(7), B], W8, 4),
  op!(0x79, Bit, [Bit(7), C], W8, 4),
  op!(0x7a, Bit, [Bit(7), D], W8, 4),
  op!(0x7b, Bit, [Bit(7), E], W8, 4),
  op!(0x7c, Bit, [Bit(7), H], W8, 4),
  op!(0x7d, Bit, [Bit(7), L], W8, 4),
  op!(0x7e, Bit, [Bit(7), IndHL], W8, 8),
  op!(0x7f, Bit, [Bit(7), A], W8, 4),
  op!(0x80, Res, [Bit(0), B], W8, 4),
  op!(0x81, Res, [Bit(0), C], W8, 4),
  op!(0x82, Res, [Bit(0), D], W8, 4),
  op!(0x83, Res, [Bit(0), E], W8, 4),
  op!(0x84, Res, [Bit(0), H], W8, 4),
  op!(0x85, Res, [Bit(0), L], W8, 4),
  op!(0x86, Res, [Bit(0), IndHL], W8, 12),
  op!(0x87, Res, [Bit(0), A], W8, 4),
  op!(0x88, Res, [Bit(1), B], W8, 4),
  op!(0x89, Res, [Bit(1), C], W8, 4),
  op!(0x8a, Res, [Bit(1), D], W8, 4),
  op!(0x8b, Res, [Bit(1), E], W8, 4),
  op!(0x8c, Res, [Bit(1), H], W8, 4),
  op!(0x8d, Res, [Bit(1), L], W8, 4),
  op!(0x8e, Res, [Bit(1), IndHL], W8, 12),
  op!(0x8f, Res, [Bit(1), A], W8, 4),
  op!(0x90, Res, [Bit(2), B], W8, 4),
  op!(0x91, Res, [Bit(2), C], W8, 4),
  op!(0x92, Res, [Bit(2), D], W8, 4),
  op!(0x93, Res, [Bit(2), E], W8, 4),
  op!(0x94, Res, [Bit(2), H], W8, 4),
  op!(0x95, Res, [Bit(2), L], W8, 4),
  op!(0x96, Res, [Bit(2), IndHL], W8, 12),
  op!(0x97, Res, [Bit(2), A], W8, 4),
  op!(0x98, Res, [Bit(3), B], W8, 4),
  op!(0x99, Res, [Bit(3), C], W8, 4),
  op!(0x9a, Res, [Bit(3), D], W8, 4),
  op!(0x9b, Res, [Bit(3), E], W8, 4),
  op!(0x9c, Res, [Bit(3), H], W8, 4),
  op!(0x9d, Res, [Bit(3), L], W8, 4),
  op!(0x9e, Res, [Bit(3), IndHL], W8, 12),
  op!(0x9f, Res, [Bit(3), A], W8, 4),
  op!(0xa0, Res, [Bit(4), B], W8, 4),
  op!(0xa1, Res, [Bit(4), C], W8, 4),
  op!(0xa2, Res, [Bit(4), D], W8, 4),
  op!(0xa3, Res, [Bit(4), E], W8, 4),
  op!(0xa4, Res, [Bit(4), H], W8, 4),
  op!(0xa5, Res, [Bit(4), L], W8, 4),
  op!(0xa6, Res, [Bit(4), IndHL], W8, 12),
  op!(0xa7, Res, [Bit(4), A], W8, 4),
  op!(0xa8, Res, [Bit(5), B], W8, 4),
  op!(0xa9, Res, [Bit(5), C], W8, 4),
  op!(0xaa, Res, [Bit(5), D], W8, 4),
  op!(0xab, Res, [Bit(5), E], W8, 4),
  op!(0xac, Res, [Bit(5), H], W8, 4),
  op!(0xad, Res, [Bit(5), L], W8, 4),
  op!(0xae, Res, [Bit(5), IndHL], W8, 12),
  op!(0xaf, Res, [Bit(5), A], W8, 4),
  op!(0xb0, Res, [Bit(6), B], W8, 4),
  op!(0xb1, Res, [Bit(6), C], W8, 4),
  op!(0xb2, Res, [Bit(6), D], W8, 4),
  op!(0xb3, Res, [Bit(6), E], W8, 4),
  op!(0xb4, Res, [Bit(6), H], W8, 4),
  op!(0xb5, Res, [Bit(6), L], W8, 4),
  op!(0xb6, Res, [Bit(6), IndHL], W8, 12),
  op!(0xb7, Res, [Bit(6), A], W8, 4),
  op!(0xb8, Res, [Bit(7), B], W8, 4),
  op!(0xb9, Res, [Bit(7), C], W8, 4),
  op!(0xba, Res, [Bit(7), D], W8, 4),
  op!(0xbb, Res, [Bit(7), E], W8, 4),
  op!(0xbc, Res, [Bit(7), H], W8, 4),
  op!(0xbd, Res, [Bit(7), L], W8, 4),
  op!(0xbe, Res, [Bit(7), IndHL], W8, 12),
  op!(0xbf, Res, [Bit(7), A], W8, 4),
  op!(0xc0, Set, [Bit(0), B], W8, 4),
  op!(0xc1, Set, [Bit(0), C], W8, 4),
  op!(0xc2, Set, [Bit(0), D], W8, 4),
  op!(0xc3, Set, [Bit(0), E], W8, 4),
  op!(0xc4, Set, [Bit(0), H], W8, 4),
  op!(0xc5, Set, [Bit(0), L], W8, 4),
  op!(0xc6, Set, [Bit(0), IndHL], W8, 12),
  op!(0xc7, Set, [Bit(0), A], W8, 4),
  op!(0xc8, Set, [Bit(1), B], W8, 4),
  op!(0xc9, Set, [Bit(1), C], W8, 4),
  op!(0xca, Set, [Bit(1), D], W8, 4),
  op!(0xcb, Set, [Bit(1), E], W8, 4),
  op!(0xcc, Set, [Bit(1), H], W8, 4),
  op!(0xcd, Set, [Bit(1), L], W8, 4),
  op!(0xce, Set, [Bit(1), IndHL], W8, 12),
  op!(0xcf, Set, [Bit(1), A], W8, 4),
  op!(0xd0, Set, [Bit(2), B], W8, 4),
  op!(0xd1, Set, [Bit(2), C], W8, 4),
  op!(0xd2, Set, [Bit(2), D], W8, 4),
  op!(0xd3, Set, [Bit(2), E], W8, 4),
  op!(0xd4, Set, [Bit(2), H], W8, 4),
  op!(0xd5, Set, [Bit(2), L], W8, 4),
  op!(0xd6, Set, [Bit(2), IndHL], W8, 12),
  op!(0xd7, Set, [Bit(2), A], W8, 4),
  op!(0xd8, Set, [Bit(3), B], W8, 4),
  op!(0xd9, Set, [Bit(3), C], W8, 4),
  op!(0xda, Set, [Bit(3), D], W8, 4),
  op!(0xdb, Set, [Bit(3), E], W8, 4),
  op!(0xdc, Set, [Bit(3), H], W8, 4),
  op!(0xdd, Set, [Bit(3), L], W8, 4),
  op!(0xde, Set, [Bit(3), IndHL], W8, 12),
  op!(0xdf, Set, [Bit(3), A], W8, 4),
  op!(0xe0, Set, [Bit(4), B], W8, 4),
  op!(0xe1, Set, [Bit(4), C], W8, 4),
  op!(0xe2, Set, [Bit(4), D], W8, 4),
  op!(0xe3, Set, [Bit(4), E], W8, 4),
  op!(0xe4, Set, [Bit(4), H], W8, 4),
  op!(0xe5, Set, [Bit(4), L], W8, 4),
  op!(0xe6, Set, [Bit(4), IndHL], W8, 12),
  op!(0xe7, Set, [Bit(4), A], W8, 4),
  op!(0xe8, Set, [Bit(5), B], W8, 4),
  op!(0xe9, Set, [Bit(5), C], W8, 4),
  op!(0xea, Set, [Bit(5), D], W8, 4),
  op!(0xeb, Set, [Bit(5), E], W8, 4),
  op!(0xec, Set, [Bit(5), H], W8, 4),
  op!(0xed, Set, [Bit(5), L], W8, 4),
  op!(0xee, Set, [Bit(5), IndHL], W8, 12),
  op!(0xef, Set, [Bit(5), A], W8, 4),
  op!(0xf0, Set, [Bit(6), B], W8, 4),
  op!(0xf1, Set, [Bit(6), C], W8, 4),
  op!(0xf2, Set, [Bit(6), D], W8, 4),
  op!(0xf3, Set, [Bit(6), E], W8, 4),
  op!(0xf4, Set, [Bit(6), H], W8, 4),
  op!(0xf5, Set, [Bit(6), L], W8, 4),
  op!(0xf6, Set, [Bit(6), IndHL], W8, 12),
  op!(0xf7, Set, [Bit(6), A], W8, 4),
  op!(0xf8, Set, [Bit(7), B], W8, 4),
  op!(0xf9, Set, [Bit(7), C], W8, 4),
  op!(0xfa, Set, [Bit(7), D], W8, 4),
  op!(0xfb, Set, [Bit(7), E], W8, 4),
  op!(0xfc, Set, [Bit(7), H], W8, 4),
  op!(0xfd, Set, [Bit(7), L], W8, 4),
  op!(0xfe, Set, [Bit(7), IndHL], W8, 12),
  op!(0xff, Set, [Bit(7), A], W8, 4),
];
