//! Small helpers for poking at individual bits and byte pairs.

pub fn test(value: u8, bit: u8) -> bool {
  (value >> bit) & 1 == 1
}

pub fn get(value: u8, bit: u8) -> u8 {
  (value >> bit) & 1
}

pub fn set(value: u8, bit: u8) -> u8 {
  value | (1 << bit)
}

pub fn clear(value: u8, bit: u8) -> u8 {
  value & !(1 << bit)
}

/// Set or clear `bit` depending on `on`.
pub fn assign(value: u8, bit: u8, on: bool) -> u8 {
  if on {
    set(value, bit)
  } else {
    clear(value, bit)
  }
}

pub fn high(value: u16) -> u8 {
  (value >> 8) as u8
}

pub fn low(value: u16) -> u8 {
  (value & 0xff) as u8
}

pub fn join(high: u8, low: u8) -> u16 {
  (u16::from(high) << 8) | u16::from(low)
}
