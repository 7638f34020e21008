use crate::bits;

/// DIV ticks once every this many cycles, whether or not the timer runs.
const DIV_PERIOD: u32 = 256;

/// TAC bit that starts TIMA counting.
const ENABLE: u8 = 2;

#[derive(Debug)]
pub struct Timer {
  pub div: u8,
  pub tima: u8,
  pub tma: u8,
  tac: u8,

  /// Cycles left until the next TIMA increment.
  countdown: i32,
  /// Cycles accumulated toward the next DIV increment.
  div_clock: u32,
}

impl Timer {
  pub fn new() -> Timer {
    Timer {
      div: 0,
      tima: 0,
      tma: 0,
      tac: 0,
      countdown: 0,
      div_clock: 0,
    }
  }

  pub fn tac(&self) -> u8 {
    self.tac
  }

  /// Select a new frequency. The countdown restarts from the new period.
  pub fn set_tac(&mut self, value: u8) {
    self.tac = value & 0x7;
    self.countdown = self.period();
  }

  /// Any write to DIV clears it.
  pub fn reset_div(&mut self) {
    self.div = 0;
    self.div_clock = 0;
  }

  fn period(&self) -> i32 {
    match self.tac & 0x3 {
      0 => 1024,
      1 => 16,
      2 => 64,
      _ => 256,
    }
  }

  /// Advance by `cycles`.
  /// Returns true if TIMA overflowed and a timer interrupt is due.
  pub fn step(&mut self, cycles: u32) -> bool {
    self.div_clock += cycles;
    while self.div_clock >= DIV_PERIOD {
      self.div_clock -= DIV_PERIOD;
      self.div = self.div.wrapping_add(1);
    }

    if !bits::test(self.tac, ENABLE) {
      return false;
    }

    self.countdown -= cycles as i32;
    if self.countdown > 0 {
      return false;
    }
    self.countdown = self.period();

    match self.tima.checked_add(1) {
      Some(tima) => {
        self.tima = tima;
        false
      }
      None => {
        self.tima = self.tma;
        true
      }
    }
  }
}
