//! Display controller: scanline timing, STAT bookkeeping and background and
//! window rendering into a buffer of shade indices.

use crate::bits;
use crate::interrupt::Interrupt;

pub const WIDTH: usize = 160;
pub const HEIGHT: usize = 144;

pub const VRAM_SIZE: usize = 0x2000;
pub const OAM_SIZE: usize = 0xa0;

/// RGBA color.
pub type RGBA = [u8; 4];

/// Shades 0 (lightest) to 3 (darkest).
pub const GRAY: [RGBA; 4] = [
  [232, 232, 232, 255],
  [160, 160, 160, 255],
  [88, 88, 88, 255],
  [16, 16, 16, 255],
];

const LINE_CYCLES: i32 = 456;
const LINES: u8 = 154;
const VBLANK_LINE: u8 = 144;
const OAM_SCAN_END: i32 = LINE_CYCLES - 80;
const TRANSFER_END: i32 = OAM_SCAN_END - 172;

// LCDC bits.
const BG_ENABLE: u8 = 0;
const BG_MAP: u8 = 3;
const TILE_DATA: u8 = 4;
const WINDOW_ENABLE: u8 = 5;
const WINDOW_MAP: u8 = 6;
const DISPLAY_ENABLE: u8 = 7;

// STAT bits.
const COINCIDENCE: u8 = 2;
const HBLANK_INT: u8 = 3;
const VBLANK_INT: u8 = 4;
const OAM_INT: u8 = 5;
const COINCIDENCE_INT: u8 = 6;

/// Offsets into VRAM of the two tile maps.
const MAP_LOW: usize = 0x1800;
const MAP_HIGH: usize = 0x1c00;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
  HBlank = 0,
  VBlank = 1,
  OamScan = 2,
  Transfer = 3,
}

pub struct GPU {
  pub lcdc: u8,
  stat: u8,
  pub scy: u8,
  pub scx: u8,
  pub ly: u8,
  pub lyc: u8,
  pub dma: u8,
  pub bgp: u8,
  pub obp0: u8,
  pub obp1: u8,
  pub wy: u8,
  pub wx: u8,

  pub vram: Vec<u8>,
  pub oam: Vec<u8>,

  /// Cycles left on the current scanline.
  countdown: i32,
  /// Shade index (0-3) per pixel.
  frame: Vec<u8>,
  pub palette: [RGBA; 4],
}

impl GPU {
  pub fn new() -> GPU {
    GPU {
      lcdc: 0,
      stat: 0,
      scy: 0,
      scx: 0,
      ly: 0,
      lyc: 0,
      dma: 0,
      bgp: 0,
      obp0: 0,
      obp1: 0,
      wy: 0,
      wx: 0,

      vram: vec![0; VRAM_SIZE],
      oam: vec![0; OAM_SIZE],

      countdown: LINE_CYCLES,
      frame: vec![0; WIDTH * HEIGHT],
      palette: GRAY,
    }
  }

  pub fn stat(&self) -> u8 {
    self.stat
  }

  /// Only the interrupt selects are writable; mode and coincidence are ours.
  pub fn set_stat(&mut self, value: u8) {
    self.stat = (self.stat & 0x07) | (value & 0x78);
  }

  pub fn mode(&self) -> Mode {
    match self.stat & 0x3 {
      0 => Mode::HBlank,
      1 => Mode::VBlank,
      2 => Mode::OamScan,
      _ => Mode::Transfer,
    }
  }

  fn set_mode(&mut self, mode: Mode) {
    self.stat = (self.stat & !0x3) | mode as u8;
  }

  pub fn enabled(&self) -> bool {
    bits::test(self.lcdc, DISPLAY_ENABLE)
  }

  /// Advance by `cycles` and return the interrupt bits raised.
  pub fn step(&mut self, cycles: u32) -> u8 {
    if !self.enabled() {
      self.countdown = LINE_CYCLES;
      self.ly = 0;
      self.set_mode(Mode::VBlank);
      return 0;
    }

    let mut ints = 0;
    let prev = self.mode();
    let next = if self.ly >= VBLANK_LINE {
      Mode::VBlank
    } else if self.countdown >= OAM_SCAN_END {
      Mode::OamScan
    } else if self.countdown >= TRANSFER_END {
      Mode::Transfer
    } else {
      Mode::HBlank
    };
    self.set_mode(next);

    if next != prev {
      let select = match next {
        Mode::HBlank => Some(HBLANK_INT),
        Mode::VBlank => Some(VBLANK_INT),
        Mode::OamScan => Some(OAM_INT),
        Mode::Transfer => {
          self.render_line();
          None
        }
      };
      if select.map_or(false, |bit| bits::test(self.stat, bit)) {
        ints |= Interrupt::Stat.mask();
      }
    }

    if self.ly == self.lyc {
      // Edge-triggered: the flag stays set for the whole line, the request
      // is made once when it turns on.
      if !bits::test(self.stat, COINCIDENCE) && bits::test(self.stat, COINCIDENCE_INT) {
        ints |= Interrupt::Stat.mask();
      }
      self.stat = bits::set(self.stat, COINCIDENCE);
    } else {
      self.stat = bits::clear(self.stat, COINCIDENCE);
    }

    self.countdown -= cycles as i32;
    if self.countdown <= 0 {
      self.countdown = LINE_CYCLES;
      self.ly = (self.ly + 1) % LINES;
      if self.ly == VBLANK_LINE {
        ints |= Interrupt::VBlank.mask();
      }
    }

    ints
  }

  /// Shade indices, row-major, `WIDTH * HEIGHT` long.
  pub fn frame(&self) -> &[u8] {
    &self.frame
  }

  /// The frame as RGBA bytes through the current palette.
  pub fn rgba(&self) -> Vec<u8> {
    let mut out = Vec::with_capacity(self.frame.len() * 4);
    for &shade in &self.frame {
      out.extend_from_slice(&self.palette[usize::from(shade & 0x3)]);
    }
    out
  }

  fn render_line(&mut self) {
    let ly = self.ly;
    let row = usize::from(ly) * WIDTH;

    if !bits::test(self.lcdc, BG_ENABLE) {
      let blank = self.shade(0);
      for px in &mut self.frame[row..row + WIDTH] {
        *px = blank;
      }
      return;
    }

    let bg_map = self.map(BG_MAP);
    let window_map = self.map(WINDOW_MAP);
    let window = bits::test(self.lcdc, WINDOW_ENABLE) && self.wy <= ly;
    let wx = i32::from(self.wx) - 7;

    for x in 0..WIDTH {
      let colour = if window && x as i32 >= wx {
        self.tile_pixel(window_map, (x as i32 - wx) as u8, ly - self.wy)
      } else {
        let sx = (x as u8).wrapping_add(self.scx);
        let sy = ly.wrapping_add(self.scy);
        self.tile_pixel(bg_map, sx, sy)
      };
      self.frame[row + x] = self.shade(colour);
    }
  }

  fn map(&self, select: u8) -> usize {
    if bits::test(self.lcdc, select) {
      MAP_HIGH
    } else {
      MAP_LOW
    }
  }

  /// Colour index of pixel (x, y) of the 256x256 plane drawn by `map`.
  fn tile_pixel(&self, map: usize, x: u8, y: u8) -> u8 {
    let raw = self.vram[map + usize::from(y / 8) * 32 + usize::from(x / 8)];
    let tile = if bits::test(self.lcdc, TILE_DATA) {
      usize::from(raw)
    } else {
      // Signed indices around 0x9000.
      (i16::from(raw as i8) + 256) as usize
    };
    let addr = tile * 16 + usize::from(y % 8) * 2;
    let lo = self.vram[addr];
    let hi = self.vram[addr + 1];
    let bit = 7 - (x % 8);
    (bits::get(hi, bit) << 1) | bits::get(lo, bit)
  }

  fn shade(&self, colour: u8) -> u8 {
    (self.bgp >> (colour * 2)) & 0x3
  }
}
