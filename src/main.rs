#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use std::fs;

use anyhow::{Context, Result};
use clap::{App, Arg};

use dmg_core::{Config, GameBoy};

fn main() -> Result<()> {
  env_logger::init();

  let matches = App::new("dmg")
    .version(crate_version!())
    .about("Runs a Game Boy cartridge")
    .arg(
      Arg::with_name("ROM")
        .help("Cartridge image to run")
        .required(true)
        .index(1),
    )
    .arg(
      Arg::with_name("bootrom")
        .long("bootrom")
        .value_name("FILE")
        .help("256-byte boot program to run before the cartridge")
        .takes_value(true),
    )
    .arg(
      Arg::with_name("frames")
        .long("frames")
        .value_name("N")
        .help("Run N frames without a window, then exit")
        .takes_value(true),
    )
    .get_matches();

  let rom_path = matches.value_of("ROM").unwrap_or_default();
  let cartridge =
    fs::read(rom_path).with_context(|| format!("reading cartridge {}", rom_path))?;
  let bootrom = match matches.value_of("bootrom") {
    Some(path) => {
      Some(fs::read(path).with_context(|| format!("reading bootrom {}", path))?)
    }
    None => None,
  };

  let mut gb = GameBoy::new(Config {
    bootrom: bootrom,
    cartridge: cartridge,
  })
  .with_context(|| format!("loading {}", rom_path))?;
  info!("loaded {:?}", gb.title());

  match matches.value_of("frames") {
    Some(n) => {
      let frames: u32 = n
        .parse()
        .with_context(|| format!("--frames expects a number, got {:?}", n))?;
      run_headless(&mut gb, frames)
    }
    None => run_windowed(&mut gb),
  }
}

fn run_headless(gb: &mut GameBoy, frames: u32) -> Result<()> {
  for frame in 0..frames {
    gb.run_frame()
      .with_context(|| format!("frame {}", frame))?;
  }
  let cpu = gb.cpu();
  println!(
    "{} frames: pc={:#06x} sp={:#06x} af={:#06x}",
    frames,
    cpu.regs.pc,
    cpu.regs.sp,
    cpu.regs.af()
  );
  Ok(())
}

#[cfg(feature = "window")]
fn run_windowed(gb: &mut GameBoy) -> Result<()> {
  use dmg_core::gpu::{HEIGHT, WIDTH};
  use minifb::{Key, KeyRepeat, Scale, Window, WindowOptions};
  use std::time::{Duration, Instant};

  let title = format!("dmg - {}", gb.title());
  let mut window = Window::new(
    &title,
    WIDTH,
    HEIGHT,
    WindowOptions {
      scale: Scale::X4,
      ..WindowOptions::default()
    },
  )
  .context("opening window")?;

  let frame_time = Duration::from_nanos(1_000_000_000 / 60);
  let mut buffer = vec![0u32; WIDTH * HEIGHT];

  while window.is_open() && !window.is_key_down(Key::Escape) {
    let start = Instant::now();
    if window.is_key_pressed(Key::P, KeyRepeat::No) {
      gb.paused = !gb.paused;
      info!("paused: {}", gb.paused);
    }

    gb.run_frame()?;

    for (px, rgba) in buffer.iter_mut().zip(gb.pixels().chunks(4)) {
      *px = (u32::from(rgba[0]) << 16) | (u32::from(rgba[1]) << 8) | u32::from(rgba[2]);
    }
    window
      .update_with_buffer(&buffer, WIDTH, HEIGHT)
      .context("drawing frame")?;

    let elapsed = start.elapsed();
    if elapsed < frame_time {
      std::thread::sleep(frame_time - elapsed);
    }
  }
  Ok(())
}

#[cfg(not(feature = "window"))]
fn run_windowed(_: &mut GameBoy) -> Result<()> {
  anyhow::bail!("built without the `window` feature; pass --frames to run headless")
}
