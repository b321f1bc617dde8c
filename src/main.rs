use std::fs::File;
use std::io::prelude::*;

use clap::Parser;
use tinytex::{compress_bc1, compress_etc1s};

/// Synthesize a deterministic RGBA8 test pattern and compress it to
/// BC1 and ETC1S, writing `<output>.bc1` and `<output>.etc1s`.
#[derive(Parser)]
struct Args {
  /// Image width in pixels, must be a multiple of 4.
  #[arg(long, default_value_t = 64)]
  width: usize,

  /// Image height in pixels, must be a multiple of 4.
  #[arg(long, default_value_t = 64)]
  height: usize,

  /// Output file stem.
  #[arg(long, default_value = "test")]
  output: String,
}

/// A smooth gradient overlaid with a coarse checkerboard, so both flat
/// tiles (testing the selector-classification edge case) and
/// high-contrast tiles appear in the same image.
fn synthesize(width: usize, height: usize) -> Vec<u8> {
  let mut buf = vec![0u8; width * height * 4];
  for y in 0..height {
    for x in 0..width {
      let checker = ((x / 8 + y / 8) % 2) * 255;
      let r = ((x * 255) / width.max(1)).min(255) as u8;
      let g = ((y * 255) / height.max(1)).min(255) as u8;
      let b = checker as u8;
      let o = (y * width + x) * 4;
      buf[o] = r;
      buf[o + 1] = g;
      buf[o + 2] = b;
      buf[o + 3] = 255;
    }
  }
  buf
}

fn main() {
  tracing_subscriber::fmt::init();

  let args = Args::parse();

  let pixels = synthesize(args.width, args.height);
  let stride = args.width * 4;

  let bc1_data = compress_bc1(&pixels, args.width, args.height, stride).expect("dimensions must be multiples of 4");
  let etc1s_data = compress_etc1s(&pixels, args.width, args.height, stride).expect("dimensions must be multiples of 4");

  let mut bc1_file = File::create(format!("{}.bc1", args.output)).unwrap();
  bc1_file.write_all(&bc1_data).unwrap();

  let mut etc1s_file = File::create(format!("{}.etc1s", args.output)).unwrap();
  etc1s_file.write_all(&etc1s_data).unwrap();

  println!(
    "wrote {}.bc1 ({} bytes) and {}.etc1s ({} bytes) for a {}x{} image",
    args.output,
    bc1_data.len(),
    args.output,
    etc1s_data.len(),
    args.width,
    args.height
  );
}
