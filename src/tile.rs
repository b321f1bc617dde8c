use bytemuck::{cast_slice, Pod, Zeroable};

/// A single RGBA8 texel. Storage order is R, G, B, A; the encoder never
/// reads `a`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Pixel {
  pub r: u8,
  pub g: u8,
  pub b: u8,
  pub a: u8,
}

impl Pixel {
  pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
    Self { r, g, b, a }
  }
}

/// An RGB888 color with no alpha, used for the analyzer's derived
/// min/max/avg/base colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb8 {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}

impl Rgb8 {
  pub const fn new(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b }
  }
}

/// A 4x4 block of pixels, indexed `[y][x]` with `x` the fast axis.
#[derive(Clone, Copy, Debug)]
pub struct Tile {
  rows: [[Pixel; 4]; 4],
}

impl Tile {
  /// Gather a tile from a row-major RGBA8 buffer with the given row
  /// stride (in bytes). `block_x`/`block_y` are tile coordinates, not
  /// pixel coordinates.
  pub fn gather(src: &[u8], stride: usize, block_x: usize, block_y: usize) -> Self {
    let mut rows = [[Pixel::default(); 4]; 4];
    for (row, dst_row) in rows.iter_mut().enumerate() {
      let row_start = (block_y * 4 + row) * stride + block_x * 16;
      let row_bytes = &src[row_start..row_start + 16];
      dst_row.copy_from_slice(cast_slice(row_bytes));
    }
    Self { rows }
  }

  pub fn at(&self, x: usize, y: usize) -> Pixel {
    self.rows[y][x]
  }

  /// Iterate all 16 pixels in row-major (y outer, x inner) order.
  pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
    self.rows.iter().flatten().copied()
  }
}

/// The four-state per-pixel classification shared by both format
/// packers. Kept as an enum rather than a raw `u8` so the two
/// format-specific bit mappings (`bc1::*`, `etc1s::*`) stay auditable
/// instead of being buried in arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector {
  /// Pixel luma is above the tile midpoint by at least the threshold.
  Brightest = 0,
  /// Pixel luma is below the tile midpoint by at least the threshold.
  Darkest = 1,
  /// Above the midpoint, within the threshold.
  NearBright = 2,
  /// Below the midpoint, within the threshold.
  NearDark = 3,
}

/// Write a decoded 4x4 RGBA8 tile into a strided target buffer, shared
/// by every block decoder (`bc1::decode_bc1`/`decode_bc3`,
/// `etc::decode_etc1`/`decode_etc2`).
pub(crate) fn write_tile(target: &mut [u8], row_stride: usize, colors: &[Pixel; 16]) {
  for row in 0..4 {
    let dst = &mut target[row * row_stride..row * row_stride + 16];
    dst.copy_from_slice(cast_slice(&colors[row * 4..row * 4 + 4]));
  }
}

/// Per-tile summary produced by the analyzer and consumed by both
/// format packers.
#[derive(Clone, Copy, Debug)]
pub struct TileSummary {
  pub min_rgb: Rgb8,
  pub max_rgb: Rgb8,
  pub avg_rgb: Rgb8,
  /// `avg_rgb` shifted along the luma axis to match `mid_luma`.
  pub base_rgb: Rgb8,
  /// `brightness_range / 2`, rounded and clamped to a byte.
  pub bright_range_half: u8,
  /// One selector per pixel, in the same row-major order as `Tile::pixels`.
  pub selectors: [Selector; 16],
}
