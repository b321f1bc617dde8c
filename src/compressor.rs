//! Whole-image compression: tile a full RGBA8 buffer and pack each 4x4
//! block with either the BC1 or ETC1S packer.
//!
//! Grounded on `goofy_tc_reference.cpp`'s `compressDXT1`/`compressETC1`:
//! the same row-major block grid walk, generalized from raw `-1`/`-2`
//! return codes to a typed `CompressError`.

use tracing::debug;

use crate::analyzer::analyze;
use crate::bc1::pack_bc1;
use crate::error::CompressError;
use crate::etc1s::pack_etc1s;
use crate::tile::Tile;

const BC1_MIN_BRIGHTNESS_RANGE: f32 = 8.0;
const ETC1S_MIN_BRIGHTNESS_RANGE: f32 = 16.0;

fn check_dimensions(width: usize, height: usize) -> Result<(), CompressError> {
  if width % 4 != 0 {
    return Err(CompressError::InvalidWidth(width));
  }
  if height % 4 != 0 {
    return Err(CompressError::InvalidHeight(height));
  }
  Ok(())
}

/// Compress an RGBA8 image (`stride` bytes per row) to BC1. The output
/// buffer holds `(width/4) * (height/4) * 8` bytes, one 8-byte block per
/// tile in row-major order.
pub fn compress_bc1(input: &[u8], width: usize, height: usize, stride: usize) -> Result<Vec<u8>, CompressError> {
  check_dimensions(width, height)?;
  debug!(width, height, "compressing image to BC1");

  let block_w = width / 4;
  let block_h = height / 4;
  let mut out = Vec::with_capacity(block_w * block_h * 8);

  for by in 0..block_h {
    for bx in 0..block_w {
      let tile = Tile::gather(input, stride, bx, by);
      let summary = analyze(&tile, BC1_MIN_BRIGHTNESS_RANGE);
      out.extend_from_slice(&pack_bc1(&summary));
    }
  }
  Ok(out)
}

/// Compress an RGBA8 image (`stride` bytes per row) to ETC1S. The output
/// buffer holds `(width/4) * (height/4) * 8` bytes, one 8-byte block per
/// tile in row-major order.
pub fn compress_etc1s(input: &[u8], width: usize, height: usize, stride: usize) -> Result<Vec<u8>, CompressError> {
  check_dimensions(width, height)?;
  debug!(width, height, "compressing image to ETC1S");

  let block_w = width / 4;
  let block_h = height / 4;
  let mut out = Vec::with_capacity(block_w * block_h * 8);

  for by in 0..block_h {
    for bx in 0..block_w {
      let tile = Tile::gather(input, stride, bx, by);
      let summary = analyze(&tile, ETC1S_MIN_BRIGHTNESS_RANGE);
      out.extend_from_slice(&pack_etc1s(&summary));
    }
  }
  Ok(out)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn checkerboard(width: usize, height: usize) -> Vec<u8> {
    let mut buf = vec![0u8; width * height * 4];
    for y in 0..height {
      for x in 0..width {
        let v = if (x / 4 + y / 4) % 2 == 0 { 255 } else { 0 };
        let o = (y * width + x) * 4;
        buf[o] = v;
        buf[o + 1] = v;
        buf[o + 2] = v;
        buf[o + 3] = 255;
      }
    }
    buf
  }

  #[test]
  fn rejects_width_not_multiple_of_four() {
    let buf = vec![0u8; 8 * 4 * 4];
    assert_eq!(compress_bc1(&buf, 5, 4, 5 * 4), Err(CompressError::InvalidWidth(5)));
  }

  #[test]
  fn rejects_height_not_multiple_of_four() {
    let buf = vec![0u8; 4 * 5 * 4];
    assert_eq!(compress_bc1(&buf, 4, 5, 4 * 4), Err(CompressError::InvalidHeight(5)));
  }

  #[test]
  fn bc1_output_size_matches_tile_grid() {
    let buf = checkerboard(16, 8);
    let out = compress_bc1(&buf, 16, 8, 16 * 4).unwrap();
    assert_eq!(out.len(), (16 / 4) * (8 / 4) * 8);
  }

  #[test]
  fn etc1s_output_size_matches_tile_grid() {
    let buf = checkerboard(16, 8);
    let out = compress_etc1s(&buf, 16, 8, 16 * 4).unwrap();
    assert_eq!(out.len(), (16 / 4) * (8 / 4) * 8);
  }

  #[test]
  fn tiles_are_emitted_in_row_major_order() {
    // A 8x4 image: two tiles side by side. Make the left tile solid
    // black and the right tile solid white so their BC1 max_rgb
    // endpoints differ and identify which tile produced which block.
    let mut buf = vec![0u8; 8 * 4 * 4];
    for y in 0..4 {
      for x in 0..8 {
        let v = if x < 4 { 0 } else { 255 };
        let o = (y * 8 + x) * 4;
        buf[o] = v;
        buf[o + 1] = v;
        buf[o + 2] = v;
        buf[o + 3] = 255;
      }
    }
    let out = compress_bc1(&buf, 8, 4, 8 * 4).unwrap();
    assert_eq!(out.len(), 16);
    // First block's endpoint0 (bytes 0..2) should be black (0x0020,
    // forced opaque-mode bit only); second block's should be white.
    assert_eq!(&out[0..2], &[0x20, 0x00]);
    assert_eq!(&out[8..10], &[0xFF, 0xFF]);
  }
}
