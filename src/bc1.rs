//! BC1 (DXT1) packer, and the BC1/BC3 (DXT5) block decoders.
//!
//! Packing is grounded on `goofyPackBlockDXT1`/`packRgb888ToDxt565`/
//! `getDxtIndices` in the reference encoder. Decoding follows the
//! squish-derived `DecompressColour`/`DecompressAlphaDxt5` routines from
//! the reference decoder (see `other_examples` squish-rs `colourblock.rs`
//! for the idiomatic Rust shape this borrows).

use byteorder::{ByteOrder, LittleEndian};

use crate::tile::{write_tile, Pixel, Rgb8, TileSummary};

/// Green is quantized to 5 significant bits, not 6, with the field's low
/// bit always cleared (`(c.g >> 3) << 1`). Packing a full 6-bit green
/// would let `pack_565(max) == pack_565(min)` land on an odd value, and
/// then forcing bit 5 for the opaque-mode trick in `pack_bc1` would only
/// make `endpoint0 == endpoint1` instead of strictly greater.
fn pack_565(c: Rgb8) -> u16 {
  let r5 = (c.r >> 3) as u16;
  let g6 = ((c.g >> 3) as u16) << 1;
  let b5 = (c.b >> 3) as u16;
  (r5 << 11) | (g6 << 5) | b5
}

fn unpack_565(value: u16) -> Rgb8 {
  let r5 = ((value >> 11) & 0x1F) as u8;
  let g6 = ((value >> 5) & 0x3F) as u8;
  let b5 = (value & 0x1F) as u8;
  Rgb8::new((r5 << 3) | (r5 >> 2), (g6 << 2) | (g6 >> 4), (b5 << 3) | (b5 >> 2))
}

/// Pack a tile's analysis into an 8-byte BC1 block.
///
/// Endpoint 0 (bytes 0..1) always holds `max_rgb` with the G field's low
/// bit forced to 1. Since `pack_565` already clears that bit for both
/// endpoints, this guarantees `endpoint0 > endpoint1` strictly (not just
/// `>=`) and therefore selects 4-interpolant ("opaque") mode without a
/// runtime comparison.
pub fn pack_bc1(summary: &TileSummary) -> [u8; 8] {
  let endpoint0 = pack_565(summary.max_rgb) | 0x0020;
  let endpoint1 = pack_565(summary.min_rgb);

  let mut indices: u32 = 0;
  for (i, selector) in summary.selectors.iter().enumerate() {
    indices |= (*selector as u32) << (2 * i);
  }

  let mut out = [0u8; 8];
  LittleEndian::write_u16(&mut out[0..2], endpoint0);
  LittleEndian::write_u16(&mut out[2..4], endpoint1);
  LittleEndian::write_u32(&mut out[4..8], indices);
  out
}

/// Build the 4-entry RGB palette for a BC1-shaped color block.
///
/// `punchthrough` selects the 1-bit-alpha interpolation (entry 2 is the
/// average of the endpoints, entry 3 is transparent black) instead of
/// the usual 2/3-1/3 interpolants. BC1 decode sets this from
/// `endpoint0 <= endpoint1`; BC3 color decode always passes `false`.
fn bc1_palette(endpoint0: u16, endpoint1: u16, punchthrough: bool) -> ([Rgb8; 4], [u8; 4]) {
  let c0 = unpack_565(endpoint0);
  let c1 = unpack_565(endpoint1);

  let (c2, c3, a3) = if punchthrough {
    (
      Rgb8::new(
        ((c0.r as u16 + c1.r as u16) / 2) as u8,
        ((c0.g as u16 + c1.g as u16) / 2) as u8,
        ((c0.b as u16 + c1.b as u16) / 2) as u8,
      ),
      Rgb8::new(0, 0, 0),
      0u8,
    )
  } else {
    (
      Rgb8::new(
        ((2 * c0.r as u16 + c1.r as u16) / 3) as u8,
        ((2 * c0.g as u16 + c1.g as u16) / 3) as u8,
        ((2 * c0.b as u16 + c1.b as u16) / 3) as u8,
      ),
      Rgb8::new(
        ((c0.r as u16 + 2 * c1.r as u16) / 3) as u8,
        ((c0.g as u16 + 2 * c1.g as u16) / 3) as u8,
        ((c0.b as u16 + 2 * c1.b as u16) / 3) as u8,
      ),
      255u8,
    )
  };

  ([c0, c1, c2, c3], [255, 255, 255, a3])
}

/// Decode an 8-byte BC1 block, writing a 4x4 RGBA8 tile at
/// `target[0..16]`, `target[row_stride..]`, etc.
pub fn decode_bc1(src: &[u8; 8], target: &mut [u8], row_stride: usize) {
  let endpoint0 = LittleEndian::read_u16(&src[0..2]);
  let endpoint1 = LittleEndian::read_u16(&src[2..4]);
  let indices = LittleEndian::read_u32(&src[4..8]);

  let (palette, alpha) = bc1_palette(endpoint0, endpoint1, endpoint0 <= endpoint1);

  let mut pixels = [Pixel::default(); 16];
  for (i, px) in pixels.iter_mut().enumerate() {
    let code = ((indices >> (2 * i)) & 0x3) as usize;
    let c = palette[code];
    *px = Pixel::new(c.r, c.g, c.b, alpha[code]);
  }
  write_tile(target, row_stride, &pixels);
}

const DXT5_ALPHA_STRIDE: usize = 8;

fn decode_dxt5_alpha(block: &[u8; 8]) -> [u8; 16] {
  let a0 = block[0] as u32;
  let a1 = block[1] as u32;

  let mut codes = [0u8; 8];
  codes[0] = a0 as u8;
  codes[1] = a1 as u8;
  if a0 > a1 {
    for i in 1..7u32 {
      codes[1 + i as usize] = (((7 - i) * a0 + i * a1) / 7) as u8;
    }
  } else {
    for i in 1..5u32 {
      codes[1 + i as usize] = (((5 - i) * a0 + i * a1) / 5) as u8;
    }
    codes[6] = 0;
    codes[7] = 255;
  }

  let mut indices = [0u8; 16];
  for chunk in 0..2 {
    let base = 2 + chunk * 3;
    let value = (block[base] as u32) | ((block[base + 1] as u32) << 8) | ((block[base + 2] as u32) << 16);
    for j in 0..8 {
      indices[chunk * 8 + j] = ((value >> (3 * j)) & 0x7) as u8;
    }
  }

  let mut out = [0u8; 16];
  for (i, idx) in indices.iter().enumerate() {
    out[i] = codes[*idx as usize];
  }
  out
}

/// Decode a 16-byte BC3 (DXT5) block: an 8-byte alpha block followed by
/// an 8-byte BC1-shaped color block, the latter always decoded in
/// 4-interpolant mode (BC3 has no punchthrough-alpha mode of its own).
pub fn decode_bc3(src: &[u8; 16], target: &mut [u8], row_stride: usize) {
  let mut alpha_block = [0u8; 8];
  alpha_block.copy_from_slice(&src[0..DXT5_ALPHA_STRIDE]);
  let alphas = decode_dxt5_alpha(&alpha_block);

  let endpoint0 = LittleEndian::read_u16(&src[8..10]);
  let endpoint1 = LittleEndian::read_u16(&src[10..12]);
  let indices = LittleEndian::read_u32(&src[12..16]);
  let (palette, _) = bc1_palette(endpoint0, endpoint1, false);

  let mut pixels = [Pixel::default(); 16];
  for (i, px) in pixels.iter_mut().enumerate() {
    let code = ((indices >> (2 * i)) & 0x3) as usize;
    let c = palette[code];
    *px = Pixel::new(c.r, c.g, c.b, alphas[i]);
  }
  write_tile(target, row_stride, &pixels);
}
