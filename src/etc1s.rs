//! ETC1S packer.
//!
//! ETC1S is the "simple" subset of ETC1/ETC2: differential mode, zero
//! color delta between sub-blocks, and both sub-blocks sharing the same
//! codeword. Grounded on `goofyPackBlockETC1S`/`packRgb888ToEtc555`/
//! `getEtc1SBlockControlByte`/`getEtcIndices` in the reference encoder.

use byteorder::{BigEndian, ByteOrder};

use crate::tables::etc1s_codeword;
use crate::tile::{Selector, TileSummary};

/// Reconstructs the 7 literal control-byte constants
/// (`0x03, 0x27, 0x4B, 0x6F, 0x93, 0xB7, 0xDB, 0xFF`) hardcoded in
/// `getEtc1SBlockControlByte` for codewords 0..8. The low two bits are
/// `diff=1, flip=1`; flip being 1 rather than 0 is harmless since
/// ETC1S's two sub-blocks are identical either way.
fn control_byte(codeword: u8) -> u8 {
  (codeword << 5) | (codeword << 2) | 0x03
}

/// Map a tile selector to its (MSB-plane, LSB-plane) bit pair. Brightest
/// and Darkest share `lsb=1` (the "large" modifier magnitude); NearBright
/// and NearDark share `lsb=0`, cross-checked against
/// `ETC_UNSCRAMBLE`/`ETC_MODIFIER_TABLE`'s `{-L,-S,+S,+L}` row order.
fn selector_bits(selector: Selector) -> (u32, u32) {
  match selector {
    Selector::Brightest => (0, 1),
    Selector::Darkest => (1, 1),
    Selector::NearBright => (0, 0),
    Selector::NearDark => (1, 0),
  }
}

/// Pack a tile's analysis into an 8-byte ETC1S block: a 4-byte base-color
/// + control-byte word, followed by a 4-byte pixel-index word.
///
/// Unlike BC1's interleaved 2-bit indices, ETC stores indices as two
/// 16-bit bitplanes (MSB plane in the word's top half, LSB plane in its
/// bottom half), one bit per pixel at bit position `4*x + y` — the
/// convention used throughout the reference decoder's differential- and
/// individual-mode extraction loops.
pub fn pack_etc1s(summary: &TileSummary) -> [u8; 8] {
  let codeword = etc1s_codeword(summary.bright_range_half);

  let mut w0 = [0u8; 4];
  w0[0] = summary.base_rgb.r & 0xF8;
  w0[1] = summary.base_rgb.g & 0xF8;
  w0[2] = summary.base_rgb.b & 0xF8;
  w0[3] = control_byte(codeword);

  let mut msb_plane: u32 = 0;
  let mut lsb_plane: u32 = 0;
  for (i, selector) in summary.selectors.iter().enumerate() {
    let x = i % 4;
    let y = i / 4;
    let bit = 4 * x + y;
    let (msb, lsb) = selector_bits(*selector);
    msb_plane |= msb << bit;
    lsb_plane |= lsb << bit;
  }
  let w1 = (msb_plane << 16) | lsb_plane;

  let mut out = [0u8; 8];
  out[0..4].copy_from_slice(&w0);
  BigEndian::write_u32(&mut out[4..8], w1);
  out
}
