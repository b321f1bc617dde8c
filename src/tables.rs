// Shared lookup tables. Values are taken verbatim from the reference
// implementation and the published ETC/BC3 specifications. Do not
// "correct" the threshold table below: the encoder's `brightnessRange`
// is half of peak-to-peak at comparison time, not the full range.

/// ETC intensity modifier table, indexed `[codeword][0..4]`, giving
/// `{-L, -S, +S, +L}` for each of the 8 codewords.
pub const ETC_MODIFIER_TABLE: [[i32; 4]; 8] = [
  [-8, -2, 2, 8],
  [-17, -5, 5, 17],
  [-29, -9, 9, 29],
  [-42, -13, 13, 42],
  [-60, -18, 18, 60],
  [-80, -24, 24, 80],
  [-106, -33, 33, 106],
  [-183, -47, 47, 183],
];

/// Threshold table used to pick the ETC1S control byte's codeword from
/// `TileSummary::bright_range_half`. `brightness_range <= THRESHOLDS[i]`
/// selects codeword `i`; anything above the last entry selects codeword 7.
pub const ETC1S_CODEWORD_THRESHOLDS: [u8; 7] = [10, 21, 36, 52, 75, 90, 126];

/// Unscramble table mapping a raw 2-bit ETC pixel index (MSB<<1 | LSB) to
/// an index into `ETC_MODIFIER_TABLE`'s per-codeword row.
pub const ETC_UNSCRAMBLE: [usize; 4] = [2, 3, 1, 0];

/// Distance table shared by ETC2 T-mode and H-mode.
pub const ETC2_TH_DISTANCE_TABLE: [i32; 8] = [3, 6, 11, 16, 23, 32, 41, 64];

/// ETC2-EAC alpha modifier table, indexed `[table][selector]`.
pub const ETC2_EAC_ALPHA_TABLE: [[i32; 8]; 16] = [
  [-3, -6, -9, -15, 2, 5, 8, 14],
  [-3, -7, -10, -13, 2, 6, 9, 12],
  [-2, -5, -8, -13, 1, 4, 7, 12],
  [-2, -4, -6, -13, 1, 3, 5, 12],
  [-3, -6, -8, -12, 2, 5, 7, 11],
  [-3, -7, -9, -11, 2, 6, 8, 10],
  [-4, -7, -8, -11, 3, 6, 7, 10],
  [-3, -5, -8, -11, 2, 4, 7, 10],
  [-2, -6, -8, -10, 1, 5, 7, 9],
  [-2, -5, -8, -10, 1, 4, 7, 9],
  [-2, -4, -8, -10, 1, 3, 7, 9],
  [-2, -5, -7, -10, 1, 4, 6, 9],
  [-3, -4, -7, -10, 2, 3, 6, 9],
  [-1, -2, -3, -10, 0, 1, 2, 9],
  [-4, -6, -8, -9, 3, 5, 7, 8],
  [-3, -5, -7, -9, 2, 4, 6, 8],
];

/// Pick the ETC1S control byte's 3-bit codeword (used as both `cw1` and
/// `cw2`, since ETC1S always keeps them equal) from a brightness range.
pub fn etc1s_codeword(bright_range_half: u8) -> u8 {
  for (i, &threshold) in ETC1S_CODEWORD_THRESHOLDS.iter().enumerate() {
    if bright_range_half <= threshold {
      return i as u8;
    }
  }
  7
}
