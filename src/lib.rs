//! Fixed-rate GPU texture block compression: 4x4 RGBA8 tiles in, 8-byte
//! BC1 (DXT1) or ETC1S blocks out. Also decodes BC1, BC3 (DXT5), ETC1,
//! and ETC2 (including all of its T-mode/H-mode/planar/EAC-alpha
//! submodes), since a correct decoder has to handle whatever a
//! standards-compliant third-party encoder produced, not just this
//! crate's own output.

mod analyzer;
mod bc1;
mod bits;
mod compressor;
mod error;
mod etc;
mod etc1s;
mod tables;
mod tile;

pub use bc1::{decode_bc1, decode_bc3, pack_bc1};
pub use compressor::{compress_bc1, compress_etc1s};
pub use error::CompressError;
pub use etc::{decode_etc1, decode_etc2};
pub use etc1s::pack_etc1s;
pub use tile::{Pixel, Rgb8, Tile, TileSummary};
