use thiserror::Error;

/// Failure modes of the whole-image compressors.
///
/// The encoder is otherwise total: any pixel content is accepted, and
/// only the tile grid dimensions can be rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressError {
  #[error("image width {0} is not a multiple of 4")]
  InvalidWidth(usize),
  #[error("image height {0} is not a multiple of 4")]
  InvalidHeight(usize),
}
