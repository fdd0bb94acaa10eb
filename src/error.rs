//! The single error type returned by every fallible operation in this crate.
//!
//! Kept hand-rolled (rather than pulling in `thiserror`) in the same spirit
//! as the teacher crate's `ImagineError`/`BmpError`: there's few enough
//! variants that a manual `Display` impl stays readable, and it keeps the
//! library's dependency surface minimal. The CLI binary is where `anyhow`
//! enters the picture, wrapping these errors with call-site context.

use std::fmt;

/// Everything that can go wrong while splitting, embedding, extracting, or
/// recovering a secret image.
#[derive(Debug)]
#[non_exhaustive]
pub enum ImgShareError {
  /// The file doesn't start with the `"BM"` magic tag.
  NotABmp,
  /// The DIB header declares a size other than 40 bytes.
  UnsupportedDibHeaderSize(u32),
  /// The image isn't 8 bits per pixel.
  UnsupportedDepth(u16),
  /// The file (or stream) ended before a required field could be read.
  ShortRead,
  /// `k` was outside `2..=n`, or `n` was outside `k..=250`.
  InvalidThreshold { k: u16, n: u16 },
  /// A secret's pixel count isn't evenly divisible by `k`.
  PixelCountNotDivisibleByK { pixel_count: u32, k: u16 },
  /// A carrier doesn't have enough pixel bytes to hold `8 *
  /// shadow_pixel_count` LSBs.
  CarrierTooSmall { needed: u32, available: u32 },
  /// The caller supplied fewer usable carrier/shadow files than required.
  NotEnoughValidFiles { needed: usize, found: usize },
  /// Two or more shadows share the same `shadow_index` (or one is `0`),
  /// making the Vandermonde matrix singular.
  SingularMatrix,
  /// An I/O failure while reading or writing a BMP.
  Io(std::io::Error),
}

impl fmt::Display for ImgShareError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::NotABmp => write!(f, "not a BMP file (missing \"BM\" magic)"),
      Self::UnsupportedDibHeaderSize(size) => {
        write!(f, "unsupported DIB header size {size} (only 40-byte BITMAPINFOHEADER is supported)")
      }
      Self::UnsupportedDepth(depth) => {
        write!(f, "unsupported bit depth {depth} (only 8-bit indexed BMPs are supported)")
      }
      Self::ShortRead => write!(f, "unexpected end of file while reading a BMP"),
      Self::InvalidThreshold { k, n } => {
        write!(f, "invalid (k, n) threshold: k = {k}, n = {n} (need 2 <= k <= n <= 250)")
      }
      Self::PixelCountNotDivisibleByK { pixel_count, k } => {
        write!(f, "secret has {pixel_count} pixel bytes, not evenly divisible by k = {k}")
      }
      Self::CarrierTooSmall { needed, available } => {
        write!(f, "carrier has {available} pixel bytes, needs at least {needed} to hold the shadow")
      }
      Self::NotEnoughValidFiles { needed, found } => {
        write!(f, "found {found} valid files, needed {needed}")
      }
      Self::SingularMatrix => {
        write!(f, "singular Vandermonde matrix (duplicate or zero shadow index)")
      }
      Self::Io(e) => write!(f, "I/O error: {e}"),
    }
  }
}

impl std::error::Error for ImgShareError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<std::io::Error> for ImgShareError {
  #[inline]
  fn from(e: std::io::Error) -> Self {
    Self::Io(e)
  }
}

pub type Result<T> = core::result::Result<T, ImgShareError>;
