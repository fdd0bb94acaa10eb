//! Orchestrates the two end-to-end operations this crate exists to provide:
//! splitting a secret bitmap into `n` shadows embedded in carriers
//! ([`distribute`]), and recovering the secret from any `k` shadow-bearing
//! carriers ([`recover`]).
//!
//! Neither function touches the filesystem or a directory listing — the
//! binary crate is responsible for locating carrier/shadow files and handing
//! over already-loaded [`Bitmap`]s, in the same spirit as the teacher
//! crate's split between "parse these bytes" and "here's a path, go find the
//! file" (the latter living in `main.rs`, not the library).

use crate::bmp::{pixel_array_size, Bitmap};
use crate::error::{ImgShareError, Result};
use crate::prng;
use crate::shadow::{self, most_square_factors};
use crate::solver;
use crate::stego;

/// Splits `secret` into `n` shadows under a `(k, n)` threshold and embeds
/// each into one of `carriers`, returning the carriers (now holding a
/// shadow's LSBs and header fields) in shadow order `1..=n`.
///
/// `secret` is consumed: it's truncated to valid GF(251) bytes in place
/// (§4.8 step 2), then optionally permuted (§9) before the polynomial split.
///
/// ## Errors
/// - [`ImgShareError::InvalidThreshold`] / [`ImgShareError::PixelCountNotDivisibleByK`]
///   from [`shadow::split`].
/// - [`ImgShareError::NotEnoughValidFiles`] if `carriers.len() != n`.
/// - [`ImgShareError::CarrierTooSmall`] if any carrier can't hold its shadow.
pub fn distribute(
  mut secret: Bitmap, k: u16, n: u16, seed: u16, permute: bool, mut carriers: Vec<Bitmap>,
) -> Result<Vec<Bitmap>> {
  if carriers.len() != n as usize {
    return Err(ImgShareError::NotEnoughValidFiles { needed: n as usize, found: carriers.len() });
  }

  secret.truncate_grayscale();
  if permute {
    prng::permute(&mut secret.pixels, seed);
  }

  let shadows = shadow::split(&secret, k, n, seed)?;
  for (carrier, shadow) in carriers.iter_mut().zip(&shadows) {
    stego::embed(carrier, shadow)?;
  }

  Ok(carriers)
}

/// Recovers a `width x height` secret from `k` shadow-bearing `carriers`,
/// the inverse of [`distribute`].
///
/// Each carrier's own `shadow_index` (restored by [`Bitmap::read_from`] from
/// the file header) supplies the Vandermonde `x` coordinate for every block;
/// there is no need to pass shadow indices separately.
///
/// ## Errors
/// - [`ImgShareError::NotEnoughValidFiles`] if `carriers.len() != k`.
/// - [`ImgShareError::PixelCountNotDivisibleByK`] if `width * height` isn't a
///   multiple of `k`.
/// - [`ImgShareError::CarrierTooSmall`] if a carrier can't hold the expected
///   shadow.
/// - [`ImgShareError::SingularMatrix`] if two carriers share a
///   `shadow_index` (or one is `0`).
pub fn recover(
  width: u32, height: i32, k: u16, seed: u16, permute: bool, carriers: Vec<Bitmap>,
) -> Result<Bitmap> {
  if carriers.len() != k as usize {
    return Err(ImgShareError::NotEnoughValidFiles { needed: k as usize, found: carriers.len() });
  }

  let secret_pixel_count = pixel_array_size(width, height.unsigned_abs());
  if secret_pixel_count % u32::from(k) != 0 {
    return Err(ImgShareError::PixelCountNotDivisibleByK { pixel_count: secret_pixel_count, k });
  }
  let shadow_pixel_count = secret_pixel_count / u32::from(k);
  let (shadow_w, shadow_h) = most_square_factors(shadow_pixel_count);

  let shadows: Vec<Bitmap> = carriers
    .iter()
    .map(|carrier| stego::extract(carrier, shadow_w, shadow_h as i32, shadow_pixel_count))
    .collect::<Result<_>>()?;

  let mut pixels = vec![0u8; secret_pixel_count as usize];
  for j in 0..shadow_pixel_count as usize {
    let points: Vec<(u8, u8)> =
      shadows.iter().map(|s| (s.shadow_index as u8, s.pixels[j])).collect();
    let coeffs = solver::solve(&points)?;
    let start = j * k as usize;
    pixels[start..start + k as usize].copy_from_slice(&coeffs);
  }

  if permute {
    prng::unpermute(&mut pixels, seed);
  }

  let mut secret = Bitmap::new(width, height, seed);
  secret.pixels = pixels;
  Ok(secret)
}
