//! Splitting a secret bitmap into `n` shadow bitmaps, and choosing the
//! dimensions a shadow of a given pixel count should take.

use crate::bmp::Bitmap;
use crate::error::{ImgShareError, Result};
use crate::polynomial::evaluate;

/// Factors `size` into the most-square `(width, height)` pair: the largest
/// `width` not exceeding `sqrt(size)` that evenly divides `size`.
///
/// Falls back to `(1, size)` when `size` is prime (or otherwise has no
/// factor `>= 3`), rather than searching all the way down to `1` itself —
/// this mirrors the reference search, which stops at `y == 2`.
#[must_use]
pub fn most_square_factors(size: u32) -> (u32, u32) {
  if size == 0 {
    return (0, 0);
  }
  let mut y = (size as f64).sqrt() as u32;
  while y > 2 {
    if size % y == 0 {
      return (y, size / y);
    }
    y -= 1;
  }
  (1, size)
}

/// Splits `secret`'s pixel array into `n` shadows under a `(k, n)`
/// threshold, using `seed` as every shadow's stored key.
///
/// `secret.pixels.len()` must already be truncated to valid GF(251) values
/// (see [`Bitmap::truncate_grayscale`]) and evenly divisible by `k`.
///
/// ## Errors
/// Returns [`ImgShareError::InvalidThreshold`] if `k` or `n` fall outside
/// `2 <= k <= n <= 250`, or [`ImgShareError::PixelCountNotDivisibleByK`] if
/// the secret's pixel count isn't a multiple of `k`.
pub fn split(secret: &Bitmap, k: u16, n: u16, seed: u16) -> Result<Vec<Bitmap>> {
  if k < 2 || k > n || n > 250 {
    return Err(ImgShareError::InvalidThreshold { k, n });
  }

  let pixel_count = secret.pixels.len() as u32;
  if pixel_count % u32::from(k) != 0 {
    return Err(ImgShareError::PixelCountNotDivisibleByK { pixel_count, k });
  }

  let shadow_pixel_count = pixel_count / u32::from(k);
  let (width, height) = most_square_factors(shadow_pixel_count);

  let mut shadows: Vec<Bitmap> = (1..=n)
    .map(|s| {
      let mut shadow = Bitmap::new(width, height as i32, seed);
      shadow.shadow_index = s;
      shadow
    })
    .collect();

  for block in 0..shadow_pixel_count {
    let start = (block * u32::from(k)) as usize;
    let coeff = &secret.pixels[start..start + k as usize];
    for (i, shadow) in shadows.iter_mut().enumerate() {
      let s = (i + 1) as u8;
      shadow.pixels[block as usize] = evaluate(coeff, s);
    }
  }

  Ok(shadows)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn most_square_factors_prefers_the_larger_near_sqrt_divisor() {
    assert_eq!(most_square_factors(12), (3, 4));
    assert_eq!(most_square_factors(100), (10, 10));
  }

  #[test]
  fn most_square_factors_falls_back_to_one_by_n_for_primes() {
    assert_eq!(most_square_factors(7), (1, 7));
    assert_eq!(most_square_factors(13), (1, 13));
  }

  #[test]
  fn split_rejects_thresholds_outside_bounds() {
    let secret = Bitmap::new(4, 1, 0);
    assert!(matches!(
      split(&secret, 1, 3, 691).unwrap_err(),
      ImgShareError::InvalidThreshold { k: 1, n: 3 }
    ));
    assert!(matches!(
      split(&secret, 3, 2, 691).unwrap_err(),
      ImgShareError::InvalidThreshold { k: 3, n: 2 }
    ));
  }

  #[test]
  fn split_rejects_pixel_counts_not_divisible_by_k() {
    let mut secret = Bitmap::new(3, 1, 0);
    secret.pixels = vec![1, 2, 3];
    let err = split(&secret, 2, 3, 691).unwrap_err();
    assert!(matches!(err, ImgShareError::PixelCountNotDivisibleByK { pixel_count: 3, k: 2 }));
  }

  #[test]
  fn spec_scenario_k2_n2_shadow_pixels() {
    let mut secret = Bitmap::new(4, 1, 0);
    secret.pixels = vec![10, 20, 30, 40];
    let shadows = split(&secret, 2, 2, 691).unwrap();
    assert_eq!(shadows.len(), 2);
    assert_eq!(shadows[0].shadow_index, 1);
    assert_eq!(shadows[1].shadow_index, 2);
    assert_eq!(shadows[0].pixels, vec![30, 70]);
    assert_eq!(shadows[1].pixels, vec![50, 110]);
  }

  #[test]
  fn every_shadow_carries_the_seed_as_its_key() {
    let mut secret = Bitmap::new(4, 1, 0);
    secret.pixels = vec![5, 6, 7, 8];
    let shadows = split(&secret, 2, 4, 4242).unwrap();
    for shadow in &shadows {
      assert_eq!(shadow.key, 4242);
    }
  }
}
