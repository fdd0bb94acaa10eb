//! Arithmetic in GF(251), the finite field of integers modulo the largest
//! prime not exceeding 255.
//!
//! 251 is chosen so that every byte value in `0..=250` is a valid field
//! element; callers are responsible for truncating pixel bytes above 250
//! down to 250 before treating them as field elements (see
//! [`crate::bmp::Bitmap::truncate_grayscale`]).

/// The modulus of the field: the largest prime `p` such that `p <= 255`.
pub const MODULUS: u16 = 251;

const fn compute_inverse_table() -> [u8; 251] {
  let mut table = [0u8; 251];
  let mut a = 1u16;
  while a < MODULUS {
    let mut b = 1u16;
    loop {
      if (a * b) % MODULUS == 1 {
        table[a as usize] = b as u8;
        break;
      }
      b += 1;
    }
    a += 1;
  }
  table
}

/// Precomputed multiplicative inverses modulo 251.
///
/// `INV[0]` is `0`: a sentinel that must never be queried, since zero has no
/// multiplicative inverse. `INV[a] * a mod 251 == 1` for every `a` in
/// `1..=250`.
pub static INV: [u8; 251] = compute_inverse_table();

/// `(a + b) mod 251`.
#[inline]
#[must_use]
pub fn add(a: u8, b: u8) -> u8 {
  ((u16::from(a) + u16::from(b)) % MODULUS) as u8
}

/// `(a - b) mod 251`, always returning a value in `0..251`.
#[inline]
#[must_use]
pub fn sub(a: u8, b: u8) -> u8 {
  modulo(i32::from(a) - i32::from(b))
}

/// `(a * b) mod 251`.
#[inline]
#[must_use]
pub fn mul(a: u8, b: u8) -> u8 {
  ((u16::from(a) * u16::from(b)) % MODULUS) as u8
}

/// The multiplicative inverse of `a` modulo 251.
///
/// ## Panics
/// * If `a` is `0` (zero has no inverse; this indicates a bug upstream, not
///   a recoverable input error, since `0` should never reach here as a
///   matrix pivot without the caller having already reported
///   [`crate::error::ImgShareError::SingularMatrix`]).
#[inline]
#[must_use]
pub fn inv(a: u8) -> u8 {
  assert!(a != 0, "GF(251) has no multiplicative inverse for 0");
  INV[a as usize]
}

/// The "always non-negative" modulo helper used throughout the solver:
/// `mod(a, 251) = ((a % 251) + 251) % 251`.
#[inline]
#[must_use]
pub fn modulo(a: i32) -> u8 {
  let m = a % i32::from(MODULUS);
  (if m < 0 { m + i32::from(MODULUS) } else { m }) as u8
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn inverse_table_is_correct_for_every_nonzero_element() {
    for a in 1..=250u16 {
      let a = a as u8;
      assert_eq!(mul(a, inv(a)), 1, "a = {a}");
    }
  }

  #[test]
  fn spec_concrete_inverse_values() {
    assert_eq!(inv(126), 2);
    assert_eq!(inv(84), 3);
    assert_eq!(inv(250), 250);
  }

  #[test]
  fn sub_wraps_around_zero() {
    assert_eq!(sub(0, 1), 250);
    assert_eq!(sub(5, 10), 246);
  }

  #[test]
  fn modulo_matches_reference_helper() {
    assert_eq!(modulo(-1), 250);
    assert_eq!(modulo(502), 0);
    assert_eq!(modulo(10), 10);
  }
}
