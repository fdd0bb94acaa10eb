//! A small, self-contained, reproducible PRNG used to diffuse pixels before
//! sharing (see [`crate::pipeline`]'s `permute` option).
//!
//! This is **not** a cryptographically secure generator: the scheme's
//! security rests on the Shamir polynomial construction, not on this PRNG.
//! The only contract that matters is that [`permute`] and [`unpermute`] are
//! exact inverses of one another for a given seed, and that the sequence is
//! reproducible across hosts. Unlike the C reference (which reseeds the
//! process-global `rand()` state), each call here owns its own generator
//! state, so repeated distribute/recover calls in the same process never
//! interfere with one another.

/// A minimal-standard linear congruential generator, seeded by a 16-bit key.
///
/// Each instance is independent; there is no global/shared state.
struct Lcg {
  state: u32,
}

impl Lcg {
  #[inline]
  fn new(seed: u16) -> Self {
    Self { state: u32::from(seed) }
  }

  /// Advances the generator and returns the next raw value in `0..=0x7FFF`,
  /// mirroring the range of a classic 15-bit `RAND_MAX` `rand()`.
  #[inline]
  fn next_raw(&mut self) -> u32 {
    self.state = self.state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
    (self.state >> 16) & 0x7FFF
  }

  /// `randint(max)`: a uniformly-mapped integer in `0..=max`, following
  /// `rand() / (RAND_MAX + 1) * (max + 1)`.
  #[inline]
  fn randint(&mut self, max: u32) -> u32 {
    const RAND_MAX_PLUS_ONE: f64 = 32768.0;
    let normalized = f64::from(self.next_raw()) / RAND_MAX_PLUS_ONE;
    (normalized * f64::from(max + 1)) as u32
  }
}

/// Durstenfeld (Fisher–Yates) shuffle, descending from the top of the buffer
/// down to index 2; index 0 and 1 are left fixed by construction (the loop
/// never swaps into them as the `i` side, only possibly as the `j` side).
///
/// Matches the reference's `permutepixels`: `for i in (2..=len-1).rev() { j =
/// randint(i); swap(buf[i], buf[j]) }`.
pub fn permute(buf: &mut [u8], seed: u16) {
  if buf.len() < 3 {
    return;
  }
  let mut lcg = Lcg::new(seed);
  for i in (2..buf.len()).rev() {
    let j = lcg.randint(i as u32) as usize;
    buf.swap(i, j);
  }
}

/// The exact inverse of [`permute`].
///
/// The forward shuffle swaps in descending order, so undoing it requires
/// first materializing every draw `j[i]` for `i` from `len-1` down to `2`
/// (the same indices, in the same order, that [`permute`] itself draws),
/// then replaying the swaps in **ascending** order, `i = 2 … len-1`.
pub fn unpermute(buf: &mut [u8], seed: u16) {
  if buf.len() < 3 {
    return;
  }
  let mut lcg = Lcg::new(seed);
  let mut draws = vec![0usize; buf.len()];
  for i in (2..buf.len()).rev() {
    draws[i] = lcg.randint(i as u32) as usize;
  }
  for i in 2..buf.len() {
    buf.swap(i, draws[i]);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unpermute_inverts_permute() {
    let original: Vec<u8> = (0..10).collect();
    for seed in [0u16, 1, 691, u16::MAX] {
      let mut buf = original.clone();
      permute(&mut buf, seed);
      unpermute(&mut buf, seed);
      assert_eq!(buf, original, "seed = {seed}");
    }
  }

  #[test]
  fn spec_seed_691_round_trips() {
    let original: Vec<u8> = (0..10).collect();
    let mut buf = original.clone();
    permute(&mut buf, 691);
    assert_ne!(buf, original, "a real shuffle should move at least one element");
    unpermute(&mut buf, 691);
    assert_eq!(buf, original);
  }

  #[test]
  fn short_buffers_are_left_untouched() {
    let mut buf = [7u8, 8];
    permute(&mut buf, 691);
    assert_eq!(buf, [7, 8]);
  }
}
