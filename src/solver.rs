//! Gauss–Jordan elimination over GF(251), recovering the coefficients of a
//! degree-(k-1) polynomial from `k` `(x, y)` sample points.

use crate::error::{ImgShareError, Result};
use crate::field;

/// Recovers `(a_0, .., a_{k-1})` such that `evaluate(coeff, x_j) == y_j` for
/// every sample point, by reducing the augmented Vandermonde matrix
/// `M[j][t] = x_j^t`, `M[j][k] = y_j` to reduced row-echelon form.
///
/// The elimination order here (row `i` eliminated against row `i-1`, rather
/// than a fixed pivot row) matches the reference implementation; it's
/// unusual but produces the same result, and this crate's GF(251) test
/// fixtures were built against it directly.
///
/// ## Errors
/// Returns [`ImgShareError::SingularMatrix`] if any two sample points share
/// an `x` coordinate (or any `x` is `0`), which makes the Vandermonde matrix
/// singular.
pub fn solve(points: &[(u8, u8)]) -> Result<Vec<u8>> {
  let k = points.len();
  debug_assert!(k >= 2, "a (k, n) scheme always has k >= 2");

  for i in 0..k {
    for j in (i + 1)..k {
      if points[i].0 == points[j].0 {
        return Err(ImgShareError::SingularMatrix);
      }
    }
  }

  // mat[j] has k+1 columns: powers of x_j in 0..k, then y_j.
  let mut mat: Vec<Vec<u8>> = points
    .iter()
    .map(|&(x, y)| {
      let mut row = Vec::with_capacity(k + 1);
      let mut power = 1u8;
      for _ in 0..k {
        row.push(power);
        power = field::mul(power, x);
      }
      row.push(y);
      row
    })
    .collect();

  // Forward elimination to echelon form.
  for j in 0..k.saturating_sub(1) {
    for i in (j + 1..k).rev() {
      let pivot = mat[i - 1][j];
      if pivot == 0 {
        return Err(ImgShareError::SingularMatrix);
      }
      let a = field::mul(mat[i][j], field::inv(pivot));
      for t in j..=k {
        let reduced = field::mul(mat[i - 1][t], a);
        mat[i][t] = field::sub(mat[i][t], reduced);
      }
    }
  }

  // Back substitution to reduced row-echelon form.
  for i in (1..k).rev() {
    let pivot = mat[i][i];
    if pivot == 0 {
      return Err(ImgShareError::SingularMatrix);
    }
    let inv_pivot = field::inv(pivot);
    mat[i][k] = field::mul(mat[i][k], inv_pivot);
    mat[i][i] = field::mul(mat[i][i], inv_pivot);
    for t in (0..i).rev() {
      let reduced = field::mul(mat[i][k], mat[t][i]);
      mat[t][k] = field::sub(mat[t][k], reduced);
      mat[t][i] = 0;
    }
  }

  Ok(mat.iter().map(|row| row[k]).collect())
}
