//! A (k, n) visual secret-sharing engine for 8-bit grayscale BMPs.
//!
//! A secret bitmap is split into `n` shadow images such that any `k` of them
//! reconstruct it exactly, while fewer than `k` reveal nothing. Each shadow
//! is LSB-embedded into a carrier bitmap so the output files are ordinary
//! 8-bit BMPs, visually indistinguishable from the carriers they started
//! from.
//!
//! This crate is the engine only: argument parsing, directory enumeration,
//! and process exit codes live in the `imgshare` binary (`src/bin/`). The
//! library surface is [`pipeline::distribute`] and [`pipeline::recover`],
//! built from the lower-level pieces below.

pub mod bmp;
pub mod error;
pub mod field;
pub mod pipeline;
pub mod polynomial;
pub mod prng;
pub mod shadow;
pub mod solver;
pub mod stego;

pub use bmp::Bitmap;
pub use error::{ImgShareError, Result};
