//! Entry point for the `imgshare` binary: parses CLI flags, enumerates
//! carrier/shadow files, and drives [`imgshare::pipeline::distribute`] /
//! [`imgshare::pipeline::recover`].
//!
//! Everything byte-level and numeric lives in the library; this binary only
//! owns flag parsing, directory enumeration, logging setup, and turning
//! library errors into a stderr message plus a non-zero exit code.

mod cli;
mod logging;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use imgshare::bmp::{pixel_array_size, Bitmap};
use imgshare::pipeline;

use cli::Cli;

fn main() {
  let cli = Cli::parse();
  logging::init_logging(cli.verbose);

  if let Err(err) = run(cli) {
    tracing::error!(error = %err, "imgshare failed");
    eprintln!("error: {err:#}");
    std::process::exit(1);
  }
}

fn run(cli: Cli) -> Result<()> {
  match (cli.distribute, cli.recover) {
    (true, false) => run_distribute(cli),
    (false, true) => run_recover(cli),
    (true, true) => unreachable!("clap's conflicts_with already rejects -d and -r together"),
    (false, false) => bail!("exactly one of -d (distribute) or -r (recover) is required"),
  }
}

fn run_distribute(cli: Cli) -> Result<()> {
  let secret = Bitmap::open(&cli.secret)
    .with_context(|| format!("loading secret image {}", cli.secret.display()))?;

  let pixel_count = secret.pixels.len() as u32;
  let n = match cli.n {
    Some(n) => n,
    None => count_bmp_files(&cli.dir)? as u16,
  };

  if cli.k < 2 {
    bail!("-k must be at least 2 (got {})", cli.k);
  }
  if pixel_count % u32::from(cli.k) != 0 {
    bail!(
      "secret has {pixel_count} pixel bytes, which is not evenly divisible by k = {}",
      cli.k
    );
  }

  let min_carrier_bytes = 8 * (pixel_count / u32::from(cli.k));
  tracing::debug!(n, k = cli.k, pixel_count, min_carrier_bytes, "distributing secret");

  let carriers = find_valid_bitmaps(&cli.dir, n as usize, min_carrier_bytes, |_| true)
    .with_context(|| format!("enumerating carrier BMPs under {}", cli.dir.display()))?;

  let shadows = pipeline::distribute(secret, cli.k, n, cli.seed, cli.permute, carriers)?;

  for shadow in &shadows {
    let path = PathBuf::from(format!("shadow{}.bmp", shadow.shadow_index));
    shadow.save(&path).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), shadow_index = shadow.shadow_index, "wrote shadow");
  }

  println!("wrote {} shadow(s) to the current directory", shadows.len());
  Ok(())
}

fn run_recover(cli: Cli) -> Result<()> {
  let width = cli.width.context("recover mode (-r) requires -w <width>")?;
  let height = cli.height.context("recover mode (-r) requires -h <height>")?;

  if cli.k < 2 {
    bail!("-k must be at least 2 (got {})", cli.k);
  }

  let secret_pixel_count = pixel_array_size(width, height.unsigned_abs());
  if secret_pixel_count % u32::from(cli.k) != 0 {
    bail!(
      "a {width}x{height} secret has {secret_pixel_count} pixel bytes, not evenly divisible by k = {}",
      cli.k
    );
  }
  let shadow_pixel_count = secret_pixel_count / u32::from(cli.k);
  let min_carrier_bytes = 8 * shadow_pixel_count;

  tracing::debug!(k = cli.k, width, height, shadow_pixel_count, "recovering secret");

  let carriers = find_valid_bitmaps(&cli.dir, cli.k as usize, min_carrier_bytes, |bmp| {
    bmp.shadow_index != 0
  })
  .with_context(|| format!("enumerating shadow BMPs under {}", cli.dir.display()))?;

  let secret = pipeline::recover(width, height, cli.k, cli.seed, cli.permute, carriers)?;
  secret.save(&cli.secret).with_context(|| format!("writing {}", cli.secret.display()))?;

  tracing::info!(path = %cli.secret.display(), "wrote recovered secret");
  println!("wrote recovered secret to {}", cli.secret.display());
  Ok(())
}

/// Counts regular files with a `.bmp` extension directly under `dir`,
/// case-insensitively. Used as `-n`'s default: "however many carriers are
/// sitting in the directory".
fn count_bmp_files(dir: &Path) -> Result<usize> {
  let count = fs::read_dir(dir)
    .with_context(|| format!("reading directory {}", dir.display()))?
    .filter_map(|entry| entry.ok())
    .filter(|entry| entry.path().is_file())
    .filter(|entry| has_bmp_extension(&entry.path()))
    .count();
  Ok(count)
}

fn has_bmp_extension(path: &Path) -> bool {
  path.extension().and_then(|ext| ext.to_str()).map(|ext| ext.eq_ignore_ascii_case("bmp")).unwrap_or(false)
}

/// Walks `dir` in sorted filename order, opening each `.bmp` file and
/// keeping the first `needed` that parse as a valid 8-bit BMP, satisfy
/// `min_pixel_bytes`, and pass `predicate` (used by recover to additionally
/// require a non-zero `shadow_index`).
///
/// Files that fail to parse, or that don't meet the size/predicate bar, are
/// silently skipped — exactly as the reference tool does when scanning a
/// directory for carriers, since a directory of candidate images will
/// routinely contain files too small or of the wrong format to use.
fn find_valid_bitmaps(
  dir: &Path, needed: usize, min_pixel_bytes: u32, predicate: impl Fn(&Bitmap) -> bool,
) -> Result<Vec<Bitmap>> {
  let mut paths: Vec<PathBuf> = fs::read_dir(dir)
    .with_context(|| format!("reading directory {}", dir.display()))?
    .filter_map(|entry| entry.ok())
    .map(|entry| entry.path())
    .filter(|path| path.is_file() && has_bmp_extension(path))
    .collect();
  paths.sort();

  let mut found = Vec::with_capacity(needed);
  for path in paths {
    if found.len() == needed {
      break;
    }
    match Bitmap::open(&path) {
      Ok(bmp) if bmp.pixels.len() as u32 >= min_pixel_bytes && predicate(&bmp) => {
        tracing::debug!(path = %path.display(), "accepted candidate file");
        found.push(bmp);
      }
      Ok(_) => tracing::debug!(path = %path.display(), "skipped: too small or wrong kind"),
      Err(err) => tracing::debug!(path = %path.display(), %err, "skipped: not a usable BMP"),
    }
  }

  if found.len() < needed {
    bail!(imgshare::ImgShareError::NotEnoughValidFiles { needed, found: found.len() });
  }
  Ok(found)
}
