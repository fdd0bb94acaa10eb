//! Integration tests exercising the crate through real files on disk,
//! mirroring the teacher crate's split between inline unit tests and a
//! `tests/` directory for end-to-end coverage.

use imgshare::bmp::Bitmap;
use imgshare::pipeline;

fn carrier(dir: &std::path::Path, name: &str, shadow_pixel_count: u32) -> std::path::PathBuf {
  let bmp = Bitmap::new(8 * shadow_pixel_count + 4, 1, 0);
  let path = dir.join(name);
  bmp.save(&path).unwrap();
  path
}

#[test]
fn distribute_then_recover_round_trips_through_real_files() {
  let tmp = tempfile::tempdir().unwrap();

  let mut secret = Bitmap::new(4, 3, 0);
  secret.pixels = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
  let secret_path = tmp.path().join("secret.bmp");
  secret.save(&secret_path).unwrap();

  let k = 3u16;
  let n = 5u16;
  let shadow_pixel_count = secret.pixels.len() as u32 / u32::from(k);

  let carrier_paths: Vec<_> =
    (0..n).map(|i| carrier(tmp.path(), &format!("carrier{i}.bmp"), shadow_pixel_count)).collect();
  let carriers: Vec<Bitmap> = carrier_paths.iter().map(|p| Bitmap::open(p).unwrap()).collect();

  let loaded_secret = Bitmap::open(&secret_path).unwrap();
  let shadows = pipeline::distribute(loaded_secret, k, n, 691, false, carriers).unwrap();

  let shadow_paths: Vec<_> = shadows
    .iter()
    .map(|s| {
      let path = tmp.path().join(format!("shadow{}.bmp", s.shadow_index));
      s.save(&path).unwrap();
      path
    })
    .collect();

  // Recover from a 3-of-5 subset, loaded back from disk.
  let subset: Vec<Bitmap> =
    shadow_paths[1..4].iter().map(|p| Bitmap::open(p).unwrap()).collect();
  let recovered =
    pipeline::recover(secret.width, secret.height, k, 691, false, subset).unwrap();

  assert_eq!(recovered.pixels, secret.pixels);
}

#[test]
fn shadow_file_header_carries_seed_and_index() {
  let tmp = tempfile::tempdir().unwrap();

  let mut secret = Bitmap::new(4, 1, 0);
  secret.pixels = vec![10, 20, 30, 40];

  let carriers: Vec<Bitmap> = (0..2).map(|_| Bitmap::new(20, 1, 0)).collect();
  let shadows = pipeline::distribute(secret, 2, 2, 4242, false, carriers).unwrap();

  for (i, shadow) in shadows.iter().enumerate() {
    let path = tmp.path().join(format!("shadow{i}.bmp"));
    shadow.save(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[0..2], b"BM");
    assert_eq!(u16::from_le_bytes(bytes[6..8].try_into().unwrap()), 4242);
    assert_eq!(u16::from_le_bytes(bytes[8..10].try_into().unwrap()), (i + 1) as u16);
  }
}
