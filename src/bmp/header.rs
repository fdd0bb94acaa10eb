//! The raw, on-disk 54-byte header (14-byte file header + 40-byte info
//! header) as a single `#[repr(C)]` struct of little-endian integer types.
//!
//! Using [`pack1`]'s `U16LE`/`U32LE`/`I32LE` wrapper types means every field
//! is stored little-endian in memory too, so reading or writing this struct
//! via [`bytemuck`] never needs an explicit byte-swap: the swap only has to
//! happen (once, via `.get()`/`From::from()`) on big-endian hosts, and only
//! inside the wrapper types themselves.

use pack1::{I32LE, U16LE, U32LE};

pub(super) const MAGIC: [u8; 2] = *b"BM";
pub(super) const FILE_HEADER_SIZE: u32 = 14;
pub(super) const DIB_HEADER_SIZE: u32 = 40;
pub(super) const PALETTE_SIZE: u32 = 1024;
pub(super) const DATA_OFFSET: u32 = FILE_HEADER_SIZE + DIB_HEADER_SIZE + PALETTE_SIZE;

/// Byte-exact layout of the 54 bytes preceding the palette.
///
/// Field order and sizes match the spec's header table; `reserved1`/
/// `reserved2` are repurposed here to carry the Shamir key and shadow index
/// instead of being left unused, which is the whole reason this crate can't
/// just reuse an off-the-shelf BMP decoder.
#[derive(Debug, Clone, Copy, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(C)]
pub(super) struct RawHeader {
  pub magic: [u8; 2],
  pub file_size: U32LE,
  pub key: U16LE,
  pub shadow_index: U16LE,
  pub data_offset: U32LE,
  pub dib_size: U32LE,
  pub width: U32LE,
  pub height: I32LE,
  pub planes: U16LE,
  pub depth: U16LE,
  pub compression: U32LE,
  pub pixel_array_size: U32LE,
  pub h_res: U32LE,
  pub v_res: U32LE,
  pub n_colors: U32LE,
  pub n_imp_colors: U32LE,
}

const _: () = assert!(core::mem::size_of::<RawHeader>() == 54);

impl RawHeader {
  pub(super) fn new(width: u32, height: i32, key: u16, shadow_index: u16, pixel_array_size: u32) -> Self {
    Self {
      magic: MAGIC,
      file_size: U32LE::from(DATA_OFFSET + pixel_array_size),
      key: U16LE::from(key),
      shadow_index: U16LE::from(shadow_index),
      data_offset: U32LE::from(DATA_OFFSET),
      dib_size: U32LE::from(DIB_HEADER_SIZE),
      width: U32LE::from(width),
      height: I32LE::from(height),
      planes: U16LE::from(1u16),
      depth: U16LE::from(8u16),
      compression: U32LE::from(0u32),
      pixel_array_size: U32LE::from(pixel_array_size),
      h_res: U32LE::from(0u32),
      v_res: U32LE::from(0u32),
      n_colors: U32LE::from(0u32),
      n_imp_colors: U32LE::from(0u32),
    }
  }
}
