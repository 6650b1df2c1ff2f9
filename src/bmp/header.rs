//! BMP header validation and neutralisation.
//!
//! The supported subset is the plain Windows BMP: `BM` magic, 40-byte
//! BITMAPINFOHEADER, one color plane, 24 bits per pixel, no compression,
//! no palette, bottom-up rows. Neutralisation subtracts the value every
//! field of that subset is required to hold, so a conforming header
//! becomes almost entirely zero bytes; restoration adds the same
//! constants back. Width and height are deliberately left in place, and
//! the vertical resolution is stored as its difference from the
//! horizontal one.

use alloc::format;

use crate::error::CodecError;

/// File header (14 bytes) plus BITMAPINFOHEADER (40 bytes).
pub(crate) const HEADER_LEN: usize = 54;

// ── Little-endian field access ──────────────────────────────────────

/// Read a 16-bit little-endian field. The caller guarantees `off + 2`
/// is in bounds.
#[inline]
pub(crate) fn get16(data: &[u8], off: usize) -> i32 {
    i32::from(u16::from_le_bytes([data[off], data[off + 1]]))
}

/// Read a 32-bit little-endian field. The caller guarantees `off + 4`
/// is in bounds.
#[inline]
pub(crate) fn get32(data: &[u8], off: usize) -> i32 {
    i32::from_le_bytes([data[off], data[off + 1], data[off + 2], data[off + 3]])
}

/// Store the low 16 bits of `val` in little-endian order.
#[inline]
pub(crate) fn set16(data: &mut [u8], off: usize, val: i32) {
    data[off..off + 2].copy_from_slice(&(val as u16).to_le_bytes());
}

/// Store the low 32 bits of `val` in little-endian order.
#[inline]
pub(crate) fn set32(data: &mut [u8], off: usize, val: i32) {
    data[off..off + 4].copy_from_slice(&(val as u32).to_le_bytes());
}

// ── Parsed header facts ─────────────────────────────────────────────

/// Dimensions and derived sizes of a recognised BMP buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpInfo {
    pub width: u32,
    pub height: u32,
    /// Bytes per stored row: `width * 3` rounded up to a multiple of 4.
    pub row_stride: usize,
    /// Total pixel-region bytes: `row_stride * height`.
    pub pixel_len: usize,
    /// Bytes per channel plane: `width * height`.
    pub plane_len: usize,
}

impl BmpInfo {
    /// Bytes of residual data across all three channel planes.
    #[inline]
    pub fn residual_len(&self) -> usize {
        3 * self.plane_len
    }
}

/// Read width and height and derive the stride/size facts, without
/// validating the rest of the header.
fn read_dimensions(data: &[u8]) -> Result<(BmpInfo, u64), CodecError> {
    if data.len() < HEADER_LEN {
        return Err(CodecError::InputTooSmall(data.len()));
    }
    let w = get32(data, 18);
    let h = get32(data, 22);
    if w < 1 || h < 1 {
        return Err(CodecError::Unsupported(format!(
            "width and height must be at least 1, got {w}x{h}"
        )));
    }
    let width = w as u32;
    let height = h as u32;
    let row_stride = (u64::from(width) * 3 + 3) & !3;
    let pixel_len = row_stride * u64::from(height);
    let file_len = pixel_len + HEADER_LEN as u64;

    let info = BmpInfo {
        width,
        height,
        row_stride: row_stride as usize,
        pixel_len: usize::try_from(pixel_len)
            .map_err(|_| CodecError::DimensionsTooLarge { width, height })?,
        plane_len: usize::try_from(u64::from(width) * u64::from(height))
            .map_err(|_| CodecError::DimensionsTooLarge { width, height })?,
    };
    Ok((info, file_len))
}

// ── Validation ──────────────────────────────────────────────────────

/// Parse and validate a raw BMP header against the supported subset.
///
/// The buffer is not modified. Comparisons against derived sizes are
/// done in 64-bit so oversized dimensions reject instead of wrapping.
pub(crate) fn probe(data: &[u8]) -> Result<BmpInfo, CodecError> {
    let (info, file_len) = read_dimensions(data)?;

    if data[0] != b'B' || data[1] != b'M' {
        return Err(CodecError::Unsupported("missing BM magic".into()));
    }
    if get32(data, 2) as u32 as u64 != file_len {
        return Err(CodecError::Unsupported(format!(
            "file size field {} does not match {file_len}",
            get32(data, 2) as u32
        )));
    }
    if get32(data, 6) != 0 {
        return Err(CodecError::Unsupported("reserved field is nonzero".into()));
    }
    if get32(data, 10) != 54 {
        return Err(CodecError::Unsupported(format!(
            "pixel data offset {} (expected 54)",
            get32(data, 10)
        )));
    }
    if get32(data, 14) != 40 {
        return Err(CodecError::Unsupported(format!(
            "DIB header size {} (expected 40)",
            get32(data, 14)
        )));
    }
    if get16(data, 26) != 1 {
        return Err(CodecError::Unsupported(format!(
            "{} color planes (expected 1)",
            get16(data, 26)
        )));
    }
    if get16(data, 28) != 24 {
        return Err(CodecError::Unsupported(format!(
            "{} bits per pixel (only 24 supported)",
            get16(data, 28)
        )));
    }
    if get32(data, 30) != 0 {
        return Err(CodecError::Unsupported(format!(
            "compression method {} (only 0 supported)",
            get32(data, 30)
        )));
    }
    if get32(data, 34) as u32 as u64 != file_len - HEADER_LEN as u64 {
        return Err(CodecError::Unsupported(format!(
            "image size field {} does not match pixel data size",
            get32(data, 34) as u32
        )));
    }
    if get32(data, 46) != 0 {
        return Err(CodecError::Unsupported("colors-used field is nonzero".into()));
    }
    if get32(data, 50) != 0 {
        return Err(CodecError::Unsupported(
            "important-colors field is nonzero".into(),
        ));
    }
    if data.len() as u64 != file_len {
        return Err(CodecError::Unsupported(format!(
            "buffer is {} bytes, header declares {file_len}",
            data.len()
        )));
    }
    Ok(info)
}

/// Validate a neutralised header: every field the forward pass zeroed
/// must read back as zero, and the buffer length must match the
/// dimensions that stayed in place.
pub(crate) fn probe_neutralized(data: &[u8]) -> Result<BmpInfo, CodecError> {
    let (info, file_len) = read_dimensions(data)?;

    if data[0] != 0
        || data[1] != 0
        || get32(data, 2) != 0
        || get32(data, 6) != 0
        || get32(data, 10) != 0
        || get32(data, 14) != 0
        || get16(data, 26) != 0
        || get16(data, 28) != 0
        || get32(data, 30) != 0
        || get32(data, 34) != 0
        || get32(data, 46) != 0
        || get32(data, 50) != 0
    {
        return Err(CodecError::Unsupported(
            "header is not in neutralised form".into(),
        ));
    }
    if data.len() as u64 != file_len {
        return Err(CodecError::Unsupported(format!(
            "buffer is {} bytes, dimensions imply {file_len}",
            data.len()
        )));
    }
    Ok(info)
}

// ── Neutralise / restore ────────────────────────────────────────────

/// Subtract the expected constant from every recognised field of an
/// already-validated header, leaving it all zero except width, height,
/// and the resolution pair.
pub(crate) fn neutralize(data: &mut [u8], info: &BmpInfo) {
    let pixel_len = info.pixel_len as u32 as i32;
    data[0] = data[0].wrapping_sub(b'B');
    data[1] = data[1].wrapping_sub(b'M');
    set32(data, 2, get32(data, 2).wrapping_sub(pixel_len.wrapping_add(54)));
    set32(data, 10, get32(data, 10).wrapping_sub(54));
    set32(data, 14, get32(data, 14).wrapping_sub(40));
    set16(data, 26, get16(data, 26).wrapping_sub(1));
    set16(data, 28, get16(data, 28).wrapping_sub(24));
    set32(data, 34, get32(data, 34).wrapping_sub(pixel_len));
    // Resolutions are frequently set equal, so the difference is near zero.
    let xres = get32(data, 38);
    set32(data, 42, get32(data, 42).wrapping_sub(xres));
}

/// Exact inverse of [`neutralize`]: add the same constants back.
pub(crate) fn restore(data: &mut [u8], info: &BmpInfo) {
    let pixel_len = info.pixel_len as u32 as i32;
    data[0] = data[0].wrapping_add(b'B');
    data[1] = data[1].wrapping_add(b'M');
    set32(data, 2, get32(data, 2).wrapping_add(pixel_len.wrapping_add(54)));
    set32(data, 10, get32(data, 10).wrapping_add(54));
    set32(data, 14, get32(data, 14).wrapping_add(40));
    set16(data, 26, get16(data, 26).wrapping_add(1));
    set16(data, 28, get16(data, 28).wrapping_add(24));
    set32(data, 34, get32(data, 34).wrapping_add(pixel_len));
    let xres = get32(data, 38);
    set32(data, 42, get32(data, 42).wrapping_add(xres));
}
