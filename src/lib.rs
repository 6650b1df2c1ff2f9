//! # zenzero
//!
//! Lossless preprocessing and zero-elimination packing for 24-bit
//! uncompressed BMP images.
//!
//! The forward [`transform`] rewrites a BMP buffer in place through
//! three reversible stages:
//!
//! 1. **Header neutralisation**: every field the supported subset pins
//!    to a constant has that constant subtracted, so a conforming
//!    header becomes almost entirely zero bytes.
//! 2. **Residual transform**: the BGR pixel region becomes three
//!    column-major channel planes of inter-row/inter-channel deltas,
//!    folded to unsigned bytes with the sign in the low bit.
//! 3. **Bit-matrix transposition**: each aligned group of eight
//!    residual bytes is transposed as an 8×8 bit matrix, gathering
//!    equal-significance bits into bit-plane slabs.
//!
//! Smooth images come out dominated by zero bytes, which the [`ze`]
//! codec then strips into a dense stream plus a position bitmap. Every
//! stage is exactly invertible: [`untransform`] restores the original
//! buffer byte for byte. Unsupported buffers are rejected untouched.
//!
//! ## Supported input
//!
//! Plain Windows BMP only: `BM` magic, 40-byte BITMAPINFOHEADER, one
//! color plane, 24 bits per pixel, no compression, no palette,
//! dimensions at least 1×1, and a buffer length that matches the
//! header. The whole image is processed in memory.
//!
//! ## Usage
//!
//! ```
//! use zenzero::{transform, untransform, ze, Unstoppable};
//!
//! // A 1x1 black-pixel BMP (54-byte header + 4-byte padded row).
//! let mut bmp = vec![
//!     0x42, 0x4D, 0x3A, 0, 0, 0, 0, 0, 0, 0, 0x36, 0, 0, 0, 0x28, 0, 0, 0,
//!     1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 24, 0, 0, 0, 0, 0, 4, 0, 0, 0,
//!     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
//!     0, 0, 0, 0,
//! ];
//! let original = bmp.clone();
//!
//! transform(&mut bmp, Unstoppable)?;
//! let (dense, bitmap) = ze::encode::<u8>(&bmp);
//! // Only the 1x1 dimensions survive; every other byte is now zero.
//! assert_eq!(dense, [1, 1]);
//!
//! let mut restored = ze::decode(bmp.len(), &dense, &bitmap)?;
//! untransform(&mut restored, Unstoppable)?;
//! assert_eq!(restored, original);
//! # Ok::<(), zenzero::CodecError>(())
//! ```
//!
//! With the `parallel` feature, the row sweep of the residual stage and
//! the group sweep of the bit transposition run on a worker pool; the
//! output is bit-identical to the serial build.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bmp;
mod error;
mod limits;

pub mod ze;

pub use bmp::header::BmpInfo;
pub use enough::{Never as Unstoppable, Stop, StopReason};
pub use error::CodecError;
pub use limits::Limits;

/// Parse and validate a BMP header against the supported subset.
///
/// Returns the dimensions and derived sizes without touching the
/// buffer. This is the check [`transform`] performs before mutating.
pub fn probe(data: &[u8]) -> Result<BmpInfo, CodecError> {
    bmp::header::probe(data)
}

/// Apply the full forward pipeline in place: neutralise the header,
/// rewrite the pixels as channel-plane residuals, bit-transpose them.
///
/// On any validation failure the buffer is returned unchanged.
pub fn transform(data: &mut [u8], stop: impl Stop) -> Result<(), CodecError> {
    bmp::transform(data, None, &stop)
}

/// [`transform`] with resource limits.
pub fn transform_with_limits(
    data: &mut [u8],
    limits: &Limits,
    stop: impl Stop,
) -> Result<(), CodecError> {
    bmp::transform(data, Some(limits), &stop)
}

/// Invert [`transform`] in place, restoring the original BMP bytes.
///
/// The buffer must hold a neutralised header (all pinned fields zero,
/// width and height intact) and a length matching the dimensions; it is
/// returned unchanged otherwise.
pub fn untransform(data: &mut [u8], stop: impl Stop) -> Result<(), CodecError> {
    bmp::untransform(data, None, &stop)
}

/// [`untransform`] with resource limits.
pub fn untransform_with_limits(
    data: &mut [u8],
    limits: &Limits,
    stop: impl Stop,
) -> Result<(), CodecError> {
    bmp::untransform(data, Some(limits), &stop)
}
