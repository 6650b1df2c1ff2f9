//! In-place BMP preprocessing pipeline.
//!
//! Forward order: header neutralisation, residual transform,
//! bit-matrix transposition. The inverse runs the same stages
//! backwards. Validation happens before any byte is touched, so a
//! rejected buffer is returned unchanged.

pub(crate) mod bitpack;
pub(crate) mod header;
pub(crate) mod residual;

use enough::Stop;

use crate::error::CodecError;
use crate::limits::Limits;
use header::HEADER_LEN;

pub(crate) fn transform(
    data: &mut [u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<(), CodecError> {
    let info = header::probe(data)?;
    if let Some(limits) = limits {
        limits.check(info.width, info.height)?;
        limits.check_memory(info.residual_len())?;
    }
    stop.check()?;

    header::neutralize(data, &info);
    let pixels = &mut data[HEADER_LEN..];
    let planes = residual::forward(pixels, &info, stop)?;
    stop.check()?;
    bitpack::forward(&planes, pixels);
    // Row padding collapses to zero; the inverse recreates it per row.
    pixels[planes.len()..].fill(0);
    Ok(())
}

pub(crate) fn untransform(
    data: &mut [u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<(), CodecError> {
    let info = header::probe_neutralized(data)?;
    if let Some(limits) = limits {
        limits.check(info.width, info.height)?;
        limits.check_memory(info.residual_len())?;
    }
    stop.check()?;

    let pixels = &mut data[HEADER_LEN..];
    let planes = bitpack::inverse(pixels, info.residual_len());
    stop.check()?;
    residual::inverse(&planes, pixels, &info, stop)?;
    header::restore(data, &info);
    Ok(())
}
