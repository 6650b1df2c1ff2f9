#![no_main]
use libfuzzer_sys::fuzz_target;
use zenzero::{transform, untransform, ze, Unstoppable};

fuzz_target!(|data: &[u8]| {
    // Synthesize a valid BMP from the fuzz input: two dimension bytes,
    // the rest cycled through the pixel rows.
    if data.len() < 2 {
        return;
    }
    let w = usize::from(data[0] & 0x1F) + 1;
    let h = usize::from(data[1] & 0x1F) + 1;
    let row_stride = (w * 3 + 3) & !3;
    let pixel_len = row_stride * h;
    let payload = &data[2..];

    let mut bmp = Vec::with_capacity(54 + pixel_len);
    bmp.extend_from_slice(b"BM");
    bmp.extend_from_slice(&((pixel_len + 54) as u32).to_le_bytes());
    bmp.extend_from_slice(&[0u8; 4]);
    bmp.extend_from_slice(&54u32.to_le_bytes());
    bmp.extend_from_slice(&40u32.to_le_bytes());
    bmp.extend_from_slice(&(w as i32).to_le_bytes());
    bmp.extend_from_slice(&(h as i32).to_le_bytes());
    bmp.extend_from_slice(&1u16.to_le_bytes());
    bmp.extend_from_slice(&24u16.to_le_bytes());
    bmp.extend_from_slice(&0u32.to_le_bytes());
    bmp.extend_from_slice(&(pixel_len as u32).to_le_bytes());
    bmp.extend_from_slice(&2835u32.to_le_bytes());
    bmp.extend_from_slice(&2835u32.to_le_bytes());
    bmp.extend_from_slice(&0u32.to_le_bytes());
    bmp.extend_from_slice(&0u32.to_le_bytes());
    for y in 0..h {
        for x in 0..w {
            for c in 0..3 {
                let i = y * w * 3 + x * 3 + c;
                let byte = if payload.is_empty() {
                    0
                } else {
                    payload[i % payload.len()]
                };
                bmp.push(byte);
            }
        }
        bmp.extend(core::iter::repeat(0u8).take(row_stride - w * 3));
    }

    let original = bmp.clone();
    transform(&mut bmp, Unstoppable).expect("synthesized BMP rejected");

    // Zero elimination must reproduce the transformed buffer exactly.
    let (dense, bitmap) = ze::encode::<u8>(&bmp);
    let restored = ze::decode(bmp.len(), &dense, &bitmap).expect("ZE decode failed");
    assert_eq!(restored, bmp, "zero elimination diverged");

    untransform(&mut bmp, Unstoppable).expect("transformed BMP failed to restore");
    assert_eq!(bmp, original, "pipeline roundtrip diverged");
});
