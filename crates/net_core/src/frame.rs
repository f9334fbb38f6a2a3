//! Versioned length framing for wire messages.
//!
//! Format (little-endian):
//! - u8 `FRAME_VERSION` (1)
//! - u32 LEN (bytes of payload)
//! - [u8; LEN] payload
//!
//! Streams can delimit messages without peeking into inner payloads; inner
//! payloads carry their own tags.

use anyhow::bail;

pub const FRAME_VERSION: u8 = 1;
/// Cap a single frame; a corrupt length must not drive a giant read.
pub const MAX_FRAME_LEN: usize = 1_048_576;

/// Write a framed message into `out`, appending to any existing bytes.
pub fn write_msg(out: &mut Vec<u8>, payload: &[u8]) -> anyhow::Result<()> {
    if payload.len() > MAX_FRAME_LEN {
        bail!("frame too large: {} > {MAX_FRAME_LEN}", payload.len());
    }
    out.push(FRAME_VERSION);
    let len = u32::try_from(payload.len())?;
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(payload);
    Ok(())
}

/// Read a single framed message from `inp`; the returned payload borrows
/// from `inp`.
pub fn read_msg(inp: &[u8]) -> anyhow::Result<&[u8]> {
    if inp.len() < 5 {
        bail!("short frame header");
    }
    let ver = inp[0];
    if ver != FRAME_VERSION {
        bail!("unsupported frame version: {ver}");
    }
    let mut lenb = [0u8; 4];
    lenb.copy_from_slice(&inp[1..5]);
    let len = u32::from_le_bytes(lenb) as usize;
    if len > MAX_FRAME_LEN {
        bail!("frame too large: {len} > {MAX_FRAME_LEN}");
    }
    if inp.len() < 5 + len {
        bail!("short frame payload");
    }
    Ok(&inp[5..5 + len])
}
