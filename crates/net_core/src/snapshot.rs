//! Server-to-client messages and the snapshot encode/decode traits.
//!
//! The encoding is deliberately naive little-endian with length prefixes;
//! later phases can swap in deltas or varints without breaking clients of
//! these traits.

use anyhow::bail;

/// Types implementing snapshot encoding write themselves into a byte buffer.
pub trait SnapshotEncode {
    fn encode(&self, out: &mut Vec<u8>);
}

/// Types implementing snapshot decoding reconstruct themselves from a byte
/// slice, advancing it past what they consumed.
pub trait SnapshotDecode: Sized {
    fn decode(inp: &mut &[u8]) -> anyhow::Result<Self>;
}

pub const TAG_SERVER_MSG: u8 = 0xA5;

/// Ids longer than this are rejected on decode; a corrupt length prefix must
/// not turn into a giant allocation.
const MAX_ID_LEN: usize = 256;

pub(crate) fn take<const N: usize>(inp: &mut &[u8]) -> anyhow::Result<[u8; N]> {
    if inp.len() < N {
        bail!("short read");
    }
    let (a, b) = inp.split_at(N);
    *inp = b;
    let mut buf = [0u8; N];
    buf.copy_from_slice(a);
    Ok(buf)
}

pub(crate) fn take_u8(inp: &mut &[u8]) -> anyhow::Result<u8> {
    let b = inp.first().copied().ok_or_else(|| anyhow::anyhow!("short read"))?;
    *inp = &inp[1..];
    Ok(b)
}

pub(crate) fn put_str(out: &mut Vec<u8>, s: &str) {
    let len = u32::try_from(s.len()).unwrap_or(0);
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(&s.as_bytes()[..len as usize]);
}

pub(crate) fn take_str(inp: &mut &[u8]) -> anyhow::Result<String> {
    let len = u32::from_le_bytes(take::<4>(inp)?) as usize;
    if len > MAX_ID_LEN {
        bail!("id too long: {len} > {MAX_ID_LEN}");
    }
    if inp.len() < len {
        bail!("short read");
    }
    let (a, b) = inp.split_at(len);
    let s = std::str::from_utf8(a)?.to_string();
    *inp = b;
    Ok(s)
}

pub(crate) fn put_vec3(out: &mut Vec<u8>, v: [f32; 3]) {
    for c in v {
        out.extend_from_slice(&c.to_le_bytes());
    }
}

pub(crate) fn take_vec3(inp: &mut &[u8]) -> anyhow::Result<[f32; 3]> {
    let mut v = [0.0f32; 3];
    for c in &mut v {
        *c = f32::from_le_bytes(take::<4>(inp)?);
    }
    Ok(v)
}

/// One present entity in a roster snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub id: String,
    pub pos: [f32; 3],
}

/// Messages the feed sends to a client.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerMsg {
    /// Assigns the receiving client's own wire identity.
    Welcome { id: String },
    /// Authoritative present set; absent ids are gone.
    Roster { entries: Vec<RosterEntry> },
    /// A single entity's new target position.
    Moved { id: String, pos: [f32; 3] },
}

impl SnapshotEncode for ServerMsg {
    fn encode(&self, out: &mut Vec<u8>) {
        out.push(TAG_SERVER_MSG);
        match self {
            ServerMsg::Welcome { id } => {
                out.push(0);
                put_str(out, id);
            }
            ServerMsg::Roster { entries } => {
                out.push(1);
                let n = u32::try_from(entries.len()).unwrap_or(0);
                out.extend_from_slice(&n.to_le_bytes());
                for e in entries.iter().take(n as usize) {
                    put_str(out, &e.id);
                    put_vec3(out, e.pos);
                }
            }
            ServerMsg::Moved { id, pos } => {
                out.push(2);
                put_str(out, id);
                put_vec3(out, *pos);
            }
        }
    }
}

impl SnapshotDecode for ServerMsg {
    fn decode(inp: &mut &[u8]) -> anyhow::Result<Self> {
        let tag = take_u8(inp)?;
        if tag != TAG_SERVER_MSG {
            bail!("not a server msg tag: {tag:#x}");
        }
        let kind = take_u8(inp)?;
        Ok(match kind {
            0 => Self::Welcome { id: take_str(inp)? },
            1 => {
                let n = u32::from_le_bytes(take::<4>(inp)?) as usize;
                let mut entries = Vec::with_capacity(n.min(1024));
                for _ in 0..n {
                    entries.push(RosterEntry {
                        id: take_str(inp)?,
                        pos: take_vec3(inp)?,
                    });
                }
                Self::Roster { entries }
            }
            2 => Self::Moved {
                id: take_str(inp)?,
                pos: take_vec3(inp)?,
            },
            other => bail!("unknown server msg kind: {other}"),
        })
    }
}
