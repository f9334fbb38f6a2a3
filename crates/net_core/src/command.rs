//! Client-to-server commands. Minimal binary encoding with a leading tag
//! distinct from server messages.

use crate::snapshot::{
    SnapshotDecode, SnapshotEncode, put_str, put_vec3, take_str, take_u8, take_vec3,
};
use anyhow::bail;

pub const TAG_CLIENT_CMD: u8 = 0xC1;

#[derive(Debug, Clone, PartialEq)]
pub enum ClientCmd {
    /// Opening handshake; the token is opaque to the wire.
    Hello { token: String },
    /// Position report, sent only on ticks where the player actually moved.
    Move { pos: [f32; 3] },
}

impl SnapshotEncode for ClientCmd {
    fn encode(&self, out: &mut Vec<u8>) {
        out.push(TAG_CLIENT_CMD);
        match self {
            ClientCmd::Hello { token } => {
                out.push(0);
                put_str(out, token);
            }
            ClientCmd::Move { pos } => {
                out.push(1);
                put_vec3(out, *pos);
            }
        }
    }
}

impl SnapshotDecode for ClientCmd {
    fn decode(inp: &mut &[u8]) -> anyhow::Result<Self> {
        let tag = take_u8(inp)?;
        if tag != TAG_CLIENT_CMD {
            bail!("not a client cmd tag: {tag:#x}");
        }
        let kind = take_u8(inp)?;
        Ok(match kind {
            0 => Self::Hello {
                token: take_str(inp)?,
            },
            1 => Self::Move {
                pos: take_vec3(inp)?,
            },
            other => bail!("unknown client cmd kind: {other}"),
        })
    }
}
