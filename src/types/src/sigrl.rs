// Copyright 2026 The EPID Member Harness Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Signature based revocation list.

use crate::codec::{FormatError, OctetString, Reader};
use crate::keys::GroupId;
use crate::math::{G1ElemStr, OctStr32};

composite!(
    /// Base and key of a revoked signature.
    #[derive(Debug)]
    pub struct SigRlEntry {
        pub b: G1ElemStr,
        pub k: G1ElemStr,
    }
);

/// Revocation list published for a group.
///
/// Entries stay in publication order; the member library indexes into them,
/// so reordering changes which non-revoked proof lands where in a signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigRl {
    pub gid: GroupId,
    pub version: OctStr32,
    entries: Vec<SigRlEntry>,
}

impl SigRl {
    const NAME: &'static str = "SigRl";
    pub const HEADER_SIZE: usize = GroupId::SIZE + 2 * OctStr32::SIZE;

    pub fn new(gid: GroupId, version: u32, entries: Vec<SigRlEntry>) -> Self {
        SigRl {
            gid,
            version: OctStr32::from_u32(version),
            entries,
        }
    }

    pub fn size_for(n2: usize) -> usize {
        Self::HEADER_SIZE + n2 * SigRlEntry::SIZE
    }

    pub fn entries(&self) -> &[SigRlEntry] {
        &self.entries
    }

    pub fn n2(&self) -> u32 {
        self.entries.len() as u32
    }

    pub fn version(&self) -> u32 {
        self.version.to_u32()
    }

    /// True when `self` is a later publication of `older` for the same group.
    pub fn supersedes(&self, older: &SigRl) -> bool {
        self.gid == older.gid && self.version() > older.version()
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, FormatError> {
        let mut reader = Reader::new(Self::NAME, bytes);
        let gid = GroupId::read_from(&mut reader)?;
        let version = OctStr32::read_from(&mut reader)?;
        let n2 = OctStr32::read_from(&mut reader)?.to_u32();
        if (n2 as usize).checked_mul(SigRlEntry::SIZE) != Some(reader.remaining()) {
            return Err(FormatError::Count {
                kind: Self::NAME,
                declared: n2,
                remaining: reader.remaining(),
            });
        }
        let entries = (0..n2)
            .map(|_| SigRlEntry::read_from(&mut reader))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SigRl {
            gid,
            version,
            entries,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::size_for(self.entries.len()));
        self.gid.write_to(&mut out);
        self.version.write_to(&mut out);
        OctStr32::from_u32(self.n2()).write_to(&mut out);
        for entry in &self.entries {
            entry.write_to(&mut out);
        }
        out
    }
}
