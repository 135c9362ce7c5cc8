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

//! Group and member key material.

use crate::math::{FpElemStr, FqElemStr, G1ElemStr, G2ElemStr, GtElemStr};
use core::fmt;

octets!(
    /// Group identifier, a 16-byte big-endian value.
    GroupId,
    16
);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

composite!(
    /// Public parameters of a group.
    #[derive(Debug)]
    pub struct GroupPubKey {
        pub gid: GroupId,
        pub h1: G1ElemStr,
        pub h2: G1ElemStr,
        pub w: G2ElemStr,
    }
);

composite!(
    /// A member private key: the credential `A` and the scalars `x` and `f`.
    pub struct PrivKey {
        pub gid: GroupId,
        pub a: G1ElemStr,
        pub x: FpElemStr,
        pub f: FpElemStr,
    }
);

composite!(
    /// Compressed member private key. Expanding it to a `PrivKey` needs the
    /// group public key and is left to the member library.
    pub struct CompressedPrivKey {
        pub gid: GroupId,
        pub ax: FqElemStr,
        pub seed: FpElemStr,
    }
);

composite!(
    /// Pairing values precomputed for one (GroupPubKey, PrivKey) pair.
    ///
    /// Stale as soon as either key changes; the member library checks that it
    /// matches the keys it is created with.
    #[derive(Debug)]
    pub struct MemberPrecomp {
        pub e12: GtElemStr,
        pub e22: GtElemStr,
        pub e2w: GtElemStr,
        pub ea2: GtElemStr,
    }
);

impl fmt::Debug for PrivKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivKey")
            .field("gid", &self.gid)
            .field("a", &self.a)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for CompressedPrivKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompressedPrivKey")
            .field("gid", &self.gid)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OctetString;

    #[test]
    fn layout_sizes() {
        assert_eq!(GroupId::SIZE, 16);
        assert_eq!(GroupPubKey::SIZE, 272);
        assert_eq!(PrivKey::SIZE, 144);
        assert_eq!(CompressedPrivKey::SIZE, 80);
        assert_eq!(MemberPrecomp::SIZE, 1536);
    }

    #[test]
    fn private_key_fields_follow_wire_order() {
        let mut bytes = vec![0u8; 16];
        bytes[15] = 1;
        bytes.extend_from_slice(&[0xa0; 64]);
        bytes.extend_from_slice(&[0x11; 32]);
        bytes.extend_from_slice(&[0xff; 32]);
        let key = PrivKey::from_bytes(&bytes).unwrap();
        assert_eq!(key.gid.to_string(), "00000000000000000000000000000001");
        assert_eq!(key.a.x, FqElemStr([0xa0; 32]));
        assert_eq!(key.x, FpElemStr([0x11; 32]));
        assert_eq!(key.f, FpElemStr([0xff; 32]));
        assert_eq!(key.to_bytes(), bytes);
    }

    #[test]
    fn private_key_debug_hides_scalars() {
        let mut key = PrivKey::default();
        key.f = FpElemStr([0xee; 32]);
        let shown = format!("{:?}", key);
        assert!(!shown.contains("eeee"));
        assert!(shown.contains("gid"));
    }
}
