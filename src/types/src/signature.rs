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

//! Signature structures produced and consumed by the member library.

use crate::codec::{FormatError, OctetString, Reader};
use crate::math::{FpElemStr, G1ElemStr, GtElemStr, OctStr32};

/// Hash used by the signer, as numbered by the member library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum HashAlg {
    Sha256 = 0,
    Sha384 = 1,
    Sha512 = 2,
    Sha512_256 = 3,
}

impl HashAlg {
    pub fn name(&self) -> &'static str {
        match self {
            HashAlg::Sha256 => "sha256",
            HashAlg::Sha384 => "sha384",
            HashAlg::Sha512 => "sha512",
            HashAlg::Sha512_256 => "sha512_256",
        }
    }
}

composite!(
    /// A signature prepared ahead of time, finished later against a message.
    /// Each one is consumed by a single signing operation.
    #[derive(Debug)]
    pub struct PreComputedSignature {
        pub b: G1ElemStr,
        pub k: G1ElemStr,
        pub t: G1ElemStr,
        pub r1: G1ElemStr,
        pub r2: GtElemStr,
        pub a: FpElemStr,
        pub b_scalar: FpElemStr,
        pub rx: FpElemStr,
        pub rf: FpElemStr,
        pub ra: FpElemStr,
        pub rb: FpElemStr,
    }
);

composite!(
    #[derive(Debug)]
    pub struct BasicSignature {
        pub b: G1ElemStr,
        pub k: G1ElemStr,
        pub t: G1ElemStr,
        pub c: FpElemStr,
        pub sx: FpElemStr,
        pub sf: FpElemStr,
        pub sa: FpElemStr,
        pub sb: FpElemStr,
    }
);

composite!(
    /// Non-revoked proof for one signature revocation list entry.
    #[derive(Debug)]
    pub struct NrProof {
        pub t: G1ElemStr,
        pub c: FpElemStr,
        pub smu: FpElemStr,
        pub snu: FpElemStr,
    }
);

/// A complete member signature: the basic signature followed by one
/// non-revoked proof per entry of the revocation list it was made against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EpidSignature {
    pub sigma0: BasicSignature,
    pub rl_ver: OctStr32,
    pub sigma: Vec<NrProof>,
}

impl EpidSignature {
    const NAME: &'static str = "EpidSignature";
    pub const HEADER_SIZE: usize = BasicSignature::SIZE + 2 * OctStr32::SIZE;

    /// Size in bytes of a signature carrying `n2` non-revoked proofs.
    pub fn size_for(n2: usize) -> usize {
        Self::HEADER_SIZE + n2 * NrProof::SIZE
    }

    pub fn n2(&self) -> u32 {
        self.sigma.len() as u32
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, FormatError> {
        let mut reader = Reader::new(Self::NAME, bytes);
        let sigma0 = BasicSignature::read_from(&mut reader)?;
        let rl_ver = OctStr32::read_from(&mut reader)?;
        let n2 = OctStr32::read_from(&mut reader)?.to_u32();
        if (n2 as usize).checked_mul(NrProof::SIZE) != Some(reader.remaining()) {
            return Err(FormatError::Count {
                kind: Self::NAME,
                declared: n2,
                remaining: reader.remaining(),
            });
        }
        let sigma = (0..n2)
            .map(|_| NrProof::read_from(&mut reader))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(EpidSignature {
            sigma0,
            rl_ver,
            sigma,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::size_for(self.sigma.len()));
        self.sigma0.write_to(&mut out);
        self.rl_ver.write_to(&mut out);
        OctStr32::from_u32(self.n2()).write_to(&mut out);
        for proof in &self.sigma {
            proof.write_to(&mut out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signature_bytes(n2: u32) -> Vec<u8> {
        let mut bytes: Vec<u8> = (0..BasicSignature::SIZE).map(|i| i as u8).collect();
        bytes.extend_from_slice(&7u32.to_be_bytes());
        bytes.extend_from_slice(&n2.to_be_bytes());
        for i in 0..n2 {
            bytes.extend(std::iter::repeat(i as u8 + 1).take(NrProof::SIZE));
        }
        bytes
    }

    #[test]
    fn layout_sizes() {
        assert_eq!(PreComputedSignature::SIZE, 832);
        assert_eq!(BasicSignature::SIZE, 352);
        assert_eq!(NrProof::SIZE, 160);
        assert_eq!(EpidSignature::size_for(0), 360);
        assert_eq!(EpidSignature::size_for(5), 1160);
    }

    #[test]
    fn decode_signature_with_proofs() {
        let bytes = signature_bytes(2);
        let sig = EpidSignature::decode(&bytes).unwrap();
        assert_eq!(sig.rl_ver.to_u32(), 7);
        assert_eq!(sig.n2(), 2);
        assert_eq!(sig.sigma[1].c, FpElemStr([2; 32]));
        assert_eq!(sig.encode(), bytes);
    }

    #[test]
    fn proof_count_must_match_length() {
        let mut bytes = signature_bytes(2);
        bytes.truncate(bytes.len() - 1);
        assert_eq!(
            EpidSignature::decode(&bytes),
            Err(FormatError::Count {
                kind: "EpidSignature",
                declared: 2,
                remaining: 2 * NrProof::SIZE - 1,
            })
        );
        assert!(matches!(
            EpidSignature::decode(&bytes[..100]),
            Err(FormatError::Truncated { .. })
        ));
    }

    #[test]
    fn hash_alg_matches_library_numbering() {
        assert_eq!(HashAlg::Sha256 as i32, 0);
        assert_eq!(HashAlg::Sha512 as i32, 2);
        assert_eq!(HashAlg::Sha384.name(), "sha384");
    }
}
