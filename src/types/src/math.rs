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

//! Serialized field and group elements.

octets!(
    /// 32-bit big-endian integer, used for revocation list versions and counts.
    OctStr32,
    4
);

octets!(
    /// Element of the base field Fq.
    FqElemStr,
    32
);

octets!(
    /// Scalar modulo the group order p.
    FpElemStr,
    32
);

octets!(
    /// Element of GT, the target group of the pairing (twelve Fq coefficients).
    GtElemStr,
    384
);

composite!(
    /// Element of the quadratic extension Fq2.
    pub struct Fq2ElemStr {
        pub c0: FqElemStr,
        pub c1: FqElemStr,
    }
);

composite!(
    /// Point on G1, the base curve.
    pub struct G1ElemStr {
        pub x: FqElemStr,
        pub y: FqElemStr,
    }
);

composite!(
    /// Point on G2, the twist over Fq2.
    pub struct G2ElemStr {
        pub x: Fq2ElemStr,
        pub y: Fq2ElemStr,
    }
);

impl OctStr32 {
    pub fn from_u32(value: u32) -> Self {
        OctStr32(value.to_be_bytes())
    }

    pub fn to_u32(&self) -> u32 {
        u32::from_be_bytes(self.0)
    }
}

impl From<u32> for OctStr32 {
    fn from(value: u32) -> Self {
        OctStr32::from_u32(value)
    }
}

impl GtElemStr {
    /// Returns coefficient `index` (0..12) of the Fq12 element.
    pub fn coefficient(&self, index: usize) -> Option<FqElemStr> {
        let start = index.checked_mul(32)?;
        let bytes = self.0.get(start..start.checked_add(32)?)?;
        let mut coefficient = [0u8; 32];
        coefficient.copy_from_slice(bytes);
        Some(FqElemStr(coefficient))
    }
}

impl core::fmt::Debug for G1ElemStr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("G1ElemStr")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl core::fmt::Debug for Fq2ElemStr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entry(&self.c0).entry(&self.c1).finish()
    }
}

impl core::fmt::Debug for G2ElemStr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("G2ElemStr")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FormatError, OctetString};

    #[test]
    fn layout_sizes() {
        assert_eq!(OctStr32::SIZE, 4);
        assert_eq!(G1ElemStr::SIZE, 64);
        assert_eq!(G2ElemStr::SIZE, 128);
        assert_eq!(GtElemStr::SIZE, 384);
    }

    #[test]
    fn octstr32_is_big_endian() {
        let v = OctStr32::from_u32(0x0102_0304);
        assert_eq!(v.0, [1, 2, 3, 4]);
        assert_eq!(OctStr32::from_bytes(&[0, 0, 0, 5]).unwrap().to_u32(), 5);
    }

    #[test]
    fn g1_splits_into_coordinates() {
        let mut bytes = vec![0xaa; 32];
        bytes.extend_from_slice(&[0x55; 32]);
        let point = G1ElemStr::from_bytes(&bytes).unwrap();
        assert_eq!(point.x, FqElemStr([0xaa; 32]));
        assert_eq!(point.y, FqElemStr([0x55; 32]));
        assert_eq!(point.to_bytes(), bytes);
    }

    #[test]
    fn gt_coefficients() {
        let mut gt = GtElemStr::default();
        gt.0[11 * 32] = 7;
        assert_eq!(gt.coefficient(11).unwrap().0[0], 7);
        assert!(gt.coefficient(12).is_none());
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert_eq!(
            G2ElemStr::from_bytes(&[0u8; 127]),
            Err(FormatError::Length {
                kind: "G2ElemStr",
                expected: 128,
                actual: 127
            })
        );
    }
}
