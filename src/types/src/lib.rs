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

//! Byte-exact data model for the member side of Intel(R) EPID 2.0.
//!
//! Every fixed-size structure is a `#[repr(C)]` aggregate of byte arrays, so
//! its in-memory representation is also its serialized form and can be handed
//! to the native member library unchanged. Multi-byte integers are big-endian.

#[macro_use]
mod codec;
pub mod keys;
pub mod math;
pub mod signature;
pub mod sigrl;

pub use codec::{FormatError, OctetString, Reader};
pub use keys::{CompressedPrivKey, GroupId, GroupPubKey, MemberPrecomp, PrivKey};
pub use math::{
    FpElemStr, Fq2ElemStr, FqElemStr, G1ElemStr, G2ElemStr, GtElemStr, OctStr32,
};
pub use signature::{BasicSignature, EpidSignature, HashAlg, NrProof, PreComputedSignature};
pub use sigrl::{SigRl, SigRlEntry};
