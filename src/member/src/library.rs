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

//! The seam between the handle and the member library that backs it.

use crate::random::RandomSource;
use epid_types::{GroupPubKey, MemberPrecomp, PrivKey};
use std::fmt;

/// Status code returned by the member library. Zero is success; the other
/// values belong to the library and are only named here, never interpreted.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct EpidStatus(pub libc::c_int);

impl EpidStatus {
    pub const NO_ERR: EpidStatus = EpidStatus(0);
    pub const SIG_INVALID: EpidStatus = EpidStatus(1);
    pub const SIG_REVOKED_IN_GROUP_RL: EpidStatus = EpidStatus(2);
    pub const SIG_REVOKED_IN_PRIV_RL: EpidStatus = EpidStatus(3);
    pub const SIG_REVOKED_IN_SIG_RL: EpidStatus = EpidStatus(4);
    pub const SIG_REVOKED_IN_VERIFIER_RL: EpidStatus = EpidStatus(5);
    pub const ERR: EpidStatus = EpidStatus(-999);
    pub const NOT_IMPL: EpidStatus = EpidStatus(-998);
    pub const BAD_ARG_ERR: EpidStatus = EpidStatus(-997);
    pub const NO_MEM_ERR: EpidStatus = EpidStatus(-996);
    pub const MEM_ALLOC_ERR: EpidStatus = EpidStatus(-995);
    pub const MATH_ERR: EpidStatus = EpidStatus(-994);
    pub const DIV_BY_ZERO_ERR: EpidStatus = EpidStatus(-993);
    pub const UNDERFLOW_ERR: EpidStatus = EpidStatus(-992);
    pub const HASH_ALGORITHM_NOT_SUPPORTED: EpidStatus = EpidStatus(-991);
    pub const RAND_MAX_ITER_ERR: EpidStatus = EpidStatus(-990);
    pub const DUPLICATE_ERR: EpidStatus = EpidStatus(-989);
    pub const INCONSISTENT_BASENAME_SET_ERR: EpidStatus = EpidStatus(-988);

    pub fn is_ok(&self) -> bool {
        *self == EpidStatus::NO_ERR
    }

    pub fn name(&self) -> Option<&'static str> {
        let name = match *self {
            EpidStatus::NO_ERR => "kEpidNoErr",
            EpidStatus::SIG_INVALID => "kEpidSigInvalid",
            EpidStatus::SIG_REVOKED_IN_GROUP_RL => "kEpidSigRevokedInGroupRl",
            EpidStatus::SIG_REVOKED_IN_PRIV_RL => "kEpidSigRevokedInPrivRl",
            EpidStatus::SIG_REVOKED_IN_SIG_RL => "kEpidSigRevokedInSigRl",
            EpidStatus::SIG_REVOKED_IN_VERIFIER_RL => "kEpidSigRevokedInVerifierRl",
            EpidStatus::ERR => "kEpidErr",
            EpidStatus::NOT_IMPL => "kEpidNotImpl",
            EpidStatus::BAD_ARG_ERR => "kEpidBadArgErr",
            EpidStatus::NO_MEM_ERR => "kEpidNoMemErr",
            EpidStatus::MEM_ALLOC_ERR => "kEpidMemAllocErr",
            EpidStatus::MATH_ERR => "kEpidMathErr",
            EpidStatus::DIV_BY_ZERO_ERR => "kEpidDivByZeroErr",
            EpidStatus::UNDERFLOW_ERR => "kEpidUnderflowErr",
            EpidStatus::HASH_ALGORITHM_NOT_SUPPORTED => "kEpidHashAlgorithmNotSupported",
            EpidStatus::RAND_MAX_ITER_ERR => "kEpidRandMaxIterErr",
            EpidStatus::DUPLICATE_ERR => "kEpidDuplicateErr",
            EpidStatus::INCONSISTENT_BASENAME_SET_ERR => "kEpidInconsistentBasenameSetErr",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for EpidStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", name, self.0),
            None => write!(f, "unknown status ({})", self.0),
        }
    }
}

impl fmt::Debug for EpidStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EpidStatus({})", self)
    }
}

/// Creates and deletes member contexts.
///
/// `create` mirrors `EpidMemberCreate`: it reports a status and, on success,
/// a context owned by the caller. `precomp` is `None` when the library should
/// compute the pairing values itself. The random source is stored by the
/// library and used on later calls; implementations must not outlive it.
pub trait MemberLibrary {
    type Context;

    fn create(
        &self,
        pub_key: &GroupPubKey,
        priv_key: &PrivKey,
        precomp: Option<&MemberPrecomp>,
        rnd: &RandomSource<'_>,
    ) -> (EpidStatus, *mut Self::Context);

    /// Releases `*ctx` and sets it to null. A null context is a no-op.
    ///
    /// # Safety
    ///
    /// `*ctx` must be null or a context returned by `create` on this library
    /// that has not been deleted yet.
    unsafe fn delete(&self, ctx: &mut *mut Self::Context);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display() {
        assert_eq!(EpidStatus::NO_ERR.to_string(), "kEpidNoErr (0)");
        assert_eq!(EpidStatus::MATH_ERR.to_string(), "kEpidMathErr (-994)");
        assert_eq!(EpidStatus(42).to_string(), "unknown status (42)");
        assert!(EpidStatus::NO_ERR.is_ok());
        assert!(!EpidStatus::SIG_INVALID.is_ok());
    }
}
