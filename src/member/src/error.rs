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

use crate::library::EpidStatus;
use epid_types::GroupId;
use std::fmt;
use thiserror::Error;

/// Which creation call was made.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreateVariant {
    WithoutPrecomp,
    WithPrecomp,
}

impl fmt::Display for CreateVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateVariant::WithoutPrecomp => write!(f, "EpidMemberCreate()"),
            CreateVariant::WithPrecomp => write!(f, "EpidMemberCreate() with precomp"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemberError {
    #[error("failed to construct member context via {variant} for group {gid}: {status}")]
    Construction {
        variant: CreateVariant,
        gid: GroupId,
        status: EpidStatus,
    },
    #[error("{variant} reported success for group {gid} without a member context")]
    NullContext { variant: CreateVariant, gid: GroupId },
    #[error("Low level {0}() failed: {1}")]
    LowLevelError(&'static str, EpidStatus),
}

impl MemberError {
    /// Status reported by the member library, if the failure came from it.
    pub fn status(&self) -> Option<EpidStatus> {
        match self {
            MemberError::Construction { status, .. } => Some(*status),
            MemberError::LowLevelError(_, status) => Some(*status),
            MemberError::NullContext { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_error_names_the_call() {
        let mut gid = GroupId::default();
        gid.0[15] = 1;
        let err = MemberError::Construction {
            variant: CreateVariant::WithPrecomp,
            gid,
            status: EpidStatus::BAD_ARG_ERR,
        };
        assert_eq!(
            err.to_string(),
            "failed to construct member context via EpidMemberCreate() with precomp \
             for group 00000000000000000000000000000001: kEpidBadArgErr (-997)"
        );
        assert_eq!(err.status(), Some(EpidStatus::BAD_ARG_ERR));
    }
}
