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

//! Member operations of the SDK, driven through a live handle.

use crate::error::MemberError;
use crate::handle::MemberHandle;
use crate::native::{self, NativeLibrary};
use epid_types::{HashAlg, MemberPrecomp, PreComputedSignature, SigRl};
use libc::c_void;
use log::*;

impl<'a> MemberHandle<'a, NativeLibrary> {
    pub fn set_hash_alg(&mut self, hash_alg: HashAlg) -> Result<(), MemberError> {
        let sts = unsafe { native::EpidMemberSetHashAlg(self.as_mut_ptr(), hash_alg) };
        if !sts.is_ok() {
            return Err(MemberError::LowLevelError("EpidMemberSetHashAlg", sts));
        }
        Ok(())
    }

    /// Signs `message`, optionally under `basename` and against a serialized
    /// signature revocation list.
    pub fn sign(
        &self,
        message: &[u8],
        basename: Option<&[u8]>,
        sig_rl: Option<&[u8]>,
    ) -> Result<Vec<u8>, MemberError> {
        let (bsn, bsn_len) = match basename {
            Some(bsn) => (bsn.as_ptr() as *const c_void, bsn.len()),
            None => (std::ptr::null(), 0),
        };
        let (rl, rl_len) = match sig_rl {
            Some(rl) => (rl.as_ptr(), rl.len()),
            None => (std::ptr::null(), 0),
        };
        let mut signature = vec![0u8; signature_size(sig_rl)];
        let sts = unsafe {
            native::EpidSign(
                self.as_ptr(),
                message.as_ptr() as *const c_void,
                message.len(),
                bsn,
                bsn_len,
                rl,
                rl_len,
                signature.as_mut_ptr(),
                signature.len(),
            )
        };
        if !sts.is_ok() {
            debug!("EpidSign failed: {}", sts);
            return Err(MemberError::LowLevelError("EpidSign", sts));
        }
        Ok(signature)
    }

    pub fn register_basename(&mut self, basename: &[u8]) -> Result<(), MemberError> {
        let sts = unsafe {
            native::EpidRegisterBaseName(
                self.as_mut_ptr(),
                basename.as_ptr() as *const c_void,
                basename.len(),
            )
        };
        if !sts.is_ok() {
            return Err(MemberError::LowLevelError("EpidRegisterBaseName", sts));
        }
        Ok(())
    }

    /// Adds `presigs` to the context's pool. The library may clear the
    /// entries it consumed.
    pub fn add_presigs(&mut self, presigs: &mut [PreComputedSignature]) -> Result<(), MemberError> {
        let sts =
            unsafe { native::EpidAddPreSigs(self.as_mut_ptr(), presigs.len(), presigs.as_mut_ptr()) };
        if !sts.is_ok() {
            return Err(MemberError::LowLevelError("EpidAddPreSigs", sts));
        }
        Ok(())
    }

    /// Has the library compute `count` fresh precomputed signatures.
    pub fn compute_presigs(&mut self, count: usize) -> Result<(), MemberError> {
        let sts = unsafe { native::EpidAddPreSigs(self.as_mut_ptr(), count, std::ptr::null_mut()) };
        if !sts.is_ok() {
            return Err(MemberError::LowLevelError("EpidAddPreSigs", sts));
        }
        Ok(())
    }

    pub fn num_presigs(&self) -> usize {
        unsafe { native::EpidGetNumPreSigs(self.as_ptr()) }
    }

    /// Removes `count` precomputed signatures from the pool and returns them.
    pub fn write_presigs(&mut self, count: usize) -> Result<Vec<PreComputedSignature>, MemberError> {
        let mut presigs = vec![PreComputedSignature::default(); count];
        let sts =
            unsafe { native::EpidWritePreSigs(self.as_mut_ptr(), presigs.as_mut_ptr(), count) };
        if !sts.is_ok() {
            return Err(MemberError::LowLevelError("EpidWritePreSigs", sts));
        }
        Ok(presigs)
    }

    pub fn write_precomp(&self) -> Result<MemberPrecomp, MemberError> {
        let mut precomp = MemberPrecomp::default();
        let sts = unsafe { native::EpidMemberWritePrecomp(self.as_ptr(), &mut precomp) };
        if !sts.is_ok() {
            return Err(MemberError::LowLevelError("EpidMemberWritePrecomp", sts));
        }
        Ok(precomp)
    }
}

/// Size of a signature made against `sig_rl`. A list too short to carry a
/// header counts as no list.
pub fn signature_size(sig_rl: Option<&[u8]>) -> usize {
    let rl = match sig_rl {
        Some(rl) if rl.len() >= SigRl::HEADER_SIZE => rl.as_ptr(),
        _ => std::ptr::null(),
    };
    unsafe { native::EpidGetSigSize(rl) }
}
