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

//! Bindings to the EPID SDK member library.

use crate::library::{EpidStatus, MemberLibrary};
use crate::random::{BitSupplier, RandomSource};
use epid_types::{GroupPubKey, HashAlg, MemberPrecomp, PreComputedSignature, PrivKey};
use libc::{c_void, size_t};
use std::marker::{PhantomData, PhantomPinned};

/// Opaque member context owned by the SDK.
#[repr(C)]
pub struct MemberCtx {
    _data: [u8; 0],
    _marker: PhantomData<(*mut u8, PhantomPinned)>,
}

extern "C" {
    pub fn EpidMemberCreate(
        pub_key: *const GroupPubKey,
        priv_key: *const PrivKey,
        precomp: *const MemberPrecomp,
        rnd_func: BitSupplier,
        rnd_param: *mut c_void,
        ctx: *mut *mut MemberCtx,
    ) -> EpidStatus;

    pub fn EpidMemberDelete(ctx: *mut *mut MemberCtx);

    pub fn EpidMemberWritePrecomp(ctx: *const MemberCtx, precomp: *mut MemberPrecomp)
        -> EpidStatus;

    pub fn EpidMemberSetHashAlg(ctx: *mut MemberCtx, hash_alg: HashAlg) -> EpidStatus;

    pub fn EpidSign(
        ctx: *const MemberCtx,
        msg: *const c_void,
        msg_len: size_t,
        basename: *const c_void,
        basename_len: size_t,
        sig_rl: *const u8,
        sig_rl_size: size_t,
        sig: *mut u8,
        sig_len: size_t,
    ) -> EpidStatus;

    pub fn EpidGetSigSize(sig_rl: *const u8) -> size_t;

    pub fn EpidRegisterBaseName(
        ctx: *mut MemberCtx,
        basename: *const c_void,
        basename_len: size_t,
    ) -> EpidStatus;

    pub fn EpidAddPreSigs(
        ctx: *mut MemberCtx,
        number_presigs: size_t,
        presigs: *mut PreComputedSignature,
    ) -> EpidStatus;

    pub fn EpidGetNumPreSigs(ctx: *const MemberCtx) -> size_t;

    pub fn EpidWritePreSigs(
        ctx: *mut MemberCtx,
        presigs: *mut PreComputedSignature,
        number_presigs: size_t,
    ) -> EpidStatus;
}

/// The SDK member library.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeLibrary;

impl MemberLibrary for NativeLibrary {
    type Context = MemberCtx;

    fn create(
        &self,
        pub_key: &GroupPubKey,
        priv_key: &PrivKey,
        precomp: Option<&MemberPrecomp>,
        rnd: &RandomSource<'_>,
    ) -> (EpidStatus, *mut MemberCtx) {
        let precomp = precomp.map_or(std::ptr::null(), |p| p as *const MemberPrecomp);
        let mut ctx: *mut MemberCtx = std::ptr::null_mut();
        let sts;
        unsafe {
            sts = EpidMemberCreate(
                pub_key,
                priv_key,
                precomp,
                rnd.supplier(),
                rnd.param(),
                &mut ctx,
            );
        }
        (sts, ctx)
    }

    unsafe fn delete(&self, ctx: &mut *mut MemberCtx) {
        EpidMemberDelete(ctx);
    }
}
