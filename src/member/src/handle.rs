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

use crate::error::{CreateVariant, MemberError};
use crate::library::MemberLibrary;
use crate::random::RandomSource;
use epid_types::{GroupPubKey, MemberPrecomp, PrivKey};
use log::*;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// Owns one member context created by `L`.
///
/// The context is non-null from successful construction until drop, and is
/// released exactly once on every exit path. The handle cannot be cloned and
/// is neither `Send` nor `Sync`; move it to hand it over. The keys, the
/// precomputation and the random source are borrowed for `'a`.
pub struct MemberHandle<'a, L: MemberLibrary> {
    lib: &'a L,
    ctx: NonNull<L::Context>,
    _rnd: RandomSource<'a>,
    _keys: PhantomData<(&'a GroupPubKey, &'a PrivKey)>,
}

impl<'a, L: MemberLibrary> MemberHandle<'a, L> {
    /// Creates a context and lets the library compute its own precomputation.
    pub fn new(
        lib: &'a L,
        pub_key: &'a GroupPubKey,
        priv_key: &'a PrivKey,
        rnd: RandomSource<'a>,
    ) -> Result<Self, MemberError> {
        Self::create(lib, pub_key, priv_key, None, rnd)
    }

    /// Creates a context from a precomputation made earlier for the same keys.
    pub fn with_precomp(
        lib: &'a L,
        pub_key: &'a GroupPubKey,
        priv_key: &'a PrivKey,
        precomp: &'a MemberPrecomp,
        rnd: RandomSource<'a>,
    ) -> Result<Self, MemberError> {
        Self::create(lib, pub_key, priv_key, Some(precomp), rnd)
    }

    fn create(
        lib: &'a L,
        pub_key: &'a GroupPubKey,
        priv_key: &'a PrivKey,
        precomp: Option<&'a MemberPrecomp>,
        rnd: RandomSource<'a>,
    ) -> Result<Self, MemberError> {
        let variant = match precomp {
            Some(_) => CreateVariant::WithPrecomp,
            None => CreateVariant::WithoutPrecomp,
        };
        let gid = pub_key.gid;
        trace!("calling {} for group {}", variant, gid);
        let (status, mut raw) = lib.create(pub_key, priv_key, precomp, &rnd);
        if !status.is_ok() {
            if !raw.is_null() {
                warn!("{} failed with {} but returned a context; releasing it", variant, status);
                // A failed call owns nothing we should keep.
                unsafe { lib.delete(&mut raw) };
            }
            error!("test defect: failed to construct member context via {} for group {}: {}", variant, gid, status);
            return Err(MemberError::Construction {
                variant,
                gid,
                status,
            });
        }
        let ctx = match NonNull::new(raw) {
            Some(ctx) => ctx,
            None => {
                error!("test defect: {} returned no member context for group {}", variant, gid);
                return Err(MemberError::NullContext { variant, gid });
            }
        };
        info!("member context created via {} for group {}", variant, gid);
        Ok(MemberHandle {
            lib,
            ctx,
            _rnd: rnd,
            _keys: PhantomData,
        })
    }

    /// Borrows the live context.
    pub fn context(&self) -> &L::Context {
        unsafe { self.ctx.as_ref() }
    }

    /// Borrows the live context for operations that update it.
    pub fn context_mut(&mut self) -> &mut L::Context {
        unsafe { self.ctx.as_mut() }
    }

    /// Pointer for passing the context to library calls. Ownership stays with
    /// the handle; the pointer dangles once the handle is dropped.
    pub fn as_ptr(&self) -> *const L::Context {
        self.ctx.as_ptr()
    }

    pub fn as_mut_ptr(&mut self) -> *mut L::Context {
        self.ctx.as_ptr()
    }
}

impl<'a, L: MemberLibrary> Drop for MemberHandle<'a, L> {
    fn drop(&mut self) {
        let mut raw = self.ctx.as_ptr();
        unsafe { self.lib.delete(&mut raw) };
        trace!("member context released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::EpidStatus;
    use epid_testdata::grp01;
    use epid_testdata::grp01::member0;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::{Cell, RefCell};
    use std::sync::Once;

    static LOGGING: Once = Once::new();

    fn test_logging() {
        LOGGING.call_once(|| {
            let _ = stderrlog::new()
                .quiet(false)
                .verbosity(4)
                .timestamp(stderrlog::Timestamp::Millisecond)
                .init();
        });
    }

    /// Context produced by the fake library.
    #[derive(Debug)]
    struct FakeContext {
        gid: epid_types::GroupId,
        precomp_supplied: bool,
        seed_draw: [u32; 8],
    }

    /// Member library that counts what it hands out and takes back.
    #[derive(Default)]
    struct FakeLibrary {
        created: Cell<usize>,
        deleted: Cell<usize>,
        null_deletes: Cell<usize>,
        fail_with: Cell<Option<EpidStatus>>,
        leak_on_failure: Cell<bool>,
        succeed_without_context: Cell<bool>,
        // Precomputation the library accepts for the fixture keys.
        valid_precomp: RefCell<Option<MemberPrecomp>>,
    }

    impl FakeLibrary {
        fn live(&self) -> usize {
            self.created.get() - self.deleted.get()
        }
    }

    impl MemberLibrary for FakeLibrary {
        type Context = FakeContext;

        fn create(
            &self,
            pub_key: &GroupPubKey,
            _priv_key: &PrivKey,
            precomp: Option<&MemberPrecomp>,
            rnd: &RandomSource<'_>,
        ) -> (EpidStatus, *mut FakeContext) {
            let mut seed_draw = [0u32; 8];
            let ret = unsafe { (rnd.supplier())(seed_draw.as_mut_ptr(), 256, rnd.param()) };
            if ret != 0 {
                return (EpidStatus::RAND_MAX_ITER_ERR, std::ptr::null_mut());
            }
            if let (Some(given), Some(valid)) = (precomp, self.valid_precomp.borrow().as_ref()) {
                if given != valid {
                    return (EpidStatus::BAD_ARG_ERR, std::ptr::null_mut());
                }
            }
            if self.succeed_without_context.get() {
                return (EpidStatus::NO_ERR, std::ptr::null_mut());
            }
            let status = self.fail_with.get().unwrap_or(EpidStatus::NO_ERR);
            if !status.is_ok() && !self.leak_on_failure.get() {
                return (status, std::ptr::null_mut());
            }
            self.created.set(self.created.get() + 1);
            let ctx = Box::new(FakeContext {
                gid: pub_key.gid,
                precomp_supplied: precomp.is_some(),
                seed_draw,
            });
            (status, Box::into_raw(ctx))
        }

        unsafe fn delete(&self, ctx: &mut *mut FakeContext) {
            if ctx.is_null() {
                self.null_deletes.set(self.null_deletes.get() + 1);
                return;
            }
            drop(Box::from_raw(*ctx));
            *ctx = std::ptr::null_mut();
            self.deleted.set(self.deleted.get() + 1);
        }
    }

    #[test]
    fn construct_and_release_once() {
        test_logging();
        let lib = FakeLibrary::default();
        let mut rng = StdRng::seed_from_u64(1);
        {
            let handle = MemberHandle::new(
                &lib,
                &grp01::GROUP_PUBLIC_KEY,
                &member0::PRIVATE_KEY,
                RandomSource::from_rng(&mut rng),
            )
            .unwrap();
            assert!(!handle.as_ptr().is_null());
            assert_eq!(handle.context().gid, grp01::GROUP_PUBLIC_KEY.gid);
            assert!(!handle.context().precomp_supplied);
            assert_eq!(lib.live(), 1);
        }
        assert_eq!(lib.created.get(), 1);
        assert_eq!(lib.deleted.get(), 1);
        assert_eq!(lib.null_deletes.get(), 0);
    }

    #[test]
    fn construct_with_precomp() {
        let lib = FakeLibrary::default();
        *lib.valid_precomp.borrow_mut() = Some(member0::PRECOMP);
        let mut rng = StdRng::seed_from_u64(1);
        let handle = MemberHandle::with_precomp(
            &lib,
            &grp01::GROUP_PUBLIC_KEY,
            &member0::PRIVATE_KEY,
            &member0::PRECOMP,
            RandomSource::from_rng(&mut rng),
        )
        .unwrap();
        assert!(handle.context().precomp_supplied);
        drop(handle);
        assert_eq!(lib.live(), 0);
    }

    #[test]
    fn precomp_and_plain_see_the_same_randomness() {
        let lib = FakeLibrary::default();
        let mut rng_a = StdRng::seed_from_u64(1);
        let mut rng_b = StdRng::seed_from_u64(1);
        let plain = MemberHandle::new(
            &lib,
            &grp01::GROUP_PUBLIC_KEY,
            &member0::PRIVATE_KEY,
            RandomSource::from_rng(&mut rng_a),
        )
        .unwrap();
        let precomputed = MemberHandle::with_precomp(
            &lib,
            &grp01::GROUP_PUBLIC_KEY,
            &member0::PRIVATE_KEY,
            &member0::PRECOMP,
            RandomSource::from_rng(&mut rng_b),
        )
        .unwrap();
        assert_eq!(plain.context().seed_draw, precomputed.context().seed_draw);
        assert_eq!(lib.live(), 2);
    }

    #[test]
    fn mismatched_precomp_is_rejected() {
        let lib = FakeLibrary::default();
        *lib.valid_precomp.borrow_mut() = Some(member0::PRECOMP);
        let mut other = member0::PRECOMP;
        other.ea2.0[0] ^= 0xff;
        let mut rng = StdRng::seed_from_u64(1);
        let err = MemberHandle::with_precomp(
            &lib,
            &grp01::GROUP_PUBLIC_KEY,
            &member0::PRIVATE_KEY,
            &other,
            RandomSource::from_rng(&mut rng),
        )
        .err()
        .unwrap();
        assert_eq!(
            err,
            MemberError::Construction {
                variant: CreateVariant::WithPrecomp,
                gid: grp01::GROUP_PUBLIC_KEY.gid,
                status: EpidStatus::BAD_ARG_ERR,
            }
        );
        assert_eq!(lib.created.get(), 0);
    }

    #[test]
    fn failure_leaves_nothing_to_release() {
        test_logging();
        let lib = FakeLibrary::default();
        lib.fail_with.set(Some(EpidStatus::MATH_ERR));
        let mut rng = StdRng::seed_from_u64(1);
        let err = MemberHandle::new(
            &lib,
            &grp01::GROUP_PUBLIC_KEY,
            &member0::PRIVATE_KEY,
            RandomSource::from_rng(&mut rng),
        )
        .err()
        .unwrap();
        assert_eq!(err.status(), Some(EpidStatus::MATH_ERR));
        assert!(err.to_string().contains("EpidMemberCreate()"));
        assert_eq!(lib.created.get(), 0);
        assert_eq!(lib.deleted.get(), 0);
    }

    #[test]
    fn context_returned_with_failure_is_released() {
        let lib = FakeLibrary::default();
        lib.fail_with.set(Some(EpidStatus::ERR));
        lib.leak_on_failure.set(true);
        let mut rng = StdRng::seed_from_u64(1);
        let result = MemberHandle::new(
            &lib,
            &grp01::GROUP_PUBLIC_KEY,
            &member0::PRIVATE_KEY,
            RandomSource::from_rng(&mut rng),
        );
        assert!(result.is_err());
        assert_eq!(lib.created.get(), 1);
        assert_eq!(lib.deleted.get(), 1);
    }

    #[test]
    fn success_without_context_is_an_error() {
        let lib = FakeLibrary::default();
        lib.succeed_without_context.set(true);
        let mut rng = StdRng::seed_from_u64(1);
        let err = MemberHandle::new(
            &lib,
            &grp01::GROUP_PUBLIC_KEY,
            &member0::PRIVATE_KEY,
            RandomSource::from_rng(&mut rng),
        )
        .err()
        .unwrap();
        assert!(matches!(err, MemberError::NullContext { .. }));
        assert_eq!(err.status(), None);
        assert_eq!(lib.null_deletes.get(), 0);
    }

    #[test]
    fn failing_random_source_fails_construction() {
        unsafe extern "C" fn broken(
            _rand_data: *mut libc::c_uint,
            _num_bits: libc::c_int,
            _user_data: *mut libc::c_void,
        ) -> libc::c_int {
            -1
        }
        let lib = FakeLibrary::default();
        let rnd = unsafe { RandomSource::from_raw(broken, std::ptr::null_mut()) };
        let err = MemberHandle::new(&lib, &grp01::GROUP_PUBLIC_KEY, &member0::PRIVATE_KEY, rnd)
            .err()
            .unwrap();
        assert_eq!(err.status(), Some(EpidStatus::RAND_MAX_ITER_ERR));
    }

    #[test]
    fn release_runs_on_early_return() {
        fn use_then_bail(lib: &FakeLibrary) -> Result<(), MemberError> {
            let mut rng = StdRng::seed_from_u64(5);
            let _handle = MemberHandle::new(
                lib,
                &grp01::GROUP_PUBLIC_KEY,
                &member0::PRIVATE_KEY,
                RandomSource::from_rng(&mut rng),
            )?;
            Err(MemberError::LowLevelError("EpidSign", EpidStatus::ERR))
        }
        let lib = FakeLibrary::default();
        assert!(use_then_bail(&lib).is_err());
        assert_eq!(lib.live(), 0);
    }

    #[test]
    fn release_runs_on_panic() {
        let lib = FakeLibrary::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut rng = StdRng::seed_from_u64(5);
            let _handle = MemberHandle::new(
                &lib,
                &grp01::GROUP_PUBLIC_KEY,
                &member0::PRIVATE_KEY,
                RandomSource::from_rng(&mut rng),
            )
            .unwrap();
            panic!("scenario failed");
        }));
        assert!(result.is_err());
        assert_eq!(lib.created.get(), 1);
        assert_eq!(lib.deleted.get(), 1);
    }

    #[test]
    fn moved_handle_is_released_once() {
        let lib = FakeLibrary::default();
        let mut rng = StdRng::seed_from_u64(9);
        let handle = MemberHandle::new(
            &lib,
            &grp01::GROUP_PUBLIC_KEY,
            &member0::PRIVATE_KEY,
            RandomSource::from_rng(&mut rng),
        )
        .unwrap();
        let ptr = handle.as_ptr();
        let moved = vec![handle];
        assert_eq!(moved[0].as_ptr(), ptr);
        drop(moved);
        assert_eq!(lib.deleted.get(), 1);
    }

    #[test]
    fn repeated_cycles_leave_no_live_contexts() {
        let lib = FakeLibrary::default();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10_000 {
            let handle = MemberHandle::new(
                &lib,
                &grp01::GROUP_PUBLIC_KEY,
                &member0::PRIVATE_KEY,
                RandomSource::from_rng(&mut rng),
            )
            .unwrap();
            assert_eq!(lib.live(), 1);
            drop(handle);
        }
        assert_eq!(lib.created.get(), 10_000);
        assert_eq!(lib.live(), 0);
    }

    #[test]
    fn mutable_access_reaches_the_context() {
        let lib = FakeLibrary::default();
        let mut rng = StdRng::seed_from_u64(2);
        let mut handle = MemberHandle::new(
            &lib,
            &grp01::GROUP_PUBLIC_KEY,
            &member0::PRIVATE_KEY,
            RandomSource::from_rng(&mut rng),
        )
        .unwrap();
        handle.context_mut().precomp_supplied = true;
        assert!(handle.context().precomp_supplied);
        assert_eq!(handle.as_mut_ptr() as *const FakeContext, handle.as_ptr());
    }
}
