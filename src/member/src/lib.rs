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

//! Scoped ownership of a native EPID member context.
//!
//! [`MemberHandle`] creates exactly one member context through a
//! [`MemberLibrary`] and releases it exactly once when dropped. The library
//! itself (pairing arithmetic, signing, revocation checks) stays behind the
//! trait; with the `native` feature it is the EPID SDK.

pub mod error;
pub mod handle;
pub mod library;
pub mod random;

#[cfg(feature = "native")]
pub(crate) mod native;
#[cfg(feature = "native")]
pub mod ops;

pub use error::{CreateVariant, MemberError};
pub use handle::MemberHandle;
pub use library::{EpidStatus, MemberLibrary};
#[cfg(feature = "native")]
pub use native::{MemberCtx, NativeLibrary};
pub use random::{BitSupplier, RandomSource};
