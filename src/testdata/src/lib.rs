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

//! Fixed cryptographic material for exercising the EPID member.
//!
//! Inline fixtures are `const` items organised by group and member, so they
//! are shared read-only by every test. Pre-generated vectors that ship as
//! binary files are read once into a [`VectorStore`].

#[macro_use]
extern crate lazy_static;

pub mod config;
pub mod error;
pub mod fixture;
pub mod grp01;
pub mod messages;
pub mod vectors;

pub use config::HarnessConfig;
pub use error::FixtureError;
pub use fixture::Fixture;
pub use vectors::{Vector, VectorStore};
