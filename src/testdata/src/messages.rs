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

//! Messages and basenames used as signing inputs.

pub const TEST1: &[u8] = b"test1";
pub const MSG0: &[u8] = b"msg0";
pub const MSG1: &[u8] = b"msg1";
pub const BSN0: &[u8] = b"bsn0";
pub const BSN1: &[u8] = b"bsn1";
