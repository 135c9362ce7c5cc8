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

use std::env;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-env-changed=EPID_SDK_LIB_DIR");
    // Without the native feature the crate only carries the library seam and
    // nothing needs to be linked.
    if env::var_os("CARGO_FEATURE_NATIVE").is_none() {
        return;
    }
    let lib_dir = env::var("EPID_SDK_LIB_DIR").unwrap_or_else(|_| "/usr/local/lib/epid".to_string());
    // Log to stderr to make future maintenance easier.
    eprintln!("linking EPID SDK from {}", lib_dir);
    println!("cargo:rustc-link-search={}", Path::new(&lib_dir).display());
    println!("cargo:rustc-link-lib=static=member");
    println!("cargo:rustc-link-lib=static=common");
    println!("cargo:rustc-link-lib=static=ippcp");
}
