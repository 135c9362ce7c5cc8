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

use epid_types::FormatError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixtureError {
    #[error("unknown fixture {0:?}")]
    UnknownFixture(String),
    #[error("I/O Error: {0}")]
    IOError(String),
    #[error("malformed vector {path}: {source}")]
    Vector {
        path: String,
        #[source]
        source: FormatError,
    },
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("bad configuration: {0}")]
    Config(String),
}
