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

//! Named access to the inline fixtures.

use crate::error::FixtureError;
use crate::grp01::{self, member0};
use crate::messages;
use epid_types::OctetString;
use std::fmt;
use std::str::FromStr;

/// Every inline fixture, by group and member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fixture {
    Grp01PubKey,
    Grp01SigRl5Entry,
    Grp01Member0PrivKey,
    Grp01Member0Precomp,
    Grp01Member0PreSig0,
    Grp01Member0PreSig1,
    Test1Msg,
    Msg0,
    Msg1,
    Bsn0,
    Bsn1,
}

impl Fixture {
    pub const ALL: [Fixture; 11] = [
        Fixture::Grp01PubKey,
        Fixture::Grp01SigRl5Entry,
        Fixture::Grp01Member0PrivKey,
        Fixture::Grp01Member0Precomp,
        Fixture::Grp01Member0PreSig0,
        Fixture::Grp01Member0PreSig1,
        Fixture::Test1Msg,
        Fixture::Msg0,
        Fixture::Msg1,
        Fixture::Bsn0,
        Fixture::Bsn1,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Fixture::Grp01PubKey => "grp01/pubkey",
            Fixture::Grp01SigRl5Entry => "grp01/sigrl_5_entry",
            Fixture::Grp01Member0PrivKey => "grp01/member0/mprivkey",
            Fixture::Grp01Member0Precomp => "grp01/member0/precomp",
            Fixture::Grp01Member0PreSig0 => "grp01/member0/presig0",
            Fixture::Grp01Member0PreSig1 => "grp01/member0/presig1",
            Fixture::Test1Msg => "msg/test1",
            Fixture::Msg0 => "msg/msg0",
            Fixture::Msg1 => "msg/msg1",
            Fixture::Bsn0 => "bsn/bsn0",
            Fixture::Bsn1 => "bsn/bsn1",
        }
    }

    /// Canonical serialization of the fixture.
    pub fn bytes(&self) -> Vec<u8> {
        match self {
            Fixture::Grp01PubKey => grp01::GROUP_PUBLIC_KEY.to_bytes(),
            Fixture::Grp01SigRl5Entry => grp01::sig_rl_5_entry_data(),
            Fixture::Grp01Member0PrivKey => member0::PRIVATE_KEY.to_bytes(),
            Fixture::Grp01Member0Precomp => member0::PRECOMP.to_bytes(),
            Fixture::Grp01Member0PreSig0 => member0::PRECOMPUTED_SIGNATURES[0].to_bytes(),
            Fixture::Grp01Member0PreSig1 => member0::PRECOMPUTED_SIGNATURES[1].to_bytes(),
            Fixture::Test1Msg => messages::TEST1.to_vec(),
            Fixture::Msg0 => messages::MSG0.to_vec(),
            Fixture::Msg1 => messages::MSG1.to_vec(),
            Fixture::Bsn0 => messages::BSN0.to_vec(),
            Fixture::Bsn1 => messages::BSN1.to_vec(),
        }
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Fixture {
    type Err = FixtureError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        Fixture::ALL
            .iter()
            .find(|fixture| fixture.path() == path)
            .copied()
            .ok_or_else(|| FixtureError::UnknownFixture(path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_path_resolves_to_itself() {
        for fixture in Fixture::ALL {
            assert_eq!(fixture.path().parse::<Fixture>().unwrap(), fixture);
        }
        let paths: HashSet<_> = Fixture::ALL.iter().map(|f| f.path()).collect();
        assert_eq!(paths.len(), Fixture::ALL.len());
    }

    #[test]
    fn unknown_name_is_a_lookup_error() {
        assert_eq!(
            "grp01/member1/mprivkey".parse::<Fixture>(),
            Err(FixtureError::UnknownFixture("grp01/member1/mprivkey".to_string()))
        );
    }

    #[test]
    fn sizes_by_name() {
        assert_eq!(Fixture::Grp01PubKey.bytes().len(), 272);
        assert_eq!(Fixture::Grp01Member0PrivKey.bytes().len(), 144);
        assert_eq!(Fixture::Grp01Member0Precomp.bytes().len(), 1536);
        assert_eq!(Fixture::Grp01Member0PreSig1.bytes().len(), 832);
        assert_eq!(Fixture::Grp01SigRl5Entry.bytes().len(), 24 + 5 * 128);
        assert_eq!(Fixture::Test1Msg.bytes(), b"test1".to_vec());
        assert_eq!(Fixture::Bsn1.to_string(), "bsn/bsn1");
    }
}
