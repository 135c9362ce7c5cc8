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

//! Pre-generated vectors read from binary files.
//!
//! The files are consumed verbatim. Loading is all-or-nothing: once a
//! [`VectorStore`] exists every vector in it is present and the typed ones
//! have been decoded, so lookups cannot fail.

use crate::config::HarnessConfig;
use crate::error::FixtureError;
use epid_types::{
    CompressedPrivKey, EpidSignature, GroupPubKey, HashAlg, OctetString, PrivKey,
};
use log::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Every file-backed vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Vector {
    IkgfGroupAPubKey,
    IkgfGroupAMember0PrivKey,
    Grp01Member0SigTest1Sha256,
    Grp01Member0SigTest1Sha384,
    Grp01Member0SigTest1Sha512,
    Grp01SigRl,
    GrpXPubKey,
    GrpXMember9CompressedPrivKey,
    GrpXMember9PrivKey,
    GrpYPubKey,
    GrpYMember9CompressedPrivKey,
}

impl Vector {
    pub const ALL: [Vector; 11] = [
        Vector::IkgfGroupAPubKey,
        Vector::IkgfGroupAMember0PrivKey,
        Vector::Grp01Member0SigTest1Sha256,
        Vector::Grp01Member0SigTest1Sha384,
        Vector::Grp01Member0SigTest1Sha512,
        Vector::Grp01SigRl,
        Vector::GrpXPubKey,
        Vector::GrpXMember9CompressedPrivKey,
        Vector::GrpXMember9PrivKey,
        Vector::GrpYPubKey,
        Vector::GrpYMember9CompressedPrivKey,
    ];

    /// Location relative to the testdata directory.
    pub fn relative_path(&self) -> &'static str {
        match self {
            Vector::IkgfGroupAPubKey => "ikgf/groupa/pubkey.bin",
            Vector::IkgfGroupAMember0PrivKey => "ikgf/groupa/member0/mprivkey.dat",
            Vector::Grp01Member0SigTest1Sha256 => "grp01/member0/sig_test1_sha256.dat",
            Vector::Grp01Member0SigTest1Sha384 => "grp01/member0/sig_test1_sha384.dat",
            Vector::Grp01Member0SigTest1Sha512 => "grp01/member0/sig_test1_sha512.dat",
            Vector::Grp01SigRl => "grp01/sigrl.bin",
            Vector::GrpXPubKey => "grp_x/pubkey.bin",
            Vector::GrpXMember9CompressedPrivKey => "grp_x/cmember9/cmpprivkey.dat",
            Vector::GrpXMember9PrivKey => "grp_x/cmember9/mprivkey.dat",
            Vector::GrpYPubKey => "grp_y/pubkey.bin",
            Vector::GrpYMember9CompressedPrivKey => "grp_y/cmember9/cmpprivkey.dat",
        }
    }

    /// Golden `test1` signature of group 1 member 0 for `hash_alg`.
    pub fn golden_signature(hash_alg: HashAlg) -> Option<Vector> {
        match hash_alg {
            HashAlg::Sha256 => Some(Vector::Grp01Member0SigTest1Sha256),
            HashAlg::Sha384 => Some(Vector::Grp01Member0SigTest1Sha384),
            HashAlg::Sha512 => Some(Vector::Grp01Member0SigTest1Sha512),
            HashAlg::Sha512_256 => None,
        }
    }
}

/// All file-backed vectors of one testdata directory.
#[derive(Debug)]
pub struct VectorStore {
    dir: PathBuf,
    blobs: HashMap<Vector, Vec<u8>>,
    grp_x_key: GroupPubKey,
    grp_x_member9_compressed_key: CompressedPrivKey,
    grp_x_member9_priv_key: PrivKey,
    grp_y_key: GroupPubKey,
    grp_y_member9_compressed_key: CompressedPrivKey,
}

lazy_static! {
    static ref GLOBAL_STORE: Result<VectorStore, FixtureError> =
        HarnessConfig::from_env().and_then(|config| VectorStore::load(&config.testdata_dir));
}

impl VectorStore {
    /// Reads and checks every vector under `dir`.
    pub fn load(dir: &Path) -> Result<Self, FixtureError> {
        info!("loading EPID vectors from {}", dir.display());
        let mut blobs = HashMap::new();
        for vector in Vector::ALL {
            let path = dir.join(vector.relative_path());
            let bytes = std::fs::read(&path)
                .map_err(|e| FixtureError::IOError(format!("{}: {}", path.display(), e)))?;
            debug!("read {} ({} bytes)", path.display(), bytes.len());
            blobs.insert(vector, bytes);
        }
        Ok(VectorStore {
            grp_x_key: decode(dir, &blobs, Vector::GrpXPubKey)?,
            grp_x_member9_compressed_key: decode(dir, &blobs, Vector::GrpXMember9CompressedPrivKey)?,
            grp_x_member9_priv_key: decode(dir, &blobs, Vector::GrpXMember9PrivKey)?,
            grp_y_key: decode(dir, &blobs, Vector::GrpYPubKey)?,
            grp_y_member9_compressed_key: decode(dir, &blobs, Vector::GrpYMember9CompressedPrivKey)?,
            dir: dir.to_path_buf(),
            blobs,
        })
    }

    /// Process-wide store for the directory named by [`HarnessConfig::from_env`],
    /// loaded on first use.
    pub fn global() -> Result<&'static VectorStore, FixtureError> {
        GLOBAL_STORE.as_ref().map_err(Clone::clone)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn bytes(&self, vector: Vector) -> &[u8] {
        // load() inserted every vector.
        self.blobs.get(&vector).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn grp_x_key(&self) -> &GroupPubKey {
        &self.grp_x_key
    }

    pub fn grp_x_member9_compressed_key(&self) -> &CompressedPrivKey {
        &self.grp_x_member9_compressed_key
    }

    pub fn grp_x_member9_priv_key(&self) -> &PrivKey {
        &self.grp_x_member9_priv_key
    }

    pub fn grp_y_key(&self) -> &GroupPubKey {
        &self.grp_y_key
    }

    pub fn grp_y_member9_compressed_key(&self) -> &CompressedPrivKey {
        &self.grp_y_member9_compressed_key
    }

    /// Decodes the golden `test1` signature for `hash_alg`.
    pub fn golden_signature(&self, hash_alg: HashAlg) -> Result<EpidSignature, FixtureError> {
        let vector = Vector::golden_signature(hash_alg).ok_or_else(|| {
            FixtureError::UnknownFixture(format!("grp01/member0/sig_test1_{}", hash_alg.name()))
        })?;
        Ok(EpidSignature::decode(self.bytes(vector))?)
    }
}

fn decode<T: OctetString>(
    dir: &Path,
    blobs: &HashMap<Vector, Vec<u8>>,
    vector: Vector,
) -> Result<T, FixtureError> {
    let bytes = blobs.get(&vector).map(Vec::as_slice).unwrap_or_default();
    T::from_bytes(bytes).map_err(|source| FixtureError::Vector {
        path: dir.join(vector.relative_path()).display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grp01::{self, member0};
    use epid_types::{FpElemStr, FqElemStr, GroupId, SigRl};

    fn write_vector(dir: &Path, vector: Vector, bytes: &[u8]) {
        let path = dir.join(vector.relative_path());
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, bytes).unwrap();
    }

    fn compressed_key(gid: GroupId) -> CompressedPrivKey {
        CompressedPrivKey {
            gid,
            ax: FqElemStr([0x11; 32]),
            seed: FpElemStr([0x22; 32]),
        }
    }

    fn signature_bytes(n2: u32, fill: u8) -> Vec<u8> {
        let mut bytes = vec![fill; EpidSignature::HEADER_SIZE - 8];
        bytes.extend_from_slice(&0u32.to_be_bytes());
        bytes.extend_from_slice(&n2.to_be_bytes());
        bytes.extend(std::iter::repeat(fill).take(n2 as usize * 160));
        bytes
    }

    // Populates a directory from the inline fixtures.
    fn populate(dir: &Path) {
        let mut grp_x = grp01::GROUP_PUBLIC_KEY;
        grp_x.gid.0[15] = 0x0a;
        let mut grp_y = grp01::GROUP_PUBLIC_KEY;
        grp_y.gid.0[15] = 0x0b;
        let mut member9 = member0::PRIVATE_KEY;
        member9.gid = grp_x.gid;
        write_vector(dir, Vector::IkgfGroupAPubKey, &grp01::GROUP_PUBLIC_KEY.to_bytes());
        write_vector(dir, Vector::IkgfGroupAMember0PrivKey, &member0::PRIVATE_KEY.to_bytes());
        write_vector(dir, Vector::Grp01Member0SigTest1Sha256, &signature_bytes(5, 1));
        write_vector(dir, Vector::Grp01Member0SigTest1Sha384, &signature_bytes(5, 2));
        write_vector(dir, Vector::Grp01Member0SigTest1Sha512, &signature_bytes(5, 3));
        write_vector(dir, Vector::Grp01SigRl, &grp01::SIG_RL_5_ENTRY);
        write_vector(dir, Vector::GrpXPubKey, &grp_x.to_bytes());
        write_vector(dir, Vector::GrpXMember9CompressedPrivKey, &compressed_key(grp_x.gid).to_bytes());
        write_vector(dir, Vector::GrpXMember9PrivKey, &member9.to_bytes());
        write_vector(dir, Vector::GrpYPubKey, &grp_y.to_bytes());
        write_vector(dir, Vector::GrpYMember9CompressedPrivKey, &compressed_key(grp_y.gid).to_bytes());
    }

    #[test]
    fn loads_every_vector() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path());
        let store = VectorStore::load(dir.path()).unwrap();
        assert_eq!(store.dir(), dir.path());
        assert_eq!(store.grp_x_key().gid.0[15], 0x0a);
        assert_eq!(store.grp_y_key().gid.0[15], 0x0b);
        assert_eq!(store.grp_x_member9_priv_key().gid, store.grp_x_key().gid);
        assert_eq!(store.grp_x_member9_compressed_key().seed, FpElemStr([0x22; 32]));
        assert_eq!(store.grp_y_member9_compressed_key().gid, store.grp_y_key().gid);
        assert_eq!(store.bytes(Vector::IkgfGroupAPubKey).len(), 272);
        let rl = SigRl::decode(store.bytes(Vector::Grp01SigRl)).unwrap();
        assert_eq!(rl.n2(), 5);
    }

    #[test]
    fn golden_signature_per_hash() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path());
        let store = VectorStore::load(dir.path()).unwrap();
        let sha384 = store.golden_signature(HashAlg::Sha384).unwrap();
        assert_eq!(sha384.n2(), 5);
        assert_eq!(sha384.sigma0.c, FpElemStr([2; 32]));
        assert_ne!(
            store.golden_signature(HashAlg::Sha256).unwrap(),
            store.golden_signature(HashAlg::Sha512).unwrap()
        );
        assert!(matches!(
            store.golden_signature(HashAlg::Sha512_256),
            Err(FixtureError::UnknownFixture(_))
        ));
    }

    #[test]
    fn missing_file_fails_the_load() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path());
        std::fs::remove_file(dir.path().join(Vector::GrpYPubKey.relative_path())).unwrap();
        let err = VectorStore::load(dir.path()).unwrap_err();
        match err {
            FixtureError::IOError(msg) => assert!(msg.contains("grp_y/pubkey.bin")),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn wrong_size_key_fails_the_load() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path());
        write_vector(dir.path(), Vector::GrpXMember9PrivKey, &[0u8; 143]);
        let err = VectorStore::load(dir.path()).unwrap_err();
        assert!(matches!(err, FixtureError::Vector { .. }));
        assert!(err.to_string().contains("mprivkey.dat"));
    }

    #[test]
    fn paths_are_unique() {
        let mut paths: Vec<_> = Vector::ALL.iter().map(|v| v.relative_path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), Vector::ALL.len());
    }
}
