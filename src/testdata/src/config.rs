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

use crate::error::FixtureError;
use log::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const TESTDATA_DIR_VAR: &str = "EPID_TESTDATA_DIR";
pub const RNG_SEED_VAR: &str = "EPID_RNG_SEED";
pub const LIFECYCLE_CYCLES_VAR: &str = "EPID_LIFECYCLE_CYCLES";

/// Settings shared by the harness tests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    // Directory holding the pre-generated vector files
    pub testdata_dir: PathBuf,
    // Seed of the deterministic random source
    pub rng_seed: u64,
    // Construct/destroy iterations for leak checks
    pub lifecycle_cycles: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            testdata_dir: PathBuf::from("testdata"),
            rng_seed: 1,
            lifecycle_cycles: 10_000,
        }
    }
}

impl HarnessConfig {
    pub fn from_json_file(path: &Path) -> Result<Self, FixtureError> {
        let bytes = std::fs::read(path)
            .map_err(|e| FixtureError::IOError(format!("{}: {}", path.display(), e)))?;
        let config = serde_json::from_slice(&bytes)
            .map_err(|e| FixtureError::Config(format!("{}: {}", path.display(), e)))?;
        info!("loaded harness config from {}", path.display());
        Ok(config)
    }

    /// Defaults overridden by `EPID_TESTDATA_DIR`, `EPID_RNG_SEED` and
    /// `EPID_LIFECYCLE_CYCLES`.
    pub fn from_env() -> Result<Self, FixtureError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, FixtureError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = HarnessConfig::default();
        if let Some(dir) = lookup(TESTDATA_DIR_VAR) {
            config.testdata_dir = PathBuf::from(dir);
        }
        if let Some(seed) = lookup(RNG_SEED_VAR) {
            config.rng_seed = parse_var(RNG_SEED_VAR, &seed)?;
        }
        if let Some(cycles) = lookup(LIFECYCLE_CYCLES_VAR) {
            config.lifecycle_cycles = parse_var(LIFECYCLE_CYCLES_VAR, &cycles)?;
        }
        debug!("harness config: {:?}", config);
        Ok(config)
    }
}

fn parse_var<T: FromStr>(name: &str, value: &str) -> Result<T, FixtureError> {
    value
        .trim()
        .parse()
        .map_err(|_| FixtureError::Config(format!("{}={:?} is not a number", name, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let config = HarnessConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, HarnessConfig::default());
        assert_eq!(config.lifecycle_cycles, 10_000);
    }

    #[test]
    fn variables_override_defaults() {
        let config = HarnessConfig::from_lookup(lookup_from(&[
            (TESTDATA_DIR_VAR, "/opt/epid/testdata"),
            (RNG_SEED_VAR, "42"),
            (LIFECYCLE_CYCLES_VAR, " 100 "),
        ]))
        .unwrap();
        assert_eq!(config.testdata_dir, PathBuf::from("/opt/epid/testdata"));
        assert_eq!(config.rng_seed, 42);
        assert_eq!(config.lifecycle_cycles, 100);
    }

    #[test]
    fn bad_number_is_a_config_error() {
        let err = HarnessConfig::from_lookup(lookup_from(&[(RNG_SEED_VAR, "seven")])).unwrap_err();
        assert!(matches!(err, FixtureError::Config(_)));
    }

    #[test]
    fn json_file_fills_missing_fields_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("harness.json");
        std::fs::write(&path, r#"{ "rng_seed": 9 }"#).unwrap();
        let config = HarnessConfig::from_json_file(&path).unwrap();
        assert_eq!(config.rng_seed, 9);
        assert_eq!(config.testdata_dir, PathBuf::from("testdata"));

        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            HarnessConfig::from_json_file(&path),
            Err(FixtureError::Config(_))
        ));
        assert!(matches!(
            HarnessConfig::from_json_file(&dir.path().join("missing.json")),
            Err(FixtureError::IOError(_))
        ));
    }
}
