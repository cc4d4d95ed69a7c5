use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::errors::{ForgeError, Result};
use crate::hash::HashType;

pub const MIN_PROFILES: usize = 1;
pub const MAX_PROFILES: usize = 1000;
pub const MIN_COMPANIES: usize = 1;
pub const MAX_COMPANIES: usize = 20;

/// Parameters of one generation request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub profile_count: usize,
    pub company_count: usize,
    pub hash_type: HashType,
    /// Seed for reproducible runs; entropy when absent
    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            profile_count: 20,
            company_count: 5,
            hash_type: HashType::Standard,
            seed: None,
        }
    }
}

impl GenerationConfig {
    pub fn new(profile_count: usize, company_count: usize, hash_type: HashType) -> Self {
        Self {
            profile_count,
            company_count,
            hash_type,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fails with [`ForgeError::Range`] when a count is out of bounds.
    pub fn validate(&self) -> Result<()> {
        check_range(
            "profile_count",
            self.profile_count,
            MIN_PROFILES,
            MAX_PROFILES,
        )?;
        check_range(
            "company_count",
            self.company_count,
            MIN_COMPANIES,
            MAX_COMPANIES,
        )
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GenerationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        log::debug!("Loading generation config from {}", path.as_ref().display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

fn check_range(field: &'static str, value: usize, min: usize, max: usize) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ForgeError::Range {
            field,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 1)]
    #[case(1000, 20)]
    #[case(20, 5)]
    fn counts_within_bounds(#[case] profiles: usize, #[case] companies: usize) {
        GenerationConfig::new(profiles, companies, HashType::Standard)
            .validate()
            .expect("counts are in range");
    }

    #[rstest]
    #[case(0, 5, "profile_count")]
    #[case(1001, 5, "profile_count")]
    #[case(5, 0, "company_count")]
    #[case(5, 21, "company_count")]
    fn counts_out_of_bounds(
        #[case] profiles: usize,
        #[case] companies: usize,
        #[case] expected_field: &str,
    ) {
        let err = GenerationConfig::new(profiles, companies, HashType::Salted)
            .validate()
            .unwrap_err();
        match err {
            ForgeError::Range { field, .. } => assert_eq!(field, expected_field),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn json_fills_in_defaults() {
        let config = GenerationConfig::from_json_str(r#"{"hash_type": "SALTED", "seed": 9}"#)
            .unwrap();
        assert_eq!(config.profile_count, 20);
        assert_eq!(config.company_count, 5);
        assert_eq!(config.hash_type, HashType::Salted);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn json_is_validated() {
        assert!(matches!(
            GenerationConfig::from_json_str(r#"{"profile_count": 5000}"#),
            Err(ForgeError::Range { .. })
        ));
        assert!(matches!(
            GenerationConfig::from_json_str(r#"{"hash_type": "MD5"}"#),
            Err(ForgeError::Parse)
        ));
    }
}
