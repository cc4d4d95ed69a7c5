//! JSON export of generated profiles and companies.
//!
//! A corpus file has the shape
//! `{"metadata": {...}, "data": {"profiles": [...], "companies": [...]}}`.
//! Missing sections read as empty, so a file holding only `data.profiles` is
//! enough to rebuild a wordlist from a previous run.

use std::{fs, path::Path};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::company::Company;
use crate::errors::{ForgeError, Result};
use crate::profile::Profile;

/// Value of `metadata.format` in files written by this crate.
pub const CORPUS_FORMAT: &str = "persona-forge-export-v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusMetadata {
    pub exported_at: DateTime<Utc>,
    pub total_profiles: usize,
    pub total_companies: usize,
    pub format: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusData {
    #[serde(default)]
    pub profiles: Vec<Profile>,
    #[serde(default)]
    pub companies: Vec<Company>,
}

/// Profiles and companies of one export, as written to disk.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CorpusMetadata>,
    #[serde(default)]
    pub data: CorpusData,
}

impl Corpus {
    pub fn new(profiles: Vec<Profile>, companies: Vec<Company>) -> Self {
        let metadata = CorpusMetadata {
            exported_at: Utc::now(),
            total_profiles: profiles.len(),
            total_companies: companies.len(),
            format: CORPUS_FORMAT.to_string(),
        };
        Self {
            metadata: Some(metadata),
            data: CorpusData {
                profiles,
                companies,
            },
        }
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.data.profiles
    }

    pub fn companies(&self) -> &[Company] {
        &self.data.companies
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        log::debug!("Loading corpus from {}", path.as_ref().display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Write the corpus as pretty-printed JSON, replacing any file at `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        log::debug!(
            "Saved {} profiles and {} companies to {}",
            self.data.profiles.len(),
            self.data.companies.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Profiles stored in the corpus at `path`.
    ///
    /// Fails with [`ForgeError::EmptyInput`] when the file holds none.
    pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<Profile>> {
        let corpus = Self::load(&path)?;
        if corpus.data.profiles.is_empty() {
            return Err(ForgeError::EmptyInput(format!(
                "no profiles found in {}",
                path.as_ref().display()
            )));
        }
        Ok(corpus.data.profiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationConfig;
    use crate::generator::Generator;
    use crate::hash::HashType;

    #[test]
    fn missing_sections_read_as_empty() {
        for json in ["{}", r#"{"data": {}}"#, r#"{"data": {"profiles": []}}"#] {
            let corpus = Corpus::from_json_str(json).unwrap();
            assert_eq!(corpus, Corpus::default());
            assert!(corpus.profiles().is_empty());
        }
    }

    #[test]
    fn metadata_counts_the_export() {
        let config = GenerationConfig::new(7, 2, HashType::Salted);
        let (profiles, companies) = Generator::seeded(9).generate_batch(&config).unwrap();

        let corpus = Corpus::new(profiles, companies);
        let metadata = corpus.metadata.as_ref().unwrap();
        assert_eq!(metadata.total_profiles, 7);
        assert_eq!(metadata.total_companies, 2);
        assert_eq!(metadata.format, CORPUS_FORMAT);

        let json = serde_json::to_string(&corpus).unwrap();
        assert_eq!(Corpus::from_json_str(&json).unwrap(), corpus);
    }

    #[test]
    fn profiles_with_missing_fields_are_a_parse_error() {
        let json = r#"{"data": {"profiles": [{"first_name": "Mary"}]}}"#;
        assert!(matches!(Corpus::from_json_str(json), Err(ForgeError::Parse)));
    }
}
