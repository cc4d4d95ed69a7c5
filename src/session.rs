use std::collections::HashSet;

use rand::{rngs::StdRng, Rng};

use crate::company::Company;
use crate::config::GenerationConfig;
use crate::corpus::Corpus;
use crate::errors::Result;
use crate::generator::Generator;
use crate::hash::HashType;
use crate::lexicon::Lexicon;
use crate::profile::Profile;
use crate::wordlist::WordlistExpander;

/// Profiles and companies accumulated across generation requests.
///
/// ## Examples
/// ```
/// use persona_forge::{HashType, Session};
///
/// let mut session = Session::with_seed(42);
/// let (profiles, companies) = session
///     .generate(10, 2, HashType::Salted)
///     .expect("counts are within bounds");
/// assert_eq!(profiles.len(), 10);
/// assert_eq!(companies.len(), 2);
///
/// let wordlist = session.expand_wordlist().expect("profiles exist");
/// assert!(!wordlist.is_empty());
///
/// session.clear_session();
/// assert!(session.profiles().is_empty());
/// ```
#[derive(Debug)]
pub struct Session<R = StdRng> {
    generator: Generator<R>,
    expander: WordlistExpander,
    profiles: Vec<Profile>,
    companies: Vec<Company>,
}

impl Session<StdRng> {
    pub fn new() -> Self {
        Self::with_generator(Generator::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_generator(Generator::seeded(seed))
    }

    /// Seeded from `config.seed` when present.
    pub fn from_config(config: &GenerationConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }
}

impl Default for Session<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(rng: R) -> Self {
        Self::with_generator(Generator::with_rng(rng))
    }

    pub fn with_generator(generator: Generator<R>) -> Self {
        Self {
            generator,
            expander: WordlistExpander::default(),
            profiles: Vec::new(),
            companies: Vec::new(),
        }
    }

    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Result<Self> {
        self.generator = self.generator.with_lexicon(lexicon)?;
        Ok(self)
    }

    pub fn with_expander(mut self, expander: WordlistExpander) -> Self {
        self.expander = expander;
        self
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    /// Generate a batch and append it to the session.
    ///
    /// Fails with [`crate::ForgeError::Range`] unless `profile_count` is in
    /// `1..=1000` and `company_count` in `1..=20`. On error the session is
    /// left as it was.
    pub fn generate(
        &mut self,
        profile_count: usize,
        company_count: usize,
        hash_type: HashType,
    ) -> Result<(&[Profile], &[Company])> {
        let config = GenerationConfig::new(profile_count, company_count, hash_type);
        self.generate_with(&config)
    }

    /// [`Session::generate`] driven by a config value. `config.seed` is
    /// ignored here; it only matters to [`Session::from_config`].
    pub fn generate_with(&mut self, config: &GenerationConfig) -> Result<(&[Profile], &[Company])> {
        let (profiles, companies) = self.generator.generate_batch(config)?;

        let profiles_start = self.profiles.len();
        let companies_start = self.companies.len();
        self.profiles.extend(profiles);
        self.companies.extend(companies);
        log::debug!(
            "Session now holds {} profiles and {} companies",
            self.profiles.len(),
            self.companies.len()
        );

        Ok((
            &self.profiles[profiles_start..],
            &self.companies[companies_start..],
        ))
    }

    /// Wordlist over every profile in the session.
    ///
    /// Fails with [`crate::ForgeError::EmptyInput`] when no profiles have
    /// been generated.
    pub fn expand_wordlist(&self) -> Result<HashSet<String>> {
        self.expander.expand(&self.profiles)
    }

    /// Profiles whose `company` names the given company.
    pub fn employees_of(&self, company_name: &str) -> Vec<&Profile> {
        self.profiles
            .iter()
            .filter(|profile| profile.company == company_name)
            .collect()
    }

    /// Snapshot of the session for [`Corpus::save`].
    pub fn corpus(&self) -> Corpus {
        Corpus::new(self.profiles.clone(), self.companies.clone())
    }

    /// Drop all accumulated profiles and companies.
    pub fn clear_session(&mut self) {
        log::debug!(
            "Clearing {} profiles and {} companies",
            self.profiles.len(),
            self.companies.len()
        );
        self.profiles.clear();
        self.companies.clear();
    }
}
