use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::company::{synthesize_company, Company};
use crate::config::GenerationConfig;
use crate::errors::Result;
use crate::hash::HashType;
use crate::id::IdRegistry;
use crate::lexicon::Lexicon;
use crate::profile::{synthesize_profile, Profile};

/// Runs the synthesizers against an injected random source.
///
/// Identifiers are unique across everything one generator has produced.
#[derive(Clone, Debug)]
pub struct Generator<R = StdRng> {
    rng: R,
    lexicon: Lexicon,
    ids: IdRegistry,
}

impl Generator<StdRng> {
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Generator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            lexicon: Lexicon::default(),
            ids: IdRegistry::new(),
        }
    }

    /// Replace the lexicon after validating it.
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Result<Self> {
        lexicon.validate()?;
        self.lexicon = lexicon;
        Ok(self)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn synthesize_company(&mut self) -> Result<Company> {
        let id = self.ids.issue()?;
        synthesize_company(&mut self.rng, &self.lexicon, id)
    }

    pub fn synthesize_profile(
        &mut self,
        companies: &[Company],
        hash_type: HashType,
    ) -> Result<Profile> {
        let id = self.ids.issue()?;
        synthesize_profile(&mut self.rng, &self.lexicon, companies, hash_type, id)
    }

    /// Companies first, then profiles employed by them.
    pub fn generate_batch(
        &mut self,
        config: &GenerationConfig,
    ) -> Result<(Vec<Profile>, Vec<Company>)> {
        config.validate()?;
        log::debug!(
            "Generating {} companies and {} {} profiles",
            config.company_count,
            config.profile_count,
            config.hash_type
        );

        let companies = (0..config.company_count)
            .map(|_| self.synthesize_company())
            .collect::<Result<Vec<_>>>()?;

        let profiles = (0..config.profile_count)
            .map(|_| self.synthesize_profile(&companies, config.hash_type))
            .collect::<Result<Vec<_>>>()?;

        Ok((profiles, companies))
    }
}
