//! Expansion of a profile corpus into password-cracking candidates.
//!
//! Every profile contributes a bounded set of variants built from its first
//! name, city and company, so the wordlist grows linearly with the number of
//! profiles. Variants shared by several profiles are stored once.
//!
//! The corpus can be the profiles of a live session or those saved to a JSON
//! file by an earlier run, see [`expand_from_json`].

use std::collections::HashSet;
use std::path::Path;

use itertools::Itertools;

use crate::corpus::Corpus;
use crate::errors::{ForgeError, Result};
use crate::lexicon::{NUMBER_SUFFIXES, SPECIAL_CHARACTERS};
use crate::password::first_token;
use crate::profile::Profile;

/// Base tokens taken from each profile.
const BASE_TOKENS: usize = 3;

/// Variants derived from one base token: lowercase, capitalized, two year
/// suffixes, numeric suffixes and special characters.
const VARIANTS_PER_TOKEN: usize = 2 + 2 + NUMBER_SUFFIXES.len() + SPECIAL_CHARACTERS.len();

/// Upper bound on the number of entries a single profile contributes.
pub const MAX_VARIANTS_PER_PROFILE: usize = BASE_TOKENS * VARIANTS_PER_TOKEN + 3 + 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordlistExpander {
    include_hints: bool,
}

impl Default for WordlistExpander {
    fn default() -> Self {
        Self {
            include_hints: true,
        }
    }
}

impl WordlistExpander {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether each profile's own `password_hint` joins the wordlist.
    pub fn with_password_hints(mut self, include: bool) -> Self {
        self.include_hints = include;
        self
    }

    /// Expand and deduplicate. Fails with [`ForgeError::EmptyInput`] when
    /// `profiles` is empty.
    pub fn expand(&self, profiles: &[Profile]) -> Result<HashSet<String>> {
        if profiles.is_empty() {
            return Err(ForgeError::EmptyInput(
                "no profiles to build a wordlist from, generate profiles first"
                    .to_string(),
            ));
        }

        let mut wordlist = HashSet::new();
        for profile in profiles {
            wordlist.extend(self.variants(profile));
        }
        log::debug!(
            "Expanded {} profiles into {} wordlist entries",
            profiles.len(),
            wordlist.len()
        );

        Ok(wordlist)
    }

    /// Variants contributed by one profile, possibly with repeats.
    pub fn variants(&self, profile: &Profile) -> Vec<String> {
        let year = profile.birth_year.to_string();
        let short_year = short_year(profile.birth_year);

        let bases: Vec<String> = [
            Some(profile.first_name.as_str()),
            Some(profile.city.as_str()),
            first_token(&profile.company),
        ]
        .into_iter()
        .flatten()
        .map(base_token)
        .filter(|token| !token.is_empty())
        .collect();

        let suffixes: Vec<&str> = [year.as_str(), short_year.as_str()]
            .into_iter()
            .chain(NUMBER_SUFFIXES)
            .chain(SPECIAL_CHARACTERS)
            .collect();

        let mut variants = Vec::with_capacity(MAX_VARIANTS_PER_PROFILE);
        for base in &bases {
            variants.push(base.clone());
            variants.push(capitalize(base));
        }
        variants.extend(
            bases
                .iter()
                .cartesian_product(suffixes.iter())
                .map(|(base, suffix)| format!("{}{}", base, suffix)),
        );

        let first = base_token(&profile.first_name);
        let last = base_token(&profile.last_name);
        if !first.is_empty() && !last.is_empty() {
            variants.push(format!("{}{}", first, last));
            variants.push(format!("{}{}", last, first));
            variants.push(format!(
                "{}{}{}",
                capitalize(&first),
                capitalize(&last),
                short_year
            ));
        }

        if self.include_hints && !profile.password_hint.is_empty() {
            variants.push(profile.password_hint.clone());
        }

        variants
    }
}

/// [`WordlistExpander::expand`] with default settings.
pub fn expand_wordlist(profiles: &[Profile]) -> Result<HashSet<String>> {
    WordlistExpander::default().expand(profiles)
}

/// [`expand_wordlist`] over the profiles of a corpus file written by
/// [`Corpus::save`].
///
/// Fails with [`ForgeError::EmptyInput`] when the file holds no profiles.
pub fn expand_from_json<P: AsRef<Path>>(path: P) -> Result<HashSet<String>> {
    let profiles = Corpus::load_profiles(path)?;
    expand_wordlist(&profiles)
}

/// Entries ordered by length, then case-insensitively, then exactly.
pub fn sorted(wordlist: &HashSet<String>) -> Vec<String> {
    wordlist
        .iter()
        .cloned()
        .sorted_by(|a, b| {
            a.len()
                .cmp(&b.len())
                .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
                .then_with(|| a.cmp(b))
        })
        .collect()
}

fn base_token(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn short_year(year: i32) -> String {
    format!("{:02}", year.rem_euclid(100))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("mary", "Mary")]
    #[case("newyork", "Newyork")]
    #[case("", "")]
    fn capitalization(#[case] token: &str, #[case] expected: &str) {
        assert_eq!(capitalize(token), expected);
    }

    #[rstest]
    #[case(1987, "87")]
    #[case(2003, "03")]
    #[case(2000, "00")]
    fn two_digit_years(#[case] year: i32, #[case] expected: &str) {
        assert_eq!(short_year(year), expected);
    }

    #[test]
    fn bound_accounts_for_every_pattern() {
        assert_eq!(VARIANTS_PER_TOKEN, 11);
        assert_eq!(MAX_VARIANTS_PER_PROFILE, 37);
    }

    #[test]
    fn sorting_is_by_length_then_alphabetical() {
        let wordlist: HashSet<String> = ["mary99", "Mary", "mary", "boston!", "ab"]
            .into_iter()
            .map(String::from)
            .collect();

        assert_eq!(
            sorted(&wordlist),
            vec!["ab", "Mary", "mary", "mary99", "boston!"]
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(expand_wordlist(&[]), Err(ForgeError::EmptyInput(_))));
    }
}
