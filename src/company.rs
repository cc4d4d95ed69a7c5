use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::lexicon::{choose, Lexicon};

/// Top-level domain appended to every company slug.
pub const COMPANY_TLD: &str = "com";

/// A synthetic employer. Profiles refer to it by `name`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub industry: String,
    pub size_range: String,
    pub website: String,
    pub city: String,
}

impl Company {
    /// Domain used for employee email addresses, e.g. `alpha-systems.com`.
    pub fn domain(&self) -> String {
        domain_of(&self.name)
    }
}

/// Lowercase, hyphen-separated slug. Runs of anything that is not an ASCII
/// letter or digit collapse into a single hyphen.
pub fn slugify(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

pub(crate) fn domain_of(name: &str) -> String {
    format!("{}.{}", slugify(name), COMPANY_TLD)
}

/// Draw a company from the lexicon. `id` is supplied by the caller.
pub fn synthesize_company<R: Rng + ?Sized>(
    rng: &mut R,
    lexicon: &Lexicon,
    id: String,
) -> Result<Company> {
    let name = choose(rng, &lexicon.companies, "companies")?;
    let industry = choose(rng, &lexicon.industries, "industries")?;
    let size_range = choose(rng, &lexicon.size_ranges, "size_ranges")?;
    let city = choose(rng, &lexicon.cities, "cities")?;

    let company = Company {
        id,
        name: name.to_string(),
        industry: industry.to_string(),
        size_range: size_range.to_string(),
        website: format!("https://{}", domain_of(name)),
        city: city.to_string(),
    };
    log::trace!("Synthesized company {}", company.name);

    Ok(company)
}
