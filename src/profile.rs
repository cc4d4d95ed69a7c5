use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

use crate::company::Company;
use crate::errors::{ForgeError, Result};
use crate::hash::{hash_password, HashType, HashedPassword};
use crate::lexicon::{choose, Lexicon};
use crate::password::{derive_password, PasswordComponents};

pub const MIN_AGE: i32 = 22;
pub const MAX_AGE: i32 = 65;

/// Years between birth and graduation.
pub const GRADUATION_AGE: i32 = 22;

/// Probability that a profile carries a GitHub account.
const GITHUB_PRESENCE: f64 = 0.6;

/// One synthetic identity. Fields are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,

    pub age: i32,
    pub birth_year: i32,
    pub birthdate: NaiveDate,

    /// `first.last@<company domain>`
    pub email: String,
    pub personal_email: String,
    pub phone: String,
    pub city: String,

    pub job_title: String,
    /// Name of the employing [`Company`]
    pub company: String,
    pub university: String,
    pub graduation_year: i32,

    pub linkedin_connections: u32,
    pub twitter_handle: String,
    pub github_username: Option<String>,
    pub posts: u32,
    pub followers: u32,
    pub following: u32,
    pub last_active: DateTime<Utc>,

    pub generated_at: DateTime<Utc>,

    /// Plaintext candidate the hash was computed from
    pub password_hint: String,
    pub password_hash: String,
    pub salt: Option<String>,
    pub hash_type: HashType,
}

impl Profile {
    /// Local part of the work email.
    pub fn username(&self) -> &str {
        self.email.split('@').next().unwrap_or(&self.email)
    }

    /// `hash` for standard profiles, `hash:salt` for salted ones.
    pub fn hashcat_line(&self) -> String {
        match &self.salt {
            Some(salt) => format!("{}:{}", self.password_hash, salt),
            None => self.password_hash.clone(),
        }
    }

    /// Recompute the digest of `password_hint` and compare it with
    /// `password_hash`.
    pub fn verify_password_hash(&self) -> bool {
        HashedPassword {
            hash: self.password_hash.clone(),
            salt: self.salt.clone(),
            hash_type: self.hash_type,
        }
        .verify(&self.password_hint)
    }

    pub fn password_components(&self) -> PasswordComponents<'_> {
        PasswordComponents {
            first_name: &self.first_name,
            last_name: &self.last_name,
            birth_year: self.birth_year,
            city: &self.city,
            company: &self.company,
        }
    }

    pub fn linkedin_url(&self) -> String {
        format!(
            "https://linkedin.com/in/{}-{}",
            normalize(&self.first_name),
            normalize(&self.last_name)
        )
    }

    pub fn twitter_url(&self) -> String {
        format!(
            "https://twitter.com/{}",
            self.twitter_handle.trim_start_matches('@')
        )
    }

    pub fn github_url(&self) -> Option<String> {
        self.github_username
            .as_ref()
            .map(|username| format!("https://github.com/{}", username))
    }
}

/// Lowercase and drop every character that is not alphanumeric.
pub(crate) fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// `first.last@domain`, with both name parts normalized. Pure.
pub fn derive_email(first_name: &str, last_name: &str, domain: &str) -> String {
    format!(
        "{}.{}@{}",
        normalize(first_name),
        normalize(last_name),
        domain.to_lowercase()
    )
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

fn random_birthdate<R: Rng + ?Sized>(rng: &mut R, year: i32) -> Result<NaiveDate> {
    let month = rng.gen_range(1..=12);
    let day = rng.gen_range(1..=days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        ForgeError::Other(anyhow::anyhow!("invalid birthdate {}-{}-{}", year, month, day))
    })
}

fn random_phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "+1-{}-{}-{}",
        rng.gen_range(200..=999),
        rng.gen_range(200..=999),
        rng.gen_range(1000..=9999)
    )
}

/// Synthesize one profile employed by a company drawn from `companies`.
///
/// Fails with [`ForgeError::Configuration`] when `companies` is empty.
pub fn synthesize_profile<R: Rng + ?Sized>(
    rng: &mut R,
    lexicon: &Lexicon,
    companies: &[Company],
    hash_type: HashType,
    id: String,
) -> Result<Profile> {
    let company = companies.choose(rng).ok_or_else(|| {
        ForgeError::Configuration(
            "no companies available, generate at least one company first"
                .to_string(),
        )
    })?;

    let first_name = choose(rng, &lexicon.first_names, "first_names")?;
    let last_name = choose(rng, &lexicon.last_names, "last_names")?;
    let city = choose(rng, &lexicon.cities, "cities")?;
    let job_title = choose(rng, &lexicon.job_titles, "job_titles")?;
    let university = choose(rng, &lexicon.universities, "universities")?;
    let personal_domain = choose(rng, &lexicon.email_domains, "email_domains")?;

    let now = Utc::now();
    let age = rng.gen_range(MIN_AGE..=MAX_AGE);
    let birth_year = now.year() - age;
    let birthdate = random_birthdate(rng, birth_year)?;

    let handle = format!("{}{}", normalize(first_name), normalize(last_name));
    let github_username = rng.gen_bool(GITHUB_PRESENCE).then(|| handle.clone());

    let components = PasswordComponents {
        first_name,
        last_name,
        birth_year,
        city,
        company: &company.name,
    };
    let password_hint = derive_password(&components, rng);
    let hashed = hash_password(&password_hint, hash_type);

    let profile = Profile {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        full_name: format!("{} {}", first_name, last_name),
        age,
        birth_year,
        birthdate,
        email: derive_email(first_name, last_name, &company.domain()),
        personal_email: derive_email(first_name, last_name, personal_domain),
        phone: random_phone(rng),
        city: city.to_string(),
        job_title: job_title.to_string(),
        company: company.name.clone(),
        university: university.to_string(),
        graduation_year: birth_year + GRADUATION_AGE,
        linkedin_connections: rng.gen_range(50..=500),
        twitter_handle: format!("@{}", handle),
        github_username,
        posts: rng.gen_range(10..=100),
        followers: rng.gen_range(50..=1000),
        following: rng.gen_range(30..=500),
        last_active: now - Duration::days(rng.gen_range(1..=30)),
        generated_at: now,
        password_hint,
        password_hash: hashed.hash,
        salt: hashed.salt,
        hash_type: hashed.hash_type,
    };
    log::trace!("Synthesized profile {} ({})", profile.id, profile.full_name);

    Ok(profile)
}
