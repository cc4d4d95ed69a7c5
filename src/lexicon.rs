//! Static reference tables every generator draws its attributes from.
//!
//! [`Lexicon::default`] returns a clone of the built-in tables. Custom
//! lexicons can be loaded from JSON with [`Lexicon::from_json_str`] or
//! [`Lexicon::load`]; both validate the result, so a lexicon that reaches a
//! generator never has an empty table or an empty entry, and every name in it
//! can form an email address and every company a website.

use std::{fs, path::Path};

use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

use crate::company::slugify;
use crate::errors::{ForgeError, Result};
use crate::profile::normalize;

/// Punctuation appended to base tokens by the wordlist expander.
pub const SPECIAL_CHARACTERS: [&str; 3] = ["!", "@", "#"];

/// Numeric suffixes appended to base tokens by the wordlist expander.
pub const NUMBER_SUFFIXES: [&str; 4] = ["1", "99", "123", "1234"];

const FIRST_NAMES: &[&str] = &[
    "James",
    "Mary",
    "John",
    "Patricia",
    "Robert",
    "Jennifer",
    "Michael",
    "Linda",
    "David",
    "Elizabeth",
    "William",
    "Barbara",
    "Richard",
    "Susan",
    "Joseph",
    "Jessica",
    "Thomas",
    "Sarah",
    "Christopher",
    "Karen",
    "Daniel",
    "Nancy",
    "Matthew",
    "Lisa",
    "Anthony",
    "Betty",
    "Mark",
    "Helen",
    "Donald",
    "Sandra",
    "Paul",
    "Donna",
    "Joshua",
    "Carol",
    "Kenneth",
    "Ruth",
    "Kevin",
    "Sharon",
    "Brian",
    "Michelle",
];

const LAST_NAMES: &[&str] = &[
    "Smith",
    "Johnson",
    "Williams",
    "Brown",
    "Jones",
    "Garcia",
    "Miller",
    "Davis",
    "Rodriguez",
    "Martinez",
    "Hernandez",
    "Lopez",
    "Gonzalez",
    "Wilson",
    "Anderson",
    "Thomas",
    "Taylor",
    "Moore",
    "Jackson",
    "Martin",
    "Lee",
    "Perez",
    "Thompson",
    "White",
    "Harris",
    "Sanchez",
    "Clark",
    "Ramirez",
    "Lewis",
    "Robinson",
];

const CITIES: &[&str] = &[
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Phoenix",
    "Philadelphia",
    "San Antonio",
    "San Diego",
    "Dallas",
    "San Jose",
    "Austin",
    "Jacksonville",
    "Fort Worth",
    "Columbus",
    "Charlotte",
    "Seattle",
    "Denver",
    "Boston",
];

const COMPANIES: &[&str] = &[
    "TechCorp Solutions",
    "Global Dynamics Inc",
    "InnovateNow LLC",
    "DataFlow Systems",
    "CloudFirst Technologies",
    "NextGen Industries",
    "ProActive Services",
    "SmartTech Innovations",
    "FutureWorks Ltd",
    "DigitalEdge Corp",
    "Synergy Partners",
    "Quantum Ventures",
    "Alpha Systems",
    "Beta Networks",
    "Gamma Industries",
    "Delta Solutions",
];

const JOB_TITLES: &[&str] = &[
    "Software Engineer",
    "Marketing Manager",
    "Sales Representative",
    "Project Manager",
    "Data Analyst",
    "HR Specialist",
    "Financial Advisor",
    "Operations Director",
    "Product Manager",
    "Business Analyst",
    "DevOps Engineer",
    "UX Designer",
    "Quality Assurance",
    "Account Executive",
    "Technical Writer",
    "System Administrator",
];

const UNIVERSITIES: &[&str] = &[
    "MIT",
    "Stanford University",
    "Harvard University",
    "UC Berkeley",
    "Carnegie Mellon",
    "University of Chicago",
    "Northwestern",
    "Yale University",
    "Princeton",
    "Columbia University",
    "Cornell University",
    "University of Pennsylvania",
    "Duke University",
    "Caltech",
    "Johns Hopkins",
    "University of Michigan",
    "Georgia Tech",
    "Rice University",
];

const EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "icloud.com",
    "protonmail.com",
    "aol.com",
    "live.com",
    "msn.com",
    "comcast.net",
];

const INDUSTRIES: &[&str] = &[
    "Technology",
    "Finance",
    "Healthcare",
    "Manufacturing",
    "Consulting",
    "Education",
    "Retail",
    "Media",
    "Transportation",
    "Energy",
];

const SIZE_RANGES: &[&str] = &["10-50", "51-200", "201-1000", "1000+"];

lazy_static! {
    static ref DEFAULT_LEXICON: Lexicon = Lexicon {
        first_names: owned(FIRST_NAMES),
        last_names: owned(LAST_NAMES),
        cities: owned(CITIES),
        companies: owned(COMPANIES),
        job_titles: owned(JOB_TITLES),
        universities: owned(UNIVERSITIES),
        email_domains: owned(EMAIL_DOMAINS),
        industries: owned(INDUSTRIES),
        size_ranges: owned(SIZE_RANGES),
    };
}

fn owned(table: &[&str]) -> Vec<String> {
    table.iter().map(|entry| entry.to_string()).collect()
}

/// Reference tables used as the entropy source of every generator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
    pub cities: Vec<String>,
    pub companies: Vec<String>,
    pub job_titles: Vec<String>,
    pub universities: Vec<String>,
    pub email_domains: Vec<String>,
    pub industries: Vec<String>,
    pub size_ranges: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        DEFAULT_LEXICON.clone()
    }
}

impl Lexicon {
    /// Parse and validate a lexicon from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let lexicon: Lexicon = serde_json::from_str(json)?;
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Read, parse and validate a lexicon stored as JSON at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        log::debug!("Loading lexicon from {}", path.as_ref().display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Fails with [`ForgeError::Configuration`] when a table is empty or
    /// holds a blank entry, when a company name has no ASCII letter or digit
    /// to build a domain from, or when a first or last name has no letter or
    /// digit to build an email address from.
    pub fn validate(&self) -> Result<()> {
        for (name, table) in self.tables() {
            if table.is_empty() {
                return Err(ForgeError::Configuration(format!(
                    "lexicon table `{}` is empty",
                    name
                )));
            }
            check_entries(name, table, "a blank entry", is_blank)?;
        }

        check_entries(
            "companies",
            &self.companies,
            "an entry without ASCII letters or digits",
            |entry| slugify(entry).is_empty(),
        )?;
        let names = [
            ("first_names", &self.first_names),
            ("last_names", &self.last_names),
        ];
        for (name, table) in names {
            check_entries(
                name,
                table,
                "an entry without letters or digits",
                |entry| normalize(entry).is_empty(),
            )?;
        }

        Ok(())
    }

    fn tables(&self) -> [(&'static str, &[String]); 9] {
        [
            ("first_names", self.first_names.as_slice()),
            ("last_names", self.last_names.as_slice()),
            ("cities", self.cities.as_slice()),
            ("companies", self.companies.as_slice()),
            ("job_titles", self.job_titles.as_slice()),
            ("universities", self.universities.as_slice()),
            ("email_domains", self.email_domains.as_slice()),
            ("industries", self.industries.as_slice()),
            ("size_ranges", self.size_ranges.as_slice()),
        ]
    }
}

fn is_blank(entry: &str) -> bool {
    entry.trim().is_empty()
}

fn check_entries<F>(name: &str, table: &[String], problem: &str, rejects: F) -> Result<()>
where
    F: Fn(&str) -> bool,
{
    match table.iter().position(|entry| rejects(entry.as_str())) {
        Some(position) => Err(ForgeError::Configuration(format!(
            "lexicon table `{}` has {} at index {}",
            name, problem, position
        ))),
        None => Ok(()),
    }
}

/// Uniform draw from one lexicon table.
pub(crate) fn choose<'a, R: Rng + ?Sized>(
    rng: &mut R,
    table: &'a [String],
    name: &str,
) -> Result<&'a str> {
    table
        .choose(rng)
        .map(String::as_str)
        .ok_or_else(|| ForgeError::Configuration(format!("lexicon table `{}` is empty", name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;

    #[test]
    fn default_lexicon_is_valid() {
        let lexicon = Lexicon::default();
        lexicon.validate().expect("built-in tables must validate");
        assert_eq!(lexicon.first_names.len(), FIRST_NAMES.len());
        assert_eq!(lexicon.size_ranges, vec!["10-50", "51-200", "201-1000", "1000+"]);
    }

    #[rstest]
    #[case("first_names")]
    #[case("cities")]
    #[case("size_ranges")]
    fn empty_table_is_a_configuration_error(#[case] table: &str) {
        let mut value = serde_json::to_value(Lexicon::default()).unwrap();
        value[table] = serde_json::json!([]);

        let err = Lexicon::from_json_str(&value.to_string()).unwrap_err();
        match err {
            ForgeError::Configuration(message) => {
                assert!(message.contains(table), "{}", message)
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn blank_entry_is_a_configuration_error() {
        let mut lexicon = Lexicon::default();
        lexicon.last_names.push("  ".to_string());

        assert!(matches!(lexicon.validate(), Err(ForgeError::Configuration(_))));
    }

    #[rstest]
    #[case("companies", "東京商事")]
    #[case("companies", "&!?")]
    #[case("first_names", "--")]
    #[case("last_names", "'")]
    fn entry_without_usable_characters_is_a_configuration_error(
        #[case] table: &str,
        #[case] entry: &str,
    ) {
        let mut value = serde_json::to_value(Lexicon::default()).unwrap();
        value[table] = serde_json::json!(["Alpha", entry]);

        let err = Lexicon::from_json_str(&value.to_string()).unwrap_err();
        match err {
            ForgeError::Configuration(message) => {
                assert!(message.contains(table), "{}", message);
                assert!(message.contains("index 1"), "{}", message);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn non_ascii_names_with_a_usable_part_are_accepted() {
        let mut lexicon = Lexicon::default();
        lexicon.first_names = vec!["José".to_string(), "Zoë".to_string()];
        lexicon.companies = vec!["東京商事 KK".to_string()];

        lexicon.validate().expect("every entry has a usable part");
        assert_eq!(slugify(&lexicon.companies[0]), "kk");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Lexicon::from_json_str("{\"first_names\": 3}"),
            Err(ForgeError::Parse)
        ));
    }

    #[test]
    fn choose_draws_from_the_table() {
        let mut rng = StdRng::seed_from_u64(7);
        let lexicon = Lexicon::default();
        for _ in 0..50 {
            let city = choose(&mut rng, &lexicon.cities, "cities").unwrap();
            assert!(CITIES.contains(&city));
        }
        assert!(choose(&mut rng, &[], "nothing").is_err());
    }
}
