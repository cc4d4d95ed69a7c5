use rand::Rng;

/// Used in place of the company token when the company name has none.
const FALLBACK_COMPANY_TOKEN: &str = "work";

/// Profile attributes a password candidate is composed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordComponents<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub birth_year: i32,
    pub city: &'a str,
    pub company: &'a str,
}

impl<'a> PasswordComponents<'a> {
    fn pool(&self) -> [String; 5] {
        [
            self.first_name.to_string(),
            self.last_name.to_string(),
            self.birth_year.to_string(),
            self.city.to_string(),
            first_token(self.company)
                .unwrap_or(FALLBACK_COMPANY_TOKEN)
                .to_string(),
        ]
    }
}

/// First whitespace-delimited token of `value`.
pub(crate) fn first_token(value: &str) -> Option<&str> {
    value.split_whitespace().next()
}

/// Two components drawn with replacement, concatenated, followed by a
/// number in `10..=99`. Case is preserved.
pub fn derive_password<R: Rng + ?Sized>(
    components: &PasswordComponents<'_>,
    rng: &mut R,
) -> String {
    let pool = components.pool();
    let first = &pool[rng.gen_range(0..pool.len())];
    let second = &pool[rng.gen_range(0..pool.len())];
    let number: u8 = rng.gen_range(10..=99);

    format!("{}{}{}", first, second, number)
}
