use core::fmt::Display;

use hex::encode;
use rand::{rngs::OsRng, CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};

/// Number of random bytes in a salt, hex encoded to twice as many chars.
pub const SALT_LEN: usize = 16;

/// Length of a hex-encoded SHA-512 digest.
pub const DIGEST_HEX_LEN: usize = 128;

/// How a password hash was composed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HashType {
    /// `sha512(password)`
    #[default]
    Standard,
    /// `sha512(password + salt)`, salt appended as its hex string
    Salted,
}

impl HashType {
    /// The hashcat mode cracking this kind of hash.
    pub fn hashcat_mode(&self) -> u32 {
        match self {
            HashType::Standard => 1700,
            HashType::Salted => 1710,
        }
    }
}

impl Display for HashType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashType::Standard => write!(f, "STANDARD"),
            HashType::Salted => write!(f, "SALTED"),
        }
    }
}

/// Output of the hash engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashedPassword {
    pub hash: String,
    pub salt: Option<String>,
    pub hash_type: HashType,
}

impl HashedPassword {
    /// Check whether `plaintext` reproduces this hash.
    pub fn verify(&self, plaintext: &str) -> bool {
        let expected = match &self.salt {
            Some(salt) => hash_with_salt(plaintext, salt),
            None => digest_sha512(plaintext),
        };
        expected == self.hash
    }
}

/// Hex-encoded SHA-512 of the UTF-8 bytes of `input`.
pub fn digest_sha512(input: &str) -> String {
    let mut hasher = Sha512::new();
    hasher.update(input.as_bytes());
    encode(hasher.finalize())
}

/// Salted digest: the hex salt is appended to the plaintext as text.
pub fn hash_with_salt(plaintext: &str, salt: &str) -> String {
    let mut salted = String::with_capacity(plaintext.len() + salt.len());
    salted.push_str(plaintext);
    salted.push_str(salt);
    digest_sha512(&salted)
}

/// Draw [`SALT_LEN`] random bytes and hex encode them.
pub fn generate_salt<R: RngCore + CryptoRng>(rng: &mut R) -> String {
    let mut bytes = [0u8; SALT_LEN];
    rng.fill_bytes(&mut bytes);
    encode(bytes)
}

/// Hash `plaintext` in the given mode. Salts come from the OS generator.
pub fn hash_password(plaintext: &str, hash_type: HashType) -> HashedPassword {
    match hash_type {
        HashType::Standard => HashedPassword {
            hash: digest_sha512(plaintext),
            salt: None,
            hash_type,
        },
        HashType::Salted => {
            let salt = generate_salt(&mut OsRng);
            log::trace!("Generated salt {}", salt);
            HashedPassword {
                hash: hash_with_salt(plaintext, &salt),
                salt: Some(salt),
                hash_type,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn sanity_check() {
        assert_eq!(
            digest_sha512("abc"),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[test]
    fn standard_hash_is_deterministic() {
        let first = hash_password("Mary1987Boston42", HashType::Standard);
        let second = hash_password("Mary1987Boston42", HashType::Standard);

        assert_eq!(first, second);
        assert_eq!(first.hash.len(), DIGEST_HEX_LEN);
        assert_eq!(first.salt, None);
        assert_eq!(first.hash_type, HashType::Standard);
    }

    #[test]
    fn salted_hashes_differ_but_both_validate() {
        let plaintext = "SmithSmith77";
        let first = hash_password(plaintext, HashType::Salted);
        let second = hash_password(plaintext, HashType::Salted);

        assert_ne!(first.salt, second.salt);
        assert_ne!(first.hash, second.hash);
        for hashed in [&first, &second] {
            let salt = hashed.salt.as_deref().unwrap();
            assert_eq!(salt.len(), SALT_LEN * 2);
            assert_eq!(hashed.hash, digest_sha512(&format!("{plaintext}{salt}")));
            assert!(hashed.verify(plaintext));
            assert!(!hashed.verify("SmithSmith78"));
        }
    }

    #[test]
    fn salt_is_appended_as_text() {
        let salt = "00112233445566778899aabbccddeeff";
        assert_eq!(
            hash_with_salt("pw", salt),
            digest_sha512("pw00112233445566778899aabbccddeeff")
        );
    }

    #[test]
    fn seeded_salts_are_reproducible() {
        let mut a = StdRng::seed_from_u64(3);
        let mut b = StdRng::seed_from_u64(3);
        assert_eq!(generate_salt(&mut a), generate_salt(&mut b));
    }

    #[test]
    fn hash_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&HashType::Salted).unwrap(),
            "\"SALTED\""
        );
        assert_eq!(HashType::Standard.to_string(), "STANDARD");
        assert_eq!(HashType::Standard.hashcat_mode(), 1700);
        assert_eq!(HashType::Salted.hashcat_mode(), 1710);
    }
}
