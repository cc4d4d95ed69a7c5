//! # persona-forge
//!
//! Synthetic personal and company profiles with password artifacts derived
//! from them, for password-security training and hash-cracking practice.
//!
//! The hashes produced here are crackable on purpose. Do not use this crate
//! to store real credentials.
//!
//! - [`Session`] accumulates generated profiles and companies.
//! - [`hash`] computes standard and salted SHA-512 digests.
//! - [`wordlist`] expands profiles into deduplicated password candidates.
//! - [`corpus`] saves profiles and companies to JSON and reads them back.

#[macro_use]
extern crate lazy_static;

pub mod errors;
pub use errors::{ForgeError, Result};

pub mod company;
pub mod config;
pub mod corpus;
pub mod generator;
pub mod hash;
pub mod id;
pub mod lexicon;
pub mod password;
pub mod profile;
pub mod session;
pub mod wordlist;

pub use company::{synthesize_company, Company};
pub use config::GenerationConfig;
pub use corpus::Corpus;
pub use generator::Generator;
pub use hash::{digest_sha512, hash_password, HashType, HashedPassword};
pub use lexicon::Lexicon;
pub use password::{derive_password, PasswordComponents};
pub use profile::{synthesize_profile, Profile};
pub use session::Session;
pub use wordlist::{expand_from_json, expand_wordlist, WordlistExpander};
