use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::errors::{ForgeError, Result};

pub const ID_PREFIX: &str = "ID";

/// Hex chars taken from a random v4 UUID for the suffix.
const SUFFIX_LEN: usize = 8;

/// Redraws allowed before giving up on a fresh identifier.
const MAX_ATTEMPTS: usize = 16;

/// Issues `ID-<unix seconds>-<8 hex chars>` identifiers so that no identifier
/// is handed out twice by the same registry.
///
/// Only identifiers stamped with the current second are remembered: anything
/// issued in an earlier second carries a different timestamp and cannot
/// collide with a new one, so those entries are dropped once the clock moves
/// on. The registry therefore stays as small as one second's worth of ids.
#[derive(Clone, Debug, Default)]
pub struct IdRegistry {
    second: u64,
    issued: HashSet<String>,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> Result<String> {
        let timestamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        self.issue_at(timestamp)
    }

    fn issue_at(&mut self, timestamp: u64) -> Result<String> {
        self.advance_to(timestamp);

        for attempt in 0..MAX_ATTEMPTS {
            let id = compose(timestamp, &random_suffix());
            if self.issued.insert(id.clone()) {
                return Ok(id);
            }
            log::warn!("Identifier {} already issued (attempt {})", id, attempt + 1);
        }

        Err(ForgeError::Collision(format!(
            "no fresh identifier after {} attempts at {}",
            MAX_ATTEMPTS, timestamp
        )))
    }

    /// Forget identifiers of earlier seconds. A clock that steps back keeps
    /// the newer entries.
    fn advance_to(&mut self, timestamp: u64) {
        if timestamp > self.second {
            if !self.issued.is_empty() {
                log::trace!(
                    "Dropping {} identifiers of second {}",
                    self.issued.len(),
                    self.second
                );
            }
            self.issued.clear();
            self.second = timestamp;
        }
    }

    /// Whether `id` was issued during the second the registry tracks.
    pub fn contains(&self, id: &str) -> bool {
        self.issued.contains(id)
    }

    pub fn len(&self) -> usize {
        self.issued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }

    pub fn clear(&mut self) {
        self.issued.clear();
    }
}

fn random_suffix() -> String {
    let mut suffix = Uuid::new_v4().simple().to_string();
    suffix.truncate(SUFFIX_LEN);
    suffix
}

fn compose(timestamp: u64, suffix: &str) -> String {
    format!("{}-{}-{}", ID_PREFIX, timestamp, suffix)
}

/// Whether `id` has the `ID-<digits>-<8 lowercase hex>` shape.
pub fn is_well_formed(id: &str) -> bool {
    let mut parts = id.splitn(3, '-');
    let (Some(prefix), Some(timestamp), Some(suffix)) = (parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    prefix == ID_PREFIX
        && !timestamp.is_empty()
        && timestamp.bytes().all(|b| b.is_ascii_digit())
        && suffix.len() == SUFFIX_LEN
        && suffix
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}
