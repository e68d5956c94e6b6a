//! Chirp domain operations: validation, profanity filtering, listing.

use std::sync::Arc;

use crate::domain::entities::chirp::{Chirp, SortOrder, MAX_BODY_CHARS};
use crate::errors::{DomainResult, ValidationError};
use crate::repositories::ChirpRepository;

/// Words masked out of chirp bodies before they are persisted.
const PROFANITY: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Replacement for a matched word, exactly four mask characters.
const MASK: &str = "****";

/// Domain operations over chirps.
pub struct ChirpService<C: ChirpRepository> {
    chirps: Arc<C>,
}

impl<C: ChirpRepository> ChirpService<C> {
    pub fn new(chirps: Arc<C>) -> Self {
        Self { chirps }
    }

    /// Validates and filters `body`, then persists a new chirp.
    ///
    /// Bodies over [`MAX_BODY_CHARS`] characters are rejected before any
    /// filtering; profanity is masked afterwards.
    pub async fn create(&self, author_id: u32, body: &str) -> DomainResult<Chirp> {
        let actual = body.chars().count();
        if actual > MAX_BODY_CHARS {
            return Err(ValidationError::TooLong {
                max: MAX_BODY_CHARS,
                actual,
            }
            .into());
        }
        let cleaned = clean_body(body);
        self.chirps.create_chirp(cleaned, author_id).await
    }

    /// Fetches one chirp by id.
    pub async fn get(&self, id: u32) -> DomainResult<Chirp> {
        self.chirps.find_chirp(id).await
    }

    /// Lists chirps, optionally filtered by author and sorted by id.
    ///
    /// Without a sort order the store's iteration order is returned, which
    /// callers must not rely on.
    pub async fn list(
        &self,
        author: Option<u32>,
        sort: Option<SortOrder>,
    ) -> DomainResult<Vec<Chirp>> {
        let mut chirps = self.chirps.list_chirps().await?;
        if let Some(author_id) = author {
            chirps.retain(|c| c.author_id == author_id);
        }
        match sort {
            Some(SortOrder::Ascending) => chirps.sort_unstable_by_key(|c| c.id),
            Some(SortOrder::Descending) => {
                chirps.sort_unstable_by_key(|c| std::cmp::Reverse(c.id))
            }
            None => {}
        }
        Ok(chirps)
    }

    /// Deletes a chirp the requester owns.
    pub async fn delete(&self, id: u32, requester_id: u32) -> DomainResult<()> {
        self.chirps.delete_chirp(id, requester_id).await
    }
}

/// Masks every whole-word profanity occurrence, case-insensitively.
///
/// Splitting is on single-space boundaries only. A word matches when its
/// lowercased form equals a listed word outright, or does so once trailing
/// non-alphanumeric characters are set aside; the trailing characters are
/// preserved. Partial-word matches are never replaced.
fn clean_body(body: &str) -> String {
    body.split(' ')
        .map(clean_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn clean_word(word: &str) -> String {
    let core_len = word
        .trim_end_matches(|c: char| !c.is_alphanumeric())
        .len();
    let (core, suffix) = word.split_at(core_len);
    if PROFANITY.contains(&core.to_lowercase().as_str()) {
        format!("{MASK}{suffix}")
    } else {
        word.to_string()
    }
}
