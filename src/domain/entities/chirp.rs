//! Chirp entity: a single post in the system.

use serde::{Deserialize, Serialize};

/// Maximum chirp body length, in characters, after profanity filtering.
pub const MAX_BODY_CHARS: usize = 140;

/// A posted chirp. Identity is the `id`; ids are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chirp {
    /// Store-assigned identifier, starting at 1
    pub id: u32,

    /// Post body, already filtered
    pub body: String,

    /// Id of the user who created the chirp
    pub author_id: u32,
}

impl Chirp {
    pub fn new(id: u32, body: String, author_id: u32) -> Self {
        Self { id, body, author_id }
    }
}

/// Id ordering for chirp listings. When no order is requested the store's
/// iteration order is returned, which callers must treat as unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}
