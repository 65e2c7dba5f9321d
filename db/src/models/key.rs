//! Store-assigned document identifiers.
//!
//! Every document gets a random UUID v4 on insert. Lookups with a string
//! that is not a UUID fail with a `DbErr` instead of returning "not found",
//! the same way a document store rejects an uncastable id.

use sea_orm::DbErr;
use uuid::Uuid;

pub fn new_key() -> String {
    Uuid::new_v4().to_string()
}

/// Canonical (lowercase, hyphenated) form of `raw`, or an error if it is not a valid id.
pub fn parse_key(raw: &str) -> Result<String, DbErr> {
    Uuid::parse_str(raw.trim())
        .map(|id| id.to_string())
        .map_err(|e| DbErr::Custom(format!("invalid id `{raw}`: {e}")))
}
