use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::types::{Sighting, SightingId, SightingInfo, SightingUpdateInfo};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("sighting with UUID {0} not found")]
    NotFound(SightingId),
    #[error("sighting with UUID {0} is deleted")]
    AlreadyDeleted(SightingId),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// What `delete` does with a record that already carries `deleted_at`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RedeletePolicy {
    /// Succeed and overwrite `deleted_at` with a newer stamp.
    #[default]
    Restamp,
    /// Succeed and keep the first stamp.
    Keep,
    /// Fail with [`StoreError::AlreadyDeleted`].
    Reject,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown redelete policy: {0} (expected restamp, keep or reject)")]
pub struct ParsePolicyError(String);

impl FromStr for RedeletePolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "restamp" => Ok(Self::Restamp),
            "keep" => Ok(Self::Keep),
            "reject" => Ok(Self::Reject),
            other => Err(ParsePolicyError(other.to_string())),
        }
    }
}

impl fmt::Display for RedeletePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Restamp => "restamp",
            Self::Keep => "keep",
            Self::Reject => "reject",
        };
        f.write_str(name)
    }
}

/// Mutation rules for soft-deleted records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StorePolicy {
    /// Allow `update` on a record whose `deleted_at` is set.
    pub update_deleted: bool,
    pub redelete: RedeletePolicy,
}

pub trait SightingStore {
    /// Inserts a new sighting and returns its freshly generated id.
    fn create(&self, info: SightingInfo) -> SightingId;

    /// Soft-deleted records are returned too; callers inspect `deleted_at`.
    fn get(&self, id: &str) -> StoreResult<Sighting>;

    fn update(&self, id: &str, patch: SightingUpdateInfo) -> StoreResult<()>;

    fn delete(&self, id: &str) -> StoreResult<()>;

    /// Number of retained records, soft-deleted ones included.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
