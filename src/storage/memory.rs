use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::traits::{RedeletePolicy, SightingStore, StoreError, StorePolicy, StoreResult};
use crate::types::{Sighting, SightingId, SightingInfo, SightingUpdateInfo};

/// In-memory sighting store guarded by a single reader/writer lock.
///
/// Cloning is cheap and every clone shares the same map.
#[derive(Clone, Default)]
pub struct MemoryStore {
    data: Arc<RwLock<HashMap<SightingId, Sighting>>>,
    policy: StorePolicy,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: StorePolicy) -> Self {
        Self {
            data: Arc::default(),
            policy,
        }
    }

    // Every critical section leaves the map consistent, so a poisoned lock is safe to reuse.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<SightingId, Sighting>> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<SightingId, Sighting>> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SightingStore for MemoryStore {
    fn create(&self, info: SightingInfo) -> SightingId {
        let id = Uuid::new_v4().to_string();
        let sighting = Sighting::new(id.clone(), info, Utc::now());

        self.write().insert(id.clone(), sighting);
        id
    }

    fn get(&self, id: &str) -> StoreResult<Sighting> {
        self.read()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn update(&self, id: &str, patch: SightingUpdateInfo) -> StoreResult<()> {
        let mut data = self.write();
        let sighting = data
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if sighting.is_deleted() && !self.policy.update_deleted {
            return Err(StoreError::AlreadyDeleted(id.to_string()));
        }

        sighting.info.apply(patch);
        let floor = sighting.updated_at.unwrap_or(sighting.created_at);
        sighting.updated_at = Some(stamp_not_before(floor));
        Ok(())
    }

    fn delete(&self, id: &str) -> StoreResult<()> {
        let mut data = self.write();
        let sighting = data
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        match (sighting.deleted_at, self.policy.redelete) {
            (Some(_), RedeletePolicy::Reject) => Err(StoreError::AlreadyDeleted(id.to_string())),
            (Some(_), RedeletePolicy::Keep) => Ok(()),
            (previous, _) => {
                let floor = previous.unwrap_or(sighting.created_at);
                sighting.deleted_at = Some(stamp_not_before(floor));
                Ok(())
            }
        }
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}

/// Current time, clamped so stamps never precede `floor` if the wall clock steps back.
fn stamp_not_before(floor: DateTime<Utc>) -> DateTime<Utc> {
    Utc::now().max(floor)
}
