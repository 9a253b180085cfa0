use chrono::{DateTime, Utc};

pub type SightingId = String;

/// Descriptive payload of a sighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SightingInfo {
    pub observed_at: Option<DateTime<Utc>>,
    pub location: String,
    pub description: String,
    pub color: Option<String>,
    pub sound: Option<bool>,
    pub duration_seconds: Option<i32>,
}

impl SightingInfo {
    pub fn new(location: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            observed_at: None,
            location: location.into(),
            description: description.into(),
            color: None,
            sound: None,
            duration_seconds: None,
        }
    }

    /// Overwrites every field that is present in `patch` and leaves the rest untouched.
    pub fn apply(&mut self, patch: SightingUpdateInfo) {
        if let Some(observed_at) = patch.observed_at {
            self.observed_at = Some(observed_at);
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(color) = patch.color {
            self.color = Some(color);
        }
        if let Some(sound) = patch.sound {
            self.sound = Some(sound);
        }
        if let Some(duration_seconds) = patch.duration_seconds {
            self.duration_seconds = Some(duration_seconds);
        }
    }
}

/// Partial patch for [`SightingInfo`]. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SightingUpdateInfo {
    pub observed_at: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub sound: Option<bool>,
    pub duration_seconds: Option<i32>,
}

impl SightingUpdateInfo {
    pub fn is_empty(&self) -> bool {
        self.observed_at.is_none()
            && self.location.is_none()
            && self.description.is_none()
            && self.color.is_none()
            && self.sound.is_none()
            && self.duration_seconds.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sighting {
    pub id: SightingId,
    pub info: SightingInfo,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Sighting {
    pub fn new(id: SightingId, info: SightingInfo, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            info,
            created_at,
            updated_at: None,
            deleted_at: None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
