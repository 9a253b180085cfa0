use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Sighting, SightingInfo, SightingUpdateInfo};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_secs: u64,
    pub sightings: usize,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SightingInfoBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SightingUpdateBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SightingBody {
    pub uuid: String,
    pub info: SightingInfoBody,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateRequest {
    #[serde(default)]
    pub info: Option<SightingInfoBody>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateResponse {
    pub uuid: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct GetResponse {
    pub sighting: SightingBody,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UpdateRequest {
    #[serde(default)]
    pub update_info: Option<SightingUpdateBody>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct EmptyResponse {}

impl From<SightingInfoBody> for SightingInfo {
    fn from(body: SightingInfoBody) -> Self {
        SightingInfo {
            observed_at: body.observed_at,
            location: body.location,
            description: body.description,
            color: body.color,
            sound: body.sound,
            duration_seconds: body.duration_seconds,
        }
    }
}

impl From<SightingInfo> for SightingInfoBody {
    fn from(info: SightingInfo) -> Self {
        SightingInfoBody {
            observed_at: info.observed_at,
            location: info.location,
            description: info.description,
            color: info.color,
            sound: info.sound,
            duration_seconds: info.duration_seconds,
        }
    }
}

impl From<SightingUpdateBody> for SightingUpdateInfo {
    fn from(body: SightingUpdateBody) -> Self {
        SightingUpdateInfo {
            observed_at: body.observed_at,
            location: body.location,
            description: body.description,
            color: body.color,
            sound: body.sound,
            duration_seconds: body.duration_seconds,
        }
    }
}

impl From<Sighting> for SightingBody {
    fn from(sighting: Sighting) -> Self {
        SightingBody {
            uuid: sighting.id,
            info: sighting.info.into(),
            created_at: sighting.created_at,
            updated_at: sighting.updated_at,
            deleted_at: sighting.deleted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_body_distinguishes_absent_null_and_empty() {
        let body: SightingUpdateBody = serde_json::from_value(json!({
            "color": "",
            "sound": null
        }))
        .unwrap();

        assert_eq!(body.color.as_deref(), Some(""));
        assert_eq!(body.sound, None);
        assert_eq!(body.location, None);
    }

    #[test]
    fn sighting_body_omits_absent_optionals() {
        let sighting = Sighting::new(
            "id-1".to_string(),
            SightingInfo::new("Area51", "lights"),
            Utc::now(),
        );

        let value = serde_json::to_value(SightingBody::from(sighting)).unwrap();

        assert_eq!(value["uuid"], "id-1");
        assert_eq!(value["info"]["location"], "Area51");
        assert!(value["info"].get("color").is_none());
        assert!(value.get("updated_at").is_none());
        assert!(value.get("deleted_at").is_none());
        assert!(value["created_at"].is_string());
    }

    #[test]
    fn create_request_without_info_parses_as_none() {
        let req: CreateRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.info.is_none());
    }
}
