//! Artemis request/response bodies

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::PersonRecord;

/// Organization the imported persons are filed under
pub const ORG_INDEX_CODE: &str = "68";

/// Face library the photos are added to
pub const FACE_GROUP_INDEX_CODE: &str = "28";

/// Gender / sex code sent for every imported person (1 = male)
pub const DEFAULT_GENDER: i32 = 1;

/// Envelope code signalling success
pub const SUCCESS_CODE: &str = "0";

/// Response envelope shared by all Artemis endpoints
///
/// `code` is the service's own status and is independent of the HTTP status.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceResponse {
    #[serde(deserialize_with = "code_as_string")]
    pub code: String,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl ServiceResponse {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// `data` as an identifier string (string or number payloads)
    pub fn data_as_id(&self) -> Option<String> {
        match self.data.as_ref()? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

fn code_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number code, got {}",
            other
        ))),
    }
}

/// Body of `person/single/add`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRegistration {
    pub person_code: String,
    pub person_family_name: String,
    pub person_given_name: String,
    pub gender: i32,
    pub org_index_code: String,
    pub phone_no: String,
    pub email: String,
    pub faces: Vec<FaceData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceData {
    pub face_data: String,
}

impl PersonRegistration {
    pub fn new(person_code: String, record: &PersonRecord, face_data: Option<&str>) -> Self {
        Self {
            person_code,
            person_family_name: record.family_names(),
            person_given_name: record.given_names(),
            gender: DEFAULT_GENDER,
            org_index_code: ORG_INDEX_CODE.to_string(),
            phone_no: String::new(),
            email: String::new(),
            faces: face_data
                .map(|data| {
                    vec![FaceData {
                        face_data: data.to_string(),
                    }]
                })
                .unwrap_or_default(),
        }
    }
}

/// Body of `face/single/addition`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceAddition {
    pub person_index_code: String,
    pub face_group_index_code: String,
    pub face_info: FaceInfo,
    pub face_pic: FacePic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceInfo {
    pub person_given_name: String,
    pub person_family_name: String,
    pub sex: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacePic {
    pub face_binary_data: String,
}

impl FaceAddition {
    pub fn new(person_index_code: String, record: &PersonRecord, face_data: &str) -> Self {
        Self {
            person_index_code,
            face_group_index_code: FACE_GROUP_INDEX_CODE.to_string(),
            face_info: FaceInfo {
                person_given_name: record.given_names(),
                person_family_name: record.family_names(),
                sex: DEFAULT_GENDER,
            },
            face_pic: FacePic {
                face_binary_data: face_data.to_string(),
            },
        }
    }
}
