//! Wire types for the PetFriends API
//!
//! Everything the service returns is surfaced as an [`ApiResponse`]; the
//! typed records here are parsed out of it on demand, so a scenario can
//! assert on a 403 text body just as easily as on a 200 JSON body.

use crate::error::{PetFriendsError, PetFriendsResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque token issued by `GET /api/key`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthKey {
    pub key: String,
}

impl AuthKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Extract the key from a successful `get_api_key` response
    ///
    /// # Errors
    ///
    /// Returns [`PetFriendsError::ResponseParsingError`] if the body has no
    /// string `key` field.
    pub fn from_response(response: &ApiResponse) -> PetFriendsResult<Self> {
        response.parse()
    }

    pub fn as_str(&self) -> &str {
        &self.key
    }
}

impl fmt::Debug for AuthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Show only a prefix, enough to correlate log lines
        let prefix: String = self.key.chars().take(6).collect();
        write!(f, "AuthKey({prefix}..)")
    }
}

/// Which pets `GET /api/pets` returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PetFilter {
    /// Every pet on the service
    #[default]
    All,
    /// Only pets owned by the caller
    MyPets,
}

impl PetFilter {
    /// Value sent in the `filter` query parameter
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::All => "",
            Self::MyPets => "my_pets",
        }
    }
}

impl FromStr for PetFilter {
    type Err = PetFriendsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::All),
            "my_pets" => Ok(Self::MyPets),
            other => Err(PetFriendsError::configuration_error(format!(
                "Unknown pet filter '{other}', expected '' or 'my_pets'"
            ))),
        }
    }
}

/// Editable pet attributes, as submitted on create and update
///
/// The service defines what a valid age is, so it is carried as text and
/// sent unchecked. That is what lets scenarios submit `-1` or `1000`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PetFields {
    pub name: String,
    pub animal_type: String,
    pub age: String,
}

impl PetFields {
    pub fn new(
        name: impl Into<String>,
        animal_type: impl Into<String>,
        age: impl ToString,
    ) -> Self {
        Self {
            name: name.into(),
            animal_type: animal_type.into(),
            age: age.to_string(),
        }
    }

    pub(crate) fn as_form(&self) -> [(&'static str, &str); 3] {
        [
            ("name", self.name.as_str()),
            ("animal_type", self.animal_type.as_str()),
            ("age", self.age.as_str()),
        ]
    }
}

/// A pet record as stored by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub animal_type: String,
    #[serde(deserialize_with = "string_or_number")]
    pub age: String,
    /// Data URI of the photo, empty when none was uploaded
    #[serde(default)]
    pub pet_photo: Option<String>,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl Pet {
    pub fn has_photo(&self) -> bool {
        self.pet_photo.as_deref().is_some_and(|p| !p.is_empty())
    }
}

/// Body of `GET /api/pets`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PetList {
    pub pets: Vec<Pet>,
}

/// The service reports `age` as either `"4"` or `4` depending on endpoint
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
    })
}

fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "string_or_number")] String);

    Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|Wrapper(s)| s))
}

/// Response payload: JSON when it parses, raw text otherwise
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(serde_json::Value),
    Text(String),
}

impl ResponseBody {
    /// Classify a raw payload
    pub fn from_text(raw: String) -> Self {
        match serde_json::from_str(&raw) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(raw),
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }
}

/// Status code and body of one PetFriends call
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl ApiResponse {
    pub fn new(status: u16, body: ResponseBody) -> Self {
        Self { status, body }
    }

    pub fn json(status: u16, value: serde_json::Value) -> Self {
        Self::new(status, ResponseBody::Json(value))
    }

    pub fn text(status: u16, text: impl Into<String>) -> Self {
        Self::new(status, ResponseBody::Text(text.into()))
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Top-level field of a JSON object body
    pub fn field(&self, name: &str) -> Option<&serde_json::Value> {
        self.body.as_json().and_then(|v| v.get(name))
    }

    /// Top-level field rendered as text; numbers are stringified so `age`
    /// compares equal whichever way the service encodes it
    pub fn field_text(&self, name: &str) -> Option<String> {
        match self.field(name)? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Deserialize the JSON body into a typed record
    ///
    /// # Errors
    ///
    /// Returns [`PetFriendsError::ResponseParsingError`] if the body is text
    /// or does not match `T`.
    pub fn parse<T: DeserializeOwned>(&self) -> PetFriendsResult<T> {
        match &self.body {
            ResponseBody::Json(value) => serde_json::from_value(value.clone()).map_err(|e| {
                PetFriendsError::response_parsing_error(format!(
                    "Unexpected JSON shape (status {}): {e}",
                    self.status
                ))
            }),
            ResponseBody::Text(text) => Err(PetFriendsError::response_parsing_error(format!(
                "Expected JSON body (status {}), got text: {}",
                self.status,
                truncate(text, 120)
            ))),
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{head}...")
    }
}
