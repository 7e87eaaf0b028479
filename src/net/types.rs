//! Wire DTOs shared with the backend REST API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. `Role` is a closed enum
//! so an unknown label fails decoding instead of silently meaning "member".

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Account role as seeded by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Guest,
    Member,
    Staff,
    Consultant,
    Manager,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0:?}")]
pub struct RoleParseError(pub String);

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Guest => "GUEST",
            Self::Member => "MEMBER",
            Self::Staff => "STAFF",
            Self::Consultant => "CONSULTANT",
            Self::Manager => "MANAGER",
            Self::Admin => "ADMIN",
        }
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "GUEST" => Ok(Self::Guest),
            "MEMBER" => Ok(Self::Member),
            "STAFF" => Ok(Self::Staff),
            "CONSULTANT" => Ok(Self::Consultant),
            "MANAGER" => Ok(Self::Manager),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(RoleParseError(raw.to_owned())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

/// Profile of the signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend user id, when the endpoint returned one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Whether the account's email address has been verified.
    #[serde(default)]
    pub verified: bool,
}

/// Generic `{success, message, data}` envelope the backend wraps replies in.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

/// `data` payload of a successful login or registration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthPayload {
    pub token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    #[serde(default, alias = "isVerified")]
    pub verified: bool,
}

impl AuthPayload {
    /// Split into the profile and bearer token kept by the session.
    pub fn into_parts(self) -> (User, String) {
        let user = User {
            id: None,
            full_name: self.full_name,
            email: self.email,
            role: self.role,
            phone: None,
            verified: self.verified,
        };
        (user, self.token)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
    pub phone: String,
}
