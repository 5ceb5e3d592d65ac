//! Bearer token decoding
//!
//! Turns the opaque JWT handed out by the login endpoint into structured
//! claims. The signature is not verified here: the client never holds the
//! signing key, the backend validates every request it receives.
//!
//! Claims consumed from the payload:
//! - `jti` - user id (string or number)
//! - `email`, `name` - passed through to the [`User`], empty when absent
//! - `sub` - role, one of `Admin`, `Manager`, `Employee`
//! - `exp` - expiration (Unix timestamp, optional)

use std::fmt;
use std::str::FromStr;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

/// Authorization level carried by a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Manager,
    Employee,
}

impl Role {
    /// All roles, in descending privilege order
    pub const ALL: [Role; 3] = [Role::Admin, Role::Manager, Role::Employee];

    /// Literal used on the wire and in storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Employee => "Employee",
        }
    }

    /// Dashboard route a session with this role lands on
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Manager => "/manager",
            Role::Employee => "/employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| DecodeError::UnknownRole(s.to_string()))
    }
}

/// Token decoding errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("Token is not a three-part JWT")]
    Malformed,

    #[error("Token payload is not valid base64url")]
    InvalidEncoding,

    #[error("Token payload is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Token is missing the `{0}` claim")]
    MissingClaim(&'static str),

    #[error("Unknown role: {0}")]
    UnknownRole(String),
}

/// Structured view of a session token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    pub subject_id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub expires_at: Option<i64>,
}

/// Session-scoped identity shown in the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// Payload exactly as it appears in the token
#[derive(Debug, Deserialize)]
struct RawClaims {
    jti: Option<serde_json::Value>,
    email: Option<String>,
    name: Option<String>,
    sub: Option<String>,
    exp: Option<i64>,
}

impl TryFrom<RawClaims> for Claims {
    type Error = DecodeError;

    fn try_from(raw: RawClaims) -> Result<Self, Self::Error> {
        let subject_id = match raw.jti {
            Some(serde_json::Value::String(id)) if !id.is_empty() => id,
            Some(serde_json::Value::Number(id)) => id.to_string(),
            _ => return Err(DecodeError::MissingClaim("jti")),
        };
        let role = raw
            .sub
            .ok_or(DecodeError::MissingClaim("sub"))?
            .parse::<Role>()?;

        Ok(Claims {
            subject_id,
            email: raw.email.unwrap_or_default(),
            name: raw.name.unwrap_or_default(),
            role,
            expires_at: raw.exp,
        })
    }
}

/// Decode a bearer token into claims
pub fn decode(token: &str) -> Result<Claims, DecodeError> {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(DecodeError::Malformed);
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| DecodeError::InvalidEncoding)?;

    let raw: RawClaims =
        serde_json::from_slice(&bytes).map_err(|e| DecodeError::InvalidJson(e.to_string()))?;

    Claims::try_from(raw)
}

/// True iff the claims carry an expiry strictly before `now` (Unix seconds)
pub fn is_expired(claims: &Claims, now: i64) -> bool {
    claims.expires_at.is_some_and(|exp| exp < now)
}

/// Build the UI identity from decoded claims
pub fn to_user(claims: &Claims) -> User {
    User {
        user_id: claims.subject_id.clone(),
        email: claims.email.clone(),
        name: claims.name.clone(),
        role: claims.role,
    }
}
