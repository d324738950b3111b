use serde::{Deserialize, Serialize};

/// User as exposed over HTTP. Missing JSON fields decode to zero values,
/// which the update path reads as "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(rename = "user_id")]
    pub id: i64,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub user_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

/// Lifecycle state of a user, stored as a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Active,
    Inactive,
    Terminated,
}

impl UserStatus {
    /// Unknown or empty codes fall back to `Inactive`.
    pub fn from_code(code: &str) -> Self {
        match code.to_lowercase().as_str() {
            "a" => Self::Active,
            "t" => Self::Terminated,
            _ => Self::Inactive,
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Self::Active => "A",
            Self::Inactive => "I",
            Self::Terminated => "T",
        }
    }
}

impl User {
    pub fn set_user_status(&mut self, status: &str) {
        self.user_status = UserStatus::from_code(status).as_code().to_string();
    }
}

/// Body returned for every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
