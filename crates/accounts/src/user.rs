//! User profile and session records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ecocart_core::UserId;

/// A storefront user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// The persisted user-session record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub user: UserProfile,
    pub logged_in_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn started_now(user: UserProfile) -> Self {
        Self {
            user,
            logged_in_at: Utc::now(),
        }
    }
}
