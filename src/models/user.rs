use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Auth user as returned by the Supabase Admin API.
/// Only the fields the tools read are modeled; everything else is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub user_metadata: Option<HashMap<String, serde_json::Value>>,
}

impl AuthUser {
    /// Display name stored in the user metadata, when present
    pub fn metadata_full_name(&self) -> Option<&str> {
        self.user_metadata
            .as_ref()?
            .get("full_name")?
            .as_str()
    }
}
