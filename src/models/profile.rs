use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::AuthUser;

/// Trial window granted to every new profile
pub const TRIAL_PERIOD_DAYS: i64 = 14;

/// Profile row inserted into the profiles table.
/// The id always equals the owning auth user's id (one profile per user).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProfile {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub status: String,
    pub subscription_status: String,
    pub subscription_plan: String,
    pub trial_ends_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewProfile {
    /// Profile para uma conta recém-criada (bulk create).
    /// Display name derivado do prefixo do email.
    pub fn for_new_account(user_id: Uuid, email: &str) -> Self {
        let now = Utc::now();
        Self::build(user_id, email, local_part_name(email), now, now)
    }

    /// Profile para um usuário auth já existente (backfill).
    /// Prefere o full_name do user_metadata; mantém o created_at original
    /// do usuário. Retorna None para usuários sem email.
    pub fn for_user(user: &AuthUser) -> Option<Self> {
        let email = user.email.as_deref()?;
        let full_name = user
            .metadata_full_name()
            .map(str::to_string)
            .unwrap_or_else(|| local_part_name(email));
        Some(Self::build(user.id, email, full_name, user.created_at, Utc::now()))
    }

    fn build(
        id: Uuid,
        email: &str,
        full_name: String,
        created_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email: email.to_string(),
            full_name,
            status: "pending".to_string(),
            subscription_status: "trial".to_string(),
            subscription_plan: "free".to_string(),
            trial_ends_at: now + Duration::days(TRIAL_PERIOD_DAYS),
            created_at,
            updated_at: now,
        }
    }
}

/// Display name from the local part of an address: "john.doe@x.com" -> "John.Doe"
fn local_part_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    title_case(local)
}

// First letter of every alphabetic run uppercased, the rest lowercased
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
