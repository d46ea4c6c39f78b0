use std::io::{self, Write};
use std::time::Duration;
use uuid::Uuid;

use crate::config::DEFAULT_PASSWORD;
use crate::models::NewProfile;
use crate::services::supabase_service::UserDirectory;
use crate::utils::email_list::validate_email;

/// Pausa entre candidatos para evitar rate limiting
pub const CANDIDATE_DELAY: Duration = Duration::from_millis(500);

/// Terminal state of one candidate's provisioning attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// Rejected before any remote call
    InvalidEmail,
    /// Auth account could not be created
    UserFailed { error: String },
    /// Account exists but the profile row is missing
    ProfileWarning { user_id: Uuid, error: String },
    FullyProvisioned { user_id: Uuid },
}

impl ProvisionOutcome {
    /// The primary artifact (the account) exists
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Self::FullyProvisioned { .. } | Self::ProfileWarning { .. }
        )
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Self::ProfileWarning { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::InvalidEmail => Some("Invalid email format"),
            Self::UserFailed { error } => Some(error),
            Self::ProfileWarning { error, .. } => Some(error),
            Self::FullyProvisioned { .. } => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CandidateResult {
    pub email: String,
    pub outcome: ProvisionOutcome,
}

/// Cria a conta e o profile de um único candidato
pub async fn provision_account(directory: &dyn UserDirectory, email: &str) -> ProvisionOutcome {
    if !validate_email(email) {
        return ProvisionOutcome::InvalidEmail;
    }

    let user = match directory.create_user(email, DEFAULT_PASSWORD).await {
        Ok(user) => user,
        Err(error) => return ProvisionOutcome::UserFailed { error },
    };

    let profile = NewProfile::for_new_account(user.id, email);
    match directory.create_profile(&profile).await {
        Ok(()) => ProvisionOutcome::FullyProvisioned { user_id: user.id },
        Err(error) => {
            log::warn!(
                "⚠️  Profile creation failed for {}, but user was created",
                email
            );
            ProvisionOutcome::ProfileWarning {
                user_id: user.id,
                error,
            }
        }
    }
}

/// Processa a lista de candidatos sequencialmente, um request por vez
pub async fn run_bulk_create(
    directory: &dyn UserDirectory,
    emails: &[String],
    delay: Duration,
) -> Vec<CandidateResult> {
    println!(
        "\n🚀 Starting bulk user creation for {} email(s)...\n",
        emails.len()
    );

    let mut results = Vec::with_capacity(emails.len());

    for (index, email) in emails.iter().enumerate() {
        print!(
            "📧 [{}/{}] Creating account for: {}... ",
            index + 1,
            emails.len(),
            email
        );
        let _ = io::stdout().flush();

        let outcome = provision_account(directory, email).await;
        print_progress(email, &outcome);
        results.push(CandidateResult {
            email: email.clone(),
            outcome,
        });

        // Small delay to avoid rate limiting
        if index + 1 < emails.len() {
            tokio::time::sleep(delay).await;
        }
    }

    results
}

fn print_progress(email: &str, outcome: &ProvisionOutcome) {
    match outcome {
        ProvisionOutcome::FullyProvisioned { user_id } => {
            println!("✅ Success: {} (User ID: {}...)", email, short_id(user_id));
        }
        ProvisionOutcome::ProfileWarning { user_id, .. } => {
            println!("⚠️  Partial: {} (User ID: {}...)", email, short_id(user_id));
        }
        ProvisionOutcome::InvalidEmail | ProvisionOutcome::UserFailed { .. } => {
            println!(
                "❌ Failed: {} - {}",
                email,
                outcome.error().unwrap_or("Unknown error")
            );
        }
    }
}

fn short_id(id: &Uuid) -> String {
    id.to_string()[..8].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AuthUser;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::collections::HashSet;
    use std::sync::Mutex;

    const USER_ID: &str = "a81bc81b-dead-4e5d-abff-90865d1e13b1";

    // In-memory stand-in for the remote service
    struct FakeDirectory {
        user_error: Option<String>,
        profile_error: Option<String>,
        create_user_calls: Mutex<Vec<String>>,
        create_profile_calls: Mutex<Vec<NewProfile>>,
    }

    impl FakeDirectory {
        fn new() -> Self {
            Self {
                user_error: None,
                profile_error: None,
                create_user_calls: Mutex::new(Vec::new()),
                create_profile_calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl UserDirectory for FakeDirectory {
        async fn list_users(&self) -> Result<Vec<AuthUser>, String> {
            Ok(Vec::new())
        }

        async fn list_profile_ids(&self) -> Result<HashSet<Uuid>, String> {
            Ok(HashSet::new())
        }

        async fn create_user(&self, email: &str, _password: &str) -> Result<AuthUser, String> {
            self.create_user_calls
                .lock()
                .unwrap()
                .push(email.to_string());
            if let Some(error) = &self.user_error {
                return Err(error.clone());
            }
            Ok(AuthUser {
                id: Uuid::parse_str(USER_ID).unwrap(),
                email: Some(email.to_string()),
                created_at: Utc::now(),
                user_metadata: None,
            })
        }

        async fn create_profile(&self, profile: &NewProfile) -> Result<(), String> {
            self.create_profile_calls
                .lock()
                .unwrap()
                .push(profile.clone());
            if let Some(error) = &self.profile_error {
                return Err(error.clone());
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_invalid_email_makes_no_remote_call() {
        let fake = FakeDirectory::new();
        let outcome = provision_account(&fake, "nouser").await;
        assert_eq!(outcome, ProvisionOutcome::InvalidEmail);
        assert!(fake.create_user_calls.lock().unwrap().is_empty());
        assert!(fake.create_profile_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_user_is_user_failed() {
        let mut fake = FakeDirectory::new();
        fake.user_error = Some("User already registered".to_string());

        let outcome = provision_account(&fake, "dup@x.com").await;
        assert_eq!(
            outcome,
            ProvisionOutcome::UserFailed {
                error: "User already registered".to_string()
            }
        );
        // No profile attempt once user creation fails
        assert!(fake.create_profile_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_profile_failure_is_warning_not_total_failure() {
        let mut fake = FakeDirectory::new();
        fake.profile_error = Some("row-level security".to_string());

        let outcome = provision_account(&fake, "a@x.com").await;
        assert!(outcome.is_success());
        assert!(outcome.is_warning());
        match outcome {
            ProvisionOutcome::ProfileWarning { user_id, error } => {
                assert_eq!(user_id, Uuid::parse_str(USER_ID).unwrap());
                assert_eq!(error, "row-level security");
            }
            other => panic!("expected ProfileWarning, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_full_provisioning_links_profile_to_user() {
        let fake = FakeDirectory::new();
        let outcome = provision_account(&fake, "john.doe@x.com").await;

        assert!(matches!(outcome, ProvisionOutcome::FullyProvisioned { .. }));
        let profiles = fake.create_profile_calls.lock().unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].id, Uuid::parse_str(USER_ID).unwrap());
        assert_eq!(profiles[0].email, "john.doe@x.com");
        assert_eq!(profiles[0].full_name, "John.Doe");
    }

    #[tokio::test]
    async fn test_run_bulk_create_never_aborts() {
        let mut fake = FakeDirectory::new();
        fake.profile_error = Some("insert denied".to_string());

        let emails = vec![
            "bad-email".to_string(),
            "a@x.com".to_string(),
            "b@x.com".to_string(),
        ];
        let results = run_bulk_create(&fake, &emails, Duration::ZERO).await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].outcome, ProvisionOutcome::InvalidEmail);
        assert!(results[1].outcome.is_warning());
        assert!(results[2].outcome.is_warning());
        // Invalid candidate never reached the remote service
        assert_eq!(fake.create_user_calls.lock().unwrap().len(), 2);
    }
}
