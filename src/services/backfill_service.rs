use std::collections::HashSet;
use std::io::{self, Write};
use uuid::Uuid;

use crate::models::{AuthUser, NewProfile};
use crate::services::supabase_service::UserDirectory;

#[derive(Debug, Default, Clone)]
pub struct BackfillSummary {
    pub total_users: usize,
    pub existing_profiles: usize,
    pub created: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Usuários sem profile correspondente — diferença exata de conjuntos,
/// independente da ordem dos registros
pub fn repair_set<'a>(users: &'a [AuthUser], existing: &HashSet<Uuid>) -> Vec<&'a AuthUser> {
    users
        .iter()
        .filter(|user| !existing.contains(&user.id))
        .collect()
}

/// Recria os profiles que faltam para usuários auth já existentes.
///
/// Falha de listagem aborta a execução: um resultado vazio por erro de
/// fetch faria o script recriar um profile para cada usuário.
pub async fn run_backfill(directory: &dyn UserDirectory) -> Result<BackfillSummary, String> {
    println!("\n📥 Fetching all users...");
    let users = directory.list_users().await?;
    println!("   Found {} users in auth", users.len());

    println!("\n📥 Fetching existing profiles...");
    let existing = directory.list_profile_ids().await?;
    println!("   Found {} existing profiles", existing.len());

    let missing = repair_set(&users, &existing);

    let mut summary = BackfillSummary {
        total_users: users.len(),
        existing_profiles: existing.len(),
        ..Default::default()
    };

    if missing.is_empty() {
        println!("\n✅ All users already have profiles!");
        return Ok(summary);
    }

    println!("\n🔧 Need to create {} profiles...\n", missing.len());

    for (index, user) in missing.iter().enumerate() {
        let email = user.email.as_deref().unwrap_or("unknown");
        print!(
            "[{}/{}] Creating profile for: {}... ",
            index + 1,
            missing.len(),
            email
        );
        let _ = io::stdout().flush();

        let profile = match NewProfile::for_user(user) {
            Some(profile) => profile,
            None => {
                println!("⚠️  skipped (no email address)");
                log::warn!("⚠️  User {} has no email address, skipping", user.id);
                summary.skipped += 1;
                continue;
            }
        };

        match directory.create_profile(&profile).await {
            Ok(()) => {
                println!("✅");
                summary.created += 1;
            }
            Err(error) => {
                println!("❌");
                log::error!("❌ Profile creation failed for {}: {}", email, error);
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}
