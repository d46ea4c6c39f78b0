use std::env;

/// Default password assigned to every bulk-created account.
pub const DEFAULT_PASSWORD: &str = "Recharge";

// Unconfigured values still carry this marker
const PLACEHOLDER_MARKER: &str = "YOUR_";

#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub service_role_key: String,
}

impl SupabaseConfig {
    /// Lê a configuração do Supabase das variáveis de ambiente
    pub fn from_env() -> Self {
        Self {
            url: env::var("SUPABASE_URL")
                .unwrap_or_else(|_| "YOUR_SUPABASE_URL".to_string()),
            service_role_key: env::var("SUPABASE_SERVICE_ROLE_KEY")
                .unwrap_or_else(|_| "YOUR_SERVICE_ROLE_KEY".to_string()),
        }
    }

    /// Fails while either value still carries the placeholder marker.
    pub fn validate(&self) -> Result<(), String> {
        if self.url.contains(PLACEHOLDER_MARKER)
            || self.service_role_key.contains(PLACEHOLDER_MARKER)
        {
            return Err(
                "Please configure SUPABASE_URL and SUPABASE_SERVICE_ROLE_KEY\n\n\
                 You can set them as environment variables:\n\
                 \x20 export SUPABASE_URL=https://your-project.supabase.co\n\
                 \x20 export SUPABASE_SERVICE_ROLE_KEY=your-service-role-key\n\n\
                 Or run with one-line command:\n\
                 \x20 SUPABASE_URL=xxx SUPABASE_SERVICE_ROLE_KEY=xxx bulk-create-users emails.txt\n\n\
                 Get your service role key from:\n\
                 \x20 https://app.supabase.com/project/_/settings/api"
                    .to_string(),
            );
        }
        Ok(())
    }
}
